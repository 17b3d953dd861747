// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Movement intensity buckets used for UI theming.

use serde::{Deserialize, Serialize};

/// Discrete movement intensity, ordered low to extreme.
///
/// Drives presentation only; token math never reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MovementTheme {
    #[default]
    Low,
    Moderate,
    High,
    Extreme,
}

impl MovementTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementTheme::Low => "low",
            MovementTheme::Moderate => "moderate",
            MovementTheme::High => "high",
            MovementTheme::Extreme => "extreme",
        }
    }
}

impl std::fmt::Display for MovementTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
