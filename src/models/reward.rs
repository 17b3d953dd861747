// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token-reward breakdown for a completed activity.

use serde::{Deserialize, Serialize};

/// Full reward breakdown, computed fresh per activity and never mutated.
///
/// The bonus fields are cumulative: `time_bonus` includes the base,
/// `streak_bonus` includes the time bonus. The UI shows each bonus as a
/// delta (`time_bonus - base_reward`, `streak_bonus - time_bonus`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    /// Distance-based reward before any bonus
    pub base_reward: f64,
    /// Base reward with the peak-hour bonus applied (equal to base off-peak)
    pub time_bonus: f64,
    /// Time bonus with the streak multiplier applied; full precision,
    /// used for the token ledger
    pub streak_bonus: f64,
    /// Streak bonus rounded to two decimals for display
    pub final_reward: f64,
    /// Streak value the multiplier was derived from
    pub user_streak: u32,
    /// Whether the activity started inside a peak window
    pub is_time_bonus_active: bool,
}
