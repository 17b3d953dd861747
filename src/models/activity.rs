// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Completed-activity record supplied by the activity-tracking collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A finished activity, ready for reward calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Total distance covered, in kilometers
    pub distance_km: f64,
    /// Elapsed duration in seconds
    pub duration_seconds: u64,
    /// When the activity started (start hour decides the peak-hour bonus)
    pub started_at: DateTime<Utc>,
    /// When the activity ended
    pub ended_at: DateTime<Utc>,
    /// Consecutive qualifying days of activity, including today
    pub user_streak: u32,
}
