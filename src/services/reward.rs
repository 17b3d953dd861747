// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token reward calculation for completed activities.

use crate::models::{ActivityRecord, RewardBreakdown};
use chrono::{DateTime, TimeZone, Timelike};

/// Tokens per kilometer before any bonus.
const BASE_RATE_PER_KM: f64 = 1.0;
/// Distance beyond which the long-distance bonus kicks in.
const LONG_DISTANCE_THRESHOLD_KM: f64 = 5.0;
/// Extra tokens per kilometer beyond the threshold.
const LONG_DISTANCE_RATE: f64 = 0.2;
/// Flat multiplier applied when the activity starts in a peak window.
const TIME_BONUS_MULTIPLIER: f64 = 1.15;
/// Streak bonus per consecutive day beyond the first.
const STREAK_STEP: f64 = 0.10;
/// Streak contribution is capped at +50% (a 6-day streak).
const STREAK_CAP: f64 = 0.50;

/// Morning peak window, hours [5, 7).
const MORNING_PEAK: std::ops::Range<u32> = 5..7;
/// Evening peak window, hours [18, 20).
const EVENING_PEAK: std::ops::Range<u32> = 18..20;

/// Deterministic token-reward calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewardCalculator;

impl RewardCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full reward breakdown.
    ///
    /// `started_at` should carry the user's local timezone; its hour decides
    /// the peak-window bonus. Negative distances are clamped to zero rather
    /// than rejected.
    pub fn calculate<Tz: TimeZone>(
        &self,
        distance_km: f64,
        started_at: &DateTime<Tz>,
        user_streak: u32,
    ) -> RewardBreakdown {
        let distance_km = if distance_km.is_finite() {
            distance_km.max(0.0)
        } else {
            0.0
        };

        let base_reward = base_reward(distance_km);

        let is_time_bonus_active = is_peak_hour(started_at.hour());
        let time_bonus = if is_time_bonus_active {
            base_reward * TIME_BONUS_MULTIPLIER
        } else {
            base_reward
        };

        let streak_bonus = time_bonus * streak_multiplier(user_streak);

        RewardBreakdown {
            base_reward,
            time_bonus,
            streak_bonus,
            final_reward: round2(streak_bonus),
            user_streak,
            is_time_bonus_active,
        }
    }

    /// Compute the breakdown for a completed activity record.
    pub fn calculate_for_activity(&self, activity: &ActivityRecord) -> RewardBreakdown {
        self.calculate(
            activity.distance_km,
            &activity.started_at,
            activity.user_streak,
        )
    }
}

/// Distance reward: one token per km, plus a long-distance bonus beyond
/// 5 km. Monotonic, and always at least the raw distance.
fn base_reward(distance_km: f64) -> f64 {
    let excess = (distance_km - LONG_DISTANCE_THRESHOLD_KM).max(0.0);
    distance_km * BASE_RATE_PER_KM + excess * LONG_DISTANCE_RATE
}

fn is_peak_hour(hour: u32) -> bool {
    MORNING_PEAK.contains(&hour) || EVENING_PEAK.contains(&hour)
}

/// 1.0 for streaks of 0 or 1, +10% per additional day, capped at 1.5.
fn streak_multiplier(user_streak: u32) -> f64 {
    let steps = user_streak.saturating_sub(1) as f64;
    (1.0 + steps * STREAK_STEP).min(1.0 + STREAK_CAP)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
