// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Movement theme selection from instantaneous speed.

use crate::models::{LocationSample, MovementTheme};

/// Speed thresholds in km/h.
const MODERATE_KMH: f64 = 4.0;
const HIGH_KMH: f64 = 8.0;
const GAP_START_KMH: f64 = 12.0;
const EXTREME_KMH: f64 = 18.0;

/// Classifies the latest sample's speed into a theme bucket.
///
/// Stateful only because of the threshold-table gap: speeds in
/// [12, 18) km/h leave the theme unchanged from the previous sample.
/// That gap ships in the current product and is kept here for behavioral
/// parity.
/// TODO: confirm with product whether 12-18 km/h should map to "high".
#[derive(Debug, Clone, Default)]
pub struct ThemeSelector {
    current: MovementTheme,
}

impl ThemeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the theme from a speed in meters/second (absent = standing
    /// still) and return the resulting theme.
    pub fn update(&mut self, speed_mps: Option<f64>) -> MovementTheme {
        let kmh = speed_mps.unwrap_or(0.0) * 3.6;

        self.current = if kmh < MODERATE_KMH {
            MovementTheme::Low
        } else if kmh < HIGH_KMH {
            MovementTheme::Moderate
        } else if kmh < GAP_START_KMH {
            MovementTheme::High
        } else if kmh >= EXTREME_KMH {
            MovementTheme::Extreme
        } else {
            // 12-18 km/h: keep whatever the previous sample set
            self.current
        };

        self.current
    }

    /// Update from a full location sample.
    pub fn update_from_sample(&mut self, sample: &LocationSample) -> MovementTheme {
        self.update(sample.speed)
    }

    pub fn current(&self) -> MovementTheme {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_speed_is_low() {
        let mut selector = ThemeSelector::new();
        assert_eq!(selector.update(None), MovementTheme::Low);
    }

    #[test]
    fn test_zero_speed_is_low() {
        let mut selector = ThemeSelector::new();
        assert_eq!(selector.update(Some(0.0)), MovementTheme::Low);
    }

    #[test]
    fn test_walking_pace_is_moderate() {
        // 1.5 m/s = 5.4 km/h
        let mut selector = ThemeSelector::new();
        assert_eq!(selector.update(Some(1.5)), MovementTheme::Moderate);
    }

    #[test]
    fn test_running_pace_is_high() {
        // 2.5 m/s = 9 km/h
        let mut selector = ThemeSelector::new();
        assert_eq!(selector.update(Some(2.5)), MovementTheme::High);
    }

    #[test]
    fn test_fast_pace_is_extreme() {
        // 5 m/s = 18 km/h, right at the extreme threshold
        let mut selector = ThemeSelector::new();
        assert_eq!(selector.update(Some(5.0)), MovementTheme::Extreme);
    }

    #[test]
    fn test_gap_keeps_previous_theme() {
        // 3.5 m/s = 12.6 km/h sits in the [12, 18) gap
        let mut selector = ThemeSelector::new();
        selector.update(Some(0.0));
        assert_eq!(selector.update(Some(3.5)), MovementTheme::Low);

        selector.update(Some(5.0));
        assert_eq!(selector.current(), MovementTheme::Extreme);
        assert_eq!(selector.update(Some(3.5)), MovementTheme::Extreme);
    }

    #[test]
    fn test_gap_lower_boundary() {
        // Exactly 12 km/h (10/3 m/s) is already inside the gap
        let mut selector = ThemeSelector::new();
        selector.update(Some(2.5));
        assert_eq!(selector.update(Some(12.0 / 3.6)), MovementTheme::High);
    }
}
