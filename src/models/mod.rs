// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models shared across the core engine.

pub mod activity;
pub mod place;
pub mod reward;
pub mod sample;
pub mod theme;

pub use activity::ActivityRecord;
pub use place::{ArContent, AudioGuide, Badge, Place};
pub use reward::RewardBreakdown;
pub use sample::LocationSample;
pub use theme::MovementTheme;
