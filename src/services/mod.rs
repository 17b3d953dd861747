// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Core engine services.

pub mod discovery;
pub mod registry;
pub mod reward;
pub mod theme;

pub use discovery::{DiscoveryEngine, DEFAULT_COOLDOWN_SECS};
pub use registry::{PlaceRegistry, RegistryError};
pub use reward::RewardCalculator;
pub use theme::ThemeSelector;
