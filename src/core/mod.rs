//! Core engine types: shuffle RNG and configuration.

pub mod rng;
pub mod config;

pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
