//! Core types: configuration, geometry, and RNG.

pub mod config;
pub mod geometry;
pub mod rng;

pub use config::GameConfig;
pub use geometry::{Point, Rect};
pub use rng::{GameRng, GameRngState};
