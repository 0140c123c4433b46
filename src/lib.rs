//! # concentration
//!
//! A memory-matching card game: a grid of face-down cards, two revealed
//! per turn, matched pairs stay face-up, mismatched pairs flip back after
//! a short pause, until the whole board is solved.
//!
//! ## Design Principles
//!
//! 1. **Headless core**: all game semantics (board, match state machine,
//!    scene construction, the per-frame step) live in the library and run
//!    without a window. Presentation is a capability behind the
//!    [`frontend::Frontend`] trait; the windowed binary is a thin `winit`
//!    + `pixels` shell behind the `gui` feature.
//!
//! 2. **Injected clock**: the mismatch pause is a deadline compared
//!    against a frame clock supplied by the caller, never a sleep. Input
//!    stays responsive during the pause and tests control time exactly.
//!
//! 3. **Deterministic deals**: the only randomness is the initial
//!    shuffle, behind a seedable RNG, so every board is reproducible.
//!
//! ## Modules
//!
//! - `core`: configuration, geometry, RNG
//! - `board`: cards, grid layout, the dealt board
//! - `rules`: the flip/match/revert state machine
//! - `render`: scene construction and the software rasterizer
//! - `frontend`: the presentation trait, the loop driver, a scripted
//!   headless frontend
//! - `session`: one playthrough of one board

pub mod board;
pub mod core;
pub mod frontend;
pub mod render;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, Point, Rect};

pub use crate::board::{Board, Card, CardIndices, FaceState, Layout, PairValue};

pub use crate::rules::{MatchResolver, ResolverPhase, SettleOutcome};

pub use crate::render::{render, Color, DrawCmd, Palette, Scene};

pub use crate::frontend::{run, Frontend, HeadlessFrontend, InputEvent};

pub use crate::session::{GameStatus, LoopControl, Session};
