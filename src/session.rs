//! A game session: one dealt board played to completion.
//!
//! [`Session`] ties the pieces together. Each frame it runs the match
//! resolver first, then the frame's input events in order:
//!
//! - quit ends the loop
//! - a pointer release is hit-tested against the board; a hit flips the
//!   card unless the guard rejects it
//!
//! The flip guard enforces the evaluation discipline: while two unmatched
//! cards are revealed and unresolved, new flips are rejected, so a third
//! card can never enter an evaluation. Once the board is solved the
//! session freezes - no click changes any state - and the scene carries
//! the solved banner until the frontend quits.

use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Layout};
use crate::core::config::GameConfig;
use crate::core::geometry::Point;
use crate::core::rng::GameRng;
use crate::frontend::InputEvent;
use crate::render::{render, Scene};
use crate::rules::{MatchResolver, SettleOutcome};

/// Whole-game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Unmatched pairs remain.
    InProgress,
    /// Every card is matched; the board is frozen.
    Solved,
}

/// What the loop driver should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// One playthrough of one board.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    board: Board,
    resolver: MatchResolver,
}

impl Session {
    /// Deal a board from the config and the RNG and start a session.
    ///
    /// Panics if the configured grid does not fit the configured window;
    /// there is no way to play a board that extends off-screen.
    #[must_use]
    pub fn new(config: GameConfig, rng: &mut GameRng) -> Self {
        let layout = Layout::from_config(&config);
        assert!(
            layout.fits(config.card_count(), config.window_width, config.window_height),
            "Card grid does not fit the window"
        );

        let board = Board::generate(config.pair_count, &layout, rng);
        let resolver = MatchResolver::new(config.flip_back_delay);
        info!(
            "session started: {} pairs, seed {}",
            config.pair_count,
            rng.seed()
        );

        Self {
            config,
            board,
            resolver,
        }
    }

    /// Start a session over an already-built board.
    ///
    /// Used for replays and tests where the layout must be known instead
    /// of shuffled. The board must match the config's card count.
    #[must_use]
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        assert_eq!(
            board.len(),
            config.card_count(),
            "Board size does not match config"
        );

        let resolver = MatchResolver::new(config.flip_back_delay);
        Self {
            config,
            board,
            resolver,
        }
    }

    /// The session's configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current whole-game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.board.is_solved() {
            GameStatus::Solved
        } else {
            GameStatus::InProgress
        }
    }

    /// Advance one frame: resolver tick, then this frame's events in order.
    ///
    /// `now` is the frame clock - time since the session's loop started.
    pub fn frame(&mut self, now: Duration, events: &[InputEvent]) -> LoopControl {
        if let Some(SettleOutcome::Matched(_)) = self.resolver.tick(&mut self.board, now) {
            if self.board.is_solved() {
                info!("board solved");
            }
        }

        for event in events {
            match event {
                InputEvent::Quit => return LoopControl::Quit,
                InputEvent::PointerReleased(point) => self.handle_pointer_release(*point),
            }
        }

        LoopControl::Continue
    }

    /// Build the scene for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        render(&self.board, &self.config, self.status())
    }

    fn handle_pointer_release(&mut self, point: Point) {
        // A solved board is frozen.
        if self.board.is_solved() {
            return;
        }

        // Two unmatched cards showing and unresolved: no third flip.
        if !self.resolver.can_flip(&self.board) {
            debug!("click at {point} rejected: evaluation in progress");
            return;
        }

        // A miss is silently ignored.
        let Some(index) = self.board.index_at_point(point) else {
            return;
        };

        let card = self.board.card_mut(index);
        if card.is_matched() {
            return;
        }

        debug!("flipping card {} (value {})", index, card.value);
        card.flip();
    }
}
