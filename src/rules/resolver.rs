//! The match resolver: per-frame evaluation of revealed pairs.
//!
//! The resolver runs once per frame over the board's cards and settles
//! pairs (see the two-phase cycle on [`ResolverPhase`]):
//!
//! - fewer than two revealed, unmatched cards: nothing to do
//! - exactly two with equal values: both are settled as matched, permanently
//! - exactly two with unequal values: a deadline is armed; once it passes,
//!   every unmatched revealed card flips back face-down
//!
//! The revert pause is a deadline compared against the injected frame
//! clock, not a sleep, so input stays responsive while a mismatched pair
//! is showing. The click handler's guard ([`MatchResolver::can_flip`])
//! keeps a third card from joining an unresolved evaluation.
//!
//! Time is a `Duration` since session start, supplied by the caller each
//! frame. The resolver never reads a wall clock.

use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::board::{Board, PairValue};

/// Phase of the evaluation cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolverPhase {
    /// Fewer than two unmatched cards revealed; waiting for a pair.
    #[default]
    Idle,
    /// A mismatched pair is showing; flip it back once the deadline passes.
    RevertPending {
        /// Frame-clock instant after which the pair flips back.
        deadline: Duration,
    },
}

/// How a pair settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettleOutcome {
    /// Equal values: both cards are permanently matched.
    Matched(PairValue),
    /// Unequal values: the pair flipped back face-down.
    Reverted,
}

/// The flip/match/revert state machine.
///
/// Owns no cards, only the current phase; all card state lives on the
/// board passed into [`MatchResolver::tick`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResolver {
    phase: ResolverPhase,
    flip_back_delay: Duration,
}

impl MatchResolver {
    /// Create a resolver with the given mismatch flip-back delay.
    #[must_use]
    pub fn new(flip_back_delay: Duration) -> Self {
        Self {
            phase: ResolverPhase::Idle,
            flip_back_delay,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ResolverPhase {
        self.phase
    }

    /// May a new card be flipped right now?
    ///
    /// False while two unmatched cards are already revealed and the pair
    /// has not settled yet. This is the guard that keeps a third card out
    /// of an evaluation in progress.
    #[must_use]
    pub fn can_flip(&self, board: &Board) -> bool {
        board.revealed_unmatched().len() < 2
    }

    /// Run one evaluation step. Call once per frame, before input handling.
    ///
    /// Returns the outcome if a pair settled this frame.
    pub fn tick(&mut self, board: &mut Board, now: Duration) -> Option<SettleOutcome> {
        match self.phase {
            ResolverPhase::Idle => self.evaluate(board, now),
            ResolverPhase::RevertPending { deadline } => {
                if now < deadline {
                    return None;
                }
                board.hide_unmatched_revealed();
                self.phase = ResolverPhase::Idle;
                info!("mismatched pair flipped back");
                Some(SettleOutcome::Reverted)
            }
        }
    }

    fn evaluate(&mut self, board: &mut Board, now: Duration) -> Option<SettleOutcome> {
        let revealed = board.revealed_unmatched();
        if revealed.len() < 2 {
            return None;
        }
        // The click-handler guard keeps this at exactly two.
        debug_assert_eq!(revealed.len(), 2, "third card revealed mid-evaluation");

        let (first, second) = (revealed[0], revealed[1]);
        let value = board.card(first).value;

        if value == board.card(second).value {
            board.card_mut(first).settle_matched();
            board.card_mut(second).settle_matched();
            info!("pair {value} matched (cards {first} and {second})");
            Some(SettleOutcome::Matched(value))
        } else {
            self.phase = ResolverPhase::RevertPending {
                deadline: now + self.flip_back_delay,
            };
            None
        }
    }
}
