//! A single card on the board.
//!
//! A card's geometry is fixed at deal time; during play only its face
//! state and matched flag change. The one invariant that matters: a
//! matched card stays revealed for the rest of the game. [`Card::hide`]
//! enforces it, so callers can sweep "hide everything revealed" over the
//! board without special-casing settled pairs.

use serde::{Deserialize, Serialize};

use crate::core::geometry::{Point, Rect};

/// Pair-matching key. Two cards share a value; that is the unit of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairValue(pub u16);

impl PairValue {
    /// Create a new pair value.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PairValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a card's value is currently visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceState {
    /// Value concealed; the card shows its back.
    #[default]
    Hidden,
    /// Value visible.
    Revealed,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The pair-matching key.
    pub value: PairValue,
    /// 0-based position in deal order.
    pub grid_index: usize,
    /// Screen rectangle, derived from `grid_index` by the layout.
    pub rect: Rect,
    /// Current face state.
    face: FaceState,
    /// Permanently settled as part of a matched pair.
    matched: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(value: PairValue, grid_index: usize, rect: Rect) -> Self {
        Self {
            value,
            grid_index,
            rect,
            face: FaceState::Hidden,
            matched: false,
        }
    }

    /// Current face state.
    #[must_use]
    pub fn face(&self) -> FaceState {
        self.face
    }

    /// Is the value currently visible?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.face == FaceState::Revealed
    }

    /// Has this card been settled as part of a matched pair?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Reveal the card. Idempotent: flipping a revealed or matched card
    /// changes nothing.
    pub fn flip(&mut self) {
        self.face = FaceState::Revealed;
    }

    /// Conceal the card again. No-op for matched cards: a settled pair
    /// never goes face-down.
    pub fn hide(&mut self) {
        if self.matched {
            return;
        }
        self.face = FaceState::Hidden;
    }

    /// Settle the card as matched. Permanent: it remains revealed and
    /// [`Card::hide`] refuses it from here on.
    pub fn settle_matched(&mut self) {
        self.face = FaceState::Revealed;
        self.matched = true;
    }

    /// Hit test: does the point fall within this card's rectangle?
    ///
    /// Closed intervals on both axes; the edges count as inside.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}
