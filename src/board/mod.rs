//! The board: the full set of cards and queries over them.
//!
//! A board is dealt once per session and is structurally immutable
//! afterwards; only the face/matched state of individual cards changes.
//! Invariants established by [`Board::generate`]:
//!
//! - card count is `2 * pair_count`
//! - every pair value appears in exactly two cards
//! - grid indices are the contiguous range `0..card_count`

pub mod card;
pub mod layout;

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::geometry::Point;
use crate::core::rng::GameRng;

pub use card::{Card, FaceState, PairValue};
pub use layout::Layout;

/// Scratch list of card indices. At most two cards are ever revealed and
/// unmatched at once, so this stays on the stack in the well-formed case.
pub type CardIndices = SmallVec<[usize; 2]>;

/// The full set of cards, indexed by grid index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Deal a new board: `pair_count` distinct values, each duplicated,
    /// shuffled uniformly, one card per grid cell.
    #[must_use]
    pub fn generate(pair_count: usize, layout: &Layout, rng: &mut GameRng) -> Self {
        assert!(pair_count > 0, "Must have at least 1 pair");
        assert!(
            pair_count <= u16::MAX as usize,
            "Pair count exceeds value range"
        );

        let mut values: Vec<PairValue> = (0..pair_count as u16)
            .chain(0..pair_count as u16)
            .map(PairValue::new)
            .collect();
        rng.shuffle(&mut values);

        let cards = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| Card::new(value, index, layout.cell_rect(index)))
            .collect();

        Self { cards }
    }

    /// Build a board from pre-made cards, checking the deal invariants:
    /// even card count, contiguous grid indices, every value on exactly
    /// two cards.
    ///
    /// This is how replays and tests construct a known layout instead of
    /// shuffling one.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        assert!(!cards.is_empty(), "Board must have cards");
        assert!(cards.len() % 2 == 0, "Card count must be even");

        let mut counts: std::collections::HashMap<PairValue, usize> = std::collections::HashMap::new();
        for (index, card) in cards.iter().enumerate() {
            assert_eq!(card.grid_index, index, "Grid indices must be contiguous");
            *counts.entry(card.value).or_default() += 1;
        }
        for (value, count) in counts {
            assert_eq!(count, 2, "Value {value} must appear exactly twice");
        }

        Self { cards }
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A dealt board is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a grid index.
    #[must_use]
    pub fn card(&self, index: usize) -> &Card {
        &self.cards[index]
    }

    /// Mutable card at a grid index.
    pub fn card_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }

    /// Iterate over all cards in grid order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Grid index of the first card containing the point, or `None` if the
    /// point misses every card.
    ///
    /// Linear scan in grid order. First hit wins; the layout guarantees
    /// cells never overlap, so at most one card can match anyway.
    #[must_use]
    pub fn index_at_point(&self, point: Point) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.contains_point(point))
    }

    /// Card containing the point, or `None` on a miss.
    #[must_use]
    pub fn card_at_point(&self, point: Point) -> Option<&Card> {
        self.index_at_point(point).map(|index| &self.cards[index])
    }

    /// Indices of cards that are revealed but not yet matched, in grid
    /// order. These are the cards an evaluation cycle operates on.
    #[must_use]
    pub fn revealed_unmatched(&self) -> CardIndices {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_revealed() && !card.is_matched())
            .map(|(index, _)| index)
            .collect()
    }

    /// Flip every revealed, unmatched card back face-down. Matched cards
    /// are exempt; [`Card::hide`] refuses them regardless.
    pub fn hide_unmatched_revealed(&mut self) {
        for card in &mut self.cards {
            if card.is_revealed() && !card.is_matched() {
                debug!("hiding card {} (value {})", card.grid_index, card.value);
                card.hide();
            }
        }
    }

    /// Is every card matched? Terminal condition for the whole game.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    fn deal(pair_count: usize, seed: u64) -> Board {
        let config = GameConfig::default().with_pair_count(pair_count);
        let layout = Layout::from_config(&config);
        Board::generate(pair_count, &layout, &mut GameRng::new(seed))
    }

    #[test]
    fn test_generate_card_count() {
        assert_eq!(deal(10, 42).len(), 20);
        assert_eq!(deal(1, 42).len(), 2);
    }

    #[test]
    fn test_generate_pair_property() {
        let board = deal(10, 42);

        for value in 0..10u16 {
            let count = board
                .cards()
                .filter(|card| card.value == PairValue::new(value))
                .count();
            assert_eq!(count, 2, "value {value} should appear exactly twice");
        }
    }

    #[test]
    fn test_generate_contiguous_indices() {
        let board = deal(10, 42);
        for (i, card) in board.cards().enumerate() {
            assert_eq!(card.grid_index, i);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(deal(10, 7), deal(10, 7));
    }

    #[test]
    fn test_index_at_point() {
        let board = deal(10, 42);

        // Top-left corner of the first cell.
        assert_eq!(board.index_at_point(Point::new(50, 50)), Some(0));
        // Gap between the first two cells.
        assert_eq!(board.index_at_point(Point::new(100, 60)), None);
        // Outside the grid entirely.
        assert_eq!(board.index_at_point(Point::new(0, 0)), None);
    }

    #[test]
    fn test_revealed_unmatched() {
        let mut board = deal(10, 42);
        assert!(board.revealed_unmatched().is_empty());

        board.card_mut(3).flip();
        board.card_mut(7).flip();
        assert_eq!(board.revealed_unmatched().as_slice(), &[3, 7]);

        board.card_mut(3).settle_matched();
        assert_eq!(board.revealed_unmatched().as_slice(), &[7]);
    }

    #[test]
    fn test_hide_unmatched_revealed_spares_matched() {
        let mut board = deal(10, 42);
        board.card_mut(0).settle_matched();
        board.card_mut(1).flip();

        board.hide_unmatched_revealed();

        assert!(board.card(0).is_revealed());
        assert!(!board.card(1).is_revealed());
    }

    #[test]
    fn test_is_solved() {
        let mut board = deal(2, 42);
        assert!(!board.is_solved());

        for index in 0..board.len() {
            board.card_mut(index).settle_matched();
        }
        assert!(board.is_solved());
    }
}
