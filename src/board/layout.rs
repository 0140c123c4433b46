//! Grid layout: mapping deal order to screen rectangles.
//!
//! Card positions are a pure function of the grid index and the layout
//! constants, so the same index always lands on the same cell and cells
//! never overlap (the spacing keeps a gap between closed-interval hit
//! boxes of neighbouring cards).

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::geometry::Rect;

/// Layout constants for the card grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    margin: u32,
    card_width: u32,
    card_height: u32,
    spacing: u32,
    cards_per_row: usize,
}

impl Layout {
    /// Build the layout from a game configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        assert!(config.spacing > 0, "Spacing must keep cells apart");
        Self {
            margin: config.grid_margin,
            card_width: config.card_width,
            card_height: config.card_height,
            spacing: config.spacing,
            cards_per_row: config.cards_per_row,
        }
    }

    /// Screen rectangle of the cell at the given grid index.
    #[must_use]
    pub fn cell_rect(&self, grid_index: usize) -> Rect {
        let row = grid_index / self.cards_per_row;
        let col = grid_index % self.cards_per_row;

        let x = self.margin + col as u32 * (self.card_width + self.spacing);
        let y = self.margin + row as u32 * (self.card_height + self.spacing);

        Rect::new(x as i32, y as i32, self.card_width, self.card_height)
    }

    /// Total pixel extent of a grid of `card_count` cells, margin included
    /// on all four sides.
    #[must_use]
    pub fn grid_extent(&self, card_count: usize) -> (u32, u32) {
        let rows = card_count.div_ceil(self.cards_per_row) as u32;
        let cols = self.cards_per_row.min(card_count) as u32;

        let width = 2 * self.margin + cols * self.card_width + (cols - 1) * self.spacing;
        let height = 2 * self.margin + rows * self.card_height + (rows - 1) * self.spacing;
        (width, height)
    }

    /// Does a grid of `card_count` cells fit inside the configured window?
    #[must_use]
    pub fn fits(&self, card_count: usize, window_width: u32, window_height: u32) -> bool {
        let (width, height) = self.grid_extent(card_count);
        width <= window_width && height <= window_height
    }
}
