//! Game configuration.
//!
//! All tunables live in [`GameConfig`]: window size, card geometry, grid
//! shape, and timing. The defaults reproduce the classic 380x480 board of
//! 10 pairs dealt 5 per row. Nothing here is runtime-editable once a
//! session has been built from it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Complete game configuration.
///
/// Construct with [`GameConfig::default`] and override with the builder
/// methods. Invalid combinations (a grid that does not fit the window,
/// zero pairs) are rejected with a panic at construction time - there is
/// no meaningful way to continue from a malformed config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Card width in pixels.
    pub card_width: u32,
    /// Card height in pixels.
    pub card_height: u32,
    /// Gap between adjacent cards, both axes.
    pub spacing: u32,
    /// Distance from the window edges to the first card.
    pub grid_margin: u32,
    /// Thickness of the window border frame.
    pub border_thickness: u32,
    /// Cards per grid row.
    pub cards_per_row: usize,
    /// Number of distinct pair values. Card count is twice this.
    pub pair_count: usize,
    /// How long a mismatched pair stays revealed before flipping back.
    pub flip_back_delay: Duration,
    /// Target frame rate for the loop driver.
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 380,
            window_height: 480,
            card_width: 40,
            card_height: 80,
            spacing: 20,
            grid_margin: 50,
            border_thickness: 3,
            cards_per_row: 5,
            pair_count: 10,
            flip_back_delay: Duration::from_millis(500),
            target_fps: 60,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window must be non-empty");
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set the card size.
    #[must_use]
    pub fn with_card_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Cards must be non-empty");
        self.card_width = width;
        self.card_height = height;
        self
    }

    /// Set the number of pairs on the board.
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        assert!(pairs > 0, "Must have at least 1 pair");
        self.pair_count = pairs;
        self
    }

    /// Set the number of cards per row.
    #[must_use]
    pub fn with_cards_per_row(mut self, per_row: usize) -> Self {
        assert!(per_row > 0, "Must have at least 1 card per row");
        self.cards_per_row = per_row;
        self
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay = delay;
        self
    }

    /// Set the target frame rate.
    #[must_use]
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "Frame rate must be positive");
        self.target_fps = fps;
        self
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Number of grid rows needed for the configured card count.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.card_count().div_ceil(self.cards_per_row)
    }

    /// Time budget of one frame at the target rate.
    #[must_use]
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps
    }
}
