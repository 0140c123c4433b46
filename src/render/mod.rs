//! Scene construction: turning board state into draw commands.
//!
//! [`render`] is a pure function of the board (plus config and status).
//! It emits a flat command list - background, border frame, one rect per
//! card, value text for revealed cards - that any frontend can execute.
//! The windowed binary rasterizes it with [`raster`]; tests inspect the
//! commands directly.

pub mod raster;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::config::GameConfig;
use crate::core::geometry::{Point, Rect};
use crate::session::GameStatus;

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create a color from its RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors for every element the renderer draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
    /// Face-down card back.
    pub card_back: Color,
    /// Face-up card.
    pub card_face: Color,
    /// Value text on a face-up card.
    pub card_text: Color,
    /// Solved banner text.
    pub banner_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            border: Color::WHITE,
            card_back: Color::BLUE,
            card_face: Color::WHITE,
            card_text: Color::BLACK,
            banner_text: Color::WHITE,
        }
    }
}

/// A single draw command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Fill the whole surface.
    Clear(Color),
    /// Fill a rectangle.
    FillRect { rect: Rect, color: Color },
    /// Draw text centered on a point.
    Text {
        text: String,
        center: Point,
        color: Color,
        /// Integer glyph scale factor.
        scale: u32,
    },
}

/// One frame's worth of draw commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Surface width the commands were laid out for.
    pub width: u32,
    /// Surface height the commands were laid out for.
    pub height: u32,
    pub cmds: Vec<DrawCmd>,
}

/// Build the scene for the current board state.
#[must_use]
pub fn render(board: &Board, config: &GameConfig, status: GameStatus) -> Scene {
    let palette = Palette::default();
    let mut cmds = Vec::with_capacity(board.len() * 2 + 6);

    cmds.push(DrawCmd::Clear(palette.background));
    push_borders(&mut cmds, config, palette.border);

    for card in board.cards() {
        if card.is_revealed() {
            cmds.push(DrawCmd::FillRect {
                rect: card.rect,
                color: palette.card_face,
            });
            cmds.push(DrawCmd::Text {
                text: card.value.to_string(),
                center: card.rect.center(),
                color: palette.card_text,
                scale: 2,
            });
        } else {
            cmds.push(DrawCmd::FillRect {
                rect: card.rect,
                color: palette.card_back,
            });
        }
    }

    if status == GameStatus::Solved {
        cmds.push(DrawCmd::Text {
            text: "YOU WIN".to_string(),
            center: Point::new(config.window_width as i32 / 2, config.window_height as i32 / 2),
            color: palette.banner_text,
            scale: 3,
        });
    }

    Scene {
        width: config.window_width,
        height: config.window_height,
        cmds,
    }
}

/// Four border rectangles (top, left, bottom, right) at fixed thickness.
fn push_borders(cmds: &mut Vec<DrawCmd>, config: &GameConfig, color: Color) {
    let w = config.window_width;
    let h = config.window_height;
    let t = config.border_thickness;

    let borders = [
        Rect::new(0, 0, w, t),
        Rect::new(0, 0, t, h),
        Rect::new(0, (h - t) as i32, w, t),
        Rect::new((w - t) as i32, 0, t, h),
    ];
    for rect in borders {
        cmds.push(DrawCmd::FillRect { rect, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Layout, PairValue};
    use crate::core::rng::GameRng;

    fn test_board() -> (Board, GameConfig) {
        let config = GameConfig::default();
        let layout = Layout::from_config(&config);
        let board = Board::generate(config.pair_count, &layout, &mut GameRng::new(42));
        (board, config)
    }

    fn card_rect_cmds(scene: &Scene) -> Vec<&DrawCmd> {
        // Skip the clear and the four borders.
        scene.cmds.iter().skip(5).collect()
    }

    #[test]
    fn test_scene_structure() {
        let (board, config) = test_board();
        let scene = render(&board, &config, GameStatus::InProgress);

        assert_eq!(scene.width, 380);
        assert_eq!(scene.height, 480);
        assert!(matches!(scene.cmds[0], DrawCmd::Clear(_)));

        // Four borders follow the clear.
        let borders = scene.cmds[1..5]
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::FillRect { .. }))
            .count();
        assert_eq!(borders, 4);

        // All cards hidden: one rect each, no text.
        assert_eq!(card_rect_cmds(&scene).len(), 20);
    }

    #[test]
    fn test_hidden_card_uses_back_color() {
        let (board, config) = test_board();
        let scene = render(&board, &config, GameStatus::InProgress);

        match card_rect_cmds(&scene)[0] {
            DrawCmd::FillRect { color, .. } => assert_eq!(*color, Color::BLUE),
            other => panic!("expected FillRect, got {other:?}"),
        }
    }

    #[test]
    fn test_revealed_card_draws_value_text() {
        let (mut board, config) = test_board();
        board.card_mut(0).value = PairValue::new(7);
        board.card_mut(0).flip();

        let scene = render(&board, &config, GameStatus::InProgress);
        let card0 = board.card(0);

        let has_text = scene.cmds.iter().any(|cmd| {
            matches!(
                cmd,
                DrawCmd::Text { text, center, .. }
                    if text == "7" && *center == card0.rect.center()
            )
        });
        assert!(has_text);
    }

    #[test]
    fn test_solved_banner() {
        let (board, config) = test_board();

        let in_progress = render(&board, &config, GameStatus::InProgress);
        assert!(!in_progress
            .cmds
            .iter()
            .any(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "YOU WIN")));

        let solved = render(&board, &config, GameStatus::Solved);
        assert!(solved
            .cmds
            .iter()
            .any(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "YOU WIN")));
    }
}
