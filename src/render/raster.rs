//! Software rasterizer: executes a [`Scene`] into an RGBA frame buffer.
//!
//! This is the only drawing code in the crate. The windowed frontend hands
//! it the `pixels` frame; tests hand it a plain `Vec<u8>`. Everything is
//! clipped against the buffer, so a command that hangs off the edge fills
//! the visible part and ignores the rest.
//!
//! Text uses a built-in 5x7 glyph set covering the digits and the letters
//! of the solved banner. Characters outside the set render as blanks.

use crate::core::geometry::{Point, Rect};

use super::{Color, DrawCmd, Scene};

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Glyph cell width in font units.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font units.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal gap between glyphs, in font units.
const GLYPH_GAP: u32 = 1;

/// Execute every command of a scene into an RGBA buffer.
///
/// The buffer must be `scene.width * scene.height` pixels.
pub fn draw_scene(frame: &mut [u8], scene: &Scene) {
    debug_assert_eq!(
        frame.len(),
        (scene.width * scene.height) as usize * BYTES_PER_PIXEL
    );

    for cmd in &scene.cmds {
        match cmd {
            DrawCmd::Clear(color) => clear(frame, *color),
            DrawCmd::FillRect { rect, color } => {
                fill_rect(frame, scene.width, scene.height, *rect, *color);
            }
            DrawCmd::Text {
                text,
                center,
                color,
                scale,
            } => {
                draw_text_centered(
                    frame,
                    scene.width,
                    scene.height,
                    text,
                    *center,
                    *color,
                    *scale,
                );
            }
        }
    }
}

/// Fill the whole buffer with one color.
pub fn clear(frame: &mut [u8], color: Color) {
    for pixel in frame.chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
    }
}

/// Fill a rectangle, clipped against the buffer.
pub fn fill_rect(frame: &mut [u8], width: u32, height: u32, rect: Rect, color: Color) {
    let x0 = rect.x.max(0) as u32;
    let y0 = rect.y.max(0) as u32;
    let x1 = (rect.x + rect.width as i32).clamp(0, width as i32) as u32;
    let y1 = (rect.y + rect.height as i32).clamp(0, height as i32) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            put_pixel(frame, width, x, y, color);
        }
    }
}

/// Draw text centered on a point at an integer scale, clipped.
pub fn draw_text_centered(
    frame: &mut [u8],
    width: u32,
    height: u32,
    text: &str,
    center: Point,
    color: Color,
    scale: u32,
) {
    let glyph_count = text.chars().count() as u32;
    if glyph_count == 0 {
        return;
    }

    let text_width = (glyph_count * (GLYPH_WIDTH + GLYPH_GAP) - GLYPH_GAP) * scale;
    let text_height = GLYPH_HEIGHT * scale;
    let mut pen_x = center.x - text_width as i32 / 2;
    let pen_y = center.y - text_height as i32 / 2;

    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            draw_glyph(frame, width, height, rows, pen_x, pen_y, color, scale);
        }
        pen_x += ((GLYPH_WIDTH + GLYPH_GAP) * scale) as i32;
    }
}

fn draw_glyph(
    frame: &mut [u8],
    width: u32,
    height: u32,
    rows: [u8; 7],
    origin_x: i32,
    origin_y: i32,
    color: Color,
    scale: u32,
) {
    for (row, bits) in rows.iter().copied().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (0b1_0000u8 >> col) == 0 {
                continue;
            }
            let cell = Rect::new(
                origin_x + (col * scale) as i32,
                origin_y + (row as u32 * scale) as i32,
                scale,
                scale,
            );
            fill_rect(frame, width, height, cell, color);
        }
    }
}

fn put_pixel(frame: &mut [u8], width: u32, x: u32, y: u32, color: Color) {
    let offset = (y * width + x) as usize * BYTES_PER_PIXEL;
    frame[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&[color.r, color.g, color.b, 0xff]);
}

/// 5x7 bitmap for a character, one byte per row, bit 4 leftmost.
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        _ => return None,
    };
    Some(rows)
}
