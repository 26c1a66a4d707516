//! Digit glyphs and number rendering
//!
//! Score and countdown digits come from a `GlyphSource`: a fixed mapping
//! from digit to a 5x7 monochrome bitmap. The built-in source carries the
//! classic sprites; the abstraction exists so the bitmaps could come from a
//! data file without touching the renderer.

use crate::consts::*;
use crate::gfx::framebuffer::Framebuffer;

/// Supplies 5x7 digit bitmaps, row-major, 0 or 255 per pixel.
pub trait GlyphSource {
    fn digit(&self, digit: u8) -> &[u8; DIGIT_SIZE];
}

/// The built-in digit sprites.
pub struct BuiltinGlyphs;

impl GlyphSource for BuiltinGlyphs {
    fn digit(&self, digit: u8) -> &[u8; DIGIT_SIZE] {
        &DIGIT_SPRITES[digit as usize]
    }
}

/// Draw one digit with its full 5x7 cell, background pixels included.
fn draw_digit(fb: &mut Framebuffer, x: i32, y: i32, digit: u8, glyphs: &dyn GlyphSource) {
    let bitmap = glyphs.digit(digit);
    for row in 0..DIGIT_HEIGHT {
        for col in 0..DIGIT_WIDTH {
            fb.set_pixel(
                x + col as i32,
                y + row as i32,
                bitmap[row * DIGIT_WIDTH + col],
            );
        }
    }
}

/// Draw a non-negative number, one glyph per decimal digit.
///
/// Decomposed by repeated division from the largest power of ten a 16-bit
/// value can hold, with fixed horizontal spacing between digits.
pub fn draw_number(fb: &mut Framebuffer, x: i32, y: i32, number: i32, glyphs: &dyn GlyphSource) {
    debug_assert!(number >= 0);

    if number < 10 {
        draw_digit(fb, x, y, number as u8, glyphs);
        return;
    }

    let mut x = x;
    let mut number = number;
    let mut divisor = 10_000;
    while divisor > number {
        divisor /= 10;
    }
    while divisor > 0 {
        draw_digit(fb, x, y, (number / divisor) as u8, glyphs);
        x += DIGIT_SPACING;
        number %= divisor;
        divisor /= 10;
    }
}

const O: u8 = 0;
const X: u8 = 255;

#[rustfmt::skip]
static DIGIT_SPRITES: [[u8; DIGIT_SIZE]; 10] = [
    [O, X, X, X, O,
     X, O, O, O, X,
     X, O, O, O, X,
     X, O, O, O, X,
     X, O, O, O, X,
     X, O, O, O, X,
     O, X, X, X, O],

    [O, X, X, O, O,
     O, O, X, O, O,
     O, O, X, O, O,
     O, O, X, O, O,
     O, O, X, O, O,
     O, O, X, O, O,
     O, X, X, X, O],

    [O, X, X, X, O,
     X, O, O, O, X,
     O, O, O, O, X,
     O, O, X, X, O,
     O, X, O, O, O,
     X, O, O, O, O,
     X, X, X, X, X],

    [O, X, X, X, O,
     X, O, O, O, X,
     O, O, O, O, X,
     O, O, X, X, O,
     O, O, O, O, X,
     X, O, O, O, X,
     O, X, X, X, O],

    [X, O, O, X, O,
     X, O, O, X, O,
     X, O, O, X, O,
     X, O, O, X, O,
     X, X, X, X, X,
     O, O, O, X, O,
     O, O, O, X, O],

    [X, X, X, X, X,
     X, O, O, O, O,
     X, O, O, O, O,
     X, X, X, X, O,
     O, O, O, O, X,
     X, O, O, O, X,
     O, X, X, X, O],

    [O, X, X, X, O,
     X, O, O, O, X,
     X, O, O, O, O,
     X, X, X, X, O,
     X, O, O, O, X,
     X, O, O, O, X,
     O, X, X, X, O],

    [X, X, X, X, X,
     O, O, O, O, X,
     O, O, O, X, O,
     O, O, X, O, O,
     O, O, X, O, O,
     O, O, X, O, O,
     O, O, X, O, O],

    [O, X, X, X, O,
     X, O, O, O, X,
     X, O, O, O, X,
     O, X, X, X, O,
     X, O, O, O, X,
     X, O, O, O, X,
     O, X, X, X, O],

    [O, X, X, X, O,
     X, O, O, O, X,
     X, O, O, O, X,
     O, X, X, X, X,
     O, O, O, O, X,
     X, O, O, O, X,
     O, X, X, X, O],
];
