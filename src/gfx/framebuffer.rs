//! Indexed-color framebuffer and drawing primitives
//!
//! A framebuffer is a flat row-major array of palette indices. Two of them
//! exist at runtime; their front/back roles exchange by `mem::swap` each
//! frame, so presenting never copies pixels.
//!
//! The unclipped primitives state their bounds as preconditions and check
//! them with `debug_assert!`; hot loops run unchecked in release. The
//! `_clipped` variants are safe to call with anything.

use crate::consts::*;
use crate::{index_of, is_onscreen};

/// Clamp a palette component into the 6-bit domain. Used only by palette math.
#[inline]
pub fn clamp_color(component: f32) -> u8 {
    component.clamp(0.0, MAX_COLOR_COMPONENT as f32) as u8
}

/// A 320x200 buffer of 8-bit palette indices.
pub struct Framebuffer {
    pixels: Vec<u8>,
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![0; SCREEN_SIZE],
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    /// Write one pixel. Precondition: (x, y) is on screen.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        debug_assert!(is_onscreen(x, y), "set_pixel off screen: ({x}, {y})");
        self.pixels[index_of(x, y)] = color;
    }

    /// Write one pixel, silently dropping off-screen coordinates.
    #[inline]
    pub fn set_pixel_clipped(&mut self, x: i32, y: i32, color: u8) {
        if !is_onscreen(x, y) {
            return;
        }
        self.set_pixel(x, y, color);
    }

    /// Fill `length` pixels along a row starting at (x, y).
    ///
    /// Precondition: the run stays inside the row. Length 0 is a no-op and
    /// length 1 degenerates to a single pixel write.
    pub fn set_run(&mut self, x: i32, y: i32, color: u8, length: i32) {
        if length == 0 {
            return;
        }
        debug_assert!(is_onscreen(x, y));
        debug_assert!(x + length - 1 <= MAX_X);

        if length == 1 {
            self.set_pixel(x, y, color);
            return;
        }
        let start = index_of(x, y);
        self.pixels[start..start + length as usize].fill(color);
    }

    /// Run fill with the start and length clamped into the row first.
    ///
    /// Tail overflow shortens the run; it never shifts the start.
    pub fn set_run_clipped(&mut self, x: i32, y: i32, color: u8, length: i32) {
        let x = x.clamp(0, MAX_X);
        let y = y.clamp(0, MAX_Y);
        let length = length.clamp(0, MAX_X - x + 1);
        self.set_run(x, y, color, length);
    }

    /// Draw a line with integer Bresenham stepping.
    ///
    /// Endpoints may lie off screen; every plot is clipped. Horizontal lines
    /// take a run-fill fast path. Endpoint order does not matter: the line
    /// is canonicalized to step the major axis in the positive direction, so
    /// both orders plot the same pixels.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u8) {
        if y1 == y2 {
            let x = x1.min(x2);
            self.set_run_clipped(x, y1, color, (x2 - x1).abs() + 1);
            return;
        }

        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();

        // Canonical direction: positive along the major axis.
        let (x1, y1, x2, y2) = if (dx > dy && x1 > x2) || (dx <= dy && y1 > y2) {
            (x2, y2, x1, y1)
        } else {
            (x1, y1, x2, y2)
        };

        let xinc = if x1 > x2 { -1 } else { 1 };
        let yinc = if y1 > y2 { -1 } else { 1 };
        let two_dx = dx + dx;
        let two_dy = dy + dy;

        let mut x = x1;
        let mut y = y1;
        let mut error = 0;

        if dx > dy {
            for _ in 0..dx {
                self.set_pixel_clipped(x, y, color);
                x += xinc;
                error += two_dy;
                if error > dx {
                    error -= two_dx;
                    y += yinc;
                }
            }
        } else {
            for _ in 0..dy {
                self.set_pixel_clipped(x, y, color);
                y += yinc;
                error += two_dx;
                if error > dy {
                    error -= two_dy;
                    x += xinc;
                }
            }
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}
