//! Background effects
//!
//! Decorative drawing into the back buffer before the blur pass smears it.
//! One effect is active at a time, re-rolled at game start and on every
//! paddle hit. Each variant is stateless; all variation comes from the
//! random table.

use crate::consts::*;
use crate::gfx::framebuffer::Framebuffer;
use crate::sim::rng::RandomTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Dots,
    Lines,
    Waves,
}

impl Effect {
    /// Pick the next active effect.
    pub fn choose(rng: &mut RandomTable) -> Self {
        match rng.next() % 4 {
            0 => Effect::None,
            1 => Effect::Dots,
            2 => Effect::Lines,
            _ => Effect::Waves,
        }
    }

    /// Draw one frame of the effect.
    pub fn draw(self, fb: &mut Framebuffer, rng: &mut RandomTable) {
        match self {
            Effect::None => {}
            Effect::Dots => dots(fb, rng),
            Effect::Lines => lines(fb, rng),
            Effect::Waves => waves(fb, rng),
        }
    }
}

/// Eight plus-shaped blobs at random positions.
fn dots(fb: &mut Framebuffer, rng: &mut RandomTable) {
    for _ in 0..8 {
        let x = rng.next() % (SCREEN_WIDTH as i32 - 3);
        let y = rng.next() % (SCREEN_HEIGHT as i32 - 3);

        fb.set_pixel(x + 1, y, MAX_COLOR);
        fb.set_run(x, y + 1, MAX_COLOR, 3);
        fb.set_pixel(x + 1, y + 2, MAX_COLOR);
    }
}

/// One random line in a random color.
fn lines(fb: &mut Framebuffer, rng: &mut RandomTable) {
    let x1 = rng.next() % SCREEN_WIDTH as i32;
    let y1 = rng.next() % SCREEN_HEIGHT as i32;
    let x2 = rng.next() % SCREEN_WIDTH as i32;
    let y2 = rng.next() % SCREEN_HEIGHT as i32;
    let color = (rng.next() % NUM_COLORS as i32) as u8;
    fb.line(x1, y1, x2, y2, color);
}

/// A chain of segments across evenly spaced x-bands.
fn waves(fb: &mut Framebuffer, rng: &mut RandomTable) {
    let dx = SCREEN_WIDTH as i32 / WAVE_SEGMENTS;
    let mut y1 = rng.next() % 60 + 60;

    for i in 0..=WAVE_SEGMENTS {
        let y2 = rng.next() % 60 + 60;
        fb.line(i * dx, y1, i * dx + dx, y2, 128);
        y1 = y2;
    }
}
