//! Per-frame render passes
//!
//! Rendering is split around the blur: the back pass draws the background
//! effect into the buffer that will be smeared, and the front pass draws
//! crisp overlays (digits, paddles, ball nucleus, nebula) on top of the
//! composited frame. The Lost state has no back pass and shows only the
//! countdown.

use crate::consts::*;
use crate::gfx::framebuffer::Framebuffer;
use crate::gfx::glyphs::{GlyphSource, draw_number};
use crate::sim::angle::TrigTables;
use crate::sim::rng::RandomTable;
use crate::sim::state::{GameData, InputState, Phase};

/// Draw into the back buffer before the blur pass. No-op while Lost.
pub fn render_back(phase: Phase, fb: &mut Framebuffer, g: &GameData, rng: &mut RandomTable) {
    match phase {
        Phase::Playing | Phase::Losing => g.effect.draw(fb, rng),
        Phase::Lost => {}
    }
}

/// Draw the overlays onto the freshly composited front buffer.
pub fn render_front(
    phase: Phase,
    fb: &mut Framebuffer,
    g: &GameData,
    input: &InputState,
    rng: &mut RandomTable,
    trig: &TrigTables,
    glyphs: &dyn GlyphSource,
) {
    match phase {
        Phase::Playing | Phase::Losing => render_play_front(fb, g, input, rng, trig, glyphs),
        Phase::Lost => draw_number(fb, COUNTDOWN_X, COUNTDOWN_Y, g.score, glyphs),
    }
}

fn render_play_front(
    fb: &mut Framebuffer,
    g: &GameData,
    input: &InputState,
    rng: &mut RandomTable,
    trig: &TrigTables,
    glyphs: &dyn GlyphSource,
) {
    draw_number(fb, SCORE_X, SCORE_Y, g.score, glyphs);

    draw_paddles(fb, input);

    // Nucleus: short random strokes jittering around the ball
    let bx = g.ball_pos.x as i32;
    let by = g.ball_pos.y as i32;
    for _ in 0..5 {
        let x1 = bx + rng.next() % 6 - 3;
        let y1 = by + rng.next() % 6 - 3;
        let x2 = bx + rng.next() % 6 - 3;
        let y2 = by + rng.next() % 6 - 3;
        fb.line(x1, y1, x2, y2, 230);
    }

    // Nebula: points orbiting the ball
    for particle in &g.nebula {
        let x = g.ball_pos.x + particle.radius * trig.cos[particle.phase.index()];
        let y = g.ball_pos.y + particle.radius * trig.sin[particle.phase.index()];
        fb.set_pixel_clipped(x as i32, y as i32, MAX_COLOR);
    }
}

/// Four paddle line segments positioned from the pointer. The right and top
/// paddles mirror the pointer across the arena, matching the hit tests.
fn draw_paddles(fb: &mut Framebuffer, input: &InputState) {
    let mx = input.x;
    let my = input.y;

    // Top
    fb.line(
        MAX_X - (mx - HALF_PADDLE),
        PADDLE_MARGIN,
        MAX_X - (mx + HALF_PADDLE),
        PADDLE_MARGIN,
        MAX_COLOR,
    );
    // Bottom
    fb.line(
        mx - HALF_PADDLE,
        SCREEN_HEIGHT as i32 - PADDLE_MARGIN,
        mx + HALF_PADDLE,
        SCREEN_HEIGHT as i32 - PADDLE_MARGIN,
        MAX_COLOR,
    );
    // Left
    fb.line(
        PADDLE_MARGIN,
        my - HALF_PADDLE,
        PADDLE_MARGIN,
        my + HALF_PADDLE,
        MAX_COLOR,
    );
    // Right
    fb.line(
        SCREEN_WIDTH as i32 - PADDLE_MARGIN,
        MAX_Y - (my - HALF_PADDLE),
        SCREEN_WIDTH as i32 - PADDLE_MARGIN,
        MAX_Y - (my + HALF_PADDLE),
        MAX_COLOR,
    );
}
