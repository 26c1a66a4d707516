//! Game state and core simulation types

use glam::Vec2;

use super::angle::Angle;
use super::effects::Effect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ball in play, paddles live
    Playing,
    /// Ball past the paddles, coasting out of the arena
    Losing,
    /// Score counting down toward the next game
    Lost,
}

/// One decorative particle orbiting the ball.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nebula {
    /// Distance from the center of the ball
    pub radius: f32,
    /// Current angle
    pub phase: Angle,
    /// Angle advanced each frame; wraps mod 256, so sweeps drawn from a
    /// range centered on zero orbit in both directions
    pub sweep: Angle,
}

/// Pointer input for one frame, already remapped into paddle-travel
/// coordinates by the pointer adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub x: i32,
    pub y: i32,
    pub buttons: u8,
}

impl InputState {
    /// Both buttons held together is the quit signal.
    pub fn wants_quit(&self) -> bool {
        self.buttons == QUIT_BUTTONS
    }
}

/// Everything the simulation owns. (Re)initialized on entry to Playing,
/// mutated every frame, never destroyed mid-run.
pub struct GameData {
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    /// Scalar speed magnitude; grows on every paddle hit
    pub speed: f32,

    pub score: i32,
    /// Frames until the next score decrement while Lost
    pub countdown: i32,

    pub effect: Effect,
    /// Whether the active palette dithers in the blur stage
    pub is_noisy: bool,

    pub nebula: [Nebula; NEBULA_PARTICLES],
}

impl GameData {
    /// A neutral state; `enter_play` overwrites all of it.
    pub fn new() -> Self {
        Self {
            ball_pos: Vec2::new(MID_X as f32, MID_Y as f32),
            ball_vel: Vec2::ZERO,
            speed: START_SPEED,
            score: 0,
            countdown: 0,
            effect: Effect::None,
            is_noisy: false,
            nebula: [Nebula::default(); NEBULA_PARTICLES],
        }
    }

    /// Advance ball position and nebula phases by one frame.
    pub fn apply_deltas(&mut self) {
        self.ball_pos += self.ball_vel;
        for particle in &mut self.nebula {
            particle.phase.advance(particle.sweep);
        }
    }
}

impl Default for GameData {
    fn default() -> Self {
        Self::new()
    }
}
