//! Plasma Pong - a four-paddle arcade game on an indexed-color framebuffer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (random table, state machine, effects)
//! - `gfx`: Software rendering (framebuffer primitives, palettes, blur)
//! - `render`: Per-frame back/front overlay passes
//! - `platform`: Display/pointer adapter traits and the minifb backend
//!
//! The whole pipeline is single-threaded lockstep: one simulation update,
//! one blur composite, one overlay pass, one present, one buffer swap per
//! frame. The random table is advanced in a fixed call order, so a given
//! seed replays identically frame for frame.

pub mod gfx;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield width in pixels (VGA mode 13h geometry)
    pub const SCREEN_WIDTH: usize = 320;
    /// Playfield height in pixels
    pub const SCREEN_HEIGHT: usize = 200;
    pub const SCREEN_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

    pub const MAX_X: i32 = SCREEN_WIDTH as i32 - 1;
    pub const MAX_Y: i32 = SCREEN_HEIGHT as i32 - 1;
    pub const MID_X: i32 = SCREEN_WIDTH as i32 / 2;
    pub const MID_Y: i32 = SCREEN_HEIGHT as i32 / 2;

    /// Number of palette entries in indexed-color mode
    pub const NUM_COLORS: usize = 256;
    pub const MAX_COLOR: u8 = (NUM_COLORS - 1) as u8;
    /// Palette RGB components are 6-bit
    pub const MAX_COLOR_COMPONENT: u8 = 63;

    /// Ball speed at the start of a game
    pub const START_SPEED: f32 = 1.8;
    /// Speed gained on every paddle hit
    pub const SPEED_INCREMENT: f32 = 0.05;
    /// Scales the paddle-offset contribution to sideways velocity
    pub const SIDE_SPEED_FACTOR: f32 = 1.0 / 8.0;

    /// Distance from an edge at which paddle collision is tested
    pub const PADDLE_MARGIN_HIT: i32 = 13;
    /// Half the collision width of a paddle
    pub const HALF_PADDLE_HIT: i32 = 18;

    /// Distance from an edge at which paddles are drawn
    pub const PADDLE_MARGIN: i32 = 10;
    /// Half the drawn width of a paddle
    pub const HALF_PADDLE: i32 = 16;

    /// How far past the arena edge the ball travels before the game is lost
    pub const LOSS_MARGIN: f32 = 18.0;

    pub const NEBULA_PARTICLES: usize = 25;
    pub const WAVE_SEGMENTS: i32 = 10;

    /// Score display position
    pub const SCORE_X: i32 = 10;
    pub const SCORE_Y: i32 = 10;

    /// Countdown display position (roughly centered)
    pub const COUNTDOWN_X: i32 = 154;
    pub const COUNTDOWN_Y: i32 = 93;
    /// Frames between score decrements during the lost countdown
    pub const COUNTDOWN_FRAMES: i32 = 4;

    /// Blur decay tuning; the weighted sum is divided by MAX_WEIGHT plus this
    pub const DIM_AMOUNT: f32 = 0.2;
    /// Total weight of the 5-tap blur kernel (4x center + 2x each neighbor)
    pub const MAX_WEIGHT: usize = 12;
    pub const GAMMA: f32 = 2.2;

    /// Digit glyph geometry
    pub const DIGIT_WIDTH: usize = 5;
    pub const DIGIT_HEIGHT: usize = 7;
    pub const DIGIT_SIZE: usize = DIGIT_WIDTH * DIGIT_HEIGHT;
    pub const DIGIT_SPACING: i32 = 7;

    /// Pointer travel is confined so paddles never leave the arena
    pub const MOUSE_MARGIN: i32 = PADDLE_MARGIN + HALF_PADDLE;
    pub const MOUSE_X_RANGE: i32 = SCREEN_WIDTH as i32 - 2 * MOUSE_MARGIN;
    pub const MOUSE_Y_RANGE: i32 = SCREEN_HEIGHT as i32 - 2 * MOUSE_MARGIN;
    pub const MOUSE_X_SCALE: f32 = MOUSE_X_RANGE as f32 / SCREEN_WIDTH as f32;
    pub const MOUSE_Y_SCALE: f32 = MOUSE_Y_RANGE as f32 / SCREEN_HEIGHT as f32;

    /// Left mouse button bit in the pointer button mask
    pub const LMB: u8 = 1;
    /// Right mouse button bit
    pub const RMB: u8 = 2;
    /// Both buttons together quit the game
    pub const QUIT_BUTTONS: u8 = LMB | RMB;
}

/// Linear index of (x, y) in a row-major screen buffer.
///
/// Callers guarantee the coordinates are on screen.
#[inline]
pub fn index_of(x: i32, y: i32) -> usize {
    y as usize * consts::SCREEN_WIDTH + x as usize
}

/// True if (x, y) lies inside the playfield.
#[inline]
pub fn is_onscreen(x: i32, y: i32) -> bool {
    x >= 0 && x <= consts::MAX_X && y >= 0 && y <= consts::MAX_Y
}
