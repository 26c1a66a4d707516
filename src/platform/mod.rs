//! Platform abstraction
//!
//! The core never talks to a window or input device directly; it goes
//! through these adapter traits. The shipped backend is a minifb window
//! (`window.rs`); tests substitute recording stubs.

pub mod window;

use std::fmt;

use crate::gfx::framebuffer::Framebuffer;
use crate::sim::state::InputState;

pub use window::VgaWindow;

/// An indexed-color display with a writable 256-entry palette.
pub trait DisplayAdapter {
    /// Attempt to enter 320x200x256 indexed-color mode.
    fn try_set_indexed_color_mode(&mut self) -> bool;

    /// Return the display to whatever mode it was in before.
    fn restore_original_mode(&mut self);

    /// Show the buffer. Blocks until the next frame slot, which is the
    /// game's only pacing mechanism.
    fn present(&mut self, frame: &Framebuffer);

    /// Write one palette register. Components are 6-bit (0..=63).
    fn write_palette_entry(&mut self, index: u8, r: u8, g: u8, b: u8);
}

/// A pointing device polled once per frame.
pub trait PointerAdapter {
    fn is_present(&self) -> bool;

    /// Current pointer state, remapped into paddle-travel coordinates.
    fn poll(&mut self) -> InputState;
}

/// Fatal conditions during startup. None of these are retried; the process
/// reports them and exits non-zero.
#[derive(Debug)]
pub enum StartupError {
    /// The window/display could not be created or put into indexed mode
    DisplayMode(String),
    /// No pointing device is available
    NoPointer,
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::DisplayMode(reason) => {
                write!(f, "unable to set 320x200x256 color mode: {reason}")
            }
            StartupError::NoPointer => write!(f, "no pointing device found"),
        }
    }
}

impl std::error::Error for StartupError {}
