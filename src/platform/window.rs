//! minifb backend
//!
//! Stands in for the VGA adapter and mouse driver: a scaled 320x200 window
//! holding the 256-entry palette, expanding indices to RGB on present, with
//! frame pacing supplied by the window's target fps.

use minifb::{Key, MouseButton, MouseMode, Scale, Window, WindowOptions};

use super::{DisplayAdapter, PointerAdapter, StartupError};
use crate::consts::*;
use crate::gfx::framebuffer::Framebuffer;
use crate::sim::state::InputState;

pub struct VgaWindow {
    window: Window,
    /// Current palette, 6-bit components
    palette: [(u8, u8, u8); NUM_COLORS],
    /// Scratch RGB buffer reused every present
    rgb: Vec<u32>,
}

impl VgaWindow {
    pub fn new(title: &str, window_scale: u32, target_fps: usize) -> Result<Self, StartupError> {
        let options = WindowOptions {
            scale: match window_scale {
                1 => Scale::X1,
                4 => Scale::X4,
                _ => Scale::X2,
            },
            ..WindowOptions::default()
        };

        let mut window = Window::new(title, SCREEN_WIDTH, SCREEN_HEIGHT, options)
            .map_err(|e| StartupError::DisplayMode(e.to_string()))?;
        window.set_target_fps(target_fps);

        Ok(Self {
            window,
            palette: [(0, 0, 0); NUM_COLORS],
            rgb: vec![0; SCREEN_SIZE],
        })
    }
}

impl DisplayAdapter for VgaWindow {
    fn try_set_indexed_color_mode(&mut self) -> bool {
        self.window.is_open()
    }

    fn restore_original_mode(&mut self) {
        // Dropping the window hands the display back to the desktop
    }

    /// Expand palette indices to RGB and push the frame. Blocks until the
    /// window's frame slot, which paces the whole game loop.
    fn present(&mut self, frame: &Framebuffer) {
        for (out, &index) in self.rgb.iter_mut().zip(frame.as_slice()) {
            let (r, g, b) = self.palette[index as usize];
            // 6-bit VGA components to 8-bit channels
            *out = ((r as u32) << 18) | ((g as u32) << 10) | ((b as u32) << 2);
        }

        if let Err(e) = self
            .window
            .update_with_buffer(&self.rgb, SCREEN_WIDTH, SCREEN_HEIGHT)
        {
            log::warn!("present failed: {e}");
        }
    }

    fn write_palette_entry(&mut self, index: u8, r: u8, g: u8, b: u8) {
        debug_assert!(r <= MAX_COLOR_COMPONENT);
        debug_assert!(g <= MAX_COLOR_COMPONENT);
        debug_assert!(b <= MAX_COLOR_COMPONENT);
        self.palette[index as usize] = (r, g, b);
    }
}

impl PointerAdapter for VgaWindow {
    fn is_present(&self) -> bool {
        // Desktop platforms always expose a pointer through the window
        true
    }

    /// Poll the mouse and remap it into paddle-travel coordinates, so the
    /// paddles can reach the arena edges without ever leaving them.
    ///
    /// Closing the window or pressing Escape reads as the quit chord.
    fn poll(&mut self) -> InputState {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            return InputState {
                x: MID_X,
                y: MID_Y,
                buttons: QUIT_BUTTONS,
            };
        }

        let (raw_x, raw_y) = self
            .window
            .get_mouse_pos(MouseMode::Clamp)
            .unwrap_or((MID_X as f32, MID_Y as f32));

        let mut buttons = 0;
        if self.window.get_mouse_down(MouseButton::Left) {
            buttons |= LMB;
        }
        if self.window.get_mouse_down(MouseButton::Right) {
            buttons |= RMB;
        }

        InputState {
            x: (raw_x * MOUSE_X_SCALE) as i32 + MOUSE_MARGIN,
            y: (raw_y * MOUSE_Y_SCALE) as i32 + MOUSE_MARGIN,
            buttons,
        }
    }
}
