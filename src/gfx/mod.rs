//! Software rendering over an indexed-color framebuffer
//!
//! Everything here draws 8-bit palette indices into flat 320x200 buffers.
//! Color only exists at the edge of the system: the palette engine pushes
//! RGB ramps to the display adapter, and the adapter expands indices when
//! presenting.

pub mod blur;
pub mod framebuffer;
pub mod glyphs;
pub mod palette;

pub use blur::BlurTables;
pub use framebuffer::{Framebuffer, clamp_color};
pub use glyphs::{BuiltinGlyphs, GlyphSource, draw_number};
pub use palette::{PALETTES, PaletteColor, PaletteDef, PaletteRange, apply_palette};
