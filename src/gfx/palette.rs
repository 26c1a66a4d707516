//! Palette model and gamma-interpolation engine
//!
//! A palette is declared as a handful of index ranges, each with a start and
//! end RGB triple (6-bit components). Applying one interpolates every range
//! in gamma-expanded space and pushes the resulting ramp to the display
//! adapter, which gives perceptually even gradients where naive linear RGB
//! interpolation bunches up near the bright end.
//!
//! Adjacent ranges share their boundary index; the later range's write wins.

use crate::consts::GAMMA;
use crate::gfx::framebuffer::clamp_color;
use crate::platform::DisplayAdapter;

/// One 6-bit-per-component RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One inclusive span of palette indices with endpoint colors.
#[derive(Debug, Clone, Copy)]
pub struct PaletteRange {
    pub first_index: u8,
    pub last_index: u8,
    pub first_color: PaletteColor,
    pub last_color: PaletteColor,
}

/// A full palette: ordered ranges tiling the 0..=255 index space, plus
/// whether the blur stage should dither frames drawn with it.
pub struct PaletteDef {
    pub is_noisy: bool,
    pub ranges: &'static [PaletteRange],
}

const fn rgb(r: u8, g: u8, b: u8) -> PaletteColor {
    PaletteColor { r, g, b }
}

const fn range(
    first_index: u8,
    last_index: u8,
    first_color: PaletteColor,
    last_color: PaletteColor,
) -> PaletteRange {
    PaletteRange {
        first_index,
        last_index,
        first_color,
        last_color,
    }
}

/// The built-in palette set. One is chosen at random on game start and on
/// every paddle hit.
pub static PALETTES: &[PaletteDef] = &[
    PaletteDef {
        is_noisy: true,
        ranges: &[
            range(0, 31, rgb(0, 0, 0), rgb(0, 0, 63)),
            range(32, 63, rgb(0, 0, 63), rgb(0, 0, 0)),
            range(64, 95, rgb(0, 0, 0), rgb(63, 0, 0)),
            range(96, 127, rgb(63, 0, 0), rgb(0, 0, 0)),
            range(128, 255, rgb(0, 0, 0), rgb(63, 63, 0)),
        ],
    },
    PaletteDef {
        is_noisy: true,
        ranges: &[
            range(0, 31, rgb(0, 0, 0), rgb(21, 39, 23)),
            range(32, 63, rgb(21, 39, 23), rgb(63, 19, 0)),
            range(64, 95, rgb(63, 19, 0), rgb(32, 33, 27)),
            range(96, 127, rgb(32, 33, 27), rgb(26, 5, 18)),
            range(128, 255, rgb(26, 5, 18), rgb(63, 63, 0)),
        ],
    },
    PaletteDef {
        is_noisy: true,
        ranges: &[
            range(0, 31, rgb(0, 0, 0), rgb(21, 33, 40)),
            range(32, 63, rgb(21, 33, 40), rgb(12, 12, 20)),
            range(64, 110, rgb(12, 12, 20), rgb(43, 33, 38)),
            range(111, 127, rgb(43, 33, 38), rgb(63, 17, 3)),
            range(128, 255, rgb(63, 17, 3), rgb(54, 46, 30)),
        ],
    },
    PaletteDef {
        is_noisy: false,
        ranges: &[
            range(0, 31, rgb(0, 0, 0), rgb(57, 57, 63)),
            range(32, 63, rgb(57, 57, 63), rgb(0, 0, 0)),
            range(64, 110, rgb(0, 0, 0), rgb(63, 63, 63)),
            range(111, 127, rgb(63, 63, 63), rgb(0, 0, 0)),
            range(128, 255, rgb(0, 0, 0), rgb(63, 63, 63)),
        ],
    },
];

/// Interpolate every range of `def` and push the entries to the display.
/// Returns whether the palette is noisy.
///
/// Precondition: each range has `first_index <= last_index`.
pub fn apply_palette(def: &PaletteDef, display: &mut dyn DisplayAdapter) -> bool {
    for range in def.ranges {
        debug_assert!(range.first_index < range.last_index);
        let steps = (range.last_index - range.first_index) as f32;

        let gamma = |c: u8| (c as f32).powf(GAMMA);

        let mut working_red = gamma(range.first_color.r);
        let mut working_green = gamma(range.first_color.g);
        let mut working_blue = gamma(range.first_color.b);

        let red_inc = (gamma(range.last_color.r) - working_red) / steps;
        let green_inc = (gamma(range.last_color.g) - working_green) / steps;
        let blue_inc = (gamma(range.last_color.b) - working_blue) / steps;

        for index in range.first_index..=range.last_index {
            display.write_palette_entry(
                index,
                clamp_color(working_red.powf(1.0 / GAMMA)),
                clamp_color(working_green.powf(1.0 / GAMMA)),
                clamp_color(working_blue.powf(1.0 / GAMMA)),
            );
            working_red = (working_red + red_inc).max(0.0);
            working_green = (working_green + green_inc).max(0.0);
            working_blue = (working_blue + blue_inc).max(0.0);
        }
    }

    def.is_noisy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::Framebuffer;
    use crate::platform::DisplayAdapter;

    /// Records palette writes instead of driving hardware.
    #[derive(Default)]
    struct RecordingDisplay {
        entries: Vec<(u8, u8, u8, u8)>,
    }

    impl DisplayAdapter for RecordingDisplay {
        fn try_set_indexed_color_mode(&mut self) -> bool {
            true
        }
        fn restore_original_mode(&mut self) {}
        fn present(&mut self, _frame: &Framebuffer) {}
        fn write_palette_entry(&mut self, index: u8, r: u8, g: u8, b: u8) {
            self.entries.push((index, r, g, b));
        }
    }

    #[test]
    fn test_range_endpoints_exact_within_one_unit() {
        for def in PALETTES {
            let mut display = RecordingDisplay::default();
            apply_palette(def, &mut display);

            let mut offset = 0;
            for range in def.ranges {
                let count = (range.last_index - range.first_index) as usize + 1;
                let emitted = &display.entries[offset..offset + count];

                let (_, r, g, b) = emitted[0];
                assert!((r as i32 - range.first_color.r as i32).abs() <= 1);
                assert!((g as i32 - range.first_color.g as i32).abs() <= 1);
                assert!((b as i32 - range.first_color.b as i32).abs() <= 1);

                let (_, r, g, b) = emitted[count - 1];
                assert!((r as i32 - range.last_color.r as i32).abs() <= 1);
                assert!((g as i32 - range.last_color.g as i32).abs() <= 1);
                assert!((b as i32 - range.last_color.b as i32).abs() <= 1);

                offset += count;
            }
        }
    }

    #[test]
    fn test_exactly_declared_ranges_emitted() {
        let def = &PALETTES[0];
        let mut display = RecordingDisplay::default();
        apply_palette(def, &mut display);

        let expected: usize = def
            .ranges
            .iter()
            .map(|r| (r.last_index - r.first_index) as usize + 1)
            .sum();
        assert_eq!(display.entries.len(), expected);
        // First write of each range targets that range's first index
        assert_eq!(display.entries[0].0, 0);
    }

    #[test]
    fn test_all_components_six_bit() {
        for def in PALETTES {
            let mut display = RecordingDisplay::default();
            apply_palette(def, &mut display);
            for (_, r, g, b) in display.entries {
                assert!(r <= 63 && g <= 63 && b <= 63);
            }
        }
    }

    #[test]
    fn test_noisy_flag_passthrough() {
        let mut display = RecordingDisplay::default();
        assert!(apply_palette(&PALETTES[0], &mut display));
        assert!(!apply_palette(&PALETTES[3], &mut display));
    }

    #[test]
    fn test_gamma_interpolation_differs_from_linear() {
        // On a 0 -> 63 ramp the gamma round-trip gives 63 * t^(1/2.2),
        // which sits well above the linear midpoint
        let mut display = RecordingDisplay::default();
        apply_palette(&PALETTES[0], &mut display);
        let (_, _, _, b_mid) = display.entries[16];
        assert!(b_mid > 32, "midpoint {b_mid} looks like linear interpolation");
    }
}
