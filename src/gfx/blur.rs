//! Spatial blur compositor
//!
//! Each displayed frame is built from the previous frame's buffer through a
//! 5-tap weighted average sampled through a slight inward distortion, which
//! is what makes everything smear toward the center and decay. Both the
//! distortion remap and the weight-to-color curve are precomputed; the per
//! pixel work is four adds, two table lookups, and a store.

use crate::consts::*;
use crate::gfx::framebuffer::Framebuffer;
use crate::sim::rng::RandomTable;

/// Distortion pull factor. Tuned so remapped coordinates always keep a one
/// pixel interior margin, which lets the kernel read all four neighbors
/// without bounds checks.
const PULL: f32 = 1.03;

/// Precomputed remap and weight tables for the compositor.
pub struct BlurTables {
    /// Source x for each output x
    remap_x: Vec<usize>,
    /// Source row offset (pre-multiplied by the stride) for each output y
    remap_y: Vec<usize>,
    /// Weighted sum -> output color, with the decay divide baked in
    weights: Vec<u8>,
}

impl BlurTables {
    pub fn new() -> Self {
        let remap_x = (0..SCREEN_WIDTH as i32)
            .map(|x| remap(x, MID_X, MAX_X) as usize)
            .collect();

        let remap_y = (0..SCREEN_HEIGHT as i32)
            .map(|y| remap(y, MID_Y, MAX_Y) as usize * SCREEN_WIDTH)
            .collect();

        // One entry past the maximum possible sum of 12 * 255
        let weights = (0..(MAX_WEIGHT + 1) * NUM_COLORS)
            .map(|sum| (sum as f32 / (MAX_WEIGHT as f32 + DIM_AMOUNT)) as u8)
            .collect();

        Self {
            remap_x,
            remap_y,
            weights,
        }
    }

    /// Composite `back` into `front` through the distortion remap.
    ///
    /// Kernel: center weight 4, each cardinal neighbor weight 2, then the
    /// dim curve. When `noisy` is set, every pixel is perturbed by an offset
    /// in {-1, 0, +1} drawn from the random table.
    pub fn blur(
        &self,
        front: &mut Framebuffer,
        back: &Framebuffer,
        noisy: bool,
        rng: &mut RandomTable,
    ) {
        let src = back.as_slice();

        for y in 0..SCREEN_HEIGHT as i32 {
            let row = self.remap_y[y as usize];
            for x in 0..SCREEN_WIDTH as i32 {
                let index = row + self.remap_x[x as usize];

                let mut weighted_sum = (src[index] as usize) << 2;
                weighted_sum += (src[index + 1] as usize) << 1;
                weighted_sum += (src[index - 1] as usize) << 1;
                weighted_sum += (src[index + SCREEN_WIDTH] as usize) << 1;
                weighted_sum += (src[index - SCREEN_WIDTH] as usize) << 1;

                let mut color = self.weights[weighted_sum] as i32;
                if noisy {
                    color = (color + rng.next() % 3 - 1).clamp(0, MAX_COLOR as i32);
                }
                front.set_pixel(x, y, color as u8);
            }
        }
    }
}

impl Default for BlurTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an output coordinate to its distorted source coordinate, clamped to
/// leave the one-pixel margin the kernel needs.
fn remap(coord: i32, mid: i32, max: i32) -> i32 {
    let pulled = ((coord - mid) as f32 / PULL).round() as i32 + mid;
    pulled.clamp(1, max - 1)
}
