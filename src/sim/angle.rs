//! Fixed-point angles
//!
//! The nebula works in a 256-step angle domain. Sweeps are added with
//! wrapping arithmetic, so a "negative" sweep is just its modular
//! complement; drawing sweep offsets from a symmetric range around zero
//! gives particles orbiting in both directions.

use std::f32::consts::TAU;

/// Number of discrete angle steps in a full turn.
pub const NUM_ANGLES: usize = 256;

/// An angle measured in 1/256ths of a turn, with wrapping arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Angle(pub u8);

impl Angle {
    /// Build from a signed step offset; negative offsets wrap around, so
    /// `from_offset(-15)` is the same angle as 241 steps.
    #[inline]
    pub fn from_offset(steps: i32) -> Self {
        Angle(steps.rem_euclid(NUM_ANGLES as i32) as u8)
    }

    /// Advance by another angle, wrapping mod 256.
    #[inline]
    pub fn advance(&mut self, sweep: Angle) {
        self.0 = self.0.wrapping_add(sweep.0);
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Precomputed cos/sin for every representable angle.
pub struct TrigTables {
    pub cos: [f32; NUM_ANGLES],
    pub sin: [f32; NUM_ANGLES],
}

impl TrigTables {
    pub fn new() -> Self {
        let mut cos = [0.0; NUM_ANGLES];
        let mut sin = [0.0; NUM_ANGLES];
        for i in 0..NUM_ANGLES {
            let radians = TAU * i as f32 / NUM_ANGLES as f32;
            cos[i] = radians.cos();
            sin[i] = radians.sin();
        }
        Self { cos, sin }
    }
}

impl Default for TrigTables {
    fn default() -> Self {
        Self::new()
    }
}
