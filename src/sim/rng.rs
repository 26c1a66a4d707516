//! Cyclic random table
//!
//! Every stochastic choice in the game reads from a fixed table of
//! pseudo-random integers through a wrapping cursor. Drawing advances the
//! cursor; it never generates a fresh value. Two runs with the same seed and
//! the same draw order therefore see identical sequences, which the visual
//! effects rely on.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Table length. Prime, so patterns that draw in fixed strides do not line
/// up with the table period.
pub const TABLE_LEN: usize = 1021;

/// Upper bound (exclusive) of table entries, matching a 15-bit rand domain.
const ENTRY_RANGE: u32 = 0x8000;

/// A fixed table of pseudo-random integers with a wrapping cursor.
pub struct RandomTable {
    entries: [i32; TABLE_LEN],
    cursor: usize,
}

impl RandomTable {
    /// Fill the table from a seeded generator. Done once per run; starting a
    /// new game only rewinds the cursor.
    pub fn new(seed: u64) -> Self {
        let mut source = Pcg32::seed_from_u64(seed);
        let mut entries = [0i32; TABLE_LEN];
        for entry in entries.iter_mut() {
            *entry = (source.next_u32() % ENTRY_RANGE) as i32;
        }
        Self { entries, cursor: 0 }
    }

    /// Advance the cursor (wrapping) and return the entry under it.
    #[inline]
    pub fn next(&mut self) -> i32 {
        self.cursor += 1;
        if self.cursor >= TABLE_LEN {
            self.cursor = 0;
        }
        self.entries[self.cursor]
    }

    /// Rewind to the start of the table without refilling it.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }
}
