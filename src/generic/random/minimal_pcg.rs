//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.[^note]
//!
//! Instances are generated from a seed, and the same seed always gives the same instance.
//! So, the generator is fixed here rather than taken from the platform, as the stream for a seed must not change with the version of some dependency.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    /// A generator from a numeric seed.
    pub fn from_u64(seed: u64) -> Self {
        Self::from_seed(seed.to_le_bytes())
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        // The shift leaves 37 bits, and only the low 32 are rotated.
        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated.
        const INCREMENT: u64 = 3215534235932367344;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}
