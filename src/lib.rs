#![cfg_attr(not(test), no_std)]

//! George Marsaglia's simple random number generators
//! (Cong, SHR3, MWC, KISS, Fib, LFIB4, SWB, MWC64, KISS2) and
//! Pierre L'Ecuyer's combined Tausworthe generators (LFSR113, LFSR88),
//! reproducing the published reference sequences bit for bit.
//!
//! The generators are fast and small, but they are not cryptographically secure.
//!
//! Generators with a linear step can jump ahead or back by any number of steps
//! in logarithmic time. For the xorshift and Tausworthe generators this is done
//! with [`BitColumnMatrix`] powers over GF(2); multiply-with-carry and congruential
//! parts use modular arithmetic.

extern crate alloc;

pub mod bitcolumnmatrix;
pub mod cong;
pub mod error;
pub mod fib;
pub mod kiss;
pub mod kiss2;
pub mod lcg;
pub mod lfib4;
pub mod lfsr113;
pub mod lfsr88;
pub mod linear;
pub mod modular;
pub mod mwc;
pub mod mwc64;
pub mod shr3;
pub mod state;
pub mod swb;

#[cfg(test)] mod testing;

pub use bitcolumnmatrix::*;
pub use cong::*;
pub use error::*;
pub use fib::*;
pub use kiss::*;
pub use kiss2::*;
pub use lfib4::*;
pub use lfsr113::*;
pub use lfsr88::*;
pub use mwc::*;
pub use mwc64::*;
pub use shr3::*;
pub use state::State;
pub use swb::*;
pub use rand_core::{RngCore, SeedableRng};

// Multipliers and constants from Marsaglia's posts to sci.stat.math
// and sci.math (1999, 2003 and 2007).

/// Cong multiplier.
pub const CONG_MULT: u32 = 69069;
/// Cong increment.
pub const CONG_CONST: u32 = 12345;
/// MWC multiplier of the upper 16-bit half.
pub const MWC_UPPER_MULT: u32 = 36969;
/// MWC multiplier of the lower 16-bit half.
pub const MWC_LOWER_MULT: u32 = 18000;
/// MWC64 multiplier.
pub const MWC64_MULT: u32 = 698769069;

/// Common interface of all generators in this crate.
///
/// Seed values, states and step counts are passed in runtime-checked form,
/// so generators can be driven uniformly from persisted data.
pub trait SimpleRandom {
    /// Name of the generator, used in errors.
    const NAME: &'static str;

    /// Number of seed values taken by `seed`.
    const SEED_COUNT: usize;

    /// Advances one step and returns the 32-bit output.
    fn next(&mut self) -> u32;

    /// Reseeds the generator as if it were freshly constructed from `seeds`.
    /// Seeds known to be degenerate are replaced with working values.
    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error>;

    /// Captures the full state of the generator.
    fn state(&self) -> State;

    /// Restores a state captured with `state`. The words are taken verbatim,
    /// with no seed substitution. Multiply-with-carry words that no seeded
    /// generator can reach are rejected with `Error::StateValue`.
    fn set_state(&mut self, state: &State) -> Result<(), Error>;

    /// Jumps forward (if steps > 0) or backward (if steps < 0) or does nothing (if steps = 0).
    /// Takes logarithmic time in the number of steps.
    ///
    /// Seeking k steps lands on the same state as k calls to `next`.
    /// The LFSR113 and LFSR88 steps discard the low bits of their words
    /// (1, 3, 4 or 7 bits per component), so a backward seek from a freshly
    /// seeded state cannot restore those bits; the outputs that follow are
    /// unaffected. Once the generator has stepped, backward seeks are exact.
    /// LFIB4 and SWB cannot seek and return `Error::Unsupported`.
    fn seek(&mut self, steps: i64) -> Result<(), Error>;

    /// Creates a generator from a slice of seed values.
    fn try_from_seeds(seeds: &[u32]) -> Result<Self, Error> where Self: Sized + Default {
        let mut rng = Self::default();
        rng.seed(seeds)?;
        Ok(rng)
    }
}

// Implements RngCore and SeedableRng for a generator with 32-bit output.
// The seed bytes are read as little-endian 32-bit seed values.
macro_rules! impl_rng_core {
    ($rng:ty, $seed_bytes:expr) => {
        impl rand_core::RngCore for $rng {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                $crate::SimpleRandom::next(self)
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                rand_core::impls::next_u64_via_u32(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                rand_core::impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl rand_core::SeedableRng for $rng {
            type Seed = [u8; $seed_bytes];

            fn from_seed(seed: Self::Seed) -> Self {
                let mut seeds = [0u32; $seed_bytes / 4];
                // Always use Little-Endian.
                rand_core::le::read_u32_into(&seed, &mut seeds);
                Self::from_seed_words(seeds)
            }
        }
    };
}

pub(crate) use impl_rng_core;
