#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::modular::mwc_jump;
use crate::state::expect_seeds;
use crate::{Error, SimpleRandom, State, MWC64_MULT};

/// Modulus of MWC64, 698769069 * 2**32 - 1.
pub const MWC64_MODULO: u64 = 0x29a6_5eac_ffff_ffff;

/// Marsaglia's 64-bit multiply-with-carry generator:
/// t = 698769069 * lower + upper; lower = t mod 2**32; upper = t >> 32.
/// The output is the lower word. Period about 2**60.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mwc64 {
    /// Carry.
    upper: u32,
    lower: u32,
}

impl Mwc64 {
    pub const DEFAULT_SEEDS: [u32; 2] = [7654321, 521288629];

    /// Creates a new MWC64 RNG. The combined 64-bit value is reduced modulo
    /// `MWC64_MODULO`; a multiple of the modulus is replaced with its bitwise inverse, reduced.
    pub fn new(seed_upper: u32, seed_lower: u32) -> Self {
        let value = Self::combine(seed_upper, seed_lower);
        let reduced = value % MWC64_MODULO;
        Self::split(if reduced == 0 { !value % MWC64_MODULO } else { reduced })
    }

    pub(crate) fn from_seed_words([upper, lower]: [u32; 2]) -> Self {
        Self::new(upper, lower)
    }

    #[inline]
    fn combine(upper: u32, lower: u32) -> u64 {
        ((upper as u64) << 32) | lower as u64
    }

    #[inline]
    fn split(value: u64) -> Self {
        Mwc64 { upper: (value >> 32) as u32, lower: value as u32 }
    }

    /// Advances to the next state. The product cannot overflow 64 bits.
    #[inline]
    fn step(&mut self) {
        let t = self.lower as u64 * MWC64_MULT as u64 + self.upper as u64;
        *self = Self::split(t);
    }

    /// Jumps forward (if steps > 0) or backward (if steps < 0) or does nothing (if steps = 0).
    pub fn jump(&mut self, steps: i64) {
        let value = Self::combine(self.upper, self.lower);
        *self = Self::split(mwc_jump(value, MWC64_MULT as u64, 1 << 32, steps));
    }
}

impl Default for Mwc64 {
    fn default() -> Self {
        Self::from_seed_words(Self::DEFAULT_SEEDS)
    }
}

impl SimpleRandom for Mwc64 {
    const NAME: &'static str = "MWC64";
    const SEED_COUNT: usize = 2;

    #[inline]
    fn next(&mut self) -> u32 {
        self.step();
        self.lower
    }

    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::from_seed_words(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        State::from([self.upper, self.lower])
    }

    /// Values at or above `MWC64_MODULO` are off the cycle of seeded
    /// generators and are rejected.
    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        let [upper, lower] = state.expect(Self::NAME)?;
        let value = Self::combine(upper, lower);
        if value >= MWC64_MODULO {
            return Err(Error::StateValue { generator: Self::NAME, value, modulo: MWC64_MODULO });
        }
        *self = Self::split(value);
        Ok(())
    }

    fn seek(&mut self, steps: i64) -> Result<(), Error> {
        self.jump(steps);
        Ok(())
    }
}

crate::impl_rng_core!(Mwc64, 8);
