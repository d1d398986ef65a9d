use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::state::expect_seeds;
use crate::{Error, SimpleRandom, State, CONG_CONST, CONG_MULT};

/// Congruential generator x <- 69069 * x + 12345 (mod 2**32).
/// Period 2**32. Low bits are weak; it is best used as part of KISS.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cong {
    cong: u32,
}

impl Cong {
    pub const DEFAULT_SEED: u32 = 2051391225;

    /// Creates a new Cong RNG. All seeds work equally well.
    pub fn new(seed: u32) -> Self {
        Cong { cong: seed }
    }

    pub(crate) fn from_seed_words([seed]: [u32; 1]) -> Self {
        Self::new(seed)
    }

    /// Advances to the next state.
    #[wrappit] #[inline]
    fn step(&mut self) {
        self.cong = self.cong * CONG_MULT + CONG_CONST;
    }

    /// Jumps forward (if steps > 0) or backward (if steps < 0) or does nothing (if steps = 0).
    /// The sequence wraps around, so signed steps can be interpreted as unsigned.
    pub fn jump(&mut self, steps: i64) {
        self.cong = crate::lcg::get_state(CONG_MULT, CONG_CONST, self.cong, steps as u32);
    }
}

impl Default for Cong {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl SimpleRandom for Cong {
    const NAME: &'static str = "Cong";
    const SEED_COUNT: usize = 1;

    #[inline]
    fn next(&mut self) -> u32 {
        self.step();
        self.cong
    }

    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::from_seed_words(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        State::from([self.cong])
    }

    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        let [cong] = state.expect(Self::NAME)?;
        self.cong = cong;
        Ok(())
    }

    fn seek(&mut self, steps: i64) -> Result<(), Error> {
        self.jump(steps);
        Ok(())
    }
}

crate::impl_rng_core!(Cong, 4);
