#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::linear::Tausworthe;
use crate::state::expect_seeds;
use crate::{Error, SimpleRandom, State};

/// L'Ecuyer's combined Tausworthe generator LFSR113 (1999):
/// four components, output the XOR of their words. Period about 2**113.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lfsr113 {
    z: [u32; 4],
}

impl Lfsr113 {
    pub const DEFAULT_SEEDS: [u32; 4] = [12345; 4];

    pub const COMPONENTS: [Tausworthe; 4] = [
        Tausworthe { q: 6, k: 13, s: 18, d: 1 },
        Tausworthe { q: 2, k: 27, s: 2, d: 3 },
        Tausworthe { q: 13, k: 21, s: 7, d: 4 },
        Tausworthe { q: 3, k: 12, s: 13, d: 7 },
    ];

    /// Creates a new LFSR113 RNG. A seed below its component's minimum
    /// (2, 8, 16, 128) is replaced with its bitwise inverse.
    pub fn new(seed1: u32, seed2: u32, seed3: u32, seed4: u32) -> Self {
        let mut z = [seed1, seed2, seed3, seed4];
        for (z, component) in z.iter_mut().zip(Self::COMPONENTS.iter()) {
            *z = component.sanitise(*z);
        }
        Lfsr113 { z }
    }

    pub(crate) fn from_seed_words([seed1, seed2, seed3, seed4]: [u32; 4]) -> Self {
        Self::new(seed1, seed2, seed3, seed4)
    }
}

impl Default for Lfsr113 {
    fn default() -> Self {
        Self::from_seed_words(Self::DEFAULT_SEEDS)
    }
}

impl SimpleRandom for Lfsr113 {
    const NAME: &'static str = "LFSR113";
    const SEED_COUNT: usize = 4;

    #[inline]
    fn next(&mut self) -> u32 {
        let mut x = 0;
        for (z, component) in self.z.iter_mut().zip(Self::COMPONENTS.iter()) {
            *z = component.step(*z);
            x ^= *z;
        }
        x
    }

    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::from_seed_words(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        State::from(self.z)
    }

    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        self.z = state.expect(Self::NAME)?;
        Ok(())
    }

    /// Each component jumps by its own matrix. Backward seeks are exact
    /// once the generator has stepped at least once after seeding.
    fn seek(&mut self, steps: i64) -> Result<(), Error> {
        for (z, component) in self.z.iter_mut().zip(Self::COMPONENTS.iter()) {
            *z = component.jump(*z, steps);
        }
        Ok(())
    }
}

crate::impl_rng_core!(Lfsr113, 16);
