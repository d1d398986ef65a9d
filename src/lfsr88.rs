#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::linear::Tausworthe;
use crate::state::expect_seeds;
use crate::{Error, SimpleRandom, State};

/// L'Ecuyer's maximally equidistributed combined Tausworthe generator
/// taus88 (1996): three components, output the XOR of their words.
/// Period about 2**88.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lfsr88 {
    z: [u32; 3],
}

impl Lfsr88 {
    pub const DEFAULT_SEEDS: [u32; 3] = [12345; 3];

    pub const COMPONENTS: [Tausworthe; 3] = [
        Tausworthe { q: 13, k: 19, s: 12, d: 1 },
        Tausworthe { q: 2, k: 25, s: 4, d: 3 },
        Tausworthe { q: 3, k: 11, s: 17, d: 4 },
    ];

    /// Creates a new LFSR88 RNG. Seeds below 2, 8 and 16 respectively are inverted.
    pub fn new(seed1: u32, seed2: u32, seed3: u32) -> Self {
        let [c1, c2, c3] = Self::COMPONENTS;
        Lfsr88 { z: [c1.sanitise(seed1), c2.sanitise(seed2), c3.sanitise(seed3)] }
    }

    pub(crate) fn from_seed_words([seed1, seed2, seed3]: [u32; 3]) -> Self {
        Self::new(seed1, seed2, seed3)
    }
}

impl Default for Lfsr88 {
    fn default() -> Self {
        Self::from_seed_words(Self::DEFAULT_SEEDS)
    }
}

impl SimpleRandom for Lfsr88 {
    const NAME: &'static str = "LFSR88";
    const SEED_COUNT: usize = 3;

    #[inline]
    fn next(&mut self) -> u32 {
        let [c1, c2, c3] = Self::COMPONENTS;
        self.z = [c1.step(self.z[0]), c2.step(self.z[1]), c3.step(self.z[2])];
        self.z[0] ^ self.z[1] ^ self.z[2]
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

    fn seek(&mut self, steps: i64) -> Result<(), Error> {
        for (z, component) in self.z.iter_mut().zip(Self::COMPONENTS.iter()) {
            *z = component.jump(*z, steps);
        }
        Ok(())
    }
}

crate::impl_rng_core!(Lfsr88, 12);

#[cfg(test)] mod tests {
    use super::*;
    use crate::testing::*;
    use crate::SeedableRng;

    #[test] pub fn million() {
        let mut lfsr88 = Lfsr88::new(12345, 12345, 12345);
        assert_eq!(1667269494, lfsr88.next());
        assert_eq!(&[50561216, 197504, 1616904246], lfsr88.state().words());
        assert_eq!(3639585634, nth_output(&mut lfsr88, 999_999));
        let mut lfsr88 = Lfsr88::new(0, 0, 0);
        assert_eq!(3774296834, nth_output(&mut lfsr88, 1_000_000));
    }

    #[test] pub fn run_tests() {
        check_generator::<Lfsr88>();
        check_generator_seek::<Lfsr88>();
    }

    #[test] pub fn bad_seeds() {
        assert_eq!(&[!1, !7, !15], Lfsr88::new(1, 7, 15).state().words());
        assert_eq!(&[2, 8, 16], Lfsr88::new(2, 8, 16).state().words());
        assert_eq!(Lfsr88::new(0, 0, 0), Lfsr88::from_seed([0; 12]));
    }
}
