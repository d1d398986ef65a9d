#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::linear::{jump, xorshift_matrix};
use crate::state::expect_seeds;
use crate::{BitColumnMatrix, Error, SimpleRandom, State};

/// 3-shift-register generator: y ^= y << 13; y ^= y >> 17; y ^= y << 5.
/// Period 2**32 - 1 over all nonzero states.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shr3 {
    shr3: u32,
}

impl Shr3 {
    pub const DEFAULT_SEED: u32 = 3360276411;
    pub const SHIFTS: [i32; 3] = [13, -17, 5];
    pub const PERIOD: u64 = 0xffff_ffff;

    /// Creates a new SHR3 RNG. Seed 0 would stay at 0 forever,
    /// so it is replaced with 0xffffffff.
    pub fn new(seed: u32) -> Self {
        Shr3 { shr3: if seed == 0 { 0xffff_ffff } else { seed } }
    }

    pub(crate) fn from_seed_words([seed]: [u32; 1]) -> Self {
        Self::new(seed)
    }

    /// Returns the matrix of one step over GF(2).
    pub fn matrix() -> BitColumnMatrix {
        xorshift_matrix(&Self::SHIFTS)
    }

    /// Jumps forward (if steps > 0) or backward (if steps < 0) or does nothing (if steps = 0).
    pub fn jump(&mut self, steps: i64) {
        self.shr3 = jump(&Self::matrix(), self.shr3, steps, Self::PERIOD);
    }

    /// Advances to the next state.
    #[inline]
    fn step(&mut self) {
        let mut y = self.shr3;
        y ^= y << 13;
        y ^= y >> 17;
        y ^= y << 5;
        self.shr3 = y;
    }
}

impl Default for Shr3 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl SimpleRandom for Shr3 {
    const NAME: &'static str = "SHR3";
    const SEED_COUNT: usize = 1;

    #[inline]
    fn next(&mut self) -> u32 {
        self.step();
        self.shr3
    }

    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::from_seed_words(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        State::from([self.shr3])
    }

    /// A zero word is restored as is: the generator then stays at zero,
    /// under both `next` and `seek`.
    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        let [shr3] = state.expect(Self::NAME)?;
        self.shr3 = shr3;
        Ok(())
    }

    fn seek(&mut self, steps: i64) -> Result<(), Error> {
        self.jump(steps);
        Ok(())
    }
}

crate::impl_rng_core!(Shr3, 4);

#[cfg(test)] mod tests {
    use super::*;
    use crate::testing::*;

    #[test] pub fn million() {
        let mut shr3 = Shr3::new(3360276411);
        assert_eq!(1153302609, nth_output(&mut shr3, 1_000_000));
    }

    #[test] pub fn run_tests() {
        check_generator::<Shr3>();
        check_generator_seek::<Shr3>();
    }

    #[test] pub fn zero_state() {
        let mut shr3 = Shr3::default();
        shr3.set_state(&State::from([0])).unwrap();
        let mut jumped = shr3.clone();
        jumped.seek(12345).unwrap();
        assert_eq!(0, nth_output(&mut shr3, 12345));
        assert_eq!(shr3, jumped);
        jumped.seek(-1).unwrap();
        assert_eq!(&[0], jumped.state().words());
    }

    #[test] pub fn zero_seed() {
        let mut shr3 = Shr3::try_from_seeds(&[0]).unwrap();
        assert_eq!(&[0xffff_ffff], shr3.state().words());
        assert_ne!(0, shr3.next());
    }
}
