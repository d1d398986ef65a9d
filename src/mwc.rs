use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::modular::mwc_jump;
use crate::state::expect_seeds;
use crate::{Error, SimpleRandom, State, MWC_LOWER_MULT, MWC_UPPER_MULT};

// Two 16-bit multiply-with-carry generators, each holding its
// carry in the high 16 bits of a 32-bit word:
//   upper = 36969 * (upper & 65535) + (upper >> 16)
//   lower = 18000 * (lower & 65535) + (lower >> 16)
// Each half is multiplication by its multiplier modulo (a * 2**16 - 1).

/// Modulus of the upper half, 36969 * 2**16 - 1.
pub const MWC_UPPER_MODULO: u32 = 0x9068ffff;
/// Modulus of the lower half, 18000 * 2**16 - 1.
pub const MWC_LOWER_MODULO: u32 = 0x464fffff;

/// Reduces a half into its cycle. Multiples of the modulus are stuck states;
/// they are replaced with the bitwise inverse, reduced again.
#[inline] fn sanitise_half(value: u32, modulo: u32) -> u32 {
    let reduced = value % modulo;
    if reduced == 0 { !value % modulo } else { reduced }
}

/// State shared by MWC and MWC2.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MwcPair {
    pub upper: u32,
    pub lower: u32,
}

impl MwcPair {
    pub fn new(seed_upper: u32, seed_lower: u32) -> Self {
        MwcPair { upper: sanitise_half(seed_upper, MWC_UPPER_MODULO), lower: sanitise_half(seed_lower, MWC_LOWER_MODULO) }
    }

    /// Advances both halves.
    #[wrappit] #[inline]
    pub fn step(&mut self) {
        self.upper = (self.upper & 0xffff) * MWC_UPPER_MULT + (self.upper >> 16);
        self.lower = (self.lower & 0xffff) * MWC_LOWER_MULT + (self.lower >> 16);
    }

    /// Restores words of a captured state. Values at or above the modulus
    /// are off the cycle that seeded generators stay on, and are rejected.
    pub fn from_words(generator: &'static str, [upper, lower]: [u32; 2]) -> Result<Self, Error> {
        for &(value, modulo) in [(upper, MWC_UPPER_MODULO), (lower, MWC_LOWER_MODULO)].iter() {
            if value >= modulo {
                return Err(Error::StateValue { generator, value: value as u64, modulo: modulo as u64 });
            }
        }
        Ok(MwcPair { upper, lower })
    }

    pub fn jump(&mut self, steps: i64) {
        self.upper = mwc_jump(self.upper as u64, MWC_UPPER_MULT as u64, 0x10000, steps) as u32;
        self.lower = mwc_jump(self.lower as u64, MWC_LOWER_MULT as u64, 0x10000, steps) as u32;
    }

    pub fn words(&self) -> [u32; 2] {
        [self.upper, self.lower]
    }
}

/// Marsaglia's 1999 MWC: two 16-bit multiply-with-carry generators,
/// output (upper << 16) + lower. Period about 2**60.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mwc {
    pair: MwcPair,
}

impl Mwc {
    pub const DEFAULT_SEEDS: [u32; 2] = [2374144069, 1046675282];

    /// Creates a new MWC RNG.
    pub fn new(seed_upper: u32, seed_lower: u32) -> Self {
        Mwc { pair: MwcPair::new(seed_upper, seed_lower) }
    }

    pub(crate) fn from_seed_words([upper, lower]: [u32; 2]) -> Self {
        Self::new(upper, lower)
    }

    /// Returns the current output.
    #[wrappit] #[inline]
    fn get(&self) -> u32 {
        (self.pair.upper << 16) + self.pair.lower
    }

    /// Jumps forward (if steps > 0) or backward (if steps < 0) or does nothing (if steps = 0).
    pub fn jump(&mut self, steps: i64) {
        self.pair.jump(steps);
    }
}

impl Default for Mwc {
    fn default() -> Self {
        Self::from_seed_words(Self::DEFAULT_SEEDS)
    }
}

impl SimpleRandom for Mwc {
    const NAME: &'static str = "MWC";
    const SEED_COUNT: usize = 2;

    #[inline]
    fn next(&mut self) -> u32 {
        self.pair.step();
        self.get()
    }

    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::from_seed_words(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        State::from(self.pair.words())
    }

    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        self.pair = MwcPair::from_words(Self::NAME, state.expect(Self::NAME)?)?;
        Ok(())
    }

    fn seek(&mut self, steps: i64) -> Result<(), Error> {
        self.jump(steps);
        Ok(())
    }
}

crate::impl_rng_core!(Mwc, 8);

/// MWC with an improved output, (upper << 16) + (upper >> 16) + lower,
/// which folds the high bits of the upper half into the low output bits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mwc2 {
    pair: MwcPair,
}

impl Mwc2 {
    pub const DEFAULT_SEEDS: [u32; 2] = [12345, 65437];

    /// Creates a new MWC2 RNG.
    pub fn new(seed_upper: u32, seed_lower: u32) -> Self {
        Mwc2 { pair: MwcPair::new(seed_upper, seed_lower) }
    }

    pub(crate) fn from_seed_words([upper, lower]: [u32; 2]) -> Self {
        Self::new(upper, lower)
    }

    #[wrappit] #[inline]
    fn get(&self) -> u32 {
        (self.pair.upper << 16) + (self.pair.upper >> 16) + self.pair.lower
    }

    /// Jumps forward (if steps > 0) or backward (if steps < 0) or does nothing (if steps = 0).
    pub fn jump(&mut self, steps: i64) {
        self.pair.jump(steps);
    }
}

impl Default for Mwc2 {
    fn default() -> Self {
        Self::from_seed_words(Self::DEFAULT_SEEDS)
    }
}

impl SimpleRandom for Mwc2 {
    const NAME: &'static str = "MWC2";
    const SEED_COUNT: usize = 2;

    #[inline]
    fn next(&mut self) -> u32 {
        self.pair.step();
        self.get()
    }

    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::from_seed_words(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        State::from(self.pair.words())
    }

    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        self.pair = MwcPair::from_words(Self::NAME, state.expect(Self::NAME)?)?;
        Ok(())
    }

    fn seek(&mut self, steps: i64) -> Result<(), Error> {
        self.jump(steps);
        Ok(())
    }
}

crate::impl_rng_core!(Mwc2, 8);

#[cfg(test)] mod tests {
    use super::*;
    use crate::testing::*;

    #[test] pub fn million() {
        let mut mwc = Mwc::new(2374144069, 1046675282);
        assert_eq!(904977562, nth_output(&mut mwc, 1_000_000));
        let mut mwc2 = Mwc2::new(12345, 65437);
        assert_eq!(55050263, nth_output(&mut mwc2, 1_000_000));
    }

    #[test] pub fn run_tests() {
        check_generator::<Mwc>();
        check_generator_seek::<Mwc>();
        check_generator::<Mwc2>();
        check_generator_seek::<Mwc2>();
    }

    #[test] pub fn bad_seeds() {
        assert_eq!(0xffff_ffff % MWC_UPPER_MODULO, sanitise_half(0, MWC_UPPER_MODULO));
        assert_eq!(!MWC_UPPER_MODULO, sanitise_half(MWC_UPPER_MODULO, MWC_UPPER_MODULO));
        assert_eq!(5, sanitise_half(MWC_UPPER_MODULO + 5, MWC_UPPER_MODULO));
        assert_eq!(0xffff_ffff % MWC_LOWER_MODULO, sanitise_half(0, MWC_LOWER_MODULO));
        assert_eq!(!(2 * MWC_LOWER_MODULO) % MWC_LOWER_MODULO, sanitise_half(2 * MWC_LOWER_MODULO, MWC_LOWER_MODULO));
        for seeds in [[0, 0], [MWC_UPPER_MODULO, 3 * MWC_LOWER_MODULO]].iter() {
            let mut mwc = Mwc::try_from_seeds(seeds).unwrap();
            let words = mwc.state();
            assert!(words.words().iter().all(|&w| w != 0));
            // A sanitised state is on the cycle, so jumps stay exact.
            let mut jumped = mwc.clone();
            jumped.jump(10);
            for _ in 0 .. 10 { mwc.next(); }
            assert_eq!(mwc, jumped);
        }
    }

    #[test] pub fn off_cycle_state() {
        let mut mwc = Mwc::default();
        let expected = Error::StateValue { generator: "MWC", value: 0xffff_ffff, modulo: MWC_UPPER_MODULO as u64 };
        assert_eq!(Err(expected), mwc.set_state(&State::from([0xffff_ffff, 1])));
        let expected = Error::StateValue { generator: "MWC2", value: MWC_LOWER_MODULO as u64, modulo: MWC_LOWER_MODULO as u64 };
        let mut mwc2 = Mwc2::default();
        assert_eq!(Err(expected), mwc2.set_state(&State::from([1, MWC_LOWER_MODULO])));
        assert_eq!(Mwc::default(), mwc);
        assert_eq!(Mwc2::default(), mwc2);

        // The largest accepted words, and zero words, seek the same as they step.
        for words in [[MWC_UPPER_MODULO - 1, MWC_LOWER_MODULO - 1], [0, 0], [0, 1]].iter() {
            mwc.set_state(&State::from(*words)).unwrap();
            let mut jumped = mwc.clone();
            jumped.seek(3).unwrap();
            for _ in 0 .. 3 { mwc.next(); }
            assert_eq!(mwc.state(), jumped.state());
            jumped.seek(-3).unwrap();
            assert_eq!(&words[..], jumped.state().words());
        }
    }

    #[test] pub fn kept_seeds() {
        assert_eq!(&Mwc::DEFAULT_SEEDS, Mwc::default().state().words());
        assert_eq!(&[MWC_UPPER_MODULO - 1, MWC_LOWER_MODULO - 1], Mwc::new(MWC_UPPER_MODULO - 1, MWC_LOWER_MODULO - 1).state().words());
    }
}
