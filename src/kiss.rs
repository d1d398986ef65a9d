use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::state::expect_seeds;
use crate::{Cong, Error, Mwc, Shr3, SimpleRandom, State};

/// "Keep It Simple Stupid" combination of MWC, Cong and SHR3:
/// output ((MWC ^ CONG) + SHR3). Period about 2**123.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Kiss {
    mwc: Mwc,
    cong: Cong,
    shr3: Shr3,
}

impl Kiss {
    pub const DEFAULT_SEEDS: [u32; 4] = [2247183469, 99545079, 3269400377, 3950144837];

    /// Creates a new KISS RNG. Bad seeds of the MWC and SHR3 parts are replaced.
    pub fn new(seed_mwc_upper: u32, seed_mwc_lower: u32, seed_cong: u32, seed_shr3: u32) -> Self {
        Kiss {
            mwc: Mwc::new(seed_mwc_upper, seed_mwc_lower),
            cong: Cong::new(seed_cong),
            shr3: Shr3::new(seed_shr3),
        }
    }

    pub(crate) fn from_seed_words([mwc_upper, mwc_lower, cong, shr3]: [u32; 4]) -> Self {
        Self::new(mwc_upper, mwc_lower, cong, shr3)
    }

    /// Jumps forward (if steps > 0) or backward (if steps < 0) or does nothing (if steps = 0).
    pub fn jump(&mut self, steps: i64) {
        self.mwc.jump(steps);
        self.cong.jump(steps);
        self.shr3.jump(steps);
    }
}

impl Default for Kiss {
    fn default() -> Self {
        Self::from_seed_words(Self::DEFAULT_SEEDS)
    }
}

impl SimpleRandom for Kiss {
    const NAME: &'static str = "KISS";
    const SEED_COUNT: usize = 4;

    #[wrappit] #[inline]
    fn next(&mut self) -> u32 {
        let mwc = self.mwc.next();
        let cong = self.cong.next();
        let shr3 = self.shr3.next();
        (mwc ^ cong) + shr3
    }

    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::from_seed_words(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        let mwc = self.mwc.state();
        State::from([mwc.words()[0], mwc.words()[1], self.cong.state().words()[0], self.shr3.state().words()[0]])
    }

    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        let [mwc_upper, mwc_lower, cong, shr3] = state.expect(Self::NAME)?;
        self.mwc.set_state(&State::from([mwc_upper, mwc_lower]))?;
        self.cong.set_state(&State::from([cong]))?;
        self.shr3.set_state(&State::from([shr3]))
    }

    fn seek(&mut self, steps: i64) -> Result<(), Error> {
        self.jump(steps);
        Ok(())
    }
}

crate::impl_rng_core!(Kiss, 16);
