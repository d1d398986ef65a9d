use wrapping_arithmetic::wrappit;

use crate::lfib4::{kiss_table, TABLE_SIZE};
use crate::state::expect_seeds;
use crate::{Error, Kiss, SimpleRandom, State};

/// Marsaglia's subtract-with-borrow generator x(n) = x(n-222) - x(n-237) - borrow (mod 2**32)
/// over a 256-word circular table. Period about 2**7578.
///
/// There is no jump-ahead for SWB: `seek` returns `Error::Unsupported`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Swb {
    t: [u32; TABLE_SIZE],
    c: u8,
    borrow: bool,
}

impl Swb {
    /// KISS seeds of the default table.
    pub const DEFAULT_KISS_SEEDS: [u32; 4] = [12345, 65435, 12345, 34221];

    /// Creates a new SWB RNG from a full table, with index and borrow cleared.
    pub fn new(table: [u32; TABLE_SIZE]) -> Self {
        Self::from_parts(table, 0, false)
    }

    /// Creates a new SWB RNG continuing from a table at the given index,
    /// for example one left behind by `Lfib4`.
    pub fn from_parts(table: [u32; TABLE_SIZE], index: u8, borrow: bool) -> Self {
        Swb { t: table, c: index, borrow }
    }

    /// Creates a new SWB RNG whose table is the next 256 outputs of `kiss`.
    pub fn from_kiss(kiss: &mut Kiss) -> Self {
        Self::new(kiss_table(kiss))
    }

    pub(crate) fn from_seed_words(seeds: [u32; 4]) -> Self {
        Self::from_kiss(&mut Kiss::from_seed_words(seeds))
    }

    #[inline]
    pub fn table(&self) -> &[u32; TABLE_SIZE] {
        &self.t
    }

    #[inline]
    pub fn index(&self) -> u8 {
        self.c
    }

    #[inline]
    pub fn borrow(&self) -> bool {
        self.borrow
    }
}

impl Default for Swb {
    fn default() -> Self {
        Self::from_seed_words(Self::DEFAULT_KISS_SEEDS)
    }
}

impl SimpleRandom for Swb {
    const NAME: &'static str = "SWB";
    const SEED_COUNT: usize = TABLE_SIZE;

    #[wrappit] #[inline]
    fn next(&mut self) -> u32 {
        self.c = self.c + 1;
        let c = self.c;
        let x = self.t[(c + 34) as usize];
        let y = self.t[(c + 19) as usize] + self.borrow as u32;
        self.borrow = x < y;
        self.t[c as usize] = x - y;
        self.t[c as usize]
    }

    /// Seeds the table directly and clears index and borrow.
    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::new(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        let mut words = self.t.to_vec();
        words.push(self.c as u32);
        words.push(self.borrow as u32);
        State::from(words)
    }

    /// The index word is taken modulo 256 and any nonzero borrow word sets the borrow.
    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        let words: [u32; TABLE_SIZE + 2] = state.expect(Self::NAME)?;
        self.t.copy_from_slice(&words[.. TABLE_SIZE]);
        self.c = words[TABLE_SIZE] as u8;
        self.borrow = words[TABLE_SIZE + 1] != 0;
        Ok(())
    }

    fn seek(&mut self, _steps: i64) -> Result<(), Error> {
        Err(Error::Unsupported { generator: Self::NAME, operation: "seek" })
    }
}

crate::impl_rng_core!(Swb, 16);
