use wrapping_arithmetic::wrappit;

use crate::state::expect_seeds;
use crate::{Error, Kiss, SimpleRandom, State};

/// Number of words in the lagged table of LFIB4 and SWB.
pub const TABLE_SIZE: usize = 256;

/// Fills a lagged table with the next outputs of a KISS generator.
pub(crate) fn kiss_table(kiss: &mut Kiss) -> [u32; TABLE_SIZE] {
    let mut table = [0; TABLE_SIZE];
    for x in table.iter_mut() {
        *x = kiss.next();
    }
    table
}

/// Marsaglia's four-lag Fibonacci generator
/// x(n) = x(n-256) + x(n-198) + x(n-137) + x(n-78) (mod 2**32),
/// kept in a 256-word circular table indexed by a wrapping byte.
/// Period about 2**287.
///
/// There is no jump-ahead for LFIB4: `seek` returns `Error::Unsupported`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lfib4 {
    t: [u32; TABLE_SIZE],
    c: u8,
}

impl Lfib4 {
    /// KISS seeds of the default table.
    pub const DEFAULT_KISS_SEEDS: [u32; 4] = [12345, 65435, 12345, 34221];

    /// Creates a new LFIB4 RNG from a full table. The index starts at 0.
    pub fn new(table: [u32; TABLE_SIZE]) -> Self {
        Lfib4 { t: table, c: 0 }
    }

    /// Creates a new LFIB4 RNG whose table is the next 256 outputs of `kiss`.
    pub fn from_kiss(kiss: &mut Kiss) -> Self {
        Self::new(kiss_table(kiss))
    }

    pub(crate) fn from_seed_words(seeds: [u32; 4]) -> Self {
        Self::from_kiss(&mut Kiss::from_seed_words(seeds))
    }

    /// The lagged table.
    #[inline]
    pub fn table(&self) -> &[u32; TABLE_SIZE] {
        &self.t
    }

    /// Index of the most recently written table word.
    #[inline]
    pub fn index(&self) -> u8 {
        self.c
    }
}

impl Default for Lfib4 {
    fn default() -> Self {
        Self::from_seed_words(Self::DEFAULT_KISS_SEEDS)
    }
}

impl SimpleRandom for Lfib4 {
    const NAME: &'static str = "LFIB4";
    const SEED_COUNT: usize = TABLE_SIZE;

    #[wrappit] #[inline]
    fn next(&mut self) -> u32 {
        self.c = self.c + 1;
        let c = self.c;
        let x = self.t[c as usize] + self.t[(c + 58) as usize] + self.t[(c + 119) as usize] + self.t[(c + 178) as usize];
        self.t[c as usize] = x;
        x
    }

    /// Seeds the table directly and resets the index.
    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::new(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        let mut words = self.t.to_vec();
        words.push(self.c as u32);
        State::from(words)
    }

    /// The index word is taken modulo 256.
    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        let words: [u32; TABLE_SIZE + 1] = state.expect(Self::NAME)?;
        self.t.copy_from_slice(&words[.. TABLE_SIZE]);
        self.c = words[TABLE_SIZE] as u8;
        Ok(())
    }

    fn seek(&mut self, _steps: i64) -> Result<(), Error> {
        Err(Error::Unsupported { generator: Self::NAME, operation: "seek" })
    }
}

crate::impl_rng_core!(Lfib4, 16);
