use alloc::vec::Vec;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::Error;

/// Captured state of a generator: an ordered list of its 32-bit state words.
/// Restoring it with `SimpleRandom::set_state` reproduces the exact output
/// sequence that followed the capture.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct State {
    words: Vec<u32>,
}

impl State {
    pub fn from_words(words: Vec<u32>) -> Self {
        State { words }
    }

    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words as an array of the expected shape.
    pub(crate) fn expect<const N: usize>(&self, generator: &'static str) -> Result<[u32; N], Error> {
        self.words.as_slice().try_into().map_err(|_| Error::StateShape { generator, expected: N, actual: self.words.len() })
    }
}

impl From<Vec<u32>> for State {
    fn from(words: Vec<u32>) -> Self {
        State::from_words(words)
    }
}

impl<const N: usize> From<[u32; N]> for State {
    fn from(words: [u32; N]) -> Self {
        State::from_words(Vec::from(words))
    }
}

/// Checks the number of seed values given to a generator.
pub(crate) fn expect_seeds<const N: usize>(generator: &'static str, seeds: &[u32]) -> Result<[u32; N], Error> {
    seeds.try_into().map_err(|_| Error::SeedCount { generator, expected: N, actual: seeds.len() })
}
