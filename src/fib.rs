use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::state::expect_seeds;
use crate::{Error, SimpleRandom, State};

/// Classical Fibonacci sequence x(n) = x(n-1) + x(n-2) (mod 2**32).
/// Its period is 3 * 2**31 if one of its two seeds is odd and not 1 mod 8.
/// It has little worth as a generator by itself, but was used by Marsaglia
/// as a part of combined generators.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fib {
    a: u32,
    b: u32,
}

/// 2-by-2 matrix modulo 2**32, row-major.
type Matrix2 = [[u32; 2]; 2];

#[wrappit]
fn multiply(x: &Matrix2, y: &Matrix2) -> Matrix2 {
    [
        [x[0][0] * y[0][0] + x[0][1] * y[1][0], x[0][0] * y[0][1] + x[0][1] * y[1][1]],
        [x[1][0] * y[0][0] + x[1][1] * y[1][0], x[1][0] * y[0][1] + x[1][1] * y[1][1]],
    ]
}

fn power(m: &Matrix2, n: u64) -> Matrix2 {
    let mut result = [[1, 0], [0, 1]];
    let mut unit = *m;
    let mut exponent = n;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = multiply(&unit, &result);
        }
        exponent >>= 1;
        unit = multiply(&unit, &unit);
    }
    result
}

impl Fib {
    pub const DEFAULT_SEEDS: [u32; 2] = [9983651, 95746118];

    /// Pisano period of the Fibonacci recurrence modulo 2**32:
    /// the step matrix raised to this power is the identity.
    pub const PISANO_PERIOD: u64 = 3 << 31;

    /// Creates a new Fib RNG. Any seeds are accepted; (0, 0) yields zeros forever.
    pub fn new(seed_a: u32, seed_b: u32) -> Self {
        Fib { a: seed_a, b: seed_b }
    }

    pub(crate) fn from_seed_words([a, b]: [u32; 2]) -> Self {
        Self::new(a, b)
    }

    /// Advances to the next state.
    #[wrappit] #[inline]
    fn step(&mut self) {
        let sum = self.a + self.b;
        self.a = self.b;
        self.b = sum;
    }

    /// Jumps forward (if steps > 0) or backward (if steps < 0) or does nothing (if steps = 0).
    #[wrappit]
    pub fn jump(&mut self, steps: i64) {
        let n = (steps as i128).rem_euclid(Self::PISANO_PERIOD as i128) as u64;
        let m = power(&[[0, 1], [1, 1]], n);
        let (a, b) = (self.a, self.b);
        self.a = m[0][0] * a + m[0][1] * b;
        self.b = m[1][0] * a + m[1][1] * b;
    }
}

impl Default for Fib {
    fn default() -> Self {
        Self::from_seed_words(Self::DEFAULT_SEEDS)
    }
}

impl SimpleRandom for Fib {
    const NAME: &'static str = "Fib";
    const SEED_COUNT: usize = 2;

    #[inline]
    fn next(&mut self) -> u32 {
        self.step();
        self.a
    }

    fn seed(&mut self, seeds: &[u32]) -> Result<(), Error> {
        *self = Self::from_seed_words(expect_seeds(Self::NAME, seeds)?);
        Ok(())
    }

    fn state(&self) -> State {
        State::from([self.a, self.b])
    }

    fn set_state(&mut self, state: &State) -> Result<(), Error> {
        let [a, b] = state.expect(Self::NAME)?;
        self.a = a;
        self.b = b;
        Ok(())
    }

    fn seek(&mut self, steps: i64) -> Result<(), Error> {
        self.jump(steps);
        Ok(())
    }
}

crate::impl_rng_core!(Fib, 8);
