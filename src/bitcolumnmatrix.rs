use alloc::vec::Vec;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::Error;

// A matrix over GF(2) stored column-wise. Column i, bit j set means
// that output bit j depends on input bit i. Addition is XOR and
// multiplication is AND, so a linear next-state function of an n-bit
// generator state becomes an n-by-n matrix, and jumping ahead k steps
// becomes a k-th matrix power computed by repeated squaring.

/// Square matrix over GF(2), each column packed into a `u128`.
/// Widths up to 128 bits are supported, enough for any 32-bit or 64-bit generator state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BitColumnMatrix {
    columns: Vec<u128>,
}

#[inline] fn check_width(n: usize) {
    assert!(n <= BitColumnMatrix::MAX_WIDTH, "bit column matrix width {} exceeds 128", n);
}

impl BitColumnMatrix {
    pub const MAX_WIDTH: usize = 128;

    /// Creates a matrix from its columns. Bits above the width are kept
    /// as given but never reach a result through multiplication by vectors
    /// of the same width.
    ///
    /// # Panics
    /// Panics if there are more than 128 columns.
    pub fn from_columns(columns: Vec<u128>) -> Self {
        check_width(columns.len());
        BitColumnMatrix { columns }
    }

    /// The n-by-n identity matrix.
    ///
    /// # Panics
    /// Panics if `n` is greater than 128.
    pub fn unity(n: usize) -> Self {
        check_width(n);
        BitColumnMatrix { columns: (0 .. n).map(|i| 1u128 << i).collect() }
    }

    /// Diagonal matrix selecting a range of bits.
    /// If `start <= end`, bits in the half-open range `[start, end)` are selected,
    /// so `start == end` yields the zero matrix.
    /// If `end < start`, the range wraps around: bits in `[start, n)` and `[0, end)`
    /// are selected, and bits in `[end, start)` are cleared.
    ///
    /// # Panics
    /// Panics if `n` is greater than 128.
    pub fn mask(n: usize, start: usize, end: usize) -> Self {
        check_width(n);
        let columns = (0 .. n).map(|i| {
            let selected = if start <= end { start <= i && i < end } else { start <= i || i < end };
            if selected { 1u128 << i } else { 0 }
        }).collect();
        BitColumnMatrix { columns }
    }

    /// Matrix of a logical shift of n-bit vectors.
    /// Positive `shift_value` shifts up (left), negative shifts down (right).
    /// Bits shifted past either end are lost, so any shift of
    /// magnitude `n` or more is the zero matrix.
    ///
    /// # Panics
    /// Panics if `n` is greater than 128.
    pub fn shift(n: usize, shift_value: i32) -> Self {
        check_width(n);
        let columns = (0 .. n).map(|i| {
            let target = i as i64 + shift_value as i64;
            if target >= 0 && target < n as i64 { 1u128 << target } else { 0 }
        }).collect();
        BitColumnMatrix { columns }
    }

    /// Width (and height) of the matrix.
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn columns(&self) -> &[u128] {
        &self.columns
    }

    fn same_width(&self, other: &BitColumnMatrix) -> Result<(), Error> {
        if self.width() == other.width() {
            Ok(())
        } else {
            Err(Error::WidthMismatch { left: self.width(), right: other.width() })
        }
    }

    /// Sum of two matrices (column-wise XOR).
    pub fn add(&self, other: &BitColumnMatrix) -> Result<BitColumnMatrix, Error> {
        self.same_width(other)?;
        Ok(self.sum(other))
    }

    /// Difference of two matrices. In GF(2) this is the same as `add`.
    pub fn subtract(&self, other: &BitColumnMatrix) -> Result<BitColumnMatrix, Error> {
        self.add(other)
    }

    /// Product of the matrix and a column vector of `width()` bits.
    /// Input bits at or above the width are ignored.
    pub fn multiply_vector(&self, vector: u128) -> u128 {
        let mut x = vector;
        let mut value = 0;
        for column in self.columns.iter() {
            if x & 1 == 1 {
                value ^= column;
            }
            x >>= 1;
        }
        value
    }

    /// Matrix product `self * other`: applying the result to a vector
    /// applies `other` first, then `self`.
    pub fn multiply_matrix(&self, other: &BitColumnMatrix) -> Result<BitColumnMatrix, Error> {
        self.same_width(other)?;
        Ok(self.product(other))
    }

    /// In-place product: `self := self * other`.
    pub fn multiply_assign(&mut self, other: &BitColumnMatrix) -> Result<(), Error> {
        *self = self.multiply_matrix(other)?;
        Ok(())
    }

    /// Matrix to the power `n`. The zeroth power is the identity.
    pub fn power(&self, n: u64) -> BitColumnMatrix {
        let mut result = BitColumnMatrix::unity(self.width());
        let mut unit = self.clone();
        let mut exponent = n;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = unit.product(&result);
            }
            exponent >>= 1;
            if exponent > 0 {
                unit = unit.product(&unit);
            }
        }
        result
    }

    // Sum and product of matrices known to share this width.
    pub(crate) fn sum(&self, other: &BitColumnMatrix) -> BitColumnMatrix {
        BitColumnMatrix { columns: self.columns.iter().zip(other.columns.iter()).map(|(x, y)| x ^ y).collect() }
    }

    pub(crate) fn product(&self, other: &BitColumnMatrix) -> BitColumnMatrix {
        BitColumnMatrix { columns: other.columns.iter().map(|&column| self.multiply_vector(column)).collect() }
    }
}
