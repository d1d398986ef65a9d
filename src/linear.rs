use crate::BitColumnMatrix;

// Generators whose step is linear over GF(2) on their 32-bit words.
// Single steps use plain bit arithmetic; jumps use the equivalent
// 32-by-32 bit column matrix raised to the number of steps.

/// Returns the matrix of a sequence of in-place xorshifts `x ^= x << shift`
/// applied in the given order to a 32-bit word. Negative shifts go right.
pub fn xorshift_matrix(shifts: &[i32]) -> BitColumnMatrix {
    let unity = BitColumnMatrix::unity(32);
    let mut matrix = unity.clone();
    for &shift in shifts {
        let xorshift = unity.sum(&BitColumnMatrix::shift(32, shift));
        matrix = xorshift.product(&matrix);
    }
    matrix
}

/// Applies `matrix` raised to signed `steps` to a 32-bit word.
/// Backward steps are taken forward modulo `period`, the cycle length of the word.
pub fn jump(matrix: &BitColumnMatrix, word: u32, steps: i64, period: u64) -> u32 {
    let n = if steps >= 0 { steps as u64 } else { (steps as i128).rem_euclid(period as i128) as u64 };
    matrix.power(n).multiply_vector(word as u128) as u32
}

/// One component of a combined Tausworthe generator (L'Ecuyer):
///
/// ```text
/// b = ((z << q) ^ z) >> k
/// z = ((z & mask) << s) ^ b
/// ```
///
/// where `mask` clears the `d` low bits of `z`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tausworthe {
    pub q: u32,
    pub k: u32,
    pub s: u32,
    pub d: u32,
}

impl Tausworthe {
    #[inline]
    pub fn mask(&self) -> u32 {
        u32::MAX << self.d
    }

    #[inline]
    pub fn step(&self, z: u32) -> u32 {
        let b = ((z << self.q) ^ z) >> self.k;
        ((z & self.mask()) << self.s) ^ b
    }

    /// Cycle length of the component: 2**(32 - d) - 1.
    #[inline]
    pub fn period(&self) -> u64 {
        (1u64 << (32 - self.d)) - 1
    }

    /// Seeds below this value put the component in a degenerate cycle.
    #[inline]
    pub fn minimum(&self) -> u32 {
        1u32 << self.d
    }

    /// Replaces a degenerate seed with its bitwise inverse.
    #[inline]
    pub fn sanitise(&self, z: u32) -> u32 {
        if z < self.minimum() { !z } else { z }
    }

    /// Matrix of one step.
    pub fn matrix(&self) -> BitColumnMatrix {
        let masked = BitColumnMatrix::shift(32, self.s as i32).product(&BitColumnMatrix::mask(32, self.d as usize, 32));
        let feedback = BitColumnMatrix::unity(32).sum(&BitColumnMatrix::shift(32, self.q as i32));
        let feedback = BitColumnMatrix::shift(32, -(self.k as i32)).product(&feedback);
        masked.sum(&feedback)
    }

    /// Advances `z` by signed `steps`.
    /// The `d` low bits of a freshly seeded word never reach the output and
    /// are not restored by a backward jump; once the component has stepped,
    /// backward jumps are exact.
    pub fn jump(&self, z: u32, steps: i64) -> u32 {
        jump(&self.matrix(), z, steps, self.period())
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use proptest::prelude::*;

    const TAUSWORTHE: [Tausworthe; 7] = [
        Tausworthe { q: 6, k: 13, s: 18, d: 1 },
        Tausworthe { q: 2, k: 27, s: 2, d: 3 },
        Tausworthe { q: 13, k: 21, s: 7, d: 4 },
        Tausworthe { q: 3, k: 12, s: 13, d: 7 },
        Tausworthe { q: 13, k: 19, s: 12, d: 1 },
        Tausworthe { q: 2, k: 25, s: 4, d: 3 },
        Tausworthe { q: 3, k: 11, s: 17, d: 4 },
    ];

    fn xorshift(x: u32) -> u32 {
        let x = x ^ (x << 13);
        let x = x ^ (x >> 17);
        x ^ (x << 5)
    }

    #[test] pub fn xorshift_period() {
        let matrix = xorshift_matrix(&[13, -17, 5]);
        let x = 0x1234_5678;
        assert_eq!(x, jump(&matrix, x, 0xffff_ffff, 0xffff_ffff));
        assert_eq!(jump(&matrix, x, -1, 0xffff_ffff), jump(&matrix, x, 0xffff_fffe, 0xffff_ffff));
        assert_eq!(x, xorshift(jump(&matrix, x, -1, 0xffff_ffff)));
        assert_eq!(0, jump(&matrix, 0, 12345, 0xffff_ffff));
    }

    #[test] pub fn tausworthe_period() {
        for component in TAUSWORTHE.iter() {
            let z = component.step(0xdead_beef);
            assert_eq!(z, component.jump(z, component.period() as i64));
            let back = component.jump(z, -1);
            assert_eq!(z, component.step(back));
        }
    }

    #[test] pub fn tausworthe_sanitise() {
        let component = TAUSWORTHE[3];
        assert_eq!(128, component.minimum());
        assert_eq!(!0, component.sanitise(0));
        assert_eq!(!127, component.sanitise(127));
        assert_eq!(128, component.sanitise(128));
    }

    proptest! {
        #[test]
        fn xorshift_matrix_matches_step(x in any::<u32>(), n in 0i64 .. 300) {
            let matrix = xorshift_matrix(&[13, -17, 5]);
            let mut y = x;
            for _ in 0 .. n { y = xorshift(y); }
            prop_assert_eq!(jump(&matrix, x, n, 0xffff_ffff), y);
        }

        #[test]
        fn tausworthe_matrix_matches_step(z in any::<u32>(), n in 0i64 .. 300, c in 0usize .. 7) {
            let component = TAUSWORTHE[c];
            let mut y = z;
            for _ in 0 .. n { y = component.step(y); }
            prop_assert_eq!(component.jump(z, n), y);
        }

        #[test]
        fn tausworthe_jump_round_trip(z in any::<u32>(), n in 1i64 .. 1 << 40, c in 0usize .. 7) {
            let component = TAUSWORTHE[c];
            let z = component.step(z);
            let forward = component.jump(z, n);
            prop_assert_eq!(component.jump(forward, -n), z);
            let backward = component.jump(z, -n);
            prop_assert_eq!(component.jump(backward, n), z);
        }
    }
}
