// Modular multiply and power for multiply-with-carry jumps.
//
// A lag-1 MWC generator x <- a * (x mod b) + (x div b), with b = 2**16 or 2**32,
// is the same as x <- a * x mod (a * b - 1) as long as 0 < x < a * b - 1.
// Jumping ahead by n steps then multiplies by a**n modulo (a * b - 1).
// Since a * b = 1 modulo (a * b - 1), the inverse of a is b, and jumping back
// by n steps multiplies by b**n.

/// Returns a * b mod m.
#[inline]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Returns base**n mod m.
pub fn pow_mod(base: u64, n: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut unit = base % m;
    let mut exponent = n;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, unit, m);
        }
        exponent >>= 1;
        unit = mul_mod(unit, unit, m);
    }
    result
}

/// Advances the MWC value `x` by signed `steps` for multiplier `a`, base `b`.
/// `x` must lie in 0 .. a * b - 1.
pub fn mwc_jump(x: u64, a: u64, b: u64, steps: i64) -> u64 {
    let m = a * b - 1;
    let factor = if steps >= 0 {
        pow_mod(a, steps as u64, m)
    } else {
        pow_mod(b, steps.unsigned_abs(), m)
    };
    mul_mod(factor, x, m)
}
