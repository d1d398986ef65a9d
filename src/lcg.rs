use wrapping_arithmetic::wrappit;

// This module contains utility functions for working with
// 32-bit LCGs (linear congruential generators).

/// LCG iteration is state <- state * m + p (mod 2**32).
/// Returns state after the specified number of iterations from the origin state.
/// The modulus is a power of two, so a full period generator returns to the
/// origin after 2**32 iterations and iteration counts may wrap around.
#[wrappit]
pub fn get_state(m: u32, p: u32, origin: u32, iterations: u32) -> u32 {
    // Algorithm from Brown, F. B., "Random Number Generation with Arbitrary Stride",
    // Transactions of the American Nuclear Society, 1994.
    let mut jump_m = m;
    let mut jump_p = p;
    let mut state = origin;
    let mut ordinal = iterations;

    while ordinal > 0 {
        if ordinal & 1 == 1 {
            state = state * jump_m + jump_p;
        }
        jump_p = (jump_m + 1) * jump_p;
        jump_m *= jump_m;
        ordinal >>= 1;
    }
    state
}
