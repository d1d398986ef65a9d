// Checks shared by the tests of every generator.

use alloc::vec::Vec;
use wrapping_arithmetic::wrappit;

use crate::{Error, SimpleRandom, State};

/// 64-bit hash SplitMix64 by Sebastiano Vigna, used to draw test seeds.
#[wrappit] #[inline]
pub fn hashr(x: u64) -> u64 {
    let x = x * 0x9e3779b97f4a7c15;
    let x = (x ^ (x >> 30)) * 0xbf58476d1ce4e5b9;
    let x = (x ^ (x >> 27)) * 0x94d049bb133111eb;
    x ^ (x >> 31)
}

/// Returns the n-th output (counting from 1).
pub fn nth_output<G: SimpleRandom>(rng: &mut G, n: usize) -> u32 {
    let mut k = 0;
    for _ in 0 .. n { k = rng.next(); }
    k
}

pub fn outputs<G: SimpleRandom>(rng: &mut G, n: usize) -> Vec<u32> {
    (0 .. n).map(|_| rng.next()).collect()
}

/// Draws pseudorandom seed words, reproducibly for a given round.
pub fn test_seeds(round: u64, count: usize) -> Vec<u32> {
    (0 .. count as u64).map(|i| hashr((round << 16) + i) as u32).collect()
}

/// Reseeding reproduces the state and outputs of a fresh generator.
pub fn check_seed<G: SimpleRandom + Default>(seeds: &[u32], n: usize) {
    let mut rng = G::try_from_seeds(seeds).unwrap();
    let state_from_init = rng.state();
    let data_from_init = outputs(&mut rng, n);
    let state_after_data_from_init = rng.state();

    rng.seed(seeds).unwrap();
    assert_eq!(state_from_init, rng.state());
    assert_eq!(data_from_init, outputs(&mut rng, n));
    assert_eq!(state_after_data_from_init, rng.state());
}

/// Restoring a captured state replays the same outputs.
pub fn check_state<G: SimpleRandom + Default>(seeds: &[u32], skip: usize, n: usize) {
    let mut rng = G::try_from_seeds(seeds).unwrap();
    for _ in 0 .. skip { rng.next(); }
    let state = rng.state();
    let data = outputs(&mut rng, n);
    let end = rng.state();

    rng.set_state(&state).unwrap();
    assert_eq!(data, outputs(&mut rng, n));
    assert_eq!(end, rng.state());

    // Restoring into another instance works the same.
    let mut other = G::default();
    other.set_state(&state).unwrap();
    assert_eq!(data, outputs(&mut other, n));
}

/// Wrong seed counts and state shapes are rejected without touching the generator.
pub fn check_shapes<G: SimpleRandom + Default>() {
    let too_few = test_seeds(0, G::SEED_COUNT - 1);
    let too_many = test_seeds(0, G::SEED_COUNT + 1);
    for seeds in [too_few, too_many].iter() {
        let expected = Error::SeedCount { generator: G::NAME, expected: G::SEED_COUNT, actual: seeds.len() };
        assert_eq!(Some(expected), G::try_from_seeds(seeds).err());
        let mut rng = G::default();
        assert_eq!(Err(expected), rng.seed(seeds));
        assert_eq!(G::default().state(), rng.state());
    }

    let mut rng = G::default();
    let words = rng.state().words().len();
    for len in [0, words - 1, words + 1].iter() {
        let state = State::from_words(test_seeds(1, *len));
        let expected = Error::StateShape { generator: G::NAME, expected: words, actual: *len };
        assert_eq!(Err(expected), rng.set_state(&state));
        assert_eq!(G::default().state(), rng.state());
    }
}

/// Seek matches stepping, and backward seeks undo forward seeks.
pub fn check_seek<G: SimpleRandom + Clone>(rng: &G, steps: i64) {
    assert!(steps >= 0);
    let mut jumped = rng.clone();
    jumped.seek(steps).unwrap();
    let mut stepped = rng.clone();
    for _ in 0 .. steps { stepped.next(); }
    assert_eq!(stepped.state(), jumped.state());

    // Backward seeks are exact once the generator has stepped.
    let mut origin = rng.clone();
    origin.next();
    let mut there_and_back = origin.clone();
    there_and_back.seek(steps).unwrap();
    there_and_back.seek(-steps).unwrap();
    assert_eq!(origin.state(), there_and_back.state());
    let mut back_and_there = origin.clone();
    back_and_there.seek(-steps).unwrap();
    back_and_there.seek(steps).unwrap();
    assert_eq!(origin.state(), back_and_there.state());
}

/// Runs the checks shared by all generators for a number of seeds.
pub fn check_generator<G: SimpleRandom + Default>() {
    check_shapes::<G>();
    for round in 0 .. 16 {
        let seeds = test_seeds(round, G::SEED_COUNT);
        check_seed::<G>(&seeds, 3 + round as usize);
        check_state::<G>(&seeds, 100 + 57 * round as usize, 1000);
    }
}

/// Runs the seek checks for a number of seeds and step counts.
pub fn check_generator_seek<G: SimpleRandom + Default + Clone>() {
    for round in 0 .. 16 {
        let rng = G::try_from_seeds(&test_seeds(round, G::SEED_COUNT)).unwrap();
        for steps in [0, 1, 2, 3, 100, 1 + (hashr(round) & 0x3ff) as i64].iter() {
            check_seek(&rng, *steps);
        }
        // Long jumps cannot be checked by stepping, but must still be undone.
        let mut jumped = rng.clone();
        jumped.next();
        let origin = jumped.state();
        let steps = (hashr(round) >> 20) as i64;
        jumped.seek(steps).unwrap();
        jumped.seek(-steps).unwrap();
        assert_eq!(origin, jumped.state());
    }
}
