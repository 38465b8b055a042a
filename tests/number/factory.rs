//! Integration tests for AnyIntFactory
//!
//! Tests the round-trip law over boundary values and seeded random samples.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use valtypes::number::AnyInt;
use valtypes::AnyIntFactory;

const SEEDS: [u64; 5] = [0, 1, 42, 0xDEAD_BEEF, u64::MAX];

// =============================================================================
// Round-trip
// =============================================================================

#[test]
fn create_should_pass_with_random_int() {
    for seed in SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let expected: i32 = rng.gen_range(i32::MIN..=i32::MAX);
        let number: AnyInt = AnyIntFactory::create(expected);
        let actual: i32 = number.to_int();
        assert_eq!(expected, actual, "seed {seed}");
    }
}

#[test]
fn create_should_pass_with_boundaries() {
    for expected in [0, 2_147_483_647, -2_147_483_648, -1, 1] {
        assert_eq!(AnyIntFactory::create(expected).to_int(), expected);
    }
}

#[test]
fn create_round_trips_many_samples() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..10_000 {
        let x = rng.gen_range(i32::MIN..=i32::MAX);
        assert_eq!(AnyIntFactory::create(x).to_int(), x);
    }
}

// =============================================================================
// Determinism and immutability
// =============================================================================

#[test]
fn create_twice_gives_equal_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let x = rng.gen_range(i32::MIN..=i32::MAX);
    let a = AnyIntFactory::create(x);
    let b = AnyIntFactory::create(x);
    assert_eq!(a, b);
    assert_eq!(a.to_int(), b.to_int());
}

#[test]
fn to_int_repeated_reads_agree() {
    let number = AnyIntFactory::create(-31_337);
    let copy = number;
    for _ in 0..3 {
        assert_eq!(number.to_int(), -31_337);
    }
    assert_eq!(copy, number);
}

#[test]
fn usable_across_threads() {
    let number = AnyIntFactory::create(i32::MIN);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || number.to_int()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), i32::MIN);
    }
}

// =============================================================================
// Wide and textual inputs
// =============================================================================

#[test]
fn try_create_accepts_every_i32_extreme() {
    assert_eq!(AnyIntFactory::try_create(-2_147_483_648), Ok(AnyInt::MIN));
    assert_eq!(AnyIntFactory::try_create(2_147_483_647), Ok(AnyInt::MAX));
}

#[test]
fn parse_matches_create() {
    assert_eq!(
        AnyIntFactory::parse("2147483647"),
        Ok(AnyIntFactory::create(i32::MAX))
    );
    assert_eq!(AnyIntFactory::parse(" -1 "), Ok(AnyIntFactory::create(-1)));
}
