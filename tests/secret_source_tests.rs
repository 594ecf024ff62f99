//! Secret source integration tests.

use number_guess::{
    FixedSource, GameConfig, GameRng, GuessingGame, InvalidArgument, Outcome,
    RandomSource, SecretSource,
};
use proptest::prelude::*;

/// Find the secret through the public API only.
fn solve(game: &mut GuessingGame) -> i32 {
    let (mut lo, mut hi) = (game.min(), game.max());
    loop {
        let mid = lo + (hi - lo) / 2;
        match game.guess(mid) {
            Outcome::TooLow => lo = mid + 1,
            Outcome::TooHigh => hi = mid - 1,
            Outcome::Correct => return mid,
            Outcome::OutOfRange => panic!("binary search left the range"),
        }
    }
}

#[test]
fn test_seeded_games_share_a_secret() {
    let mut a = GuessingGame::with_source(RandomSource::seeded(42)).unwrap();
    let mut b = GuessingGame::with_source(RandomSource::seeded(42)).unwrap();
    assert_eq!(solve(&mut a), solve(&mut b));
}

#[test]
fn test_random_source_from_rng() {
    let mut source = RandomSource::new(GameRng::new(9));
    let mut replay = RandomSource::seeded(9);
    assert_eq!(source.next_secret(1, 100), replay.next_secret(1, 100));
    assert_eq!(source.seed(), replay.seed());
}

#[test]
fn test_source_failure_propagates() {
    struct Refusing;
    impl SecretSource for Refusing {
        fn next_secret(&mut self, min: i32, max: i32) -> number_guess::Result<i32> {
            Err(InvalidArgument::InvertedRange { min: max, max: min })
        }
    }

    let err = GuessingGame::new(1, 10, Refusing).unwrap_err();
    assert_eq!(err, InvalidArgument::InvertedRange { min: 10, max: 1 });
}

#[test]
fn test_fixed_source_through_new() {
    let mut game = GuessingGame::new(0, 9, FixedSource(4)).unwrap();
    assert_eq!(solve(&mut game), 4);
}

#[test]
fn test_boxed_source() {
    let source: Box<dyn SecretSource> = Box::new(RandomSource::seeded(3));
    let game = GuessingGame::new(-5, 5, source).unwrap();
    assert_eq!(game.range(), -5..=5);
}

#[test]
fn test_config_driven_game() {
    let config: GameConfig = serde_json::from_str(r#"{"min": 10, "max": 20, "seed": 77}"#).unwrap();
    let mut game = GuessingGame::from_config(&config).unwrap();
    let secret = solve(&mut game);
    assert!((10..=20).contains(&secret));

    let mut replay = GuessingGame::from_config(&config).unwrap();
    assert_eq!(solve(&mut replay), secret);
}

proptest! {
    #[test]
    fn prop_random_secret_in_bounds(
        seed in any::<u64>(),
        min in -1000i32..1000,
        width in 1i32..1000,
    ) {
        let max = min + width;
        let mut game = GuessingGame::new(min, max, RandomSource::seeded(seed)).unwrap();
        let secret = solve(&mut game);
        prop_assert!((min..=max).contains(&secret));
    }

    #[test]
    fn prop_inverted_range_rejected(seed in any::<u64>(), min in -100i32..100, gap in 1i32..100) {
        let mut source = RandomSource::seeded(seed);
        prop_assert_eq!(
            source.next_secret(min, min - gap),
            Err(InvalidArgument::InvertedRange { min, max: min - gap })
        );
    }
}
