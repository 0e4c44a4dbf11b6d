//! Behavioral checks for the match engine: determinism, edge cases, and
//! the exact outcomes of fully deterministic pairings.

use dilemma::{Error, MatchEngine, PayoffMatrix, StrategySpec};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn identical_seeds_reproduce_identical_outcomes() {
    let payoffs = PayoffMatrix::standard();
    let mut scramble_rng = StdRng::seed_from_u64(77);
    let scrambler = StrategySpec::scrambled(&mut scramble_rng);

    let mut first = MatchEngine::with_seed(payoffs, 42);
    let mut second = MatchEngine::with_seed(payoffs, 42);

    let a = first
        .play(10_000, &StrategySpec::random(), &scrambler)
        .unwrap();
    let b = second
        .play(10_000, &StrategySpec::random(), &scrambler)
        .unwrap();
    assert_eq!(a, b);

    // Reseeding restarts the stream.
    first.reseed(Some(42));
    let replay = first
        .play(10_000, &StrategySpec::random(), &scrambler)
        .unwrap();
    assert_eq!(a, replay);
}

#[test]
fn traced_and_untraced_matches_agree() {
    let payoffs = PayoffMatrix::standard();
    let mut plain = MatchEngine::with_seed(payoffs, 9);
    let mut traced = MatchEngine::with_seed(payoffs, 9);

    let outcome = plain
        .play(1_000, &StrategySpec::cautious(), &StrategySpec::random())
        .unwrap();
    let (traced_outcome, trace) = traced
        .play_traced(1_000, &StrategySpec::cautious(), &StrategySpec::random())
        .unwrap();

    assert_eq!(outcome, traced_outcome);
    assert_eq!(trace.running_means.len(), 1_000);
}

#[test]
fn single_round_match_skips_conditional_play() {
    // A one-round match is decided purely by the first-move probabilities.
    let mut engine = MatchEngine::with_seed(PayoffMatrix::standard(), 5);
    let outcome = engine
        .play(
            1,
            &StrategySpec::grim_trigger(),
            &StrategySpec::always_defect(),
        )
        .unwrap();
    assert_eq!(outcome.mean_a, 0.0);
    assert_eq!(outcome.mean_b, 5.0);
}

#[test]
fn zero_rounds_is_rejected() {
    let mut engine = MatchEngine::with_seed(PayoffMatrix::standard(), 5);
    let result = engine.play(0, &StrategySpec::random(), &StrategySpec::random());
    assert!(matches!(result, Err(Error::InvalidRoundCount)));
}

#[test]
fn pure_cooperators_score_the_reward_exactly() {
    let mut engine = MatchEngine::with_seed(PayoffMatrix::standard(), 6);
    let outcome = engine
        .play(
            2_000,
            &StrategySpec::always_cooperate(),
            &StrategySpec::always_cooperate(),
        )
        .unwrap();
    assert_eq!((outcome.mean_a, outcome.mean_b), (3.0, 3.0));
}

#[test]
fn pure_defectors_score_the_punishment_exactly() {
    let mut engine = MatchEngine::with_seed(PayoffMatrix::standard(), 7);
    let outcome = engine
        .play(
            2_000,
            &StrategySpec::always_defect(),
            &StrategySpec::always_defect(),
        )
        .unwrap();
    assert_eq!((outcome.mean_a, outcome.mean_b), (1.0, 1.0));
}

#[test]
fn tit_for_tat_locks_into_mutual_cooperation() {
    let mut engine = MatchEngine::with_seed(PayoffMatrix::standard(), 8);
    let outcome = engine
        .play(
            2_000,
            &StrategySpec::tit_for_tat(),
            &StrategySpec::tit_for_tat(),
        )
        .unwrap();
    assert_eq!((outcome.mean_a, outcome.mean_b), (3.0, 3.0));
}

#[test]
fn grim_trigger_never_forgives_an_alternator() {
    // Alternator: C D C D ... Grim cooperates until the first defection
    // (round 1), then defects forever. From round 2 on the alternator
    // cooperates on even rounds into grim's defection.
    let mut engine = MatchEngine::with_seed(PayoffMatrix::standard(), 10);
    let outcome = engine
        .play(
            4,
            &StrategySpec::grim_trigger(),
            &StrategySpec::alternator(),
        )
        .unwrap();
    // Rounds: (C,C)=3, (C,D)=0, (D,C)=5, (D,D)=1 -> grim 9/4, alternator 9/4
    assert_eq!(outcome.mean_a, 2.25);
    assert_eq!(outcome.mean_b, 2.25);
}

#[test]
fn means_are_floor_truncated_to_two_decimals() {
    // Alternator vs pure cooperator over 3 rounds: R, T, R = 11/3 = 3.66...
    let mut engine = MatchEngine::with_seed(PayoffMatrix::standard(), 11);
    let outcome = engine
        .play(
            3,
            &StrategySpec::alternator(),
            &StrategySpec::always_cooperate(),
        )
        .unwrap();
    assert_eq!(outcome.mean_a, 3.66);
}

#[test]
fn custom_payoff_constants_flow_through() {
    let payoffs = PayoffMatrix::new(-1.0, 0.0, 4.0, 6.0).unwrap();
    let mut engine = MatchEngine::with_seed(payoffs, 12);
    let outcome = engine
        .play(
            100,
            &StrategySpec::always_cooperate(),
            &StrategySpec::always_defect(),
        )
        .unwrap();
    assert_eq!(outcome.mean_a, -1.0);
    assert_eq!(outcome.mean_b, 6.0);
}
