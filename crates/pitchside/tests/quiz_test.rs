//! Tests for guess-the-club rounds.

use pitchside::{Club, OPTION_COUNT, QuizError, QuizRound, QuizScore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn clubs() -> Vec<Club> {
    [
        ("Racing Club", "Avellaneda, Argentina"),
        ("Peñarol", "Montevideo, Uruguay"),
        ("Celtic", "Glasgow, Scotland"),
        ("Porto", "Porto, Portugal"),
        ("Ajax", "Amsterdam, Netherlands"),
    ]
    .into_iter()
    .map(|(name, place)| Club::new(name.to_string(), place.to_string()))
    .collect()
}

#[test]
fn test_round_offers_answer_and_two_others() {
    let clubs = clubs();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = QuizRound::new(&clubs, &mut rng).expect("Round failed");

        assert_eq!(round.options().len(), OPTION_COUNT);
        let distinct: HashSet<&String> = round.options().iter().collect();
        assert_eq!(distinct.len(), OPTION_COUNT);
        assert!(round.options().contains(round.club().club_name()));
        assert!(clubs.contains(round.club()));
    }
}

#[test]
fn test_correct_answer_ignores_case() {
    let mut rng = StdRng::seed_from_u64(1);
    let round = QuizRound::new(&clubs(), &mut rng).expect("Round failed");
    let answer = round.club().club_name().to_uppercase();

    let result = round.answer(&format!("  {} ", answer)).expect("Answer failed");
    assert!(*result.correct());
    assert_eq!(result.chosen(), result.answer());
}

#[test]
fn test_wrong_answer_reports_right_one() {
    let mut rng = StdRng::seed_from_u64(2);
    let round = QuizRound::new(&clubs(), &mut rng).expect("Round failed");
    let expected = round.club().club_name().clone();
    let wrong = round
        .options()
        .iter()
        .find(|option| **option != expected)
        .cloned()
        .expect("A distractor");

    let result = round.answer(&wrong).expect("Answer failed");
    assert!(!*result.correct());
    assert_eq!(result.chosen(), &wrong);
    assert_eq!(result.answer(), expected);
}

#[test]
fn test_answer_by_index() {
    let mut rng = StdRng::seed_from_u64(3);
    let round = QuizRound::new(&clubs(), &mut rng).expect("Round failed");
    let first = round.options()[0].clone();

    let result = round.answer_index(0).expect("Answer failed");
    assert_eq!(result.chosen(), &first);
}

#[test]
fn test_unknown_option_rejected() {
    let mut rng = StdRng::seed_from_u64(4);
    let round = QuizRound::new(&clubs(), &mut rng).expect("Round failed");
    assert!(!round.is_option("Manchester City"));

    let err = round
        .clone()
        .answer("Manchester City")
        .expect_err("Should reject");
    assert_eq!(err, QuizError::UnknownOption("Manchester City".to_string()));

    assert!(matches!(
        round.answer_index(OPTION_COUNT),
        Err(QuizError::UnknownOption(_))
    ));
}

#[test]
fn test_needs_three_distinct_names() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut few = clubs();
    few.truncate(2);
    few.push(few[0].clone());

    let err = QuizRound::new(&few, &mut rng).expect_err("Should fail");
    assert_eq!(err, QuizError::NotEnoughClubs { available: 2 });
    assert!(QuizRound::new(&[], &mut rng).is_err());
}

#[test]
fn test_score_tallies_rounds() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut score = QuizScore::default();

    let round = QuizRound::new(&clubs(), &mut rng).expect("Round failed");
    let answer = round.club().club_name().clone();
    score.record(&round.answer(&answer).expect("Answer failed"));

    let round = QuizRound::new(&clubs(), &mut rng).expect("Round failed");
    let answer = round.club().club_name().clone();
    let wrong = round
        .options()
        .iter()
        .find(|option| **option != answer)
        .cloned()
        .expect("A distractor");
    score.record(&round.answer(&wrong).expect("Answer failed"));

    assert_eq!(*score.played(), 2);
    assert_eq!(*score.correct(), 1);
    assert_eq!(score.to_string(), "1/2");
}
