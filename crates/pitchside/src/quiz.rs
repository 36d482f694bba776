//! Guess-the-club quiz.
//!
//! A round shows one club's details behind three name options: the right
//! one and two other clubs. Answering consumes the round and yields a
//! [`QuizResult`], so a round cannot be answered twice.

use crate::catalog::Club;
use derive_getters::Getters;
use derive_more::Display;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Options offered per round.
pub const OPTION_COUNT: usize = 3;

/// Error that can occur when building or answering a round.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum QuizError {
    /// The catalog does not have enough distinct club names for a round.
    #[display("Need at least {} distinct clubs for a quiz, found {}", OPTION_COUNT, available)]
    NotEnoughClubs {
        /// Distinct club names available.
        available: usize,
    },

    /// The chosen answer is not one of the round's options.
    #[display("{:?} is not one of the options", _0)]
    UnknownOption(String),
}

impl std::error::Error for QuizError {}

/// A question waiting for an answer.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct QuizRound {
    /// The club to guess.
    club: Club,
    /// Shuffled option texts, one of which is the club's name.
    options: Vec<String>,
}

impl QuizRound {
    /// Builds a round from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NotEnoughClubs`] if fewer than [`OPTION_COUNT`]
    /// distinct club names exist.
    #[instrument(skip(clubs, rng), fields(clubs = clubs.len()))]
    pub fn new<R: Rng + ?Sized>(clubs: &[Club], rng: &mut R) -> Result<Self, QuizError> {
        let mut seen = HashSet::new();
        let distinct: Vec<&Club> = clubs
            .iter()
            .filter(|club| seen.insert(club.club_name().as_str()))
            .collect();
        if distinct.len() < OPTION_COUNT {
            return Err(QuizError::NotEnoughClubs {
                available: distinct.len(),
            });
        }

        let club = *distinct
            .choose(rng)
            .ok_or(QuizError::NotEnoughClubs { available: 0 })?;

        let mut options: Vec<String> = distinct
            .iter()
            .filter(|other| other.club_name() != club.club_name())
            .map(|other| other.club_name().clone())
            .collect::<Vec<_>>()
            .choose_multiple(rng, OPTION_COUNT - 1)
            .cloned()
            .collect();
        options.push(club.club_name().clone());
        options.shuffle(rng);

        debug!(answer = %club.club_name(), ?options, "Quiz round ready");
        Ok(Self {
            club: club.clone(),
            options,
        })
    }

    /// Whether `choice` matches one of the options, ignoring case and padding.
    pub fn is_option(&self, choice: &str) -> bool {
        self.option_for(choice).is_some()
    }

    fn option_for(&self, choice: &str) -> Option<&String> {
        let choice = choice.trim().to_lowercase();
        self.options
            .iter()
            .find(|option| option.to_lowercase() == choice)
    }

    /// Answers with the option text.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::UnknownOption`] if `choice` is not an option.
    #[instrument(skip(self), fields(answer = %self.club.club_name()))]
    pub fn answer(self, choice: &str) -> Result<QuizResult, QuizError> {
        let chosen = self
            .option_for(choice)
            .cloned()
            .ok_or_else(|| QuizError::UnknownOption(choice.to_string()))?;
        let correct = chosen == *self.club.club_name();
        info!(%chosen, correct, "Quiz answered");
        Ok(QuizResult {
            club: self.club,
            chosen,
            correct,
        })
    }

    /// Answers by zero-based option index.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::UnknownOption`] if the index is out of range.
    pub fn answer_index(self, index: usize) -> Result<QuizResult, QuizError> {
        match self.options.get(index).cloned() {
            Some(option) => self.answer(&option),
            None => Err(QuizError::UnknownOption(index.to_string())),
        }
    }
}

/// An answered round.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct QuizResult {
    /// The club that was asked about.
    club: Club,
    /// The option the player picked.
    chosen: String,
    /// Whether the pick was right.
    correct: bool,
}

impl QuizResult {
    /// The right answer.
    pub fn answer(&self) -> &str {
        self.club.club_name()
    }
}

/// Running tally across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct QuizScore {
    /// Rounds answered.
    played: u32,
    /// Rounds answered correctly.
    correct: u32,
}

impl QuizScore {
    /// Adds a result to the tally.
    pub fn record(&mut self, result: &QuizResult) {
        self.played += 1;
        if result.correct {
            self.correct += 1;
        }
    }
}

impl std::fmt::Display for QuizScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.played)
    }
}
