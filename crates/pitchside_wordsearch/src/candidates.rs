//! Choosing which names go into a puzzle.

use super::types::WordEntry;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Longest canonical form offered to the generator by default.
pub const DEFAULT_MAX_WORD_LEN: usize = 12;

/// Number of words per puzzle by default.
pub const DEFAULT_WORD_COUNT: usize = 10;

/// Randomly picks up to `count` names whose canonical form fits `max_len`.
///
/// Names that normalize to nothing are skipped, as are names whose canonical
/// form collides with one already chosen (e.g. `"Inter"` and `"INTER"`).
/// Fewer than `count` entries come back when not enough names qualify.
#[instrument(skip(names, rng), fields(names = names.len()))]
pub fn sample_words<S, R>(names: &[S], max_len: usize, count: usize, rng: &mut R) -> Vec<WordEntry>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut candidates: Vec<WordEntry> = names
        .iter()
        .map(WordEntry::new)
        .filter(|entry| !entry.is_empty() && entry.len() <= max_len)
        .collect();
    candidates.shuffle(rng);

    let mut seen = HashSet::new();
    let chosen: Vec<WordEntry> = candidates
        .into_iter()
        .filter(|entry| seen.insert(entry.canonical().clone()))
        .take(count)
        .collect();

    debug!(chosen = chosen.len(), "Sampled puzzle words");
    chosen
}
