use crate::constraints::{ConstraintSet, SlotConstraint};
use crate::frequency::FrequencyModel;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Ranked candidates kept as the sampling pool for `suggest`.
pub const SUGGESTION_POOL: usize = 100;
/// Suggestions drawn from the pool on each run.
pub const SUGGESTION_COUNT: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestError {
    #[error("not enough candidates to sample: have {available}, need {requested}")]
    InsufficientCandidates { available: usize, requested: usize },
}

/// Narrow the corpus to words consistent with every constraint.
///
/// Applied as independent set intersections; the pass order is fixed only so
/// the per-pass diagnostics stay deterministic. Empty constraints return the
/// corpus unchanged.
pub fn filter_candidates(corpus: &[String], constraints: &ConstraintSet) -> Vec<String> {
    let mut candidates: Vec<String> = corpus
        .iter()
        .filter(|word| !constraints.absent().iter().any(|&c| word.contains(c)))
        .cloned()
        .collect();
    debug!(
        "{} candidates after removing absent letters",
        candidates.len()
    );

    for (i, slot) in constraints.slots().iter().enumerate() {
        match slot {
            SlotConstraint::Unconstrained => {}
            SlotConstraint::Confirmed(letter) => {
                candidates.retain(|word| word.chars().nth(i) == Some(*letter));
                debug!(
                    "{} candidates after requiring '{letter}' at position {i}",
                    candidates.len()
                );
            }
            SlotConstraint::NotHere(letters) => {
                for &letter in letters {
                    candidates
                        .retain(|word| word.chars().nth(i) != Some(letter) && word.contains(letter));
                    debug!(
                        "{} candidates after banning '{letter}' from position {i}",
                        candidates.len()
                    );
                }
            }
        }
    }
    candidates
}

/// Score every word and sort best first. The sort is stable, so equal scores
/// keep their input order.
pub fn rank_words(words: &[String], model: &FrequencyModel) -> Vec<(String, f64)> {
    let mut scored: Vec<(String, f64)> = words
        .iter()
        .map(|word| (word.clone(), model.score(word)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
}

/// Filter then rank: the engine operation behind both `solve` and `suggest`.
pub fn rank_candidates(
    corpus: &[String],
    constraints: &ConstraintSet,
    model: &FrequencyModel,
) -> Vec<(String, f64)> {
    rank_words(&filter_candidates(corpus, constraints), model)
}

/// Opening-word suggestions: rank the unconstrained corpus, keep the top
/// [`SUGGESTION_POOL`], and draw [`SUGGESTION_COUNT`] of them uniformly
/// without replacement. A pool smaller than the sample is an error, never a
/// short list.
///
/// The random source is injected so ranking stays deterministic under test.
pub fn suggest_words<R: Rng + ?Sized>(
    corpus: &[String],
    model: &FrequencyModel,
    rng: &mut R,
) -> Result<Vec<String>, SuggestError> {
    let constraints = ConstraintSet::unconstrained(model.length());
    let pool: Vec<String> = rank_candidates(corpus, &constraints, model)
        .into_iter()
        .take(SUGGESTION_POOL)
        .map(|(word, _)| word)
        .collect();
    if pool.len() < SUGGESTION_COUNT {
        return Err(SuggestError::InsufficientCandidates {
            available: pool.len(),
            requested: SUGGESTION_COUNT,
        });
    }
    Ok(pool
        .choose_multiple(rng, SUGGESTION_COUNT)
        .cloned()
        .collect())
}
