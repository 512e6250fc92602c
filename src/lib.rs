// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod anagrams;
pub mod cli;
pub mod constraints;
pub mod frequency;
pub mod logging;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use anagrams::{anagram_groups, find_anagrams};
pub use constraints::{ConstraintError, ConstraintSet, SlotConstraint};
pub use frequency::{FrequencyModel, MIN_SCORE};
pub use solver::{
    SUGGESTION_COUNT, SUGGESTION_POOL, SuggestError, filter_candidates, rank_candidates,
    rank_words, suggest_words,
};
pub use wordbank::{corpus_of_length, load_words_from_file, load_words_from_str};
