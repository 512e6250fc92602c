use crate::constraints::{ConstraintError, ConstraintSet};
use crate::frequency::FrequencyModel;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// The solve flags describe exactly five letter slots.
pub const SOLVE_LENGTH: usize = 5;

/// Help solve the daily word puzzle.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase output verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Location of the dictionary file
    #[arg(short = 'd', long = "dictionary-file", default_value = "/usr/share/dict/words", global = true)]
    pub dictionary_file: PathBuf,

    /// Length of the words used in the search
    #[arg(short = 'l', long, default_value_t = 5, global = true)]
    pub length: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest a word to start the search
    Suggest,
    /// Show distribution of letters in positions
    Distribution,
    /// Print anagrams from the word list for a word
    Anagrams {
        /// Print anagrams of this word from the dictionary
        word: String,
    },
    /// Try to find a correct word given the constraints
    Solve(SolveArgs),
}

/// Known letters per slot, letters present but misplaced per slot, and
/// letters absent from the word.
#[derive(Args, Debug, Default)]
pub struct SolveArgs {
    /// First letter is known to be this
    #[arg(short = '1', long)]
    pub first: Option<char>,
    /// Second letter is known to be this
    #[arg(short = '2', long)]
    pub second: Option<char>,
    /// Third letter is known to be this
    #[arg(short = '3', long)]
    pub third: Option<char>,
    /// Fourth letter is known to be this
    #[arg(short = '4', long)]
    pub fourth: Option<char>,
    /// Fifth letter is known to be this
    #[arg(short = '5', long)]
    pub fifth: Option<char>,

    /// First letter is known not to be these letters that are still present in the word
    #[arg(long)]
    pub not_first: Option<String>,
    /// Second letter is known not to be these letters that are still present in the word
    #[arg(long)]
    pub not_second: Option<String>,
    /// Third letter is known not to be these letters that are still present in the word
    #[arg(long)]
    pub not_third: Option<String>,
    /// Fourth letter is known not to be these letters that are still present in the word
    #[arg(long)]
    pub not_fourth: Option<String>,
    /// Fifth letter is known not to be these letters that are still present in the word
    #[arg(long)]
    pub not_fifth: Option<String>,

    /// These letters are known not to be in the solution
    #[arg(short = 'n', long, default_value = "")]
    pub notin: String,
}

impl SolveArgs {
    /// Turn the flag values into a constraint set. A slot given both a
    /// confirmed letter and misplaced letters is rejected.
    pub fn constraints(&self) -> Result<ConstraintSet, ConstraintError> {
        let slots = [
            (&self.first, &self.not_first),
            (&self.second, &self.not_second),
            (&self.third, &self.not_third),
            (&self.fourth, &self.not_fourth),
            (&self.fifth, &self.not_fifth),
        ];
        let mut set = ConstraintSet::unconstrained(SOLVE_LENGTH);
        for (i, (confirmed, not_here)) in slots.into_iter().enumerate() {
            if let Some(letter) = confirmed {
                set.confirm(i, *letter)?;
            }
            if let Some(letters) = not_here {
                set.forbid_here(i, letters.chars())?;
            }
        }
        set.exclude(self.notin.chars())?;
        Ok(set)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Output functions

pub fn display_ranked(ranked: &[(String, f64)], verbosity: u8) {
    if ranked.is_empty() {
        println!("No candidates remain. Check your inputs.");
        return;
    }
    for line in ranked_lines(ranked, verbosity) {
        println!("{line}");
    }
}

/// Top 20 result lines, or all of them at high verbosity.
fn ranked_lines(ranked: &[(String, f64)], verbosity: u8) -> Vec<String> {
    let shown = if verbosity > 2 { ranked.len() } else { 20 };
    ranked
        .iter()
        .take(shown)
        .map(|(word, score)| format!("{word} score: {score}"))
        .collect()
}

pub fn display_word_list(words: &[String]) {
    println!("{}", words.join(", "));
}

pub fn display_distribution(model: &FrequencyModel) {
    for position in 0..model.length() {
        let counts: Vec<String> = model
            .ranked_letters(position)
            .into_iter()
            .map(|(letter, count)| format!("{letter}={count}"))
            .collect();
        println!("position {position}: {}", counts.join(", "));
    }
}

pub fn display_group_scores(scored: &[(String, f64)]) {
    println!("Top-scored letter groups:");
    for (group, score) in scored.iter().take(10) {
        println!("{group} score: {score}");
    }
}
