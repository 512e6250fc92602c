use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read a newline-delimited word list: trimmed, lowercased, letters only.
pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()))
        .collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Narrow a word list to the target length, deduplicated and sorted so the
/// corpus iterates in a stable order.
pub fn corpus_of_length(words: &[String], length: usize) -> Vec<String> {
    let unique: HashSet<&String> = words.iter().filter(|w| w.len() == length).collect();
    let mut corpus: Vec<String> = unique.into_iter().cloned().collect();
    corpus.sort_unstable();
    corpus
}
