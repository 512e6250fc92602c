/// Score given to words that can never be the answer: repeated letters, or a
/// letter the corpus has never seen at that position. Sorts below every real
/// score.
pub const MIN_SCORE: f64 = f64::NEG_INFINITY;

fn letter_index(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
}

/// Per-position letter occurrence counts for a corpus of fixed-length words.
///
/// Built once per run and read-only afterwards; scoring takes the model by
/// reference so it can be tested against synthetic corpora.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    counts: Vec<[usize; 26]>,
}

impl FrequencyModel {
    /// Count letter occurrences at each position. Words in `corpus` must
    /// already be filtered to `length` lowercase letters.
    pub fn build(corpus: &[String], length: usize) -> Self {
        let mut counts = vec![[0; 26]; length];
        for word in corpus {
            for (i, c) in word.chars().enumerate() {
                if let Some(idx) = letter_index(c) {
                    counts[i][idx] += 1;
                }
            }
        }
        Self { counts }
    }

    pub fn length(&self) -> usize {
        self.counts.len()
    }

    /// Occurrences of `letter` at `position` across the corpus. Letters the
    /// corpus never produced count as zero.
    pub fn count(&self, position: usize, letter: char) -> usize {
        letter_index(letter).map_or(0, |idx| self.counts[position][idx])
    }

    /// Plausibility score for a word: the log of the product of per-position
    /// letter counts, computed as a sum of logs so large corpora cannot
    /// overflow the product.
    ///
    /// Words with a repeated letter, or with a letter unseen at some
    /// position, get [`MIN_SCORE`]. Panics if the word length does not match
    /// the model.
    pub fn score(&self, word: &str) -> f64 {
        assert_eq!(
            word.chars().count(),
            self.length(),
            "scored word must match the model length"
        );
        let mut seen = [false; 26];
        let mut total = 0.0;
        for (i, c) in word.chars().enumerate() {
            let Some(idx) = letter_index(c) else {
                return MIN_SCORE;
            };
            if seen[idx] {
                return MIN_SCORE;
            }
            seen[idx] = true;
            let n = self.counts[i][idx];
            if n == 0 {
                return MIN_SCORE;
            }
            total += (n as f64).ln();
        }
        total
    }

    /// Letters seen at `position`, most frequent first. Used by the
    /// distribution display.
    pub fn ranked_letters(&self, position: usize) -> Vec<(char, usize)> {
        let mut letters: Vec<(char, usize)> = self.counts[position]
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(idx, &n)| ((b'a' + idx as u8) as char, n))
            .collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        letters
    }
}
