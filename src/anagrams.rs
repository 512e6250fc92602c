use std::collections::HashSet;

/// Canonical form for anagram comparison: the word's letters, sorted.
pub fn signature(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Every word in `words` sharing the query's letters. The query need not be
/// in the list, and any word length is allowed.
pub fn find_anagrams(query: &str, words: &[String]) -> Vec<String> {
    let target = signature(query);
    words
        .iter()
        .filter(|word| signature(word) == target)
        .cloned()
        .collect()
}

/// The distinct sorted-letter signatures of a corpus, sorted. A signature
/// reads as a word itself, so the result can be scored like one.
pub fn anagram_groups(corpus: &[String]) -> Vec<String> {
    let groups: HashSet<String> = corpus.iter().map(|word| signature(word)).collect();
    let mut groups: Vec<String> = groups.into_iter().collect();
    groups.sort_unstable();
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_signature_sorts_letters() {
        assert_eq!(signature("alert"), "aelrt");
        assert_eq!(signature("later"), "aelrt");
        assert_eq!(signature(""), "");
    }

    #[test]
    fn test_find_anagrams_matches_letter_multiset() {
        let list = words(&["alert", "later", "alter", "zzzzz"]);
        let mut found = find_anagrams("alert", &list);
        found.sort_unstable();
        assert_eq!(found, vec!["alert", "alter", "later"]);
    }

    #[test]
    fn test_find_anagrams_query_outside_corpus() {
        let list = words(&["stop", "tops", "opts"]);
        let mut found = find_anagrams("post", &list);
        found.sort_unstable();
        assert_eq!(found, vec!["opts", "stop", "tops"]);
    }

    #[test]
    fn test_find_anagrams_respects_letter_counts() {
        // Same letters, different multiplicity.
        let list = words(&["lees", "else", "eels", "see"]);
        let mut found = find_anagrams("eels", &list);
        found.sort_unstable();
        assert_eq!(found, vec!["eels", "else", "lees"]);
    }

    #[test]
    fn test_anagram_groups_deduplicates_signatures() {
        let list = words(&["alert", "later", "alter", "crane", "nacre"]);
        assert_eq!(anagram_groups(&list), vec!["acenr", "aelrt"]);
    }
}
