use std::collections::HashSet;

use crate::distance::Diff;
use crate::normalize::normalize_words;

/// Return the word in `word_list` closest to `typed_word` under `diff`, or
/// `typed_word` itself when it is already listed or nothing is within `limit`.
///
/// Candidates are scanned in order and the first one with the smallest
/// distance wins.
pub fn autocorrect<'a, S, D>(typed_word: &'a str, word_list: &'a [S], diff: &D, limit: usize) -> &'a str
where
    S: AsRef<str>,
    D: Diff + ?Sized,
{
    if word_list.iter().any(|w| w.as_ref() == typed_word) {
        return typed_word;
    }
    closest(typed_word, word_list.iter().map(AsRef::as_ref), diff, limit)
}

fn closest<'a, D>(typed_word: &'a str, candidates: impl Iterator<Item = &'a str>, diff: &D, limit: usize) -> &'a str
where
    D: Diff + ?Sized,
{
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let d = diff.diff(typed_word, candidate, limit);
        if best.map_or(true, |(_, smallest)| d < smallest) {
            best = Some((candidate, d));
        }
    }

    match best {
        Some((word, d)) if d <= limit => word,
        _ => typed_word,
    }
}

/// A dictionary paired with the distance used to correct against it.
pub struct Autocorrector<D> {
    words: Vec<String>,
    known: HashSet<String>,
    diff: D,
    limit: usize,
}

impl<D: Diff> Autocorrector<D> {
    pub fn new(words: Vec<String>, diff: D, limit: usize) -> Self {
        let known = words.iter().cloned().collect();
        Self {
            words,
            known,
            diff,
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Correct a single word against the dictionary.
    pub fn correct<'a>(&'a self, typed_word: &'a str) -> &'a str {
        if self.known.contains(typed_word) {
            return typed_word;
        }
        closest(typed_word, self.words.iter().map(String::as_str), &self.diff, self.limit)
    }

    /// Normalize every word of `line` and correct each one.
    pub fn correct_line(&self, line: &str) -> Vec<String> {
        normalize_words(line)
            .iter()
            .map(|word| {
                let corrected = self.correct(word);
                if corrected != word {
                    tracing::trace!(typed = %word, corrected, "autocorrected");
                }
                corrected.to_string()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{edit_diff, final_diff, substitution_diff};

    #[test]
    fn test_constant_diff_picks_first_candidate() {
        let ten_diff = |_: &str, _: &str, _: usize| -> usize { 10 };
        let words = ["butter", "hello", "potato"];
        assert_eq!(autocorrect("hwllo", &words, &ten_diff, 20), "butter");
        assert_eq!(autocorrect("hwllo", &words, &ten_diff, 9), "hwllo");
    }

    #[test]
    fn test_first_character_diff() {
        let first_diff =
            |w1: &str, w2: &str, _: usize| -> usize { usize::from(w1.chars().next() != w2.chars().next()) };
        let words = ["testing", "asking", "fasting"];
        assert_eq!(autocorrect("tosting", &words, &first_diff, 10), "testing");
    }

    #[test]
    fn test_known_word_is_returned_without_diffing() {
        let panicking = |_: &str, _: &str, _: usize| -> usize { panic!("diff should not run") };
        let words = ["cat", "dog"];
        assert_eq!(autocorrect("dog", &words, &panicking, 0), "dog");
    }

    #[test]
    fn test_empty_word_list_keeps_typed_word() {
        let words: [&str; 0] = [];
        assert_eq!(autocorrect("cta", &words, &edit_diff, 5), "cta");
    }

    #[test]
    fn test_with_edit_distances() {
        let words = ["cat", "dog", "scat", "coat"];
        assert_eq!(autocorrect("cta", &words, &edit_diff, 2), "cat");
        assert_eq!(autocorrect("dgo", &words, &substitution_diff, 2), "dog");
        assert_eq!(autocorrect("zzzzzz", &words, &substitution_diff, 2), "zzzzzz");
    }

    #[test]
    fn test_dyn_diff() {
        let diff: Box<dyn Diff> = Box::new(final_diff);
        let words = vec!["kittens".to_string(), "mittens".to_string()];
        assert_eq!(autocorrect("ckiteus", &words, diff.as_ref(), 3), "kittens");
    }

    #[test]
    fn test_autocorrector_corrects_lines() {
        let words = ["the", "cat", "sat", "on", "mat"].map(String::from).to_vec();
        let corrector = Autocorrector::new(words, edit_diff, 2);
        assert_eq!(corrector.len(), 5);
        assert!(!corrector.is_empty());
        assert!(Autocorrector::new(Vec::new(), edit_diff, 2).is_empty());
        assert_eq!(corrector.correct("cat"), "cat");
        assert_eq!(corrector.correct("cst"), "cat");
        assert_eq!(
            corrector.correct_line("Teh cat SAT, on the mtt!"),
            vec!["the", "cat", "sat", "on", "the", "mat"]
        );
    }
}
