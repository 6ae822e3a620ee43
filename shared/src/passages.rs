use crate::error::{Error, Result};
use crate::normalize::{lower, normalize_words};

/// Built-in passages, used when no paragraph file is available
pub const PASSAGES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog. This pangram contains every letter of the alphabet at least once.",
    "To be or not to be, that is the question: Whether 'tis nobler in the mind to suffer the slings and arrows of outrageous fortune.",
    "It was the best of times, it was the worst of times, it was the age of wisdom, it was the age of foolishness.",
    "All happy families are alike; each unhappy family is unhappy in its own way.",
    "The only way to do great work is to love what you do. If you haven't found it yet, keep looking.",
    "Programming is not about typing, it's about thinking. The keyboard is just the interface between your thoughts and the computer.",
    "Rust empowers everyone to build reliable and efficient software. It prevents segfaults and guarantees thread safety.",
    "A cat will sleep for most of the day and then knock a glass off the table at three in the morning.",
    "Every dog has its day, and the puppy in the yard has decided that today is that day.",
];

/// Return the `k`-th paragraph (zero based) for which `select` returns true,
/// or `None` when fewer than `k + 1` paragraphs match.
pub fn pick<'a, S, F>(paragraphs: &'a [S], select: F, k: usize) -> Option<&'a str>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    paragraphs
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| select(*p))
        .nth(k)
}

/// Build a selector that is true for paragraphs containing any of `topic`'s
/// words once the paragraph is normalized.
///
/// Topic words must already be lowercase.
pub fn about<S: AsRef<str>>(topic: &[S]) -> Result<impl Fn(&str) -> bool> {
    let mut words = Vec::with_capacity(topic.len());
    for word in topic {
        let word = word.as_ref();
        if lower(word) != word {
            return Err(Error::UppercaseTopic(word.to_string()));
        }
        words.push(word.to_string());
    }

    Ok(move |paragraph: &str| {
        let paragraph = normalize_words(paragraph);
        words.iter().any(|w| paragraph.contains(w))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passages_not_empty() {
        assert!(PASSAGES.len() >= 5);
        assert!(PASSAGES.iter().all(|p| !p.trim().is_empty()));
    }

    #[test]
    fn test_pick_kth_match() {
        let ps = ["hi", "how are you", "fine"];
        let short = |p: &str| p.len() <= 4;
        assert_eq!(pick(&ps, short, 0), Some("hi"));
        assert_eq!(pick(&ps, short, 1), Some("fine"));
        assert_eq!(pick(&ps, short, 2), None);
    }

    #[test]
    fn test_pick_from_empty() {
        let ps: [&str; 0] = [];
        assert_eq!(pick(&ps, |_| true, 0), None);
    }

    #[test]
    fn test_about_matches_normalized_words() {
        let about_dogs = about(&["dog", "dogs", "pup", "puppy"]).unwrap();
        let ps = ["Cute Dog!", "That is a cat.", "Nice pup!"];
        assert_eq!(pick(&ps, &about_dogs, 0), Some("Cute Dog!"));
        assert_eq!(pick(&ps, &about_dogs, 1), Some("Nice pup!"));
        assert_eq!(pick(&ps, &about_dogs, 2), None);
    }

    #[test]
    fn test_about_requires_whole_words() {
        let about_cats = about(&["cat"]).unwrap();
        assert!(!about_cats("Concatenate the strings."));
        assert!(about_cats("A CAT, sleeping."));
    }

    #[test]
    fn test_about_rejects_uppercase_topics() {
        assert_eq!(
            about(&["Dog"]).err(),
            Some(Error::UppercaseTopic("Dog".to_string()))
        );
    }

    #[test]
    fn test_builtin_passages_have_topics() {
        let about_dogs = about(&["dog", "puppy"]).unwrap();
        assert!(pick(PASSAGES, &about_dogs, 0).is_some());
    }
}
