use std::{collections::HashSet, fs, path::Path};

use shared::{normalize::normalize_words, passages::PASSAGES};
use tracing::{info, warn};

/// Read paragraphs from `path`, falling back to the built-in passages when
/// the file is missing or has nothing usable in it.
pub fn load_paragraphs(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let paragraphs = parse_paragraphs(&content);
            if paragraphs.is_empty() {
                warn!("paragraph_file_empty = {}", path.display());
                return builtin_paragraphs();
            }
            info!("paragraph_source = file, count = {}", paragraphs.len());
            paragraphs
        }
        Err(e) => {
            warn!("paragraph_file_unavailable = {}: {}", path.display(), e);
            builtin_paragraphs()
        }
    }
}

fn builtin_paragraphs() -> Vec<String> {
    warn!("paragraph_source = fallback_static");
    PASSAGES.iter().map(|p| p.to_string()).collect()
}

/// One paragraph per non-blank line, whitespace collapsed.
pub fn parse_paragraphs(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize_space)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Read the autocorrect word list from `path`. Without one, the dictionary is
/// every distinct word of `paragraphs`.
pub fn load_words(path: &Path, paragraphs: &[String]) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let words = dedup(content.lines().map(|l| l.trim().to_lowercase()));
            info!("word_source = file, count = {}", words.len());
            words
        }
        Err(e) => {
            warn!("word_file_unavailable = {}: {}", path.display(), e);
            dedup(paragraphs.iter().flat_map(|p| normalize_words(p)))
        }
    }
}

fn dedup(words: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .filter(|w| !w.is_empty() && seen.insert(w.clone()))
        .collect()
}

fn normalize_space(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
