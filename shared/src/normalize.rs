// Word normalization used by topic selection and the autocorrect dictionary.
// Typographic characters are folded to ASCII first so that "it’s" and "it's"
// normalize to the same word.

fn is_dash(c: char) -> bool {
    matches!(
        c,
        '\u{2010}'..='\u{2015}' | '\u{2043}' | '\u{2212}' | '\u{2E3A}' | '\u{2E3B}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}'
    )
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
        || matches!(
            c,
            '\u{0085}' | '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
        )
}

/// Fold a typographic character to its ASCII look-alike.
pub fn normalize_char(c: char) -> char {
    match c {
        '\u{2018}'..='\u{201B}' | '\u{2032}' | '\u{FF07}' => '\'',
        '\u{201C}'..='\u{201F}' | '\u{2033}' | '\u{00AB}' | '\u{00BB}' | '\u{2039}' | '\u{203A}' | '\u{FF02}' => '"',
        '\u{2053}' => '~',
        '\u{2026}' => '.',
        c if is_dash(c) => '-',
        c if is_space(c) => ' ',
        _ => c,
    }
}

/// Zero-width characters, word joiners and the soft hyphen.
pub fn is_skippable(c: char) -> bool {
    matches!(c, '\u{00AD}' | '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Drop ASCII punctuation (after typographic folding) and invisible codepoints.
/// Typographic dashes and the ellipsis separate words, so they become spaces.
pub fn remove_punctuation(s: &str) -> String {
    s.chars()
        .filter(|c| !is_skippable(*c))
        .map(|c| match c {
            '\u{2026}' => ' ',
            c if is_dash(c) => ' ',
            c => normalize_char(c),
        })
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Whitespace split with no empty tokens.
pub fn split(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Lowercase, strip punctuation and split into words.
pub fn normalize_words(s: &str) -> Vec<String> {
    remove_punctuation(&lower(s))
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
