use crate::error::{Error, Result};
use crate::protocol::ProgressReport;

/// Percentage of `typed` words that match `source` position by position.
///
/// Words are compared exactly, so case and punctuation count. Typed words
/// beyond the end of `source` are mistakes; source words the user never got
/// to are not.
pub fn accuracy(typed: &str, source: &str) -> f64 {
    let typed_words: Vec<&str> = typed.split_whitespace().collect();
    let source_words: Vec<&str> = source.split_whitespace().collect();

    match (typed_words.is_empty(), source_words.is_empty()) {
        (true, true) => return 100.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let mistyped = typed_words
        .iter()
        .zip(&source_words)
        .filter(|(t, s)| t != s)
        .count();
    let extra = typed_words.len().saturating_sub(source_words.len());

    (1.0 - (mistyped + extra) as f64 / typed_words.len() as f64) * 100.0
}

/// Words per minute, counting five characters as one word.
pub fn wpm(typed: &str, elapsed: f64) -> Result<f64> {
    // `!(elapsed > 0.0)` also rejects NaN
    if !(elapsed > 0.0) {
        return Err(Error::NonPositiveElapsed(elapsed));
    }
    Ok((typed.chars().count() as f64 / 5.0) * (60.0 / elapsed))
}

/// Fraction of `prompt` typed correctly before the first mistake.
pub fn compute_progress_ratio<P, T>(prompt: &[P], typed: &[T]) -> Result<f64>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    if prompt.is_empty() {
        return Err(Error::EmptyPrompt);
    }
    let correct = typed
        .iter()
        .zip(prompt)
        .take_while(|(t, p)| t.as_ref() == p.as_ref())
        .count();
    Ok(correct as f64 / prompt.len() as f64)
}

/// Compute progress, hand it to `upload` and return it.
pub fn report_progress<P, T, U>(typed: &[T], prompt: &[P], user_id: u64, mut upload: U) -> Result<f64>
where
    P: AsRef<str>,
    T: AsRef<str>,
    U: FnMut(&ProgressReport),
{
    let progress = compute_progress_ratio(prompt, typed)?;
    tracing::debug!(user_id, progress, "progress_computed");
    upload(&ProgressReport { id: user_id, progress });
    Ok(progress)
}
