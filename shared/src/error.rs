//! Error types for the typing core.

use thiserror::Error;

/// Result type alias using the core's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations raised by the scoring and race functions.
///
/// Every variant is a caller error; nothing here is transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("elapsed time must be positive, got {0}")]
    NonPositiveElapsed(f64),

    #[error("prompt must contain at least one word")]
    EmptyPrompt,

    #[error("topics should be lowercase: {0:?}")]
    UppercaseTopic(String),

    #[error("player {player} has {actual} times, expected one per word ({expected})")]
    TimeCountMismatch {
        player: usize,
        expected: usize,
        actual: usize,
    },

    #[error("player {player} has {actual} timestamps, expected {expected} (start plus one per word)")]
    TimestampCountMismatch {
        player: usize,
        expected: usize,
        actual: usize,
    },

    #[error("time for player {player} at word {word} is not a finite number")]
    NonNumericTime { player: usize, word: usize },

    #[error("word_index {index} out of range of {len} words")]
    WordOutOfRange { index: usize, len: usize },

    #[error("player_num {index} out of range of {len} players")]
    PlayerOutOfRange { index: usize, len: usize },
}
