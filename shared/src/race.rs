//! Per-word timing across the players of a race.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Words of a race and how long each player took to type each of them.
///
/// `times[player][word]` is a duration. Every player has exactly one
/// duration per word; this is checked when the match is built and it cannot
/// be changed afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawMatch")]
pub struct Match {
    words: Vec<String>,
    times: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawMatch {
    words: Vec<String>,
    times: Vec<Vec<f64>>,
}

impl TryFrom<RawMatch> for Match {
    type Error = Error;

    fn try_from(raw: RawMatch) -> Result<Self> {
        Match::new(raw.words, raw.times)
    }
}

impl Match {
    pub fn new(words: Vec<String>, times: Vec<Vec<f64>>) -> Result<Self> {
        for (player, player_times) in times.iter().enumerate() {
            if player_times.len() != words.len() {
                return Err(Error::TimeCountMismatch {
                    player,
                    expected: words.len(),
                    actual: player_times.len(),
                });
            }
            if let Some(word) = player_times.iter().position(|t| !t.is_finite()) {
                return Err(Error::NonNumericTime { player, word });
            }
        }
        Ok(Self { words, times })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn times(&self) -> &[Vec<f64>] {
        &self.times
    }

    pub fn player_count(&self) -> usize {
        self.times.len()
    }

    pub fn word(&self, word_index: usize) -> Result<&str> {
        self.words
            .get(word_index)
            .map(String::as_str)
            .ok_or(Error::WordOutOfRange {
                index: word_index,
                len: self.words.len(),
            })
    }

    /// Time `player` took to type the word at `word_index`.
    pub fn time(&self, player: usize, word_index: usize) -> Result<f64> {
        if word_index >= self.words.len() {
            return Err(Error::WordOutOfRange {
                index: word_index,
                len: self.words.len(),
            });
        }
        let player_times = self.times.get(player).ok_or(Error::PlayerOutOfRange {
            index: player,
            len: self.times.len(),
        })?;
        Ok(player_times[word_index])
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match({:?}, {:?})", self.words, self.times)
    }
}

/// Build a [`Match`] from absolute timestamps.
///
/// Each player's sequence starts with the time they began typing, followed by
/// the time they finished each word, so it must hold `words.len() + 1`
/// entries.
pub fn time_per_word(words: Vec<String>, times_per_player: &[Vec<f64>]) -> Result<Match> {
    let expected = words.len() + 1;
    let mut times = Vec::with_capacity(times_per_player.len());
    for (player, timestamps) in times_per_player.iter().enumerate() {
        if timestamps.len() != expected {
            return Err(Error::TimestampCountMismatch {
                player,
                expected,
                actual: timestamps.len(),
            });
        }
        times.push(timestamps.windows(2).map(|w| w[1] - w[0]).collect());
    }
    Match::new(words, times)
}

/// For every player, the words they typed faster than everyone else, in
/// prompt order. Ties go to the lower-numbered player.
pub fn fastest_words(race: &Match) -> Vec<Vec<String>> {
    let mut fastest = vec![Vec::new(); race.player_count()];
    for (word_index, word) in race.words.iter().enumerate() {
        let mut winner: Option<(usize, f64)> = None;
        for (player, player_times) in race.times.iter().enumerate() {
            let t = player_times[word_index];
            if winner.map_or(true, |(_, best)| t < best) {
                winner = Some((player, t));
            }
        }
        if let Some((player, _)) = winner {
            fastest[player].push(word.clone());
        }
    }
    fastest
}
