use std::{fs, io::Write, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::{
    autocorrect::Autocorrector,
    distance::{edit_diff, substitution_diff, Diff, FinalDiff},
    race::{fastest_words, time_per_word},
};
use tracing::{debug, warn};

use crate::config::Metric;

/// Print the autocorrection of every entry of `input`, one line each.
pub fn correct<W: Write>(
    input: &[String],
    dictionary: Vec<String>,
    metric: Metric,
    limit: usize,
    diff_floor: usize,
    out: &mut W,
) -> anyhow::Result<()> {
    match metric {
        Metric::Substitution => write_corrections(&Autocorrector::new(dictionary, substitution_diff, limit), input, out),
        Metric::Edit => write_corrections(&Autocorrector::new(dictionary, edit_diff, limit), input, out),
        Metric::Final => write_corrections(&Autocorrector::new(dictionary, FinalDiff::new(diff_floor), limit), input, out),
    }
}

fn write_corrections<D: Diff, W: Write>(
    corrector: &Autocorrector<D>,
    input: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    if corrector.is_empty() {
        warn!("dictionary is empty, words are printed as typed");
    }
    debug!("dictionary_size = {}, limit = {}", corrector.len(), corrector.limit());
    for line in input {
        writeln!(out, "{}", corrector.correct_line(line).join(" "))?;
    }
    Ok(())
}

/// Absolute timestamps of a finished race, as stored on disk.
#[derive(Deserialize, Debug)]
pub struct RaceRecord {
    pub words: Vec<String>,
    /// Per player: start time, then the time each word was finished.
    pub timestamps: Vec<Vec<f64>>,
}

pub fn fastest<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading race record {}", path.display()))?;
    let record: RaceRecord = serde_json::from_str(&content)
        .with_context(|| format!("parsing race record {}", path.display()))?;
    let race = time_per_word(record.words, &record.timestamps)?;
    debug!("race = {}", race);

    for (player, words) in fastest_words(&race).iter().enumerate() {
        writeln!(out, "Player {}: {}", player, words.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<String> {
        ["the", "cat", "sat", "on", "mat"].iter().map(|w| w.to_string()).collect()
    }

    fn corrected(input: &[&str], metric: Metric, limit: usize) -> String {
        let input: Vec<String> = input.iter().map(|w| w.to_string()).collect();
        let mut out = Vec::new();
        correct(&input, dictionary(), metric, limit, 6, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn corrects_each_input_line() {
        assert_eq!(corrected(&["Teh cat", "mtt"], Metric::Edit, 2), "the cat\nmat\n");
        assert_eq!(corrected(&["cst"], Metric::Substitution, 1), "cat\n");
    }

    #[test]
    fn empty_dictionary_keeps_normalized_words() {
        let mut out = Vec::new();
        correct(&["Teh CAT!".to_string()], Vec::new(), Metric::Edit, 2, 6, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "teh cat\n");
    }

    #[test]
    fn final_metric_ignores_limit_when_measuring() {
        // "teh" is two edits from "the"; with limit 1 it stays as typed
        assert_eq!(corrected(&["teh"], Metric::Final, 1), "teh\n");
        assert_eq!(corrected(&["teh"], Metric::Final, 2), "the\n");
    }

    #[test]
    fn fastest_reads_a_race_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("race.json");
        fs::write(
            &path,
            r#"{"words":["collar","plush","blush","repute"],
                "timestamps":[[75,81,84,90,92],[19,29,35,36,38]]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        fastest(&path, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Player 0: collar, plush, repute\nPlayer 1: blush\n"
        );
    }

    #[test]
    fn fastest_rejects_short_timestamp_lists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("race.json");
        fs::write(&path, r#"{"words":["a","b"],"timestamps":[[0,1]]}"#).unwrap();
        let err = fastest(&path, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("timestamps"));
    }
}
