use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use shared::distance::FINAL_DIFF_LIMIT;

/// Measure typing speed and accuracy on the command line.
///
/// Every global option can also come from the environment or a `.env` file.
#[derive(Parser, Debug)]
#[command(name = "typist", version)]
pub struct Cli {
    /// Paragraph file, one paragraph per line
    #[arg(long, global = true, env = "TYPIST_PARAGRAPHS", default_value = "data/sample_paragraphs.txt")]
    pub paragraphs: PathBuf,

    /// Word list used by autocorrect, one word per line
    #[arg(long, global = true, env = "TYPIST_WORDS", default_value = "data/words.txt")]
    pub words: PathBuf,

    /// Id attached to progress reports
    #[arg(long, global = true, env = "TYPIST_USER_ID", default_value_t = 0)]
    pub user_id: u64,

    /// Smallest edit budget the `final` metric runs with
    #[arg(long, global = true, env = "TYPIST_DIFF_FLOOR", default_value_t = FINAL_DIFF_LIMIT)]
    pub diff_floor: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive typing test
    Test {
        /// Only use paragraphs mentioning one of these words
        topics: Vec<String>,

        /// Shuffle paragraph order
        #[arg(long)]
        shuffle: bool,

        /// Also print each round's score as a JSON line
        #[arg(long)]
        json: bool,
    },
    /// Autocorrect words against the word list
    Correct {
        /// Words or phrases to correct
        #[arg(required = true)]
        input: Vec<String>,

        #[arg(long, value_enum, default_value_t = Metric::Final)]
        metric: Metric,

        /// Largest accepted distance
        #[arg(long, default_value_t = 2)]
        limit: usize,
    },
    /// Report which words each player typed fastest
    Fastest {
        /// JSON file with `words` and per-player `timestamps`
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Position-wise substitutions plus length difference
    Substitution,
    /// Insertions, deletions and substitutions, pruned at the limit
    Edit,
    /// Edit distance with a budget of at least the diff floor
    Final,
}
