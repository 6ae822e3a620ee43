mod commands;
mod config;
mod session;
mod source;

use std::io;

use clap::Parser;
use rand::seq::SliceRandom;
use shared::{passages::about, protocol::ProgressReport};
use tracing::info;

use config::{Cli, Command};
use session::{SystemStopwatch, TypingTest};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the prompt.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();

    match cli.command {
        Command::Test {
            topics,
            shuffle,
            json,
        } => {
            let mut paragraphs = source::load_paragraphs(&cli.paragraphs);
            if shuffle {
                paragraphs.shuffle(&mut rand::thread_rng());
            }
            let topics: Vec<String> = topics.iter().map(|t| t.to_lowercase()).collect();
            let select = about(&topics)?;
            let test = TypingTest {
                paragraphs: &paragraphs,
                select: |p: &str| topics.is_empty() || select(p),
                topics: &topics,
                user_id: cli.user_id,
                json,
            };
            let upload = |report: &ProgressReport| {
                info!("progress_report id = {}, progress = {}", report.id, report.progress);
            };
            test.run(
                &mut io::stdin().lock(),
                &mut stdout.lock(),
                &mut SystemStopwatch::default(),
                upload,
            )?;
        }
        Command::Correct {
            input,
            metric,
            limit,
        } => {
            let paragraphs = source::load_paragraphs(&cli.paragraphs);
            let dictionary = source::load_words(&cli.words, &paragraphs);
            commands::correct(&input, dictionary, metric, limit, cli.diff_floor, &mut stdout.lock())?;
        }
        Command::Fastest { file } => {
            commands::fastest(&file, &mut stdout.lock())?;
        }
    }
    Ok(())
}
