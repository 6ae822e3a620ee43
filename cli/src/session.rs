use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{anyhow, Context};
use shared::{
    fsm::{Round, RoundCue, RoundEvent, RoundState},
    passages::pick,
    protocol::{ProgressReport, RoundSummary},
    score::{accuracy, report_progress, wpm},
};
use tracing::{debug, info};

/// Time source for a typing round.
pub trait Stopwatch {
    fn start(&mut self);
    /// Seconds since the last `start`.
    fn elapsed_secs(&self) -> f64;
}

#[derive(Default)]
pub struct SystemStopwatch {
    started: Option<Instant>,
}

impl Stopwatch for SystemStopwatch {
    fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    fn elapsed_secs(&self) -> f64 {
        self.started
            .map(|s| s.elapsed().as_secs_f64())
            .unwrap_or_default()
    }
}

/// A typing test over a fixed set of paragraphs.
pub struct TypingTest<'a, F> {
    pub paragraphs: &'a [String],
    pub select: F,
    pub topics: &'a [String],
    pub user_id: u64,
    pub json: bool,
}

impl<F: Fn(&str) -> bool> TypingTest<'_, F> {
    /// Run rounds until the user quits or no paragraph is left, returning
    /// the score of every completed round.
    pub fn run<R, W, S, U>(
        &self,
        input: &mut R,
        output: &mut W,
        stopwatch: &mut S,
        mut upload: U,
    ) -> anyhow::Result<Vec<RoundSummary>>
    where
        R: BufRead,
        W: Write,
        S: Stopwatch,
        U: FnMut(&ProgressReport),
    {
        let mut round = Round::new();
        let mut summaries = Vec::new();
        let mut index = 0;
        let mut source = "";

        loop {
            match *round.state() {
                RoundState::Selecting => match pick(self.paragraphs, &self.select, index) {
                    Some(paragraph) => {
                        source = paragraph;
                        writeln!(output, "Type the following paragraph and then press enter/return.")?;
                        writeln!(output, "If you only type part of it, you will be scored only on that part.\n")?;
                        writeln!(output, "{source}\n")?;
                        output.flush()?;
                        step(&mut round, RoundEvent::Prompted)?;
                    }
                    None => {
                        step(&mut round, RoundEvent::Exhausted)?;
                        writeln!(output, "No more paragraphs about {:?} are available.", self.topics)?;
                    }
                },
                RoundState::Typing => {
                    stopwatch.start();
                    let typed = read_line(input)?.unwrap_or_default();
                    let elapsed = stopwatch.elapsed_secs();
                    if typed.is_empty() {
                        step(&mut round, RoundEvent::Abandoned)?;
                        writeln!(output, "Goodbye.")?;
                        continue;
                    }
                    if let Some(RoundCue::ShowScore) = step(&mut round, RoundEvent::Submitted)? {
                        let summary = self.score(&typed, source, elapsed, &mut upload)?;
                        writeln!(output, "\nNice work!")?;
                        writeln!(output, "Words per minute: {:.1}", summary.wpm)?;
                        writeln!(output, "Accuracy:         {:.1}", summary.accuracy)?;
                        if self.json {
                            writeln!(output, "{}", serde_json::to_string(&summary)?)?;
                        }
                        summaries.push(summary);
                    }
                }
                RoundState::Reviewing => {
                    writeln!(output, "\nPress enter/return for the next paragraph or type q to quit.")?;
                    output.flush()?;
                    match read_line(input)? {
                        Some(line) if line.trim() != "q" => {
                            index += 1;
                            step(&mut round, RoundEvent::Next)?;
                        }
                        _ => {
                            step(&mut round, RoundEvent::Quit)?;
                        }
                    }
                }
                RoundState::Done => break,
            }
        }

        info!("session_rounds = {}", summaries.len());
        Ok(summaries)
    }

    fn score<U>(&self, typed: &str, source: &str, elapsed: f64, upload: &mut U) -> anyhow::Result<RoundSummary>
    where
        U: FnMut(&ProgressReport),
    {
        let typed_words: Vec<&str> = typed.split_whitespace().collect();
        let prompt: Vec<&str> = source.split_whitespace().collect();
        let speed = wpm(typed, elapsed)?;
        let progress = report_progress(&typed_words, &prompt, self.user_id, upload)?;
        let summary = RoundSummary {
            wpm: speed,
            accuracy: accuracy(typed, source),
            progress,
        };
        debug!(?summary, elapsed, "round_scored");
        Ok(summary)
    }
}

fn step(round: &mut Round, event: RoundEvent) -> anyhow::Result<Option<RoundCue>> {
    let from = *round.state();
    round
        .consume(&event)
        .map_err(|_| anyhow!("impossible transition from {from:?} on {event:?}"))
}

/// One line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("reading from stdin")?;
    if n == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
