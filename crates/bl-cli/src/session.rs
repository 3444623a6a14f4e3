//! Interactive session loop.
//!
//! Reads one command per line, applies it to the [`Tracker`] and writes the
//! result. The tracker lives exactly as long as the session, so ending the
//! session also cancels a running feeding timer.

use std::io::Write;

use anyhow::{Context, Result};
use bl_core::{SleepKind, Tracker};
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::cli::{HistoryLog, SessionCommand, SessionLine};
use crate::commands::{View, feeding, notes, sleep, stats, status};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    tracker: Tracker,
    view: View,
    timezone: String,
    prompt: bool,
}

impl Session {
    pub fn new(tracker: Tracker, view: View) -> Self {
        Self {
            tracker,
            view,
            timezone: status::local_timezone(),
            prompt: false,
        }
    }

    /// Print `> ` before reading each line.
    #[must_use]
    pub const fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub const fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Runs until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(writer, "> ")?;
                writer.flush()?;
            }

            let Some(line) = lines.next_line().await.context("failed to read input")? else {
                tracing::debug!("end of input");
                break;
            };

            if self.execute(&line, writer)? == Flow::Quit {
                break;
            }
            writer.flush()?;
        }
        Ok(())
    }

    /// Parses and applies a single line.
    ///
    /// Parse errors and help output are written to `writer`; they do not end
    /// the session.
    pub fn execute<W: Write>(&mut self, line: &str, writer: &mut W) -> Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                write!(writer, "{err}")?;
                return Ok(Flow::Continue);
            }
        };
        tracing::debug!(?command, "executing");

        let tracker = &mut self.tracker;
        let view = &self.view;
        match command {
            SessionCommand::Sleep => sleep::record(writer, tracker, view, SleepKind::SleepStart)?,
            SessionCommand::Wake => sleep::record(writer, tracker, view, SleepKind::Wake)?,
            SessionCommand::Record { kind } => sleep::record(writer, tracker, view, kind)?,
            SessionCommand::Start => feeding::timer(writer, tracker.start_timer())?,
            SessionCommand::Pause => feeding::timer(writer, tracker.pause_timer())?,
            SessionCommand::Toggle => feeding::timer(writer, tracker.toggle_timer())?,
            SessionCommand::Reset => feeding::timer(writer, tracker.reset_timer())?,
            SessionCommand::Timer => feeding::timer(writer, tracker.timer())?,
            SessionCommand::Save => feeding::save(writer, tracker, view)?,
            SessionCommand::Note { text } => notes::add(writer, tracker, view, &text.join(" "))?,
            SessionCommand::Notes => notes::list(writer, tracker, view)?,
            SessionCommand::History { log, limit, json } => match log {
                HistoryLog::Sleep => sleep::history(writer, tracker, view, limit, json)?,
                HistoryLog::Feeding => feeding::history(writer, tracker, view, limit, json)?,
            },
            SessionCommand::Today => feeding::today(writer, tracker, view)?,
            SessionCommand::Stats { json } => stats::run(writer, tracker, view, json)?,
            SessionCommand::Status => status::run(writer, tracker, &self.timezone)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
