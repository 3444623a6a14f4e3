//! Command-line argument definitions.

use std::path::PathBuf;

use bl_core::SleepKind;
use clap::{Parser, Subcommand, ValueEnum};

/// Baby routine log.
///
/// Records sleep and wake times, times feedings and keeps notes for the
/// current session. Type `help` at the prompt for the list of commands.
/// Nothing is written to disk.
#[derive(Debug, Parser)]
#[command(name = "bl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// One line typed at the session prompt.
#[derive(Debug, Parser)]
#[command(name = "bl", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands available inside a session.
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Record that the baby fell asleep.
    Sleep,

    /// Record that the baby woke up.
    Wake,

    /// Record a sleep transition by name.
    Record {
        /// `sleep` (or `asleep`) and `wake` (or `awake`).
        kind: SleepKind,
    },

    /// Start or resume the feeding timer.
    Start,

    /// Pause the feeding timer.
    Pause,

    /// Start the timer if stopped, pause it if running.
    Toggle,

    /// Stop the timer and set it back to 00:00.
    Reset,

    /// Save the timed feeding and reset the timer.
    Save,

    /// Show the feeding timer.
    Timer,

    /// Add a note.
    Note {
        /// Note text.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List all notes, newest first.
    Notes,

    /// Show recent entries of a log.
    History {
        /// Which log to show.
        #[arg(value_enum)]
        log: HistoryLog,

        /// Maximum number of entries to show.
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show today's feedings.
    Today,

    /// Show today's totals.
    Stats {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show timer state and log sizes.
    Status,

    /// End the session.
    #[command(alias = "exit")]
    Quit,
}

/// Logs that `history` can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistoryLog {
    Sleep,
    Feeding,
}
