//! Feeding stopwatch state machine.
//!
//! [`Stopwatch`] holds the phase and the elapsed counter and knows nothing
//! about time passing; something else calls [`Stopwatch::tick`] once per
//! second. See [`crate::ticker`] for the task that does.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the stopwatch is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// Stopped at zero.
    #[default]
    Idle,
    /// Counting.
    Running,
    /// Stopped with the count kept.
    Paused,
}

impl TimerPhase {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one continuous RUNNING stretch.
///
/// Bumped on every transition into RUNNING; ticks scheduled for an older run
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunGeneration(u64);

/// Point-in-time view of the stopwatch for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: TimerPhase,
    pub elapsed_seconds: u64,
}

impl TimerSnapshot {
    /// Whether a save would commit a session.
    pub const fn can_save(&self) -> bool {
        self.elapsed_seconds > 0
    }

    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

/// Single feeding stopwatch with whole-second granularity.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    phase: TimerPhase,
    elapsed_seconds: u64,
    generation: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters RUNNING from IDLE or PAUSED.
    ///
    /// Returns the new run generation, or `None` if already running.
    pub const fn start(&mut self) -> Option<RunGeneration> {
        if matches!(self.phase, TimerPhase::Running) {
            return None;
        }
        self.phase = TimerPhase::Running;
        self.generation += 1;
        Some(RunGeneration(self.generation))
    }

    /// Freezes the count. Returns `false` if the stopwatch was not running.
    pub const fn pause(&mut self) -> bool {
        if !matches!(self.phase, TimerPhase::Running) {
            return false;
        }
        self.phase = TimerPhase::Paused;
        true
    }

    /// Pauses when running, starts otherwise.
    ///
    /// Returns the new run generation when the toggle started the stopwatch.
    pub const fn toggle(&mut self) -> Option<RunGeneration> {
        if self.pause() { None } else { self.start() }
    }

    /// Back to IDLE at zero from any phase.
    pub const fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.elapsed_seconds = 0;
    }

    /// Adds one second if `generation` is the current run.
    ///
    /// Returns `false` for ticks that arrive after a pause, reset, or restart.
    pub fn tick(&mut self, generation: RunGeneration) -> bool {
        if self.phase != TimerPhase::Running || generation.0 != self.generation {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    pub const fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.phase, TimerPhase::Running)
    }

    pub const fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase,
            elapsed_seconds: self.elapsed_seconds,
        }
    }
}

/// Renders seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_elapsed(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
