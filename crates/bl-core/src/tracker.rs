//! Application state shared with the presentation layer.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::runtime::Handle;

use crate::clock::{Clock, SystemClock};
use crate::feeding::{FeedingLog, FeedingSession};
use crate::note::{Note, NoteLog};
use crate::sleep::{SleepEvent, SleepKind, SleepLog};
use crate::stats::DailyStats;
use crate::ticker::{FeedingTimer, TICK_PERIOD};
use crate::timer::TimerSnapshot;

/// Owns every log and the feeding timer for the lifetime of the process.
///
/// Built once at startup and handed to the presentation layer by reference;
/// the methods here are the only way to mutate the logs. Dropping the tracker
/// cancels a running timer.
#[derive(Debug)]
pub struct Tracker {
    clock: Arc<dyn Clock>,
    sleep: SleepLog,
    feeding: FeedingLog,
    notes: NoteLog,
    timer: FeedingTimer,
}

impl Tracker {
    /// A tracker on the system clock with a one-second tick.
    pub fn new(runtime: Handle) -> Self {
        Self::with_clock(runtime, Arc::new(SystemClock), TICK_PERIOD)
    }

    pub fn with_clock(runtime: Handle, clock: Arc<dyn Clock>, tick_period: Duration) -> Self {
        Self {
            clock,
            sleep: SleepLog::new(),
            feeding: FeedingLog::new(),
            notes: NoteLog::new(),
            timer: FeedingTimer::with_period(runtime, tick_period),
        }
    }

    // ========== Sleep ==========

    pub fn record_event(&mut self, kind: SleepKind) -> SleepEvent {
        self.sleep.record_event(kind, self.clock.as_ref())
    }

    pub const fn sleep_log(&self) -> &SleepLog {
        &self.sleep
    }

    // ========== Feeding ==========

    pub fn start_timer(&mut self) -> TimerSnapshot {
        self.timer.start()
    }

    pub fn pause_timer(&mut self) -> TimerSnapshot {
        self.timer.pause()
    }

    pub fn toggle_timer(&mut self) -> TimerSnapshot {
        self.timer.toggle()
    }

    pub fn reset_timer(&mut self) -> TimerSnapshot {
        self.timer.reset()
    }

    pub fn timer(&self) -> TimerSnapshot {
        self.timer.snapshot()
    }

    /// Commits a session of `elapsed_seconds` and resets the timer.
    ///
    /// With zero elapsed seconds nothing is recorded and the timer is left as
    /// it was.
    pub fn save_session(&mut self, elapsed_seconds: u64) -> Option<FeedingSession> {
        let session = self.feeding.commit(elapsed_seconds, self.clock.as_ref())?;
        self.timer.reset();
        Some(session)
    }

    /// Saves whatever the timer currently shows.
    pub fn save_current_session(&mut self) -> Option<FeedingSession> {
        let elapsed = self.timer.elapsed_seconds();
        self.save_session(elapsed)
    }

    pub const fn feeding_log(&self) -> &FeedingLog {
        &self.feeding
    }

    // ========== Notes ==========

    pub fn add_note(&mut self, content: impl Into<String>) -> Option<Note> {
        self.notes.add_note(content, self.clock.as_ref())
    }

    pub const fn notes(&self) -> &NoteLog {
        &self.notes
    }

    // ========== Stats ==========

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn daily_stats(&self) -> DailyStats {
        DailyStats::compute(&self.sleep, &self.feeding, self.today())
    }
}
