//! Core tracking logic for the baby routine log.
//!
//! This crate contains:
//! - Bounded sleep and feeding logs and the unbounded note log
//! - The feeding stopwatch and the task that ticks it
//! - Same-day statistics derived from the logs
//! - [`Tracker`], the application state that owns all of the above

pub mod clock;
pub mod feeding;
pub mod format;
mod log;
pub mod note;
pub mod sleep;
pub mod stats;
pub mod ticker;
pub mod timer;
mod tracker;
mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use feeding::{FeedingLog, FeedingSession};
pub use format::TimestampFormat;
pub use log::{HISTORY_CAPACITY, RecordLog};
pub use note::{Note, NoteLog};
pub use sleep::{SleepEvent, SleepKind, SleepLog};
pub use stats::DailyStats;
pub use ticker::{FeedingTimer, TICK_PERIOD};
pub use timer::{Stopwatch, TimerPhase, TimerSnapshot, format_elapsed};
pub use tracker::Tracker;
pub use types::{FeedingSessionId, NoteId, SleepEventId, ValidationError};
