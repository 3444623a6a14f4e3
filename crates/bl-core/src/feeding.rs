//! Completed feeding sessions.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::log::{HISTORY_CAPACITY, RecordLog};
use crate::types::FeedingSessionId;

/// A timed feeding, summarized by its total duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingSession {
    pub id: FeedingSessionId,
    /// Whole seconds on the timer when the session was saved. Never zero.
    pub duration_seconds: u64,
    /// When the session was saved.
    pub timestamp: DateTime<Local>,
}

impl FeedingSession {
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.timestamp.date_naive() == date
    }
}

/// The most recent feeding sessions, newest first.
#[derive(Debug, Clone)]
pub struct FeedingLog {
    sessions: RecordLog<FeedingSession>,
}

impl Default for FeedingLog {
    fn default() -> Self {
        Self {
            sessions: RecordLog::bounded(HISTORY_CAPACITY),
        }
    }
}

impl FeedingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a session of `duration_seconds`.
    ///
    /// Zero-length sessions are not recorded and `None` is returned.
    pub fn commit(&mut self, duration_seconds: u64, clock: &dyn Clock) -> Option<FeedingSession> {
        if duration_seconds == 0 {
            tracing::debug!("ignoring zero-length feeding session");
            return None;
        }

        let session = FeedingSession {
            id: FeedingSessionId::generate(),
            duration_seconds,
            timestamp: clock.now(),
        };
        tracing::debug!(id = %session.id, duration_seconds, "saved feeding session");

        if let Some(evicted) = self.sessions.push(session.clone()) {
            tracing::trace!(id = %evicted.id, "feeding session left the history window");
        }
        Some(session)
    }

    pub fn recent(&self, n: usize) -> impl Iterator<Item = &FeedingSession> {
        self.sessions.recent(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedingSession> {
        self.sessions.iter()
    }

    /// Sessions saved on `date`, in log order.
    pub fn on(&self, date: NaiveDate) -> impl Iterator<Item = &FeedingSession> {
        self.sessions.iter().filter(move |s| s.is_on(date))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
