//! Sleep and wake transitions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::log::{HISTORY_CAPACITY, RecordLog};
use crate::types::{SleepEventId, ValidationError};

/// Which transition was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepKind {
    /// The baby fell asleep.
    #[serde(rename = "sleep")]
    SleepStart,
    /// The baby woke up.
    Wake,
}

impl SleepKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SleepStart => "sleep",
            Self::Wake => "wake",
        }
    }

    /// Human-facing label for history views.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SleepStart => "Fell asleep",
            Self::Wake => "Woke up",
        }
    }
}

impl fmt::Display for SleepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SleepKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sleep" | "sleep_start" | "asleep" => Ok(Self::SleepStart),
            "wake" | "awake" => Ok(Self::Wake),
            _ => Err(ValidationError::InvalidSleepKind {
                value: s.to_string(),
            }),
        }
    }
}

/// A recorded sleep or wake transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepEvent {
    pub id: SleepEventId,
    pub kind: SleepKind,
    /// Captured once when the event is recorded.
    pub timestamp: DateTime<Local>,
}

/// The most recent sleep/wake transitions, newest first.
#[derive(Debug, Clone)]
pub struct SleepLog {
    events: RecordLog<SleepEvent>,
}

impl Default for SleepLog {
    fn default() -> Self {
        Self {
            events: RecordLog::bounded(HISTORY_CAPACITY),
        }
    }
}

impl SleepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a transition stamped with the clock's current instant.
    pub fn record_event(&mut self, kind: SleepKind, clock: &dyn Clock) -> SleepEvent {
        let event = SleepEvent {
            id: SleepEventId::generate(),
            kind,
            timestamp: clock.now(),
        };
        tracing::debug!(id = %event.id, %kind, "recorded sleep event");

        if let Some(evicted) = self.events.push(event.clone()) {
            tracing::trace!(id = %evicted.id, "sleep event left the history window");
        }
        event
    }

    pub fn recent(&self, n: usize) -> impl Iterator<Item = &SleepEvent> {
        self.events.recent(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SleepEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::clock::ManualClock;

    fn clock() -> ManualClock {
        ManualClock::new(Local.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap())
    }

    #[test]
    fn kind_roundtrips_through_str() {
        for kind in [SleepKind::SleepStart, SleepKind::Wake] {
            let parsed: SleepKind = kind.to_string().parse().expect("should parse");
            assert_eq!(parsed, kind);
        }
        assert!("nap".parse::<SleepKind>().is_err());
    }

    #[test]
    fn kind_serializes_as_short_name() {
        assert_eq!(
            serde_json::to_string(&SleepKind::SleepStart).unwrap(),
            "\"sleep\""
        );
        assert_eq!(serde_json::to_string(&SleepKind::Wake).unwrap(), "\"wake\"");
    }

    #[test]
    fn record_event_returns_what_it_stored() {
        let clock = clock();
        let mut log = SleepLog::new();

        let event = log.record_event(SleepKind::SleepStart, &clock);

        assert_eq!(event.kind, SleepKind::SleepStart);
        assert_eq!(event.timestamp, clock.now());
        assert_eq!(log.iter().next(), Some(&event));
    }

    #[test]
    fn fifteen_events_keep_the_ten_most_recent() {
        let clock = clock();
        let mut log = SleepLog::new();
        let mut recorded = Vec::new();

        for i in 0..15 {
            let kind = if i % 2 == 0 {
                SleepKind::SleepStart
            } else {
                SleepKind::Wake
            };
            recorded.push(log.record_event(kind, &clock));
            clock.advance(Duration::minutes(20));
        }

        assert_eq!(log.len(), HISTORY_CAPACITY);
        let expected: Vec<_> = recorded.iter().rev().take(10).collect();
        let actual: Vec<_> = log.iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn recent_returns_newest_first() {
        let clock = clock();
        let mut log = SleepLog::new();
        log.record_event(SleepKind::SleepStart, &clock);
        let wake = log.record_event(SleepKind::Wake, &clock);

        let recent: Vec<_> = log.recent(1).collect();
        assert_eq!(recent, vec![&wake]);
        assert_eq!(log.recent(5).count(), 2);
    }

    #[test]
    fn ids_are_unique_for_same_instant() {
        let clock = clock();
        let mut log = SleepLog::new();
        let a = log.record_event(SleepKind::SleepStart, &clock);
        let b = log.record_event(SleepKind::SleepStart, &clock);
        assert_eq!(a.timestamp, b.timestamp);
        assert_ne!(a.id, b.id);
    }
}
