//! Wall-clock access.
//!
//! Every record captures its timestamp through a [`Clock`], and "today" is
//! evaluated against the same clock at read time. Tests swap in a
//! [`ManualClock`] to cross midnight without waiting for it.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local, NaiveDate};

/// Source of the current local instant.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// The current calendar date in the observer's time zone.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Local>>,
}

impl ManualClock {
    pub const fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, instant: DateTime<Local>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
