//! The feeding timer: a [`Stopwatch`] driven by a cancellable tick task.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

use crate::timer::{RunGeneration, Stopwatch, TimerSnapshot};

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A single feeding stopwatch that counts on its own while running.
///
/// `start` spawns a periodic task on the given runtime; `pause`, `reset` and
/// dropping the timer abort it. The stopwatch state is updated before the task
/// is aborted, so a tick already in flight sees a stale run generation and is
/// discarded.
#[derive(Debug)]
pub struct FeedingTimer {
    stopwatch: Arc<Mutex<Stopwatch>>,
    runtime: Handle,
    period: Duration,
    tick_task: Option<JoinHandle<()>>,
}

impl FeedingTimer {
    pub fn new(runtime: Handle) -> Self {
        Self::with_period(runtime, TICK_PERIOD)
    }

    /// A timer that ticks every `period` instead of every second.
    ///
    /// Each tick still adds exactly one second to the elapsed count.
    pub fn with_period(runtime: Handle, period: Duration) -> Self {
        Self {
            stopwatch: Arc::new(Mutex::new(Stopwatch::new())),
            runtime,
            period,
            tick_task: None,
        }
    }

    pub fn start(&mut self) -> TimerSnapshot {
        let started = self.stopwatch().start();
        if let Some(generation) = started {
            tracing::debug!(?generation, "feeding timer started");
            self.schedule(generation);
        }
        self.snapshot()
    }

    pub fn pause(&mut self) -> TimerSnapshot {
        let paused = self.stopwatch().pause();
        if paused {
            self.cancel_tick();
            tracing::debug!(elapsed = self.elapsed_seconds(), "feeding timer paused");
        }
        self.snapshot()
    }

    pub fn toggle(&mut self) -> TimerSnapshot {
        if self.stopwatch().is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> TimerSnapshot {
        self.stopwatch().reset();
        self.cancel_tick();
        tracing::debug!("feeding timer reset");
        self.snapshot()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.stopwatch().snapshot()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.stopwatch().elapsed_seconds()
    }

    /// Whether a tick task is currently scheduled.
    pub fn is_ticking(&self) -> bool {
        self.tick_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    fn stopwatch(&self) -> MutexGuard<'_, Stopwatch> {
        self.stopwatch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn schedule(&mut self, generation: RunGeneration) {
        self.cancel_tick();

        let stopwatch = Arc::clone(&self.stopwatch);
        let period = self.period;
        self.tick_task = Some(self.runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let mut state = stopwatch.lock().unwrap_or_else(PoisonError::into_inner);
                if !state.tick(generation) {
                    tracing::debug!(?generation, "dropping tick for a finished run");
                    break;
                }
                tracing::trace!(elapsed = state.elapsed_seconds(), "tick");
            }
        }));
    }

    fn cancel_tick(&mut self) {
        if let Some(task) = self.tick_task.take() {
            task.abort();
        }
    }
}

impl Drop for FeedingTimer {
    fn drop(&mut self) {
        self.cancel_tick();
    }
}
