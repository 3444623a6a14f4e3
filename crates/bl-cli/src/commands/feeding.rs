//! Feeding timer and session commands.

use std::io::Write;

use anyhow::Result;
use bl_core::{TimerSnapshot, Tracker, format_elapsed};

use super::View;

/// Suffix appended to timer readouts once a save would commit a session.
const READY_TO_SAVE: &str = " (ready to save)";

/// Prints the timer as `Timer <phase>: MM:SS`, flagging when it can be saved.
pub fn timer<W: Write>(writer: &mut W, snapshot: TimerSnapshot) -> Result<()> {
    writeln!(
        writer,
        "Timer {}: {}{}",
        snapshot.phase,
        snapshot.display(),
        save_hint(snapshot)
    )?;
    Ok(())
}

pub(crate) const fn save_hint(snapshot: TimerSnapshot) -> &'static str {
    if snapshot.can_save() {
        READY_TO_SAVE
    } else {
        ""
    }
}

/// Saves the timed session, if any time has been counted.
pub fn save<W: Write>(writer: &mut W, tracker: &mut Tracker, view: &View) -> Result<()> {
    let shown = tracker.timer();
    if !shown.can_save() {
        writeln!(writer, "Nothing to save: timer is at {}", shown.display())?;
        return Ok(());
    }

    if let Some(session) = tracker.save_current_session() {
        writeln!(
            writer,
            "Saved feeding of {} at {}",
            format_elapsed(session.duration_seconds),
            view.format.time(&session.timestamp)
        )?;
    }
    Ok(())
}

/// Lists recent sessions from any day, newest first.
pub fn history<W: Write>(
    writer: &mut W,
    tracker: &Tracker,
    view: &View,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let limit = limit.unwrap_or(view.history_limit);
    let sessions: Vec<_> = tracker.feeding_log().recent(limit).collect();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&sessions)?)?;
        return Ok(());
    }

    if tracker.feeding_log().is_empty() {
        writeln!(writer, "No feedings yet.")?;
        return Ok(());
    }

    writeln!(writer, "Recent feedings ({}):", sessions.len())?;
    for session in sessions {
        writeln!(
            writer,
            "- {}  {} {}",
            format_elapsed(session.duration_seconds),
            view.format.date(&session.timestamp),
            view.format.time(&session.timestamp)
        )?;
    }
    Ok(())
}

/// Lists the sessions saved today.
pub fn today<W: Write>(writer: &mut W, tracker: &Tracker, view: &View) -> Result<()> {
    let stats = tracker.daily_stats();
    if stats.today_feeding_sessions.is_empty() {
        writeln!(writer, "No feedings recorded today.")?;
        return Ok(());
    }

    writeln!(writer, "Today's feedings ({}):", view.format.day(stats.date))?;
    for session in &stats.today_feeding_sessions {
        writeln!(
            writer,
            "- {} at {}",
            format_elapsed(session.duration_seconds),
            view.format.time(&session.timestamp)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{render, tracker};

    use chrono::Duration;
    use insta::assert_snapshot;

    #[tokio::test(start_paused = true)]
    async fn timer_line_shows_phase_and_elapsed() {
        let (mut tracker, _clock) = tracker();
        tracker.start_timer();
        tokio::time::sleep(std::time::Duration::from_millis(65_500)).await;

        let output = render(|w| timer(w, tracker.timer()));
        assert_snapshot!(output, @"Timer running: 01:05 (ready to save)");
    }

    #[tokio::test(start_paused = true)]
    async fn timer_line_flags_save_only_with_counted_time() {
        let (mut tracker, _clock) = tracker();
        let mut output = render(|w| timer(w, tracker.start_timer()));
        tokio::time::sleep(std::time::Duration::from_millis(2_500)).await;
        output += &render(|w| timer(w, tracker.pause_timer()));
        output += &render(|w| timer(w, tracker.reset_timer()));

        assert_snapshot!(output, @r"
        Timer running: 00:00
        Timer paused: 00:02 (ready to save)
        Timer idle: 00:00
        ");
    }

    #[tokio::test]
    async fn history_with_zero_limit_is_not_reported_empty() {
        let (mut tracker, _clock) = tracker();
        tracker.save_session(60);

        let output = render(|w| history(w, &tracker, &View::default(), Some(0), false));
        assert_snapshot!(output, @"Recent feedings (0):");
    }

    #[tokio::test(start_paused = true)]
    async fn save_reports_duration() {
        let (mut tracker, _clock) = tracker();
        let view = View::default();
        tracker.start_timer();
        tokio::time::sleep(std::time::Duration::from_millis(3_500)).await;

        let output = render(|w| save(w, &mut tracker, &view));

        assert_snapshot!(output, @"Saved feeding of 00:03 at 14:05");
        assert_eq!(tracker.timer().elapsed_seconds, 0);
    }

    #[tokio::test]
    async fn save_with_nothing_timed() {
        let (mut tracker, _clock) = tracker();
        let output = render(|w| save(w, &mut tracker, &View::default()));
        assert_snapshot!(output, @"Nothing to save: timer is at 00:00");
        assert!(tracker.feeding_log().is_empty());
    }

    #[tokio::test]
    async fn history_includes_earlier_days() {
        let (mut tracker, clock) = tracker();
        tracker.save_session(600);
        clock.advance(Duration::days(1));
        tracker.save_session(3661);

        let output = render(|w| history(w, &tracker, &View::default(), None, false));

        assert_snapshot!(output, @r"
        Recent feedings (2):
        - 61:01  03/06/2025 14:05
        - 10:00  02/06/2025 14:05
        ");
    }

    #[tokio::test]
    async fn today_skips_yesterday() {
        let (mut tracker, clock) = tracker();
        tracker.save_session(600);
        clock.advance(Duration::days(1));
        tracker.save_session(95);
        clock.advance(Duration::minutes(30));
        tracker.save_session(480);

        let output = render(|w| today(w, &tracker, &View::default()));

        assert_snapshot!(output, @r"
        Today's feedings (03/06/2025):
        - 08:00 at 14:35
        - 01:35 at 14:05
        ");
    }

    #[tokio::test]
    async fn today_empty() {
        let (tracker, _clock) = tracker();
        let output = render(|w| today(w, &tracker, &View::default()));
        assert_snapshot!(output, @"No feedings recorded today.");
    }
}
