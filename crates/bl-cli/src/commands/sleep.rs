//! Sleep and wake recording.

use std::io::Write;

use anyhow::Result;
use bl_core::{SleepKind, Tracker};

use super::View;

/// Records a transition and echoes it back.
pub fn record<W: Write>(
    writer: &mut W,
    tracker: &mut Tracker,
    view: &View,
    kind: SleepKind,
) -> Result<()> {
    let event = tracker.record_event(kind);
    writeln!(
        writer,
        "{} at {} ({})",
        kind.label(),
        view.format.time(&event.timestamp),
        view.format.date(&event.timestamp)
    )?;
    Ok(())
}

/// Lists recent transitions, newest first.
pub fn history<W: Write>(
    writer: &mut W,
    tracker: &Tracker,
    view: &View,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let limit = limit.unwrap_or(view.history_limit);
    let events: Vec<_> = tracker.sleep_log().recent(limit).collect();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&events)?)?;
        return Ok(());
    }

    if tracker.sleep_log().is_empty() {
        writeln!(writer, "No sleep events yet.")?;
        return Ok(());
    }

    writeln!(writer, "Recent sleep ({}):", events.len())?;
    for event in events {
        writeln!(
            writer,
            "- {:<12} {} {}",
            event.kind.label(),
            view.format.date(&event.timestamp),
            view.format.time(&event.timestamp)
        )?;
    }
    Ok(())
}
