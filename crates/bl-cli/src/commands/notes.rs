//! Note taking.

use std::io::Write;

use anyhow::Result;
use bl_core::Tracker;

use super::View;

pub fn add<W: Write>(
    writer: &mut W,
    tracker: &mut Tracker,
    view: &View,
    text: &str,
) -> Result<()> {
    match tracker.add_note(text) {
        Some(note) => writeln!(
            writer,
            "Note added at {}",
            view.format.time(&note.timestamp)
        )?,
        None => writeln!(writer, "Nothing to save: note is empty")?,
    }
    Ok(())
}

pub fn list<W: Write>(writer: &mut W, tracker: &Tracker, view: &View) -> Result<()> {
    let notes = tracker.notes();
    if notes.is_empty() {
        writeln!(writer, "No notes yet.")?;
        return Ok(());
    }

    for note in notes.all() {
        writeln!(
            writer,
            "{} {}  {}",
            view.format.date(&note.timestamp),
            view.format.time(&note.timestamp),
            note.content
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

    #[tokio::test]
    async fn blank_note_is_declined() {
        let (mut tracker, _clock) = tracker();
        let output = render(|w| add(w, &mut tracker, &View::default(), "   "));
        assert_snapshot!(output, @"Nothing to save: note is empty");
        assert!(tracker.notes().is_empty());
    }

    #[tokio::test]
    async fn notes_list_newest_first() {
        let (mut tracker, clock) = tracker();
        let view = View::default();
        let added = render(|w| add(w, &mut tracker, &view, "slept well after the bath"));
        assert_snapshot!(added, @"Note added at 14:05");

        clock.advance(Duration::hours(2));
        tracker.add_note("hiccups after feeding");

        let output = render(|w| list(w, &tracker, &view));
        assert_snapshot!(output, @r"
        02/06/2025 16:05  hiccups after feeding
        02/06/2025 14:05  slept well after the bath
        ");
    }

    #[tokio::test]
    async fn empty_list() {
        let (tracker, _clock) = tracker();
        let output = render(|w| list(w, &tracker, &View::default()));
        assert_snapshot!(output, @"No notes yet.");
    }
}
