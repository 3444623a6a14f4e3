//! Status command for showing the timer and log sizes.

use std::io::Write;

use anyhow::Result;
use bl_core::{HISTORY_CAPACITY, Tracker};

use super::feeding::save_hint;

pub fn run<W: Write>(writer: &mut W, tracker: &Tracker, timezone: &str) -> Result<()> {
    let timer = tracker.timer();

    writeln!(writer, "Baby routine log status")?;
    writeln!(writer, "Time zone: {timezone}")?;
    writeln!(
        writer,
        "Timer: {} {}{}",
        timer.phase,
        timer.display(),
        save_hint(timer)
    )?;
    writeln!(
        writer,
        "Sleep events: {}/{HISTORY_CAPACITY}",
        tracker.sleep_log().len()
    )?;
    writeln!(
        writer,
        "Feedings: {}/{HISTORY_CAPACITY}",
        tracker.feeding_log().len()
    )?;
    writeln!(writer, "Notes: {}", tracker.notes().len())?;
    Ok(())
}

/// The local IANA time zone name, or `UTC` if it cannot be determined.
pub fn local_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}
