//! Today's totals.

use std::io::Write;

use anyhow::Result;
use bl_core::{Tracker, format_elapsed};

use super::View;

pub fn run<W: Write>(writer: &mut W, tracker: &Tracker, view: &View, json: bool) -> Result<()> {
    let stats = tracker.daily_stats();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&stats)?)?;
        return Ok(());
    }

    writeln!(writer, "Today ({})", view.format.day(stats.date))?;
    writeln!(writer, "Sleep events:  {}", stats.today_sleep_count)?;
    writeln!(writer, "Feedings:      {}", stats.today_feeding_count)?;
    writeln!(
        writer,
        "Feeding time:  {}",
        format_elapsed(stats.today_total_feeding_seconds)
    )?;
    Ok(())
}
