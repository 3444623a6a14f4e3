//! Session command implementations.

pub mod feeding;
pub mod notes;
pub mod sleep;
pub mod stats;
pub mod status;

use bl_core::TimestampFormat;

/// Display settings shared by every command.
#[derive(Debug, Clone)]
pub struct View {
    pub format: TimestampFormat,
    /// Default number of entries for history listings.
    pub history_limit: usize,
}

impl Default for View {
    fn default() -> Self {
        Self {
            format: TimestampFormat::default(),
            history_limit: bl_core::HISTORY_CAPACITY,
        }
    }
}
