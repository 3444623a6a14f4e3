//! Free-text observations.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::log::RecordLog;
use crate::types::NoteId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Stored exactly as entered.
    pub content: String,
    pub timestamp: DateTime<Local>,
}

/// Every note taken this session, newest first. Never truncated.
#[derive(Debug, Clone)]
pub struct NoteLog {
    notes: RecordLog<Note>,
}

impl Default for NoteLog {
    fn default() -> Self {
        Self {
            notes: RecordLog::unbounded(),
        }
    }
}

impl NoteLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note unless `content` is blank.
    pub fn add_note(&mut self, content: impl Into<String>, clock: &dyn Clock) -> Option<Note> {
        let content = content.into();
        if content.trim().is_empty() {
            tracing::debug!("ignoring blank note");
            return None;
        }

        let note = Note {
            id: NoteId::generate(),
            content,
            timestamp: clock.now(),
        };
        tracing::debug!(id = %note.id, chars = note.content.chars().count(), "added note");
        self.notes.push(note.clone());
        Some(note)
    }

    pub fn all(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
