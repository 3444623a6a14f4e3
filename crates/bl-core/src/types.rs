//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for textual inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The sleep kind string was not recognized.
    #[error("invalid sleep kind: {value} (expected \"sleep\" or \"wake\")")]
    InvalidSleepKind { value: String },

    /// A timestamp format pattern could not be rendered.
    #[error("invalid {field} pattern: {pattern}")]
    InvalidFormat {
        field: &'static str,
        pattern: String,
    },
}

/// Generates a UUID-backed record ID newtype with common trait implementations.
macro_rules! define_record_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random ID.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the underlying UUID.
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_record_id!(
    /// Identifier of a recorded sleep or wake event.
    ///
    /// Random rather than derived from the creation instant, so two events
    /// recorded within the same clock tick still get distinct IDs.
    SleepEventId
);

define_record_id!(
    /// Identifier of a saved feeding session.
    FeedingSessionId
);

define_record_id!(
    /// Identifier of a note.
    NoteId
);
