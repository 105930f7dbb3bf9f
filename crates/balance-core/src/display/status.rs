//! One-line outcome shown above a command's output.

use std::fmt;

/// Whether a command changed stored state or found nothing to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    /// Something was written to the store
    Saved(String),
    /// Nothing to show or change; not an error
    Nothing(String),
}

impl OperationStatus {
    pub fn saved(message: impl Into<String>) -> Self {
        OperationStatus::Saved(message.into())
    }

    pub fn nothing(message: impl Into<String>) -> Self {
        OperationStatus::Nothing(message.into())
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, OperationStatus::Saved(_))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationStatus::Saved(message) => writeln!(f, "✓ {message}"),
            OperationStatus::Nothing(message) => writeln!(f, "○ {message}"),
        }
    }
}
