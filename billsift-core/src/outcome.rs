//! Structured results reported by top-level operations

use serde::{Deserialize, Serialize};

use crate::vendor::{AddOutcome, DeleteOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Info,
    Error,
}

/// Result of a command, reported once to the caller instead of raised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(rename = "type")]
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: OutcomeKind::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: OutcomeKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: OutcomeKind::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutcomeKind::Error
    }

    pub fn from_add(key: &str, outcome: AddOutcome) -> Self {
        match outcome {
            AddOutcome::AlreadyExists => Self::info("Vendor already exists in the directory."),
            AddOutcome::Created => Self::success(format!("Vendor {key} added successfully.")),
        }
    }

    pub fn from_delete(key: &str, outcome: DeleteOutcome) -> Self {
        match outcome {
            DeleteOutcome::NotFound => Self::info("Vendor does not exist in the directory."),
            DeleteOutcome::Deleted => Self::success(format!("Vendor {key} deleted successfully.")),
        }
    }
}
