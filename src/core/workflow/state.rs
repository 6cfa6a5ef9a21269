//! Workflow states
//!
//! ```text
//! Idle -> Confirmed -> Fetching -> Succeeded -> Ended
//!             |            |
//!             +------------+------> Failed ---> Ended
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of one export request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Selection acknowledged to the user
    Confirmed,
    /// Request dispatched to the record source
    Fetching,
    /// Records fetched and handed to the export engine
    Succeeded,
    /// Request could not be completed
    Failed,
    /// Terminal notice emitted
    Ended,
}

impl WorkflowState {
    /// Check whether moving to `next` is allowed
    pub fn can_transition_to(self, next: WorkflowState) -> bool {
        use WorkflowState::*;
        matches!(
            (self, next),
            (Idle, Confirmed)
                | (Confirmed, Fetching)
                | (Confirmed, Failed)
                | (Fetching, Succeeded)
                | (Fetching, Failed)
                | (Succeeded, Ended)
                | (Failed, Ended)
        )
    }

    /// Succeeded or Failed
    pub fn is_outcome(self) -> bool {
        matches!(self, WorkflowState::Succeeded | WorkflowState::Failed)
    }

    pub fn is_terminal(self) -> bool {
        self == WorkflowState::Ended
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Confirmed => "confirmed",
            WorkflowState::Fetching => "fetching",
            WorkflowState::Succeeded => "succeeded",
            WorkflowState::Failed => "failed",
            WorkflowState::Ended => "ended",
        };
        f.write_str(name)
    }
}
