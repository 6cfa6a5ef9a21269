//! Export workflow state machine

pub mod runner;
pub mod state;

pub use runner::{
    ExportWorkflow, WorkflowOutcome, WorkflowReport, ENDED_TITLE, FAILURE_MESSAGE, FAILURE_TITLE,
    PARTIAL_TITLE, SELECTION_TITLE, SUCCESS_TITLE,
};
pub use state::WorkflowState;
