//! Export workflow runner
//!
//! Drives one export request through its states and emits the user notices
//! tied to them. The `Ended` notice is emitted exactly once per run, whatever
//! happened before it.

use super::state::WorkflowState;
use crate::adapters::notify::{NotificationKind, Notifier};
use crate::adapters::sink::DeliverySink;
use crate::adapters::source::RecordSource;
use crate::core::export::{ExportEngine, ExportSummary};
use crate::domain::{CollectionName, ExtractError, Result};
use std::sync::Arc;

pub const SELECTION_TITLE: &str = "Selected collections";
pub const SUCCESS_TITLE: &str = "Sample Data Extracted Successfully";
pub const PARTIAL_TITLE: &str = "Sample Data Partially Extracted";
pub const FAILURE_TITLE: &str = "Extraction Failed";
pub const FAILURE_MESSAGE: &str = "Please contact your administrator";
pub const ENDED_TITLE: &str = "Process Ended";

/// How a run finished
#[derive(Debug)]
pub enum WorkflowOutcome {
    /// Records were fetched; per-collection results are in the summary
    Succeeded(ExportSummary),
    /// The request failed before any document was produced
    Failed(ExtractError),
}

impl WorkflowOutcome {
    pub fn summary(&self) -> Option<&ExportSummary> {
        match self {
            WorkflowOutcome::Succeeded(summary) => Some(summary),
            WorkflowOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ExtractError> {
        match self {
            WorkflowOutcome::Succeeded(_) => None,
            WorkflowOutcome::Failed(e) => Some(e),
        }
    }
}

/// Result of one workflow run
#[derive(Debug)]
pub struct WorkflowReport {
    /// Names sent to the record source, in request order
    pub requested: Vec<CollectionName>,
    pub outcome: WorkflowOutcome,
    /// Every state visited, starting with `Idle`
    pub history: Vec<WorkflowState>,
}

impl WorkflowReport {
    /// Fetch succeeded and every collection was exported
    pub fn is_successful(&self) -> bool {
        self.outcome
            .summary()
            .map(ExportSummary::is_successful)
            .unwrap_or(false)
    }

    pub fn final_state(&self) -> WorkflowState {
        self.history.last().copied().unwrap_or_default()
    }
}

/// One export request
pub struct ExportWorkflow {
    state: WorkflowState,
    history: Vec<WorkflowState>,
    notifier: Arc<dyn Notifier>,
}

impl ExportWorkflow {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: WorkflowState::Idle,
            history: vec![WorkflowState::Idle],
            notifier,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn history(&self) -> &[WorkflowState] {
        &self.history
    }

    /// Move to `next`
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Workflow` when the transition is not allowed;
    /// the state is left unchanged.
    pub fn transition(&mut self, next: WorkflowState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(ExtractError::Workflow(format!(
                "Illegal transition from {} to {}",
                self.state, next
            )));
        }

        tracing::debug!(from = %self.state, to = %next, "Workflow transition");
        self.state = next;
        self.history.push(next);
        Ok(())
    }

    /// Run the request for `names` to completion
    pub async fn run(
        mut self,
        names: Vec<CollectionName>,
        source: &dyn RecordSource,
        engine: &ExportEngine,
        sink: &dyn DeliverySink,
    ) -> WorkflowReport {
        let outcome = match self.execute(&names, source, engine, sink).await {
            Ok(summary) => {
                self.notify_summary(&summary);
                WorkflowOutcome::Succeeded(summary)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    source = %source.describe(),
                    "Export request failed"
                );
                if let Err(transition_error) = self.transition(WorkflowState::Failed) {
                    tracing::warn!(error = %transition_error, "Forcing workflow to failed");
                    self.force(WorkflowState::Failed);
                }
                self.notifier.notify(
                    NotificationKind::Failure,
                    FAILURE_TITLE,
                    Some(FAILURE_MESSAGE),
                );
                WorkflowOutcome::Failed(e)
            }
        };

        self.finish();

        WorkflowReport {
            requested: names,
            outcome,
            history: self.history,
        }
    }

    async fn execute(
        &mut self,
        names: &[CollectionName],
        source: &dyn RecordSource,
        engine: &ExportEngine,
        sink: &dyn DeliverySink,
    ) -> Result<ExportSummary> {
        self.transition(WorkflowState::Confirmed)?;
        let joined = names
            .iter()
            .map(CollectionName::as_str)
            .collect::<Vec<_>>()
            .join(",");
        self.notifier.notify(
            NotificationKind::Info,
            SELECTION_TITLE,
            (!joined.is_empty()).then_some(joined.as_str()),
        );

        self.transition(WorkflowState::Fetching)?;
        tracing::info!(
            collections = names.len(),
            source = %source.describe(),
            "Requesting record collections"
        );
        let collections = source.fetch_record_collections(names).await?;
        tracing::info!(received = collections.len(), "Record collections received");

        self.transition(WorkflowState::Succeeded)?;
        let summary = engine.export_and_deliver(&collections, sink).await;
        summary.log_summary();
        Ok(summary)
    }

    fn notify_summary(&self, summary: &ExportSummary) {
        let message = summary.to_string();
        if summary.is_successful() {
            self.notifier
                .notify(NotificationKind::Success, SUCCESS_TITLE, Some(&message));
        } else {
            self.notifier
                .notify(NotificationKind::Failure, PARTIAL_TITLE, Some(&message));
        }
    }

    fn finish(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        if let Err(e) = self.transition(WorkflowState::Ended) {
            tracing::warn!(error = %e, "Forcing workflow to end");
            self.force(WorkflowState::Ended);
        }
        self.notifier
            .notify(NotificationKind::Success, ENDED_TITLE, None);
    }

    fn force(&mut self, state: WorkflowState) {
        self.state = state;
        self.history.push(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notify::RecordingNotifier;
    use crate::adapters::sink::MemorySink;
    use crate::domain::{RecordCollection, SourceError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::str::FromStr;
    use std::sync::Mutex;

    struct StubSource {
        collections: Vec<RecordCollection>,
        fail: bool,
        requests: Mutex<Vec<Vec<CollectionName>>>,
    }

    impl StubSource {
        fn new(collections: Vec<RecordCollection>) -> Self {
            Self {
                collections,
                fail: false,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(Vec::new())
            }
        }
    }

    #[async_trait]
    impl RecordSource for StubSource {
        async fn list_collection_names(&self) -> Result<Vec<CollectionName>> {
            Ok(self
                .collections
                .iter()
                .map(|c| c.source_name.clone())
                .collect())
        }

        async fn fetch_record_collections(
            &self,
            names: &[CollectionName],
        ) -> Result<Vec<RecordCollection>> {
            self.requests.lock().unwrap().push(names.to_vec());
            if self.fail {
                return Err(SourceError::RecordFetchFailed("backend down".to_string()).into());
            }
            Ok(self.collections.clone())
        }

        fn describe(&self) -> String {
            "stub".to_string()
        }
    }

    fn name(s: &str) -> CollectionName {
        CollectionName::from_str(s).unwrap()
    }

    #[tokio::test]
    async fn test_successful_run_notices() {
        let notifier = Arc::new(RecordingNotifier::new());
        let source = StubSource::new(vec![RecordCollection::from_values(
            name("Account"),
            vec![json!({"Name": "Acme"})],
        )]);
        let sink = MemorySink::new();

        let report = ExportWorkflow::new(notifier.clone())
            .run(
                vec![name("Account"), name("Contact")],
                &source,
                &ExportEngine::default(),
                &sink,
            )
            .await;

        assert!(report.is_successful());
        assert_eq!(
            report.history,
            vec![
                WorkflowState::Idle,
                WorkflowState::Confirmed,
                WorkflowState::Fetching,
                WorkflowState::Succeeded,
                WorkflowState::Ended,
            ]
        );
        assert_eq!(
            notifier.titles(),
            vec![SELECTION_TITLE, SUCCESS_TITLE, ENDED_TITLE]
        );
        assert_eq!(
            notifier.notices()[0].message.as_deref(),
            Some("Account,Contact")
        );
        assert_eq!(sink.files().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_notices() {
        let notifier = Arc::new(RecordingNotifier::new());
        let sink = MemorySink::new();

        let report = ExportWorkflow::new(notifier.clone())
            .run(
                vec![name("Account")],
                &StubSource::failing(),
                &ExportEngine::default(),
                &sink,
            )
            .await;

        assert!(matches!(report.outcome, WorkflowOutcome::Failed(_)));
        assert_eq!(report.final_state(), WorkflowState::Ended);
        assert_eq!(
            notifier.titles(),
            vec![SELECTION_TITLE, FAILURE_TITLE, ENDED_TITLE]
        );
        assert_eq!(
            notifier.notices()[1].message.as_deref(),
            Some(FAILURE_MESSAGE)
        );
        assert!(sink.files().is_empty());
    }

    #[tokio::test]
    async fn test_empty_selection_dispatches_empty_request() {
        let notifier = Arc::new(RecordingNotifier::new());
        let source = StubSource::new(Vec::new());

        let report = ExportWorkflow::new(notifier.clone())
            .run(
                Vec::new(),
                &source,
                &ExportEngine::default(),
                &MemorySink::new(),
            )
            .await;

        assert_eq!(source.requests.lock().unwrap().as_slice(), &[Vec::new()]);
        assert!(report.requested.is_empty());
        assert_eq!(notifier.notices()[0].message, None);
        assert_eq!(notifier.count_titled(ENDED_TITLE), 1);
    }

    #[tokio::test]
    async fn test_partial_failure_notice() {
        let notifier = Arc::new(RecordingNotifier::new());
        let source = StubSource::new(vec![
            RecordCollection::from_values(name("Good"), vec![json!({"A": 1})]),
            RecordCollection::from_values(name("Bad"), vec![json!({"A": null})]),
        ]);

        let report = ExportWorkflow::new(notifier.clone())
            .run(
                vec![name("Good"), name("Bad")],
                &source,
                &ExportEngine::default(),
                &MemorySink::new(),
            )
            .await;

        assert!(!report.is_successful());
        assert_eq!(report.final_state(), WorkflowState::Ended);
        assert_eq!(
            notifier.titles(),
            vec![SELECTION_TITLE, PARTIAL_TITLE, ENDED_TITLE]
        );
    }

    #[test]
    fn test_illegal_transition_is_rejected() {
        let mut workflow = ExportWorkflow::new(Arc::new(RecordingNotifier::new()));

        let err = workflow.transition(WorkflowState::Fetching).unwrap_err();
        assert!(matches!(err, ExtractError::Workflow(_)));
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert_eq!(workflow.history(), &[WorkflowState::Idle]);
    }
}
