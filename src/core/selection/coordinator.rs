//! Selection coordinator
//!
//! Holds the list of collections the user can choose from and the current
//! choice, and turns a submit into one export workflow run.

use crate::adapters::notify::Notifier;
use crate::adapters::sink::DeliverySink;
use crate::adapters::source::RecordSource;
use crate::core::export::ExportEngine;
use crate::core::workflow::{ExportWorkflow, WorkflowReport};
use crate::domain::CollectionName;
use std::collections::HashSet;
use std::sync::Arc;

/// Tracks the option list and the multi-selection
pub struct SelectionCoordinator {
    available: Vec<CollectionName>,
    selection: Vec<CollectionName>,
    prune_stale: bool,
    source: Arc<dyn RecordSource>,
    sink: Arc<dyn DeliverySink>,
    notifier: Arc<dyn Notifier>,
    engine: ExportEngine,
}

impl SelectionCoordinator {
    pub fn new(
        source: Arc<dyn RecordSource>,
        sink: Arc<dyn DeliverySink>,
        notifier: Arc<dyn Notifier>,
        engine: ExportEngine,
    ) -> Self {
        Self {
            available: Vec::new(),
            selection: Vec::new(),
            prune_stale: false,
            source,
            sink,
            notifier,
            engine,
        }
    }

    /// Drop selected names that disappear from the option list
    pub fn with_prune_stale(mut self, prune_stale: bool) -> Self {
        self.prune_stale = prune_stale;
        self
    }

    /// Replace the option list
    pub fn set_available_collections(&mut self, names: Vec<CollectionName>) {
        self.available = names;

        if !self.prune_stale {
            return;
        }

        let available: HashSet<&CollectionName> = self.available.iter().collect();
        self.selection.retain(|name| {
            let keep = available.contains(name);
            if !keep {
                tracing::debug!(collection = %name, "Dropping stale selection");
            }
            keep
        });
    }

    /// Replace the selection, dropping repeated names
    ///
    /// Names are not checked against the option list.
    pub fn update_selection<I>(&mut self, chosen: I)
    where
        I: IntoIterator<Item = CollectionName>,
    {
        let mut seen = HashSet::new();
        self.selection = chosen
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();

        tracing::debug!(selected = self.selection.len(), "Selection updated");
    }

    pub fn selection(&self) -> &[CollectionName] {
        &self.selection
    }

    pub fn available(&self) -> &[CollectionName] {
        &self.available
    }

    pub fn engine(&self) -> &ExportEngine {
        &self.engine
    }

    /// Reload the option list from the record source
    ///
    /// On failure the previous list is kept and a warning is logged.
    pub async fn refresh_available(&mut self) {
        match self.source.list_collection_names().await {
            Ok(names) => {
                tracing::info!(
                    available = names.len(),
                    source = %self.source.describe(),
                    "Collection list loaded"
                );
                self.set_available_collections(names);
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    source = %self.source.describe(),
                    kept = self.available.len(),
                    "Failed to load collection list, keeping previous list"
                );
            }
        }
    }

    /// Run one export request for the current selection
    pub async fn submit(&self) -> WorkflowReport {
        let names = self.selection.clone();
        tracing::info!(selected = names.len(), "Submitting export request");

        ExportWorkflow::new(self.notifier.clone())
            .run(
                names,
                self.source.as_ref(),
                &self.engine,
                self.sink.as_ref(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notify::RecordingNotifier;
    use crate::adapters::sink::MemorySink;
    use crate::adapters::source::FileRecordSource;
    use std::str::FromStr;

    fn names(list: &[&str]) -> Vec<CollectionName> {
        list.iter()
            .map(|s| CollectionName::from_str(s).unwrap())
            .collect()
    }

    fn coordinator(prune_stale: bool) -> SelectionCoordinator {
        SelectionCoordinator::new(
            Arc::new(FileRecordSource::new("/nonexistent/snapshot.json")),
            Arc::new(MemorySink::new()),
            Arc::new(RecordingNotifier::new()),
            ExportEngine::default(),
        )
        .with_prune_stale(prune_stale)
    }

    #[test]
    fn test_selection_round_trip() {
        let mut c = coordinator(false);
        c.update_selection(names(&["Account", "Contact"]));

        assert_eq!(c.selection(), names(&["Account", "Contact"]).as_slice());
    }

    #[test]
    fn test_update_selection_deduplicates_in_order() {
        let mut c = coordinator(false);
        c.update_selection(names(&["Lead", "Account", "Lead", "Case", "Account"]));

        assert_eq!(c.selection(), names(&["Lead", "Account", "Case"]).as_slice());
    }

    #[test]
    fn test_selection_is_not_validated_against_options() {
        let mut c = coordinator(false);
        c.set_available_collections(names(&["Account"]));
        c.update_selection(names(&["Unknown"]));

        assert_eq!(c.selection(), names(&["Unknown"]).as_slice());
    }

    #[test]
    fn test_set_available_keeps_selection_by_default() {
        let mut c = coordinator(false);
        c.update_selection(names(&["Account", "Contact"]));
        c.set_available_collections(names(&["Account"]));

        assert_eq!(c.available(), names(&["Account"]).as_slice());
        assert_eq!(c.selection(), names(&["Account", "Contact"]).as_slice());
    }

    #[test]
    fn test_set_available_prunes_when_enabled() {
        let mut c = coordinator(true);
        c.update_selection(names(&["Account", "Contact", "Lead"]));
        c.set_available_collections(names(&["Lead", "Account"]));

        assert_eq!(c.selection(), names(&["Account", "Lead"]).as_slice());
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_stale_list() {
        let mut c = coordinator(false);
        c.set_available_collections(names(&["Account"]));

        c.refresh_available().await;

        assert_eq!(c.available(), names(&["Account"]).as_slice());
    }
}
