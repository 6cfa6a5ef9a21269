//! Record source abstraction
//!
//! A record source is the backend that owns the record collections. It can
//! list the collection names a user may select and return the records of a
//! requested set of collections.

use crate::domain::{CollectionName, RecordCollection, Result};
use async_trait::async_trait;

/// Backend that supplies collection names and record collections
///
/// Implementations perform a single request per call. Retrying, paging and
/// streaming are not part of this contract.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// List the names of the collections that can be selected
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the backend cannot be reached or answers
    /// with something other than a list of names.
    async fn list_collection_names(&self) -> Result<Vec<CollectionName>>;

    /// Fetch the records of the given collections
    ///
    /// An empty `names` slice is forwarded as-is; what the backend answers
    /// to an empty request is up to the backend.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the request fails or is rejected.
    async fn fetch_record_collections(
        &self,
        names: &[CollectionName],
    ) -> Result<Vec<RecordCollection>>;

    /// Short human-readable description used in logs
    fn describe(&self) -> String;
}
