//! Delivery sinks
//!
//! A delivery sink is the platform primitive that turns a rendered CSV body
//! into a downloaded artifact. The export engine calls it once per document
//! and treats it as a black box.

pub mod filesystem;
pub mod memory;

pub use filesystem::FileSystemSink;
pub use memory::{DeliveredFile, MemorySink};

use crate::domain::Result;
use async_trait::async_trait;

/// Destination for rendered files
#[async_trait]
pub trait DeliverySink: Send + Sync {
    /// Deliver one file
    ///
    /// # Errors
    ///
    /// Returns a delivery error if the file cannot be handed over. The
    /// caller records it against this file only.
    async fn deliver_file(&self, file_name: &str, mime_type: &str, content: &str) -> Result<()>;
}
