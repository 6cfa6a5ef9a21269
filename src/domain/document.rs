//! Rendered CSV documents

use super::ids::CollectionName;

/// Suffix appended to a collection name to form the delivered file name
pub const CSV_SUFFIX: &str = ".csv";

/// A fully rendered CSV body plus the file name it should be delivered as
///
/// Documents are immutable once produced; the export engine hands them to a
/// delivery sink by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    source_name: CollectionName,
    file_name: String,
    content: String,
    record_count: usize,
}

impl CsvDocument {
    /// Create a document for the given collection
    pub fn new(source_name: CollectionName, content: String, record_count: usize) -> Self {
        let file_name = format!("{}{}", source_name.as_str(), CSV_SUFFIX);
        Self {
            source_name,
            file_name,
            content,
            record_count,
        }
    }

    /// Collection this document was rendered from
    pub fn source_name(&self) -> &CollectionName {
        &self.source_name
    }

    /// Suggested file name, `<collection>.csv`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// CSV text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of data rows (excluding the header)
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_file_name_has_csv_suffix() {
        let doc = CsvDocument::new(
            CollectionName::from_str("Account").unwrap(),
            "Name\n\"Acme\"".to_string(),
            1,
        );

        assert_eq!(doc.file_name(), "Account.csv");
        assert_eq!(doc.source_name().as_str(), "Account");
        assert_eq!(doc.content(), "Name\n\"Acme\"");
        assert_eq!(doc.record_count(), 1);
    }
}
