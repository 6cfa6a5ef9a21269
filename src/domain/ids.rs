//! Domain identifier types with validation
//!
//! Collection names identify a record collection on the backend (a table or
//! object name such as `Account`). They are opaque to the export pipeline;
//! the only rule enforced here is that a name is not blank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record collection name newtype wrapper
///
/// # Examples
///
/// ```
/// use sample_extract::domain::ids::CollectionName;
/// use std::str::FromStr;
///
/// let name = CollectionName::from_str("Account").unwrap();
/// assert_eq!(name.as_str(), "Account");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Creates a new CollectionName from a string
    ///
    /// Returns `Err` if the name is empty or whitespace only.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Collection name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the collection name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parses a list of names, skipping blank entries
    ///
    /// Used for comma-separated CLI input and configuration lists where an
    /// empty segment (`"A,,B"`) is a typo rather than a collection.
    pub fn parse_list<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| Self::new(name.as_ref().trim()).ok())
            .collect()
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> Self {
        name.0
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
