//! Record and record collection models
//!
//! A record is an ordered mapping from field name to a JSON value, exactly as
//! the backend returned it. Field order matters: the CSV header is derived
//! from it, which is why `serde_json` is built with `preserve_order`.

use super::ids::CollectionName;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single record: field name to value, in backend order
pub type Record = Map<String, Value>;

/// A named, ordered sequence of records returned by the record source
///
/// The backend may name the collection `sourceName` or `sObjectType`, and may
/// send `records` as `null` or leave it out when the collection is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCollection {
    /// Collection the records were read from
    #[serde(alias = "sObjectType")]
    pub source_name: CollectionName,

    /// Records in backend order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub records: Vec<Record>,
}

impl RecordCollection {
    /// Create a collection from already-built records
    pub fn new(source_name: CollectionName, records: Vec<Record>) -> Self {
        Self {
            source_name,
            records,
        }
    }

    /// Create a collection from JSON values, keeping only object values
    ///
    /// Non-object entries cannot be records and are dropped.
    pub fn from_values(source_name: CollectionName, values: Vec<Value>) -> Self {
        let records = values
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        Self::new(source_name, records)
    }

    /// Whether the collection carries no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Record>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Convert a record value to the text placed inside a CSV cell
///
/// Strings are used verbatim, booleans become `true`/`false`, and numbers use
/// their shortest decimal form with integral floats printed without a
/// fractional part (`2.0` becomes `2`). `null`, arrays and objects have no
/// text form; the error carries the JSON kind for reporting.
pub fn value_to_text(value: &Value) -> Result<String, &'static str> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Ok(u.to_string())
            } else {
                Ok(n.as_f64().map(float_to_text).unwrap_or_else(|| n.to_string()))
            }
        }
        Value::Null => Err("null"),
        Value::Array(_) => Err("array"),
        Value::Object(_) => Err("object"),
    }
}

fn float_to_text(f: f64) -> String {
    if f == 0.0 {
        "0".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}
