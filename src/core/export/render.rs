//! CSV rendering of record collections
//!
//! Output shape, which downstream spreadsheets rely on byte for byte:
//!
//! - header row: field names joined with `,`, not quoted
//! - data rows: every cell quoted, embedded `"` doubled, cells joined with `,`
//! - rows separated by `\n`, no trailing newline
//!
//! ```text
//! Name,Active
//! "Acme, Inc.","true"
//! "Bob ""The"" Co","false"
//! ```

use crate::config::HeaderSource;
use crate::domain::{value_to_text, Record, RenderError};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::collections::HashSet;

/// Derive the header of a collection
///
/// With [`HeaderSource::FirstRecord`] only `records[0]` is consulted and its
/// field order is kept. With [`HeaderSource::UnionOfAllRecords`] every field
/// of every record is collected in first-seen order.
pub fn derive_header(records: &[Record], header_source: HeaderSource) -> Vec<String> {
    match header_source {
        HeaderSource::FirstRecord => records
            .first()
            .map(|record| record.keys().cloned().collect())
            .unwrap_or_default(),
        HeaderSource::UnionOfAllRecords => {
            let mut seen = HashSet::new();
            let mut header = Vec::new();
            for key in records.iter().flat_map(|record| record.keys()) {
                if seen.insert(key.as_str()) {
                    header.push(key.clone());
                }
            }
            header
        }
    }
}

/// Render the records of one collection under a fixed header
///
/// Fields missing from a record render as an empty quoted cell. A present
/// value without a text form (null, array, object) fails the whole
/// collection.
pub fn render_csv(
    collection: &str,
    header: &[String],
    records: &[Record],
) -> Result<String, RenderError> {
    let mut content = header.join(",");

    if header.is_empty() {
        // No fields means every row is an empty line.
        for _ in records {
            content.push('\n');
        }
        return Ok(content);
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for (row, record) in records.iter().enumerate() {
        let cells = header
            .iter()
            .map(|field| cell_text(collection, field, row, record))
            .collect::<Result<Vec<String>, RenderError>>()?;

        writer
            .write_record(&cells)
            .map_err(|e| writer_error(collection, e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| writer_error(collection, e))?;
    let body = String::from_utf8(bytes).map_err(|e| writer_error(collection, e))?;

    if !body.is_empty() {
        content.push('\n');
        content.push_str(body.strip_suffix('\n').unwrap_or(&body));
    }

    Ok(content)
}

fn cell_text(
    collection: &str,
    field: &str,
    row: usize,
    record: &Record,
) -> Result<String, RenderError> {
    match record.get(field) {
        None => Ok(String::new()),
        Some(value) => value_to_text(value).map_err(|kind| RenderError::CellStringify {
            collection: collection.to_string(),
            field: field.to_string(),
            row,
            kind,
        }),
    }
}

fn writer_error(collection: &str, err: impl std::fmt::Display) -> RenderError {
    RenderError::Writer {
        collection: collection.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn records(values: Vec<Value>) -> Vec<Record> {
        values
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    fn render_single(value: Value) -> String {
        let recs = records(vec![json!({ "F": value })]);
        let header = derive_header(&recs, HeaderSource::FirstRecord);
        render_csv("T", &header, &recs).unwrap()
    }

    #[test_case(json!("plain"), "F\n\"plain\"" ; "plain string")]
    #[test_case(json!("a,b"), "F\n\"a,b\"" ; "comma stays inside quotes")]
    #[test_case(json!("say \"hi\""), "F\n\"say \"\"hi\"\"\"" ; "quotes are doubled")]
    #[test_case(json!("\""), "F\n\"\"\"\"" ; "lone quote")]
    #[test_case(json!(""), "F\n\"\"" ; "empty string")]
    #[test_case(json!(12), "F\n\"12\"" ; "integer is quoted")]
    #[test_case(json!(3.25), "F\n\"3.25\"" ; "float is quoted")]
    #[test_case(json!(true), "F\n\"true\"" ; "boolean is quoted")]
    #[test_case(json!("line1\nline2"), "F\n\"line1\nline2\"" ; "newline kept verbatim")]
    fn test_cell_rendering(value: Value, expected: &str) {
        assert_eq!(render_single(value), expected);
    }

    #[test]
    fn test_account_example() {
        let recs = records(vec![
            json!({"Name": "Acme, Inc.", "Active": true}),
            json!({"Name": "Bob \"The\" Co", "Active": false}),
        ]);
        let header = derive_header(&recs, HeaderSource::FirstRecord);
        assert_eq!(header, vec!["Name", "Active"]);

        let content = render_csv("Account", &header, &recs).unwrap();
        assert_eq!(
            content,
            "Name,Active\n\"Acme, Inc.\",\"true\"\n\"Bob \"\"The\"\" Co\",\"false\""
        );
    }

    #[test]
    fn test_missing_field_renders_empty_cell() {
        let recs = records(vec![
            json!({"Id": 1, "Email": "a@example.com"}),
            json!({"Id": 2}),
        ]);
        let header = derive_header(&recs, HeaderSource::FirstRecord);
        let content = render_csv("Contact", &header, &recs).unwrap();

        assert_eq!(content, "Id,Email\n\"1\",\"a@example.com\"\n\"2\",\"\"");
    }

    #[test]
    fn test_first_record_header_ignores_later_fields() {
        let recs = records(vec![json!({"A": 1}), json!({"A": 2, "B": 3})]);
        let header = derive_header(&recs, HeaderSource::FirstRecord);
        let content = render_csv("T", &header, &recs).unwrap();

        assert_eq!(content, "A\n\"1\"\n\"2\"");
    }

    #[test]
    fn test_union_header_collects_in_first_seen_order() {
        let recs = records(vec![
            json!({"B": 1, "A": 2}),
            json!({"C": 3, "A": 4}),
            json!({"D": 5}),
        ]);
        let header = derive_header(&recs, HeaderSource::UnionOfAllRecords);
        assert_eq!(header, vec!["B", "A", "C", "D"]);

        let content = render_csv("T", &header, &recs).unwrap();
        assert_eq!(
            content,
            "B,A,C,D\n\"1\",\"2\",\"\",\"\"\n\"\",\"4\",\"3\",\"\"\n\"\",\"\",\"\",\"5\""
        );
    }

    #[test]
    fn test_null_value_fails_with_location() {
        let recs = records(vec![json!({"Id": 1, "Owner": "x"}), json!({"Id": 2, "Owner": null})]);
        let header = derive_header(&recs, HeaderSource::FirstRecord);

        let err = render_csv("Case", &header, &recs).unwrap_err();
        assert_eq!(
            err,
            RenderError::CellStringify {
                collection: "Case".to_string(),
                field: "Owner".to_string(),
                row: 1,
                kind: "null",
            }
        );
    }

    #[test]
    fn test_nested_object_fails() {
        let recs = records(vec![json!({"attributes": {"type": "Account"}})]);
        let header = derive_header(&recs, HeaderSource::FirstRecord);

        assert!(render_csv("Account", &header, &recs).is_err());
    }

    #[test]
    fn test_record_without_fields() {
        let recs = records(vec![json!({}), json!({})]);
        let header = derive_header(&recs, HeaderSource::FirstRecord);
        assert!(header.is_empty());

        assert_eq!(render_csv("T", &header, &recs).unwrap(), "\n\n");
    }

    #[test]
    fn test_header_is_not_quoted() {
        let recs = records(vec![json!({"Full Name": "x", "Has\"Quote": "y"})]);
        let header = derive_header(&recs, HeaderSource::FirstRecord);
        let content = render_csv("T", &header, &recs).unwrap();

        assert!(content.starts_with("Full Name,Has\"Quote\n"));
    }
}
