//! CSV bodies: dotted-header decoding and per-record slices.
//!
//! The service names columns by path (`name.first`, `location.city`), so each
//! row is rebuilt as a nested JSON object and decoded like a JSON user.

use csv::{ReaderBuilder, StringRecord};
use serde_json::{Map, Value};

use super::model::User;
use crate::error::UserError;

/// Source text of every record, header first, with surrounding line
/// terminators trimmed. Quoted fields may span lines; blank lines are
/// skipped.
pub(crate) fn record_slices(body: &str) -> Result<Vec<&str>, UserError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut starts = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        if let Some(position) = record.position() {
            starts.push(position.byte() as usize);
        }
    }
    starts.push(body.len());

    Ok(starts
        .windows(2)
        .map(|span| body[span[0]..span[1]].trim_matches(['\r', '\n']))
        .collect())
}

/// Decode every data row of a CSV body.
pub(crate) fn parse_users(body: &str) -> Result<Vec<User>, UserError> {
    let mut reader = ReaderBuilder::new().from_reader(body.as_bytes());
    let header = reader.headers().map_err(csv_error)?.clone();

    reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            let record = record.map_err(csv_error)?;
            let mut doc = Map::new();
            for (path, value) in header.iter().zip(record.iter()) {
                if !value.is_empty() {
                    insert_path(&mut doc, path, value.to_string());
                }
            }
            serde_json::from_value(Value::Object(doc)).map_err(|err| UserError::Csv {
                row: i + 1,
                message: err.to_string(),
            })
        })
        .collect()
}

/// Reader errors carry the record index, which counts the header as 0 and
/// so doubles as the one-based data row.
fn csv_error(err: csv::Error) -> UserError {
    let row = err.position().map_or(0, |p| p.record() as usize);
    UserError::Csv {
        row,
        message: err.to_string(),
    }
}

/// Insert `value` at a dotted `path`, creating intermediate objects. A path
/// that runs through an existing non-object value is ignored.
fn insert_path(doc: &mut Map<String, Value>, path: &str, value: String) {
    let mut segments = path.split('.').peekable();
    let mut node = doc;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            node.entry(segment)
                .or_insert_with(|| Value::String(value));
            return;
        }
        let child = node
            .entry(segment)
            .or_insert_with(|| Value::Object(Map::new()));
        match child {
            Value::Object(map) => node = map,
            _ => return,
        }
    }
}
