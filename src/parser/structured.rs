//! JSON reader: a top-level array of objects, key order kept

use crate::error::{ParseError, ParseResult};
use crate::record::{FieldValue, Record, RecordSet};
use serde_json::Value;

/// Parse a JSON array of objects into records, keeping each object's key order
pub fn parse_structured(content: &str) -> ParseResult<RecordSet> {
    let value: Value = serde_json::from_str(content).map_err(json_parse_error)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ParseError::new(
                format!("expected an array of objects, found {}", describe(&other)),
                None,
                None,
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(key, value)| (key, FieldValue::from(value)))
                .collect::<Record>()),
            other => Err(ParseError::new(
                format!(
                    "array element {} is {}, expected an object",
                    index,
                    describe(&other)
                ),
                None,
                None,
            )),
        })
        .collect()
}

/// Split serde_json's message from its trailing location
fn json_parse_error(err: serde_json::Error) -> ParseError {
    let full = err.to_string();
    if err.line() == 0 {
        return ParseError::new(full, None, None);
    }

    let suffix = format!(" at line {} column {}", err.line(), err.column());
    let message = full.strip_suffix(&suffix).unwrap_or(&full).to_string();
    ParseError::new(message, Some(err.line()), Some(err.column()))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
