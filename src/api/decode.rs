//! Decode boundary for API pages
//!
//! Raw bytes become a [`PageResponse`] here or not at all. Missing
//! `info`/`results`, malformed records and unusable pagination links are
//! rejected so nothing downstream ever sees a half-formed page.

use super::types::{ApiInfo, CharacterRecord, PageResponse};
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use url::Url;

/// Decode a page body
pub fn decode_page(bytes: &[u8]) -> Result<PageResponse> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::decode(format!("body is not valid JSON: {e}")))?;
    decode_page_value(value)
}

/// Decode an already-parsed page
pub fn decode_page_value(value: Value) -> Result<PageResponse> {
    let mut object = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::decode(format!(
                "expected a JSON object, got {}",
                type_name(&other)
            )))
        }
    };

    let info = take_field(&mut object, "info")?;
    let results = take_field(&mut object, "results")?;

    let info: ApiInfo = serde_json::from_value(info)
        .map_err(|e| Error::decode(format!("invalid 'info': {e}")))?;
    validate_link(info.next.as_deref())?;
    validate_link(info.prev.as_deref())?;

    let Value::Array(items) = results else {
        return Err(Error::decode(format!(
            "'results' must be an array, got {}",
            type_name(&results)
        )));
    };

    let results = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<CharacterRecord>(item)
                .map_err(|e| Error::decode(format!("invalid record at index {index}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PageResponse { info, results })
}

/// `null` counts as missing
fn take_field(object: &mut Map<String, Value>, field: &str) -> Result<Value> {
    match object.remove(field) {
        Some(Value::Null) | None => Err(Error::missing_field(field)),
        Some(value) => Ok(value),
    }
}

/// Pagination links must be absolute URLs we can fetch later
fn validate_link(link: Option<&str>) -> Result<()> {
    if let Some(link) = link {
        Url::parse(link)?;
    }
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
