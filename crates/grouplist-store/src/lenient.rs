use crate::error::{Error, Result};
use crate::loader::LoadReport;
use grouplist_types::Record;
use serde::Deserialize;
use serde_json::Value;

/// Integer that may arrive quoted (`"42"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientInt {
    Int(i64),
    Text(String),
}

impl LenientInt {
    fn value(&self) -> Option<i64> {
        match self {
            LenientInt::Int(n) => Some(*n),
            LenientInt::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Wire shape of one record. Unknown fields are ignored.
#[derive(Deserialize)]
struct WireRecord {
    id: LenientInt,
    #[serde(rename = "listId")]
    list_id: LenientInt,
    #[serde(default)]
    name: Option<Value>,
}

impl WireRecord {
    fn into_record(self) -> Option<Record> {
        Some(Record {
            id: self.id.value()?,
            group_id: self.list_id.value()?,
            name: match self.name {
                Some(Value::String(name)) => Some(name),
                _ => None,
            },
        })
    }
}

/// Decode a JSON array of records.
///
/// The top level must be an array; anything else is a decode error. Each
/// element is decoded on its own so one malformed entry does not fail the
/// whole load: entries without a usable `id`/`listId` are skipped and
/// counted. A `name` that is not a string is treated as absent.
pub fn decode_records(text: &str) -> Result<LoadReport> {
    let root: Value = serde_json::from_str(text)?;
    let Value::Array(items) = root else {
        return Err(Error::Decode(format!(
            "expected a JSON array of records, found {}",
            describe(&root)
        )));
    };

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<WireRecord>(item)
            .ok()
            .and_then(WireRecord::into_record)
        {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                tracing::warn!(index, "skipping malformed record");
            }
        }
    }

    tracing::debug!(decoded = records.len(), skipped, "decoded record store");
    Ok(LoadReport { records, skipped })
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
