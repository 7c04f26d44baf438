pub mod errors;
pub mod time;
pub mod utils;

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};

pub const TABLE_NAME_DEFAULT: &str = "todoTable";

/// Point in time stored on an item.
///
/// `create` writes fractional epoch seconds as a string, `update` writes
/// integer epoch milliseconds. Both shapes exist in stored data, so both are
/// read back as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Seconds(String),
}

impl Timestamp {
    /// Fractional epoch seconds; whole seconds keep their `.0`.
    pub fn seconds(at: SystemTime) -> Self {
        let elapsed = at.duration_since(UNIX_EPOCH).unwrap_or_default();
        Timestamp::Seconds(format!("{:?}", elapsed.as_secs_f64()))
    }

    pub fn millis(at: SystemTime) -> Self {
        let elapsed = at.duration_since(UNIX_EPOCH).unwrap_or_default();
        Timestamp::Millis(elapsed.as_millis() as i64)
    }

    /// Milliseconds since epoch, whichever shape the value was stored in.
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            Timestamp::Millis(ms) => Some(*ms as f64),
            Timestamp::Seconds(secs) => secs.parse::<f64>().ok().map(|s| s * 1000.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields rewritten by `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoUpdate {
    pub text: String,
    pub checked: bool,
    pub updated_at: Timestamp,
}

/// Request body of `create`. Presence of `text` is checked by the service.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    pub text: Option<String>,
}

/// Request body of `update`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub checked: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl From<Timestamp> for AttributeValue {
    fn from(value: Timestamp) -> Self {
        match value {
            Timestamp::Millis(ms) => AttributeValue::N(ms.to_string()),
            Timestamp::Seconds(secs) => AttributeValue::S(secs),
        }
    }
}

impl From<TodoItem> for HashMap<String, AttributeValue> {
    fn from(value: TodoItem) -> Self {
        HashMap::from([
            ("id".to_string(), AttributeValue::S(value.id)),
            ("text".to_string(), AttributeValue::S(value.text)),
            ("checked".to_string(), AttributeValue::Bool(value.checked)),
            ("createdAt".to_string(), value.created_at.into()),
            ("updatedAt".to_string(), value.updated_at.into()),
        ])
    }
}

#[derive(Debug, thiserror::Error)]
#[error("malformed record: {0}")]
pub struct MalformedRecord(pub String);

fn string_attr(record: &HashMap<String, AttributeValue>, name: &str) -> Result<String, MalformedRecord> {
    match record.get(name) {
        Some(AttributeValue::S(val)) => Ok(val.clone()),
        _ => Err(MalformedRecord(format!("`{name}` is missing or not a string"))),
    }
}

fn timestamp_attr(
    record: &HashMap<String, AttributeValue>,
    name: &str,
) -> Result<Timestamp, MalformedRecord> {
    match record.get(name) {
        Some(AttributeValue::S(val)) => Ok(Timestamp::Seconds(val.clone())),
        // DynamoDB hands numbers back as decimal strings.
        Some(AttributeValue::N(val)) => val
            .parse::<i64>()
            .or_else(|_| val.parse::<f64>().map(|ms| ms as i64))
            .map(Timestamp::Millis)
            .map_err(|_| MalformedRecord(format!("`{name}` is not a number: {val}"))),
        _ => Err(MalformedRecord(format!("`{name}` is missing or not a timestamp"))),
    }
}

impl TryFrom<HashMap<String, AttributeValue>> for TodoItem {
    type Error = MalformedRecord;

    fn try_from(record: HashMap<String, AttributeValue>) -> Result<Self, Self::Error> {
        let checked = match record.get("checked") {
            Some(AttributeValue::Bool(val)) => *val,
            _ => return Err(MalformedRecord("`checked` is missing or not a bool".into())),
        };

        Ok(TodoItem {
            id: string_attr(&record, "id")?,
            text: string_attr(&record, "text")?,
            checked,
            created_at: timestamp_attr(&record, "createdAt")?,
            updated_at: timestamp_attr(&record, "updatedAt")?,
        })
    }
}
