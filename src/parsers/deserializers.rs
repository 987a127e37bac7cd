use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

use crate::utils::time::datetime_from_epoch_secs;

/// Custom deserializer for export timestamps: fractional Unix epoch seconds,
/// given either as a JSON number (1682000887.0) or as a numeric string
/// ("1683712597.463997").
pub fn deserialize_epoch_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let secs = match &value {
        Value::Number(n) => {
            n.as_f64().ok_or_else(|| Error::custom("invalid epoch timestamp number"))?
        }
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|e| Error::custom(format!("invalid epoch timestamp string: {}", e)))?,
        _ => return Err(Error::custom("timestamp must be a number or string")),
    };
    datetime_from_epoch_secs(secs).map_err(Error::custom)
}

/// Custom deserializer for conversation ids that validates UUID format
pub fn deserialize_conversation_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if s.is_empty() {
        return Err(Error::custom("conversation id cannot be empty"));
    }

    Uuid::parse_str(&s)
        .map_err(|e| Error::custom(format!("invalid UUID format for conversation id: {}", e)))?;

    Ok(s)
}
