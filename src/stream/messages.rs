//! Message types decoded from the sensor stream
//!
//! The wire carries one message shape today:
//!
//! ```text
//! { "type": "heading", "x": <deg>, "y": <deg>, "z": <deg>, "elapsed": <sec> }
//! ```
//!
//! Unknown `type` values are reserved for future extension and are
//! reported as `Unknown`, never as an error.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Wire tag of a heading message
const HEADING_TYPE: &str = "heading";

/// One heading sample: per-axis rotation plus sensor poll latency
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HeadingUpdate {
    /// Rotation about the X axis in degrees
    pub x: f64,
    /// Rotation about the Y axis in degrees
    pub y: f64,
    /// Rotation about the Z axis in degrees
    pub z: f64,
    /// Seconds the daemon spent polling the sensor
    pub elapsed: f64,
}

/// Classification of one decoded JSON object
#[derive(Debug, Clone, PartialEq)]
pub enum SensorMessage {
    /// A validated heading update, ready to fold into state
    Heading(HeadingUpdate),
    /// Unrecognized or absent `type` tag; carried for the log line only
    Unknown(Option<String>),
}

/// Classify one decoded JSON object by its `type` discriminator
///
/// A recognized type missing a required field is a decode error. An
/// unrecognized or absent type is `Unknown`, which the caller drops
/// without touching state.
pub fn classify(value: &Value) -> Result<SensorMessage> {
    let Some(obj) = value.as_object() else {
        return Err(Error::Decode(format!(
            "expected a JSON object, got {}",
            json_kind(value)
        )));
    };

    match obj.get("type").and_then(Value::as_str) {
        Some(HEADING_TYPE) => {
            let update: HeadingUpdate = serde_json::from_value(value.clone())
                .map_err(|e| Error::Decode(format!("invalid heading message: {}", e)))?;
            Ok(SensorMessage::Heading(update))
        }
        Some(other) => Ok(SensorMessage::Unknown(Some(other.to_string()))),
        None => Ok(SensorMessage::Unknown(None)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
