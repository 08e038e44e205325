//! Equipment records and normalization of raw input rows.
//!
//! A batch arrives from an upload or a restored history snapshot as a JSON
//! array of loosely-typed rows. Normalization happens once, here, at the
//! boundary: every analytics function downstream sees only clean
//! [`EquipmentRecord`]s with defaults already applied.
//!
//! # Row Format
//!
//! ```text
//! { "Equipment Name": "P-100", "Type": "Pump",
//!   "Flowrate": 100, "Temperature": "30.5", "Pressure": 9.0 }
//! ```
//!
//! Numeric fields may be JSON numbers or numeric strings. Missing or
//! unparseable values fall back to [`DEFAULT_FLOW_RATE`],
//! [`DEFAULT_TEMPERATURE`] and [`DEFAULT_PRESSURE`]; a bad row never fails
//! the batch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flow rate assumed when a row has no usable flow value (m³/h).
pub const DEFAULT_FLOW_RATE: f64 = 0.0;
/// Ambient temperature assumed when a row has no usable temperature (°C).
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
/// Pressure assumed when a row has no usable pressure value (bar).
pub const DEFAULT_PRESSURE: f64 = 0.0;

const NAME_KEYS: &[&str] = &["Equipment Name", "name", "Name"];
const CATEGORY_KEYS: &[&str] = &["Type", "type", "Equipment Type", "category"];
const FLOW_KEYS: &[&str] = &["Flowrate", "flowRate", "flow_rate"];
const TEMPERATURE_KEYS: &[&str] = &["Temperature", "temperature"];
const PRESSURE_KEYS: &[&str] = &["Pressure", "pressure"];

/// One process-measurement snapshot for a physical unit.
///
/// Serializes to the canonical row shape so a batch can be written back out
/// (e.g. as a history snapshot's `data_json`) and read again unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    /// Display identifier. May be empty.
    #[serde(rename = "Equipment Name", default)]
    pub name: String,
    /// Open-ended equipment type label. Empty means unlabeled.
    #[serde(rename = "Type", default)]
    pub category: String,
    /// Flow rate in m³/h.
    #[serde(rename = "Flowrate", default)]
    pub flow_rate: f64,
    /// Temperature in °C.
    #[serde(rename = "Temperature", default = "default_temperature")]
    pub temperature: f64,
    /// Pressure in bar.
    #[serde(rename = "Pressure", default)]
    pub pressure: f64,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl Default for EquipmentRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            flow_rate: DEFAULT_FLOW_RATE,
            temperature: DEFAULT_TEMPERATURE,
            pressure: DEFAULT_PRESSURE,
        }
    }
}

impl EquipmentRecord {
    /// Build a record from already-clean values.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        flow_rate: f64,
        temperature: f64,
        pressure: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            flow_rate,
            temperature,
            pressure,
        }
    }

    /// Normalize a raw input row.
    ///
    /// Accepts every known synonym for each field. Anything that is not a
    /// JSON object yields an all-default record.
    pub fn from_row(row: &Value) -> Self {
        let Some(fields) = row.as_object() else {
            log::debug!("non-object row normalized to defaults: {row}");
            return Self::default();
        };

        Self {
            name: text_field(fields, NAME_KEYS),
            category: text_field(fields, CATEGORY_KEYS),
            flow_rate: numeric_field(fields, FLOW_KEYS).unwrap_or(DEFAULT_FLOW_RATE),
            temperature: numeric_field(fields, TEMPERATURE_KEYS).unwrap_or(DEFAULT_TEMPERATURE),
            pressure: numeric_field(fields, PRESSURE_KEYS).unwrap_or(DEFAULT_PRESSURE),
        }
    }

    /// Whether this record carries a category label.
    pub fn is_labeled(&self) -> bool {
        !self.category.is_empty()
    }
}

/// Normalize a JSON value into a batch.
///
/// An array becomes one record per element. Any other shape is treated as
/// an empty batch so callers always get a result.
pub fn batch_from_value(value: &Value) -> Vec<EquipmentRecord> {
    match value {
        Value::Array(rows) => rows.iter().map(EquipmentRecord::from_row).collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!(
                "expected an array of equipment rows, got {}; using an empty batch",
                json_kind(other)
            );
            Vec::new()
        }
    }
}

/// Parse and normalize a JSON document into a batch.
///
/// Malformed JSON is logged and treated as an empty batch.
pub fn batch_from_json_str(json: &str) -> Vec<EquipmentRecord> {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => batch_from_value(&value),
        Err(e) => {
            log::warn!("could not parse equipment batch JSON ({e}); using an empty batch");
            Vec::new()
        }
    }
}

fn first_present<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| fields.get(*k))
        .find(|v| !v.is_null())
}

fn text_field(fields: &Map<String, Value>, keys: &[&str]) -> String {
    match first_present(fields, keys) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn numeric_field(fields: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    let parsed = match first_present(fields, keys)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Some(v),
        _ => {
            log::debug!("unusable numeric value for {:?}; applying default", keys[0]);
            None
        }
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
