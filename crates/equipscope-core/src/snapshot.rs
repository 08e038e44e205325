//! History snapshots: the summary + raw batch a history store keeps per upload.
//!
//! The store itself lives outside this crate. This module defines the
//! snapshot shape, builds one from an analyzed batch, and restores the batch
//! from a stored snapshot so it can be analyzed again.
//!
//! # JSON Shape
//!
//! ```text
//! {
//!   "id": "…uuid…",
//!   "file_name": "line3.csv",
//!   "avg_flowrate": 120.0, "avg_pressure": 7.0, "avg_temp": 35.0,
//!   "total_count": 2,
//!   "type_distribution": { "Pump": 1, "Compressor": 1 },
//!   "data_json": [ { "Equipment Name": "P-100", … }, … ],
//!   "uploaded_at": "2026-02-15T01:30:00Z"
//! }
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::analysis::{AnalysisConfig, AnalysisResult, analyze_with};
use crate::category_map::CategoryMap;
use crate::record::{EquipmentRecord, batch_from_value};

/// A stored upload: summary fields plus the original rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    #[serde(default)]
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    pub avg_flowrate: f64,
    #[serde(default)]
    pub avg_pressure: f64,
    #[serde(default)]
    pub avg_temp: f64,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub type_distribution: CategoryMap<usize>,
    /// Original rows. Kept as raw JSON so restoring goes through the same
    /// normalization as a fresh upload.
    #[serde(default)]
    pub data_json: Value,
    #[serde(default)]
    pub uploaded_at: String,
}

/// The fields a history listing shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotSummary {
    pub file_name: String,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
}

impl std::fmt::Display for SnapshotSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  F: {:.1} | P: {:.1}",
            self.file_name, self.avg_flowrate, self.avg_pressure
        )
    }
}

impl HistorySnapshot {
    /// Build a snapshot for a freshly analyzed batch, stamped now.
    pub fn capture(
        file_name: impl Into<String>,
        records: &[EquipmentRecord],
        result: &AnalysisResult,
    ) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::capture_at(file_name, records, result, now)
    }

    /// Build a snapshot with an explicit upload time (since the Unix epoch).
    pub fn capture_at(
        file_name: impl Into<String>,
        records: &[EquipmentRecord],
        result: &AnalysisResult,
        uploaded_at: Duration,
    ) -> Self {
        let data_json = serde_json::to_value(records).unwrap_or_else(|e| {
            log::warn!("could not serialize batch rows for snapshot: {e}");
            Value::Array(Vec::new())
        });
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: file_name.into(),
            avg_flowrate: result.avg_flow,
            avg_pressure: result.avg_pressure,
            avg_temp: result.avg_temperature,
            total_count: result.total_count,
            type_distribution: result.type_distribution.clone(),
            data_json,
            uploaded_at: format_iso8601(uploaded_at),
        }
    }

    /// Reconstruct the batch. A non-array `data_json` restores as empty.
    pub fn restore(&self) -> Vec<EquipmentRecord> {
        batch_from_value(&self.data_json)
    }

    /// Restore and analyze in one step.
    ///
    /// The result is recomputed from the rows; the stored summary fields
    /// are not trusted for it.
    pub fn reanalyze(&self, config: &AnalysisConfig) -> (Vec<EquipmentRecord>, AnalysisResult) {
        let records = self.restore();
        let result = analyze_with(&records, config);
        (records, result)
    }

    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            file_name: self.file_name.clone(),
            avg_flowrate: self.avg_flowrate,
            avg_pressure: self.avg_pressure,
        }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Format a duration-since-epoch as a full ISO-8601 timestamp.
/// Example: `2026-02-15T01:30:00Z`
fn format_iso8601(since_epoch: Duration) -> String {
    let (year, month, day, hour, min, sec) = secs_to_utc(since_epoch.as_secs());
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{min:02}:{sec:02}Z")
}

/// Seconds since the Unix epoch to (year, month, day, hour, minute, second) UTC.
/// No leap seconds.
fn secs_to_utc(secs: u64) -> (u64, u64, u64, u64, u64, u64) {
    let sec = secs % 60;
    let min = (secs / 60) % 60;
    let hour = (secs / 3600) % 24;

    let mut days = secs / 86400;
    let mut year = 1970u64;
    loop {
        let days_in_year = if is_leap(year) { 366 } else { 365 };
        if days < days_in_year {
            break;
        }
        days -= days_in_year;
        year += 1;
    }

    let feb = if is_leap(year) { 29 } else { 28 };
    let months_days: [u64; 12] = [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut month = 12u64;
    for (i, &md) in months_days.iter().enumerate() {
        if days < md {
            month = i as u64 + 1;
            break;
        }
        days -= md;
    }

    (year, month, days + 1, hour, min, sec)
}

fn is_leap(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
