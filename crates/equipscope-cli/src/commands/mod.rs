pub mod analyze;
pub mod inspect;
pub mod predict;
pub mod report;
pub mod snapshot;

use std::io;
use std::path::Path;

use equipscope_core::{
    AnalysisConfig, EquipmentRecord, HealthPolicy, HistorySnapshot, Palette, batch_from_value,
};
use serde_json::Value;

/// A batch loaded from disk, with the name it is reported under.
pub struct LoadedBatch {
    pub label: String,
    pub records: Vec<EquipmentRecord>,
}

/// Load a batch file.
///
/// Accepts a bare array of rows or an upload response object carrying the
/// rows under `data`. With `from_snapshot`, the file is a history snapshot
/// and the rows are restored from it. Only I/O failures and undecodable
/// snapshots are errors; an unusable batch body is an empty batch.
pub fn load_batch(path: &str, from_snapshot: bool) -> io::Result<LoadedBatch> {
    let contents = std::fs::read_to_string(path)?;

    if from_snapshot {
        let snap = HistorySnapshot::from_json_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        log::debug!(
            "restoring snapshot {} ({}, uploaded {})",
            snap.id,
            snap.file_name,
            snap.uploaded_at
        );
        return Ok(LoadedBatch {
            label: snap.file_name.clone(),
            records: snap.restore(),
        });
    }

    let value: Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        log::warn!("{path} is not valid JSON ({e}); treating it as an empty batch");
        Value::Null
    });
    let rows = value.get("data").unwrap_or(&value);
    Ok(LoadedBatch {
        label: file_label(path),
        records: batch_from_value(rows),
    })
}

/// Load a palette file, or the default palette when none is given.
pub fn load_palette(path: Option<&str>) -> io::Result<Palette> {
    match path {
        None => Ok(Palette::default()),
        Some(p) => {
            let contents = std::fs::read_to_string(p)?;
            Palette::from_json_str(&contents)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        }
    }
}

/// Analysis configuration for a `--penalty` value.
pub fn analysis_config(penalty: u32) -> AnalysisConfig {
    AnalysisConfig {
        health: HealthPolicy {
            penalty_per_unit: penalty,
        },
    }
}

/// Final path component, for display.
pub fn file_label(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Print an error and exit non-zero.
pub fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{context}: {err}");
    std::process::exit(1);
}

/// Truncate for fixed-width table columns.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
