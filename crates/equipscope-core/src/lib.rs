//! # equipscope-core
//!
//! **Analytics for process-equipment telemetry batches.**
//!
//! A batch is one snapshot per physical unit: name, category, flow rate,
//! temperature and pressure. From it this crate derives everything a
//! monitoring view needs: averages and yield, a health score, per-category
//! thermal profile and stocking status, failure forecasts for over-pressure
//! units, and filtered, display-ready rows.
//!
//! ## Quick Start
//!
//! ```
//! use equipscope_core::{analyze, batch_from_json_str, predict_hours_to_failure};
//!
//! let batch = batch_from_json_str(r#"[
//!     {"Equipment Name": "P-100", "Type": "Pump", "Flowrate": 100, "Temperature": 30, "Pressure": 9.0},
//!     {"Equipment Name": "C-200", "Type": "Compressor", "Flowrate": 140, "Temperature": 40, "Pressure": 5.0}
//! ]"#);
//!
//! let result = analyze(&batch);
//! assert_eq!(result.avg_flow, 120.0);
//! assert_eq!(result.yield_pct, 100.0);
//! assert_eq!(predict_hours_to_failure(9.0), Some(21));
//! ```
//!
//! ## Architecture
//!
//! Raw rows → [`record`] normalization → pure aggregates → [`AnalysisResult`]
//!
//! Every aggregate is a pure function of the batch. Nothing is cached
//! implicitly; [`CurrentBatch`] is the one place that holds a batch, and it
//! replaces batch and result together.
//!
//! All threshold logic goes through [`PRESSURE_CRITICAL_THRESHOLD`].

pub mod analysis;
pub mod category_map;
pub mod current;
pub mod failure;
pub mod filter;
pub mod health;
pub mod inventory;
pub mod palette;
pub mod record;
pub mod snapshot;
pub mod stats;
pub mod thermal;
pub mod view;

pub use analysis::{AnalysisConfig, AnalysisResult, analyze, analyze_with};
pub use category_map::CategoryMap;
pub use current::{AnalyzedBatch, CurrentBatch, batch_fingerprint};
pub use failure::predict_hours_to_failure;
pub use filter::{EquipmentFilter, filter_equipment};
pub use health::{
    HealthPolicy, PENALTY_PER_UNIT, PRESSURE_CRITICAL_THRESHOLD, StabilityStatus, health_score,
    health_score_with, is_critical, unstable_count,
};
pub use inventory::{InventoryLine, StockStatus, inventory_status, type_distribution};
pub use palette::Palette;
pub use record::{EquipmentRecord, batch_from_json_str, batch_from_value};
pub use snapshot::{HistorySnapshot, SnapshotSummary};
pub use stats::{BatchStats, NOMINAL_FLOW_REFERENCE, batch_stats};
pub use thermal::thermal_profile;
pub use view::{
    DistributionSlice, EquipmentRow, distribution_slices, equipment_rows, pressure_gauge_pct,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
