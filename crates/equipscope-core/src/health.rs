//! Pressure-based stability classification and the batch health score.
//!
//! [`PRESSURE_CRITICAL_THRESHOLD`] is the one boundary between stable and
//! critical units. Health scoring, failure prediction, filtering and row
//! styling all go through [`is_critical`].

use serde::{Deserialize, Serialize};

use crate::record::EquipmentRecord;

/// Pressure (bar) above which a unit is unstable.
pub const PRESSURE_CRITICAL_THRESHOLD: f64 = 8.0;

/// Health points deducted per unstable unit.
///
/// Deployed revisions of the monitoring dashboard have used both 5 and 15
/// for this penalty and neither is documented as canonical. 5 is the value
/// in the most recent revision; use [`HealthPolicy`] to score with a
/// different penalty instead of editing this constant.
pub const PENALTY_PER_UNIT: u32 = 5;

/// Best possible health score.
pub const MAX_HEALTH_SCORE: u32 = 100;

/// Stability of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityStatus {
    /// Pressure at or below the threshold.
    Stable,
    /// Pressure above the threshold.
    Critical,
}

impl StabilityStatus {
    /// Classify a pressure reading.
    pub fn from_pressure(pressure: f64) -> Self {
        if is_critical(pressure) {
            Self::Critical
        } else {
            Self::Stable
        }
    }
}

impl std::fmt::Display for StabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Scoring policy for [`health_score_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthPolicy {
    /// Points deducted per unstable unit.
    pub penalty_per_unit: u32,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self {
            penalty_per_unit: PENALTY_PER_UNIT,
        }
    }
}

/// Whether a pressure reading is above [`PRESSURE_CRITICAL_THRESHOLD`].
///
/// NaN is never critical.
pub fn is_critical(pressure: f64) -> bool {
    pressure > PRESSURE_CRITICAL_THRESHOLD
}

/// Number of units above the critical threshold.
pub fn unstable_count(records: &[EquipmentRecord]) -> usize {
    records.iter().filter(|r| is_critical(r.pressure)).count()
}

/// Health score in `[0, 100]` using the default [`PENALTY_PER_UNIT`].
pub fn health_score(records: &[EquipmentRecord]) -> u32 {
    health_score_with(records, &HealthPolicy::default())
}

/// Health score in `[0, 100]`: 100 minus the penalty for each unstable unit.
///
/// An empty batch scores 100.
pub fn health_score_with(records: &[EquipmentRecord], policy: &HealthPolicy) -> u32 {
    let unstable = u32::try_from(unstable_count(records)).unwrap_or(u32::MAX);
    MAX_HEALTH_SCORE.saturating_sub(unstable.saturating_mul(policy.penalty_per_unit))
}
