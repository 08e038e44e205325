//! Full derived view of a batch.
//!
//! [`analyze`] runs every aggregate over the same batch and packages the
//! results. There is no state between calls: the same batch always yields
//! the same [`AnalysisResult`].

use serde::{Deserialize, Serialize};

use crate::category_map::CategoryMap;
use crate::health::{HealthPolicy, health_score_with, unstable_count};
use crate::inventory::{InventoryLine, inventory_status, type_distribution};
use crate::record::EquipmentRecord;
use crate::stats::batch_stats;
use crate::thermal::thermal_profile;

/// Tunables for [`analyze_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub health: HealthPolicy,
}

/// Everything derived from one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_count: usize,
    pub avg_flow: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    /// Flow yield, `0..=100`.
    pub yield_pct: f64,
    /// Stability score, `0..=100`.
    pub health_score: u32,
    /// Units above the critical pressure threshold.
    pub unstable_count: usize,
    /// Category → average temperature.
    pub thermal_profile: CategoryMap<f64>,
    /// Category → unit count (labeled records only).
    pub type_distribution: CategoryMap<usize>,
    pub inventory_status: Vec<InventoryLine>,
}

/// Analyze a batch with the default configuration.
pub fn analyze(records: &[EquipmentRecord]) -> AnalysisResult {
    analyze_with(records, &AnalysisConfig::default())
}

/// Analyze a batch.
pub fn analyze_with(records: &[EquipmentRecord], config: &AnalysisConfig) -> AnalysisResult {
    let stats = batch_stats(records);
    AnalysisResult {
        total_count: stats.total_count,
        avg_flow: stats.avg_flow,
        avg_pressure: stats.avg_pressure,
        avg_temperature: stats.avg_temperature,
        yield_pct: stats.yield_pct,
        health_score: health_score_with(records, &config.health),
        unstable_count: unstable_count(records),
        thermal_profile: thermal_profile(records),
        type_distribution: type_distribution(records),
        inventory_status: inventory_status(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::PENALTY_PER_UNIT;

    #[test]
    fn test_empty_batch_is_neutral() {
        let r = analyze(&[]);
        assert_eq!(r.total_count, 0);
        assert_eq!(r.avg_flow, 0.0);
        assert_eq!(r.avg_pressure, 0.0);
        assert_eq!(r.yield_pct, 0.0);
        assert_eq!(r.health_score, 100);
        assert!(r.thermal_profile.is_empty());
        assert!(r.type_distribution.is_empty());
        assert!(r.inventory_status.is_empty());
    }

    #[test]
    fn test_pump_and_compressor() {
        let batch = vec![
            EquipmentRecord::new("P-100", "Pump", 100.0, 30.0, 9.0),
            EquipmentRecord::new("C-200", "Compressor", 140.0, 40.0, 5.0),
        ];
        let r = analyze(&batch);
        assert_eq!(r.avg_flow, 120.0);
        assert_eq!(r.avg_pressure, 7.0);
        assert_eq!(r.avg_temperature, 35.0);
        assert_eq!(r.yield_pct, 100.0);
        assert_eq!(r.health_score, 100 - PENALTY_PER_UNIT);
        assert_eq!(r.unstable_count, 1);
        assert_eq!(r.thermal_profile.get("Pump"), Some(&30.0));
        assert_eq!(r.thermal_profile.get("Compressor"), Some(&40.0));
        assert_eq!(r.type_distribution.get("Pump"), Some(&1));
        assert_eq!(r.type_distribution.get("Compressor"), Some(&1));
        assert_eq!(r.inventory_status.len(), 2);
    }

    #[test]
    fn test_config_changes_penalty_only() {
        let batch = vec![EquipmentRecord::new("R", "Reactor", 10.0, 200.0, 11.0)];
        let config = AnalysisConfig {
            health: HealthPolicy {
                penalty_per_unit: 15,
            },
        };
        let default = analyze(&batch);
        let strict = analyze_with(&batch, &config);
        assert_eq!(strict.health_score, 85);
        assert_eq!(
            AnalysisResult {
                health_score: default.health_score,
                ..strict
            },
            default
        );
    }

    #[test]
    fn test_deterministic() {
        let batch = vec![
            EquipmentRecord::new("a", "Valve", 3.3, 21.0, 8.5),
            EquipmentRecord::new("b", "", 7.7, 25.0, 2.0),
        ];
        assert_eq!(analyze(&batch), analyze(&batch));
    }

    #[test]
    fn test_serializes_with_ordered_maps() {
        let batch = vec![
            EquipmentRecord::new("v", "Valve", 1.0, 20.0, 1.0),
            EquipmentRecord::new("p", "Pump", 1.0, 30.0, 1.0),
        ];
        let text = serde_json::to_string(&analyze(&batch)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["type_distribution"]["Valve"], 1);
        assert_eq!(json["inventory_status"][0]["status"], "UNDERSTOCK");
        let back: AnalysisResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.thermal_profile.keys().collect::<Vec<_>>(), ["Valve", "Pump"]);
    }
}
