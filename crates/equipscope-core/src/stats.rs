//! Batch-wide averages and the flow-derived yield metric.

use serde::{Deserialize, Serialize};

use crate::record::EquipmentRecord;

/// Nominal flow rate (m³/h) that corresponds to 100% yield.
pub const NOMINAL_FLOW_REFERENCE: f64 = 120.0;

/// Upper bound for the yield percentage.
pub const MAX_YIELD_PCT: f64 = 100.0;

/// Averages over a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BatchStats {
    /// Number of records in the batch.
    pub total_count: usize,
    /// Mean flow rate, 2 decimals.
    pub avg_flow: f64,
    /// Mean pressure, 2 decimals.
    pub avg_pressure: f64,
    /// Mean temperature, 2 decimals.
    pub avg_temperature: f64,
    /// `min(100, avg_flow / 120 * 100)`, 1 decimal.
    pub yield_pct: f64,
}

/// Compute batch averages. An empty batch yields all zeros.
pub fn batch_stats(records: &[EquipmentRecord]) -> BatchStats {
    if records.is_empty() {
        return BatchStats::default();
    }
    let n = records.len() as f64;
    let flow_sum: f64 = records.iter().map(|r| r.flow_rate).sum();
    let pressure_sum: f64 = records.iter().map(|r| r.pressure).sum();
    let temperature_sum: f64 = records.iter().map(|r| r.temperature).sum();

    let avg_flow = round_to(flow_sum / n, 2);
    BatchStats {
        total_count: records.len(),
        avg_flow,
        avg_pressure: round_to(pressure_sum / n, 2),
        avg_temperature: round_to(temperature_sum / n, 2),
        yield_pct: yield_pct(avg_flow),
    }
}

/// Yield relative to [`NOMINAL_FLOW_REFERENCE`], 1 decimal.
///
/// Capped at 100. Negative flow (not validated upstream) floors at 0 and
/// NaN flow yields 0.
pub fn yield_pct(avg_flow: f64) -> f64 {
    if avg_flow.is_nan() {
        return 0.0;
    }
    let pct = (avg_flow / NOMINAL_FLOW_REFERENCE * 100.0).clamp(0.0, MAX_YIELD_PCT);
    round_to(pct, 1)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(flow: f64, pressure: f64) -> EquipmentRecord {
        EquipmentRecord::new("u", "Pump", flow, 25.0, pressure)
    }

    #[test]
    fn test_empty_batch_is_zero() {
        let s = batch_stats(&[]);
        assert_eq!(s, BatchStats::default());
        assert_eq!(s.yield_pct, 0.0);
    }

    #[test]
    fn test_two_record_example() {
        let s = batch_stats(&[rec(100.0, 9.0), rec(140.0, 5.0)]);
        assert_eq!(s.total_count, 2);
        assert_eq!(s.avg_flow, 120.0);
        assert_eq!(s.avg_pressure, 7.0);
        assert_eq!(s.yield_pct, 100.0);
    }

    #[test]
    fn test_averages_are_rounded() {
        let s = batch_stats(&[rec(1.0, 1.0), rec(1.0, 1.0), rec(2.0, 2.0)]);
        assert_eq!(s.avg_flow, 1.33);
        assert_eq!(s.avg_pressure, 1.33);
    }

    #[test]
    fn test_yield_is_capped() {
        assert_eq!(yield_pct(500.0), 100.0);
        assert_eq!(yield_pct(60.0), 50.0);
        assert_eq!(yield_pct(100.0), 83.3);
        assert_eq!(yield_pct(-30.0), 0.0);
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to(2.345, 1), 2.3);
        assert_eq!(round_to(21.575, 0), 22.0);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }

    #[test]
    fn test_nan_flow_stays_in_range() {
        assert_eq!(yield_pct(f64::NAN), 0.0);
        let s = batch_stats(&[rec(f64::NAN, 1.0), rec(100.0, 1.0)]);
        assert!(s.avg_flow.is_nan());
        assert_eq!(s.yield_pct, 0.0);
    }
}
