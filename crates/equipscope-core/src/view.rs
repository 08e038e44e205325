//! Display-ready rows and chart slices.
//!
//! Nothing here aggregates; every value is derived from one record (or one
//! distribution entry) plus the caller's [`Palette`].

use serde::Serialize;

use crate::category_map::CategoryMap;
use crate::failure::predict_hours_to_failure;
use crate::health::StabilityStatus;
use crate::palette::{Palette, status_color};
use crate::record::EquipmentRecord;

/// Pressure (bar) that fills the gauge.
pub const GAUGE_FULL_SCALE_BAR: f64 = 10.0;

/// One table row for the equipment listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentRow {
    pub name: String,
    pub category: String,
    /// Category colour from the palette.
    pub category_color: String,
    pub flow_rate: f64,
    pub temperature: f64,
    pub pressure: f64,
    /// Pressure gauge fill, `0..=100`.
    pub gauge_pct: f64,
    pub status: StabilityStatus,
    /// Gauge colour for `status`.
    pub status_color: &'static str,
    /// Forecast for critical units only.
    pub hours_to_failure: Option<u32>,
}

impl EquipmentRow {
    pub fn from_record(record: &EquipmentRecord, palette: &Palette) -> Self {
        let status = StabilityStatus::from_pressure(record.pressure);
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            category_color: palette.color_for(&record.category).to_string(),
            flow_rate: record.flow_rate,
            temperature: record.temperature,
            pressure: record.pressure,
            gauge_pct: pressure_gauge_pct(record.pressure),
            status,
            status_color: status_color(status),
            hours_to_failure: predict_hours_to_failure(record.pressure),
        }
    }
}

/// Build rows for an already-filtered view, keeping its order.
pub fn equipment_rows<'a>(
    records: impl IntoIterator<Item = &'a EquipmentRecord>,
    palette: &Palette,
) -> Vec<EquipmentRow> {
    records
        .into_iter()
        .map(|r| EquipmentRow::from_record(r, palette))
        .collect()
}

/// Gauge fill for a pressure reading, clamped to `0..=100`.
pub fn pressure_gauge_pct(pressure: f64) -> f64 {
    if pressure.is_nan() {
        return 0.0;
    }
    (pressure / GAUGE_FULL_SCALE_BAR * 100.0).clamp(0.0, 100.0)
}

/// One slice of the equipment-mix chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub category: String,
    pub count: usize,
    pub color: String,
}

/// Pair each distribution entry with its palette colour.
pub fn distribution_slices(
    distribution: &CategoryMap<usize>,
    palette: &Palette,
) -> Vec<DistributionSlice> {
    distribution
        .iter()
        .map(|(category, &count)| DistributionSlice {
            category: category.to_string(),
            count,
            color: palette.color_for(category).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{CRITICAL_COLOR, FALLBACK_COLOR, STABLE_COLOR};

    #[test]
    fn test_critical_row() {
        let r = EquipmentRecord::new("P-100", "Pump", 100.0, 30.0, 9.0);
        let row = EquipmentRow::from_record(&r, &Palette::default());
        assert_eq!(row.status, StabilityStatus::Critical);
        assert_eq!(row.status_color, CRITICAL_COLOR);
        assert_eq!(row.hours_to_failure, Some(21));
        assert_eq!(row.gauge_pct, 90.0);
        assert_eq!(row.category_color, "#22C1EE");
    }

    #[test]
    fn test_stable_row_with_unknown_category() {
        let r = EquipmentRecord::new("M-1", "Mixer", 10.0, 25.0, 2.5);
        let row = EquipmentRow::from_record(&r, &Palette::default());
        assert_eq!(row.status, StabilityStatus::Stable);
        assert_eq!(row.status_color, STABLE_COLOR);
        assert_eq!(row.hours_to_failure, None);
        assert_eq!(row.category_color, FALLBACK_COLOR);
    }

    #[test]
    fn test_gauge_is_clamped() {
        assert_eq!(pressure_gauge_pct(15.0), 100.0);
        assert_eq!(pressure_gauge_pct(-1.0), 0.0);
        assert_eq!(pressure_gauge_pct(5.0), 50.0);
        assert_eq!(pressure_gauge_pct(f64::NAN), 0.0);
    }

    #[test]
    fn test_rows_keep_order() {
        let batch = vec![
            EquipmentRecord::new("b", "Valve", 1.0, 25.0, 1.0),
            EquipmentRecord::new("a", "Pump", 1.0, 25.0, 1.0),
        ];
        let rows = equipment_rows(&batch, &Palette::default());
        assert_eq!(rows[0].name, "b");
        assert_eq!(rows[1].name, "a");
    }

    #[test]
    fn test_slices_follow_distribution() {
        let mut dist = CategoryMap::new();
        dist.insert("Valve", 2);
        dist.insert("Centrifuge", 1);
        let slices = distribution_slices(&dist, &Palette::default());
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].color, "#FF4D8D");
        assert_eq!(slices[1].color, FALLBACK_COLOR);
    }
}
