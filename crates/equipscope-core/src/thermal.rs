//! Per-category average temperature.

use crate::category_map::CategoryMap;
use crate::record::EquipmentRecord;
use crate::stats::round_to;

/// Label used for records without a category in the thermal profile.
pub const THERMAL_FALLBACK_CATEGORY: &str = "Other";

/// Average temperature per category, 1 decimal, in first-seen order.
///
/// Only categories present in the batch appear; there are no zero entries.
pub fn thermal_profile(records: &[EquipmentRecord]) -> CategoryMap<f64> {
    let mut totals: CategoryMap<(f64, usize)> = CategoryMap::new();
    for r in records {
        let category = if r.is_labeled() {
            r.category.as_str()
        } else {
            THERMAL_FALLBACK_CATEGORY
        };
        let (sum, count) = totals.entry_or_insert_with(category, || (0.0, 0));
        *sum += r.temperature;
        *count += 1;
    }
    totals.map_values(|(sum, count)| round_to(sum / count as f64, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(category: &str, temperature: f64) -> EquipmentRecord {
        EquipmentRecord::new("u", category, 50.0, temperature, 4.0)
    }

    #[test]
    fn test_averages_per_category() {
        let batch = vec![
            rec("Pump", 30.0),
            rec("Compressor", 40.0),
            rec("Pump", 35.0),
        ];
        let profile = thermal_profile(&batch);
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get("Pump"), Some(&32.5));
        assert_eq!(profile.get("Compressor"), Some(&40.0));
        assert_eq!(profile.keys().collect::<Vec<_>>(), ["Pump", "Compressor"]);
    }

    #[test]
    fn test_unlabeled_goes_to_other() {
        let profile = thermal_profile(&[rec("", 20.0), rec("", 31.0)]);
        assert_eq!(profile.get(THERMAL_FALLBACK_CATEGORY), Some(&25.5));
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        let profile = thermal_profile(&[rec("Valve", 10.0), rec("Valve", 10.0), rec("Valve", 11.0)]);
        assert_eq!(profile.get("Valve"), Some(&10.3));
    }

    #[test]
    fn test_removed_category_leaves_no_key() {
        let batch = vec![rec("Pump", 30.0), rec("Reactor", 300.0)];
        let without: Vec<_> = batch
            .iter()
            .filter(|r| r.category != "Reactor")
            .cloned()
            .collect();
        assert!(thermal_profile(&batch).contains_key("Reactor"));
        assert!(!thermal_profile(&without).contains_key("Reactor"));
        assert!(thermal_profile(&[]).is_empty());
    }
}
