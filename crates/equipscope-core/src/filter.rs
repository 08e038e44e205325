//! Search and critical-only selection over a batch.

use serde::{Deserialize, Serialize};

use crate::health::is_critical;
use crate::record::EquipmentRecord;

/// View selection: a name search plus an optional critical-only switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentFilter {
    /// Case-insensitive substring matched against the record name.
    pub search: String,
    /// Keep only units above the critical pressure threshold.
    pub critical_only: bool,
}

impl EquipmentFilter {
    pub fn new(search: impl Into<String>, critical_only: bool) -> Self {
        Self {
            search: search.into(),
            critical_only,
        }
    }

    /// Records that pass, in batch order. The batch itself is untouched.
    pub fn apply<'a>(&self, records: &'a [EquipmentRecord]) -> Vec<&'a EquipmentRecord> {
        let needle = self.search.to_lowercase();
        records
            .iter()
            .filter(|r| self.passes(r, &needle))
            .collect()
    }

    fn passes(&self, record: &EquipmentRecord, needle: &str) -> bool {
        let name_ok = needle.is_empty() || record.name.to_lowercase().contains(needle);
        name_ok && (!self.critical_only || is_critical(record.pressure))
    }
}

/// Shorthand for `EquipmentFilter::new(search, critical_only).apply(records)`.
pub fn filter_equipment<'a>(
    records: &'a [EquipmentRecord],
    search: &str,
    critical_only: bool,
) -> Vec<&'a EquipmentRecord> {
    EquipmentFilter::new(search, critical_only).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<EquipmentRecord> {
        vec![
            EquipmentRecord::new("Pump-A", "Pump", 100.0, 30.0, 9.5),
            EquipmentRecord::new("pump-b", "Pump", 90.0, 31.0, 4.0),
            EquipmentRecord::new("Reactor-1", "Reactor", 20.0, 300.0, 12.0),
            EquipmentRecord::new("", "Valve", 5.0, 25.0, 1.0),
        ]
    }

    fn names(rows: &[&EquipmentRecord]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_empty_search_matches_all() {
        let b = batch();
        assert_eq!(filter_equipment(&b, "", false).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let b = batch();
        assert_eq!(names(&filter_equipment(&b, "PUMP", false)), ["Pump-A", "pump-b"]);
    }

    #[test]
    fn test_empty_name_only_matches_empty_search() {
        let b = batch();
        assert!(filter_equipment(&b, "x", false).iter().all(|r| !r.name.is_empty()));
    }

    #[test]
    fn test_critical_only_narrows() {
        let b = batch();
        assert_eq!(names(&filter_equipment(&b, "", true)), ["Pump-A", "Reactor-1"]);
        assert_eq!(names(&filter_equipment(&b, "pump", true)), ["Pump-A"]);
    }

    #[test]
    fn test_filter_leaves_batch_untouched() {
        let b = batch();
        let before = b.clone();
        let f = EquipmentFilter::new("reactor", true);
        assert_eq!(names(&f.apply(&b)), ["Reactor-1"]);
        assert_eq!(b, before);
    }
}
