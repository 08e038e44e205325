//! Stocking classification by equipment category.
//!
//! Each category's unit count maps onto three bands:
//!
//! ```text
//! qty <= 2  → UNDERSTOCK
//! qty == 3  → OPTIMAL
//! qty >= 4  → OVERFLOW
//! ```
//!
//! The optimal band is a single value. It is kept exactly as operations
//! defined it.

use serde::{Deserialize, Serialize};

use crate::category_map::CategoryMap;
use crate::record::EquipmentRecord;

/// Label used for records without a category in the inventory.
pub const INVENTORY_FALLBACK_CATEGORY: &str = "Unknown";

/// Largest quantity that is still understocked.
pub const UNDERSTOCK_MAX_QTY: usize = 2;
/// Largest quantity that is not yet overflowing.
pub const OPTIMAL_MAX_QTY: usize = 3;

/// Stocking band for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Understock,
    Optimal,
    Overflow,
}

impl StockStatus {
    /// Classify a unit count.
    pub fn from_qty(qty: usize) -> Self {
        if qty <= UNDERSTOCK_MAX_QTY {
            Self::Understock
        } else if qty > OPTIMAL_MAX_QTY {
            Self::Overflow
        } else {
            Self::Optimal
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Understock => write!(f, "UNDERSTOCK"),
            Self::Optimal => write!(f, "OPTIMAL"),
            Self::Overflow => write!(f, "OVERFLOW"),
        }
    }
}

/// One inventory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    /// Upper-cased category label.
    pub category: String,
    pub qty: usize,
    pub status: StockStatus,
}

/// Unit count per labeled category, in first-seen order.
///
/// Unlabeled records are not counted.
pub fn type_distribution(records: &[EquipmentRecord]) -> CategoryMap<usize> {
    let mut counts = CategoryMap::new();
    for r in records.iter().filter(|r| r.is_labeled()) {
        *counts.entry_or_insert_with(&r.category, || 0) += 1;
    }
    counts
}

/// Stocking status for every category in the batch.
///
/// Labels are upper-cased before grouping, so `Pump`, `PUMP` and `pump`
/// count as one category and every output label is distinct. Records
/// without a category are grouped under [`INVENTORY_FALLBACK_CATEGORY`].
pub fn inventory_status(records: &[EquipmentRecord]) -> Vec<InventoryLine> {
    let mut counts: CategoryMap<usize> = CategoryMap::new();
    for r in records {
        let category = if r.is_labeled() {
            r.category.to_uppercase()
        } else {
            INVENTORY_FALLBACK_CATEGORY.to_uppercase()
        };
        *counts.entry_or_insert_with(&category, || 0) += 1;
    }
    counts
        .iter()
        .map(|(category, &qty)| InventoryLine {
            category: category.to_string(),
            qty,
            status: StockStatus::from_qty(qty),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(category: &str, n: usize) -> Vec<EquipmentRecord> {
        (0..n)
            .map(|i| EquipmentRecord::new(format!("{category}-{i}"), category, 10.0, 25.0, 2.0))
            .collect()
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StockStatus::from_qty(0), StockStatus::Understock);
        assert_eq!(StockStatus::from_qty(1), StockStatus::Understock);
        assert_eq!(StockStatus::from_qty(2), StockStatus::Understock);
        assert_eq!(StockStatus::from_qty(3), StockStatus::Optimal);
        assert_eq!(StockStatus::from_qty(4), StockStatus::Overflow);
        assert_eq!(StockStatus::from_qty(40), StockStatus::Overflow);
    }

    #[test]
    fn test_lines_per_category() {
        let mut batch = units("Pump", 2);
        batch.extend(units("Valve", 3));
        batch.extend(units("Reactor", 4));
        let lines = inventory_status(&batch);
        assert_eq!(
            lines,
            vec![
                InventoryLine {
                    category: "PUMP".into(),
                    qty: 2,
                    status: StockStatus::Understock
                },
                InventoryLine {
                    category: "VALVE".into(),
                    qty: 3,
                    status: StockStatus::Optimal
                },
                InventoryLine {
                    category: "REACTOR".into(),
                    qty: 4,
                    status: StockStatus::Overflow
                },
            ]
        );
    }

    #[test]
    fn test_unlabeled_is_unknown() {
        let lines = inventory_status(&units("", 1));
        assert_eq!(lines[0].category, "UNKNOWN");
        assert_eq!(lines[0].status, StockStatus::Understock);
    }

    #[test]
    fn test_distribution_skips_unlabeled() {
        let mut batch = units("Pump", 1);
        batch.extend(units("Compressor", 1));
        batch.extend(units("", 2));
        let dist = type_distribution(&batch);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.get("Pump"), Some(&1));
        assert_eq!(dist.get("Compressor"), Some(&1));
    }

    #[test]
    fn test_status_serializes_upper_case() {
        let json = serde_json::to_string(&StockStatus::Overflow).unwrap();
        assert_eq!(json, "\"OVERFLOW\"");
        assert_eq!(StockStatus::Optimal.to_string(), "OPTIMAL");
    }

    #[test]
    fn test_empty_batch_has_no_lines() {
        assert!(inventory_status(&[]).is_empty());
        assert!(type_distribution(&[]).is_empty());
    }

    #[test]
    fn test_case_variants_share_one_line() {
        let mut batch = units("Pump", 1);
        batch.extend(units("PUMP", 1));
        batch.extend(units("pump", 2));
        batch.extend(units("Valve", 1));
        let lines = inventory_status(&batch);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].category, "PUMP");
        assert_eq!(lines[0].qty, 4);
        assert_eq!(lines[0].status, StockStatus::Overflow);
        assert_eq!(lines[1].category, "VALVE");
        // the distribution still keys on the label as written
        assert_eq!(type_distribution(&batch).len(), 4);
    }
}
