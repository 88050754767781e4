use clap::ValueEnum;
use std::collections::BTreeMap;

use crate::util::format_yield;

/// Page orientation for the generated document.
///
/// Matched case-insensitively on the command line (`LANDSCAPE`, `landscape`
/// and `Landscape` are all accepted); the default is portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// One flat row from the yield query, exactly as projected by the join.
///
/// `yield_value` is nullable in the source schema; a NULL survives the pivot
/// and renders as a blank cell.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct YieldRow {
    pub crop_name: String,
    pub state_name: String,
    pub year: i32,
    pub method: String,
    pub yield_value: Option<f64>,
}

/// Composite lookup key for one yield figure.
///
/// The derived `Ord` compares crop, then state, then year, then method, so a
/// `BTreeMap` keyed by `YieldKey` iterates in the same order the query's
/// `ORDER BY` emits rows. Section and row order in the document come straight
/// from this ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct YieldKey {
    pub crop: String,
    pub state: String,
    pub year: i32,
    pub method: String,
}

/// The pivoted result set: every (crop, state, year, method) tuple mapped to
/// its yield value.
///
/// A single flat map with an explicit "missing key → empty string" lookup,
/// rather than a crop → state → year → method nesting.
#[derive(Debug, Default)]
pub struct YieldTable {
    values: BTreeMap<YieldKey, Option<f64>>,
}

impl YieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one row. Duplicate keys overwrite (last write wins), though the
    /// source data is keyed uniquely per tuple and should never produce one.
    pub fn insert(&mut self, row: YieldRow) {
        let key = YieldKey {
            crop: row.crop_name,
            state: row.state_name,
            year: row.year,
            method: row.method,
        };
        self.values.insert(key, row.yield_value);
    }

    /// Typed lookup of a single figure. `None` means the tuple was absent or
    /// its stored value was NULL.
    pub fn get(&self, crop: &str, state: &str, year: i32, method: &str) -> Option<f64> {
        let key = YieldKey {
            crop: crop.to_string(),
            state: state.to_string(),
            year,
            method: method.to_string(),
        };
        self.values.get(&key).copied().flatten()
    }

    /// Text form of a cell: the yield value, or an empty string when the
    /// tuple is missing or NULL. A value is never replaced by a placeholder.
    pub fn cell_text(&self, crop: &str, state: &str, year: i32, method: &str) -> String {
        self.get(crop, state, year, method)
            .map(format_yield)
            .unwrap_or_default()
    }

    /// Crop names in document order (alphabetical, deduplicated).
    pub fn crops(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for key in self.values.keys() {
            if out.last() != Some(&key.crop.as_str()) {
                out.push(&key.crop);
            }
        }
        out
    }

    /// State names for one crop, in row order (alphabetical, deduplicated).
    pub fn states(&self, crop: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for key in self.values.keys() {
            if key.crop == crop && out.last() != Some(&key.state.as_str()) {
                out.push(&key.state);
            }
        }
        out
    }

    /// Number of stored (crop, state, year, method) tuples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Tuples stored for one crop, for the console summary.
    pub fn records_for(&self, crop: &str) -> usize {
        self.values.keys().filter(|k| k.crop == crop).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(crop: &str, state: &str, year: i32, method: &str, value: Option<f64>) -> YieldRow {
        YieldRow {
            crop_name: crop.to_string(),
            state_name: state.to_string(),
            year,
            method: method.to_string(),
            yield_value: value,
        }
    }

    #[test]
    fn inserted_tuples_are_retrievable_unchanged() {
        let mut table = YieldTable::new();
        table.insert(row("Wheat", "Punjab", 2024, "ARIMA", Some(3.2)));
        table.insert(row("Wheat", "Punjab", 2023, "MoA&FW", Some(3.0)));
        table.insert(row("Rice", "Odisha", 2022, "MoA&FW", None));

        assert_eq!(table.get("Wheat", "Punjab", 2024, "ARIMA"), Some(3.2));
        assert_eq!(table.get("Wheat", "Punjab", 2023, "MoA&FW"), Some(3.0));
        assert_eq!(table.get("Rice", "Odisha", 2022, "MoA&FW"), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let mut table = YieldTable::new();
        table.insert(row("Wheat", "Punjab", 2024, "ARIMA", Some(1.0)));
        table.insert(row("Wheat", "Punjab", 2024, "ARIMA", Some(2.0)));
        assert_eq!(table.get("Wheat", "Punjab", 2024, "ARIMA"), Some(2.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_and_null_cells_render_blank() {
        let mut table = YieldTable::new();
        table.insert(row("Wheat", "Punjab", 2023, "MoA&FW", None));

        // Present but NULL.
        assert_eq!(table.cell_text("Wheat", "Punjab", 2023, "MoA&FW"), "");
        // Absent entirely.
        assert_eq!(table.cell_text("Wheat", "Punjab", 2022, "MoA&FW"), "");
    }

    #[test]
    fn crops_and_states_iterate_alphabetically_regardless_of_insertion_order() {
        let mut table = YieldTable::new();
        // Deliberately inserted out of order.
        table.insert(row("Wheat", "Punjab", 2024, "ARIMA", Some(3.2)));
        table.insert(row("Maize", "Bihar", 2024, "ARIMA", Some(2.1)));
        table.insert(row("Wheat", "Haryana", 2024, "ARIMA", Some(3.4)));
        table.insert(row("Maize", "Andhra Pradesh", 2024, "ARIMA", Some(2.5)));
        table.insert(row("Maize", "Bihar", 2023, "MoA&FW", Some(2.0)));

        assert_eq!(table.crops(), vec!["Maize", "Wheat"]);
        assert_eq!(table.states("Maize"), vec!["Andhra Pradesh", "Bihar"]);
        assert_eq!(table.states("Wheat"), vec!["Haryana", "Punjab"]);
        assert_eq!(table.records_for("Maize"), 3);
    }
}
