//! Column width heuristic

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use rust_xlsxwriter::{ColNum, Worksheet};

use crate::model::MetricTable;

use super::layout::Placement;

/// Tracks the longest text per sheet column and sizes columns from it.
///
/// Identifier columns are left at whatever width they had when written.
#[derive(Debug, Clone)]
pub struct ColumnWidths {
    longest: BTreeMap<ColNum, usize>,
    identifiers: BTreeSet<ColNum>,
    padding: usize,
}

impl ColumnWidths {
    pub fn new(padding: usize) -> Self {
        Self {
            longest: BTreeMap::new(),
            identifiers: BTreeSet::new(),
            padding,
        }
    }

    /// Record a piece of text written into `col`
    pub fn observe(&mut self, col: ColNum, text: &str) {
        let len = text.chars().count();
        let entry = self.longest.entry(col).or_insert(0);
        *entry = (*entry).max(len);
    }

    /// Record every cell a table occupies when written at `at`
    pub fn observe_table(&mut self, table: &MetricTable, at: Placement) {
        self.observe(at.col, table.title());

        for (offset, (name, values)) in table.columns().iter().enumerate() {
            let col = at.col + offset as ColNum;
            self.observe(col, name);
            for value in values {
                if !value.is_null() {
                    self.observe(col, &value.display());
                }
            }
        }
    }

    /// Exclude `col` from resizing
    pub fn mark_identifier(&mut self, col: ColNum) {
        self.identifiers.insert(col);
    }

    pub fn is_identifier(&self, col: ColNum) -> bool {
        self.identifiers.contains(&col)
    }

    /// Width for every resizable column from 0 to the last observed one
    pub fn resolve(&self) -> BTreeMap<ColNum, f64> {
        let Some(&last) = self.longest.keys().next_back() else {
            return BTreeMap::new();
        };

        (0..=last)
            .filter(|col| !self.is_identifier(*col))
            .map(|col| {
                let longest = self.longest.get(&col).copied().unwrap_or(0);
                (col, (longest + self.padding) as f64)
            })
            .collect()
    }

    /// Apply the resolved widths to a worksheet
    pub fn apply(&self, sheet: &mut Worksheet) -> Result<BTreeMap<ColNum, f64>> {
        let widths = self.resolve();
        for (&col, &width) in &widths {
            sheet.set_column_width(col, width)?;
        }
        Ok(widths)
    }
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::new(4)
    }
}
