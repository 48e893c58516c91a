//! Grid placement of tables on the report sheet

use anyhow::{anyhow, Result};
use rust_xlsxwriter::{ColNum, RowNum};

use crate::config::ReportConfig;

/// Cells occupied by a written table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableExtent {
    /// Value columns
    pub width: ColNum,
    /// Data rows plus the title and header rows
    pub height: RowNum,
}

/// Zero-based position of a table's title cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: RowNum,
    pub col: ColNum,
}

/// Grid policy: fixed number of tables per band, fixed gaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub tables_per_band: usize,
    pub table_spacing: ColNum,
    pub band_spacing: RowNum,
    pub origin: Placement,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            tables_per_band: 2,
            table_spacing: 2,
            band_spacing: 1,
            origin: Placement { row: 0, col: 0 },
        }
    }
}

impl From<&ReportConfig> for GridLayout {
    fn from(config: &ReportConfig) -> Self {
        Self {
            tables_per_band: config.tables_per_band.max(1),
            table_spacing: config.table_spacing,
            band_spacing: config.band_spacing,
            ..Default::default()
        }
    }
}

impl GridLayout {
    /// Start placing tables at the origin
    pub fn cursor(&self) -> GridCursor {
        GridCursor {
            layout: *self,
            next: Some(self.origin),
            band_height: 0,
            placed: 0,
        }
    }

    /// Compute every placement up front from known extents
    pub fn place(&self, extents: &[TableExtent]) -> Result<Vec<Placement>> {
        let mut cursor = self.cursor();
        extents
            .iter()
            .map(|extent| {
                let at = cursor.position()?;
                cursor.advance(*extent);
                Ok(at)
            })
            .collect()
    }
}

/// Walks the grid as tables are written
#[derive(Debug, Clone)]
pub struct GridCursor {
    layout: GridLayout,
    /// `None` once the grid has run past the addressable sheet
    next: Option<Placement>,
    band_height: RowNum,
    placed: usize,
}

impl GridCursor {
    /// Where the next table goes
    pub fn position(&self) -> Result<Placement> {
        self.next.ok_or_else(|| {
            anyhow!(
                "Table {} does not fit on the sheet with the configured spacing",
                self.placed + 1
            )
        })
    }

    /// Record the extent of the table just written at `position()`
    pub fn advance(&mut self, extent: TableExtent) {
        self.placed += 1;
        self.band_height = self.band_height.max(extent.height);

        let wrap = self.placed % self.layout.tables_per_band.max(1) == 0;
        let band_height = self.band_height;
        let layout = self.layout;
        self.next = self.next.and_then(|next| {
            if wrap {
                let row = next
                    .row
                    .checked_add(band_height)?
                    .checked_add(layout.band_spacing)?;
                Some(Placement { row, col: layout.origin.col })
            } else {
                let col = next
                    .col
                    .checked_add(extent.width)?
                    .checked_add(layout.table_spacing)?;
                Some(Placement { row: next.row, col })
            }
        });
        if wrap {
            self.band_height = 0;
        }
    }
}
