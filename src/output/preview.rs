//! Boxed terminal preview of metric tables

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::model::MetricTable;

/// Render one table as a titled, boxed grid
pub fn render_table(table: &MetricTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.column_names().map(str::to_string));
    for row in table.rows() {
        builder.push_record(row.into_iter().map(|cell| cell.display().into_owned()));
    }

    let mut grid = builder.build();
    grid.with(Style::modern());
    format!("{}\n{}", table.title(), grid)
}

/// Write every table, separated by blank lines
pub fn render_preview(tables: &[MetricTable], writer: &mut dyn Write) -> Result<()> {
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{}", render_table(table))?;
    }
    Ok(())
}
