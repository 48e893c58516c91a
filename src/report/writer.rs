//! Writes one metric table onto a worksheet

use anyhow::{bail, Context, Result};
use rust_xlsxwriter::{ColNum, Color, Format, FormatAlign, FormatBorder, RowNum, Worksheet};

use crate::config::ReportConfig;
use crate::model::{CellValue, MetricTable};

use super::layout::TableExtent;

const HEADER_FILL: u32 = 0xDDDDDD;

/// Cell formats shared by every table in a report
#[derive(Debug, Clone)]
pub struct TableStyles {
    pub title: Format,
    pub header: Format,
    pub data: Format,
    pub numeric: Format,
}

impl TableStyles {
    /// Styles derived from report options
    pub fn from_config(config: &ReportConfig) -> Self {
        let mut header = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_background_color(Color::RGB(HEADER_FILL));
        let mut data = Format::new().set_align(FormatAlign::Center);

        if config.data_borders {
            header = header.set_border(FormatBorder::Thin);
            data = data.set_border(FormatBorder::Thin);
        }

        let numeric = match config.number_format.as_deref() {
            Some(pattern) => data.clone().set_num_format(pattern),
            None => data.clone(),
        };

        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(12)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            header,
            data,
            numeric,
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

/// Write `table` with its title cell at (`row`, `col`).
///
/// Layout: merged title row, shaded header row, then data rows starting two
/// rows below the title. Returns the columns and rows the table occupies.
pub fn add_table(
    sheet: &mut Worksheet,
    table: &MetricTable,
    row: RowNum,
    col: ColNum,
    styles: &TableStyles,
) -> Result<TableExtent> {
    let width = table.column_count();
    if width == 0 {
        bail!("Table `{}` has no columns to write", table.title());
    }
    let width = ColNum::try_from(width)
        .with_context(|| format!("Table `{}` is too wide", table.title()))?;
    let height = RowNum::try_from(table.row_count() + 2)
        .with_context(|| format!("Table `{}` is too tall", table.title()))?;

    // Title, merged across the table (a single cell cannot be merged)
    if width > 1 {
        sheet
            .merge_range(row, col, row, col + width - 1, table.title(), &styles.title)
            .with_context(|| format!("Failed to write title of `{}`", table.title()))?;
    } else {
        sheet.write_string_with_format(row, col, table.title(), &styles.title)?;
    }

    for (offset, name) in table.column_names().enumerate() {
        sheet.write_string_with_format(row + 1, col + offset as ColNum, name, &styles.header)?;
    }

    for (row_offset, cells) in table.rows().enumerate() {
        let r = row + 2 + row_offset as RowNum;
        for (offset, cell) in cells.into_iter().enumerate() {
            write_cell(sheet, r, col + offset as ColNum, cell, styles)
                .with_context(|| format!("Failed to write cell ({}, {})", r, col + offset as ColNum))?;
        }
    }

    Ok(TableExtent { width, height })
}

fn write_cell(
    sheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    cell: &CellValue,
    styles: &TableStyles,
) -> Result<()> {
    match cell {
        CellValue::Null => {
            sheet.write_blank(row, col, &styles.data)?;
        }
        CellValue::Bool(b) => {
            sheet.write_boolean_with_format(row, col, *b, &styles.data)?;
        }
        CellValue::Int(i) => {
            sheet.write_number_with_format(row, col, *i as f64, &styles.numeric)?;
        }
        CellValue::Float(f) => {
            sheet.write_number_with_format(row, col, *f, &styles.numeric)?;
        }
        CellValue::String(s) => {
            let text: &str = s;
            sheet.write_string_with_format(row, col, text, &styles.data)?;
        }
    }
    Ok(())
}
