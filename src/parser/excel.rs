//! Excel parser (xlsx, xls, xlsm, ods): one table per sheet

use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use indexmap::IndexMap;

use crate::config::ReportConfig;
use crate::model::{CellValue, MetricTable};

use super::{header_columns, table_with_fallback_title, Parser};

/// Parser for spreadsheet workbooks
pub struct ExcelParser;

impl Parser for ExcelParser {
    fn parse(&self, path: &Path, config: &ReportConfig) -> Result<Vec<MetricTable>> {
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

        let sheet_names = match config.input_sheet {
            Some(ref name) => vec![name.clone()],
            None => workbook.sheet_names(),
        };
        if sheet_names.is_empty() {
            bail!("No sheets found in workbook");
        }

        let mut tables = Vec::with_capacity(sheet_names.len());
        for sheet_name in &sheet_names {
            let range: Range<Data> = workbook
                .worksheet_range(sheet_name)
                .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

            match range_to_table(&range, sheet_name, config)? {
                Some(table) => tables.push(table),
                None if config.input_sheet.is_some() => bail!("Sheet `{}` is empty", sheet_name),
                None => log::warn!("Skipping empty sheet `{}` in {}", sheet_name, path.display()),
            }
        }

        Ok(tables)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "xlsx" | "xls" | "ods" | "xlsm")
    }
}

fn range_to_table(
    range: &Range<Data>,
    sheet_name: &str,
    config: &ReportConfig,
) -> Result<Option<MetricTable>> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(None);
    };

    let names = header_row.iter().enumerate().map(|(i, cell)| {
        let name = cell_to_string(cell);
        if name.is_empty() {
            format!("Column{}", i + 1)
        } else {
            name
        }
    });
    let mut columns: IndexMap<String, Vec<CellValue>> = header_columns(names)
        .with_context(|| format!("Invalid header in sheet `{}`", sheet_name))?;

    for row in rows {
        for (i, values) in columns.values_mut().enumerate() {
            values.push(row.get(i).map_or(CellValue::Null, convert_cell));
        }
    }

    let table = table_with_fallback_title(columns, &config.title_column, sheet_name)
        .with_context(|| format!("Invalid metric table in sheet `{}`", sheet_name))?;
    Ok(Some(table))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#{:?}", e),
    }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) if s.trim().is_empty() => CellValue::Null,
        Data::String(s) => CellValue::from(s.as_str()),
        Data::Float(f) => CellValue::Float(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::from(cell_to_string(other)),
    }
}
