//! CSV/TSV parser: one table per file

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;

use crate::config::ReportConfig;
use crate::model::{CellValue, MetricTable};

use super::{header_columns, parse_cell_value, table_with_fallback_title, Parser};

/// Parser for delimited text files
pub struct CsvParser;

impl Parser for CsvParser {
    fn parse(&self, path: &Path, config: &ReportConfig) -> Result<Vec<MetricTable>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let delimiter = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        };
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(BufReader::new(file));

        let headers = csv_reader
            .headers()
            .context("Failed to read CSV headers")?
            .clone();

        let mut columns: IndexMap<String, Vec<CellValue>> =
            header_columns(headers.iter().map(str::to_string))
                .with_context(|| format!("Invalid header in {}", path.display()))?;

        for (line_num, result) in csv_reader.records().enumerate() {
            let record = result.with_context(|| format!("Failed to read CSV row {}", line_num + 2))?; // +2 for 1-indexing and header

            // Short rows are padded with nulls, extra fields dropped
            for (i, values) in columns.values_mut().enumerate() {
                values.push(record.get(i).map_or(CellValue::Null, parse_cell_value));
            }
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("table");

        let table = table_with_fallback_title(columns, &config.title_column, stem)
            .with_context(|| format!("Invalid metric table in {}", path.display()))?;
        Ok(vec![table])
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "tsv")
    }
}
