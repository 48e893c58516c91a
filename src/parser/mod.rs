//! Parser layer for reading metric tables from files

mod csv;
mod excel;
mod json;

use std::path::Path;

use anyhow::{bail, Result};
use indexmap::IndexMap;

use crate::config::ReportConfig;
use crate::model::{CellValue, MetricTable, TableError};

pub use self::csv::CsvParser;
pub use self::excel::ExcelParser;
pub use self::json::JsonParser;

/// Trait for parsing metric table files
pub trait Parser: Send + Sync {
    /// Parse a file into one or more tables
    fn parse(&self, path: &Path, config: &ReportConfig) -> Result<Vec<MetricTable>>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for creating parsers based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn Parser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a new parser factory with all supported parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(JsonParser), Box::new(CsvParser), Box::new(ExcelParser)],
        }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn Parser> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        bail!(
            "Unsupported file format: {}",
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
        )
    }

    /// Parse a file using the appropriate parser
    pub fn parse(&self, path: &Path, config: &ReportConfig) -> Result<Vec<MetricTable>> {
        let parser = self.get_parser(path)?;
        let tables = parser.parse(path, config)?;
        log::debug!("Read {} table(s) from {}", tables.len(), path.display());
        Ok(tables)
    }
}

/// Empty value columns keyed by header name; a repeated name is rejected
fn header_columns<I>(names: I) -> Result<IndexMap<String, Vec<CellValue>>, TableError>
where
    I: IntoIterator<Item = String>,
{
    let mut columns = IndexMap::new();
    for name in names {
        if columns.contains_key(&name) {
            return Err(TableError::DuplicateColumn(name));
        }
        columns.insert(name, Vec::new());
    }
    Ok(columns)
}

/// Build a table whose title comes from `title_column` when it has a value,
/// otherwise from `fallback`
fn table_with_fallback_title(
    mut raw: IndexMap<String, Vec<CellValue>>,
    title_column: &str,
    fallback: &str,
) -> Result<MetricTable> {
    let has_title = raw
        .get(title_column)
        .is_some_and(|values| values.iter().any(|v| !v.is_null()));

    let table = if has_title {
        MetricTable::from_raw(raw, title_column)?
    } else {
        raw.shift_remove(title_column);
        MetricTable::new(fallback, raw)?
    };
    Ok(table)
}

/// Type a text cell: empty/null markers, booleans, integers, floats, text
fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "NA" {
        return CellValue::Null;
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    CellValue::from(trimmed)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_parse_cell_value() {
        assert_eq!(parse_cell_value(""), CellValue::Null);
        assert_eq!(parse_cell_value("NA"), CellValue::Null);
        assert_eq!(parse_cell_value("TRUE"), CellValue::Bool(true));
        assert_eq!(parse_cell_value("42"), CellValue::Int(42));
        assert_eq!(parse_cell_value(" 0.875 "), CellValue::Float(0.875));
        assert_eq!(parse_cell_value("SVC"), CellValue::from("SVC"));
    }

    #[test]
    fn test_factory_picks_by_extension() {
        let factory = ParserFactory::new();
        assert!(factory.get_parser(&PathBuf::from("a.JSON")).is_ok());
        assert!(factory.get_parser(&PathBuf::from("a.tsv")).is_ok());
        assert!(factory.get_parser(&PathBuf::from("a.xlsx")).is_ok());
        assert!(factory.get_parser(&PathBuf::from("a.parquet")).is_err());
    }

    #[test]
    fn test_header_columns_reject_duplicates() {
        let names = ["title", "model", "f1", "f1"].map(String::from);
        assert_eq!(
            header_columns(names).unwrap_err(),
            TableError::DuplicateColumn("f1".into())
        );
    }

    #[test]
    fn test_fallback_title() {
        let raw: IndexMap<String, Vec<CellValue>> = [
            ("title".to_string(), vec![CellValue::Null]),
            ("model".to_string(), vec![CellValue::from("SVC")]),
        ]
        .into_iter()
        .collect();

        let table = table_with_fallback_title(raw, "title", "fold_3").unwrap();
        assert_eq!(table.title(), "fold_3");
        assert_eq!(table.column_count(), 1);
    }
}
