//! Configuration handling for metricsheet

use std::path::PathBuf;

use crate::model::DEFAULT_TITLE_COLUMN;

/// Name of the single worksheet in the report
pub const DEFAULT_SHEET_NAME: &str = "Comparação de Modelos";

/// Configuration for report export
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Output path without extension; `.xlsx` is always appended
    pub output: PathBuf,
    /// Worksheet name
    pub sheet_name: String,
    /// Tables placed side by side before wrapping to a new band
    pub tables_per_band: usize,
    /// Empty columns between tables in a band
    pub table_spacing: u16,
    /// Empty rows between bands
    pub band_spacing: u32,
    /// Characters added to the longest cell when sizing a column
    pub width_padding: usize,
    /// Input column that carries the table title
    pub title_column: String,
    /// For Excel input: only read this sheet
    pub input_sheet: Option<String>,
    /// Thin borders around header and data cells
    pub data_borders: bool,
    /// Number format applied to numeric data cells (e.g. "0.00")
    pub number_format: Option<String>,
    /// Launch the default viewer once the file is saved
    pub open_after_export: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("metrics"),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            tables_per_band: 2,
            table_spacing: 2,
            band_spacing: 1,
            width_padding: 4,
            title_column: DEFAULT_TITLE_COLUMN.to_string(),
            input_sheet: None,
            data_borders: false,
            number_format: None,
            open_after_export: true,
        }
    }
}

impl ReportConfig {
    /// Create a new config writing to `output`
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Default::default()
        }
    }

    /// Set the worksheet name
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Set how many tables share a band (at least one)
    pub fn with_tables_per_band(mut self, count: usize) -> Self {
        self.tables_per_band = count.max(1);
        self
    }

    /// Set the column gap between tables
    pub fn with_table_spacing(mut self, columns: u16) -> Self {
        self.table_spacing = columns;
        self
    }

    /// Set the row gap between bands
    pub fn with_band_spacing(mut self, rows: u32) -> Self {
        self.band_spacing = rows;
        self
    }

    /// Set the title column name used by the parsers
    pub fn with_title_column(mut self, column: impl Into<String>) -> Self {
        self.title_column = column.into();
        self
    }

    /// Set the Excel input sheet
    pub fn with_input_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.input_sheet = Some(sheet.into());
        self
    }

    /// Enable thin borders on header and data cells
    pub fn with_data_borders(mut self, enabled: bool) -> Self {
        self.data_borders = enabled;
        self
    }

    /// Set the number format for numeric cells
    pub fn with_number_format(mut self, format: impl Into<String>) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Enable or disable launching the viewer
    pub fn with_open_after_export(mut self, open: bool) -> Self {
        self.open_after_export = open;
        self
    }

    /// Final file path: the output path with `.xlsx` appended
    pub fn output_file(&self) -> PathBuf {
        let mut path = self.output.clone().into_os_string();
        path.push(".xlsx");
        PathBuf::from(path)
    }
}
