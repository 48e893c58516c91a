//! Export of a full metrics report

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rust_xlsxwriter::{ColNum, Workbook};

use crate::config::ReportConfig;
use crate::model::MetricTable;
use crate::opener::{Launcher, SystemLauncher};

use super::layout::{GridLayout, Placement, TableExtent};
use super::widths::ColumnWidths;
use super::writer::{add_table, TableStyles};

/// What an export wrote and where
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Saved file
    pub path: PathBuf,
    /// Title cell of each table, in input order
    pub placements: Vec<Placement>,
    /// Cells occupied by each table, in input order
    pub extents: Vec<TableExtent>,
    /// Widths set by the resize pass (identifier columns are absent)
    pub column_widths: BTreeMap<ColNum, f64>,
    /// Whether the viewer was launched
    pub opened: bool,
}

/// Lays out metric tables on one sheet, saves the workbook and opens it
pub struct ReportExporter {
    config: ReportConfig,
    launcher: Box<dyn Launcher>,
}

impl ReportExporter {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            launcher: Box::new(SystemLauncher),
        }
    }

    /// Replace the viewer launcher
    pub fn with_launcher(mut self, launcher: Box<dyn Launcher>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Build the workbook in memory without saving it
    pub fn build(&self, tables: &[MetricTable]) -> Result<(Workbook, ExportSummary)> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(&self.config.sheet_name)
            .with_context(|| format!("Invalid sheet name: {}", self.config.sheet_name))?;

        let styles = TableStyles::from_config(&self.config);
        let mut cursor = GridLayout::from(&self.config).cursor();
        let mut widths = ColumnWidths::new(self.config.width_padding);
        let mut placements = Vec::with_capacity(tables.len());
        let mut extents = Vec::with_capacity(tables.len());

        for table in tables {
            let at = cursor.position()?;
            let extent = add_table(sheet, table, at.row, at.col, &styles)
                .with_context(|| format!("Failed to add table `{}`", table.title()))?;
            log::debug!(
                "Placed `{}` at row {} col {} ({}x{})",
                table.title(),
                at.row,
                at.col,
                extent.width,
                extent.height
            );

            widths.observe_table(table, at);
            widths.mark_identifier(at.col);
            cursor.advance(extent);
            placements.push(at);
            extents.push(extent);
        }

        let column_widths = widths.apply(sheet)?;

        let summary = ExportSummary {
            path: self.config.output_file(),
            placements,
            extents,
            column_widths,
            opened: false,
        };
        Ok((workbook, summary))
    }

    /// Write the report to disk and, if configured, open it
    pub fn export(&self, tables: &[MetricTable]) -> Result<ExportSummary> {
        let (mut workbook, mut summary) = self.build(tables)?;

        workbook
            .save(&summary.path)
            .with_context(|| format!("Failed to save report: {}", summary.path.display()))?;
        log::info!(
            "Exported {} table(s) to {}",
            tables.len(),
            summary.path.display()
        );

        if self.config.open_after_export {
            self.launcher.launch(&summary.path)?;
            summary.opened = true;
        }

        Ok(summary)
    }
}

/// Export `tables` with the system viewer
pub fn export_metrics(tables: &[MetricTable], config: &ReportConfig) -> Result<ExportSummary> {
    ReportExporter::new(config.clone()).export(tables)
}
