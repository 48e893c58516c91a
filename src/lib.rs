//! metricsheet - Excel reports for model evaluation metrics
//!
//! Lays out tables of precision, recall and F1 scores in a grid on a single
//! styled worksheet, saves the workbook and opens it in the default viewer.

pub mod config;
pub mod model;
pub mod opener;
pub mod output;
pub mod parser;
pub mod report;

pub use config::ReportConfig;
pub use model::{CellValue, MetricTable, ModelScores};
pub use report::{export_metrics, ExportSummary, ReportExporter};
