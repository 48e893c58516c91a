//! Excel report generation

mod export;
mod layout;
mod widths;
mod writer;

pub use export::{export_metrics, ExportSummary, ReportExporter};
pub use layout::{GridCursor, GridLayout, Placement, TableExtent};
pub use widths::ColumnWidths;
pub use writer::{add_table, TableStyles};
