//! Data model for metric tables

mod cell;
mod scores;
mod table;

pub use cell::CellValue;
pub use scores::ModelScores;
pub use table::{MetricTable, MetricTableBuilder, TableError, DEFAULT_TITLE_COLUMN};
