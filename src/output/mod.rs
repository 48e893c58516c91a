//! Terminal output: table previews and export status

mod preview;
mod status;

pub use preview::{render_preview, render_table};
pub use status::write_export_status;
