//! Coloured status line printed after an export

use std::io::Write;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::report::ExportSummary;

/// Print the saved file name and a success line
pub fn write_export_status(summary: &ExportSummary, out: &mut dyn WriteColor) -> Result<()> {
    writeln!(out, "File: {}", summary.path.display())?;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "Report exported successfully")?;
    out.reset()?;

    let placed = summary.placements.len();
    writeln!(
        out,
        " ({} table{}{})",
        placed,
        if placed == 1 { "" } else { "s" },
        if summary.opened { ", opened in viewer" } else { "" }
    )?;
    Ok(())
}
