//! Launching the saved report in the desktop's default viewer

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Something that can show a saved report to the user
pub trait Launcher {
    fn launch(&self, path: &Path) -> Result<()>;
}

/// Opens files with the platform's default application
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        open_in_viewer(path)
    }
}

/// Spawn the default handler for `path` without waiting for it
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = opener_command(path);
    log::info!("Opening {} with {:?}", path.display(), command.get_program());

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to launch a viewer for {}", path.display()))?;

    Ok(())
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("").arg(path);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
