//! Commands that hand the located package over to another program.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};

use pkgnav_core::read_package_name;

use crate::formatting::{print_info, print_key_value};

use super::locate;

pub fn cmd_open(roots: &[PathBuf], file: Option<PathBuf>) -> Result<()> {
    let located = locate(roots, file)?;
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string());

    tracing::debug!("Opening {} with {}", located.manifest.display(), editor);
    let status = Command::new(&editor)
        .arg(&located.manifest)
        .status()
        .with_context(|| format!("Failed to launch editor: {}", editor))?;

    if !status.success() {
        bail!("Editor exited with {}", status);
    }
    Ok(())
}

pub fn cmd_shell(roots: &[PathBuf], file: Option<PathBuf>) -> Result<()> {
    let located = locate(roots, file)?;
    let dir = located
        .manifest
        .parent()
        .context("Manifest has no parent directory")?;
    let name = read_package_name(&located.manifest)
        .or_else(|| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "package".to_string());
    let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());

    print_key_value("Package", &name);
    print_key_value("Directory", &dir.display().to_string());
    print_info("Type \"exit\" to return");
    println!();

    let status = Command::new(&shell)
        .current_dir(dir)
        .env("PKGNAV_PACKAGE", &name)
        .status()
        .with_context(|| format!("Failed to launch shell: {}", shell))?;

    // An interactive shell ends however its last command ended.
    if let Some(code) = status.code() {
        if code != 0 {
            tracing::debug!("Shell exited with {}", status);
            std::process::exit(code);
        }
    }
    Ok(())
}
