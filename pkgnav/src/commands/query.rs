//! Commands that print where the nearest manifest is and what it declares.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use pkgnav_core::read_package_name;

use crate::formatting::{print_section_header, print_summary_box, print_warning, SectionStyle};

use super::locate;

pub fn cmd_locate(
    roots: &[PathBuf],
    file: Option<PathBuf>,
    relative: bool,
    json: bool,
) -> Result<()> {
    let located = locate(roots, file)?;
    let shown: &Path = if relative {
        located
            .folder
            .relativize(&located.manifest)
            .unwrap_or(&located.manifest)
    } else {
        &located.manifest
    };

    if json {
        let payload = serde_json::json!({
            "manifest": shown.display().to_string(),
            "workspace": located.folder.name,
            "root": located.folder.root.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", shown.display());
    }

    Ok(())
}

pub fn cmd_name(roots: &[PathBuf], file: Option<PathBuf>, json: bool) -> Result<()> {
    let located = locate(roots, file)?;
    let name = read_package_name(&located.manifest).ok_or_else(|| {
        anyhow!(
            "No package name found in {}. The file may be missing a \"name\" \
             field or be corrupted.",
            located.manifest.display()
        )
    })?;

    if json {
        let payload = serde_json::json!({
            "name": name,
            "manifest": located.manifest.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", name);
    }

    Ok(())
}

pub fn cmd_dir(roots: &[PathBuf], file: Option<PathBuf>, json: bool) -> Result<()> {
    let located = locate(roots, file)?;
    let dir = located
        .manifest
        .parent()
        .context("Manifest has no parent directory")?;

    if json {
        let payload = serde_json::json!({
            "directory": dir.display().to_string(),
            "manifest": located.manifest.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", dir.display());
    }

    Ok(())
}

pub fn cmd_info(roots: &[PathBuf], file: Option<PathBuf>, json: bool) -> Result<()> {
    let located = locate(roots, file)?;
    let name = read_package_name(&located.manifest);
    let dir = located
        .manifest
        .parent()
        .context("Manifest has no parent directory")?;
    let relative = located.folder.relativize(&located.manifest);

    if json {
        let payload = serde_json::json!({
            "package": name,
            "manifest": located.manifest.display().to_string(),
            "directory": dir.display().to_string(),
            "relative": relative.map(|p| p.display().to_string()),
            "workspace": {
                "name": located.folder.name,
                "root": located.folder.root.display().to_string(),
            },
            "file": located.file.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_section_header("Nearest Package", SectionStyle::Primary);
    let manifest_line = located.manifest.display().to_string();
    let dir_line = dir.display().to_string();
    let root_line = located.folder.root.display().to_string();
    let relative_line = relative.map(|p| p.display().to_string());
    let mut rows: Vec<(&str, &str)> = vec![
        ("Manifest", &manifest_line),
        ("Directory", &dir_line),
        ("Workspace", &located.folder.name),
        ("Root", &root_line),
    ];
    if let Some(rel) = relative_line.as_deref() {
        rows.push(("Relative", rel));
    }
    print_summary_box(name.as_deref().unwrap_or("(unnamed)"), &rows);
    if name.is_none() {
        print_warning("The manifest has no \"name\" field");
    }
    println!();

    Ok(())
}
