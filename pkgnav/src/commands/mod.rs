//! Command implementations for the CLI.

mod launch;
mod query;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use pkgnav_core::workspace::{
    discover_roots, repo_root, RootSet, WorkspaceFolder, WorkspaceResolver,
};
use pkgnav_core::{explain_failure, find_manifest};

pub use launch::{cmd_open, cmd_shell};
pub use query::{cmd_dir, cmd_info, cmd_locate, cmd_name};

/// A successful search: the manifest, the workspace that bounded the walk,
/// and the (absolutized) file the search started from.
struct Located {
    manifest: PathBuf,
    folder: WorkspaceFolder,
    file: PathBuf,
}

/// Builds the workspace roots for this invocation. Explicit `--root` flags
/// win; otherwise a `pkgnav.toml` found above the working directory supplies
/// them; otherwise the enclosing repository is the single root.
fn build_resolver(roots: &[PathBuf]) -> Result<RootSet> {
    if !roots.is_empty() {
        let absolute = roots
            .iter()
            .map(|root| absolutize(root))
            .collect::<Result<Vec<_>>>()?;
        return Ok(RootSet::new(absolute)?);
    }

    let cwd = std::env::current_dir()?;
    if let Some(configured) = discover_roots(&cwd)? {
        return Ok(RootSet::new(configured)?);
    }
    if let Some(repo) = repo_root(&cwd) {
        tracing::debug!("Using repository root: {}", repo.display());
        return Ok(RootSet::new(vec![repo])?);
    }

    tracing::debug!("No workspace roots configured");
    Ok(RootSet::empty())
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Runs the search and fails with a displayable explanation when it finds
/// nothing. The folder is resolved here as well so the explanation agrees
/// with the walk's boundary.
fn locate(roots: &[PathBuf], file: Option<PathBuf>) -> Result<Located> {
    let resolver = build_resolver(roots)?;
    let file = match file {
        Some(path) => Some(absolutize(&path)?),
        None => None,
    };
    let folder = file.as_deref().and_then(|path| resolver.resolve(path));

    if let (Some(file_path), Some(folder_ref)) = (file.as_deref(), folder.as_ref()) {
        if let Some(manifest) = find_manifest(Some(file_path), &resolver) {
            return Ok(Located {
                manifest,
                folder: folder_ref.clone(),
                file: file_path.to_path_buf(),
            });
        }
    }

    bail!(explain_failure(file.as_deref(), folder.as_ref()))
}
