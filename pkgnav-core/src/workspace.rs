//! Workspace folders and the resolver capability consumed by the finder.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// File name of the optional workspace definition.
pub const WORKSPACE_FILENAME: &str = "pkgnav.toml";

/// A named workspace folder acting as the upper boundary of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    pub name: String,
    pub root: PathBuf,
}

impl WorkspaceFolder {
    /// Creates a folder whose display name is the root's final component.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        Self { name, root }
    }

    /// Creates a folder with an explicit display name.
    pub fn named(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Component-wise containment test: `path` is the root itself or a
    /// descendant of it. `/ws-app` is not contained in `/ws`.
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.root)
    }

    /// Strips the root prefix, yielding the workspace-relative path.
    pub fn relativize<'a>(&self, path: &'a Path) -> Option<&'a Path> {
        path.strip_prefix(&self.root).ok()
    }
}

/// Maps a file to its owning workspace folder.
///
/// The finder treats this as an opaque capability; hosts decide where
/// folders come from (editor folder registries, explicit flags, repository
/// detection).
pub trait WorkspaceResolver {
    fn resolve(&self, file: &Path) -> Option<WorkspaceFolder>;
}

/// Resolver backed by a fixed set of root directories.
///
/// Roots are compared lexically, so callers should pass absolute paths.
/// When nested roots both contain a file, the deepest one wins, matching
/// multi-root editor semantics.
#[derive(Debug, Clone, Default)]
pub struct RootSet {
    roots: Vec<PathBuf>,
}

impl RootSet {
    /// Builds a set from root directories, rejecting paths that are not
    /// directories on disk.
    pub fn new(roots: Vec<PathBuf>) -> Result<Self> {
        for root in &roots {
            if !root.is_dir() {
                return Err(Error::RootNotADirectory(root.clone()));
            }
        }
        Ok(Self { roots })
    }

    /// A set that resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl WorkspaceResolver for RootSet {
    fn resolve(&self, file: &Path) -> Option<WorkspaceFolder> {
        self.roots
            .iter()
            .filter(|root| file.starts_with(root))
            .max_by_key(|root| root.components().count())
            .map(WorkspaceFolder::new)
    }
}

#[derive(Debug, Deserialize)]
struct WorkspaceFile {
    #[serde(default)]
    workspace: WorkspaceSection,
}

#[derive(Debug, Default, Deserialize)]
struct WorkspaceSection {
    #[serde(default)]
    roots: Vec<PathBuf>,
}

/// Searches upward from `start_dir` for a `pkgnav.toml` and returns its
/// root list, with relative entries resolved against the file's directory.
///
/// The walk checks each ancestor in turn and stops ascending after a
/// directory that contains `.git` (that directory itself is still checked),
/// or at the filesystem root. `Ok(None)` means no workspace file exists on
/// the chain; parse and read failures are surfaced, not swallowed.
pub fn discover_roots(start_dir: &Path) -> Result<Option<Vec<PathBuf>>> {
    let mut current = start_dir;

    loop {
        let candidate = current.join(WORKSPACE_FILENAME);
        if candidate.is_file() {
            let content = fs::read_to_string(&candidate)?;
            let parsed: WorkspaceFile = toml::from_str(&content)?;
            let roots = parsed
                .workspace
                .roots
                .into_iter()
                .map(|root| {
                    if root.is_absolute() {
                        root
                    } else {
                        current.join(root)
                    }
                })
                .collect();
            tracing::debug!("Using workspace file: {}", candidate.display());
            return Ok(Some(roots));
        }

        if current.join(".git").exists() {
            break;
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    Ok(None)
}

/// Finds the enclosing repository root: the nearest ancestor of `start_dir`
/// containing a `.git` entry.
pub fn repo_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}
