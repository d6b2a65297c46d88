//! Upward search for the nearest package manifest.

use std::path::{Path, PathBuf};

use crate::workspace::WorkspaceResolver;

/// File name probed at every level of the walk.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Upper bound on directories probed in one search. Terminates the walk
/// even when a resolver hands back a boundary the probe path never leaves.
const MAX_PROBES: usize = 20;

/// Finds the nearest `package.json` for `active_file`, never looking above
/// the workspace root the resolver assigns to that file.
///
/// The walk starts in the file's own directory and moves upward one level
/// at a time, so the first hit is the nearest ancestor manifest. A file
/// that itself is a `package.json` matches at depth zero. `None` covers
/// every failure: no active file, a file outside every workspace folder,
/// a workspace without a manifest on the ancestor chain, or a walk cut off
/// by [`MAX_PROBES`]. Callers that need to tell these apart re-derive the
/// folder lookup and ask [`crate::diagnostics::explain_failure`].
///
/// Existence checks are the only filesystem access; nothing is created,
/// modified, or cached between calls.
pub fn find_manifest(
    active_file: Option<&Path>,
    resolver: &dyn WorkspaceResolver,
) -> Option<PathBuf> {
    let file = match active_file {
        Some(file) => file,
        None => {
            tracing::debug!("No active file to search from");
            return None;
        }
    };

    let folder = match resolver.resolve(file) {
        Some(folder) => folder,
        None => {
            tracing::debug!("{} is outside every workspace folder", file.display());
            return None;
        }
    };

    let mut probe = file.parent()?.to_path_buf();
    tracing::debug!(
        "Searching for {} from {} up to {} ({})",
        MANIFEST_FILENAME,
        probe.display(),
        folder.root.display(),
        folder.name
    );

    let mut probes = 0;
    while probe.starts_with(&folder.root) {
        probes += 1;
        let candidate = probe.join(MANIFEST_FILENAME);
        tracing::trace!("Probe {}: {}", probes, candidate.display());

        if candidate.is_file() {
            tracing::debug!("Found manifest: {}", candidate.display());
            return Some(candidate);
        }

        if !probe.pop() {
            tracing::debug!("Reached the filesystem root, stopping");
            break;
        }

        if probes > MAX_PROBES {
            tracing::warn!(
                "Stopping after {} probes without leaving {}",
                probes,
                folder.root.display()
            );
            break;
        }
    }

    tracing::debug!("No {} found in workspace {}", MANIFEST_FILENAME, folder.name);
    None
}
