//! User-facing explanations for a failed manifest search.

use std::path::Path;

use crate::workspace::WorkspaceFolder;

/// Explains why a search found nothing, as a sentence fit for direct
/// display.
///
/// Pure: the output depends only on the two arguments. Callers pass the
/// same folder lookup the failed search used so that the message and the
/// search agree on the boundary state. Three cases:
///
/// - no file at all;
/// - a file that no workspace folder contains (named by basename);
/// - a file whose workspace turned up no manifest (file and workspace
///   both named).
pub fn explain_failure(active_file: Option<&Path>, folder: Option<&WorkspaceFolder>) -> String {
    let file = match active_file {
        Some(file) => file,
        None => {
            return "No file given. Pass a file path to locate its package.json.".to_string();
        }
    };

    let file_name = basename(file);

    match folder {
        None => format!(
            "The file \"{}\" is not part of any workspace folder. \
             Add one with --root or run inside a repository to locate its package.json.",
            file_name
        ),
        Some(folder) => format!(
            "No package.json found for \"{}\" in workspace \"{}\". \
             Make sure the project has a package.json in the file's directory \
             or any parent directory within the workspace.",
            file_name, folder.name
        ),
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}
