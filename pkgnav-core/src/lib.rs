//! Core library for nearest-manifest navigation in JavaScript workspaces.

pub mod diagnostics;
pub mod error;
pub mod finder;
pub mod manifest;
pub mod workspace;

pub use diagnostics::explain_failure;
pub use error::{Error, Result};
pub use finder::{find_manifest, MANIFEST_FILENAME};
pub use manifest::read_package_name;
pub use workspace::{
    discover_roots, repo_root, RootSet, WorkspaceFolder, WorkspaceResolver, WORKSPACE_FILENAME,
};
