use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pkgnav_core::finder::find_manifest;
use pkgnav_core::workspace::{RootSet, WorkspaceFolder, WorkspaceResolver};

fn write_manifest(dir: &Path, name: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join("package.json");
    fs::write(
        &path,
        format!(r#"{{"name": "{}", "version": "1.0.0"}}"#, name),
    )
    .unwrap();
    path
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn single_root(root: &Path) -> RootSet {
    RootSet::new(vec![root.to_path_buf()]).unwrap()
}

fn deep_chain(root: &Path, depth: usize) -> PathBuf {
    let mut dir = root.to_path_buf();
    for i in 1..=depth {
        dir.push(format!("d{}", i));
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

struct FixedFolder(WorkspaceFolder);

impl WorkspaceResolver for FixedFolder {
    fn resolve(&self, _file: &Path) -> Option<WorkspaceFolder> {
        Some(self.0.clone())
    }
}

#[test]
fn test_find_in_same_directory() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    let app = ws.join("app");
    let manifest = write_manifest(&app, "app");
    let file = app.join("index.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), Some(manifest));
}

#[test]
fn test_find_walks_up_to_workspace_root() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    let manifest = write_manifest(&ws, "ws");
    let file = ws.join("src").join("components").join("button.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), Some(manifest));
}

#[test]
fn test_nearest_manifest_wins() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("monorepo");
    write_manifest(&ws, "monorepo");
    let app = ws.join("packages").join("app");
    let inner = write_manifest(&app, "@monorepo/app");
    let file = app.join("src").join("main.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), Some(inner));
}

#[test]
fn test_sibling_manifest_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    write_manifest(&ws.join("packages").join("lib"), "lib");
    let file = ws.join("packages").join("app").join("index.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), None);
}

#[test]
fn test_no_active_file() {
    let temp_dir = TempDir::new().unwrap();
    let roots = single_root(temp_dir.path());

    assert_eq!(find_manifest(None, &roots), None);
}

#[test]
fn test_file_outside_every_root() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    write_manifest(&ws, "ws");
    let file = temp_dir.path().join("elsewhere").join("notes.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), None);
}

#[test]
fn test_empty_root_set() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("index.js");
    touch(&file);

    assert_eq!(find_manifest(Some(&file), &RootSet::empty()), None);
}

#[test]
fn test_workspace_without_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    let file = ws.join("src").join("app.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), None);
}

#[test]
fn test_manifest_above_workspace_root_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), "outer");
    let ws = temp_dir.path().join("ws");
    let file = ws.join("src").join("app.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), None);
}

#[test]
fn test_active_file_is_the_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    let manifest = write_manifest(&ws.join("app"), "app");

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&manifest), &roots), Some(manifest));
}

#[test]
fn test_resolver_folder_not_containing_file() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    write_manifest(&ws, "ws");
    let file = temp_dir.path().join("other").join("index.js");
    touch(&file);

    // The folder claims the file but its root does not contain it, so the
    // walk must stop before the first probe.
    let resolver = FixedFolder(WorkspaceFolder::new(&ws));
    assert_eq!(find_manifest(Some(&file), &resolver), None);
}

#[test]
fn test_probe_cap_reaches_depth_twenty_one() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    // Manifest 20 directories above the file's directory: the 21st probe.
    let manifest = write_manifest(&deep_chain(&ws, 10), "deep");
    let file = deep_chain(&ws, 30).join("leaf.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), Some(manifest));
}

#[test]
fn test_probe_cap_stops_at_depth_twenty_two() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    // One directory further than the cap allows: never probed.
    write_manifest(&deep_chain(&ws, 9), "too-deep");
    let file = deep_chain(&ws, 30).join("leaf.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), None);
}

#[test]
fn test_directory_named_package_json_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    let manifest = write_manifest(&ws, "ws");
    let app = ws.join("app");
    fs::create_dir_all(app.join("package.json")).unwrap();
    let file = app.join("index.js");
    touch(&file);

    let roots = single_root(&ws);
    assert_eq!(find_manifest(Some(&file), &roots), Some(manifest));
}

#[test]
fn test_search_is_repeatable() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().join("ws");
    write_manifest(&ws, "ws");
    let file = ws.join("src").join("app.js");
    touch(&file);

    let roots = single_root(&ws);
    let first = find_manifest(Some(&file), &roots);
    let second = find_manifest(Some(&file), &roots);
    assert!(first.is_some());
    assert_eq!(first, second);
}
