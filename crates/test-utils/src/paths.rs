//! Path utilities for locating test data files.

use std::path::PathBuf;

/// Returns the workspace root directory.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Searches for a scene or dataset file.
///
/// `TEST_DATA_DIR` (if set) is checked before `testdata/` at the workspace
/// root.
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(test_data_dir) = std::env::var("TEST_DATA_DIR") {
        candidates.push(PathBuf::from(test_data_dir).join(name));
    }
    candidates.push(workspace_root().join("testdata").join(name));

    candidates.into_iter().find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_bundled_scene_is_found() {
        let path = find_test_file("sla_chart_scene.json").unwrap();
        assert!(path.ends_with("testdata/sla_chart_scene.json"));
    }

    #[test]
    fn test_missing_file_is_none() {
        assert!(find_test_file("definitely_not_here_0d7f.json").is_none());
    }
}
