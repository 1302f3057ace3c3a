use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const MANIFEST_FILE: &str = ".dsakit.json";

/// Marker file written at the repository root. Its presence is how the
/// runner knows it was invoked from the right directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct RepoManifest {
    pub version: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub fn load(root: &Path) -> Result<RepoManifest, String> {
    let path = root.join(MANIFEST_FILE);
    if !path.exists() {
        return Err(format!(
            "No {} found. Run this from the practice repository root (dsakit new creates it).",
            MANIFEST_FILE
        ));
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", MANIFEST_FILE, e))?;

    serde_json::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", MANIFEST_FILE, e))
}

pub fn save(root: &Path, manifest: &RepoManifest) -> Result<(), String> {
    let path = root.join(MANIFEST_FILE);
    let content = serde_json::to_string_pretty(manifest)
        .map_err(|e| format!("Failed to serialize {}: {}", MANIFEST_FILE, e))?;

    fs::write(&path, content).map_err(|e| format!("Failed to write {}: {}", MANIFEST_FILE, e))
}

pub fn ensure(root: &Path) -> Result<RepoManifest, String> {
    if root.join(MANIFEST_FILE).exists() {
        return load(root);
    }

    let manifest = RepoManifest {
        version: 1,
        created_at: Some(chrono::Local::now().to_rfc3339()),
    };
    save(root, &manifest)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(err.contains(MANIFEST_FILE));
        assert!(err.contains("repository root"));
    }

    #[test]
    fn test_ensure_creates_then_loads() {
        let dir = TempDir::new().unwrap();
        let created = ensure(dir.path()).unwrap();
        assert_eq!(created.version, 1);
        assert!(created.created_at.is_some());

        let loaded = ensure(dir.path()).unwrap();
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.created_at, created.created_at);
    }
}
