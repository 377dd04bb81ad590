//! Store location and fixed storage keys

use std::path::{Path, PathBuf};

use crate::error::{OpsdeckError, Result};

/// Default store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".opsdeck";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Storage key for the dashboard state (metrics + collections)
pub const STATE_FILE: &str = "state.json";

/// Storage key for the query history
pub const HISTORY_FILE: &str = "history.json";

/// Discover a store by walking up from the given root directory
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(OpsdeckError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discovery_walks_up_to_a_parent_store() {
        let dir = tempdir().unwrap();
        let store = dir.path().join(DEFAULT_STORE_DIR);
        std::fs::create_dir(&store).unwrap();
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let found = discover_store(&nested).unwrap();
        assert_eq!(found, store);
    }

    #[test]
    fn discovery_fails_cleanly_without_a_store() {
        let dir = tempdir().unwrap();
        let err = discover_store(dir.path()).unwrap_err();
        assert!(matches!(err, OpsdeckError::StoreNotFound { .. }));
    }
}
