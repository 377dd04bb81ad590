//! Store management for opsdeck
//!
//! The store is the directory holding persisted dashboard state.
//! Default location: `.opsdeck/` next to (or above) the working directory.
//! Two fixed storage keys live inside it: `state.json` and `history.json`.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::error::{OpsdeckError, Result};
use crate::history::QueryLog;
use crate::state::DashboardState;
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR, HISTORY_FILE, STATE_FILE};

/// The opsdeck store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(OpsdeckError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            // Missing config is not an error; defaults are sensible
            StoreConfig::default()
        };

        Ok(Store {
            root: path.to_path_buf(),
            config,
        })
    }

    /// Initialize a new store under the given project root
    pub fn init(project_root: &Path) -> Result<Self> {
        let store_path = project_root.join(DEFAULT_STORE_DIR);
        if store_path.exists() {
            return Err(OpsdeckError::already_exists(
                "store",
                store_path.display(),
            ));
        }

        fs::create_dir_all(&store_path)?;

        let config = StoreConfig::default();
        config.save(&store_path.join(CONFIG_FILE))?;

        let store = Store {
            root: store_path,
            config,
        };
        store.save_state(&DashboardState::default())?;
        store.save_history(&QueryLog::new())?;

        tracing::info!(path = %store.root.display(), "store_initialized");
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Load the dashboard state, falling back to defaults when the state
    /// file is missing or malformed. Malformed state is a recoverable
    /// condition, not an error: the dashboard starts over from defaults.
    pub fn load_state(&self) -> DashboardState {
        let path = self.root.join(STATE_FILE);
        match fs::read(&path) {
            Ok(bytes) => match DashboardState::from_bytes(&bytes) {
                Ok(state) => state,
                Err(e) => {
                    tracing::debug!(error = %e, "malformed state file, using defaults");
                    DashboardState::default()
                }
            },
            Err(e) => {
                tracing::debug!(error = %e, "no saved state, using defaults");
                DashboardState::default()
            }
        }
    }

    /// Write the dashboard state under its storage key
    pub fn save_state(&self, state: &DashboardState) -> Result<()> {
        fs::write(self.root.join(STATE_FILE), state.to_bytes()?)?;
        Ok(())
    }

    /// Load the query history, falling back to an empty log
    pub fn load_history(&self) -> QueryLog {
        let path = self.root.join(HISTORY_FILE);
        match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(log) => log,
                Err(e) => {
                    tracing::debug!(error = %e, "malformed history file, starting empty");
                    QueryLog::new()
                }
            },
            Err(e) => {
                tracing::debug!(error = %e, "no saved history, starting empty");
                QueryLog::new()
            }
        }
    }

    /// Write the query history under its storage key
    pub fn save_history(&self, history: &QueryLog) -> Result<()> {
        fs::write(
            self.root.join(HISTORY_FILE),
            serde_json::to_vec_pretty(history)?,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::QueryLogEntry;
    use crate::metrics::Metric;
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn init_creates_config_state_and_history() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path()).unwrap();

        assert!(store.root().join(CONFIG_FILE).exists());
        assert!(store.root().join(STATE_FILE).exists());
        assert!(store.root().join(HISTORY_FILE).exists());
    }

    #[test]
    fn init_refuses_an_existing_store() {
        let dir = tempdir().unwrap();
        Store::init(dir.path()).unwrap();
        let err = Store::init(dir.path()).unwrap_err();
        assert!(matches!(err, OpsdeckError::AlreadyExists { .. }));
    }

    #[test]
    fn state_round_trips_through_the_store() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path()).unwrap();

        let mut state = store.load_state();
        state.metrics.apply_adjustment(Metric::PickingTasks, 5.0);
        store.save_state(&state).unwrap();

        let reloaded = store.load_state();
        assert_eq!(reloaded.metrics.snapshot().picking_tasks, 20);
    }

    #[test]
    fn garbage_state_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path()).unwrap();
        fs::write(store.root().join(STATE_FILE), b"{]").unwrap();

        let state = store.load_state();
        assert_eq!(state, DashboardState::default());
    }

    #[test]
    fn history_survives_a_round_trip() {
        let dir = tempdir().unwrap();
        let store = Store::init(dir.path()).unwrap();

        let mut history = store.load_history();
        history.record(QueryLogEntry {
            query: "wave".to_string(),
            response: "Wave Completion Status:".to_string(),
            timestamp: Utc::now(),
        });
        store.save_history(&history).unwrap();

        let reloaded = store.load_history();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0].query, "wave");
    }

    #[test]
    fn discover_finds_store_from_a_subdirectory() {
        let dir = tempdir().unwrap();
        Store::init(dir.path()).unwrap();
        let nested = dir.path().join("warehouse/floor-2");
        fs::create_dir_all(&nested).unwrap();

        let store = Store::discover(&nested).unwrap();
        assert_eq!(store.root(), dir.path().join(DEFAULT_STORE_DIR));
    }
}
