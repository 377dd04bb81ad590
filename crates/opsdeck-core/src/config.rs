//! Store configuration for opsdeck
//!
//! Configuration lives in `.opsdeck/config.toml`. Missing files and missing
//! fields fall back to defaults so older stores keep working.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OpsdeckError, Result};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store format version
    pub version: u32,
    /// Simulation settings
    pub simulation: SimulationConfig,
    /// Operational targets used by insights and response templates
    pub targets: Targets,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            simulation: SimulationConfig::default(),
            targets: Targets::default(),
        }
    }
}

/// Settings for the periodic simulation tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds between ticks in `opsdeck watch`
    pub interval_secs: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { interval_secs: 5 }
    }
}

/// Operational targets. Defaults match the thresholds the dashboard was
/// launched with; stores may tune them per site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Targets {
    /// Minimum acceptable SLA compliance, percent
    pub sla_compliance: f64,
    /// Minimum acceptable average employee efficiency, percent
    pub employee_performance: f64,
    /// Target stock replenishment time, hours
    pub stock_replenishment_hours: u32,
    /// Minimum quality audit coverage, percent
    pub quality_audit_rate: f64,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            sla_compliance: 95.0,
            employee_performance: 85.0,
            stock_replenishment_hours: 2,
            quality_audit_rate: 5.0,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OpsdeckError::store_operation("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_current_version() {
        let config = StoreConfig::default();
        assert_eq!(config.version, STORE_FORMAT_VERSION);
        assert_eq!(config.simulation.interval_secs, 5);
        assert_eq!(config.targets.sla_compliance, 95.0);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = StoreConfig::default();
        config.targets.sla_compliance = 97.5;
        config.simulation.interval_secs = 30;
        config.save(&path).unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "version = 1\n[targets]\nsla_compliance = 99.0\n").unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded.targets.sla_compliance, 99.0);
        assert_eq!(loaded.targets.employee_performance, 85.0);
        assert_eq!(loaded.simulation.interval_secs, 5);
    }
}
