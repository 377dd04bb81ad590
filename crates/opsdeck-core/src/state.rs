//! Whole-dashboard state: the metrics store plus the sample collections
//!
//! Per-field serde defaults give merge semantics on load: a state file from
//! an older store fills in whatever it lacks from the defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metrics::MetricsStore;
use crate::model::{sample_employees, sample_orders, sample_waves, Employee, Order, Wave};

/// Everything the dashboard persists under the state storage key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardState {
    pub metrics: MetricsStore,
    pub employees: Vec<Employee>,
    pub orders: Vec<Order>,
    pub waves: Vec<Wave>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            metrics: MetricsStore::new(),
            employees: sample_employees(),
            orders: sample_orders(),
            waves: sample_waves(),
        }
    }
}

impl DashboardState {
    /// Decode a previously persisted state document
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Persistable encoding of the full state
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips() {
        let state = DashboardState::default();
        let bytes = state.to_bytes().unwrap();
        let restored = DashboardState::from_bytes(&bytes).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn metrics_only_document_keeps_sample_collections() {
        let state =
            DashboardState::from_bytes(br#"{"metrics":{"picking_tasks":3}}"#).unwrap();
        assert_eq!(state.metrics.snapshot().picking_tasks, 3);
        assert_eq!(state.employees, sample_employees());
        assert_eq!(state.waves.len(), 3);
    }

    #[test]
    fn bad_status_in_collections_fails_decode() {
        let doc = br#"{"orders":[{"id":"ORD-9","customer":"X","status":"teleported","items":1,"priority":"high"}]}"#;
        assert!(DashboardState::from_bytes(doc).is_err());
    }
}
