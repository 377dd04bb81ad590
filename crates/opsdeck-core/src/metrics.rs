//! Metrics state and simulation
//!
//! `MetricsStore` owns the canonical snapshot of operational indicators and
//! applies bounded, intermittent perturbations on each tick. Percent metrics
//! stay within their declared bounds; counts never go negative.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{OpsdeckError, Result};

/// Whether a metric is a free-running count or a bounded percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Count,
    Percent,
}

/// Every adjustable indicator on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    PickingTasks,
    OrderVolumes,
    EmployeePerformance,
    WaveTasks,
    TrainingCompleted,
    ItemVerification,
    VolumeProcessed,
    QueriesAnswered,
    PackingTotes,
    InventoryMismatch,
    SystemErrors,
    PerformanceImprovement,
    SlaCompliance,
    OperationsEfficiency,
    QualityAuditRate,
}

impl Metric {
    /// All valid metric names, as accepted on the command line
    pub const VALID_METRICS: &'static [&'static str] = &[
        "picking-tasks",
        "order-volumes",
        "employee-performance",
        "wave-tasks",
        "training-completed",
        "item-verification",
        "volume-processed",
        "queries-answered",
        "packing-totes",
        "inventory-mismatch",
        "system-errors",
        "performance-improvement",
        "sla-compliance",
        "operations-efficiency",
        "quality-audit-rate",
    ];

    pub fn kind(self) -> MetricKind {
        match self {
            Metric::PickingTasks
            | Metric::OrderVolumes
            | Metric::WaveTasks
            | Metric::TrainingCompleted
            | Metric::VolumeProcessed
            | Metric::QueriesAnswered
            | Metric::PackingTotes
            | Metric::InventoryMismatch
            | Metric::SystemErrors => MetricKind::Count,
            Metric::EmployeePerformance
            | Metric::ItemVerification
            | Metric::PerformanceImprovement
            | Metric::SlaCompliance
            | Metric::OperationsEfficiency
            | Metric::QualityAuditRate => MetricKind::Percent,
        }
    }

    /// Declared bounds for this metric. Counts are unbounded above.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            // The audit rate is operationally capped well below 100
            Metric::QualityAuditRate => (0.0, 15.0),
            _ => match self.kind() {
                MetricKind::Percent => (0.0, 100.0),
                MetricKind::Count => (0.0, f64::INFINITY),
            },
        }
    }
}

impl FromStr for Metric {
    type Err = OpsdeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "picking-tasks" => Ok(Metric::PickingTasks),
            "order-volumes" => Ok(Metric::OrderVolumes),
            "employee-performance" => Ok(Metric::EmployeePerformance),
            "wave-tasks" => Ok(Metric::WaveTasks),
            "training-completed" => Ok(Metric::TrainingCompleted),
            "item-verification" => Ok(Metric::ItemVerification),
            "volume-processed" => Ok(Metric::VolumeProcessed),
            "queries-answered" => Ok(Metric::QueriesAnswered),
            "packing-totes" => Ok(Metric::PackingTotes),
            "inventory-mismatch" => Ok(Metric::InventoryMismatch),
            "system-errors" => Ok(Metric::SystemErrors),
            "performance-improvement" => Ok(Metric::PerformanceImprovement),
            "sla-compliance" => Ok(Metric::SlaCompliance),
            "operations-efficiency" => Ok(Metric::OperationsEfficiency),
            "quality-audit-rate" => Ok(Metric::QualityAuditRate),
            other => Err(OpsdeckError::UnknownMetric(
                other.to_string(),
                Self::VALID_METRICS.join(", "),
            )),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::PickingTasks => "picking-tasks",
            Metric::OrderVolumes => "order-volumes",
            Metric::EmployeePerformance => "employee-performance",
            Metric::WaveTasks => "wave-tasks",
            Metric::TrainingCompleted => "training-completed",
            Metric::ItemVerification => "item-verification",
            Metric::VolumeProcessed => "volume-processed",
            Metric::QueriesAnswered => "queries-answered",
            Metric::PackingTotes => "packing-totes",
            Metric::InventoryMismatch => "inventory-mismatch",
            Metric::SystemErrors => "system-errors",
            Metric::PerformanceImprovement => "performance-improvement",
            Metric::SlaCompliance => "sla-compliance",
            Metric::OperationsEfficiency => "operations-efficiency",
            Metric::QualityAuditRate => "quality-audit-rate",
        };
        write!(f, "{}", name)
    }
}

/// Full current value set of tracked metrics at a point in time.
///
/// Every field carries a serde default so a partially-saved snapshot from an
/// older store merges over the defaults instead of replacing them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSnapshot {
    pub picking_tasks: u32,
    pub order_volumes: u32,
    pub employee_performance: f64,
    pub wave_tasks: u32,
    pub training_completed: u32,
    pub item_verification: f64,
    pub volume_processed: u32,
    pub queries_answered: u32,
    pub packing_totes: u32,
    pub inventory_mismatch: u32,
    pub system_errors: u32,
    pub performance_improvement: f64,
    pub sla_compliance: f64,
    pub operations_efficiency: f64,
    pub quality_audit_rate: f64,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            picking_tasks: 15,
            order_volumes: 47,
            employee_performance: 87.0,
            wave_tasks: 3,
            training_completed: 4,
            item_verification: 98.5,
            volume_processed: 1247,
            queries_answered: 0,
            packing_totes: 28,
            inventory_mismatch: 2,
            system_errors: 0,
            performance_improvement: 15.0,
            sla_compliance: 94.0,
            operations_efficiency: 82.0,
            quality_audit_rate: 5.0,
        }
    }
}

impl MetricsSnapshot {
    /// Read one metric as f64
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PickingTasks => self.picking_tasks as f64,
            Metric::OrderVolumes => self.order_volumes as f64,
            Metric::EmployeePerformance => self.employee_performance,
            Metric::WaveTasks => self.wave_tasks as f64,
            Metric::TrainingCompleted => self.training_completed as f64,
            Metric::ItemVerification => self.item_verification,
            Metric::VolumeProcessed => self.volume_processed as f64,
            Metric::QueriesAnswered => self.queries_answered as f64,
            Metric::PackingTotes => self.packing_totes as f64,
            Metric::InventoryMismatch => self.inventory_mismatch as f64,
            Metric::SystemErrors => self.system_errors as f64,
            Metric::PerformanceImprovement => self.performance_improvement,
            Metric::SlaCompliance => self.sla_compliance,
            Metric::OperationsEfficiency => self.operations_efficiency,
            Metric::QualityAuditRate => self.quality_audit_rate,
        }
    }

    fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::PickingTasks => self.picking_tasks = value as u32,
            Metric::OrderVolumes => self.order_volumes = value as u32,
            Metric::EmployeePerformance => self.employee_performance = value,
            Metric::WaveTasks => self.wave_tasks = value as u32,
            Metric::TrainingCompleted => self.training_completed = value as u32,
            Metric::ItemVerification => self.item_verification = value,
            Metric::VolumeProcessed => self.volume_processed = value as u32,
            Metric::QueriesAnswered => self.queries_answered = value as u32,
            Metric::PackingTotes => self.packing_totes = value as u32,
            Metric::InventoryMismatch => self.inventory_mismatch = value as u32,
            Metric::SystemErrors => self.system_errors = value as u32,
            Metric::PerformanceImprovement => self.performance_improvement = value,
            Metric::SlaCompliance => self.sla_compliance = value,
            Metric::OperationsEfficiency => self.operations_efficiency = value,
            Metric::QualityAuditRate => self.quality_audit_rate = value,
        }
    }
}

/// Owner of the canonical metrics snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsStore {
    snapshot: MetricsSnapshot,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live snapshot (read view)
    pub fn snapshot(&self) -> &MetricsSnapshot {
        &self.snapshot
    }

    /// Apply one simulation tick.
    ///
    /// Each metric group is perturbed intermittently: a weighted coin flip
    /// decides whether the group moves at all this tick, so updates look
    /// like noisy telemetry rather than a uniform drift.
    pub fn simulate_step<R: Rng>(&mut self, rng: &mut R) {
        self.snapshot.order_volumes += rng.gen_range(0..3);
        self.snapshot.volume_processed += rng.gen_range(0..50);

        if rng.gen_bool(0.3) {
            let delta = rng.gen_range(0..3) as i64 - 1;
            self.snapshot.picking_tasks =
                (self.snapshot.picking_tasks as i64 + delta).max(0) as u32;
        }

        if rng.gen_bool(0.1) {
            let delta: i64 = if rng.gen_bool(0.5) { 1 } else { -1 };
            self.snapshot.inventory_mismatch =
                (self.snapshot.inventory_mismatch as i64 + delta).max(0) as u32;
        }

        // Outcome metrics drift upward slowly
        if rng.gen_bool(0.2) {
            self.drift(Metric::PerformanceImprovement, 0.5);
            self.drift(Metric::SlaCompliance, 0.3);
            self.drift(Metric::OperationsEfficiency, 0.4);
        }

        tracing::trace!(
            order_volumes = self.snapshot.order_volumes,
            volume_processed = self.snapshot.volume_processed,
            "simulate_step"
        );
    }

    fn drift(&mut self, metric: Metric, delta: f64) {
        let (lo, hi) = metric.bounds();
        // Round to one decimal so repeated drift doesn't accumulate float fuzz
        let value = ((self.snapshot.get(metric) + delta) * 10.0).round() / 10.0;
        self.snapshot.set(metric, value.clamp(lo, hi));
    }

    /// Apply a manual adjustment, clamped to the metric's declared bounds.
    /// Returns the new value.
    pub fn apply_adjustment(&mut self, metric: Metric, delta: f64) -> f64 {
        let (lo, hi) = metric.bounds();
        let value = (self.snapshot.get(metric) + delta).clamp(lo, hi);
        self.snapshot.set(metric, value);
        tracing::debug!(metric = %metric, value, "apply_adjustment");
        value
    }

    /// Replace current state from a previously persisted snapshot.
    ///
    /// Missing fields keep their defaults and unknown fields are ignored, so
    /// snapshots written by older or newer versions still load.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        let snapshot: MetricsSnapshot = serde_json::from_slice(bytes)?;
        self.snapshot = snapshot;
        Ok(())
    }

    /// Persistable encoding of the current snapshot
    pub fn serialize(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.snapshot)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn percent_metrics() -> &'static [Metric] {
        &[
            Metric::EmployeePerformance,
            Metric::ItemVerification,
            Metric::PerformanceImprovement,
            Metric::SlaCompliance,
            Metric::OperationsEfficiency,
            Metric::QualityAuditRate,
        ]
    }

    #[test]
    fn defaults_match_launch_values() {
        let store = MetricsStore::new();
        assert_eq!(store.snapshot().picking_tasks, 15);
        assert_eq!(store.snapshot().order_volumes, 47);
        assert_eq!(store.snapshot().sla_compliance, 94.0);
        assert_eq!(store.snapshot().quality_audit_rate, 5.0);
    }

    #[test]
    fn simulation_keeps_invariants_over_many_ticks() {
        let mut store = MetricsStore::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            store.simulate_step(&mut rng);
        }

        for &metric in percent_metrics() {
            let (lo, hi) = metric.bounds();
            let value = store.snapshot().get(metric);
            assert!(
                (lo..=hi).contains(&value),
                "{} = {} escaped [{}, {}]",
                metric,
                value,
                lo,
                hi
            );
        }
    }

    #[test]
    fn adjustment_clamps_to_declared_bounds() {
        let mut store = MetricsStore::new();

        assert_eq!(store.apply_adjustment(Metric::SlaCompliance, 50.0), 100.0);
        assert_eq!(store.apply_adjustment(Metric::SlaCompliance, -300.0), 0.0);
        assert_eq!(store.apply_adjustment(Metric::PickingTasks, -100.0), 0.0);
    }

    #[test]
    fn quality_audit_rate_is_capped_at_fifteen() {
        let mut store = MetricsStore::new();
        for _ in 0..20 {
            store.apply_adjustment(Metric::QualityAuditRate, 1.0);
        }
        assert_eq!(store.snapshot().quality_audit_rate, 15.0);
    }

    #[test]
    fn load_serialize_round_trip() {
        let mut store = MetricsStore::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..25 {
            store.simulate_step(&mut rng);
        }

        let bytes = store.serialize().unwrap();
        let mut restored = MetricsStore::new();
        restored.load(&bytes).unwrap();
        assert_eq!(restored.snapshot(), store.snapshot());
    }

    #[test]
    fn partial_snapshot_merges_over_defaults() {
        let mut store = MetricsStore::new();
        store
            .load(br#"{"picking_tasks": 99, "future_field": true}"#)
            .unwrap();

        assert_eq!(store.snapshot().picking_tasks, 99);
        // Untouched fields keep their defaults
        assert_eq!(store.snapshot().order_volumes, 47);
        assert_eq!(store.snapshot().sla_compliance, 94.0);
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let mut store = MetricsStore::new();
        assert!(store.load(b"not json").is_err());
        assert!(store.load(br#"{"picking_tasks": "many"}"#).is_err());
    }

    #[test]
    fn metric_names_round_trip() {
        for name in Metric::VALID_METRICS {
            let metric: Metric = name.parse().unwrap();
            assert_eq!(&metric.to_string(), name);
        }
        assert!("warp-factor".parse::<Metric>().is_err());
    }
}
