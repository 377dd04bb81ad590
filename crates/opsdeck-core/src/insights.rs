//! Threshold-derived operational insights

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Targets;
use crate::format::fmt_num;
use crate::metrics::MetricsSnapshot;

/// Insight severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Success,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Warning => write!(f, "warning"),
            Severity::Success => write!(f, "success"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// One flagged condition over the current snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

/// Evaluate the fixed threshold checks against the snapshot.
///
/// Always returns at least one entry: when nothing fires, a single Info
/// insight reports that operations are running smoothly.
pub fn generate(snapshot: &MetricsSnapshot, targets: &Targets) -> Vec<Insight> {
    let mut insights = Vec::new();

    if snapshot.system_errors > 0 {
        insights.push(Insight {
            severity: Severity::Critical,
            title: "System Errors Detected".to_string(),
            message: format!(
                "{} system error(s) require immediate attention. Check logs and resolve issues.",
                snapshot.system_errors
            ),
        });
    }

    if snapshot.inventory_mismatch > 5 {
        insights.push(Insight {
            severity: Severity::Critical,
            title: "Inventory Mismatch Alert".to_string(),
            message: format!(
                "{} inventory mismatches detected. Conduct physical count and system reconciliation.",
                snapshot.inventory_mismatch
            ),
        });
    }

    if snapshot.employee_performance < targets.employee_performance {
        insights.push(Insight {
            severity: Severity::Warning,
            title: "Performance Below Target".to_string(),
            message: format!(
                "Average employee efficiency is {}%. Consider additional training or process optimization.",
                fmt_num(snapshot.employee_performance)
            ),
        });
    }

    if snapshot.sla_compliance < targets.sla_compliance {
        insights.push(Insight {
            severity: Severity::Warning,
            title: "SLA Compliance Issue".to_string(),
            message: format!(
                "SLA compliance at {}%, below target of {}%. Focus on reducing order processing time.",
                fmt_num(snapshot.sla_compliance),
                fmt_num(targets.sla_compliance)
            ),
        });
    }

    if snapshot.item_verification >= 98.0 {
        insights.push(Insight {
            severity: Severity::Success,
            title: "Excellent Verification Rate".to_string(),
            message: format!(
                "Item verification accuracy at {}%. Maintain current quality standards.",
                fmt_num(snapshot.item_verification)
            ),
        });
    }

    if snapshot.performance_improvement > 10.0 {
        insights.push(Insight {
            severity: Severity::Success,
            title: "Performance Improvement".to_string(),
            message: format!(
                "{}% performance improvement achieved. Continue monitoring for sustained growth.",
                fmt_num(snapshot.performance_improvement)
            ),
        });
    }

    if snapshot.picking_tasks > 20 {
        insights.push(Insight {
            severity: Severity::Warning,
            title: "High Picking Load".to_string(),
            message: format!(
                "{} active picking tasks. Consider redistributing workload or adding staff.",
                snapshot.picking_tasks
            ),
        });
    }

    if insights.is_empty() {
        insights.push(Insight {
            severity: Severity::Info,
            title: "Operations Running Smoothly".to_string(),
            message: "All metrics within acceptable ranges. Continue monitoring for any changes."
                .to_string(),
        });
    }

    insights
}
