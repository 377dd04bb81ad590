//! `opsdeck check` command - checklist actions
//!
//! The four standing checklist items from the operations runbook: wave
//! completion, training coverage, stock replenishment, and the quality
//! audit rate bump.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use opsdeck_core::error::{OpsdeckError, Result};
use opsdeck_core::format::fmt_num;
use opsdeck_core::metrics::Metric;
use opsdeck_core::model::WaveStatus;
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{make_rng, persist_state};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChecklistAction {
    Waves,
    Training,
    Stock,
    Quality,
}

impl ChecklistAction {
    const VALID_ACTIONS: &'static [&'static str] = &["waves", "training", "stock", "quality"];
}

impl FromStr for ChecklistAction {
    type Err = OpsdeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "waves" => Ok(ChecklistAction::Waves),
            "training" => Ok(ChecklistAction::Training),
            "stock" => Ok(ChecklistAction::Stock),
            "quality" => Ok(ChecklistAction::Quality),
            other => Err(OpsdeckError::UsageError(format!(
                "unknown checklist action: {} (expected: {})",
                other,
                Self::VALID_ACTIONS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ChecklistAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecklistAction::Waves => write!(f, "waves"),
            ChecklistAction::Training => write!(f, "training"),
            ChecklistAction::Stock => write!(f, "stock"),
            ChecklistAction::Quality => write!(f, "quality"),
        }
    }
}

pub fn execute(cli: &Cli, store: &Store, action_name: &str) -> Result<()> {
    let action: ChecklistAction = action_name.parse()?;
    let mut state = store.load_state();
    let mut rng = make_rng(cli);

    let status = match action {
        ChecklistAction::Waves => {
            let completed = state
                .waves
                .iter()
                .filter(|w| w.status == WaveStatus::Complete)
                .count();
            let total = state.waves.len();
            if completed == total {
                "All waves complete".to_string()
            } else {
                format!("{}/{} waves complete", completed, total)
            }
        }
        ChecklistAction::Training => {
            let trained = state.employees.iter().filter(|e| e.trained).count();
            let total = state.employees.len();
            let rate = if total == 0 {
                0
            } else {
                (trained as f64 / total as f64 * 100.0).round() as u32
            };
            format!("{}/{} employees trained ({}%)", trained, total, rate)
        }
        ChecklistAction::Stock => {
            let avg_hours: u32 = rng.gen_range(2..=4);
            let target = store.config().targets.stock_replenishment_hours;
            if avg_hours <= target {
                format!("On time: average {}h (target {}h)", avg_hours, target)
            } else {
                format!("Delayed: average {}h (target {}h)", avg_hours, target)
            }
        }
        ChecklistAction::Quality => {
            let new_rate = state.metrics.apply_adjustment(Metric::QualityAuditRate, 1.0);
            persist_state(store, &state);
            format!("Quality audit rate adjusted to {}%", fmt_num(new_rate))
        }
    };

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "action": action.to_string(),
                    "status": status,
                })
            );
        }
        OutputFormat::Human => {
            println!("{}", status);
        }
    }

    Ok(())
}
