//! Command implementations for opsdeck

pub mod adjust;
pub mod ask;
pub mod check;
pub mod dispatch;
pub mod export;
pub mod history;
pub mod init;
pub mod insights;
pub mod status;
pub mod tick;
pub mod watch;

use rand::rngs::StdRng;
use rand::SeedableRng;

use opsdeck_core::history::QueryLog;
use opsdeck_core::state::DashboardState;
use opsdeck_core::store::Store;

use crate::cli::Cli;

/// Random source for simulation and response filler figures.
/// `--seed` makes runs reproducible.
pub fn make_rng(cli: &Cli) -> StdRng {
    match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fire-and-forget state write: a failed write is logged and skipped,
/// never retried, and the command still succeeds.
pub fn persist_state(store: &Store, state: &DashboardState) {
    if let Err(e) = store.save_state(state) {
        tracing::warn!(error = %e, "skipping state persistence");
    }
}

/// Fire-and-forget history write, same policy as state
pub fn persist_history(store: &Store, history: &QueryLog) {
    if let Err(e) = store.save_history(history) {
        tracing::warn!(error = %e, "skipping history persistence");
    }
}
