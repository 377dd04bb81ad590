//! `opsdeck tick` command - advance the metrics simulation

use opsdeck_core::error::Result;
use opsdeck_core::format::fmt_pct;
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{make_rng, persist_state};

pub fn execute(cli: &Cli, store: &Store, steps: u32) -> Result<()> {
    let mut state = store.load_state();
    let mut rng = make_rng(cli);

    for _ in 0..steps {
        state.metrics.simulate_step(&mut rng);
    }
    persist_state(store, &state);

    let snap = state.metrics.snapshot();
    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "steps": steps,
                    "snapshot": snap,
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Applied {} tick(s): {} orders, {} units processed, SLA {}",
                    steps,
                    snap.order_volumes,
                    snap.volume_processed,
                    fmt_pct(snap.sla_compliance)
                );
            }
        }
    }

    Ok(())
}
