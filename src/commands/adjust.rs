//! `opsdeck adjust` command - manual metric adjustment

use opsdeck_core::error::Result;
use opsdeck_core::format::fmt_num;
use opsdeck_core::metrics::Metric;
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};
use crate::commands::persist_state;

pub fn execute(cli: &Cli, store: &Store, metric_name: &str, delta: f64) -> Result<()> {
    let metric: Metric = metric_name.parse()?;

    let mut state = store.load_state();
    let value = state.metrics.apply_adjustment(metric, delta);
    persist_state(store, &state);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "metric": metric.to_string(),
                    "delta": delta,
                    "value": value,
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{} = {}", metric, fmt_num(value));
            }
        }
    }

    Ok(())
}
