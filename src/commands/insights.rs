//! `opsdeck insights` command - threshold-derived operational insights

use opsdeck_core::error::Result;
use opsdeck_core::insights;
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let state = store.load_state();
    let insights = insights::generate(state.metrics.snapshot(), &store.config().targets);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
        OutputFormat::Human => {
            for insight in &insights {
                println!("[{}] {}", insight.severity, insight.title);
                println!("  {}", insight.message);
            }
        }
    }

    Ok(())
}
