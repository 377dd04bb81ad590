//! `opsdeck history` command - show recent query history

use opsdeck_core::error::Result;
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, store: &Store, limit: usize) -> Result<()> {
    let history = store.load_history();
    let entries = &history.entries()[..limit.min(history.len())];

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entries)?);
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No queries recorded");
                }
                return Ok(());
            }
            for entry in entries {
                println!(
                    "[{}] {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.query
                );
                for line in entry.response.lines() {
                    println!("  {}", line);
                }
                println!();
            }
        }
    }

    Ok(())
}
