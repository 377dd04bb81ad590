//! `opsdeck init` command - initialize a new store

use std::path::Path;

use opsdeck_core::error::Result;
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let store = Store::init(root)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "status": "ok",
                    "path": store.root().display().to_string(),
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Initialized opsdeck store at {}", store.root().display());
            }
        }
    }

    Ok(())
}
