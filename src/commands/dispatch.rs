//! Command dispatch logic for opsdeck

use std::env;
use std::path::PathBuf;

use opsdeck_core::error::Result;
use opsdeck_core::store::Store;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli) -> Result<()> {
    // Determine the root directory
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    match &cli.command {
        None => handle_no_command(cli),

        Some(Commands::Init) => commands::init::execute(cli, &root),

        Some(Commands::Status) => commands::status::execute(cli, &open_store(cli, &root)?),

        Some(Commands::Ask { query }) => {
            commands::ask::execute(cli, &open_store(cli, &root)?, query)
        }

        Some(Commands::Tick { steps }) => {
            commands::tick::execute(cli, &open_store(cli, &root)?, *steps)
        }

        Some(Commands::Watch { interval_secs }) => {
            commands::watch::execute(cli, &open_store(cli, &root)?, *interval_secs)
        }

        Some(Commands::Adjust { metric, delta }) => {
            commands::adjust::execute(cli, &open_store(cli, &root)?, metric, *delta)
        }

        Some(Commands::Check { action }) => {
            commands::check::execute(cli, &open_store(cli, &root)?, action)
        }

        Some(Commands::History { limit }) => {
            commands::history::execute(cli, &open_store(cli, &root)?, *limit)
        }

        Some(Commands::Insights) => commands::insights::execute(cli, &open_store(cli, &root)?),

        Some(Commands::Export { output }) => {
            commands::export::execute(cli, &open_store(cli, &root)?, output.as_deref())
        }
    }
}

/// Resolve the store from --store, or discover it from the root
fn open_store(cli: &Cli, root: &std::path::Path) -> Result<Store> {
    match &cli.store {
        Some(path) => Store::open(path),
        None => Store::discover(root),
    }
}

fn handle_no_command(cli: &Cli) -> Result<()> {
    if !cli.quiet {
        println!("opsdeck - warehouse operations dashboard");
        println!();
        println!("Common commands:");
        println!("  opsdeck init              initialize a store here");
        println!("  opsdeck status            show current metrics");
        println!("  opsdeck ask <query>       answer an operations query");
        println!("  opsdeck tick              advance the simulation");
        println!("  opsdeck export            write the operations report");
        println!();
        println!("Run `opsdeck --help` for the full command list.");
    }
    Ok(())
}
