//! `opsdeck watch` command - periodic simulation until Ctrl-C
//!
//! The tick loop runs on the main thread; the signal handler only flips an
//! AtomicBool, so every tick (simulate + persist + print) stays atomic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Local;

use opsdeck_core::error::Result;
use opsdeck_core::format::fmt_pct;
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{make_rng, persist_state};

pub fn execute(cli: &Cli, store: &Store, interval_secs: Option<u64>) -> Result<()> {
    let interval = interval_secs
        .unwrap_or(store.config().simulation.interval_secs)
        .max(1);

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        let _ = ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        });
    }

    let mut state = store.load_state();
    let mut rng = make_rng(cli);

    if !cli.quiet && cli.format == OutputFormat::Human {
        println!(
            "Watching (tick every {}s, Ctrl-C to stop)...",
            interval
        );
    }

    while running.load(Ordering::SeqCst) {
        state.metrics.simulate_step(&mut rng);
        persist_state(store, &state);

        let snap = state.metrics.snapshot();
        match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "time": Local::now().to_rfc3339(),
                        "order_volumes": snap.order_volumes,
                        "volume_processed": snap.volume_processed,
                        "picking_tasks": snap.picking_tasks,
                        "sla_compliance": snap.sla_compliance,
                    })
                );
            }
            OutputFormat::Human => {
                if !cli.quiet {
                    println!(
                        "[{}] orders {}  processed {}  picking {}  SLA {}",
                        Local::now().format("%H:%M:%S"),
                        snap.order_volumes,
                        snap.volume_processed,
                        snap.picking_tasks,
                        fmt_pct(snap.sla_compliance)
                    );
                }
            }
        }

        // Sleep in short slices so Ctrl-C interrupts promptly
        for _ in 0..interval * 10 {
            if !running.load(Ordering::SeqCst) {
                break;
            }
            thread::sleep(Duration::from_millis(100));
        }
    }

    if !cli.quiet && cli.format == OutputFormat::Human {
        println!("Stopped.");
    }
    Ok(())
}
