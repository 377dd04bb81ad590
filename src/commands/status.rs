//! `opsdeck status` command - show the current metrics snapshot

use opsdeck_core::error::Result;
use opsdeck_core::format::fmt_pct;
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let state = store.load_state();
    let snap = state.metrics.snapshot();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(snap)?);
        }
        OutputFormat::Human => {
            println!("Monitoring");
            println!("  Picking tasks:           {}", snap.picking_tasks);
            println!("  Order volumes:           {}", snap.order_volumes);
            println!("  Wave tasks:              {}", snap.wave_tasks);
            println!(
                "  Training completed:      {}/{}",
                snap.training_completed,
                state.employees.len()
            );
            println!("  Volume processed:        {}", snap.volume_processed);
            println!("  Packing totes:           {}", snap.packing_totes);
            println!("  Inventory mismatches:    {}", snap.inventory_mismatch);
            println!("  System errors:           {}", snap.system_errors);
            println!("  Queries answered:        {}", snap.queries_answered);
            println!();
            println!("Outcomes");
            println!(
                "  Employee performance:    {}",
                fmt_pct(snap.employee_performance)
            );
            println!(
                "  Item verification:       {}",
                fmt_pct(snap.item_verification)
            );
            println!(
                "  Performance improvement: {}",
                fmt_pct(snap.performance_improvement)
            );
            println!(
                "  SLA compliance:          {}",
                fmt_pct(snap.sla_compliance)
            );
            println!(
                "  Operations efficiency:   {}",
                fmt_pct(snap.operations_efficiency)
            );
            println!(
                "  Quality audit rate:      {}",
                fmt_pct(snap.quality_audit_rate)
            );
        }
    }

    Ok(())
}
