//! `opsdeck export` command - write the multi-sheet operations report
//!
//! Output goes to stdout by default, or to a file with `--output`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Utc;

use opsdeck_core::error::{OpsdeckError, Result};
use opsdeck_core::report::{self, Sheet};
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, store: &Store, output: Option<&Path>) -> Result<()> {
    let state = store.load_state();
    let history = store.load_history();
    let sheets = report::build(&state, &history, &store.config().targets, Utc::now());

    let content = match cli.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&serde_json::json!({ "sheets": sheets }))?
        }
        OutputFormat::Human => render_sheets(&sheets),
    };

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .map_err(|e| OpsdeckError::store_operation("create output file", e))?;
            file.write_all(content.as_bytes())?;
            file.write_all(b"\n")?;
            if !cli.quiet && cli.format == OutputFormat::Human {
                eprintln!("Report written to {}", path.display());
            }
        }
        None => println!("{}", content),
    }

    Ok(())
}

fn render_sheets(sheets: &[Sheet]) -> String {
    let mut out = String::new();
    for (idx, sheet) in sheets.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("=== {} ===\n", sheet.name));
        for row in &sheet.rows {
            out.push_str(&row.join(" | "));
            out.push('\n');
        }
    }
    out
}
