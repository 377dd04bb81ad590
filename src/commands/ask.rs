//! `opsdeck ask` command - answer a free-text operations query
//!
//! The engine itself is side-effect free; this command owns the query
//! counter and the history log.

use chrono::Utc;

use opsdeck_core::error::Result;
use opsdeck_core::history::QueryLogEntry;
use opsdeck_core::metrics::Metric;
use opsdeck_core::query::{self, QueryContext};
use opsdeck_core::store::Store;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{make_rng, persist_history, persist_state};

pub fn execute(cli: &Cli, store: &Store, query_words: &[String]) -> Result<()> {
    let query = query_words.join(" ");
    let mut state = store.load_state();
    let mut rng = make_rng(cli);

    let topic = query::classify(&query);
    let response = {
        let ctx = QueryContext {
            snapshot: state.metrics.snapshot(),
            employees: &state.employees,
            orders: &state.orders,
            waves: &state.waves,
            targets: &store.config().targets,
        };
        query::classify_and_respond(&query, &ctx, &mut rng)
    };

    // Empty input is a validation message, not an interaction: nothing is
    // counted or logged for it.
    if !query.trim().is_empty() {
        state.metrics.apply_adjustment(Metric::QueriesAnswered, 1.0);

        let mut history = store.load_history();
        history.record(QueryLogEntry {
            query: query.trim().to_string(),
            response: response.clone(),
            timestamp: Utc::now(),
        });
        persist_state(store, &state);
        persist_history(store, &history);
    }

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "query": query,
                    "topic": topic.map(|t| t.to_string()),
                    "response": response,
                })
            );
        }
        OutputFormat::Human => {
            println!("{}", response);
        }
    }

    Ok(())
}
