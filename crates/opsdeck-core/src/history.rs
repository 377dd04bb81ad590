//! Query history, newest first, capped

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum retained history entries; the oldest are evicted on overflow
pub const QUERY_LOG_CAP: usize = 50;

/// One answered query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub query: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of answered queries, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryLog {
    entries: Vec<QueryLogEntry>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interaction, evicting the oldest entry past the cap
    pub fn record(&mut self, entry: QueryLogEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(QUERY_LOG_CAP);
    }

    /// Entries, most recent first
    pub fn entries(&self) -> &[QueryLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
