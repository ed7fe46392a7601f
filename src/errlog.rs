//! Run-wide error log.
//!
//! Recorded failures never abort the run; they accumulate here and decide
//! the final exit status. Concurrent branches each build their own log and
//! the orchestrator merges them, so no locking is involved.

use serde::Serialize;

/// Ordered collection of `"<action>: <detail>"` failure descriptions.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ErrorLog {
    entries: Vec<String>,
}

impl ErrorLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one failure description.
    pub fn record(&mut self, action: &str, detail: impl std::fmt::Display) {
        let entry = format!("{action}: {detail}");
        tracing::warn!(target: "forge_operator", "{entry}");
        self.entries.push(entry);
    }

    /// Absorbs the entries of another log, preserving their order.
    pub fn merge(&mut self, other: ErrorLog) {
        self.entries.extend(other.entries);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// JSON array of all entries, for the end-of-run failure dump.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }
}
