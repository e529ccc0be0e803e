//! Runtime statistics for the watcher.

/// Runtime statistics for the watcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub poll_cycles: u64,
    pub rows_rendered: u64,
    pub routes_rejected: u64,
    pub fetch_errors: u64,
    /// Rows matching the filter on the last successful poll.
    pub last_records_filtered: u64,
}
