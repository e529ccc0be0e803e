//! Watcher error types.

/// Watcher error type.
#[derive(Debug, thiserror::Error)]
pub enum WatcherError {
    #[error("watcher is already running")]
    AlreadyRunning,
}
