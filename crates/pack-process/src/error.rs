//! Error types for process execution

use std::time::Duration;

/// Errors that can occur while running an external process
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program could not be started
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child failed
    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited unsuccessfully
    #[error("{program} failed (exit code {}): {stderr}", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    Failed {
        program: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Captured stderr output
        stderr: String,
    },

    /// The process exceeded its timeout and was killed
    #[error("{program} timed out after {}s and was killed", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    /// The blocking runtime could not be built
    #[error("Failed to start process runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Result type alias for process operations
pub type Result<T> = std::result::Result<T, Error>;
