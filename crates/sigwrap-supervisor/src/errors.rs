//! Error types for supervision runs.

use thiserror::Error;

/// Result type alias for supervision operations.
pub type SuperviseResult<T> = std::result::Result<T, SuperviseError>;

/// Errors a supervision run can surface to its caller.
///
/// A child that exits non-zero or dies from a signal is *not* an error at
/// this layer; both are carried in
/// [`TerminationOutcome`](crate::supervise::TerminationOutcome) for the
/// caller to translate.
#[derive(Debug, Error)]
pub enum SuperviseError {
    /// Signal interception could not be registered.
    #[error("signal setup failed: {source}")]
    SignalSetup {
        #[source]
        source: std::io::Error,
    },

    /// The child process could not be created.
    #[error("spawn failed: {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The wait primitive itself failed, distinct from any child exit status.
    #[error("wait failed: {source}")]
    Wait {
        #[source]
        source: std::io::Error,
    },

    /// The termination waiter task ended without reporting a status.
    #[error("termination waiter ended without reporting")]
    WaiterLost,
}

impl SuperviseError {
    pub fn signal_setup_failed(source: std::io::Error) -> Self {
        Self::SignalSetup { source }
    }

    pub fn spawn_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    pub fn wait_failed(source: std::io::Error) -> Self {
        Self::Wait { source }
    }
}
