use thiserror::Error;

/// Errors surfaced by [`GameSession`](crate::GameSession) operations.
///
/// All variants are recoverable: the engine never corrupts its own state,
/// it reports the precondition violation and leaves the session as it was.
#[derive(Error, Debug)]
pub enum SessionError {
    /// An operation was called in a phase where it is not legal
    /// (e.g. `start` while a session is running, `tick` while idle).
    #[error("{operation} is not legal while the session is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: &'static str,
    },

    /// The supplied track failed validation at `start`.
    #[error("invalid track: {0}")]
    InvalidTrack(#[from] TrackError),

    /// The judge configuration is unusable (window ordering violated,
    /// or a non-finite / negative constant).
    #[error("invalid judge config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// A `dt` or input timestamp was non-finite or negative.
    #[error("invalid timestamp {value}: must be finite and non-negative")]
    InvalidTimestamp { value: f64 },
}

/// Validation errors for a [`TrackDefinition`](crate::TrackDefinition).
#[derive(Error, Debug)]
pub enum TrackError {
    /// Note timings must be non-decreasing.
    #[error("note {index} is out of order: {time} follows {previous}")]
    NotSorted {
        index: usize,
        time: f64,
        previous: f64,
    },

    /// Note timings must be non-negative and finite.
    #[error("note {index} has invalid time {time}")]
    InvalidTime { index: usize, time: f64 },

    /// The track file could not be parsed.
    #[error("failed to parse track: {0}")]
    Parse(#[from] serde_json::Error),
}
