//! Error handling for PoolGuide
//!
//! Provides error types for every layer of the overlay core:
//! - Geometry errors (transform preconditions, manipulation state machine)
//! - Profile errors (stored geometry profiles)
//! - Queue errors (owner-thread intent delivery)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised by the transform engine and the manipulation state machine.
/// `PreconditionViolated` marks a broken invariant rather than bad user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A geometric invariant that clamping should guarantee does not hold
    #[error("Precondition violated: {reason}")]
    PreconditionViolated {
        /// What invariant failed.
        reason: String,
    },

    /// A drag was started while another one is still active
    #[error("Invalid state transition from {current} to {requested}")]
    InvalidTransition {
        /// The state that is currently active.
        current: String,
        /// The state that was requested.
        requested: String,
    },

    /// A pocket index outside the current pocket list
    #[error("Pocket index {index} out of range (pocket count {len})")]
    PocketIndexOutOfRange {
        /// The requested pocket index.
        index: usize,
        /// The number of pockets in the profile.
        len: usize,
    },
}

/// Profile error type
///
/// Reported by a [`ProfileStore`](crate::store::ProfileStore). The caller's
/// in-memory profile is never touched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// No stored record for this name
    #[error("Profile '{name}' not found")]
    NotFound {
        /// The requested profile name.
        name: String,
    },

    /// The stored record could not be parsed
    #[error("Profile '{name}' is malformed: {reason}")]
    Malformed {
        /// The requested profile name.
        name: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The name cannot be used as a storage key
    #[error("Invalid profile name '{name}'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// The backing storage failed
    #[error("Profile storage error: {reason}")]
    Storage {
        /// The underlying failure.
        reason: String,
    },
}

/// Intent queue error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue is at capacity and the intent was dropped
    #[error("Intent queue is full")]
    Full,

    /// The consuming side has been dropped
    #[error("Intent queue is closed")]
    Closed,
}

/// Main error type for PoolGuide
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Profile error
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Queue error
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a missing profile
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Profile(ProfileError::NotFound { .. }))
    }

    /// Check if this is an unparsable profile
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Profile(ProfileError::Malformed { .. }))
    }

    /// Check if this is a broken geometry invariant
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Error::Geometry(GeometryError::PreconditionViolated { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
