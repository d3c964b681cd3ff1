//! Failure taxonomy shared by every repository operation.
//!
//! Adapters keep their own error types internal to a single call; the
//! repository converts them into exactly one of the kinds below before
//! anything reaches a caller. Callers read [`Failure::kind`] and the
//! message for presentation only, never for control flow.

use thiserror::Error;

/// Boxed underlying error carried by a failure.
type Cause = Box<dyn std::error::Error + Send + Sync>;

/// A specialized `Result` type for repository operations.
pub type Result<T> = std::result::Result<T, Failure>;

/// Category tag of a [`Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input rejected before any I/O; user-correctable
    Format,
    /// Remote search provider or transport failure
    RemoteSearch,
    /// Local persistence read or write failure
    LocalStore,
    /// Anything uncategorized; defensive fallback
    Unexpected,
}

/// A failure surfaced by a repository operation.
///
/// Constructed once at the point of detection and never mutated while
/// propagating upward. Each kind has an explicit constructor taking either
/// a message or the underlying error; when an error is wrapped, its
/// display text becomes the message and the error itself is kept as the
/// source chain.
#[derive(Debug, Error)]
pub enum Failure {
    /// The query was rejected before any I/O happened.
    #[error("{message}")]
    Format {
        /// Human-readable description, suitable for direct display
        message: String,
    },

    /// The remote search provider or its transport failed.
    #[error("{message}")]
    RemoteSearch {
        /// Human-readable description
        message: String,
        /// The adapter error that triggered this failure
        #[source]
        cause: Option<Cause>,
    },

    /// The local persistence layer failed to read or write.
    #[error("{message}")]
    LocalStore {
        /// Human-readable description
        message: String,
        /// The adapter error that triggered this failure
        #[source]
        cause: Option<Cause>,
    },

    /// An error that fits no other category.
    ///
    /// Nothing may escape the repository as a raw error; whatever cannot
    /// be classified is reported under this kind.
    #[error("{message}")]
    Unexpected {
        /// Human-readable description
        message: String,
        /// The error that triggered this failure
        #[source]
        cause: Option<Cause>,
    },
}

impl Failure {
    /// Creates a `Format` failure from a display message.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Creates a `RemoteSearch` failure wrapping the provider error.
    pub fn remote_search<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RemoteSearch {
            message: cause.to_string(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates a `RemoteSearch` failure from a display message.
    pub fn remote_search_message(message: impl Into<String>) -> Self {
        Self::RemoteSearch {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a `LocalStore` failure wrapping the store error.
    pub fn local_store<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::LocalStore {
            message: cause.to_string(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates a `LocalStore` failure from a display message.
    pub fn local_store_message(message: impl Into<String>) -> Self {
        Self::LocalStore {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an `Unexpected` failure wrapping the error.
    pub fn unexpected<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Unexpected {
            message: cause.to_string(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates an `Unexpected` failure from a display message.
    pub fn unexpected_message(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
            cause: None,
        }
    }

    /// The category this failure belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Format { .. } => FailureKind::Format,
            Self::RemoteSearch { .. } => FailureKind::RemoteSearch,
            Self::LocalStore { .. } => FailureKind::LocalStore,
            Self::Unexpected { .. } => FailureKind::Unexpected,
        }
    }

    /// The human-readable message carried by this failure.
    pub fn message(&self) -> &str {
        match self {
            Self::Format { message }
            | Self::RemoteSearch { message, .. }
            | Self::LocalStore { message, .. }
            | Self::Unexpected { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_kind_matches_constructor() {
        assert_eq!(Failure::format("bad input").kind(), FailureKind::Format);
        assert_eq!(
            Failure::remote_search_message("down").kind(),
            FailureKind::RemoteSearch
        );
        assert_eq!(
            Failure::local_store_message("full").kind(),
            FailureKind::LocalStore
        );
        assert_eq!(
            Failure::unexpected_message("?").kind(),
            FailureKind::Unexpected
        );
    }

    #[test]
    fn test_wrapping_constructor_keeps_cause_and_message() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "disk sealed");
        let failure = Failure::local_store(io_error);

        assert_eq!(failure.kind(), FailureKind::LocalStore);
        assert_eq!(failure.message(), "disk sealed");
        assert!(failure.source().is_some());
    }

    #[test]
    fn test_message_constructor_has_no_cause() {
        let failure = Failure::remote_search_message("provider unreachable");

        assert_eq!(failure.message(), "provider unreachable");
        assert!(failure.source().is_none());
    }

    #[test]
    fn test_display_is_the_message() {
        let failure = Failure::format("Please use latin characters only.");
        assert_eq!(failure.to_string(), "Please use latin characters only.");
    }
}
