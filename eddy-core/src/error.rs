// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for eddy sequences.
//!
//! Two families of failures exist:
//!
//! - **Upstream failures** are surfaced by a wrapped source while it is being
//!   pulled. Combinators forward the first one unchanged and then end.
//! - **Invalid configuration** is rejected when a combinator is built, never
//!   while it is being iterated.
//!
//! # Examples
//!
//! ```
//! use eddy_core::{EddyError, Result};
//!
//! fn chunk_size(n: usize) -> Result<usize> {
//!     if n == 0 {
//!         return Err(EddyError::invalid_configuration("chunk size must be at least 1"));
//!     }
//!     Ok(n)
//! }
//!
//! assert!(chunk_size(0).unwrap_err().is_invalid_configuration());
//! ```

/// Root error type for all eddy operations.
#[derive(Debug, thiserror::Error)]
pub enum EddyError {
    /// A source reported a failure while producing its next element.
    #[error("Upstream failure: {context}")]
    UpstreamFailure {
        /// Description of what went wrong upstream
        context: String,
    },

    /// A typed error produced by a wrapped source.
    ///
    /// Created from foreign errors through [`EddyError::source_error`] or
    /// [`IntoEddyError`]. Treated as an upstream failure.
    #[error("Source error: {0}")]
    SourceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A combinator was built with parameters it cannot honour, such as a
    /// zero chunk size or a zero duration.
    #[error("Invalid configuration: {context}")]
    InvalidConfiguration {
        /// Which parameter was rejected and why
        context: String,
    },
}

impl EddyError {
    /// Create an upstream failure with the given context
    pub fn upstream(context: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            context: context.into(),
        }
    }

    /// Wrap an error raised by a source
    pub fn source_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SourceError(Box::new(error))
    }

    /// Create a configuration error with the given context
    pub fn invalid_configuration(context: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            context: context.into(),
        }
    }

    /// Returns `true` if the error came from a source rather than from
    /// building a combinator.
    #[must_use]
    pub const fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::UpstreamFailure { .. } | Self::SourceError(_))
    }

    /// Returns `true` if a combinator rejected its parameters.
    #[must_use]
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

/// Specialized Result type for eddy operations
///
/// # Examples
///
/// ```
/// use eddy_core::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, EddyError>;

/// Extension trait for converting foreign errors into `EddyError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`, so a
/// source built on top of I/O or parsing code can surface its failures as
/// upstream failures.
pub trait IntoEddyError {
    /// Convert this error into an `EddyError::SourceError`
    fn into_eddy_error(self) -> EddyError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoEddyError for E {
    fn into_eddy_error(self) -> EddyError {
        EddyError::source_error(self)
    }
}

impl Clone for EddyError {
    fn clone(&self) -> Self {
        match self {
            Self::UpstreamFailure { context } => Self::UpstreamFailure {
                context: context.clone(),
            },
            // The boxed error can't be cloned, keep its message
            Self::SourceError(e) => Self::UpstreamFailure {
                context: e.to_string(),
            },
            Self::InvalidConfiguration { context } => Self::InvalidConfiguration {
                context: context.clone(),
            },
        }
    }
}
