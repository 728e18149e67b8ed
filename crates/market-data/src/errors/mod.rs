//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`QuoteError`]: The tagged error enum for all price resolution stages
//! - [`FailureClass`]: Classification used for logging once the error has
//!   been collapsed to "no price available"

mod class;

pub use class::FailureClass;

use thiserror::Error;

/// Errors that can occur while resolving a price.
///
/// Providers and the scheme directory return these at their boundaries; the
/// resolver collapses every variant to `None` at its outer edge, logging the
/// [`FailureClass`] so the cause is not lost entirely.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The identifier matched nothing: unknown ticker, coin id, or a
    /// mutual-fund name with no scheme match.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// The asset category is not market-linked and is never dispatched to a
    /// provider (Cash, Real Estate, Vehicles, Other).
    #[error("category '{0}' is not market-linked")]
    UnsupportedCategory(String),

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The request to the provider timed out.
    #[error("timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-reported error payload (success status, error body).
    #[error("provider error: {provider} - {message}")]
    Provider {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The payload was missing expected fields or carried a price that does
    /// not parse as a positive decimal.
    #[error("malformed response from {provider}: {message}")]
    Malformed {
        /// The provider whose payload was unusable
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// A required API credential is absent. The adapter fails fast and makes
    /// no network call.
    #[error("missing API credential for {provider}")]
    MissingCredential {
        /// The provider that requires a credential
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl QuoteError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dhanam_market_data::errors::{FailureClass, QuoteError};
    ///
    /// let error = QuoteError::Timeout { provider: "TWELVE_DATA".to_string() };
    /// assert_eq!(error.failure_class(), FailureClass::Transient);
    ///
    /// let error = QuoteError::SymbolNotFound("ZZZZ".to_string());
    /// assert_eq!(error.failure_class(), FailureClass::NotFound);
    /// ```
    pub fn failure_class(&self) -> FailureClass {
        match self {
            Self::SymbolNotFound(_) | Self::UnsupportedCategory(_) => FailureClass::NotFound,

            Self::HttpStatus { .. }
            | Self::Timeout { .. }
            | Self::Provider { .. }
            | Self::Network(_) => FailureClass::Transient,

            Self::Malformed { .. } => FailureClass::Malformed,

            Self::MissingCredential { .. } => FailureClass::Configuration,
        }
    }
}
