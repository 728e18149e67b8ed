//! Price provider trait definition.

use async_trait::async_trait;

use crate::errors::QuoteError;
use crate::models::{PriceRequest, ProviderQuote};

/// Trait for price providers.
///
/// One capability: turn a normalized request into a current unit price.
/// Implementations map their provider's wire format and failure modes onto
/// [`ProviderQuote`] and [`QuoteError`]; the resolver decides which provider
/// serves which asset category and owns caching.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// A constant string like "MFAPI" or "TWELVE_DATA", used in logs and
    /// error payloads.
    fn id(&self) -> &'static str;

    /// Fetch the current unit price for a request.
    ///
    /// # Errors
    ///
    /// Returns a tagged [`QuoteError`]; no variant is ever allowed to escape
    /// the resolver as a panic or propagated exception.
    async fn quote(&self, request: &PriceRequest) -> Result<ProviderQuote, QuoteError>;
}
