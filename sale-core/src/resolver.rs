use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CustomerId, ProductId};

/// Message used when the remote collaborator reports no price without
/// providing its own wording.
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "price not found";

/// Ways a price lookup can fail.
///
/// Implementations must never panic: every outcome, including transport
/// failures, flows through the quote's error channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The remote collaborator explicitly reports no price for the
    /// requested combination.
    #[error("no price available: {0}")]
    NotFound(String),

    /// The remote collaborator returned a price that is not a finite
    /// non-negative number. The call itself succeeded.
    #[error("invalid price quote: {0}")]
    InvalidQuote(String),

    /// The network call itself failed.
    #[error("price lookup failed: {0}")]
    Transport(String),
}

/// Result of a single remote price lookup: a finite non-negative price, or
/// one of the [`ResolveError`] kinds.
pub type PriceQuote = Result<Decimal, ResolveError>;

/// Remote price lookup, as both controllers consume it.
///
/// Lookups are asynchronous and single-shot: no retry, no caching. Overlap
/// handling (a second lookup starting before the first resolves) is the
/// caller's concern.
#[async_trait]
pub trait PriceResolver: Send + Sync {
    /// Customer-specific negotiated price for a product.
    async fn contract_price(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> PriceQuote;

    /// The product's default price, with no customer context.
    async fn catalog_price(
        &self,
        product_id: &ProductId,
    ) -> PriceQuote;
}
