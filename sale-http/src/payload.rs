use rust_decimal::Decimal;
use serde::Deserialize;

use sale_core::{DEFAULT_NOT_FOUND_MESSAGE, PriceQuote, ResolveError};

/// Wire shape shared by both price endpoints: either a `preco` amount or an
/// `error` message. The field names are part of the remote contract.
#[derive(Debug, Clone, Deserialize)]
pub struct PricePayload {
    #[serde(default)]
    pub preco: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PricePayload {
    /// Normalizes the payload into a usable quote.
    ///
    /// A quote is valid only when `preco` is present, finite, and
    /// non-negative; anything else is a failure even though the call itself
    /// succeeded. Absence of `preco` is a not-found, carrying the remote's
    /// `error` message when one was sent.
    pub fn into_quote(self) -> PriceQuote {
        match self.preco {
            Some(raw) => {
                if !raw.is_finite() {
                    return Err(ResolveError::InvalidQuote(format!(
                        "non-finite price {raw}"
                    )));
                }
                if raw < 0.0 {
                    return Err(ResolveError::InvalidQuote(format!(
                        "negative price {raw}"
                    )));
                }
                Decimal::try_from(raw).map_err(|e| {
                    ResolveError::InvalidQuote(format!("unrepresentable price {raw}: {e}"))
                })
            }
            None => Err(ResolveError::NotFound(
                self.error
                    .unwrap_or_else(|| DEFAULT_NOT_FOUND_MESSAGE.to_string()),
            )),
        }
    }
}
