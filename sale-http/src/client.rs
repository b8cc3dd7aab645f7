use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use sale_core::{CustomerId, PriceQuote, PriceResolver, ProductId, ResolveError};

use crate::config::HttpResolverConfig;
use crate::payload::PricePayload;
use crate::token::SessionTokenProvider;

/// [`PriceResolver`] backed by the remote pricing endpoints.
///
/// Requests are form-encoded POSTs carrying the identifiers plus the
/// session's request-forgery token. Lookups are single-shot: no retry, no
/// caching. Every outcome, including transport failures, is reported through
/// the quote's error channel; this type never panics on a bad response.
pub struct HttpPriceResolver {
    client: Client,
    config: HttpResolverConfig,
    tokens: Arc<dyn SessionTokenProvider>,
}

impl HttpPriceResolver {
    pub fn new(
        config: HttpResolverConfig,
        tokens: Arc<dyn SessionTokenProvider>,
    ) -> Self {
        Self {
            client: Client::new(),
            config,
            tokens,
        }
    }

    /// Reuse an existing client (and its connection pool) instead of
    /// building a fresh one.
    pub fn with_client(
        client: Client,
        config: HttpResolverConfig,
        tokens: Arc<dyn SessionTokenProvider>,
    ) -> Self {
        Self {
            client,
            config,
            tokens,
        }
    }

    async fn post_lookup(
        &self,
        url: &str,
        mut form: Vec<(&'static str, String)>,
    ) -> PriceQuote {
        if let Some(token) = self.tokens.csrf_token() {
            form.push(("csrf_token", token));
        }

        let response = self
            .client
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(%url, %status, "price lookup response");

        // The backend reports not-found through an error status with a
        // `{error}` body, so the payload is parsed regardless of status and
        // only an unreadable body counts as a transport problem.
        match response.json::<PricePayload>().await {
            Ok(payload) => payload.into_quote(),
            Err(e) if status.is_success() => Err(ResolveError::Transport(format!(
                "malformed response body: {e}"
            ))),
            Err(_) => Err(ResolveError::Transport(format!(
                "price endpoint returned {status}"
            ))),
        }
    }
}

#[async_trait]
impl PriceResolver for HttpPriceResolver {
    async fn contract_price(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> PriceQuote {
        self.post_lookup(
            &self.config.contract_price_url,
            vec![
                ("customer_id", customer_id.as_str().to_string()),
                ("product_id", product_id.as_str().to_string()),
            ],
        )
        .await
    }

    async fn catalog_price(
        &self,
        product_id: &ProductId,
    ) -> PriceQuote {
        self.post_lookup(
            &self.config.catalog_price_url,
            vec![("product_id", product_id.as_str().to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::StaticTokenProvider;

    /// Nothing listens on the discard port, so the connection is refused
    /// immediately and must surface through the Transport channel, never as
    /// a panic.
    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_failure() {
        let resolver = HttpPriceResolver::new(
            HttpResolverConfig::for_base("http://127.0.0.1:9/pricing"),
            Arc::new(StaticTokenProvider::none()),
        );

        let quote = resolver.catalog_price(&ProductId::new("P1")).await;

        assert!(matches!(quote, Err(ResolveError::Transport(_))));
    }
}
