/// Endpoint configuration for the HTTP price resolver.
///
/// Both URLs must be absolute; their meaning is entirely the backend's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResolverConfig {
    /// Contract-price endpoint: POST `{customer_id, product_id}`.
    pub contract_price_url: String,
    /// Catalog-price endpoint: POST `{product_id}`.
    pub catalog_price_url: String,
}

impl HttpResolverConfig {
    /// Conventional endpoint paths under a common base.
    ///
    /// ```
    /// use sale_http::HttpResolverConfig;
    ///
    /// let config = HttpResolverConfig::for_base("https://erp.example/pricing");
    ///
    /// assert_eq!(
    ///     config.contract_price_url,
    ///     "https://erp.example/pricing/contract-price/"
    /// );
    /// assert_eq!(
    ///     config.catalog_price_url,
    ///     "https://erp.example/pricing/catalog-price/"
    /// );
    /// ```
    pub fn for_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            contract_price_url: format!("{base}/contract-price/"),
            catalog_price_url: format!("{base}/catalog-price/"),
        }
    }
}
