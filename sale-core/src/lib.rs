pub mod models;
pub mod pricing;
pub mod resolver;

pub use models::{CustomerId, LineItem, PriceOrigin, ProductId, StoredId};
pub use resolver::{DEFAULT_NOT_FOUND_MESSAGE, PriceQuote, PriceResolver, ResolveError};
