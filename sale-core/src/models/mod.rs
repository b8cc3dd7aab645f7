mod ids;
mod line_item;

pub use ids::{CustomerId, ProductId, StoredId};
pub use line_item::{LineItem, PriceOrigin};
