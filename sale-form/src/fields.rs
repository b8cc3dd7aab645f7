use sale_core::{CustomerId, ProductId, StoredId};

/// Transient visual state of the price field during a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFieldStatus {
    #[default]
    Idle,
    /// A lookup is in flight.
    Pending,
    /// The last lookup filled the field.
    Success,
    /// The last lookup failed.
    Error,
}

/// Accessor capability over one line item's form fields.
///
/// Implemented by the host over its widget row (or over the page-level form
/// for the standalone controller). Values are read live on every event: the
/// widgets, not the engine, are the source of truth for what the user
/// currently sees. Standalone hosts without a quantity or total field
/// implement those accessors as empty/no-op.
pub trait FormFields {
    fn product_id(&self) -> Option<ProductId>;
    fn customer_id(&self) -> Option<CustomerId>;
    /// Identifier under which this line item is already stored, if any.
    /// Presence means "persisted" and switches off auto-pricing.
    fn stored_id(&self) -> Option<StoredId>;
    fn price_text(&self) -> String;
    fn set_price_text(&mut self, value: &str);
    fn quantity_text(&self) -> String;
    fn set_total_text(&mut self, value: &str);

    /// Current visual status of the price field. Row hosts that render no
    /// status can keep the defaults.
    fn price_status(&self) -> PriceFieldStatus {
        PriceFieldStatus::Idle
    }
    fn set_price_status(
        &mut self,
        _status: PriceFieldStatus,
    ) {
    }
}

/// Blocking user notices (`alert` in a browser host).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
