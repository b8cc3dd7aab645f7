use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use sale_core::pricing::{CurrencyFormat, format_price_field, parse_amount};
use sale_core::{CustomerId, LineItem, PriceOrigin, PriceResolver, ProductId};

use crate::fields::{FormFields, Notifier};

/// Controller for one line-item row inside the repeating table.
///
/// Owns the row's [`LineItem`] state and reacts to the host's field events.
/// The price is only ever auto-filled while the item's origin is
/// [`PriceOrigin::Auto`]; a price the user typed, or one loaded from
/// storage, is left alone.
pub struct RowController<F> {
    fields: F,
    item: LineItem,
    currency: CurrencyFormat,
    resolver: Arc<dyn PriceResolver>,
    notifier: Arc<dyn Notifier>,
}

impl<F: FormFields> RowController<F> {
    pub fn new(
        fields: F,
        currency: CurrencyFormat,
        resolver: Arc<dyn PriceResolver>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            fields,
            item: LineItem::blank(),
            currency,
            resolver,
            notifier,
        }
    }

    /// Establishes the starting price origin and total for a freshly
    /// rendered row. Runs exactly once per row, before any other event.
    pub fn initialize(&mut self) {
        self.sync_from_fields();
        self.item.price_origin =
            PriceOrigin::initial(self.item.is_persisted(), self.has_price_text());
        self.refresh_total();
    }

    pub fn item(&self) -> &LineItem {
        &self.item
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Any direct edit of the price field makes the price the user's,
    /// starting with the first keystroke.
    pub fn on_price_input(&mut self) {
        self.item.price_origin = PriceOrigin::Manual;
        self.refresh_total();
    }

    /// Quantity edits recompute the total and nothing else.
    pub fn on_quantity_changed(&mut self) {
        self.refresh_total();
    }

    /// Product selection changed. May auto-fill the price.
    pub async fn on_product_selected(&mut self) {
        self.sync_from_fields();

        let Some(product_id) = self.item.product_id.clone() else {
            // A cleared line item is always eligible for auto-pricing again.
            self.set_auto_price(None);
            return;
        };

        if self.item.is_persisted() {
            // A stored price is authoritative.
            self.item.price_origin = PriceOrigin::Manual;
            self.refresh_total();
            return;
        }

        if self.item.price_origin == PriceOrigin::Manual && self.has_price_text() {
            self.refresh_total();
            return;
        }

        let customer_id = self.item.customer_id.clone();
        let quote = match &customer_id {
            Some(customer_id) => {
                debug!(%customer_id, %product_id, "requesting contract price");
                self.resolver.contract_price(customer_id, &product_id).await
            }
            None => {
                debug!(%product_id, "requesting catalog price");
                self.resolver.catalog_price(&product_id).await
            }
        };

        if self.selection_changed(Some(&product_id), customer_id.as_ref()) {
            return;
        }

        match quote {
            Ok(price) => self.set_auto_price(Some(price)),
            Err(err) => {
                warn!(%err, %product_id, "price lookup failed on product selection");
                self.notifier.alert(&format!("Error: {err}"));
                self.set_auto_price(None);
            }
        }
    }

    /// Customer selection changed. Only refines the price when a product is
    /// also selected; failures degrade silently (the price stays
    /// unresolved).
    pub async fn on_customer_selected(&mut self) {
        self.sync_from_fields();

        let (Some(customer_id), Some(product_id)) =
            (self.item.customer_id.clone(), self.item.product_id.clone())
        else {
            return;
        };

        if self.item.is_persisted() {
            self.item.price_origin = PriceOrigin::Manual;
            self.refresh_total();
            return;
        }

        if self.item.price_origin == PriceOrigin::Manual && self.has_price_text() {
            self.refresh_total();
            return;
        }

        debug!(%customer_id, %product_id, "requesting contract price");
        let quote = self.resolver.contract_price(&customer_id, &product_id).await;

        if self.selection_changed(Some(&product_id), Some(&customer_id)) {
            return;
        }

        match quote {
            Ok(price) => self.set_auto_price(Some(price)),
            Err(err) => {
                // Customer change is a refinement, not a primary action:
                // leave the price unresolved.
                warn!(%err, %customer_id, %product_id, "contract price lookup failed");
            }
        }
    }

    /// Programmatic price write: marks the origin Auto, updates the field
    /// text, and recomputes the total.
    fn set_auto_price(
        &mut self,
        price: Option<Decimal>,
    ) {
        self.item.price_origin = PriceOrigin::Auto;
        self.item.unit_price = price;
        match price {
            Some(value) => self.fields.set_price_text(&format_price_field(value)),
            None => self.fields.set_price_text(""),
        }
        self.refresh_total();
    }

    /// True when the live selection no longer matches the one that
    /// triggered an in-flight lookup; such a quote is stale and dropped.
    fn selection_changed(
        &self,
        product_id: Option<&ProductId>,
        customer_id: Option<&CustomerId>,
    ) -> bool {
        let changed = self.fields.product_id().as_ref() != product_id
            || self.fields.customer_id().as_ref() != customer_id;
        if changed {
            debug!("discarding stale price quote after selection change");
        }
        changed
    }

    fn sync_from_fields(&mut self) {
        self.item.product_id = self.fields.product_id();
        self.item.customer_id = self.fields.customer_id();
        self.item.stored_id = self.fields.stored_id();
        self.item.unit_price = parse_amount(&self.fields.price_text());
        self.item.quantity = parse_amount(&self.fields.quantity_text());
    }

    fn has_price_text(&self) -> bool {
        !self.fields.price_text().trim().is_empty()
    }

    /// Recomputes the displayed total from the live price and quantity text.
    fn refresh_total(&mut self) {
        self.item.unit_price = parse_amount(&self.fields.price_text());
        self.item.quantity = parse_amount(&self.fields.quantity_text());
        let display = self.item.total_display(&self.currency);
        self.fields.set_total_text(&display);
    }
}
