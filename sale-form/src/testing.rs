//! In-memory doubles for the host-side capabilities, used across the
//! controller tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sale_core::resolver::{PriceQuote, PriceResolver};
use sale_core::{CustomerId, ProductId, ResolveError, StoredId};

use crate::fields::{FormFields, Notifier, PriceFieldStatus};

#[derive(Debug, Default)]
struct FieldState {
    product: Option<String>,
    customer: Option<String>,
    stored_id: Option<String>,
    price: String,
    quantity: String,
    total: String,
    status: PriceFieldStatus,
}

/// Widget-row double with shared interior state, so a test (or a scripted
/// resolver hook) can mutate fields while a lookup is in flight.
#[derive(Clone, Default)]
pub struct FakeFields {
    state: Arc<Mutex<FieldState>>,
}

impl FakeFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_product(&self, id: Option<&str>) {
        self.state.lock().unwrap().product = id.map(String::from);
    }

    pub fn set_customer(&self, id: Option<&str>) {
        self.state.lock().unwrap().customer = id.map(String::from);
    }

    pub fn set_stored_id(&self, id: Option<&str>) {
        self.state.lock().unwrap().stored_id = id.map(String::from);
    }

    /// Pokes text into the price widget, as a user keystroke would.
    pub fn type_price(&self, text: &str) {
        self.state.lock().unwrap().price = text.to_string();
    }

    pub fn type_quantity(&self, text: &str) {
        self.state.lock().unwrap().quantity = text.to_string();
    }

    pub fn set_status(&self, status: PriceFieldStatus) {
        self.state.lock().unwrap().status = status;
    }

    pub fn price(&self) -> String {
        self.state.lock().unwrap().price.clone()
    }

    pub fn total(&self) -> String {
        self.state.lock().unwrap().total.clone()
    }

    pub fn status(&self) -> PriceFieldStatus {
        self.state.lock().unwrap().status
    }
}

impl FormFields for FakeFields {
    fn product_id(&self) -> Option<ProductId> {
        self.state.lock().unwrap().product.as_deref().map(ProductId::from)
    }

    fn customer_id(&self) -> Option<CustomerId> {
        self.state.lock().unwrap().customer.as_deref().map(CustomerId::from)
    }

    fn stored_id(&self) -> Option<StoredId> {
        self.state.lock().unwrap().stored_id.as_deref().map(StoredId::from)
    }

    fn price_text(&self) -> String {
        self.price()
    }

    fn set_price_text(
        &mut self,
        value: &str,
    ) {
        self.state.lock().unwrap().price = value.to_string();
    }

    fn quantity_text(&self) -> String {
        self.state.lock().unwrap().quantity.clone()
    }

    fn set_total_text(
        &mut self,
        value: &str,
    ) {
        self.state.lock().unwrap().total = value.to_string();
    }

    fn price_status(&self) -> PriceFieldStatus {
        self.status()
    }

    fn set_price_status(
        &mut self,
        status: PriceFieldStatus,
    ) {
        self.state.lock().unwrap().status = status;
    }
}

type Hook = Box<dyn Fn() + Send + Sync>;

/// [`PriceResolver`] double fed with queued quotes, one per lookup.
///
/// Records every call as `"contract:C:P"` / `"catalog:P"`. An optional hook
/// runs while the lookup is "in flight", which is how the fencing tests
/// change the selection under a pending request.
#[derive(Default)]
pub struct ScriptedResolver {
    contract: Mutex<VecDeque<PriceQuote>>,
    catalog: Mutex<VecDeque<PriceQuote>>,
    calls: Mutex<Vec<String>>,
    on_lookup: Mutex<Option<Hook>>,
}

impl ScriptedResolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_contract(&self, quote: PriceQuote) {
        self.contract.lock().unwrap().push_back(quote);
    }

    pub fn push_catalog(&self, quote: PriceQuote) {
        self.catalog.lock().unwrap().push_back(quote);
    }

    pub fn on_lookup(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.on_lookup.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn fire_hook(&self) {
        if let Some(hook) = &*self.on_lookup.lock().unwrap() {
            hook();
        }
    }

    fn next(queue: &Mutex<VecDeque<PriceQuote>>) -> PriceQuote {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ResolveError::NotFound("unscripted lookup".to_string())))
    }
}

#[async_trait]
impl PriceResolver for ScriptedResolver {
    async fn contract_price(
        &self,
        customer_id: &CustomerId,
        product_id: &ProductId,
    ) -> PriceQuote {
        self.calls
            .lock()
            .unwrap()
            .push(format!("contract:{customer_id}:{product_id}"));
        self.fire_hook();
        Self::next(&self.contract)
    }

    async fn catalog_price(
        &self,
        product_id: &ProductId,
    ) -> PriceQuote {
        self.calls.lock().unwrap().push(format!("catalog:{product_id}"));
        self.fire_hook();
        Self::next(&self.catalog)
    }
}

/// [`Notifier`] double that records every blocking notice.
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(
        &self,
        message: &str,
    ) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
