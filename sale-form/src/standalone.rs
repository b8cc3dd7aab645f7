use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use sale_core::pricing::{format_price_field, parse_amount};
use sale_core::{PriceResolver, ResolveError};

use crate::fields::{FormFields, Notifier, PriceFieldStatus};

/// Delay before a Success mark clears.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(1);
/// Delay before an Error mark clears, when the field is still in Error.
pub const ERROR_RESET_DELAY: Duration = Duration::from_secs(2);

/// Deferred clearing of the price field's status mark.
///
/// Returned by the resolution methods; the host schedules it after `delay`
/// (see [`run_status_reset`]). Applying is always safe: the field's current
/// state is checked first, so a reset that outlived the status it was
/// scheduled for is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReset {
    pub delay: Duration,
    /// When set, the mark only clears if the field still shows this status.
    pub only_if: Option<PriceFieldStatus>,
}

/// Controller for the standalone line-item form.
///
/// Page-scoped sibling of [`RowController`](crate::row::RowController): one
/// customer field, one product field, one price field, one manual-edit flag.
/// Unlike the row controller there is no stored-id short-circuit and no path
/// that clears the flag on deselection; the only reset is a successful
/// resolution.
pub struct StandaloneController<F> {
    fields: F,
    resolver: Arc<dyn PriceResolver>,
    notifier: Arc<dyn Notifier>,
    manual_price: bool,
}

impl<F: FormFields> StandaloneController<F> {
    pub fn new(
        fields: F,
        resolver: Arc<dyn PriceResolver>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            fields,
            resolver,
            notifier,
            manual_price: false,
        }
    }

    /// Page-load entry point. `editing` is the host's signal that an
    /// existing record is open (a nonzero price on such a page is the
    /// user's and must not be overwritten). When customer and product are
    /// already selected and the price is empty or zero, resolution runs
    /// once automatically.
    pub async fn on_load(
        &mut self,
        editing: bool,
    ) -> Option<StatusReset> {
        self.manual_price = editing && self.has_nonzero_price();

        if self.fields.customer_id().is_some()
            && self.fields.product_id().is_some()
            && !self.has_nonzero_price()
        {
            return self.resolve_price().await;
        }
        None
    }

    /// Any direct edit of the price field pins it until the next
    /// successful resolution.
    pub fn on_price_edited(&mut self) {
        self.manual_price = true;
    }

    pub async fn on_customer_changed(&mut self) -> Option<StatusReset> {
        self.resolve_price().await
    }

    pub async fn on_product_changed(&mut self) -> Option<StatusReset> {
        self.resolve_price().await
    }

    pub fn is_manual(&self) -> bool {
        self.manual_price
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Requests the contract price and applies it to the form.
    ///
    /// No-ops unless both customer and product are selected, and when the
    /// price was edited manually. While the request is in flight the field
    /// shows Pending; the outcome flips it to Success or Error and the
    /// returned [`StatusReset`] tells the host when to clear the mark.
    pub async fn resolve_price(&mut self) -> Option<StatusReset> {
        let (Some(customer_id), Some(product_id)) =
            (self.fields.customer_id(), self.fields.product_id())
        else {
            return None;
        };

        if self.manual_price {
            debug!("price was edited manually; skipping auto-resolution");
            return None;
        }

        self.fields.set_price_status(PriceFieldStatus::Pending);
        debug!(%customer_id, %product_id, "requesting contract price");
        let quote = self.resolver.contract_price(&customer_id, &product_id).await;

        if self.fields.customer_id().as_ref() != Some(&customer_id)
            || self.fields.product_id().as_ref() != Some(&product_id)
        {
            // A newer selection owns the field now.
            debug!("discarding stale price quote after selection change");
            return None;
        }

        match quote {
            Ok(price) => {
                self.fields.set_price_text(&format_price_field(price));
                self.fields.set_price_status(PriceFieldStatus::Success);
                // A fresh auto-filled price may be replaced by later lookups.
                self.manual_price = false;
                Some(StatusReset {
                    delay: SUCCESS_RESET_DELAY,
                    only_if: None,
                })
            }
            Err(err) => {
                self.fields.set_price_status(PriceFieldStatus::Error);
                match &err {
                    ResolveError::NotFound(message) => {
                        warn!(%message, "contract price not found");
                        self.notifier.alert(&format!("Notice: {message}"));
                    }
                    other => {
                        warn!(%other, "contract price lookup failed");
                        self.notifier.alert(&format!("Error: {other}"));
                    }
                }
                Some(StatusReset {
                    delay: ERROR_RESET_DELAY,
                    only_if: Some(PriceFieldStatus::Error),
                })
            }
        }
    }

    /// Applies a due [`StatusReset`]. Checks the field's current state, so
    /// firing after the form moved on (or the field vanished) is harmless.
    pub fn apply_status_reset(
        &mut self,
        reset: StatusReset,
    ) {
        if let Some(expected) = reset.only_if {
            if self.fields.price_status() != expected {
                return;
            }
        }
        self.fields.set_price_status(PriceFieldStatus::Idle);
    }

    fn has_nonzero_price(&self) -> bool {
        parse_amount(&self.fields.price_text()).is_some_and(|value| !value.is_zero())
    }
}

/// Fire-and-forget scheduling of a [`StatusReset`] on a shared controller.
pub async fn run_status_reset<F>(
    controller: Arc<tokio::sync::Mutex<StandaloneController<F>>>,
    reset: StatusReset,
) where
    F: FormFields + Send,
{
    tokio::time::sleep(reset.delay).await;
    controller.lock().await.apply_status_reset(reset);
}
