use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{CustomerId, ProductId, StoredId};
use crate::pricing::{self, CurrencyFormat};

/// Where the current unit price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceOrigin {
    /// Set by a remote lookup; eligible to be silently replaced.
    Auto,
    /// Typed or confirmed by the user; never silently replaced.
    Manual,
}

impl PriceOrigin {
    /// Starting origin for a freshly rendered line item.
    ///
    /// A persisted item, or one that already carries a price, starts
    /// [`Manual`](Self::Manual): its price is authoritative and must not be
    /// overwritten by a lookup. Only a blank, unstored item starts
    /// [`Auto`](Self::Auto).
    pub fn initial(
        persisted: bool,
        has_price: bool,
    ) -> Self {
        if persisted || has_price {
            Self::Manual
        } else {
            Self::Auto
        }
    }
}

/// One product + quantity + price entry within a sale.
///
/// Mirrors the fields of a line-item row (or the standalone line-item form).
/// The widgets remain the source of truth for raw text; this entity holds the
/// parsed values plus the state the widgets cannot express: the price origin
/// and the stored identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: Option<ProductId>,
    pub customer_id: Option<CustomerId>,
    pub unit_price: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub price_origin: PriceOrigin,
    /// Identifier under which this line item is already stored. Presence
    /// makes the item "persisted": its price is never auto-filled.
    pub stored_id: Option<StoredId>,
}

impl LineItem {
    /// A freshly added, unstored line item. Eligible for auto-pricing.
    pub fn blank() -> Self {
        Self {
            product_id: None,
            customer_id: None,
            unit_price: None,
            quantity: None,
            price_origin: PriceOrigin::Auto,
            stored_id: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.stored_id.is_some()
    }

    /// Line total, when both operands are present.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use sale_core::LineItem;
    ///
    /// let mut item = LineItem::blank();
    /// item.unit_price = Some(dec!(1234.5));
    /// item.quantity = Some(dec!(2));
    ///
    /// assert_eq!(item.total(), Some(dec!(2469.00)));
    /// ```
    pub fn total(&self) -> Option<Decimal> {
        match (self.unit_price, self.quantity) {
            (Some(price), Some(quantity)) => Some(pricing::line_total(price, quantity)),
            _ => None,
        }
    }

    /// Display string for the total. A missing or unparseable operand yields
    /// the canonical zero amount, never an error.
    pub fn total_display(
        &self,
        format: &CurrencyFormat,
    ) -> String {
        match self.total() {
            Some(total) => format.format(total),
            None => format.zero(),
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // PriceOrigin::initial tests
    // =========================================================================

    #[test]
    fn initial_is_auto_for_blank_unstored_item() {
        let origin = PriceOrigin::initial(false, false);

        assert_eq!(origin, PriceOrigin::Auto);
    }

    #[test]
    fn initial_is_manual_for_persisted_item() {
        let origin = PriceOrigin::initial(true, false);

        assert_eq!(origin, PriceOrigin::Manual);
    }

    #[test]
    fn initial_is_manual_when_a_price_already_exists() {
        let origin = PriceOrigin::initial(false, true);

        assert_eq!(origin, PriceOrigin::Manual);
    }

    // =========================================================================
    // LineItem tests
    // =========================================================================

    #[test]
    fn blank_item_starts_auto_and_unpersisted() {
        let item = LineItem::blank();

        assert_eq!(item.price_origin, PriceOrigin::Auto);
        assert!(!item.is_persisted());
        assert_eq!(item.total(), None);
    }

    #[test]
    fn stored_id_makes_item_persisted() {
        let item = LineItem {
            stored_id: Some("42".into()),
            ..LineItem::blank()
        };

        assert!(item.is_persisted());
    }

    #[test]
    fn total_multiplies_and_rounds_to_cents() {
        let item = LineItem {
            unit_price: Some(dec!(19.9)),
            quantity: Some(dec!(3)),
            ..LineItem::blank()
        };

        assert_eq!(item.total(), Some(dec!(59.70)));
    }

    #[test]
    fn total_is_none_when_price_missing() {
        let item = LineItem {
            quantity: Some(dec!(3)),
            ..LineItem::blank()
        };

        assert_eq!(item.total(), None);
    }

    #[test]
    fn total_is_none_when_quantity_missing() {
        let item = LineItem {
            unit_price: Some(dec!(19.9)),
            ..LineItem::blank()
        };

        assert_eq!(item.total(), None);
    }

    #[test]
    fn total_display_formats_with_separators() {
        let item = LineItem {
            unit_price: Some(dec!(1234.5)),
            quantity: Some(dec!(2)),
            ..LineItem::blank()
        };

        let display = item.total_display(&CurrencyFormat::default());

        assert_eq!(display, "R$ 2.469,00");
    }

    #[test]
    fn total_display_falls_back_to_canonical_zero() {
        let item = LineItem::blank();

        let display = item.total_display(&CurrencyFormat::default());

        assert_eq!(display, "R$ 0,00");
    }
}
