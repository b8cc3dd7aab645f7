use std::sync::Arc;

use sale_core::PriceResolver;
use sale_core::pricing::CurrencyFormat;

use crate::fields::{FormFields, Notifier};
use crate::row::RowController;

/// Key handed back when a row is inserted; stable for the row's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

/// Owns the controllers for a repeating line-item table.
///
/// The external repeating-row widget drives the lifecycle through explicit
/// notifications: it calls [`row_added`](Self::row_added) for every inserted
/// row (including rows present at first render) and
/// [`row_removed`](Self::row_removed) when one is taken out. Each row is
/// initialized exactly once, before any other event can reach it. Rows share
/// the resolver and notifier; nothing else is shared across them.
pub struct RowCollection<F> {
    rows: Vec<(RowKey, RowController<F>)>,
    next_key: u64,
    currency: CurrencyFormat,
    resolver: Arc<dyn PriceResolver>,
    notifier: Arc<dyn Notifier>,
}

impl<F: FormFields> RowCollection<F> {
    pub fn new(
        currency: CurrencyFormat,
        resolver: Arc<dyn PriceResolver>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            rows: Vec::new(),
            next_key: 0,
            currency,
            resolver,
            notifier,
        }
    }

    /// Row-added notification. Builds and initializes the controller and
    /// returns the key the host uses to route later events.
    pub fn row_added(
        &mut self,
        fields: F,
    ) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;

        let mut controller = RowController::new(
            fields,
            self.currency.clone(),
            Arc::clone(&self.resolver),
            Arc::clone(&self.notifier),
        );
        controller.initialize();

        self.rows.push((key, controller));
        key
    }

    /// Row-removed notification. Returns false when the key was already
    /// gone (a duplicate removal is not an error for the host).
    pub fn row_removed(
        &mut self,
        key: RowKey,
    ) -> bool {
        match self.rows.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn row(
        &self,
        key: RowKey,
    ) -> Option<&RowController<F>> {
        self.rows
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, controller)| controller)
    }

    pub fn row_mut(
        &mut self,
        key: RowKey,
    ) -> Option<&mut RowController<F>> {
        self.rows
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, controller)| controller)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
