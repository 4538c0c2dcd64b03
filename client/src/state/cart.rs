//! Service cart shared between the services and checkout pages.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::util::catalog::{Service, find_service};

/// Sales tax applied at checkout, in percent.
pub const TAX_PERCENT: u64 = 8;

/// Selected service ids in insertion order. Each service appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub items: Vec<u32>,
}

impl CartState {
    /// Add `service_id` unless it is already present.
    pub fn add(&mut self, service_id: u32) {
        if !self.contains(service_id) {
            self.items.push(service_id);
        }
    }

    pub fn remove(&mut self, service_id: u32) {
        self.items.retain(|id| *id != service_id);
    }

    #[must_use]
    pub fn contains(&self, service_id: u32) -> bool {
        self.items.contains(&service_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Services in the cart. Ids missing from the catalog are skipped.
    #[must_use]
    pub fn services(&self) -> Vec<&'static Service> {
        self.items.iter().filter_map(|id| find_service(*id)).collect()
    }

    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_subtotal(self.services().iter().map(|s| s.price_cents).sum())
    }
}

/// Checkout totals in cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal_cents: u64,
    pub tax_cents: u64,
    pub total_cents: u64,
}

impl OrderSummary {
    /// Tax is rounded half-up to the nearest cent.
    #[must_use]
    pub fn from_subtotal(subtotal_cents: u64) -> Self {
        let tax_cents = (subtotal_cents * TAX_PERCENT + 50) / 100;
        Self { subtotal_cents, tax_cents, total_cents: subtotal_cents + tax_cents }
    }
}
