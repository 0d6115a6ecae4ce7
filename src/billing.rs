//! Billing boundary.
//!
//! Shaped like a real subscription SDK so a store-backed provider can be
//! swapped in later without touching callers. The core only ever consumes
//! the `is_pro` signal; purchase mechanics stay behind this trait.

use crate::core::StateStore;
use crate::models::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlements {
    pub is_pro: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub purchased: bool,
}

pub trait BillingProvider {
    /// Read the current customer entitlements.
    fn entitlements(&self) -> anyhow::Result<Entitlements>;

    /// Present the paywall and process a purchase, reporting whether the
    /// user completed it.
    fn present_paywall(&self) -> anyhow::Result<PurchaseOutcome>;

    /// Restore previous purchases, returning the resulting entitlements.
    fn restore_purchases(&self) -> anyhow::Result<Entitlements>;
}

/// Offline mock backed by the local state store. Purchases always succeed
/// and persist immediately; restore just re-reads the persisted flag.
#[derive(Debug, Clone)]
pub struct LocalBilling {
    store: StateStore,
}

impl LocalBilling {
    pub fn new(store: StateStore) -> Self {
        LocalBilling { store }
    }

    fn read_state(&self) -> AppState {
        self.store.load()
    }
}

impl BillingProvider for LocalBilling {
    fn entitlements(&self) -> anyhow::Result<Entitlements> {
        Ok(Entitlements {
            is_pro: self.read_state().is_pro,
        })
    }

    fn present_paywall(&self) -> anyhow::Result<PurchaseOutcome> {
        self.store.set_pro_status(true)?;
        Ok(PurchaseOutcome { purchased: true })
    }

    fn restore_purchases(&self) -> anyhow::Result<Entitlements> {
        Ok(Entitlements {
            is_pro: self.read_state().is_pro,
        })
    }
}
