pub mod billing;
pub mod catalog;
pub mod core;
pub mod importer;
pub mod matching;
pub mod models;
pub mod scaling;

pub use billing::{BillingProvider, Entitlements, LocalBilling, PurchaseOutcome};
pub use crate::core::{FREE_HISTORY_LIMIT, FREE_MONTHLY_LIMIT, StateStore, correct_for_current_month};
pub use matching::{DEFAULT_MAX_RESULTS, find_matches};
pub use models::{
    AisleCategory, AppState, AtkReference, Confidence, CookedSession, GroceryList, ImportQuota,
    Ingredient, Recipe, RecipeTag,
};
pub use scaling::scale;
