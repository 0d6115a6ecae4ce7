mod store;

pub use store::{FREE_HISTORY_LIMIT, FREE_MONTHLY_LIMIT, StateStore, correct_for_current_month};
