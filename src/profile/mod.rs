//! Financial profile input model and boundary loading

pub mod data;
pub mod loader;

pub use data::{FinancialProfile, FixedLiability, IncomeMode, MonthlyMetrics, PurchaseQuery, DAYS_PER_MONTH};
pub use loader::{load_saved_state, store_saved_state, ProfileError, RawLiability, RawProfile, SavedState};
