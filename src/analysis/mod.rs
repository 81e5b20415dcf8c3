//! Derived analytics over a profile and its projection

pub mod health;
pub mod liabilities;
pub mod summary;

pub use health::score_health;
pub use liabilities::{schedule_liabilities, LiabilityView, Urgency};
pub use summary::{summarize, FinancialSummary};
