//! MoneyPulse - Deterministic cash-flow projection engine for personal finances
//!
//! This library provides:
//! - Day-by-day balance projections from a financial profile
//! - Depletion (runway) detection with fixed classification bands
//! - Purchase affordability checks and optimal-timing search
//! - A composite 0-100 financial health score
//! - Fixed-liability scheduling by proximity and urgency
//! - A serializable context boundary for an external advisory service
//!
//! All core computation is synchronous, pure, and deterministic: identical
//! inputs always produce identical projections and derived outputs. "Today"
//! is an explicit input so nothing in the core reads the wall clock.

pub mod advisory;
pub mod analysis;
pub mod assessment;
pub mod profile;
pub mod projection;

// Re-export commonly used types
pub use assessment::{assess, Assessment, AssessmentRunner, PurchaseVerdict};
pub use profile::{FinancialProfile, FixedLiability, IncomeMode, PurchaseQuery};
pub use projection::{Projection, ProjectionPoint, ProjectionSimulator, RunwayBand};
