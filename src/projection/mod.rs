//! Day-by-day balance projection and its read-only analyzers

pub mod affordability;
pub mod depletion;
pub mod engine;
pub mod points;

pub use affordability::{find_optimal_date, simulate_affordability, PurchaseWindow, WindowKind};
pub use depletion::{find_depletion_day, RunwayBand};
pub use engine::{ProjectionSimulator, CHART_WINDOW_DAYS, MASTER_HORIZON_DAYS};
pub use points::{Projection, ProjectionPoint};
