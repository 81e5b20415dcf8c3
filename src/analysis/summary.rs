//! Summary ratios derived from a profile
//!
//! Ratio denominators of zero are special-cased to sentinels (0% or
//! `None`), never NaN or infinity.

use crate::profile::{FinancialProfile, DAYS_PER_MONTH};
use serde::{Deserialize, Serialize};

/// Headline figures and ratios for display and the advisory context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub monthly_income: f64,
    pub fixed_monthly_total: f64,
    pub variable_monthly_total: f64,
    pub monthly_surplus: f64,

    /// Surplus as a percentage of income; 0 when income is 0
    pub savings_rate_pct: f64,

    /// Current balance over fixed monthly obligations; `None` when there
    /// are no fixed obligations (coverage is effectively infinite)
    pub survival_fund_months: Option<f64>,

    /// Fixed obligations as a percentage of income; 0 when income is 0
    pub fixed_load_ratio_pct: f64,

    /// Income remaining after fixed obligations
    pub safety_margin: f64,

    /// Monthly surplus spread over a 30-day month
    pub daily_net: f64,
}

/// Compute all summary ratios for a profile
pub fn summarize(profile: &FinancialProfile) -> FinancialSummary {
    let metrics = profile.monthly_metrics();

    let savings_rate_pct = if metrics.monthly_income > 0.0 {
        metrics.monthly_surplus / metrics.monthly_income * 100.0
    } else {
        0.0
    };

    let survival_fund_months = if metrics.fixed_monthly_total > 0.0 {
        Some(profile.current_balance / metrics.fixed_monthly_total)
    } else {
        None
    };

    let fixed_load_ratio_pct = if metrics.monthly_income > 0.0 {
        metrics.fixed_monthly_total / metrics.monthly_income * 100.0
    } else {
        0.0
    };

    FinancialSummary {
        monthly_income: metrics.monthly_income,
        fixed_monthly_total: metrics.fixed_monthly_total,
        variable_monthly_total: metrics.variable_monthly_total,
        monthly_surplus: metrics.monthly_surplus,
        savings_rate_pct,
        survival_fund_months,
        fixed_load_ratio_pct,
        safety_margin: metrics.monthly_income - metrics.fixed_monthly_total,
        daily_net: metrics.monthly_surplus / DAYS_PER_MONTH,
    }
}
