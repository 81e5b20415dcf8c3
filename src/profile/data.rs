//! Financial profile data structures
//!
//! A `FinancialProfile` is an immutable snapshot of one person's finances
//! for one computation. The projection core never mutates it and performs
//! no validation of its own: normalization happens at the boundary (see
//! `profile::loader`).

use serde::{Deserialize, Serialize};

/// Days per month used for all monthly/daily conversions.
///
/// A fixed 30-day month, matching the scheduler's proximity normalization.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// How income arrives for this profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeMode {
    /// Fixed monthly amount credited on a payday
    Salaried,
    /// Fixed monthly amount credited on a payday
    Business,
    /// Weekly amount, smeared into a daily inflow
    Freelance,
}

impl IncomeMode {
    /// Whether income lands on a fixed day of month
    pub fn has_payday(&self) -> bool {
        !matches!(self, IncomeMode::Freelance)
    }
}

/// A recurring fixed obligation due on a specific day of month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedLiability {
    /// Unique identifier within the profile
    pub id: String,

    /// Display title (e.g. "Rent")
    pub title: String,

    /// Amount deducted each time the liability fires (non-negative)
    pub amount: f64,

    /// Calendar day of month the liability is due (1-31)
    pub due_day_of_month: u32,
}

/// Immutable input snapshot for one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Income cadence
    pub income_mode: IncomeMode,

    /// Weekly amount for Freelance, monthly amount otherwise (non-negative)
    pub income_amount: f64,

    /// Calendar day income is credited (1-31); ignored for Freelance
    pub payday_day_of_month: u32,

    /// Balance today; may be negative
    pub current_balance: f64,

    /// Variable spend applied every simulated day (non-negative)
    pub daily_variable_spend: f64,

    /// Fixed monthly obligations, in input order
    pub fixed_liabilities: Vec<FixedLiability>,
}

impl FinancialProfile {
    /// Daily income inflow; zero unless Freelance
    pub fn daily_income_inflow(&self) -> f64 {
        match self.income_mode {
            IncomeMode::Freelance => self.income_amount / 7.0,
            _ => 0.0,
        }
    }

    /// Income normalized to a monthly figure
    ///
    /// Freelance weekly income is smeared daily and scaled to a 30-day
    /// month; Salaried/Business income is already monthly.
    pub fn monthly_income(&self) -> f64 {
        match self.income_mode {
            IncomeMode::Freelance => self.daily_income_inflow() * DAYS_PER_MONTH,
            _ => self.income_amount,
        }
    }

    /// Sum of all fixed liability amounts
    pub fn fixed_monthly_total(&self) -> f64 {
        self.fixed_liabilities.iter().map(|l| l.amount).sum()
    }

    /// Variable spend normalized to a 30-day month
    pub fn variable_monthly_total(&self) -> f64 {
        self.daily_variable_spend * DAYS_PER_MONTH
    }

    /// Monthly income less fixed and variable outflows
    pub fn monthly_surplus(&self) -> f64 {
        self.monthly_income() - self.fixed_monthly_total() - self.variable_monthly_total()
    }

    /// All derived monthly figures in one pass
    pub fn monthly_metrics(&self) -> MonthlyMetrics {
        let monthly_income = self.monthly_income();
        let fixed_monthly_total = self.fixed_monthly_total();
        let variable_monthly_total = self.variable_monthly_total();
        MonthlyMetrics {
            monthly_income,
            fixed_monthly_total,
            variable_monthly_total,
            monthly_surplus: monthly_income - fixed_monthly_total - variable_monthly_total,
        }
    }
}

/// Derived monthly figures for a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetrics {
    pub monthly_income: f64,
    pub fixed_monthly_total: f64,
    pub variable_monthly_total: f64,
    pub monthly_surplus: f64,
}

/// A hypothetical one-time expenditure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseQuery {
    /// Purchase price (positive)
    pub price: f64,

    /// Display label (e.g. "New laptop")
    pub label: String,

    /// Earliest day offset the purchase may be realized; 0 = "act now"
    pub delay_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn freelance_profile() -> FinancialProfile {
        FinancialProfile {
            income_mode: IncomeMode::Freelance,
            income_amount: 7000.0,
            payday_day_of_month: 1,
            current_balance: 5000.0,
            daily_variable_spend: 900.0,
            fixed_liabilities: vec![],
        }
    }

    #[test]
    fn test_freelance_income_normalization() {
        let profile = freelance_profile();
        assert_relative_eq!(profile.daily_income_inflow(), 1000.0);
        assert_relative_eq!(profile.monthly_income(), 30_000.0);
        assert_relative_eq!(profile.monthly_surplus(), 3000.0);
    }

    #[test]
    fn test_salaried_income_is_monthly() {
        let profile = FinancialProfile {
            income_mode: IncomeMode::Salaried,
            income_amount: 50_000.0,
            payday_day_of_month: 1,
            current_balance: 10_000.0,
            daily_variable_spend: 500.0,
            fixed_liabilities: vec![FixedLiability {
                id: "rent".into(),
                title: "Rent".into(),
                amount: 15_000.0,
                due_day_of_month: 5,
            }],
        };
        assert_relative_eq!(profile.daily_income_inflow(), 0.0);
        assert_relative_eq!(profile.monthly_income(), 50_000.0);
        assert_relative_eq!(profile.fixed_monthly_total(), 15_000.0);
        assert_relative_eq!(profile.monthly_surplus(), 50_000.0 - 15_000.0 - 15_000.0);
    }

    #[test]
    fn test_metrics_match_individual_accessors() {
        let profile = freelance_profile();
        let m = profile.monthly_metrics();
        assert_relative_eq!(m.monthly_income, profile.monthly_income());
        assert_relative_eq!(m.monthly_surplus, profile.monthly_surplus());
    }
}
