//! Core simulator for day-by-day balance projections

use super::points::{Projection, ProjectionPoint};
use crate::profile::{FinancialProfile, IncomeMode};
use chrono::{Datelike, Duration, NaiveDate};

/// Master projection horizon in days (~10 years)
///
/// Long enough that "never depletes" is distinguishable from "depletes far
/// in the future" with high confidence.
pub const MASTER_HORIZON_DAYS: u32 = 3650;

/// Display window in days, sliced from the master projection
pub const CHART_WINDOW_DAYS: u32 = 180;

/// Advances a starting balance day by day, applying income, variable
/// spend, and fixed liabilities in a fixed order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionSimulator;

impl ProjectionSimulator {
    pub fn new() -> Self {
        Self
    }

    /// Build a projection of `horizon_days + 1` points starting at `today`
    ///
    /// Day 0 records `current_balance` unmodified. Each later day applies,
    /// in order: income, daily variable spend, then every liability due
    /// that calendar day. Day-of-month matching is literal integer
    /// equality: a due day of 31 never fires in a 30-day month. This is
    /// accepted behavior, preserved from the source system.
    ///
    /// Infallible and side-effect free; always returns the full length.
    pub fn simulate(
        &self,
        profile: &FinancialProfile,
        today: NaiveDate,
        horizon_days: u32,
    ) -> Projection {
        let mut points = Vec::with_capacity(horizon_days as usize + 1);
        let mut balance = profile.current_balance;
        let daily_inflow = profile.daily_income_inflow();
        let monthly_income = profile.monthly_income();

        for day in 0..=horizon_days {
            let date = today + Duration::days(day as i64);

            if day > 0 {
                match profile.income_mode {
                    IncomeMode::Freelance => balance += daily_inflow,
                    IncomeMode::Salaried | IncomeMode::Business => {
                        if date.day() == profile.payday_day_of_month {
                            balance += monthly_income;
                        }
                    }
                }

                balance -= profile.daily_variable_spend;

                for liability in &profile.fixed_liabilities {
                    if liability.due_day_of_month == date.day() {
                        balance -= liability.amount;
                    }
                }
            }

            points.push(ProjectionPoint {
                day_offset: day,
                date,
                balance,
            });
        }

        Projection::from_points(points)
    }
}
