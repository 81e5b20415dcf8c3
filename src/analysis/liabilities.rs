//! Fixed-liability scheduling by proximity and urgency
//!
//! Proximity uses a fixed 30-day-month approximation, intentionally not
//! calendar-accurate. Views are new objects; the input sequence is never
//! mutated or reordered.

use crate::profile::FixedLiability;
use serde::{Deserialize, Serialize};

/// Liabilities due within this many days are tagged Urgent
const URGENT_WITHIN_DAYS: i32 = 7;

/// How soon a liability needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    /// Due within 7 days
    Urgent,
    /// Due later
    Upcoming,
}

/// Read-only derived view of one fixed liability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiabilityView {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub due_day_of_month: u32,

    /// Days until the next occurrence, 30-day-month approximation
    pub days_until_next_occurrence: u32,

    /// Liability amount as a percentage of monthly income; 0 when income is 0
    pub income_share_ratio: f64,

    pub urgency: Urgency,
}

/// Order liabilities by proximity to their next occurrence
///
/// Stable ascending sort by `days_until_next_occurrence`; ties keep input
/// order.
pub fn schedule_liabilities(
    liabilities: &[FixedLiability],
    today_day_of_month: u32,
    monthly_income: f64,
) -> Vec<LiabilityView> {
    let mut views: Vec<LiabilityView> = liabilities
        .iter()
        .map(|liability| {
            let mut days_until = liability.due_day_of_month as i32 - today_day_of_month as i32;
            if days_until < 0 {
                days_until += 30;
            }
            let income_share_ratio = if monthly_income > 0.0 {
                liability.amount / monthly_income * 100.0
            } else {
                0.0
            };
            LiabilityView {
                id: liability.id.clone(),
                title: liability.title.clone(),
                amount: liability.amount,
                due_day_of_month: liability.due_day_of_month,
                days_until_next_occurrence: days_until as u32,
                income_share_ratio,
                urgency: if days_until < URGENT_WITHIN_DAYS {
                    Urgency::Urgent
                } else {
                    Urgency::Upcoming
                },
            }
        })
        .collect();

    // Vec::sort_by_key is stable, preserving input order on ties
    views.sort_by_key(|view| view.days_until_next_occurrence);
    views
}
