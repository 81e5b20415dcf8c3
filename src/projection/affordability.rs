//! Purchase affordability and optimal-timing search
//!
//! Both searches are read-only over a master projection. The price is
//! modeled as a single virtual deduction carried from the delay point
//! forward: the question is whether living on the reduced balance ever
//! goes non-positive, not what happens on one date.

use super::depletion::find_depletion_day;
use super::points::Projection;
use crate::profile::PurchaseQuery;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Look-ahead confirming a purchase preserves the full safety buffer
pub const SAFE_LOOKAHEAD_DAYS: u32 = 45;

/// Looser look-ahead confirming only that depletion is avoided
const SURVIVAL_LOOKAHEAD_DAYS: u32 = 30;

/// Timing search horizon when the monthly budget runs a surplus
const SURPLUS_SEARCH_HORIZON_DAYS: u32 = 365;

/// Timing search horizon when the budget is structurally deficient; a
/// deficit is not expected to recover on its own
const DEFICIT_SEARCH_HORIZON_DAYS: u32 = 60;

/// Which criterion an optimal purchase day satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowKind {
    /// Purchase leaves the 45-day safety buffer intact
    Safe,
    /// Purchase avoids outright depletion over 30 days, nothing more
    Survival,
}

/// Earliest day a purchase can be made under one of the two criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseWindow {
    pub day: u32,
    pub date: NaiveDate,
    pub kind: WindowKind,
}

/// Depletion day carrying the purchase as a virtual deduction
///
/// If the baseline already depletes before `delay_days` the purchase is
/// moot for this measurement and the baseline day is returned unchanged.
/// `None` means the purchase never causes depletion within the horizon.
pub fn simulate_affordability(projection: &Projection, query: &PurchaseQuery) -> Option<u32> {
    let baseline = find_depletion_day(projection);
    if let Some(day) = baseline {
        if day < query.delay_days {
            return baseline;
        }
    }

    projection
        .points()
        .iter()
        .skip(query.delay_days as usize)
        .find(|point| point.balance - query.price <= 0.0)
        .map(|point| point.day_offset)
}

/// Whether the reduced balance stays positive over `[day, day + lookahead]`
fn holds_through_lookahead(
    projection: &Projection,
    day: u32,
    price: f64,
    lookahead: u32,
) -> bool {
    let end = (day + lookahead).min(projection.horizon_end());
    (day..=end).all(|k| projection.balance_on(k) - price > 0.0)
}

/// Search for the earliest viable purchase day
///
/// Two-tier policy, first match wins: a Safe window preserving the 45-day
/// buffer, then a Survival window that merely avoids depletion over 30
/// days. `None` means no window exists within the search horizon and the
/// caller should surface "requires a savings plan".
pub fn find_optimal_date(
    projection: &Projection,
    query: &PurchaseQuery,
    monthly_surplus: f64,
) -> Option<PurchaseWindow> {
    let search_horizon = if monthly_surplus > 0.0 {
        SURPLUS_SEARCH_HORIZON_DAYS
    } else {
        DEFICIT_SEARCH_HORIZON_DAYS
    }
    .min(projection.horizon_end());

    let tiers = [
        (WindowKind::Safe, SAFE_LOOKAHEAD_DAYS),
        (WindowKind::Survival, SURVIVAL_LOOKAHEAD_DAYS),
    ];

    for (kind, lookahead) in tiers {
        for day in 1..=search_horizon {
            if projection.balance_on(day) >= query.price
                && holds_through_lookahead(projection, day, query.price, lookahead)
            {
                log::debug!(
                    "purchase window for '{}' at day {} ({:?})",
                    query.label,
                    day,
                    kind
                );
                return projection.point(day).map(|point| PurchaseWindow {
                    day,
                    date: point.date,
                    kind,
                });
            }
        }
    }

    None
}
