//! Composite financial health score
//!
//! Three weighted, independently-capped terms summed and clamped to
//! [0, 100]: runway (max 50), savings rate (max 30), survival-fund
//! coverage (max 20). Pure and deterministic; no failure modes.

/// Runway beyond which the runway term is maxed out, in days
const FULL_RUNWAY_DAYS: u32 = 180;

/// Score a profile's health
///
/// `depletion_day` of `None` means no depletion within the horizon.
/// `survival_fund_months` of `None` means fixed obligations are zero, so
/// coverage is effectively infinite and the term is maximal.
pub fn score_health(
    depletion_day: Option<u32>,
    savings_rate_pct: f64,
    survival_fund_months: Option<f64>,
) -> u8 {
    let runway_term = match depletion_day {
        None => 50.0,
        Some(day) if day > FULL_RUNWAY_DAYS => 50.0,
        Some(day) => (day as f64 * 0.28).min(50.0),
    };

    let savings_term = if savings_rate_pct >= 20.0 {
        30.0
    } else if savings_rate_pct > 0.0 {
        (savings_rate_pct * 1.5).min(30.0)
    } else {
        0.0
    };

    let survival_term = match survival_fund_months {
        None => 20.0,
        Some(months) if months >= 6.0 => 20.0,
        Some(months) if months > 0.0 => (months * 3.0).min(20.0),
        Some(_) => 0.0,
    };

    (runway_term + savings_term + survival_term).clamp(0.0, 100.0).round() as u8
}
