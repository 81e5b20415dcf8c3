//! Depletion (runway) detection and classification

use super::points::Projection;
use serde::{Deserialize, Serialize};

/// Lower runway bound for the Warning band, in days
const DANGER_THRESHOLD_DAYS: u32 = 15;

/// Upper runway bound for the Warning band, in days
const WARNING_THRESHOLD_DAYS: u32 = 45;

/// Runway classification bands; thresholds are fixed design constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunwayBand {
    /// Depletion within 15 days
    Danger,
    /// Depletion within 15-45 days
    Warning,
    /// Depletion beyond 45 days, or never within the horizon
    Safe,
}

impl RunwayBand {
    /// Classify a depletion day; `None` means no depletion in the horizon
    pub fn classify(depletion_day: Option<u32>) -> Self {
        match depletion_day {
            Some(day) if day < DANGER_THRESHOLD_DAYS => RunwayBand::Danger,
            Some(day) if day <= WARNING_THRESHOLD_DAYS => RunwayBand::Warning,
            _ => RunwayBand::Safe,
        }
    }
}

/// Find the first day the projected balance is non-positive
///
/// Returns `None` when the balance stays positive through the whole
/// horizon; callers render that as "growing". Never confused with a hit at
/// day 0, which is reported as `Some(0)`.
pub fn find_depletion_day(projection: &Projection) -> Option<u32> {
    projection
        .points()
        .iter()
        .find(|point| point.balance <= 0.0)
        .map(|point| point.day_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::points::ProjectionPoint;
    use chrono::NaiveDate;

    fn projection_of(balances: &[f64]) -> Projection {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Projection::from_points(
            balances
                .iter()
                .enumerate()
                .map(|(i, &balance)| ProjectionPoint {
                    day_offset: i as u32,
                    date: start + chrono::Duration::days(i as i64),
                    balance,
                })
                .collect(),
        )
    }

    #[test]
    fn test_first_non_positive_day() {
        let projection = projection_of(&[100.0, 50.0, 0.0, -50.0]);
        assert_eq!(find_depletion_day(&projection), Some(2));
    }

    #[test]
    fn test_none_when_always_positive() {
        let projection = projection_of(&[100.0, 150.0, 200.0]);
        assert_eq!(find_depletion_day(&projection), None);
    }

    #[test]
    fn test_day_zero_depletion_is_reported() {
        let projection = projection_of(&[-10.0, 40.0, 90.0]);
        assert_eq!(find_depletion_day(&projection), Some(0));
    }

    #[test]
    fn test_depletion_consistency() {
        let projection = projection_of(&[30.0, 20.0, 10.0, -5.0, 5.0]);
        let day = find_depletion_day(&projection).unwrap();
        assert!(projection.balance_on(day) <= 0.0);
        for earlier in 0..day {
            assert!(projection.balance_on(earlier) > 0.0);
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(RunwayBand::classify(Some(0)), RunwayBand::Danger);
        assert_eq!(RunwayBand::classify(Some(14)), RunwayBand::Danger);
        assert_eq!(RunwayBand::classify(Some(15)), RunwayBand::Warning);
        assert_eq!(RunwayBand::classify(Some(45)), RunwayBand::Warning);
        assert_eq!(RunwayBand::classify(Some(46)), RunwayBand::Safe);
        assert_eq!(RunwayBand::classify(None), RunwayBand::Safe);
    }
}
