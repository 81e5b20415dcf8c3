//! Full assessment of a profile: one master projection, many read-only
//! consumers
//!
//! `assess` is a pure function from `(profile, purchase?, today, horizon)`
//! to a complete result bundle. The memoizing `AssessmentRunner` layered on
//! top avoids rebuilding the master projection for repeated queries, but
//! correctness never depends on the cache: recomputation always yields
//! identical results.

use crate::analysis::{schedule_liabilities, score_health, summarize, FinancialSummary, LiabilityView};
use crate::profile::{FinancialProfile, PurchaseQuery};
use crate::projection::{
    affordability::{find_optimal_date, simulate_affordability, PurchaseWindow, SAFE_LOOKAHEAD_DAYS},
    depletion::{find_depletion_day, RunwayBand},
    engine::{ProjectionSimulator, CHART_WINDOW_DAYS, MASTER_HORIZON_DAYS},
    points::{Projection, ProjectionPoint},
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Verdict on a prospective purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PurchaseVerdict {
    /// Purchase causes no near-term risk at the requested delay
    SafeNow,
    /// Risky at the requested delay; this is the earliest viable window
    DeferUntil(PurchaseWindow),
    /// No viable window within the search horizon
    RequiresSavingsPlan,
}

/// Assessment of one purchase query against the master projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseAssessment {
    pub label: String,
    pub price: f64,
    pub delay_days: u32,

    /// Depletion day carrying the purchase; `None` = always affordable
    pub depletion_day: Option<u32>,

    pub verdict: PurchaseVerdict,
}

/// Complete result bundle for one profile snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub summary: FinancialSummary,

    /// First day the baseline balance goes non-positive
    pub depletion_day: Option<u32>,
    pub depletion_date: Option<NaiveDate>,
    pub band: RunwayBand,

    /// Composite 0-100 health score
    pub health_score: u8,

    /// Liabilities ordered by proximity
    pub liabilities: Vec<LiabilityView>,

    /// 180-day display window sliced from the master projection
    pub chart: Vec<ProjectionPoint>,

    /// Present only when a purchase query was supplied
    pub purchase: Option<PurchaseAssessment>,
}

fn assess_purchase(
    projection: &Projection,
    query: &PurchaseQuery,
    monthly_surplus: f64,
) -> PurchaseAssessment {
    let depletion_day = simulate_affordability(projection, query);

    // Risk means the reduced balance depletes sooner than the safety
    // buffer past the delay point; only then is the timing search run.
    let risky = depletion_day
        .map(|day| day < query.delay_days.saturating_add(SAFE_LOOKAHEAD_DAYS))
        .unwrap_or(false);

    let verdict = if !risky {
        PurchaseVerdict::SafeNow
    } else {
        match find_optimal_date(projection, query, monthly_surplus) {
            Some(window) => PurchaseVerdict::DeferUntil(window),
            None => PurchaseVerdict::RequiresSavingsPlan,
        }
    };

    PurchaseAssessment {
        label: query.label.clone(),
        price: query.price,
        delay_days: query.delay_days,
        depletion_day,
        verdict,
    }
}

fn assess_with_projection(
    profile: &FinancialProfile,
    purchase: Option<&PurchaseQuery>,
    today: NaiveDate,
    projection: &Projection,
) -> Assessment {
    let summary = summarize(profile);
    let depletion_day = find_depletion_day(projection);
    let depletion_date =
        depletion_day.and_then(|day| projection.point(day).map(|point| point.date));
    let band = RunwayBand::classify(depletion_day);

    let health_score = score_health(
        depletion_day,
        summary.savings_rate_pct,
        summary.survival_fund_months,
    );

    let liabilities =
        schedule_liabilities(&profile.fixed_liabilities, today.day(), summary.monthly_income);

    let purchase = purchase.map(|query| assess_purchase(projection, query, summary.monthly_surplus));

    log::info!(
        "assessed profile: depletion={:?} band={:?} health={}",
        depletion_day,
        band,
        health_score
    );

    Assessment {
        summary,
        depletion_day,
        depletion_date,
        band,
        health_score,
        liabilities,
        chart: projection.window(CHART_WINDOW_DAYS).to_vec(),
        purchase,
    }
}

/// Assess a profile, optionally with a purchase query
///
/// Builds the master projection once; every consumer reads from it.
pub fn assess(
    profile: &FinancialProfile,
    purchase: Option<&PurchaseQuery>,
    today: NaiveDate,
    horizon_days: u32,
) -> Assessment {
    let projection = ProjectionSimulator::new().simulate(profile, today, horizon_days);
    assess_with_projection(profile, purchase, today, &projection)
}

/// Memoizing assessment runner
///
/// Keeps the last master projection keyed by input equality, so repeated
/// purchase queries against an unchanged profile skip the simulation.
///
/// # Example
/// ```ignore
/// let mut runner = AssessmentRunner::new();
/// let baseline = runner.assess(&profile, None, today);
/// let with_purchase = runner.assess(&profile, Some(&query), today);
/// ```
#[derive(Debug, Clone)]
pub struct AssessmentRunner {
    horizon_days: u32,
    cached: Option<(FinancialProfile, NaiveDate, Projection)>,
}

impl Default for AssessmentRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentRunner {
    /// Runner over the default master horizon
    pub fn new() -> Self {
        Self::with_horizon(MASTER_HORIZON_DAYS)
    }

    /// Runner over a custom horizon
    pub fn with_horizon(horizon_days: u32) -> Self {
        Self {
            horizon_days,
            cached: None,
        }
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Assess, reusing the cached master projection when inputs match
    pub fn assess(
        &mut self,
        profile: &FinancialProfile,
        purchase: Option<&PurchaseQuery>,
        today: NaiveDate,
    ) -> Assessment {
        let stale = match &self.cached {
            Some((cached_profile, cached_today, _)) => {
                cached_profile != profile || *cached_today != today
            }
            None => true,
        };
        if stale {
            self.cached = None;
        }

        let horizon_days = self.horizon_days;
        let (_, _, projection) = self.cached.get_or_insert_with(|| {
            log::debug!("master projection cache miss; simulating {} days", horizon_days);
            let projection = ProjectionSimulator::new().simulate(profile, today, horizon_days);
            (profile.clone(), today, projection)
        });
        assess_with_projection(profile, purchase, today, projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FixedLiability, IncomeMode};
    use crate::projection::affordability::WindowKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn salaried_danger_profile() -> FinancialProfile {
        // Scenario: payday already passed, rent due on the 5th wipes out
        // the balance before income arrives.
        FinancialProfile {
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
        }
    }

    fn freelance_growing_profile() -> FinancialProfile {
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
    fn test_salaried_danger_scenario() {
        let assessment = assess(&salaried_danger_profile(), None, today(), 365);
        let day = assessment.depletion_day.expect("must deplete");
        assert!((1..=5).contains(&day), "depletion day {} not in [1,5]", day);
        assert_eq!(assessment.band, RunwayBand::Danger);
    }

    #[test]
    fn test_freelance_growing_scenario() {
        // Net +100/day: never depletes, runway term maxed.
        let assessment = assess(&freelance_growing_profile(), None, today(), 3650);
        assert_eq!(assessment.depletion_day, None);
        assert_eq!(assessment.band, RunwayBand::Safe);
        // Runway 50 + savings 10% -> 15 + no fixed obligations -> 20.
        assert_eq!(assessment.health_score, 85);
    }

    #[test]
    fn test_safe_purchase_never_triggers_timing_search() {
        // Large balance, growing budget: a 20k purchase is riskless.
        let mut profile = freelance_growing_profile();
        profile.current_balance = 100_000.0;
        let query = PurchaseQuery {
            price: 20_000.0,
            label: "Laptop".into(),
            delay_days: 0,
        };
        let assessment = assess(&profile, Some(&query), today(), 3650);
        let purchase = assessment.purchase.unwrap();
        assert_eq!(purchase.depletion_day, None);
        assert_eq!(purchase.verdict, PurchaseVerdict::SafeNow);
    }

    #[test]
    fn test_deficit_budget_purchase_needs_savings_plan() {
        // Structurally deficient: balance only shrinks, price out of reach
        // within the 60-day shortened horizon.
        let profile = FinancialProfile {
            income_mode: IncomeMode::Salaried,
            income_amount: 10_000.0,
            payday_day_of_month: 1,
            current_balance: 4000.0,
            daily_variable_spend: 600.0,
            fixed_liabilities: vec![],
        };
        assert!(profile.monthly_surplus() <= 0.0);
        let query = PurchaseQuery {
            price: 50_000.0,
            label: "Bike".into(),
            delay_days: 0,
        };
        let assessment = assess(&profile, Some(&query), today(), 3650);
        let purchase = assessment.purchase.unwrap();
        assert_eq!(purchase.verdict, PurchaseVerdict::RequiresSavingsPlan);
    }

    #[test]
    fn test_risky_purchase_gets_deferral_window() {
        // Healthy surplus, but buying now erodes the buffer; a later day
        // must exist within the year.
        let profile = FinancialProfile {
            income_mode: IncomeMode::Salaried,
            income_amount: 60_000.0,
            payday_day_of_month: 1,
            current_balance: 12_000.0,
            daily_variable_spend: 700.0,
            fixed_liabilities: vec![FixedLiability {
                id: "rent".into(),
                title: "Rent".into(),
                amount: 20_000.0,
                due_day_of_month: 5,
            }],
        };
        assert!(profile.monthly_surplus() > 0.0);
        let query = PurchaseQuery {
            price: 11_000.0,
            label: "Phone".into(),
            delay_days: 0,
        };
        let assessment = assess(&profile, Some(&query), today(), 3650);
        let purchase = assessment.purchase.unwrap();
        match purchase.verdict {
            PurchaseVerdict::DeferUntil(window) => {
                assert!(window.day >= 1);
                assert!(matches!(window.kind, WindowKind::Safe | WindowKind::Survival));
            }
            other => panic!("expected deferral, got {:?}", other),
        }
    }

    #[test]
    fn test_extreme_delay_does_not_overflow_risk_check() {
        // A delay near u32::MAX with a baseline depletion must still
        // produce a verdict instead of overflowing the buffer arithmetic.
        let query = PurchaseQuery {
            price: 2000.0,
            label: "Someday".into(),
            delay_days: u32::MAX,
        };
        let assessment = assess(&salaried_danger_profile(), Some(&query), today(), 365);
        let purchase = assessment.purchase.unwrap();
        // Baseline depletes before the delay, so it is returned unchanged.
        assert_eq!(purchase.depletion_day, assessment.depletion_day);
        assert!(matches!(
            purchase.verdict,
            PurchaseVerdict::DeferUntil(_) | PurchaseVerdict::RequiresSavingsPlan
        ));
    }

    #[test]
    fn test_chart_window_sliced_from_master() {
        let assessment = assess(&freelance_growing_profile(), None, today(), 3650);
        assert_eq!(assessment.chart.len(), CHART_WINDOW_DAYS as usize + 1);
        assert_eq!(assessment.chart[0].balance, 5000.0);
    }

    #[test]
    fn test_determinism_across_invocations() {
        let profile = salaried_danger_profile();
        let query = PurchaseQuery {
            price: 2000.0,
            label: "Shoes".into(),
            delay_days: 7,
        };
        let a = assess(&profile, Some(&query), today(), 3650);
        let b = assess(&profile, Some(&query), today(), 3650);
        assert_eq!(a, b);
        let a_json = serde_json::to_string(&a).unwrap();
        let b_json = serde_json::to_string(&b).unwrap();
        assert_eq!(a_json, b_json);
    }

    #[test]
    fn test_runner_cache_matches_fresh_compute() {
        let profile = salaried_danger_profile();
        let mut runner = AssessmentRunner::with_horizon(3650);
        let first = runner.assess(&profile, None, today());
        let second = runner.assess(&profile, None, today());
        let fresh = assess(&profile, None, today(), 3650);
        assert_eq!(first, second);
        assert_eq!(first, fresh);
    }

    #[test]
    fn test_runner_invalidates_on_profile_change() {
        let mut profile = freelance_growing_profile();
        let mut runner = AssessmentRunner::with_horizon(365);
        let before = runner.assess(&profile, None, today());
        profile.current_balance += 1000.0;
        let after = runner.assess(&profile, None, today());
        assert_ne!(before.chart[0].balance, after.chart[0].balance);
    }
}
