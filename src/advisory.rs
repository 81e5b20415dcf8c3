//! Advisory collaborator boundary
//!
//! The core hands a JSON context of its own outputs plus a natural-language
//! instruction to an external text-generation service and gets free-text
//! markdown back. The response is opaque: it is never parsed into
//! structured data, and every core output exists whether or not the
//! service answers. Failures and timeouts collapse to a fixed fallback
//! message.

use crate::assessment::Assessment;
use crate::profile::FinancialProfile;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shown when the advisory service errors out or times out
pub const FALLBACK_MESSAGE: &str =
    "The advisory service is currently unavailable. Your projection and health score above are unaffected.";

/// Errors from the advisory collaborator
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error("advisory service unreachable: {0}")]
    Unreachable(String),

    #[error("advisory service returned an error: {0}")]
    Service(String),
}

/// One liability line in the advisory context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiabilityLine {
    pub title: String,
    pub amount: f64,
}

/// JSON summary of core outputs handed to the advisory service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryContext {
    pub balance: f64,
    pub monthly_income: f64,
    pub fixed_monthly_total: f64,
    pub variable_monthly_total: f64,
    pub health_score: u8,
    /// Days of runway; `None` means no depletion within the horizon
    pub depletion_day: Option<u32>,
    pub liabilities: Vec<LiabilityLine>,
}

impl AdvisoryContext {
    /// Build the context from a profile and its assessment
    pub fn from_assessment(profile: &FinancialProfile, assessment: &Assessment) -> Self {
        Self {
            balance: profile.current_balance,
            monthly_income: assessment.summary.monthly_income,
            fixed_monthly_total: assessment.summary.fixed_monthly_total,
            variable_monthly_total: assessment.summary.variable_monthly_total,
            health_score: assessment.health_score,
            depletion_day: assessment.depletion_day,
            liabilities: assessment
                .liabilities
                .iter()
                .map(|view| LiabilityLine {
                    title: view.title.clone(),
                    amount: view.amount,
                })
                .collect(),
        }
    }
}

/// External text-generation collaborator
///
/// Implementations wrap whatever transport reaches the actual service;
/// the core only sees this trait.
#[allow(async_fn_in_trait)]
pub trait AdvisoryService {
    /// Generate free-text commentary for an instruction and context
    async fn generate(
        &self,
        instruction: &str,
        context: &AdvisoryContext,
    ) -> Result<String, AdvisoryError>;
}

/// Ask the collaborator, falling back to the fixed message on error or
/// after `deadline` elapses
///
/// The core never blocks indefinitely on the advisory boundary and never
/// requires it for its own outputs.
pub async fn advise_or_fallback<S: AdvisoryService>(
    service: &S,
    instruction: &str,
    context: &AdvisoryContext,
    deadline: Duration,
) -> String {
    match tokio::time::timeout(deadline, service.generate(instruction, context)).await {
        Ok(Ok(text)) => text,
        Ok(Err(err)) => {
            log::warn!("advisory service failed: {}", err);
            FALLBACK_MESSAGE.to_string()
        }
        Err(_) => {
            log::warn!("advisory service timed out after {:?}", deadline);
            FALLBACK_MESSAGE.to_string()
        }
    }
}
