//! Boundary loading and normalization of financial profiles
//!
//! Form state arrives as loosely-typed JSON (numeric fields are optional
//! strings that may be blank or unparseable). This module is the only place
//! that coercion happens: blank/unparseable numerics become 0, day-of-month
//! fields are clamped into [1, 31], and duplicate liability ids are
//! rejected. The core downstream assumes well-formed input.

use super::data::{FinancialProfile, FixedLiability, IncomeMode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Errors raised at the profile boundary
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read saved state: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse saved state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown income mode: {0}")]
    UnknownIncomeMode(String),

    #[error("duplicate liability id: {0}")]
    DuplicateLiabilityId(String),
}

/// Raw liability row as captured by the input form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLiability {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub due_day_of_month: Option<String>,
}

/// Raw profile as captured by the input form, before normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProfile {
    /// "salaried" | "business" | "freelance"
    pub income_mode: String,
    #[serde(default)]
    pub income_amount: Option<String>,
    #[serde(default)]
    pub payday_day_of_month: Option<String>,
    #[serde(default)]
    pub current_balance: Option<String>,
    #[serde(default)]
    pub daily_variable_spend: Option<String>,
    #[serde(default)]
    pub fixed_liabilities: Vec<RawLiability>,
}

/// Coerce an optional numeric string to f64, defaulting to 0
fn coerce_amount(raw: &Option<String>) -> f64 {
    raw.as_deref()
        .map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Coerce an optional day-of-month string into [1, 31], defaulting to 1
fn coerce_day_of_month(raw: &Option<String>) -> u32 {
    raw.as_deref()
        .map(str::trim)
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(1)
        .clamp(1, 31)
}

impl RawProfile {
    /// Normalize into a strictly-typed profile
    pub fn normalize(&self) -> Result<FinancialProfile, ProfileError> {
        let income_mode = match self.income_mode.to_ascii_lowercase().as_str() {
            "salaried" => IncomeMode::Salaried,
            "business" => IncomeMode::Business,
            "freelance" => IncomeMode::Freelance,
            other => return Err(ProfileError::UnknownIncomeMode(other.to_string())),
        };

        let mut seen = HashSet::new();
        let mut fixed_liabilities = Vec::with_capacity(self.fixed_liabilities.len());
        for raw in &self.fixed_liabilities {
            if !seen.insert(raw.id.clone()) {
                return Err(ProfileError::DuplicateLiabilityId(raw.id.clone()));
            }
            fixed_liabilities.push(FixedLiability {
                id: raw.id.clone(),
                title: raw.title.clone(),
                amount: coerce_amount(&raw.amount).max(0.0),
                due_day_of_month: coerce_day_of_month(&raw.due_day_of_month),
            });
        }

        Ok(FinancialProfile {
            income_mode,
            income_amount: coerce_amount(&self.income_amount).max(0.0),
            payday_day_of_month: coerce_day_of_month(&self.payday_day_of_month),
            // The one signed field: negative balances are legitimate input
            current_balance: coerce_amount(&self.current_balance),
            daily_variable_spend: coerce_amount(&self.daily_variable_spend).max(0.0),
            fixed_liabilities,
        })
    }
}

/// Persisted snapshot: the raw profile plus opaque UI navigation state
///
/// The nav blob is round-tripped verbatim; this module defines no
/// versioning or migration for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedState {
    pub profile: RawProfile,
    #[serde(default)]
    pub nav: serde_json::Value,
}

/// Load saved state from a JSON file
pub fn load_saved_state<P: AsRef<Path>>(path: P) -> Result<SavedState, ProfileError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Store saved state to a JSON file
pub fn store_saved_state<P: AsRef<Path>>(path: P, state: &SavedState) -> Result<(), ProfileError> {
    let contents = serde_json::to_string_pretty(state)?;
    std::fs::write(path, contents)?;
    Ok(())
}
