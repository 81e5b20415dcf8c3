//! Projection output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Balance at a single simulated day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Days from today; 0 is today
    pub day_offset: u32,

    /// Calendar date of this point
    pub date: NaiveDate,

    /// Balance at end of this day
    pub balance: f64,
}

/// An ordered day-by-day balance sequence, immutable once built
///
/// Length is always `horizon_days + 1`; `day_offset` equals the index.
/// Point 0 carries the unmodified starting balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    points: Vec<ProjectionPoint>,
}

impl Projection {
    pub(crate) fn from_points(points: Vec<ProjectionPoint>) -> Self {
        Self { points }
    }

    /// All points, day 0 first
    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    /// Last simulated day offset (the horizon)
    pub fn horizon_end(&self) -> u32 {
        (self.points.len() - 1) as u32
    }

    /// Balance at a day offset; panics past the horizon like slice indexing
    pub fn balance_on(&self, day_offset: u32) -> f64 {
        self.points[day_offset as usize].balance
    }

    /// Point at a day offset, if within the horizon
    pub fn point(&self, day_offset: u32) -> Option<&ProjectionPoint> {
        self.points.get(day_offset as usize)
    }

    /// The leading `window_days + 1` points, for charting
    ///
    /// Always sliced from the master projection, never recomputed.
    pub fn window(&self, window_days: u32) -> &[ProjectionPoint] {
        let end = (window_days as usize + 1).min(self.points.len());
        &self.points[..end]
    }
}
