//! Result types for the estimation engine
//!
//! All results are plain serde-serializable records: numbers and UTC
//! timestamps, no display formatting. Rendering, localization, and units of
//! display belong to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estimated concentration at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationSample {
    /// Sample time (UTC)
    pub at: DateTime<Utc>,
    /// Superposed level estimate, in mg; never negative
    pub level_mg: f64,
}

/// Peak/trough summary over a sampled window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakTroughStats {
    /// Highest sampled level, in mg
    pub peak_mg: f64,
    /// Time of the peak (earliest sample attaining it)
    pub peak_at: DateTime<Utc>,
    /// Lowest sampled level, in mg
    pub trough_mg: f64,
    /// Time of the trough (earliest sample attaining it)
    pub trough_at: DateTime<Utc>,
    /// (peak − trough) / peak, as a percentage; 0 when the peak is 0
    pub fluctuation_pct: f64,
}

/// Outcome of comparing the current level against a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseRecommendation {
    /// Whether the level has already reached the target
    pub due_now: bool,
    /// Hours until the level decays to the target; `None` when due now or
    /// when the target is unreachable under pure decay
    pub eta_hours: Option<f64>,
    /// Level estimate at the query time, in mg
    pub current_level_mg: f64,
}

/// Report of the trailing 7-day dose total against the weekly limit
///
/// This is a report, not a gate: whether to block a new dose is the
/// caller's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTotal {
    /// Sum of doses administered in the window, in mg
    pub total_mg: f64,
    /// The profile's weekly limit, in mg
    pub limit_mg: f64,
    /// Limit minus total; negative when the limit is exceeded
    pub remaining_mg: f64,
    /// Whether the total is within the limit
    pub within_limit: bool,
}
