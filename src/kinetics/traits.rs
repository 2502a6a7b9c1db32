//! Estimation entry points on [DoseHistory]

use chrono::{DateTime, Utc};

use crate::data::profile::DrugProfile;
use crate::data::structs::DoseHistory;
use crate::kinetics::calc::cumulative_level;
use crate::kinetics::recommend::next_dose_recommendation;
use crate::kinetics::series::{build_time_series, TimeSeries};
use crate::kinetics::stats::peak_trough_statistics;
use crate::kinetics::types::{DoseRecommendation, PeakTroughStats, WeeklyTotal};
use crate::kinetics::validate::validate_weekly_total;

/// Extension trait exposing the estimation engine on a [DoseHistory]
///
/// Each method delegates to the corresponding free function with the
/// history's dose snapshot. The profile stays an explicit argument: which
/// parameters to use is the caller's decision (see
/// [`DoseHistory::library_profile`] for the catalogue defaults).
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use peptikin::prelude::*;
///
/// let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
/// let history = DoseHistory::builder("Retatrutide")
///     .dose(t0, 1.0)
///     .build()
///     .unwrap();
/// let profile = history.library_profile().unwrap();
///
/// let stats = history.peak_trough(profile, t0, 168.0).unwrap();
/// assert!(stats.peak_mg > 0.0);
/// ```
pub trait Kinetics {
    /// Superposed level estimate at a time, in mg
    fn level_at(&self, profile: &DrugProfile, at: DateTime<Utc>) -> f64;

    /// Evenly spaced level samples over `[start, start + duration_hours]`
    fn time_series<'a>(
        &'a self,
        profile: &'a DrugProfile,
        start: DateTime<Utc>,
        duration_hours: f64,
        step_hours: f64,
    ) -> TimeSeries<'a>;

    /// Peak/trough summary over `[from, from + window_hours]`
    fn peak_trough(
        &self,
        profile: &DrugProfile,
        from: DateTime<Utc>,
        window_hours: f64,
    ) -> Option<PeakTroughStats>;

    /// Whether a dose is due against a target level, and the ETA if not
    fn next_dose(
        &self,
        profile: &DrugProfile,
        target_level_mg: f64,
        now: DateTime<Utc>,
    ) -> DoseRecommendation;

    /// Trailing 7-day dose total against the weekly limit
    fn weekly_total(&self, profile: &DrugProfile, now: DateTime<Utc>) -> WeeklyTotal;
}

impl Kinetics for DoseHistory {
    fn level_at(&self, profile: &DrugProfile, at: DateTime<Utc>) -> f64 {
        cumulative_level(self.doses(), profile, at)
    }

    fn time_series<'a>(
        &'a self,
        profile: &'a DrugProfile,
        start: DateTime<Utc>,
        duration_hours: f64,
        step_hours: f64,
    ) -> TimeSeries<'a> {
        build_time_series(self.doses(), profile, start, duration_hours, step_hours)
    }

    fn peak_trough(
        &self,
        profile: &DrugProfile,
        from: DateTime<Utc>,
        window_hours: f64,
    ) -> Option<PeakTroughStats> {
        peak_trough_statistics(self.doses(), profile, from, window_hours)
    }

    fn next_dose(
        &self,
        profile: &DrugProfile,
        target_level_mg: f64,
        now: DateTime<Utc>,
    ) -> DoseRecommendation {
        next_dose_recommendation(self.doses(), profile, target_level_mg, now)
    }

    fn weekly_total(&self, profile: &DrugProfile, now: DateTime<Utc>) -> WeeklyTotal {
        validate_weekly_total(self.doses(), profile, now)
    }
}
