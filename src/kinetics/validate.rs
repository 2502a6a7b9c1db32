//! Weekly dose-total validation

use chrono::{DateTime, Duration, Utc};

use crate::data::event::DoseEvent;
use crate::data::profile::DrugProfile;
use crate::kinetics::types::WeeklyTotal;

/// Sum doses over the trailing 7-day window and compare to the weekly limit
///
/// The window is the closed interval `[now - 7 days, now]`: a dose at
/// exactly the 7-day boundary counts, one a second earlier does not.
/// Future-dated doses are likewise outside the window, even though they
/// would be pharmacologically active later. Doses no longer in the window
/// do not count regardless of remaining activity.
///
/// `remaining_mg` goes negative when the limit is exceeded; callers render
/// the overage. This function only reports — blocking a new dose submission
/// is the caller's decision.
pub fn validate_weekly_total(
    doses: &[DoseEvent],
    profile: &DrugProfile,
    now: DateTime<Utc>,
) -> WeeklyTotal {
    let window_start = now - Duration::days(7);

    let total_mg: f64 = doses
        .iter()
        .filter(|dose| dose.administered_at() >= window_start && dose.administered_at() <= now)
        .map(|dose| dose.amount_mg())
        .sum();

    let limit_mg = profile.weekly_limit_mg();
    WeeklyTotal {
        total_mg,
        limit_mg,
        remaining_mg: limit_mg - total_mg,
        within_limit: total_mg <= limit_mg,
    }
}
