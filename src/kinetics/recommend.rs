//! Next-dose timing against a target level

use chrono::{DateTime, Utc};

use crate::data::event::DoseEvent;
use crate::data::profile::DrugProfile;
use crate::kinetics::calc::cumulative_level;
use crate::kinetics::types::DoseRecommendation;

/// Compare the current level against a target and estimate when the target
/// will be reached
///
/// A dose is due once the level is at or below `target_level_mg`. Otherwise
/// the ETA solves the decay equation for the crossing time, assuming pure
/// exponential elimination from the current level:
///
/// `eta = half_life * ln(current / target) / ln 2`
///
/// This is an approximation — the rise and plateau phases of doses still
/// being absorbed are not modeled forward, only their current contribution.
///
/// Guards (no NaN, no panic):
/// - current level of 0 with a positive target: due now, no ETA (a positive
///   target is unreachable from zero under pure decay);
/// - non-positive target: decay never reaches it, so not due and no ETA.
pub fn next_dose_recommendation(
    doses: &[DoseEvent],
    profile: &DrugProfile,
    target_level_mg: f64,
    now: DateTime<Utc>,
) -> DoseRecommendation {
    let current_level_mg = cumulative_level(doses, profile, now);

    let due_now = current_level_mg <= target_level_mg;
    let eta_hours = if due_now || target_level_mg <= 0.0 || current_level_mg <= 0.0 {
        None
    } else {
        Some(
            profile.half_life_hours() * (current_level_mg / target_level_mg).ln()
                / std::f64::consts::LN_2,
        )
    };

    DoseRecommendation {
        due_now,
        eta_hours,
        current_level_mg,
    }
}
