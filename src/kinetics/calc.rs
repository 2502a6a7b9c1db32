//! Pure calculation functions for concentration estimation
//!
//! This module contains the three-phase contribution heuristic and its
//! superposition over a dose collection. All functions are stateless and
//! take validated inputs.

use chrono::{DateTime, Utc};

use crate::data::event::DoseEvent;
use crate::data::profile::DrugProfile;

/// Fraction of the nominal dose reached at the end of the rising phase
///
/// During absorption the level ramps linearly toward this sub-peak fraction;
/// the full `peak_fraction` applies only once the plateau begins.
pub const RISING_FRACTION: f64 = 0.8;

/// Signed elapsed time from `from` to `to`, in hours
#[inline]
pub(crate) fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}

/// Estimated contribution of a single dose at a query time, in mg
///
/// The contribution follows a three-phase heuristic rather than a
/// compartmental ODE model:
///
/// 1. **Rise** (`0 <= elapsed < absorption_phase_hours`): linear ramp to
///    `amount * RISING_FRACTION`.
/// 2. **Plateau** (until `absorption_phase_hours + plateau_hours`):
///    `amount * peak_fraction`.
/// 3. **Decay**: first-order exponential from the plateau level, with the
///    profile's elimination half-life.
///
/// A dose contributes nothing before its administration time, so the result
/// is always >= 0. There are no error conditions.
pub fn dose_contribution(dose: &DoseEvent, profile: &DrugProfile, at: DateTime<Utc>) -> f64 {
    let elapsed = hours_between(dose.administered_at(), at);
    if elapsed < 0.0 {
        return 0.0;
    }

    let absorption = profile.absorption_phase_hours();
    if elapsed < absorption {
        return dose.amount_mg() * (elapsed / absorption) * RISING_FRACTION;
    }

    let plateau_end = absorption + profile.plateau_hours();
    if elapsed < plateau_end {
        return dose.amount_mg() * profile.peak_fraction();
    }

    let decay_constant = std::f64::consts::LN_2 / profile.half_life_hours();
    dose.amount_mg()
        * profile.peak_fraction()
        * (-decay_constant * (elapsed - plateau_end)).exp()
}

/// Superposed level estimate of all doses at a query time, in mg
///
/// Contributions add linearly (no interaction modeling), so the input order
/// is irrelevant. An empty collection yields 0. O(n) in the number of doses.
pub fn cumulative_level(doses: &[DoseEvent], profile: &DrugProfile, at: DateTime<Utc>) -> f64 {
    doses
        .iter()
        .map(|dose| dose_contribution(dose, profile, at))
        .sum()
}
