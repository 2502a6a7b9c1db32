//! Peak/trough extraction over a sampled window

use chrono::{DateTime, Utc};

use crate::data::event::DoseEvent;
use crate::data::profile::DrugProfile;
use crate::kinetics::series::build_time_series;
use crate::kinetics::types::PeakTroughStats;

/// Sampling step used for peak/trough extraction, in hours
pub const SERIES_STEP_HOURS: f64 = 1.0;

/// Peak and trough levels over `[from, from + window_hours]`
///
/// Samples the window at [SERIES_STEP_HOURS] and reduces to the extreme
/// levels and their times. Ties resolve to the earliest sample.
///
/// Returns `None` when there are no doses or the window yields no samples —
/// the explicit empty-state result, never a divide-by-zero. A window in
/// which every sample is 0 (e.g. entirely before the first dose) reports a
/// zero peak with `fluctuation_pct` of 0.
pub fn peak_trough_statistics(
    doses: &[DoseEvent],
    profile: &DrugProfile,
    from: DateTime<Utc>,
    window_hours: f64,
) -> Option<PeakTroughStats> {
    if doses.is_empty() {
        return None;
    }

    let mut peak_mg = f64::NEG_INFINITY;
    let mut trough_mg = f64::INFINITY;
    let mut peak_at = from;
    let mut trough_at = from;
    let mut sampled = false;

    for sample in build_time_series(doses, profile, from, window_hours, SERIES_STEP_HOURS) {
        sampled = true;
        if sample.level_mg > peak_mg {
            peak_mg = sample.level_mg;
            peak_at = sample.at;
        }
        if sample.level_mg < trough_mg {
            trough_mg = sample.level_mg;
            trough_at = sample.at;
        }
    }

    if !sampled {
        return None;
    }

    let fluctuation_pct = if peak_mg > 0.0 {
        (peak_mg - trough_mg) / peak_mg * 100.0
    } else {
        0.0
    };

    Some(PeakTroughStats {
        peak_mg,
        peak_at,
        trough_mg,
        trough_at,
        fluctuation_pct,
    })
}
