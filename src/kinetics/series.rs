//! Time-series generation for charting
//!
//! Sampling always starts from an explicit `start` parameter; the engine
//! never reads the wall clock, so a series is reproducible from its inputs
//! alone.

use chrono::{DateTime, Duration, Utc};

use crate::data::event::DoseEvent;
use crate::data::profile::DrugProfile;
use crate::kinetics::calc::cumulative_level;
use crate::kinetics::types::ConcentrationSample;

/// Build an evenly spaced concentration series over
/// `[start, start + duration_hours]`
///
/// Returns a lazy, finite, restartable iterator: samples are computed on
/// demand, the sample count is known up front, and cloning the iterator
/// restarts it. Both endpoints are sampled when the step divides the
/// duration.
///
/// Degenerate inputs (non-positive or non-finite `step_hours`, negative or
/// non-finite `duration_hours`) yield an empty series. The engine enforces
/// no upper bound on the sample count; the caller chooses a sane
/// duration/step ratio.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use peptikin::prelude::*;
///
/// let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
/// let doses = vec![DoseEvent::new(2.5, t0).unwrap()];
/// let profile = DrugProfile::new(120.0, 24.0, 0.95, 15.0).unwrap();
///
/// let series = build_time_series(&doses, &profile, t0, 168.0, 1.0);
/// assert_eq!(series.len(), 169);
/// ```
pub fn build_time_series<'a>(
    doses: &'a [DoseEvent],
    profile: &'a DrugProfile,
    start: DateTime<Utc>,
    duration_hours: f64,
    step_hours: f64,
) -> TimeSeries<'a> {
    let len = if step_hours.is_finite()
        && step_hours > 0.0
        && duration_hours.is_finite()
        && duration_hours >= 0.0
    {
        (duration_hours / step_hours).floor() as usize + 1
    } else {
        0
    };

    TimeSeries {
        doses,
        profile,
        start,
        step_hours,
        index: 0,
        len,
    }
}

/// Lazy iterator over evenly spaced [ConcentrationSample]s
///
/// Produced by [build_time_series]. Cloning restarts the sequence from the
/// beginning.
#[derive(Debug, Clone)]
pub struct TimeSeries<'a> {
    doses: &'a [DoseEvent],
    profile: &'a DrugProfile,
    start: DateTime<Utc>,
    step_hours: f64,
    index: usize,
    len: usize,
}

impl TimeSeries<'_> {
    /// Total number of samples the series yields
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the series yields no samples
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Iterator for TimeSeries<'_> {
    type Item = ConcentrationSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        // Offset from start is recomputed per sample to avoid accumulating
        // floating-point drift over long series.
        let offset_ms = (self.index as f64 * self.step_hours * 3_600_000.0).round() as i64;
        let at = self.start + Duration::milliseconds(offset_ms);
        self.index += 1;
        Some(ConcentrationSample {
            at,
            level_mg: cumulative_level(self.doses, self.profile, at),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeSeries<'_> {}

impl std::iter::FusedIterator for TimeSeries<'_> {}
