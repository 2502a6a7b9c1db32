//! Pharmacokinetic estimation for logged peptide doses
//!
//! This module is the computational core of the crate: given a collection of
//! [`DoseEvent`](crate::data::DoseEvent)s and a
//! [`DrugProfile`](crate::data::DrugProfile), it estimates how much drug
//! remains in the body at any point in time and derives the statistics the
//! presentation layer renders.
//!
//! # Design Philosophy
//!
//! - **Pure**: every function maps (doses, profile, time) to a result; no
//!   internal state, no wall-clock reads, no I/O. Identical inputs always
//!   produce identical outputs, so every entry point is safe to call
//!   concurrently.
//! - **Total**: empty dose collections and degenerate numeric inputs yield
//!   defined results instead of panics; divisions and logarithms are
//!   guarded.
//! - **Heuristic**: concentration follows a three-phase approximation
//!   (linear rise, plateau, exponential decay), not a compartmental ODE
//!   model. The numbers are estimates for trend display, not clinical
//!   values.
//!
//! # Key Results
//!
//! | Result | Description |
//! |-----------|-------------|
//! | Level | Superposed concentration estimate at a time, in mg |
//! | Series | Evenly spaced level samples for charting |
//! | Peak/Trough | Extremes and their times over a window |
//! | Fluctuation | (peak − trough) / peak, as a percentage |
//! | ETA | Hours until the level decays to a target |
//! | Weekly total | Dose sum over the trailing 7 days vs. the limit |
//!
//! # Usage
//!
//! The free functions take dose slices directly; the [`Kinetics`] trait
//! offers the same operations on a [`DoseHistory`](crate::data::DoseHistory).
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use peptikin::prelude::*;
//!
//! let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
//! let history = DoseHistory::builder("Tirzepatide")
//!     .dose(t0, 2.5)
//!     .build()
//!     .unwrap();
//! let profile = history.library_profile().unwrap();
//!
//! // Level two days after the dose
//! let level = history.level_at(profile, t0 + Duration::hours(48));
//! assert!(level > 0.0);
//!
//! // Weekly limit check
//! let weekly = history.weekly_total(profile, t0 + Duration::hours(48));
//! assert!(weekly.within_limit);
//! ```

// Internal modules
mod calc;
mod recommend;
mod series;
mod stats;
mod traits;
mod types;
mod validate;


// Public API
pub use calc::{cumulative_level, dose_contribution, RISING_FRACTION};
pub use recommend::next_dose_recommendation;
pub use series::{build_time_series, TimeSeries};
pub use stats::{peak_trough_statistics, SERIES_STEP_HOURS};
pub use traits::Kinetics;
pub use types::{ConcentrationSample, DoseRecommendation, PeakTroughStats, WeeklyTotal};
pub use validate::validate_weekly_total;
