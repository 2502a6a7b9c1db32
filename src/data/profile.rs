use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default duration of the peak window following absorption, in hours
pub const DEFAULT_PLATEAU_HOURS: f64 = 24.0;

/// Errors raised when constructing a [DrugProfile]
///
/// Profiles are configuration: invalid parameters are rejected here, at the
/// boundary, so the engine never has to guard against them per query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Half-life must be a positive, finite number of hours, got {0}")]
    InvalidHalfLife(f64),
    #[error("Absorption phase must be a non-negative, finite number of hours, got {0}")]
    InvalidAbsorptionPhase(f64),
    #[error("Plateau duration must be a non-negative, finite number of hours, got {0}")]
    InvalidPlateau(f64),
    #[error("Peak fraction must be in (0, 1], got {0}")]
    InvalidPeakFraction(f64),
    #[error("Weekly limit must be a positive, finite number of mg, got {0}")]
    InvalidWeeklyLimit(f64),
}

/// Kinetic parameters for one drug
///
/// A [DrugProfile] drives the three-phase concentration heuristic: a linear
/// rise over the absorption phase, a plateau at `peak_fraction` of the dose,
/// then first-order exponential decay governed by `half_life_hours`.
///
/// Profiles are immutable for the lifetime of a computation and validated
/// at construction.
///
/// # Example
///
/// ```
/// use peptikin::data::DrugProfile;
///
/// let profile = DrugProfile::new(120.0, 24.0, 0.95, 15.0).unwrap();
/// assert_eq!(profile.half_life_hours(), 120.0);
/// assert_eq!(profile.plateau_hours(), 24.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugProfile {
    half_life_hours: f64,
    absorption_phase_hours: f64,
    plateau_hours: f64,
    peak_fraction: f64,
    weekly_limit_mg: f64,
}

impl DrugProfile {
    /// Create a validated profile
    ///
    /// The plateau window defaults to [`DEFAULT_PLATEAU_HOURS`]; override it
    /// with [`DrugProfile::with_plateau_hours`].
    ///
    /// # Arguments
    ///
    /// * `half_life_hours` - Elimination half-life (> 0)
    /// * `absorption_phase_hours` - Duration of the rising phase (>= 0)
    /// * `peak_fraction` - Fraction of the nominal dose at peak, in (0, 1]
    /// * `weekly_limit_mg` - Maximum cumulative dose over a trailing 7-day window (> 0)
    pub fn new(
        half_life_hours: f64,
        absorption_phase_hours: f64,
        peak_fraction: f64,
        weekly_limit_mg: f64,
    ) -> Result<Self, ProfileError> {
        if !half_life_hours.is_finite() || half_life_hours <= 0.0 {
            return Err(ProfileError::InvalidHalfLife(half_life_hours));
        }
        if !absorption_phase_hours.is_finite() || absorption_phase_hours < 0.0 {
            return Err(ProfileError::InvalidAbsorptionPhase(absorption_phase_hours));
        }
        if !peak_fraction.is_finite() || peak_fraction <= 0.0 || peak_fraction > 1.0 {
            return Err(ProfileError::InvalidPeakFraction(peak_fraction));
        }
        if !weekly_limit_mg.is_finite() || weekly_limit_mg <= 0.0 {
            return Err(ProfileError::InvalidWeeklyLimit(weekly_limit_mg));
        }
        Ok(DrugProfile {
            half_life_hours,
            absorption_phase_hours,
            plateau_hours: DEFAULT_PLATEAU_HOURS,
            peak_fraction,
            weekly_limit_mg,
        })
    }

    /// Override the plateau window duration
    pub fn with_plateau_hours(mut self, plateau_hours: f64) -> Result<Self, ProfileError> {
        if !plateau_hours.is_finite() || plateau_hours < 0.0 {
            return Err(ProfileError::InvalidPlateau(plateau_hours));
        }
        self.plateau_hours = plateau_hours;
        Ok(self)
    }

    /// Elimination half-life in hours
    pub fn half_life_hours(&self) -> f64 {
        self.half_life_hours
    }

    /// Duration of the rising phase in hours
    pub fn absorption_phase_hours(&self) -> f64 {
        self.absorption_phase_hours
    }

    /// Duration of the peak window in hours
    pub fn plateau_hours(&self) -> f64 {
        self.plateau_hours
    }

    /// Fraction of the nominal dose treated as peak concentration
    pub fn peak_fraction(&self) -> f64 {
        self.peak_fraction
    }

    /// Maximum cumulative dose over a trailing 7-day window, in mg
    pub fn weekly_limit_mg(&self) -> f64 {
        self.weekly_limit_mg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = DrugProfile::new(120.0, 24.0, 0.95, 15.0).unwrap();
        assert_eq!(profile.half_life_hours(), 120.0);
        assert_eq!(profile.absorption_phase_hours(), 24.0);
        assert_eq!(profile.plateau_hours(), DEFAULT_PLATEAU_HOURS);
        assert_eq!(profile.peak_fraction(), 0.95);
        assert_eq!(profile.weekly_limit_mg(), 15.0);
    }

    #[test]
    fn test_plateau_override() {
        let profile = DrugProfile::new(120.0, 24.0, 0.95, 15.0)
            .unwrap()
            .with_plateau_hours(12.0)
            .unwrap();
        assert_eq!(profile.plateau_hours(), 12.0);
        assert!(profile.with_plateau_hours(-1.0).is_err());
    }

    #[test]
    fn test_invalid_half_life() {
        assert_eq!(
            DrugProfile::new(0.0, 24.0, 0.95, 15.0),
            Err(ProfileError::InvalidHalfLife(0.0))
        );
        assert!(DrugProfile::new(-5.0, 24.0, 0.95, 15.0).is_err());
        assert!(DrugProfile::new(f64::NAN, 24.0, 0.95, 15.0).is_err());
    }

    #[test]
    fn test_invalid_absorption() {
        assert!(DrugProfile::new(120.0, -1.0, 0.95, 15.0).is_err());
        // zero-length absorption is allowed: the dose plateaus immediately
        assert!(DrugProfile::new(120.0, 0.0, 0.95, 15.0).is_ok());
    }

    #[test]
    fn test_invalid_peak_fraction() {
        assert!(DrugProfile::new(120.0, 24.0, 0.0, 15.0).is_err());
        assert!(DrugProfile::new(120.0, 24.0, 1.01, 15.0).is_err());
        assert!(DrugProfile::new(120.0, 24.0, 1.0, 15.0).is_ok());
    }

    #[test]
    fn test_invalid_weekly_limit() {
        assert!(DrugProfile::new(120.0, 24.0, 0.95, 0.0).is_err());
        assert!(DrugProfile::new(120.0, 24.0, 0.95, -15.0).is_err());
    }
}
