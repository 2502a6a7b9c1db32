use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing or converting dose data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoseEventError {
    /// Dose amount was zero, negative, or not finite
    #[error("Dose amount must be a positive, finite number of mg, got {0}")]
    InvalidAmount(f64),
    /// Unrecognized dose unit string
    #[error("Unknown dose unit: {0}")]
    UnknownUnit(String),
    /// Unrecognized injection site string
    #[error("Unknown injection site: {0}")]
    UnknownSite(String),
    /// Unit has no fixed mass equivalent (e.g. IU, ml)
    #[error("Unit {0} cannot be converted to mg")]
    UnitNotConvertible(DoseUnit),
}

/// Unit a dose was recorded in
///
/// The engine operates exclusively on milligrams; mass units convert via
/// [`DoseUnit::to_mg`]. Volume (ml) and activity (IU) units carry no fixed
/// mass equivalent and must be converted by the caller before logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoseUnit {
    /// Milligrams
    Mg,
    /// Micrograms
    Mcg,
    /// International units
    Iu,
    /// Milliliters
    Ml,
}

impl DoseUnit {
    /// Convert an amount in this unit to milligrams
    ///
    /// Returns an error for units without a fixed mass equivalent.
    pub fn to_mg(&self, amount: f64) -> Result<f64, DoseEventError> {
        match self {
            DoseUnit::Mg => Ok(amount),
            DoseUnit::Mcg => Ok(amount / 1000.0),
            DoseUnit::Iu | DoseUnit::Ml => Err(DoseEventError::UnitNotConvertible(*self)),
        }
    }
}

impl FromStr for DoseUnit {
    type Err = DoseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mg" => Ok(DoseUnit::Mg),
            "mcg" => Ok(DoseUnit::Mcg),
            "iu" => Ok(DoseUnit::Iu),
            "ml" => Ok(DoseUnit::Ml),
            other => Err(DoseEventError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for DoseUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DoseUnit::Mg => write!(f, "mg"),
            DoseUnit::Mcg => write!(f, "mcg"),
            DoseUnit::Iu => write!(f, "IU"),
            DoseUnit::Ml => write!(f, "ml"),
        }
    }
}

/// Subcutaneous injection site recorded with a dose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjectionSite {
    Abdomen,
    Thigh,
    UpperArm,
    Buttocks,
    Other,
}

impl FromStr for InjectionSite {
    type Err = DoseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abdomen" => Ok(InjectionSite::Abdomen),
            "thigh" => Ok(InjectionSite::Thigh),
            "upper_arm" => Ok(InjectionSite::UpperArm),
            "buttocks" => Ok(InjectionSite::Buttocks),
            "other" => Ok(InjectionSite::Other),
            other => Err(DoseEventError::UnknownSite(other.to_string())),
        }
    }
}

impl fmt::Display for InjectionSite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InjectionSite::Abdomen => write!(f, "abdomen"),
            InjectionSite::Thigh => write!(f, "thigh"),
            InjectionSite::UpperArm => write!(f, "upper arm"),
            InjectionSite::Buttocks => write!(f, "buttocks"),
            InjectionSite::Other => write!(f, "other"),
        }
    }
}

/// Represents one administered dose
///
/// A [DoseEvent] is a discrete amount of drug injected at an absolute point
/// in time. Events are immutable once recorded; the engine only ever reads
/// collections of them.
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
pub struct DoseEvent {
    amount_mg: f64,
    administered_at: DateTime<Utc>,
    site: Option<InjectionSite>,
    notes: Option<String>,
}

impl DoseEvent {
    /// Create a new dose event
    ///
    /// # Arguments
    ///
    /// * `amount_mg` - Amount of drug administered, in milligrams
    /// * `administered_at` - Time of administration (UTC)
    ///
    /// # Errors
    ///
    /// Returns [`DoseEventError::InvalidAmount`] unless `amount_mg` is a
    /// positive, finite number.
    pub fn new(amount_mg: f64, administered_at: DateTime<Utc>) -> Result<Self, DoseEventError> {
        if !amount_mg.is_finite() || amount_mg <= 0.0 {
            return Err(DoseEventError::InvalidAmount(amount_mg));
        }
        Ok(DoseEvent {
            amount_mg,
            administered_at,
            site: None,
            notes: None,
        })
    }

    /// Attach an injection site
    pub fn with_site(mut self, site: InjectionSite) -> Self {
        self.site = Some(site);
        self
    }

    /// Attach free-form notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Get the administered amount in milligrams
    pub fn amount_mg(&self) -> f64 {
        self.amount_mg
    }

    /// Get the administration time (UTC)
    pub fn administered_at(&self) -> DateTime<Utc> {
        self.administered_at
    }

    /// Get the injection site, if one was recorded
    pub fn site(&self) -> Option<InjectionSite> {
        self.site
    }

    /// Get the notes, if any were recorded
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Copy of this dose shifted forward in time by a number of hours
    pub(crate) fn shifted_by_hours(&self, hours: f64) -> DoseEvent {
        let delta = Duration::milliseconds((hours * 3_600_000.0).round() as i64);
        DoseEvent {
            amount_mg: self.amount_mg,
            administered_at: self.administered_at + delta,
            site: self.site,
            notes: self.notes.clone(),
        }
    }
}

impl fmt::Display for DoseEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Dose of {:.2} mg at {}",
            self.amount_mg,
            self.administered_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        if let Some(site) = self.site {
            write!(f, " ({})", site)?;
        }
        Ok(())
    }
}
