use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::event::DoseEvent;
use crate::data::library;
use crate::data::profile::DrugProfile;

/// One user's chronological dose log for one peptide
///
/// A [DoseHistory] owns the recorded [DoseEvent]s for a single user and
/// peptide, kept sorted by administration time. The estimation engine only
/// ever receives a snapshot of these events; the history itself carries no
/// computed state.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use peptikin::prelude::*;
///
/// let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
/// let history = DoseHistory::builder("Tirzepatide")
///     .id("user_001")
///     .dose(t0, 2.5)
///     .repeat(3, 168.0) // three more weekly doses
///     .build()
///     .unwrap();
///
/// assert_eq!(history.len(), 4);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DoseHistory {
    id: String,
    peptide: String,
    doses: Vec<DoseEvent>,
}

impl DoseHistory {
    /// Construct a new [DoseHistory] from a vector of dose events
    ///
    /// Events are sorted by administration time; the input order does not
    /// matter. It is recommended to construct histories via
    /// [`DoseHistory::builder`](crate::data::builder::DoseHistoryBuilderExt::builder).
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the owning user
    /// * `peptide` - Name of the peptide these doses belong to
    /// * `doses` - Recorded dose events, in any order
    pub fn new(id: impl Into<String>, peptide: impl Into<String>, doses: Vec<DoseEvent>) -> Self {
        let mut history = DoseHistory {
            id: id.into(),
            peptide: peptide.into(),
            doses,
        };
        history.sort();
        history
    }

    /// Get the identifier of the owning user
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the peptide name
    pub fn peptide(&self) -> &str {
        &self.peptide
    }

    /// Get the recorded doses, sorted by administration time
    pub fn doses(&self) -> &[DoseEvent] {
        &self.doses
    }

    /// Add a dose, keeping the log sorted
    pub fn add_dose(&mut self, dose: DoseEvent) {
        self.doses.push(dose);
        self.sort();
    }

    /// Number of recorded doses
    pub fn len(&self) -> usize {
        self.doses.len()
    }

    /// Whether the log contains no doses
    pub fn is_empty(&self) -> bool {
        self.doses.is_empty()
    }

    /// Iterate over doses administered within a closed time window
    pub fn doses_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Iterator<Item = &DoseEvent> {
        self.doses
            .iter()
            .filter(move |dose| dose.administered_at() >= from && dose.administered_at() <= to)
    }

    /// Kinetic profile for this history's peptide, if the library models it
    pub fn library_profile(&self) -> Option<&'static DrugProfile> {
        library::profile_for(&self.peptide)
    }

    fn sort(&mut self) {
        self.doses
            .sort_by_key(|dose| dose.administered_at());
    }
}

impl fmt::Display for DoseHistory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "DoseHistory {} ({}): {} doses",
            self.id,
            self.peptide,
            self.doses.len()
        )?;
        for dose in &self.doses {
            writeln!(f, "  {}", dose)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_history_sorts_doses() {
        let history = DoseHistory::new(
            "user_001",
            "Tirzepatide",
            vec![
                DoseEvent::new(2.5, t(12)).unwrap(),
                DoseEvent::new(2.5, t(6)).unwrap(),
                DoseEvent::new(2.5, t(9)).unwrap(),
            ],
        );
        let times: Vec<_> = history
            .doses()
            .iter()
            .map(|d| d.administered_at())
            .collect();
        assert_eq!(times, vec![t(6), t(9), t(12)]);
    }

    #[test]
    fn test_add_dose_keeps_order() {
        let mut history =
            DoseHistory::new("user_001", "Tirzepatide", vec![DoseEvent::new(2.5, t(12)).unwrap()]);
        history.add_dose(DoseEvent::new(5.0, t(6)).unwrap());
        assert_eq!(history.doses()[0].amount_mg(), 5.0);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_doses_between_is_closed_interval() {
        let history = DoseHistory::new(
            "user_001",
            "Tirzepatide",
            vec![
                DoseEvent::new(1.0, t(6)).unwrap(),
                DoseEvent::new(2.0, t(9)).unwrap(),
                DoseEvent::new(3.0, t(12)).unwrap(),
            ],
        );
        let within: Vec<_> = history.doses_between(t(6), t(9)).collect();
        assert_eq!(within.len(), 2);
    }

    #[test]
    fn test_library_profile_lookup() {
        let history = DoseHistory::new("user_001", "tirzepatide", Vec::new());
        assert!(history.library_profile().is_some());
        let unknown = DoseHistory::new("user_001", "KPV", Vec::new());
        assert!(unknown.library_profile().is_none());
    }
}
