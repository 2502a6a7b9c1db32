use rand::{distr::Alphanumeric, Rng};

use chrono::{DateTime, Utc};

use crate::data::event::{DoseEvent, DoseEventError, InjectionSite};
use crate::data::structs::DoseHistory;

pub trait DoseHistoryBuilderExt {
    fn builder(peptide: impl Into<String>) -> DoseHistoryBuilder;
}
impl DoseHistoryBuilderExt for DoseHistory {
    fn builder(peptide: impl Into<String>) -> DoseHistoryBuilder {
        let id: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(5)
            .map(char::from)
            .collect();

        DoseHistoryBuilder {
            id,
            peptide: peptide.into(),
            doses: Vec::new(),
            error: None,
        }
    }
}

/// Fluent construction of a [DoseHistory]
///
/// Invalid doses do not abort the chain; the first error is surfaced when
/// [`build`](DoseHistoryBuilder::build) is called.
pub struct DoseHistoryBuilder {
    id: String,
    peptide: String,
    doses: Vec<DoseEvent>,
    error: Option<DoseEventError>,
}

impl DoseHistoryBuilder {
    /// Set the owning user's identifier (a random one is generated otherwise)
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Record a dose of `amount_mg` administered at `time`
    pub fn dose(mut self, time: DateTime<Utc>, amount_mg: f64) -> Self {
        match DoseEvent::new(amount_mg, time) {
            Ok(dose) => self.doses.push(dose),
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
            }
        }
        self
    }

    /// Record a dose with its injection site
    pub fn dose_at_site(
        mut self,
        time: DateTime<Utc>,
        amount_mg: f64,
        site: InjectionSite,
    ) -> Self {
        match DoseEvent::new(amount_mg, time) {
            Ok(dose) => self.doses.push(dose.with_site(site)),
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
            }
        }
        self
    }

    /// Repeat the last recorded dose `n` more times at a fixed interval
    ///
    /// Useful for fixed schedules, e.g. `repeat(3, 168.0)` adds three more
    /// weekly doses.
    ///
    /// # Panics
    ///
    /// Panics if no dose has been recorded yet.
    pub fn repeat(mut self, n: usize, interval_hours: f64) -> Self {
        let last = match self.doses.last() {
            Some(dose) => dose.clone(),
            None => panic!("There is no dose to repeat"),
        };
        for i in 1..=n {
            self.doses
                .push(last.shifted_by_hours(interval_hours * i as f64));
        }
        self
    }

    /// Finish the log
    ///
    /// # Errors
    ///
    /// Returns the first [`DoseEventError`] encountered while recording doses.
    pub fn build(self) -> Result<DoseHistory, DoseEventError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        Ok(DoseHistory::new(self.id, self.peptide, self.doses))
    }
}
