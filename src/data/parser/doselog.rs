use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::data::event::{DoseEvent, DoseEventError, DoseUnit, InjectionSite};
use crate::data::structs::DoseHistory;

/// Custom error type for the module
#[derive(Error, Debug, Clone)]
pub enum DoseLogError {
    /// Error encountered when reading CSV data
    #[error("CSV error: {0}")]
    CSVError(String),
    /// Timestamp could not be parsed as RFC 3339 or naive UTC
    #[error("Invalid timestamp {time} for {id}")]
    InvalidTimestamp { id: String, time: String },
    /// Error constructing a dose event from a row
    #[error(transparent)]
    Dose(#[from] DoseEventError),
}

/// One row of a dose-log CSV file
///
/// Expected columns (headers are case-insensitive):
///
/// | Column | Content |
/// |---|---|
/// | `id` | User identifier |
/// | `peptide` | Peptide name |
/// | `amount` | Dose amount in the row's unit |
/// | `unit` | `mg`, `mcg`, `IU` or `ml` (defaults to mg) |
/// | `time` | Administration time, RFC 3339 or `YYYY-MM-DDTHH:MM[:SS]` (taken as UTC) |
/// | `site` | Optional injection site |
/// | `notes` | Optional free text |
#[derive(Debug, Clone, Deserialize)]
struct Row {
    id: String,
    peptide: String,
    amount: f64,
    #[serde(default)]
    unit: Option<String>,
    time: String,
    #[serde(default)]
    site: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl Row {
    fn parse_dose(&self) -> Result<DoseEvent, DoseLogError> {
        let unit = match &self.unit {
            Some(u) if !u.trim().is_empty() => DoseUnit::from_str(u)?,
            _ => DoseUnit::Mg,
        };
        let amount_mg = unit.to_mg(self.amount)?;
        let administered_at = parse_time(&self.time).ok_or_else(|| {
            DoseLogError::InvalidTimestamp {
                id: self.id.clone(),
                time: self.time.clone(),
            }
        })?;

        let mut dose = DoseEvent::new(amount_mg, administered_at)?;
        if let Some(site) = &self.site {
            if !site.trim().is_empty() {
                dose = dose.with_site(InjectionSite::from_str(site)?);
            }
        }
        if let Some(notes) = &self.notes {
            if !notes.trim().is_empty() {
                dose = dose.with_notes(notes.clone());
            }
        }
        Ok(dose)
    }
}

/// Parse an RFC 3339 timestamp, falling back to a naive datetime taken as UTC
///
/// The fallback covers `datetime-local` form values (`2024-03-01T08:00`),
/// which carry no offset; the store's contract is that such values are
/// already UTC.
fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Read a dose-log CSV file into [DoseHistory] values
///
/// Rows are grouped by user id and peptide name; each group becomes one
/// history with its doses sorted by administration time. Amounts are
/// normalized to milligrams and timestamps to UTC here, at the boundary,
/// so the estimation engine never sees raw strings.
///
/// # Arguments
///
/// * `path` - The path to the dose-log CSV file
///
/// # Returns
///
/// * `Result<Vec<DoseHistory>, DoseLogError>` - One history per (user, peptide) pair
///
/// # Example
///
/// ```rust,no_run
/// use peptikin::prelude::data::read_doselog;
///
/// let histories = read_doselog("path/to/doses.csv").unwrap();
/// println!("Number of histories: {}", histories.len());
/// ```
pub fn read_doselog(path: impl Into<String>) -> Result<Vec<DoseHistory>, DoseLogError> {
    let path = path.into();
    let file = std::fs::File::open(&path).map_err(|e| DoseLogError::CSVError(e.to_string()))?;
    read_doselog_from_reader(file)
}

/// Read a dose-log CSV from any reader; see [read_doselog]
pub fn read_doselog_from_reader(reader: impl Read) -> Result<Vec<DoseHistory>, DoseLogError> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Convert headers to lowercase
    let headers = reader
        .headers()
        .map_err(|e| DoseLogError::CSVError(e.to_string()))?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    reader.set_headers(csv::StringRecord::from(headers));

    // Group rows by (user, peptide); each group becomes one history
    let mut rows_map: HashMap<(String, String), Vec<Row>> = HashMap::new();
    for row_result in reader.deserialize() {
        let row: Row = row_result.map_err(|e| DoseLogError::CSVError(e.to_string()))?;
        rows_map
            .entry((row.id.clone(), row.peptide.clone()))
            .or_default()
            .push(row);
    }

    let mut histories: Vec<DoseHistory> = Vec::new();
    for ((id, peptide), rows) in rows_map {
        let mut doses = Vec::with_capacity(rows.len());
        for row in &rows {
            doses.push(row.parse_dose()?);
        }
        histories.push(DoseHistory::new(id, peptide, doses));
    }

    // Deterministic output order
    histories.sort_by(|a, b| {
        (a.id(), a.peptide()).cmp(&(b.id(), b.peptide()))
    });
    Ok(histories)
}
