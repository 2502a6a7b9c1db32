//! Static peptide library
//!
//! The library mirrors the fixed catalogue users select peptides from: each
//! entry carries descriptive metadata, and the drugs the estimation engine
//! models additionally carry a [DrugProfile]. Lookup is case-insensitive
//! by name.
//!
//! The two modeled drugs use one canonical parameter set: tirzepatide with
//! a 120 h (5-day) half-life and a 15 mg weekly limit, retatrutide with a
//! 144 h (6-day) half-life and a 12 mg weekly limit; both with a 24 h
//! absorption phase, a 24 h plateau, and a 0.95 peak fraction.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::data::profile::DrugProfile;

/// One catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peptide {
    /// Display name, also the lookup key
    pub name: String,
    /// Short description of the compound
    pub description: String,
    /// Typical dosage range, free text
    pub dosage_range: String,
    /// Typical dosing frequency, free text
    pub frequency: String,
    /// Administration route, free text
    pub administration_route: String,
    /// Storage requirements, free text
    pub storage_requirements: String,
    /// Kinetic parameters, present only for drugs the engine models
    pub profile: Option<DrugProfile>,
}

impl Peptide {
    fn new(
        name: &str,
        description: &str,
        dosage_range: &str,
        frequency: &str,
        administration_route: &str,
        storage_requirements: &str,
        profile: Option<DrugProfile>,
    ) -> Self {
        Peptide {
            name: name.to_string(),
            description: description.to_string(),
            dosage_range: dosage_range.to_string(),
            frequency: frequency.to_string(),
            administration_route: administration_route.to_string(),
            storage_requirements: storage_requirements.to_string(),
            profile,
        }
    }
}

lazy_static! {
    /// Kinetic parameters for tirzepatide: 5-day half-life, 15 mg/week limit
    pub static ref TIRZEPATIDE: DrugProfile =
        DrugProfile::new(120.0, 24.0, 0.95, 15.0).expect("tirzepatide profile");

    /// Kinetic parameters for retatrutide: 6-day half-life, 12 mg/week limit
    pub static ref RETATRUTIDE: DrugProfile =
        DrugProfile::new(144.0, 24.0, 0.95, 12.0).expect("retatrutide profile");

    /// The full peptide catalogue
    pub static ref PEPTIDE_LIBRARY: Vec<Peptide> = vec![
        Peptide::new(
            "Tirzepatide",
            "GLP-1/GIP receptor agonist for weight management",
            "2.5mg - 15mg weekly",
            "Weekly",
            "Subcutaneous injection",
            "Refrigerate 2-8°C",
            Some(TIRZEPATIDE.clone()),
        ),
        Peptide::new(
            "Retatrutide",
            "Triple hormone receptor agonist (GLP-1/GIP/Glucagon)",
            "1mg - 12mg weekly",
            "Weekly",
            "Subcutaneous injection",
            "Refrigerate 2-8°C",
            Some(RETATRUTIDE.clone()),
        ),
        Peptide::new(
            "ARA-290",
            "Erythropoietin derivative for tissue protection",
            "2mg - 8mg",
            "2-3 times per week",
            "Subcutaneous injection",
            "Refrigerate 2-8°C",
            None,
        ),
        Peptide::new(
            "KPV",
            "Anti-inflammatory tripeptide",
            "200mcg - 500mcg",
            "Daily or as needed",
            "Subcutaneous injection or topical",
            "Refrigerate 2-8°C",
            None,
        ),
        Peptide::new(
            "GLOW 70",
            "Combination: BPC-157 10mg, TB4 10mg, GHK-CU 50mg",
            "0.5ml - 1ml per dose",
            "Daily or every other day",
            "Subcutaneous injection",
            "Refrigerate 2-8°C, use within 30 days of reconstitution",
            None,
        ),
        Peptide::new(
            "Selank",
            "Anxiolytic and cognitive enhancing peptide",
            "150mcg - 300mcg",
            "Daily",
            "Nasal spray or subcutaneous injection",
            "Refrigerate 2-8°C",
            None,
        ),
        Peptide::new(
            "Semax",
            "Nootropic peptide for cognitive enhancement",
            "200mcg - 600mcg",
            "Daily",
            "Nasal spray or subcutaneous injection",
            "Refrigerate 2-8°C",
            None,
        ),
        Peptide::new(
            "HGH",
            "Human Growth Hormone",
            "2IU - 4IU",
            "Daily",
            "Subcutaneous injection",
            "Refrigerate 2-8°C, use within 14 days of reconstitution",
            None,
        ),
        Peptide::new(
            "Thymosin Alpha 1 (TA1)",
            "Immune system modulator",
            "1.6mg - 3.2mg",
            "2-3 times per week",
            "Subcutaneous injection",
            "Refrigerate 2-8°C",
            None,
        ),
        Peptide::new(
            "NAD+",
            "Nicotinamide Adenine Dinucleotide for cellular energy",
            "100mg - 500mg",
            "2-3 times per week",
            "Subcutaneous injection or IV",
            "Refrigerate 2-8°C",
            None,
        ),
        Peptide::new(
            "MOTS-C",
            "Mitochondrial-derived peptide for metabolic enhancement",
            "5mg - 20mg",
            "2-3 times per week",
            "Subcutaneous injection",
            "Refrigerate 2-8°C",
            None,
        ),
    ];
}

/// Look up a catalogue entry by name (case-insensitive)
pub fn lookup(name: &str) -> Option<&'static Peptide> {
    PEPTIDE_LIBRARY
        .iter()
        .find(|peptide| peptide.name.eq_ignore_ascii_case(name))
}

/// Look up the kinetic profile for a peptide, if the engine models it
pub fn profile_for(name: &str) -> Option<&'static DrugProfile> {
    lookup(name).and_then(|peptide| peptide.profile.as_ref())
}
