pub mod data;
pub mod error;
pub mod kinetics;

//extension traits
pub use crate::data::builder::DoseHistoryBuilderExt;
pub use crate::data::*;
pub use crate::kinetics::*;
pub use error::PeptikinError;

pub mod prelude {
    pub mod data {
        pub use crate::data::{
            parser::read_doselog, DoseEvent, DoseHistory, DoseUnit, DrugProfile, InjectionSite,
            Peptide,
        };
    }
    pub mod kinetics {
        pub use crate::kinetics::{
            build_time_series, cumulative_level, dose_contribution, next_dose_recommendation,
            peak_trough_statistics, validate_weekly_total, ConcentrationSample,
            DoseRecommendation, Kinetics, PeakTroughStats, TimeSeries, WeeklyTotal,
        };
    }

    //extension traits
    pub use crate::data::builder::DoseHistoryBuilderExt;
    pub use crate::data::*;
    pub use crate::kinetics::*;
}
