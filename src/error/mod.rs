use thiserror::Error;

use crate::data::event::DoseEventError;
use crate::data::parser::DoseLogError;
use crate::data::profile::ProfileError;

#[derive(Error, Debug)]
pub enum PeptikinError {
    #[error("Invalid drug profile: {0}")]
    Profile(#[from] ProfileError),
    #[error("Invalid dose event: {0}")]
    Dose(#[from] DoseEventError),
    #[error("Error reading dose log: {0}")]
    DoseLog(#[from] DoseLogError),
}
