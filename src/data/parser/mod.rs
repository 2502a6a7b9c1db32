pub mod doselog;

// Expose the DoseLogError type
pub use doselog::DoseLogError;
// Expose the main loading functions
pub use doselog::{read_doselog, read_doselog_from_reader};
