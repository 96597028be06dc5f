//! Checks whether the production backend serves the updated applicant photo

pub mod cli;
pub mod core;
pub mod photo_analysis;
pub mod runner;
pub mod types;
pub mod utils;

pub use crate::core::CheckSettings;
pub use runner::{run_check, CheckOutcome};
