// src/types/mod.rs
pub mod position;

pub use position::{ApplicantDetails, Position};
