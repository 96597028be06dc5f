// src/core/mod.rs
//! Backend access and the fixed parameters of the check

pub mod service_client;
pub mod settings;

pub use service_client::{FetchError, ServiceClient};
pub use settings::CheckSettings;
