// src/types/position.rs
//! Position records as returned by the backend listing endpoint

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const APPLICANT_DETAILS_KEY: &str = "applicantDetails";
const PHONE_KEY: &str = "phone";

// ===== Position Record =====

/// One job application. Only the fields the photo check reads are typed,
/// everything else is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "applicantDetails", default)]
    pub applicant_details: Option<ApplicantDetails>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicantDetails {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Position {
    /// Convert a raw listing entry into a typed record
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).context("Failed to read matched position record")
    }

    /// Applicant name; a record without one cannot be reported on
    pub fn applicant_name(&self) -> Result<&str> {
        self.applicant_details
            .as_ref()
            .and_then(|details| details.name.as_deref())
            .context("Matched position has no applicantDetails.name")
    }

    pub fn applicant_phone(&self) -> Option<&str> {
        self.applicant_details
            .as_ref()
            .and_then(|details| details.phone.as_deref())
    }

    /// Status text, `N/A` when the backend left it out
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or("N/A")
    }

    /// Photo payload, empty when missing
    pub fn photo(&self) -> &str {
        self.applicant_details
            .as_ref()
            .and_then(|details| details.photo.as_deref())
            .unwrap_or("")
    }
}

/// Phone number of a raw listing entry, if it has a string one
pub fn raw_phone(record: &Value) -> Option<&str> {
    record
        .get(APPLICANT_DETAILS_KEY)
        .and_then(|details| details.get(PHONE_KEY))
        .and_then(Value::as_str)
}

/// First entry whose `applicantDetails.phone` equals `phone`
pub fn find_by_phone(records: Vec<Value>, phone: &str) -> Option<Value> {
    records
        .into_iter()
        .find(|record| raw_phone(record) == Some(phone))
}
