// src/runner.rs
//! The check itself: fetch, find the applicant, judge the photo

use anyhow::Result;
use std::io::Write;
use tracing::{error, info};

use crate::core::{CheckSettings, FetchError, ServiceClient};
use crate::photo_analysis::{
    DeploymentVerdict, PhotoAnalysis, EXPECTED_NEW_PHOTO_LENGTH, PLACEHOLDER_PHOTO_LENGTH,
};
use crate::types::position::{find_by_phone, Position};
use crate::utils::{format_thousands, truncate_chars};

/// Commit that carries the photo fix on the backend
pub const FIX_COMMIT: &str = "1bb5a62";
const BODY_EXCERPT_CHARS: usize = 500;

/// How a run ended. Only an HTTP status failure and a missing applicant
/// exit non-zero; every other branch ends the program normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Deployed,
    NotDeployed,
    HttpStatus,
    NotFound,
    Timeout,
    Network,
    Parse,
    Unexpected,
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::HttpStatus | Self::NotFound => 1,
            // Old photo still exits 0, as the original tool did.
            Self::Deployed
            | Self::NotDeployed
            | Self::Timeout
            | Self::Network
            | Self::Parse
            | Self::Unexpected => 0,
        }
    }
}

/// Run the photo check, writing the report to `out`.
///
/// Never fails: anything not covered by a dedicated message is printed as an
/// unexpected error, with the full error chain on stderr.
pub async fn run_check<W: Write>(settings: &CheckSettings, out: &mut W) -> CheckOutcome {
    match check(settings, out).await {
        Ok(outcome) => {
            info!("Check finished: {:?}", outcome);
            outcome
        }
        Err(e) => {
            error!("Unexpected error during check: {:#}", e);
            let _ = writeln!(out, "❌ Unexpected error: {e:#}");
            eprintln!("{e:?}");
            CheckOutcome::Unexpected
        }
    }
}

async fn check<W: Write>(settings: &CheckSettings, out: &mut W) -> Result<CheckOutcome> {
    writeln!(out, "🔍 Checking production backend for Deepak's photo...\n")?;

    let client = ServiceClient::new(settings)?;
    writeln!(out, "Fetching: {}\n", client.positions_url())?;

    let records = match client.fetch_positions().await {
        Ok(records) => records,
        Err(e) => return report_fetch_error(&e, out),
    };
    writeln!(out, "✅ Received {} positions\n", records.len())?;

    let Some(record) = find_by_phone(records, &settings.target_phone) else {
        writeln!(out, "❌ Deepak's position not found")?;
        return Ok(CheckOutcome::NotFound);
    };
    let position = Position::from_value(record)?;

    writeln!(out, "📝 Found Deepak's position:")?;
    writeln!(out, "   Name: {}", position.applicant_name()?)?;
    writeln!(out, "   Phone: {}", position.applicant_phone().unwrap_or_default())?;
    writeln!(out, "   Status: {}", position.status_or_default())?;

    let analysis = PhotoAnalysis::analyze(position.photo());
    report_photo(&analysis, out)?;
    report_verdict(analysis.verdict, out)
}

fn report_fetch_error<W: Write>(error: &FetchError, out: &mut W) -> Result<CheckOutcome> {
    match error {
        FetchError::Status { status, body } => {
            writeln!(out, "❌ Error: HTTP {}", status.as_u16())?;
            writeln!(out, "{}", truncate_chars(body, BODY_EXCERPT_CHARS))?;
            Ok(CheckOutcome::HttpStatus)
        }
        FetchError::Timeout(_) => {
            writeln!(out, "❌ Timeout: Backend is taking too long to respond")?;
            writeln!(out, "   It might be cold starting. Wait 30 seconds and try again.")?;
            Ok(CheckOutcome::Timeout)
        }
        FetchError::Network(e) => {
            writeln!(out, "❌ Network error: {}", error_chain(e))?;
            Ok(CheckOutcome::Network)
        }
        FetchError::Decode { source, body } => {
            writeln!(out, "❌ JSON parse error: {source}")?;
            writeln!(out, "Response: {}", truncate_chars(body, BODY_EXCERPT_CHARS))?;
            Ok(CheckOutcome::Parse)
        }
    }
}

fn report_photo<W: Write>(analysis: &PhotoAnalysis<'_>, out: &mut W) -> Result<()> {
    writeln!(out, "\n📸 Photo Analysis:")?;
    writeln!(out, "   Length: {} characters", format_thousands(analysis.length))?;
    writeln!(out, "   {}", analysis.class.label())?;
    if analysis.class.shows_preview() {
        writeln!(out, "   Photo preview: {}...", analysis.preview)?;
    }

    writeln!(out, "\n📊 Expected values:")?;
    writeln!(
        out,
        "   Old photo: {} characters",
        format_thousands(PLACEHOLDER_PHOTO_LENGTH)
    )?;
    writeln!(
        out,
        "   New photo: ~{} characters",
        format_thousands(EXPECTED_NEW_PHOTO_LENGTH)
    )?;
    Ok(())
}

fn report_verdict<W: Write>(verdict: DeploymentVerdict, out: &mut W) -> Result<CheckOutcome> {
    match verdict {
        DeploymentVerdict::NotDeployed => {
            writeln!(out, "\n❌ PROBLEM: Backend is still returning old photo")?;
            writeln!(out, "   This means the fix hasn't been deployed to production yet.")?;
            writeln!(out, "   Backend needs to redeploy with commit {FIX_COMMIT} or later.")?;
            Ok(CheckOutcome::NotDeployed)
        }
        DeploymentVerdict::Deployed => {
            writeln!(out, "\n✅ SUCCESS: Backend is returning updated photo!")?;
            Ok(CheckOutcome::Deployed)
        }
    }
}

/// reqwest keeps the interesting part (DNS, refused connection) in the
/// source chain, so join it into one line
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
