// src/photo_analysis.rs
//! Classifies the applicant photo by its length

use crate::utils::{char_length, truncate_chars};

/// Length of the SVG placeholder the backend served before the fix
pub const PLACEHOLDER_PHOTO_LENGTH: usize = 698;
/// Anything longer than this is treated as a real uploaded JPEG
pub const NEW_PHOTO_MIN_LENGTH: usize = 10_000;
/// Size of the updated photo observed after the fix
pub const EXPECTED_NEW_PHOTO_LENGTH: usize = 60_499;
pub const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoClass {
    New,
    OldPlaceholder,
    Unknown,
}

impl PhotoClass {
    pub fn from_length(length: usize) -> Self {
        if length > NEW_PHOTO_MIN_LENGTH {
            Self::New
        } else if length == PLACEHOLDER_PHOTO_LENGTH {
            Self::OldPlaceholder
        } else {
            Self::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "✅ NEW PHOTO (Updated JPEG)",
            Self::OldPlaceholder => "❌ OLD PHOTO (SVG placeholder)",
            Self::Unknown => "⚠️  Unknown photo length",
        }
    }

    pub fn shows_preview(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Whether the backend is serving the updated photo.
///
/// Decided on length alone, so a photo of exactly 10,000 characters is an
/// unknown class but still counts as deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentVerdict {
    Deployed,
    NotDeployed,
}

impl DeploymentVerdict {
    pub fn from_length(length: usize) -> Self {
        if length < NEW_PHOTO_MIN_LENGTH {
            Self::NotDeployed
        } else {
            Self::Deployed
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhotoAnalysis<'a> {
    pub length: usize,
    pub class: PhotoClass,
    pub verdict: DeploymentVerdict,
    pub preview: &'a str,
}

impl<'a> PhotoAnalysis<'a> {
    pub fn analyze(photo: &'a str) -> Self {
        let length = char_length(photo);
        Self {
            length,
            class: PhotoClass::from_length(length),
            verdict: DeploymentVerdict::from_length(length),
            preview: truncate_chars(photo, PREVIEW_CHARS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(PhotoClass::from_length(0), PhotoClass::Unknown);
        assert_eq!(PhotoClass::from_length(697), PhotoClass::Unknown);
        assert_eq!(PhotoClass::from_length(698), PhotoClass::OldPlaceholder);
        assert_eq!(PhotoClass::from_length(699), PhotoClass::Unknown);
        assert_eq!(PhotoClass::from_length(10_000), PhotoClass::Unknown);
        assert_eq!(PhotoClass::from_length(10_001), PhotoClass::New);
        assert_eq!(PhotoClass::from_length(60_499), PhotoClass::New);
    }

    #[test]
    fn test_verdict_boundary() {
        assert_eq!(DeploymentVerdict::from_length(698), DeploymentVerdict::NotDeployed);
        assert_eq!(DeploymentVerdict::from_length(9_999), DeploymentVerdict::NotDeployed);
        assert_eq!(DeploymentVerdict::from_length(10_000), DeploymentVerdict::Deployed);
        assert_eq!(DeploymentVerdict::from_length(60_499), DeploymentVerdict::Deployed);
    }

    #[test]
    fn test_analyze_builds_preview() {
        let photo = format!("data:image/jpeg;base64,{}", "A".repeat(60_000));
        let analysis = PhotoAnalysis::analyze(&photo);

        assert_eq!(analysis.length, photo.len());
        assert_eq!(analysis.class, PhotoClass::New);
        assert_eq!(analysis.verdict, DeploymentVerdict::Deployed);
        assert_eq!(analysis.preview.chars().count(), PREVIEW_CHARS);
        assert!(analysis.preview.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_only_unknown_hides_preview() {
        assert!(PhotoClass::New.shows_preview());
        assert!(PhotoClass::OldPlaceholder.shows_preview());
        assert!(!PhotoClass::Unknown.shows_preview());
    }
}
