//! Submission form drafts and their validation.
//!
//! # Responsibility
//! - Normalize user-entered form text before it reaches the registry.
//! - Reject drafts with blank required fields.
//!
//! # Invariants
//! - A draft that fails validation never produces an achievement/proposal.
//! - Title is checked before description, so the first missing field wins.

use crate::model::achievement::Achievement;
use crate::model::proposal::Proposal;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Form validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is blank after trim.
    MissingTitle,
    /// Description is blank after trim.
    MissingDescription,
}

impl ValidationError {
    /// Translation key for the user-facing message.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::MissingTitle => "achievements.form.error.title_required",
            Self::MissingDescription => "achievements.form.error.description_required",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title is required"),
            Self::MissingDescription => write!(f, "description is required"),
        }
    }
}

impl Error for ValidationError {}

/// Raw content of the "add achievement" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchievementDraft {
    pub title: String,
    pub description: String,
    /// Empty strings are treated as "no image".
    pub image: Option<String>,
}

impl AchievementDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Checks required fields without consuming the draft.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        Ok(())
    }

    /// Builds a not-yet-achieved achievement from a valid draft.
    pub fn into_achievement(self) -> Result<Achievement, ValidationError> {
        self.validate()?;
        let image = self
            .image
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(Achievement {
            title: normalize_text(&self.title),
            description: normalize_text(&self.description),
            achieved: false,
            image,
        })
    }

    /// Builds a zero-like proposal from a valid draft. The image is dropped.
    pub fn into_proposal(self) -> Result<Proposal, ValidationError> {
        self.validate()?;
        Ok(Proposal::new(
            normalize_text(&self.title),
            normalize_text(&self.description),
        ))
    }
}

/// Trims and collapses inner whitespace runs to one space.
pub fn normalize_text(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}
