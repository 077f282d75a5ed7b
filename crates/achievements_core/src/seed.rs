//! Title registry seed configuration.
//!
//! # Responsibility
//! - Parse the JSON seed document into a validated `TitleRegistry`.
//! - Ship one embedded default seed shared by every screen.
//!
//! # Invariants
//! - Only seed documents with a supported `version` are accepted.
//! - Seeds with duplicate or blank title names are rejected, not repaired.

use crate::model::achievement::Title;
use crate::registry::title_registry::{RegistryError, TitleRegistry};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Seed document version understood by this build.
pub const SEED_VERSION: u32 = 1;

const DEFAULT_SEED_JSON: &str = include_str!("../seed/titles.json");

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    UnsupportedVersion { found: u32, supported: u32 },
    Registry(RegistryError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read seed: {err}"),
            Self::Parse(err) => write!(f, "invalid seed JSON: {err}"),
            Self::UnsupportedVersion { found, supported } => write!(
                f,
                "seed version {found} is not supported (expected {supported})"
            ),
            Self::Registry(err) => write!(f, "invalid seed registry: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Registry(err) => Some(err),
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

impl From<std::io::Error> for SeedError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<RegistryError> for SeedError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

/// On-disk seed shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDocument {
    pub version: u32,
    pub titles: Vec<Title>,
}

/// Parses a seed document and builds a registry from it.
pub fn registry_from_json(json: &str) -> SeedResult<TitleRegistry> {
    let document: SeedDocument = serde_json::from_str(json)?;
    if document.version != SEED_VERSION {
        return Err(SeedError::UnsupportedVersion {
            found: document.version,
            supported: SEED_VERSION,
        });
    }
    Ok(TitleRegistry::new(document.titles)?)
}

pub fn registry_from_path(path: impl AsRef<Path>) -> SeedResult<TitleRegistry> {
    let json = std::fs::read_to_string(path)?;
    registry_from_json(json.as_str())
}

/// Registry built from the embedded seed.
pub fn default_registry() -> SeedResult<TitleRegistry> {
    registry_from_json(DEFAULT_SEED_JSON)
}
