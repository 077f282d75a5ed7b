//! Title and achievement records.
//!
//! # Responsibility
//! - Define the canonical title shape consumed by ranking and overview code.
//! - Resolve banner decorations for fully acquired titles.
//!
//! # Invariants
//! - `Title::is_acquired` is recomputed on every call, so appending an
//!   achievement is observed by the next ranking pass without invalidation.
//! - An empty title is acquired (every achievement of an empty list is
//!   achieved).
//! - Unknown decoration names resolve to `Decoration::Fallback`.

use serde::{Deserialize, Serialize};

/// One trackable accomplishment inside a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Short display title.
    pub title: String,
    /// What the user has to do to earn it.
    pub description: String,
    /// Seeded state; no core operation toggles it.
    pub achieved: bool,
    /// Opaque image reference supplied by the UI shell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Achievement {
    pub fn new(title: impl Into<String>, description: impl Into<String>, achieved: bool) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            achieved,
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Background banner shown behind an acquired title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Decoration {
    Fallback,
    Universe,
    Tree,
    Diamond,
}

impl Decoration {
    /// Resolves a symbolic name, falling back for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "universe" => Self::Universe,
            "tree" => Self::Tree,
            "diamond" => Self::Diamond,
            _ => Self::Fallback,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::Universe => "universe",
            Self::Tree => "tree",
            Self::Diamond => "diamond",
        }
    }

    /// Asset file the UI shell loads for this banner.
    pub fn asset_key(self) -> &'static str {
        match self {
            Self::Fallback => "background_fallback.gif",
            Self::Universe => "background_universe.gif",
            Self::Tree => "background_tree.gif",
            Self::Diamond => "background_diamond.gif",
        }
    }
}

impl From<String> for Decoration {
    fn from(value: String) -> Self {
        Self::from_name(value.as_str())
    }
}

impl From<Decoration> for String {
    fn from(value: Decoration) -> Self {
        value.name().to_string()
    }
}

/// Named collection of achievements.
///
/// `name` is the lookup key used by the submission form and must be unique
/// inside one registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub name: String,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    /// `true` for community titles, `false` for global ones.
    #[serde(default)]
    pub community: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration: Option<Decoration>,
}

impl Title {
    pub fn new(name: impl Into<String>, community: bool) -> Self {
        Self {
            name: name.into(),
            achievements: Vec::new(),
            community,
            decoration: None,
        }
    }

    pub fn with_achievement(mut self, achievement: Achievement) -> Self {
        self.achievements.push(achievement);
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Returns whether every contained achievement is achieved.
    pub fn is_acquired(&self) -> bool {
        self.achievements.iter().all(|achievement| achievement.achieved)
    }

    pub fn achievement_count(&self) -> usize {
        self.achievements.len()
    }

    pub fn achieved_count(&self) -> usize {
        self.achievements
            .iter()
            .filter(|achievement| achievement.achieved)
            .count()
    }

    /// Banner to render behind this title.
    ///
    /// Only acquired titles get a banner; a missing decoration falls back to
    /// `Decoration::Fallback`.
    pub fn banner(&self) -> Option<Decoration> {
        if self.is_acquired() {
            Some(self.decoration.unwrap_or(Decoration::Fallback))
        } else {
            None
        }
    }
}
