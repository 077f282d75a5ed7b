//! Title registry trait and in-memory implementation.

use crate::model::achievement::{Achievement, Title};
use crate::ranking::rank_titles;
use log::{info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry construction and mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Title name is blank after trim.
    EmptyTitleName,
    /// Two titles share the same name.
    DuplicateTitleName(String),
    /// No title matches the requested name.
    TitleNotFound(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitleName => write!(f, "title name must not be blank"),
            Self::DuplicateTitleName(name) => write!(f, "duplicate title name: `{name}`"),
            Self::TitleNotFound(name) => write!(f, "title not found: `{name}`"),
        }
    }
}

impl Error for RegistryError {}

/// Data access contract for title collections.
pub trait TitleRepository {
    /// Titles in registration order.
    fn titles(&self) -> &[Title];
    /// Appends `achievement` to the title named exactly `title_name`.
    ///
    /// Returns the title's new achievement count.
    fn append_achievement(
        &mut self,
        title_name: &str,
        achievement: Achievement,
    ) -> RegistryResult<usize>;
}

/// Session-scoped, in-memory title collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleRegistry {
    titles: Vec<Title>,
}

impl TitleRegistry {
    /// Builds a registry, rejecting blank or duplicate names.
    pub fn new(titles: Vec<Title>) -> RegistryResult<Self> {
        let mut seen = BTreeSet::<&str>::new();
        for title in &titles {
            if title.name.trim().is_empty() {
                return Err(RegistryError::EmptyTitleName);
            }
            if !seen.insert(title.name.as_str()) {
                return Err(RegistryError::DuplicateTitleName(title.name.clone()));
            }
        }
        Ok(Self { titles })
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Exact-match lookup.
    pub fn find(&self, name: &str) -> Option<&Title> {
        self.titles.iter().find(|title| title.name == name)
    }

    /// Title names in registration order, as offered by the form dropdown.
    pub fn names(&self) -> Vec<&str> {
        self.titles.iter().map(|title| title.name.as_str()).collect()
    }

    /// Shortcut for `rank_titles(self.titles())`.
    pub fn ranked(&self) -> Vec<&Title> {
        rank_titles(&self.titles)
    }

    pub fn into_titles(self) -> Vec<Title> {
        self.titles
    }
}

impl TitleRepository for TitleRegistry {
    fn titles(&self) -> &[Title] {
        &self.titles
    }

    fn append_achievement(
        &mut self,
        title_name: &str,
        achievement: Achievement,
    ) -> RegistryResult<usize> {
        let Some(title) = self
            .titles
            .iter_mut()
            .find(|title| title.name == title_name)
        else {
            warn!(
                "event=achievement_append module=registry status=not_found name_len={}",
                title_name.chars().count()
            );
            return Err(RegistryError::TitleNotFound(title_name.to_string()));
        };

        title.achievements.push(achievement);
        let count = title.achievements.len();
        info!(
            "event=achievement_append module=registry status=ok count={} acquired={}",
            count,
            title.is_acquired()
        );
        Ok(count)
    }
}
