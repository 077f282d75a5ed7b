//! Achievements visibility preference.
//!
//! Wire values are `none|community|global|both`. Parsing never fails: any
//! unrecognized value shows both sections, matching how the settings screen
//! treats a missing or stale preference.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AchievementsVisibility {
    /// `none`: nothing is rendered.
    Off,
    /// `community`: the global section is suppressed.
    CommunityOnly,
    /// `global`: the community section is suppressed.
    GlobalOnly,
    /// `both` (and any unknown value).
    #[default]
    Both,
}

impl AchievementsVisibility {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" => Self::Off,
            "community" => Self::CommunityOnly,
            "global" => Self::GlobalOnly,
            _ => Self::Both,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "none",
            Self::CommunityOnly => "community",
            Self::GlobalOnly => "global",
            Self::Both => "both",
        }
    }

    pub fn shows_any(self) -> bool {
        self != Self::Off
    }

    pub fn shows_global(self) -> bool {
        matches!(self, Self::GlobalOnly | Self::Both)
    }

    pub fn shows_community(self) -> bool {
        matches!(self, Self::CommunityOnly | Self::Both)
    }
}

impl From<String> for AchievementsVisibility {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}

impl From<AchievementsVisibility> for String {
    fn from(value: AchievementsVisibility) -> Self {
        value.as_str().to_string()
    }
}
