//! Render-ready projection of the achievements screen.
//!
//! # Responsibility
//! - Combine ranking, category filters, partitions, banners and the user
//!   visibility preference into one value the UI shell renders as-is.
//!
//! # Invariants
//! - Recomputed from the registry on every call; nothing is cached.
//! - Achieved entries are always listed; unachieved ones only with `show_all`.
//! - `AchievementsVisibility::Off` suppresses every section, proposals included.

use crate::model::achievement::{Achievement, Decoration, Title};
use crate::model::proposal::Proposal;
use crate::model::visibility::AchievementsVisibility;
use crate::ranking::{filter_by_category, partition_achievements, rank_titles, Category};

pub const DISABLED_ALL_KEY: &str = "achievements.screen.disabled.all";
pub const PROPOSALS_TITLE_KEY: &str = "achievements.screen.proposals.title";

/// UI-owned toggles plus the stored preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverviewRequest {
    pub visibility: AchievementsVisibility,
    /// "See more": also list unachieved achievements.
    pub show_all: bool,
    /// Community section expanded.
    pub show_community: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCard {
    pub name: String,
    pub acquired: bool,
    pub banner: Option<Decoration>,
    pub achieved: Vec<Achievement>,
    /// Empty unless the request asked for all achievements.
    pub unachieved: Vec<Achievement>,
    /// Unachieved achievements left out of `unachieved`.
    pub hidden_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Titles(Vec<TitleCard>),
    /// Section header only; the user has not expanded it.
    Collapsed,
    /// Hidden by the visibility preference.
    Disabled { message_key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub category: Category,
    pub title_key: &'static str,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalsView {
    pub title_key: &'static str,
    pub items: Vec<Proposal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AchievementsOverview {
    Disabled {
        message_key: &'static str,
    },
    Visible {
        global: SectionView,
        community: SectionView,
        proposals: ProposalsView,
    },
}

impl AchievementsOverview {
    /// Cards of one section, empty when the section is not listing titles.
    pub fn cards(&self, category: Category) -> &[TitleCard] {
        let Self::Visible {
            global, community, ..
        } = self
        else {
            return &[];
        };
        let section = match category {
            Category::Global => global,
            Category::Community => community,
        };
        match &section.content {
            SectionContent::Titles(cards) => cards.as_slice(),
            _ => &[],
        }
    }
}

pub fn build_overview(
    titles: &[Title],
    proposals: &[Proposal],
    request: &OverviewRequest,
) -> AchievementsOverview {
    if !request.visibility.shows_any() {
        return AchievementsOverview::Disabled {
            message_key: DISABLED_ALL_KEY,
        };
    }

    let ranked = rank_titles(titles);
    let global = if request.visibility.shows_global() {
        SectionContent::Titles(section_cards(&ranked, Category::Global, request.show_all))
    } else {
        SectionContent::Disabled {
            message_key: Category::Global.disabled_key(),
        }
    };
    let community = if !request.show_community {
        SectionContent::Collapsed
    } else if request.visibility.shows_community() {
        SectionContent::Titles(section_cards(
            &ranked,
            Category::Community,
            request.show_all,
        ))
    } else {
        SectionContent::Disabled {
            message_key: Category::Community.disabled_key(),
        }
    };

    AchievementsOverview::Visible {
        global: section(Category::Global, global),
        community: section(Category::Community, community),
        proposals: ProposalsView {
            title_key: PROPOSALS_TITLE_KEY,
            items: proposals.to_vec(),
        },
    }
}

/// Card for a single title.
pub fn title_card(title: &Title, show_all: bool) -> TitleCard {
    let partition = partition_achievements(title);
    let hidden_count = if show_all {
        0
    } else {
        partition.unachieved.len()
    };
    let unachieved = if show_all {
        partition.unachieved.into_iter().cloned().collect()
    } else {
        Vec::new()
    };
    TitleCard {
        name: title.name.clone(),
        acquired: title.is_acquired(),
        banner: title.banner(),
        achieved: partition.achieved.into_iter().cloned().collect(),
        unachieved,
        hidden_count,
    }
}

fn section_cards(ranked: &[&Title], category: Category, show_all: bool) -> Vec<TitleCard> {
    filter_by_category(ranked, |title| category.matches(title))
        .into_iter()
        .map(|title| title_card(title, show_all))
        .collect()
}

fn section(category: Category, content: SectionContent) -> SectionView {
    SectionView {
        category,
        title_key: category.title_key(),
        content,
    }
}
