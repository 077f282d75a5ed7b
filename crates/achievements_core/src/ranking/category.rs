//! Category filters and achievement partitions.

use crate::model::achievement::{Achievement, Title};

/// The two title sections shown on the achievements screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Global,
    Community,
}

impl Category {
    pub fn matches(self, title: &Title) -> bool {
        match self {
            Self::Global => !title.community,
            Self::Community => title.community,
        }
    }

    /// Translation key of the section header.
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Global => "achievements.screen.global.title",
            Self::Community => "achievements.screen.community.title",
        }
    }

    /// Translation key shown when the user preference hides this section.
    pub fn disabled_key(self) -> &'static str {
        match self {
            Self::Global => "achievements.screen.disabled.global",
            Self::Community => "achievements.screen.disabled.community",
        }
    }
}

/// Keeps titles matching `predicate`, preserving ranked order.
pub fn filter_by_category<'a, P>(ranked: &[&'a Title], predicate: P) -> Vec<&'a Title>
where
    P: Fn(&Title) -> bool,
{
    ranked
        .iter()
        .copied()
        .filter(|title| predicate(title))
        .collect()
}

/// Achievements of one title split by state, input order kept in each half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementPartition<'a> {
    pub achieved: Vec<&'a Achievement>,
    pub unachieved: Vec<&'a Achievement>,
}

pub fn partition_achievements(title: &Title) -> AchievementPartition<'_> {
    let (achieved, unachieved) = title
        .achievements
        .iter()
        .partition::<Vec<_>, _>(|achievement| achievement.achieved);
    AchievementPartition {
        achieved,
        unachieved,
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_by_category, partition_achievements, Category};
    use crate::model::achievement::{Achievement, Title};
    use crate::ranking::rank_titles;

    #[test]
    fn category_filter_keeps_ranked_order() {
        let titles = vec![
            Title::new("Veteran", true)
                .with_achievement(Achievement::new("x", "y", false)),
            Title::new("Analyst", false).with_achievement(Achievement::new("x", "y", true)),
            Title::new("Interstellar", true)
                .with_achievement(Achievement::new("x", "y", true)),
            Title::new("Perfectionist", false)
                .with_achievement(Achievement::new("x", "y", false)),
        ];
        let ranked = rank_titles(&titles);

        let community = filter_by_category(&ranked, |title| Category::Community.matches(title));
        let names = community
            .iter()
            .map(|title| title.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Interstellar", "Veteran"]);

        let global = filter_by_category(&ranked, |title| Category::Global.matches(title));
        let names = global
            .iter()
            .map(|title| title.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Analyst", "Perfectionist"]);
    }

    #[test]
    fn partition_keeps_relative_order() {
        let title = Title::new("Perfectionist", false)
            .with_achievement(Achievement::new("Flawless", "Get 30 cum laude", false))
            .with_achievement(Achievement::new("Ez", "Get three 30", true))
            .with_achievement(Achievement::new("Sloppy", "Retake an exam", false))
            .with_achievement(Achievement::new("Habits", "Three sessions", true));

        let partition = partition_achievements(&title);
        let achieved = partition
            .achieved
            .iter()
            .map(|achievement| achievement.title.as_str())
            .collect::<Vec<_>>();
        let unachieved = partition
            .unachieved
            .iter()
            .map(|achievement| achievement.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(achieved, vec!["Ez", "Habits"]);
        assert_eq!(unachieved, vec!["Flawless", "Sloppy"]);
    }
}
