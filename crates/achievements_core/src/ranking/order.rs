//! Title ordering.
//!
//! Acquired titles rank before unacquired ones; within the same state titles
//! are ordered by name. Names collate in three tiers: base letters (accents
//! and case folded away), then accents, then case with lowercase first. An
//! exact code point compare breaks whatever is left, so the order is total.

use crate::model::achievement::Title;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Returns titles in display order without touching the input slice.
///
/// The sort is stable, so titles comparing equal keep their input order.
pub fn rank_titles(titles: &[Title]) -> Vec<&Title> {
    let mut ranked = titles.iter().collect::<Vec<_>>();
    ranked.sort_by(|left, right| compare_titles(left, right));
    ranked
}

/// Comparator behind [`rank_titles`].
pub fn compare_titles(left: &Title, right: &Title) -> Ordering {
    match (left.is_acquired(), right.is_acquired()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(left.name.as_str(), right.name.as_str()),
    }
}

/// Locale-style name comparison.
///
/// `"alpha" < "Alpha" < "École" < "Fisica" < "zeta"`.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    base_key(left)
        .cmp(base_key(right))
        .then_with(|| accent_key(left).cmp(accent_key(right)))
        .then_with(|| case_key(left).cmp(case_key(right)))
        .then_with(|| left.cmp(right))
}

fn base_key(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accent_key(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfd().flat_map(char::to_lowercase)
}

// `false` (lowercase) sorts before `true`.
fn case_key(value: &str) -> impl Iterator<Item = bool> + '_ {
    value.nfd().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::{compare_names, rank_titles};
    use crate::model::achievement::{Achievement, Title};
    use std::cmp::Ordering;

    fn title(name: &str, achieved: &[bool]) -> Title {
        achieved.iter().fold(Title::new(name, false), |title, state| {
            title.with_achievement(Achievement::new("a", "b", *state))
        })
    }

    #[test]
    fn acquired_titles_rank_first_then_alphabetical() {
        let titles = vec![title("B", &[true]), title("A", &[true]), title("C", &[false])];
        let names = rank_titles(&titles)
            .into_iter()
            .map(|title| title.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn unacquired_titles_are_sorted_among_themselves() {
        let titles = vec![
            title("Veteran", &[false, true]),
            title("Perfectionist", &[false, true, true]),
            title("Interstellar", &[true, true]),
        ];
        let names = rank_titles(&titles)
            .into_iter()
            .map(|title| title.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Interstellar", "Perfectionist", "Veteran"]);
    }

    #[test]
    fn rank_does_not_reorder_input() {
        let titles = vec![title("b", &[false]), title("a", &[false])];
        let _ = rank_titles(&titles);
        assert_eq!(titles[0].name, "b");
    }

    #[test]
    fn compare_names_folds_case_before_exact_order() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(compare_names("alpha", "Alpha"), Ordering::Less);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        assert_eq!(compare_names("École", "Fisica"), Ordering::Less);
        assert_eq!(compare_names("Università", "zeta"), Ordering::Less);
        assert_eq!(compare_names("ecole", "école"), Ordering::Less);
        assert_eq!(compare_names("école", "École"), Ordering::Less);
    }

    #[test]
    fn mixed_case_and_accented_titles_rank_like_locale_compare() {
        let titles = ["zeta", "Fisica", "École", "Alpha", "alpha"]
            .into_iter()
            .map(|name| title(name, &[true]))
            .collect::<Vec<_>>();
        let names = rank_titles(&titles)
            .into_iter()
            .map(|title| title.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["alpha", "Alpha", "École", "Fisica", "zeta"]);
    }
}
