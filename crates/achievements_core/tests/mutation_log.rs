use achievements_core::{
    Achievement, ProposalError, ProposalLog, RegistryError, Title, TitleRegistry, TitleRepository,
};
use proptest::prelude::*;

fn registry_with(counts: &[usize]) -> TitleRegistry {
    let titles = counts
        .iter()
        .enumerate()
        .map(|(index, count)| {
            (0..*count).fold(Title::new(format!("T{index}"), index % 2 == 0), |title, n| {
                title.with_achievement(Achievement::new(format!("a{n}"), "d", n % 2 == 0))
            })
        })
        .collect();
    TitleRegistry::new(titles).expect("generated names are unique")
}

fn counts(registry: &TitleRegistry) -> Vec<usize> {
    registry
        .titles()
        .iter()
        .map(Title::achievement_count)
        .collect()
}

proptest! {
    #[test]
    fn append_grows_exactly_one_title(
        initial in prop::collection::vec(0usize..4, 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut registry = registry_with(&initial);
        let target = pick.index(initial.len());

        let count = registry
            .append_achievement(&format!("T{target}"), Achievement::new("new", "d", false))
            .expect("target exists");

        let after = counts(&registry);
        prop_assert_eq!(count, initial[target] + 1);
        for (index, (before, now)) in initial.iter().zip(after.iter()).enumerate() {
            if index == target {
                prop_assert_eq!(*now, before + 1);
            } else {
                prop_assert_eq!(now, before);
            }
        }
    }

    #[test]
    fn append_to_missing_title_changes_nothing(
        initial in prop::collection::vec(0usize..4, 0..8),
    ) {
        let mut registry = registry_with(&initial);
        let err = registry
            .append_achievement("missing", Achievement::new("new", "d", false))
            .unwrap_err();
        prop_assert_eq!(err, RegistryError::TitleNotFound("missing".to_string()));
        prop_assert_eq!(counts(&registry), initial);
    }

    #[test]
    fn increment_like_changes_only_target(
        likes in prop::collection::vec(0u32..50, 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut log = ProposalLog::new();
        for (index, count) in likes.iter().enumerate() {
            log.add_proposal(format!("p{index}"), "d");
            for _ in 0..*count {
                log.increment_like(index).expect("index exists");
            }
        }
        let before = log.proposals().to_vec();
        let target = pick.index(likes.len());

        let updated = log.increment_like(target).expect("index exists");

        prop_assert_eq!(updated, likes[target] + 1);
        for (index, (old, new)) in before.iter().zip(log.proposals()).enumerate() {
            if index == target {
                prop_assert_eq!(new.likes, old.likes + 1);
                prop_assert_eq!(&new.title, &old.title);
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }
}

#[test]
fn increment_like_on_empty_log_is_out_of_range() {
    let mut log = ProposalLog::new();
    assert_eq!(
        log.increment_like(0),
        Err(ProposalError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert!(log.is_empty());
}

#[test]
fn appended_unachieved_entry_demotes_acquired_title() {
    let mut registry = TitleRegistry::new(vec![
        Title::new("Analyst", false).with_achievement(Achievement::new("3D", "Calc 2", true)),
        Title::new("Reporter", false)
            .with_achievement(Achievement::new("Good boy", "Compile 3 surveys", true)),
    ])
    .expect("unique names");
    assert_eq!(registry.ranked()[0].name, "Analyst");

    registry
        .append_achievement("Analyst", Achievement::new("Top Notch", "Calc 1", false))
        .expect("title exists");

    let names = registry
        .ranked()
        .into_iter()
        .map(|title| title.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Reporter", "Analyst"]);
}
