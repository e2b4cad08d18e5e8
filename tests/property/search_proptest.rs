//! Property-based tests for search filtering and membership sets

use groupdesk::egui_app::groups::filter_groups;
use groupdesk::shared::groups::{Group, MembershipField};
use proptest::prelude::*;

fn arb_group() -> impl Strategy<Value = Group> {
    ("[a-z0-9]{1,6}", "[A-Za-z ]{0,12}", prop::collection::vec("[a-c]{1,2}", 0..5)).prop_map(
        |(id, name, users)| {
            let users: Vec<&str> = users.iter().map(String::as_str).collect();
            Group::new(id, name).with_users(&users)
        },
    )
}

proptest! {
    #[test]
    fn test_filter_is_an_ordered_subset(
        groups in prop::collection::vec(arb_group(), 0..20),
        term in "[A-Za-z]{0,3}",
    ) {
        let filtered = filter_groups(&groups, &term);
        let mut remaining = groups.iter();
        for group in &filtered {
            prop_assert!(group.name.to_lowercase().contains(&term.to_lowercase()));
            prop_assert!(remaining.any(|g| g == group));
        }
    }

    #[test]
    fn test_empty_term_keeps_everything(groups in prop::collection::vec(arb_group(), 0..20)) {
        prop_assert_eq!(filter_groups(&groups, ""), groups);
    }

    #[test]
    fn test_filter_ignores_case(
        groups in prop::collection::vec(arb_group(), 0..20),
        term in "[A-Za-z]{0,3}",
    ) {
        prop_assert_eq!(
            filter_groups(&groups, &term.to_uppercase()),
            filter_groups(&groups, &term.to_lowercase())
        );
    }

    #[test]
    fn test_filter_is_idempotent(
        groups in prop::collection::vec(arb_group(), 0..20),
        term in "[A-Za-z]{0,3}",
    ) {
        let once = filter_groups(&groups, &term);
        prop_assert_eq!(filter_groups(&once, &term), once.clone());
    }

    #[test]
    fn test_insert_twice_equals_insert_once(group in arb_group(), value in "[a-d]{1,2}") {
        let mut once = group.clone();
        once.insert(MembershipField::Users, &value);
        let mut twice = once.clone();
        prop_assert!(!twice.insert(MembershipField::Users, &value));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_clears_every_occurrence(group in arb_group(), value in "[a-c]{1,2}") {
        let mut group = group;
        group.remove(MembershipField::Users, &value);
        prop_assert!(!group.users.contains(&value));
        prop_assert!(!group.remove(MembershipField::Users, &value));
    }
}
