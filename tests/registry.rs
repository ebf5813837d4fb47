//! Registry invariants that hold without a browser.

use std::collections::HashSet;

use storefront_e2e::scenarios;

#[test]
fn registry_covers_every_journey() {
    assert_eq!(scenarios::all().len(), 26);
}

#[test]
fn journey_names_are_unique() {
    let names: Vec<_> = scenarios::all().iter().map(|s| s.name).collect();
    let unique: HashSet<_> = names.iter().copied().collect();
    assert_eq!(names.len(), unique.len());
}

#[test]
fn every_journey_is_tagged_and_described() {
    for scenario in scenarios::all() {
        assert!(!scenario.tags.is_empty(), "{} has no tags", scenario.name);
        assert!(
            !scenario.description.is_empty(),
            "{} has no description",
            scenario.name
        );
    }
}

#[test]
fn filter_narrows_by_substring() {
    let orders = scenarios::filtered(Some("order"));
    assert!(!orders.is_empty());
    assert!(orders.iter().all(|s| s.name.contains("order")));

    let none = scenarios::filtered(Some("no-such-journey"));
    assert!(none.is_empty());

    assert_eq!(scenarios::filtered(None).len(), scenarios::all().len());
}

#[test]
fn smoke_subset_spans_the_suite_areas() {
    let smoke: Vec<_> = scenarios::all()
        .into_iter()
        .filter(|s| s.tags.contains(&"smoke"))
        .collect();
    assert!(smoke.len() >= 4);
    assert!(smoke.iter().any(|s| s.tags.contains(&"auth")));
    assert!(smoke.iter().any(|s| s.tags.contains(&"cart")));
    assert!(smoke.iter().any(|s| s.tags.contains(&"catalog")));
}
