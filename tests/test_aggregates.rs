//! Tests for the derived aggregates: total quantity and the leading country.

mod common;

use common::*;

#[test]
fn total_is_the_sum_over_the_unfiltered_list() {
    let catalog = sample_catalog();
    let merged = merge_quantities(&catalog, &[record("Austria", 2), record("Croatia", 9)]);
    assert_eq!(total_quantity(&merged), 11);
}

#[test]
fn total_of_an_untracked_list_is_zero() {
    let merged = merge_quantities(&sample_catalog(), &[]);
    assert_eq!(total_quantity(&merged), 0);
}

#[test]
fn max_returns_first_entry_on_ties() {
    let catalog = sample_catalog();
    let merged = merge_quantities(&catalog, &[record("Belgium", 5), record("Croatia", 5)]);

    let leader = max_quantity_country(&merged).unwrap();
    assert_eq!(leader.name, "Belgium");
    assert_eq!(leader.quantity, 5);
}

#[test]
fn max_is_none_when_all_quantities_are_zero() {
    let merged = merge_quantities(&sample_catalog(), &[]);
    assert!(max_quantity_country(&merged).is_none());
}

#[test]
fn aggregates_ignore_the_active_filter() {
    let catalog = sample_catalog();
    let merged = merge_quantities(&catalog, &[record("Austria", 4)]);

    // A filter that excludes Austria must not change the aggregates.
    let filtered = filter_countries(&merged, "Belgium");
    assert!(filtered.iter().all(|entry| entry.name != "Austria"));
    assert_eq!(total_quantity(&merged), 4);
    assert_eq!(max_quantity_country(&merged).unwrap().name, "Austria");
}
