//! Sorting and sublist tests

use std::cmp::Ordering;

use ordered_list::{ListError, OrderedList};

use crate::helpers::*;

// ===== SORT =====

#[test]
fn test_sort_natural_order() {
    let mut list = OrderedList::from(vec![5, 3, 9, 1, 3]);
    list.sort();
    assert_list(&list, "[1, 3, 3, 5, 9]", 5);
}

#[test]
fn test_sort_strings() {
    let mut list = OrderedList::from(vec!["pear", "apple", "fig"]);
    list.sort();
    assert_list(&list, "[apple, fig, pear]", 3);
}

#[test]
fn test_sort_by_comparator() {
    let mut list = numbered(5);
    list.sort_by(|a, b| b.cmp(a));
    assert_list(&list, "[5, 4, 3, 2, 1]", 5);
}

#[test]
fn test_sort_by_sign_comparator() {
    // A comparator producing a negative/zero/positive signal
    let signal = |a: &i64, b: &i64| a - b;
    let mut list = OrderedList::from(vec![30, -4, 12]);
    list.sort_by(|a, b| signal(a, b).cmp(&0));
    assert_list(&list, "[-4, 12, 30]", 3);
}

#[test]
fn test_sort_by_is_stable() {
    let mut list = OrderedList::from(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
    list.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(list, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
}

#[test]
fn test_sort_by_key() {
    let mut list = OrderedList::from(vec!["ccc", "a", "bb"]);
    list.sort_by_key(|s| s.len());
    assert_list(&list, "[a, bb, ccc]", 3);
}

#[test]
fn test_sort_floats_with_partial_cmp() {
    let mut list = OrderedList::from(vec![2.5, -1.0, 0.5]);
    list.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    assert_list(&list, "[-1, 0.5, 2.5]", 3);
}

#[test]
fn test_sort_empty_and_single() {
    let mut empty: OrderedList<i32> = OrderedList::new();
    empty.sort();
    assert!(empty.is_empty());

    let mut single = numbered(1);
    single.sort_by(|a, b| b.cmp(a));
    assert_list(&single, "[1]", 1);
}

// ===== SUBLIST =====

#[test]
fn test_sublist_half_open() {
    let list = numbered(4);
    let sub = list.sublist(1, 3).unwrap();
    assert_list(&sub, "[2, 3]", 2);
}

#[test]
fn test_sublist_full_and_empty() {
    let list = numbered(4);
    assert_eq!(list.sublist(0, 4).unwrap(), list);
    assert!(list.sublist(2, 2).unwrap().is_empty());
    assert!(list.sublist(4, 4).unwrap().is_empty());
}

#[test]
fn test_sublist_is_independent_copy() {
    let mut list = numbered(4);
    let mut sub = list.sublist(0, 2).unwrap();

    sub.set(0, 100).unwrap();
    list.add(5);

    assert_list(&list, "[1, 2, 3, 4, 5]", 5);
    assert_list(&sub, "[100, 2]", 2);
}

#[test]
fn test_sublist_invalid_ranges() {
    let list = numbered(4);
    assert_eq!(
        list.sublist(2, 5),
        Err(ListError::IndexOutOfRange { index: 5, size: 4 })
    );
    assert_eq!(
        list.sublist(3, 1),
        Err(ListError::IndexOutOfRange { index: 3, size: 4 })
    );
}
