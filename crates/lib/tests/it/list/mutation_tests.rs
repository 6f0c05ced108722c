//! Single-element mutation tests

use ordered_list::{ListError, OrderedList};

use crate::helpers::*;

// ===== ADD =====

#[test]
fn test_add_appends() {
    let mut list = OrderedList::new();
    for n in 1..=4 {
        assert!(list.add(n));
        assert_eq!(list.size(), n as usize);
        assert_eq!(list.get(list.size() - 1), Ok(&n));
    }
    assert_list(&list, "[1, 2, 3, 4]", 4);
}

#[test]
fn test_add_makes_list_non_empty() {
    let mut list = OrderedList::new();
    assert!(list.is_empty());
    list.add(0);
    assert!(!list.is_empty());
}

// ===== ADD AT =====

#[test]
fn test_add_at_middle() {
    let mut list = OrderedList::from(vec![1, 2, 4]);
    assert_list(&list, "[1, 2, 4]", 3);

    list.add_at(2, 3).unwrap();
    assert_list(&list, "[1, 2, 3, 4]", 4);
}

#[test]
fn test_add_at_front_shifts_everything() {
    let mut list = numbered(3);
    list.add_at(0, 0).unwrap();
    assert_list(&list, "[0, 1, 2, 3]", 4);
}

#[test]
fn test_add_at_size_appends() {
    let mut list = numbered(3);
    let size = list.size();
    list.add_at(size, 4).unwrap();
    assert_list(&list, "[1, 2, 3, 4]", 4);
}

#[test]
fn test_add_at_into_empty_list() {
    let mut list = OrderedList::new();
    list.add_at(0, "only").unwrap();
    assert_list(&list, "[only]", 1);
}

#[test]
fn test_add_at_past_size_fails() {
    let mut list = numbered(3);
    let err = list.add_at(list.size() + 1, 9).unwrap_err();
    assert_eq!(err, ListError::IndexOutOfRange { index: 4, size: 3 });
    assert_list(&list, "[1, 2, 3]", 3);
}

// ===== SET =====

#[test]
fn test_set_replaces_and_returns_previous() {
    let mut list = numbered(4);
    assert_eq!(list.set(0, -1), Ok(1));
    assert_eq!(list.get(0), Ok(&-1));
    for n in 2..=4 {
        assert_eq!(list.get((n - 1) as usize), Ok(&n));
    }
    assert_eq!(list.size(), 4);
}

#[test]
fn test_set_on_empty_list_fails() {
    let mut list: OrderedList<i32> = OrderedList::new();
    assert!(list.set(0, 1).unwrap_err().is_out_of_range());
    assert!(list.is_empty());
}

// ===== REMOVE AT =====

#[test]
fn test_remove_at() {
    let mut list = numbered(5);

    assert_eq!(list.remove_at(0), Ok(1));
    assert_list(&list, "[2, 3, 4, 5]", 4);

    assert_eq!(list.remove_at(3), Ok(5));
    assert_list(&list, "[2, 3, 4]", 3);

    assert_eq!(list.remove_at(1), Ok(3));
    assert_list(&list, "[2, 4]", 2);
}

#[test]
fn test_remove_at_out_of_range() {
    let mut list = numbered(2);
    assert_eq!(
        list.remove_at(2),
        Err(ListError::IndexOutOfRange { index: 2, size: 2 })
    );
    assert_eq!(list.size(), 2);
}

#[test]
fn test_remove_last_element_empties_list() {
    let mut list = OrderedList::from(vec!['a']);
    assert_eq!(list.remove_at(0), Ok('a'));
    assert_list(&list, "[]", 0);
}

// ===== REMOVE BY VALUE =====

#[test]
fn test_remove_by_value() {
    let mut list = numbered(5);

    assert!(list.remove(&1));
    assert_list(&list, "[2, 3, 4, 5]", 4);

    assert!(list.remove(&5));
    assert_list(&list, "[2, 3, 4]", 3);

    assert!(list.remove(&3));
    assert_list(&list, "[2, 4]", 2);
}

#[test]
fn test_remove_only_first_occurrence() {
    let mut list = OrderedList::from(vec![7, 1, 7, 2, 7]);
    assert!(list.remove(&7));
    assert_list(&list, "[1, 7, 2, 7]", 4);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut list = numbered(3);
    assert!(!list.remove(&42));
    assert_list(&list, "[1, 2, 3]", 3);
}

#[test]
fn test_remove_matches_remove_at_of_index_of() {
    let mut by_value = OrderedList::from(vec![3, 1, 4, 1, 5]);
    let mut by_index = by_value.clone();

    by_value.remove(&1);
    let index = by_index.index_of(&1).unwrap();
    by_index.remove_at(index).unwrap();

    assert_eq!(by_value, by_index);
}

// ===== CLEAR =====

#[test]
fn test_clear() {
    let mut list = numbered(4);
    assert!(!list.is_empty());
    assert_eq!(list.size(), 4);

    list.clear();
    assert_list(&list, "[]", 0);

    // Clearing an empty list is fine too
    list.clear();
    assert!(list.is_empty());
}
