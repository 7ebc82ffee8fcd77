// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for clone

mod common;

use common::fixtures::{Annotation, PseudoRow, SharedLabel};
use contract_core::*;

#[test]
fn test_clone_is_distinct_and_equal() {
    let row = PseudoRow::sample();
    let copy = check_clone(&row).unwrap();

    assert_eq!(copy, row);
}

#[test]
fn test_zero_sized_clone_passes() {
    #[derive(Debug, Clone, PartialEq)]
    struct Marker;

    check_clone(&Marker).unwrap();
}

#[test]
fn test_unequal_clone_is_reported() {
    #[derive(Debug, PartialEq)]
    struct Counter(u32);

    // Clone that forgets the count.
    impl Clone for Counter {
        fn clone(&self) -> Self {
            Counter(0)
        }
    }

    let result = check_clone(&Counter(5));
    assert!(matches!(result, Err(ContractError::Clone { .. })));
}

#[test]
fn test_clone_of_borrowing_value() {
    #[derive(Debug, Clone, PartialEq)]
    struct Window<'a> {
        rows: &'a [PseudoRow],
        offset: usize,
    }

    let rows = vec![PseudoRow::sample(), PseudoRow::new(4, 5, 6)];
    let window = Window {
        rows: &rows[1..],
        offset: 1,
    };

    let copy = check_clone(&window).unwrap();
    assert_eq!(copy.rows, &rows[1..]);
    assert_eq!(copy.offset, 1);
}

#[test]
fn test_boxed_clone_keeps_runtime_type() {
    let original: Box<dyn CloneBox> = Box::new(Annotation::sample());
    let copy = check_clone_boxed(&*original).unwrap();

    assert!(copy.as_any().downcast_ref::<Annotation>().is_some());
}

#[test]
fn test_boxed_clone_of_primitive() {
    let copy = check_clone_boxed(&42u64).unwrap();

    assert_eq!(copy.as_any().downcast_ref::<u64>(), Some(&42));
}

#[test]
fn test_box_eq_rejects_other_types() {
    let byte: &dyn CloneBox = &1u8;

    assert!(byte.box_eq(&1u8));
    assert!(!byte.box_eq(&1u16));
}

#[test]
fn test_deep_copy_of_nested_list() {
    let mut annotation = Annotation::sample();
    let copy = check_deep_copy(&mut annotation, |a| a.tags.push("mutated".into())).unwrap();

    assert_eq!(copy.tags, vec!["series-1".to_string()]);
    assert_eq!(annotation.tags.len(), 2);
}

#[test]
fn test_shared_interior_state_is_reported() {
    let mut shared = SharedLabel::new("before");
    let result = check_deep_copy(&mut shared, |s| *s.label.borrow_mut() = "after".into());

    match result {
        Err(ContractError::Clone { detail }) => assert!(detail.contains("after")),
        other => panic!("expected a clone violation, got {other:?}"),
    }
}

#[test]
fn test_deep_copy_with_invisible_mutation_is_reported() {
    let mut row = PseudoRow::sample();
    let result = check_deep_copy(&mut row, |_| {});

    assert!(matches!(result, Err(ContractError::Clone { .. })));
}
