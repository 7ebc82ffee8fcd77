// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for equality

mod common;

use common::fixtures::{Annotation, CaseBlindName, NoteBlind, PseudoRow};
use contract_core::*;

#[test]
fn test_row_equality_contract_holds() {
    EqualityContract::new(PseudoRow::sample)
        .with_mutation("a", |r| r.a += 1)
        .with_mutation("b", |r| r.b = -r.b)
        .with_mutation("c", |r| r.c = 0)
        .check_all()
        .unwrap();
}

#[test]
fn test_annotation_equality_contract_holds() {
    EqualityContract::new(Annotation::sample)
        .with_mutation("text", |a| a.text.push('!'))
        .with_mutation("x", |a| a.x += 1.0)
        .with_mutation("y", |a| a.y *= 2.0)
        .with_mutation("tags", |a| a.tags.push("extra".into()))
        .with_mutation("visible", |a| a.visible = !a.visible)
        .check_all()
        .unwrap();
}

#[test]
fn test_mutation_names_keep_registration_order() {
    let contract = EqualityContract::new(PseudoRow::sample)
        .with_mutation("c", |r| r.c += 1)
        .with_mutation("a", |r| r.a += 1);

    assert_eq!(contract.mutation_names(), vec!["c", "a"]);
}

#[test]
fn test_ignored_field_is_reported() {
    let result = EqualityContract::new(|| NoteBlind {
        id: 7,
        note: "first".into(),
    })
    .with_mutation("id", |n| n.id += 1)
    .with_mutation("note", |n| n.note.push_str(" edited"))
    .check_mutations();

    match result {
        Err(ContractError::Equality { check, detail }) => {
            assert_eq!(check, "mutation:note");
            assert!(detail.contains("did not break equality"));
        }
        other => panic!("expected an equality violation, got {other:?}"),
    }
}

#[test]
fn test_nan_is_not_reflexive() {
    let result = EqualityContract::new(|| f64::NAN).check_reflexive();

    let error = expect_violation(result).unwrap();
    assert!(matches!(error, ContractError::Equality { ref check, .. } if check == "reflexive"));
}

#[test]
fn test_symmetric_check_passes_for_fresh_instances() {
    EqualityContract::new(|| vec![1, 2, 3])
        .check_symmetric()
        .unwrap();
}

#[test]
fn test_hash_consistency_for_equal_rows() {
    check_hash_consistency(&PseudoRow::sample(), &PseudoRow::sample()).unwrap();
}

#[test]
fn test_hash_contract_covers_mutations() {
    EqualityContract::new(PseudoRow::sample)
        .with_mutation("a", |r| r.a = 100)
        .with_mutation("b", |r| r.b = 200)
        .check_hash()
        .unwrap();
}

#[test]
fn test_hash_inconsistent_with_eq_is_reported() {
    let result = check_hash_consistency(
        &CaseBlindName("Alice".into()),
        &CaseBlindName("ALICE".into()),
    );

    assert!(matches!(result, Err(ContractError::Hash { .. })));
}

#[test]
fn test_hash_consistency_requires_equal_inputs() {
    let result = check_hash_consistency(&PseudoRow::new(1, 1, 1), &PseudoRow::new(2, 2, 2));

    assert!(matches!(result, Err(ContractError::Expectation(_))));
}
