// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cursor contract checks.
//!
//! Subjects are compared either against an expected sequence or against a
//! reference cursor over the same logical elements. Every divergence is
//! reported as [`ContractError::Cursor`] with the step at which it occurred.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{ContractError, ContractResult};

use super::ListCursor;

/// Outcome of a single step, comparable across cursors.
#[derive(Debug, PartialEq)]
enum Observed<T> {
    Item(T),
    NoSuchElement,
    Flag(bool),
    Index(Option<usize>),
}

fn observe<T>(result: ContractResult<T>, step: usize) -> ContractResult<Observed<T>> {
    match result {
        Ok(item) => Ok(Observed::Item(item)),
        Err(ContractError::NoSuchElement) => Ok(Observed::NoSuchElement),
        Err(other) => Err(ContractError::cursor(step, format!("unexpected error: {other}"))),
    }
}

fn expect_no_such_element<T: Debug>(
    result: ContractResult<T>,
    step: usize,
    what: &str,
) -> ContractResult<()> {
    match result {
        Err(ContractError::NoSuchElement) => Ok(()),
        Ok(item) => Err(ContractError::cursor(
            step,
            format!("{what} past the boundary returned {item:?}"),
        )),
        Err(other) => Err(ContractError::cursor(
            step,
            format!("{what} past the boundary failed with {other}"),
        )),
    }
}

fn expect_position<C: ListCursor>(subject: &C, expected: usize, step: usize) -> ContractResult<()> {
    if subject.next_index() != expected {
        return Err(ContractError::cursor(
            step,
            format!("next_index is {}, expected {expected}", subject.next_index()),
        ));
    }
    if subject.previous_index() != expected.checked_sub(1) {
        return Err(ContractError::cursor(
            step,
            format!(
                "previous_index is {:?}, expected {:?}",
                subject.previous_index(),
                expected.checked_sub(1)
            ),
        ));
    }
    Ok(())
}

/// Full forward pass, full backward pass, and both boundaries.
///
/// `subject` must start positioned before its first element.
pub fn check_forward_backward<C>(subject: &mut C, expected: &[C::Item]) -> ContractResult<()>
where
    C: ListCursor,
    C::Item: PartialEq + Debug,
{
    let mut step = 0;

    if subject.has_previous() {
        return Err(ContractError::cursor(step, "has_previous at the start"));
    }
    expect_no_such_element(subject.previous(), step, "previous")?;

    for (i, want) in expected.iter().enumerate() {
        step += 1;
        expect_position(subject, i, step)?;
        if !subject.has_next() {
            return Err(ContractError::cursor(step, format!("has_next false before element {i}")));
        }
        let got = subject.next()?;
        if got != *want {
            return Err(ContractError::cursor(
                step,
                format!("next returned {got:?}, expected {want:?}"),
            ));
        }
    }

    step += 1;
    expect_position(subject, expected.len(), step)?;
    if subject.has_next() {
        return Err(ContractError::cursor(step, "has_next at the end"));
    }
    expect_no_such_element(subject.next(), step, "next")?;
    expect_position(subject, expected.len(), step)?;

    for (i, want) in expected.iter().enumerate().rev() {
        step += 1;
        if !subject.has_previous() {
            return Err(ContractError::cursor(
                step,
                format!("has_previous false after element {i}"),
            ));
        }
        let got = subject.previous()?;
        if got != *want {
            return Err(ContractError::cursor(
                step,
                format!("previous returned {got:?}, expected {want:?}"),
            ));
        }
        expect_position(subject, i, step)?;
    }

    step += 1;
    if subject.has_previous() {
        return Err(ContractError::cursor(step, "has_previous back at the start"));
    }
    expect_no_such_element(subject.previous(), step, "previous")?;
    expect_position(subject, 0, step)
}

/// At every position, `next`, `previous`, `next` must return the same
/// element three times, in step with the reference cursor.
pub fn check_turnaround<C, R>(subject: &mut C, reference: &mut R) -> ContractResult<()>
where
    C: ListCursor,
    R: ListCursor<Item = C::Item>,
    C::Item: PartialEq + Debug,
{
    let mut step = 0;
    while reference.has_next() {
        let want = reference.next()?;

        step += 1;
        let forward = observe(subject.next(), step)?;
        step += 1;
        let back = observe(subject.previous(), step)?;
        step += 1;
        let again = observe(subject.next(), step)?;

        for (label, got) in [("next", forward), ("previous", back), ("next again", again)] {
            match got {
                Observed::Item(ref item) if *item == want => {}
                other => {
                    return Err(ContractError::cursor(
                        step,
                        format!("{label} observed {other:?}, reference returned {want:?}"),
                    ))
                }
            }
        }
    }

    step += 1;
    if subject.has_next() {
        return Err(ContractError::cursor(step, "subject has more elements than the reference"));
    }
    Ok(())
}

/// Seeded random walk issuing the same moves and queries on both cursors.
pub fn check_random_walk<C, R>(
    subject: &mut C,
    reference: &mut R,
    steps: usize,
    seed: u64,
) -> ContractResult<()>
where
    C: ListCursor,
    R: ListCursor<Item = C::Item>,
    C::Item: PartialEq + Debug,
{
    let mut rng = StdRng::seed_from_u64(seed);
    debug!(steps, seed, "starting random cursor walk");

    for step in 0..steps {
        let (op, got, want) = match rng.gen_range(0..6) {
            0 => ("next", observe(subject.next(), step)?, observe(reference.next(), step)?),
            1 => (
                "previous",
                observe(subject.previous(), step)?,
                observe(reference.previous(), step)?,
            ),
            2 => (
                "has_next",
                Observed::Flag(subject.has_next()),
                Observed::Flag(reference.has_next()),
            ),
            3 => (
                "has_previous",
                Observed::Flag(subject.has_previous()),
                Observed::Flag(reference.has_previous()),
            ),
            4 => (
                "next_index",
                Observed::Index(Some(subject.next_index())),
                Observed::Index(Some(reference.next_index())),
            ),
            _ => (
                "previous_index",
                Observed::Index(subject.previous_index()),
                Observed::Index(reference.previous_index()),
            ),
        };

        if got != want {
            return Err(ContractError::cursor(
                step,
                format!("{op}: subject observed {got:?}, reference observed {want:?}"),
            ));
        }
    }

    Ok(())
}

/// `remove`, `set` and `add` must all report [`ContractError::Unsupported`].
pub fn check_unsupported<C>(subject: &mut C, sample: C::Item) -> ContractResult<()>
where
    C: ListCursor,
    C::Item: Clone,
{
    let results = [
        ("remove", subject.remove()),
        ("set", subject.set(sample.clone())),
        ("add", subject.add(sample)),
    ];
    for (op, result) in results {
        match result {
            Err(ContractError::Unsupported(_)) => {}
            Ok(()) => {
                return Err(ContractError::expectation(format!(
                    "{op} succeeded on a read-only cursor"
                )))
            }
            Err(other) => {
                return Err(ContractError::expectation(format!(
                    "{op} failed with {other} instead of an unsupported-operation error"
                )))
            }
        }
    }
    Ok(())
}

/// The walk yields `expected` in order and stays exhausted afterwards.
pub fn check_graph<I>(iter: I, expected: &[I::Item]) -> ContractResult<()>
where
    I: Iterator,
    I::Item: PartialEq + Debug,
{
    let mut iter = iter;
    for (step, want) in expected.iter().enumerate() {
        match iter.next() {
            Some(ref got) if got == want => {}
            got => {
                return Err(ContractError::cursor(
                    step,
                    format!("graph walk yielded {got:?}, expected {want:?}"),
                ))
            }
        }
    }
    for step in expected.len()..expected.len() + 2 {
        if let Some(extra) = iter.next() {
            return Err(ContractError::cursor(
                step,
                format!("graph walk yielded {extra:?} after exhaustion"),
            ));
        }
    }
    Ok(())
}
