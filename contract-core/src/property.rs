// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property Drivers
//!
//! Runs the contracts over generated inputs. The runner is seeded from
//! [`HarnessConfig::seed`], so a failing case reproduces on every run, and
//! failures report the shrunk input.

use std::fmt::Debug;

use proptest::strategy::Strategy;
use proptest::test_runner::{Config, RngAlgorithm, TestCaseError, TestError, TestRng, TestRunner};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::clone::check_clone;
use crate::config::HarnessConfig;
use crate::cursor::{check_forward_backward, check_random_walk, FilterCursor, SliceCursor};
use crate::error::{ContractError, ContractResult};
use crate::serialization::{check_round_trip_all, Format};

fn runner(config: &HarnessConfig) -> TestRunner {
    let mut proptest_config = Config::with_cases(config.cases);
    proptest_config.failure_persistence = None;

    let mut seed = [0u8; 32];
    seed[..8].copy_from_slice(&config.seed.to_le_bytes());
    TestRunner::new_with_rng(proptest_config, TestRng::from_seed(RngAlgorithm::ChaCha, &seed))
}

fn run_property<S, F>(label: &str, strategy: S, config: &HarnessConfig, test: F) -> ContractResult<()>
where
    S: Strategy,
    S::Value: Debug,
    F: Fn(S::Value) -> ContractResult<()>,
{
    debug!(property = label, cases = config.cases, "running property");
    let outcome = runner(config).run(&strategy, |value| {
        test(value).map_err(|e| TestCaseError::fail(e.to_string()))
    });

    match outcome {
        Ok(()) => Ok(()),
        Err(TestError::Fail(reason, value)) => Err(ContractError::Property(format!(
            "{label}: {reason} (minimal input: {value:?})"
        ))),
        Err(TestError::Abort(reason)) => Err(ContractError::Property(format!(
            "{label}: aborted: {reason}"
        ))),
    }
}

/// Every generated value survives a round trip in every format.
pub fn for_all_round_trip<S>(strategy: S, formats: &[Format], config: &HarnessConfig) -> ContractResult<()>
where
    S: Strategy,
    S::Value: Serialize + DeserializeOwned + PartialEq + Debug,
{
    run_property("round_trip", strategy, config, |value| {
        check_round_trip_all(&value, formats)
    })
}

/// Every generated value clones to a distinct, equal value.
pub fn for_all_clone<S>(strategy: S, config: &HarnessConfig) -> ContractResult<()>
where
    S: Strategy,
    S::Value: Clone + PartialEq + Debug + 'static,
{
    run_property("clone", strategy, config, |value| check_clone(&value).map(|_| ()))
}

/// Every generated value equals itself.
pub fn for_all_reflexive<S>(strategy: S, config: &HarnessConfig) -> ContractResult<()>
where
    S: Strategy,
    S::Value: PartialEq + Debug,
{
    run_property("reflexive", strategy, config, |value| {
        #[allow(clippy::eq_op)]
        let equal = value == value;
        if equal {
            Ok(())
        } else {
            Err(ContractError::equality(
                "reflexive",
                format!("{value:?} is not equal to itself"),
            ))
        }
    })
}

/// A filtering cursor over every generated vector behaves like a plain
/// cursor over the pre-filtered vector.
pub fn for_all_cursor<S, T, P>(strategy: S, predicate: P, config: &HarnessConfig) -> ContractResult<()>
where
    S: Strategy<Value = Vec<T>>,
    T: Clone + PartialEq + Debug,
    P: Fn(&T) -> bool,
{
    let steps = config.cursor_steps;
    let seed = config.seed;

    run_property("cursor", strategy, config, |items| {
        let filtered: Vec<T> = items.iter().filter(|item| predicate(item)).cloned().collect();

        let mut subject = FilterCursor::new(SliceCursor::new(&items), |item: &T| predicate(item));
        check_forward_backward(&mut subject, &filtered)?;

        let mut subject = FilterCursor::new(SliceCursor::new(&items), |item: &T| predicate(item));
        let mut reference = SliceCursor::new(&filtered);
        check_random_walk(&mut subject, &mut reference, steps, seed)
    })
}
