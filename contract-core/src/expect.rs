// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Expected-failure assertions.

use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{ContractError, ContractResult};

/// Expects `result` to be an error accepted by `matches`.
///
/// Returns the error so callers can inspect it further.
pub fn expect_err<T, E, P>(result: Result<T, E>, matches: P, description: &str) -> ContractResult<E>
where
    T: Debug,
    E: Debug,
    P: FnOnce(&E) -> bool,
{
    match result {
        Ok(value) => Err(ContractError::expectation(format!(
            "expected {description}, got Ok({value:?})"
        ))),
        Err(error) if matches(&error) => Ok(error),
        Err(error) => Err(ContractError::expectation(format!(
            "expected {description}, got {error:?}"
        ))),
    }
}

/// Expects a check to report a contract violation.
pub fn expect_violation<T: Debug>(result: ContractResult<T>) -> ContractResult<ContractError> {
    expect_err(result, ContractError::is_violation, "a contract violation")
}

/// Runs `f` and expects it to panic; returns the panic message.
pub fn expect_panic<F, T>(f: F) -> ContractResult<String>
where
    F: FnOnce() -> T,
    T: Debug,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Err(ContractError::expectation(format!(
            "expected a panic, got {value:?}"
        ))),
        Err(payload) => Ok(panic_message(payload.as_ref())),
    }
}

/// Like [`expect_panic`], additionally requiring `needle` in the message.
pub fn expect_panic_containing<F, T>(f: F, needle: &str) -> ContractResult<String>
where
    F: FnOnce() -> T,
    T: Debug,
{
    let message = expect_panic(f)?;
    if !message.contains(needle) {
        return Err(ContractError::expectation(format!(
            "panic message {message:?} does not contain {needle:?}"
        )));
    }
    Ok(message)
}

/// Extracts the message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}
