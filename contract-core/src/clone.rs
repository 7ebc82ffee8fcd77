// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone Contract
//!
//! A clone is a distinct value of the same runtime type that compares
//! equal to its source. For deep copies, mutating the source afterwards
//! must leave the clone untouched, which catches `Rc<RefCell<_>>` and
//! similar shared state leaking through `Clone`.

use std::any::Any;
use std::fmt::Debug;

use crate::error::{ContractError, ContractResult};

/// Object-safe clone, for checking trait objects.
pub trait CloneBox: Any + Debug {
    /// Clone into a new box.
    fn box_clone(&self) -> Box<dyn CloneBox>;

    /// Upcast for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Value equality against another trait object.
    fn box_eq(&self, other: &dyn CloneBox) -> bool;
}

impl<T> CloneBox for T
where
    T: Clone + PartialEq + Debug + 'static,
{
    fn box_clone(&self) -> Box<dyn CloneBox> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn box_eq(&self, other: &dyn CloneBox) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Checks that `original.clone()` compares equal to `original`.
///
/// A statically typed clone is always a new value of type `T`, so identity
/// and type are not checked here; [`check_clone_boxed`] checks both for
/// trait objects. Returns the clone.
pub fn check_clone<T>(original: &T) -> ContractResult<T>
where
    T: Clone + PartialEq + Debug,
{
    let copy = original.clone();

    if copy != *original {
        return Err(ContractError::clone_violation(format!(
            "clone {copy:?} is not equal to original {original:?}"
        )));
    }

    Ok(copy)
}

/// Clone check for a boxed trait object, where the runtime type matters.
pub fn check_clone_boxed(original: &dyn CloneBox) -> ContractResult<Box<dyn CloneBox>> {
    let copy = original.box_clone();

    let original_addr = original.as_any() as *const dyn Any as *const ();
    let copy_addr = copy.as_any() as *const dyn Any as *const ();
    if std::mem::size_of_val(original) != 0 && original_addr == copy_addr {
        return Err(ContractError::clone_violation(
            "boxed clone shares the original's address",
        ));
    }

    if original.as_any().type_id() != copy.as_any().type_id() {
        return Err(ContractError::clone_violation(format!(
            "boxed clone changed runtime type: {original:?} became {copy:?}"
        )));
    }
    if !copy.box_eq(original) || !original.box_eq(&*copy) {
        return Err(ContractError::clone_violation(format!(
            "boxed clone {copy:?} is not equal to original {original:?}"
        )));
    }

    Ok(copy)
}

/// Checks that a clone does not observe later mutations of its source.
///
/// `mutate` must change `original` in a way visible to `PartialEq`.
pub fn check_deep_copy<T, F>(original: &mut T, mutate: F) -> ContractResult<T>
where
    T: Clone + PartialEq + Debug + 'static,
    F: FnOnce(&mut T),
{
    let copy = check_clone(original)?;
    let before = format!("{copy:?}");

    mutate(original);

    if *original == copy {
        return Err(ContractError::clone_violation(format!(
            "mutation of the original is visible through the clone: {copy:?}"
        )));
    }
    let after = format!("{copy:?}");
    if before != after {
        return Err(ContractError::clone_violation(format!(
            "clone changed from {before} to {after} when the original was mutated"
        )));
    }

    Ok(copy)
}
