// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Equality Contract
//!
//! Two independently constructed instances with identical fields must be
//! equal in both directions. Changing one field on one side must break
//! equality, and mirroring the change on the other side must restore it.
//!
//! ```ignore
//! EqualityContract::new(|| Point { x: 1, y: 2 })
//!     .with_mutation("x", |p| p.x += 1)
//!     .with_mutation("y", |p| p.y += 1)
//!     .check_all()?;
//! ```

use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::{ContractError, ContractResult};

/// A named single-field change applied to a fixture.
pub struct Mutation<T> {
    name: String,
    apply: Box<dyn Fn(&mut T)>,
}

impl<T> Mutation<T> {
    /// Create a named mutation.
    pub fn new(name: impl Into<String>, apply: impl Fn(&mut T) + 'static) -> Self {
        Self {
            name: name.into(),
            apply: Box::new(apply),
        }
    }

    /// The mutation's name, used in violation reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the mutation to `target`.
    pub fn apply(&self, target: &mut T) {
        (self.apply)(target)
    }
}

/// Equality contract for a value type built by a factory.
pub struct EqualityContract<T> {
    factory: Box<dyn Fn() -> T>,
    mutations: Vec<Mutation<T>>,
}

impl<T: PartialEq + Debug> EqualityContract<T> {
    /// `factory` must return a fresh, identical instance on every call.
    pub fn new(factory: impl Fn() -> T + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            mutations: Vec::new(),
        }
    }

    /// Register a single-field mutation.
    pub fn with_mutation(mut self, name: impl Into<String>, apply: impl Fn(&mut T) + 'static) -> Self {
        self.mutations.push(Mutation::new(name, apply));
        self
    }

    /// Names of the registered mutations, in registration order.
    pub fn mutation_names(&self) -> Vec<&str> {
        self.mutations.iter().map(Mutation::name).collect()
    }

    fn fresh_pair(&self) -> (T, T) {
        ((self.factory)(), (self.factory)())
    }

    /// `a == a`.
    #[allow(clippy::eq_op)]
    pub fn check_reflexive(&self) -> ContractResult<()> {
        let a = (self.factory)();
        if a != a {
            return Err(ContractError::equality(
                "reflexive",
                format!("{a:?} is not equal to itself"),
            ));
        }
        Ok(())
    }

    /// `a == b` and `b == a` for two fresh instances.
    pub fn check_symmetric(&self) -> ContractResult<()> {
        let (a, b) = self.fresh_pair();
        assert_equal_both_ways("symmetric", &a, &b)
    }

    /// Flip-and-restore check for every registered mutation.
    pub fn check_mutations(&self) -> ContractResult<()> {
        for mutation in &self.mutations {
            let check = format!("mutation:{}", mutation.name());
            trace!(check = %check, "checking mutation");

            let (mut a, mut b) = self.fresh_pair();
            assert_equal_both_ways(&check, &a, &b)?;

            mutation.apply(&mut a);
            if a == b || b == a {
                return Err(ContractError::equality(
                    check,
                    format!("mutation did not break equality: {a:?} vs {b:?}"),
                ));
            }

            mutation.apply(&mut b);
            assert_equal_both_ways(&check, &a, &b)?;
        }
        Ok(())
    }

    /// Reflexive, symmetric, then mutation checks.
    pub fn check_all(&self) -> ContractResult<()> {
        self.check_reflexive()?;
        self.check_symmetric()?;
        self.check_mutations()
    }
}

impl<T: PartialEq + Debug + Hash> EqualityContract<T> {
    /// Fresh instances hash equal, and stay hash-equal after each mirrored
    /// mutation.
    pub fn check_hash(&self) -> ContractResult<()> {
        let (a, b) = self.fresh_pair();
        check_hash_consistency(&a, &b)?;

        for mutation in &self.mutations {
            let (mut a, mut b) = self.fresh_pair();
            mutation.apply(&mut a);
            mutation.apply(&mut b);
            check_hash_consistency(&a, &b).map_err(|e| {
                ContractError::hash(format!("after mutation {}: {e}", mutation.name()))
            })?;
        }
        Ok(())
    }
}

/// Equal values must produce equal hashes.
pub fn check_hash_consistency<T: PartialEq + Hash + Debug>(a: &T, b: &T) -> ContractResult<()> {
    if a != b {
        return Err(ContractError::expectation(format!(
            "hash consistency needs equal values, got {a:?} and {b:?}"
        )));
    }
    let (ha, hb) = (hash_of(a), hash_of(b));
    if ha != hb {
        return Err(ContractError::hash(format!(
            "{a:?} hashed to {ha:#x} but equal {b:?} hashed to {hb:#x}"
        )));
    }
    Ok(())
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn assert_equal_both_ways<T: PartialEq + Debug>(check: &str, a: &T, b: &T) -> ContractResult<()> {
    if a != b {
        return Err(ContractError::equality(check, format!("{a:?} != {b:?}")));
    }
    if b != a {
        return Err(ContractError::equality(
            check,
            format!("not symmetric: {a:?} == {b:?} but not the reverse"),
        ));
    }
    Ok(())
}
