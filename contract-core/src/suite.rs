// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Suite DSL for contract checks.
//!
//! Provides a fluent API for grouping named checks that share a
//! configuration, running them in order and collecting a report.
//!
//! ```ignore
//! let report = Suite::new("point")
//!     .check("equality", |_| EqualityContract::new(Point::origin).check_all())
//!     .check("round_trip", |ctx| {
//!         check_round_trip_all(&Point::origin(), &ctx.config().formats)
//!     })
//!     .run()?;
//! assert!(report.is_success());
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::HarnessConfig;
use crate::error::{ContractError, ContractResult};
use crate::expect::panic_message;
use crate::fixture::CallCounter;

/// Type alias for setup and check closures.
pub type CheckFn = Box<dyn Fn(&SuiteContext) -> ContractResult<()>>;

/// A named check within a suite.
struct NamedCheck {
    name: String,
    check_fn: CheckFn,
}

/// Context available during suite setup and checks.
#[derive(Debug)]
pub struct SuiteContext {
    config: HarnessConfig,
    checks_run: CallCounter,
}

impl SuiteContext {
    /// The suite's configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Number of checks started so far.
    pub fn checks_run(&self) -> usize {
        self.checks_run.count()
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The check returned `Ok`.
    Passed,
    /// The check returned an error or panicked.
    Failed { reason: String },
    /// Not run because an earlier check failed under fail-fast.
    Skipped,
}

/// Report entry for one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub elapsed_ms: u64,
}

/// Report of a whole suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub run_id: Uuid,
    pub suite: String,
    pub checks: Vec<CheckReport>,
}

impl SuiteReport {
    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.checks.iter().filter(|c| pred(&c.outcome)).count()
    }

    /// Checks that passed.
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Passed))
    }

    /// Checks that failed.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// Checks skipped by fail-fast.
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    /// True when nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Look up a check by name.
    pub fn check(&self, name: &str) -> Option<&CheckReport> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> ContractResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `Ok` when nothing failed, otherwise the first failure.
    pub fn into_result(self) -> ContractResult<Self> {
        let first_failure = self.checks.iter().find_map(|c| match &c.outcome {
            Outcome::Failed { reason } => Some((c.name.clone(), reason.clone())),
            _ => None,
        });
        match first_failure {
            None => Ok(self),
            Some((name, reason)) => Err(ContractError::Other(anyhow::anyhow!(
                "suite '{}': check '{}' failed: {}",
                self.suite,
                name,
                reason
            ))),
        }
    }
}

/// Builder for contract suites.
pub struct Suite {
    name: String,
    config: HarnessConfig,
    setup_fn: Option<CheckFn>,
    checks: Vec<NamedCheck>,
}

impl Suite {
    /// Create a new suite with the default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: HarnessConfig::default(),
            setup_fn: None,
            checks: Vec::new(),
        }
    }

    /// Use a custom configuration.
    pub fn with_config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a setup function to run before the checks.
    pub fn setup<F>(mut self, f: F) -> Self
    where
        F: Fn(&SuiteContext) -> ContractResult<()> + 'static,
    {
        self.setup_fn = Some(Box::new(f));
        self
    }

    /// Add a named check.
    pub fn check<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&SuiteContext) -> ContractResult<()> + 'static,
    {
        self.checks.push(NamedCheck {
            name: name.into(),
            check_fn: Box::new(f),
        });
        self
    }

    /// Names of the registered checks, in order.
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name.as_str()).collect()
    }

    /// Run the suite.
    ///
    /// A failing setup aborts the run with its error. Failing or panicking
    /// checks are recorded in the report.
    pub fn run(self) -> ContractResult<SuiteReport> {
        self.config.validate()?;
        let run_id = Uuid::new_v4();
        info!(
            suite = %self.name,
            %run_id,
            "Starting suite with {} checks",
            self.checks.len()
        );

        let context = SuiteContext {
            config: self.config,
            checks_run: CallCounter::new(),
        };

        if let Some(setup_fn) = &self.setup_fn {
            info!("Running suite setup");
            setup_fn(&context)?;
        }

        let mut reports = Vec::with_capacity(self.checks.len());
        let mut halted = false;

        for check in &self.checks {
            if halted {
                reports.push(CheckReport {
                    name: check.name.clone(),
                    outcome: Outcome::Skipped,
                    elapsed_ms: 0,
                });
                continue;
            }

            context.checks_run.increment();
            let started = Instant::now();
            let result = panic::catch_unwind(AssertUnwindSafe(|| (check.check_fn)(&context)));
            let elapsed = started.elapsed();

            let outcome = match result {
                Ok(Ok(())) => Outcome::Passed,
                Ok(Err(error)) => Outcome::Failed {
                    reason: error.to_string(),
                },
                Err(payload) => Outcome::Failed {
                    reason: format!("panicked: {}", panic_message(payload.as_ref())),
                },
            };

            match &outcome {
                Outcome::Failed { reason } => {
                    warn!(check = %check.name, %reason, "Check failed");
                    halted = context.config.fail_fast;
                }
                _ => info!(check = %check.name, "Check passed"),
            }
            if elapsed > context.config.slow_check_threshold {
                warn!(
                    check = %check.name,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Slow check"
                );
            }

            reports.push(CheckReport {
                name: check.name.clone(),
                outcome,
                elapsed_ms: elapsed.as_millis() as u64,
            });
        }

        let report = SuiteReport {
            run_id,
            suite: self.name,
            checks: reports,
        };
        info!(
            suite = %report.suite,
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Suite completed"
        );
        Ok(report)
    }
}

/// Prebuilt suites for common fixture shapes.
pub mod templates {
    use std::fmt::Debug;
    use std::rc::Rc;

    use serde::de::DeserializeOwned;
    use serde::Serialize;

    use super::Suite;
    use crate::clone::check_clone;
    use crate::equality::EqualityContract;
    use crate::serialization::check_round_trip_all;

    /// Equality, clone and round-trip checks for a value type.
    ///
    /// `factory` must return identical fresh instances.
    pub fn value_type<T, F>(name: impl Into<String>, factory: F) -> Suite
    where
        T: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static,
        F: Fn() -> T + 'static,
    {
        let factory: Rc<dyn Fn() -> T> = Rc::new(factory);
        let for_equality = Rc::clone(&factory);
        let for_clone = Rc::clone(&factory);
        let for_round_trip = factory;

        Suite::new(name)
            .check("equality", move |_| {
                let factory = Rc::clone(&for_equality);
                EqualityContract::new(move || factory()).check_all()
            })
            .check("clone", move |_| check_clone(&for_clone()).map(|_| ()))
            .check("round_trip", move |ctx| {
                check_round_trip_all(&for_round_trip(), &ctx.config().formats)
            })
    }
}
