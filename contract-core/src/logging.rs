// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tracing setup for test binaries.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Default directive applied on top of `RUST_LOG`.
pub const DEFAULT_DIRECTIVE: &str = "contract_core=info";

/// Installs a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed, so every
/// test may call it.
pub fn init() -> bool {
    let filter = match DEFAULT_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .is_ok()
}
