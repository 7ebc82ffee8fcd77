// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Every contract check returns a [`ContractResult`]. Violations of a
//! contract law and failures of the harness itself share one enum so that
//! checks compose with `?`.

use std::io;
use thiserror::Error;

use crate::serialization::Format;

/// Result type alias for contract checks.
pub type ContractResult<T> = Result<T, ContractError>;

/// Errors produced by contract checks and the harness around them.
#[derive(Error, Debug)]
pub enum ContractError {
    /// An equality law did not hold.
    #[error("equality contract violated ({check}): {detail}")]
    Equality { check: String, detail: String },

    /// Equal values hashed differently.
    #[error("hash contract violated: {detail}")]
    Hash { detail: String },

    /// Clone produced an aliased, mistyped or unequal copy.
    #[error("clone contract violated: {detail}")]
    Clone { detail: String },

    /// Decoded value differs from the original.
    #[error("round-trip through {format} changed the value: {detail}")]
    RoundTrip { format: Format, detail: String },

    /// Value could not be encoded.
    #[error("failed to encode as {format}: {detail}")]
    Encode { format: Format, detail: String },

    /// Payload could not be decoded.
    #[error("failed to decode {format}: {detail}")]
    Decode { format: Format, detail: String },

    /// Cursor diverged from its reference.
    #[error("cursor diverged at step {step}: {detail}")]
    Cursor { step: usize, detail: String },

    /// Concatenating reader produced the wrong bytes.
    #[error("reader contract violated: {detail}")]
    Reader { detail: String },

    /// A property failed for a generated input.
    #[error("property failed: {0}")]
    Property(String),

    /// Cursor moved past either end.
    #[error("no such element")]
    NoSuchElement,

    /// Mutation method not supported by the subject.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Mutation method called without a current element.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// An expected failure did not happen, or had the wrong shape.
    #[error("expectation failed: {0}")]
    Expectation(String),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON error outside of a round-trip check.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by user code registered with a suite.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl ContractError {
    /// Create an equality violation for the named law.
    pub fn equality(check: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Equality {
            check: check.into(),
            detail: detail.into(),
        }
    }

    /// Create a hash violation.
    pub fn hash(detail: impl Into<String>) -> Self {
        Self::Hash {
            detail: detail.into(),
        }
    }

    /// Create a clone violation.
    pub fn clone_violation(detail: impl Into<String>) -> Self {
        Self::Clone {
            detail: detail.into(),
        }
    }

    /// Create a cursor divergence at `step`.
    pub fn cursor(step: usize, detail: impl Into<String>) -> Self {
        Self::Cursor {
            step,
            detail: detail.into(),
        }
    }

    /// Create a reader violation.
    pub fn reader(detail: impl Into<String>) -> Self {
        Self::Reader {
            detail: detail.into(),
        }
    }

    /// Create an expectation error.
    pub fn expectation(msg: impl Into<String>) -> Self {
        Self::Expectation(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True when the error reports a broken contract rather than a
    /// harness failure (I/O, configuration, user code). A value that fails
    /// to encode or decode during a round trip has broken its contract.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            Self::Equality { .. }
                | Self::Hash { .. }
                | Self::Clone { .. }
                | Self::RoundTrip { .. }
                | Self::Encode { .. }
                | Self::Decode { .. }
                | Self::Cursor { .. }
                | Self::Reader { .. }
                | Self::Property(_)
        )
    }
}
