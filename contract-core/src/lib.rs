// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contract Core Library
//!
//! Reusable checks for the contracts fixtures are usually tested against:
//! equality and hashing, clone and deep copy, serialization round trips,
//! and bidirectional cursor state machines. Checks return
//! [`ContractResult`] and compose into named [`Suite`]s.

pub mod clone;
pub mod config;
pub mod cursor;
pub mod equality;
pub mod error;
pub mod expect;
pub mod fixture;
pub mod logging;
#[cfg(feature = "proptest")]
pub mod property;
pub mod reader;
pub mod serialization;
pub mod suite;

pub use clone::{check_clone, check_clone_boxed, check_deep_copy, CloneBox};
pub use config::HarnessConfig;
pub use cursor::{
    check_forward_backward, check_graph, check_random_walk, check_turnaround, check_unsupported,
    ChainCursor, FilterCursor, GraphIter, ListCursor, Node, SliceCursor, VecCursor,
};
pub use equality::{check_hash_consistency, EqualityContract, Mutation};
pub use error::{ContractError, ContractResult};
pub use expect::{expect_err, expect_panic, expect_panic_containing, expect_violation};
pub use fixture::{CallCounter, CloseTracker, Closeable, EnvGuard};
pub use reader::{check_concatenation, MultiReader};
pub use serialization::{
    check_round_trip, check_round_trip_all, check_stable_encoding, decode, encode, Format,
};
pub use suite::{CheckReport, Outcome, Suite, SuiteContext, SuiteReport};
