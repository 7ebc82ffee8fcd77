// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use proptest::prelude::*;

use super::fixtures::{Annotation, PseudoRow};

// ============================================================
// Fixture Strategies
// ============================================================

/// Strategy for generating rows.
pub fn pseudo_row_strategy() -> impl Strategy<Value = PseudoRow> {
    (any::<i32>(), any::<i32>(), any::<i32>()).prop_map(|(a, b, c)| PseudoRow::new(a, b, c))
}

/// Strategy for coordinates with short exact decimal forms (quarter steps).
pub fn coordinate_strategy() -> impl Strategy<Value = f64> {
    (-4_000_000i32..4_000_000).prop_map(|quarters| f64::from(quarters) / 4.0)
}

/// Strategy for generating annotations.
pub fn annotation_strategy() -> impl Strategy<Value = Annotation> {
    (
        "[a-zA-Z0-9 ]{0,20}",
        coordinate_strategy(),
        coordinate_strategy(),
        prop::collection::vec("[a-z0-9-]{1,10}", 0..4),
        any::<bool>(),
    )
        .prop_map(|(text, x, y, tags, visible)| Annotation {
            text,
            x,
            y,
            tags,
            visible,
        })
}

// ============================================================
// Sequence Strategies
// ============================================================

/// Strategy for generating small integer sequences.
pub fn int_sequence_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}
