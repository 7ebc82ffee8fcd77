// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cursor State Machines
//!
//! A cursor is a bidirectional list iterator: it sits between two elements
//! and can step over the next or the previous one. Decorating cursors
//! (filtering, concatenation) are checked against a plain reference cursor
//! walking the same logical sequence.
//!
//! Stepping past either end returns [`ContractError::NoSuchElement`] and
//! leaves the position unchanged.

pub mod chain;
pub mod check;
pub mod filter;
pub mod graph;
pub mod slice;

pub use chain::ChainCursor;
pub use check::{
    check_forward_backward, check_graph, check_random_walk, check_turnaround, check_unsupported,
};
pub use filter::FilterCursor;
pub use graph::{GraphIter, Node};
pub use slice::{SliceCursor, VecCursor};

use crate::error::{ContractError, ContractResult};

/// Bidirectional list iterator.
pub trait ListCursor {
    /// Element type.
    type Item;

    /// True when [`next`](Self::next) would return an element.
    ///
    /// Takes `&mut self` because decorators may need to scan ahead.
    fn has_next(&mut self) -> bool;

    /// True when [`previous`](Self::previous) would return an element.
    fn has_previous(&mut self) -> bool;

    /// Step forward over the next element and return it.
    fn next(&mut self) -> ContractResult<Self::Item>;

    /// Step backward over the previous element and return it.
    fn previous(&mut self) -> ContractResult<Self::Item>;

    /// Index of the element a call to `next` would return.
    fn next_index(&self) -> usize;

    /// Index of the element a call to `previous` would return, `None` at
    /// the start.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Remove the element last returned by `next` or `previous`.
    fn remove(&mut self) -> ContractResult<()> {
        Err(ContractError::Unsupported("remove"))
    }

    /// Replace the element last returned by `next` or `previous`.
    fn set(&mut self, _item: Self::Item) -> ContractResult<()> {
        Err(ContractError::Unsupported("set"))
    }

    /// Insert an element before the cursor.
    fn add(&mut self, _item: Self::Item) -> ContractResult<()> {
        Err(ContractError::Unsupported("add"))
    }
}

impl<C: ListCursor + ?Sized> ListCursor for Box<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn has_previous(&mut self) -> bool {
        (**self).has_previous()
    }

    fn next(&mut self) -> ContractResult<Self::Item> {
        (**self).next()
    }

    fn previous(&mut self) -> ContractResult<Self::Item> {
        (**self).previous()
    }

    fn next_index(&self) -> usize {
        (**self).next_index()
    }

    fn previous_index(&self) -> Option<usize> {
        (**self).previous_index()
    }

    fn remove(&mut self) -> ContractResult<()> {
        (**self).remove()
    }

    fn set(&mut self, item: Self::Item) -> ContractResult<()> {
        (**self).set(item)
    }

    fn add(&mut self, item: Self::Item) -> ContractResult<()> {
        (**self).add(item)
    }
}
