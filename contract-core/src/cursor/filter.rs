// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filtering cursor decorator.

use crate::error::{ContractError, ContractResult};

use super::ListCursor;

/// Cursor that only visits elements of `inner` accepted by `predicate`.
///
/// Indices count accepted elements. A failed scan rewinds `inner`, so an
/// exhausted `next` or `previous` leaves the decorator where it was.
/// `inner` may start anywhere; accepted elements before it count towards
/// the starting index.
pub struct FilterCursor<C, P> {
    inner: C,
    predicate: P,
    index: usize,
}

impl<C, P> FilterCursor<C, P>
where
    C: ListCursor,
    P: FnMut(&C::Item) -> bool,
{
    /// Decorate `inner` at its current position.
    pub fn new(mut inner: C, mut predicate: P) -> Self {
        let mut behind = 0usize;
        let mut index = 0usize;
        while inner.has_previous() {
            match inner.previous() {
                Ok(item) => {
                    behind += 1;
                    if predicate(&item) {
                        index += 1;
                    }
                }
                Err(_) => break,
            }
        }
        for _ in 0..behind {
            if inner.next().is_err() {
                break;
            }
        }

        Self {
            inner,
            predicate,
            index,
        }
    }

    /// Unwrap the decorated cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }

    fn seek_next(&mut self) -> ContractResult<Option<C::Item>> {
        let mut skipped = 0usize;
        while self.inner.has_next() {
            let item = self.inner.next()?;
            if (self.predicate)(&item) {
                return Ok(Some(item));
            }
            skipped += 1;
        }
        for _ in 0..skipped {
            self.inner.previous()?;
        }
        Ok(None)
    }

    fn seek_previous(&mut self) -> ContractResult<Option<C::Item>> {
        let mut skipped = 0usize;
        while self.inner.has_previous() {
            let item = self.inner.previous()?;
            if (self.predicate)(&item) {
                return Ok(Some(item));
            }
            skipped += 1;
        }
        for _ in 0..skipped {
            self.inner.next()?;
        }
        Ok(None)
    }
}

impl<C, P> ListCursor for FilterCursor<C, P>
where
    C: ListCursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        match self.seek_next() {
            // Step back over the match; skipped rejects stay behind us.
            Ok(Some(_)) => self.inner.previous().is_ok(),
            _ => false,
        }
    }

    fn has_previous(&mut self) -> bool {
        match self.seek_previous() {
            Ok(Some(_)) => self.inner.next().is_ok(),
            _ => false,
        }
    }

    fn next(&mut self) -> ContractResult<Self::Item> {
        let item = self.seek_next()?.ok_or(ContractError::NoSuchElement)?;
        self.index += 1;
        Ok(item)
    }

    fn previous(&mut self) -> ContractResult<Self::Item> {
        let index = self.index.checked_sub(1).ok_or(ContractError::NoSuchElement)?;
        let item = self.seek_previous()?.ok_or(ContractError::NoSuchElement)?;
        self.index = index;
        Ok(item)
    }

    fn next_index(&self) -> usize {
        self.index
    }
}
