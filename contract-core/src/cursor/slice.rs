// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reference cursors over contiguous storage.

use crate::error::{ContractError, ContractResult};

use super::ListCursor;

/// Read-only cursor over a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor positioned before the first element.
    pub fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }

    /// Cursor positioned before `items[index]`; clamps to the end.
    pub fn at(items: &'a [T], index: usize) -> Self {
        Self {
            items,
            position: index.min(items.len()),
        }
    }
}

impl<T: Clone> ListCursor for SliceCursor<'_, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.position < self.items.len()
    }

    fn has_previous(&mut self) -> bool {
        self.position > 0
    }

    fn next(&mut self) -> ContractResult<T> {
        let item = self
            .items
            .get(self.position)
            .ok_or(ContractError::NoSuchElement)?
            .clone();
        self.position += 1;
        Ok(item)
    }

    fn previous(&mut self) -> ContractResult<T> {
        let index = self
            .position
            .checked_sub(1)
            .ok_or(ContractError::NoSuchElement)?;
        self.position = index;
        Ok(self.items[index].clone())
    }

    fn next_index(&self) -> usize {
        self.position
    }
}

/// Owning cursor supporting `remove`, `set` and `add`.
///
/// `remove` and `set` act on the element last returned by `next` or
/// `previous`; after `add` or `remove` there is no such element until the
/// cursor moves again.
#[derive(Debug, Clone, Default)]
pub struct VecCursor<T> {
    items: Vec<T>,
    position: usize,
    last_returned: Option<usize>,
}

impl<T> VecCursor<T> {
    /// Cursor positioned before the first element.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            last_returned: None,
        }
    }

    /// Current contents.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the cursor, returning its contents.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> ListCursor for VecCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.position < self.items.len()
    }

    fn has_previous(&mut self) -> bool {
        self.position > 0
    }

    fn next(&mut self) -> ContractResult<T> {
        let item = self
            .items
            .get(self.position)
            .ok_or(ContractError::NoSuchElement)?
            .clone();
        self.last_returned = Some(self.position);
        self.position += 1;
        Ok(item)
    }

    fn previous(&mut self) -> ContractResult<T> {
        let index = self
            .position
            .checked_sub(1)
            .ok_or(ContractError::NoSuchElement)?;
        self.position = index;
        self.last_returned = Some(index);
        Ok(self.items[index].clone())
    }

    fn next_index(&self) -> usize {
        self.position
    }

    fn remove(&mut self) -> ContractResult<()> {
        let index = self
            .last_returned
            .take()
            .ok_or(ContractError::IllegalState("remove without a current element"))?;
        self.items.remove(index);
        if index < self.position {
            self.position -= 1;
        }
        Ok(())
    }

    fn set(&mut self, item: T) -> ContractResult<()> {
        let index = self
            .last_returned
            .ok_or(ContractError::IllegalState("set without a current element"))?;
        self.items[index] = item;
        Ok(())
    }

    fn add(&mut self, item: T) -> ContractResult<()> {
        self.items.insert(self.position, item);
        self.position += 1;
        self.last_returned = None;
        Ok(())
    }
}
