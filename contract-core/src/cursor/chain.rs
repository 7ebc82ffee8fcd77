// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Concatenating cursor over several sources.

use crate::error::{ContractError, ContractResult};

use super::ListCursor;

/// Bidirectional cursor over the concatenation of several sources.
///
/// Empty sources are skipped in both directions.
#[derive(Debug, Clone, Default)]
pub struct ChainCursor<T> {
    sources: Vec<Vec<T>>,
    source: usize,
    offset: usize,
    index: usize,
}

impl<T> ChainCursor<T> {
    /// Cursor positioned before the first element of the first source.
    pub fn new(sources: Vec<Vec<T>>) -> Self {
        Self {
            sources,
            source: 0,
            offset: 0,
            index: 0,
        }
    }

    /// Append a source after the existing ones.
    pub fn push_source(&mut self, source: Vec<T>) {
        self.sources.push(source);
    }

    /// Number of sources, empty ones included.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Total element count across all sources.
    pub fn len(&self) -> usize {
        self.sources.iter().map(Vec::len).sum()
    }

    /// True when no source holds an element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Location of the next element, if any.
    fn locate_next(&self) -> Option<(usize, usize)> {
        let (mut source, mut offset) = (self.source, self.offset);
        while source < self.sources.len() {
            if offset < self.sources[source].len() {
                return Some((source, offset));
            }
            source += 1;
            offset = 0;
        }
        None
    }

    /// Location of the previous element, if any.
    fn locate_previous(&self) -> Option<(usize, usize)> {
        let (mut source, mut offset) = (self.source, self.offset);
        while offset == 0 {
            source = source.checked_sub(1)?;
            offset = self.sources[source].len();
        }
        Some((source, offset - 1))
    }
}

impl<T: Clone> ListCursor for ChainCursor<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.locate_next().is_some()
    }

    fn has_previous(&mut self) -> bool {
        self.locate_previous().is_some()
    }

    fn next(&mut self) -> ContractResult<T> {
        let (source, offset) = self.locate_next().ok_or(ContractError::NoSuchElement)?;
        self.source = source;
        self.offset = offset + 1;
        self.index += 1;
        Ok(self.sources[source][offset].clone())
    }

    fn previous(&mut self) -> ContractResult<T> {
        let (source, offset) = self
            .locate_previous()
            .ok_or(ContractError::NoSuchElement)?;
        self.source = source;
        self.offset = offset;
        self.index -= 1;
        Ok(self.sources[source][offset].clone())
    }

    fn next_index(&self) -> usize {
        self.index
    }
}
