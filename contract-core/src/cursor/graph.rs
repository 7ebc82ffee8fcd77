// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Depth-first object-graph iteration.

use std::fmt;
use std::iter::FusedIterator;
use std::vec;

use crate::error::{ContractError, ContractResult};

/// What the transformer makes of a visited value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {
    /// Yield this value.
    Leaf(T),
    /// Descend into these children, in order.
    Branch(Vec<T>),
}

/// Forward-only iterator that expands values through a transformer.
///
/// Every visited value is passed to the transformer; leaves are yielded,
/// branches are walked depth-first before the iterator resumes with the
/// siblings of the branch.
pub struct GraphIter<T, F> {
    root: Option<T>,
    stack: Vec<vec::IntoIter<T>>,
    transform: F,
}

impl<T, F> GraphIter<T, F>
where
    F: FnMut(T) -> Node<T>,
{
    /// Walk the graph rooted at `root`.
    pub fn new(root: T, transform: F) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
            transform,
        }
    }

    /// Walk several roots in order.
    pub fn from_roots(roots: Vec<T>, transform: F) -> Self {
        Self {
            root: None,
            stack: vec![roots.into_iter()],
            transform,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Graph walks cannot remove visited values.
    pub fn remove(&mut self) -> ContractResult<()> {
        Err(ContractError::Unsupported("remove"))
    }

    fn next_raw(&mut self) -> Option<T> {
        if let Some(root) = self.root.take() {
            return Some(root);
        }
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(value) => return Some(value),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<T, F> Iterator for GraphIter<T, F>
where
    F: FnMut(T) -> Node<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let value = self.next_raw()?;
            match (self.transform)(value) {
                Node::Leaf(leaf) => return Some(leaf),
                Node::Branch(children) => self.stack.push(children.into_iter()),
            }
        }
    }
}

impl<T, F> FusedIterator for GraphIter<T, F> where F: FnMut(T) -> Node<T> {}

impl<T: fmt::Debug, F> fmt::Debug for GraphIter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphIter")
            .field("root", &self.root)
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}
