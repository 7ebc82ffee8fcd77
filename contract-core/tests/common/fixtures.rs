// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures
//!
//! Small local value types, some well-behaved and some deliberately
//! broken, used to drive the contract checks.

use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A row with three integer columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PseudoRow {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl PseudoRow {
    pub fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    pub fn sample() -> Self {
        Self::new(1, 2, 3)
    }
}

/// A chart-style annotation with a nested mutable list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub tags: Vec<String>,
    pub visible: bool,
}

impl Annotation {
    pub fn sample() -> Self {
        Self {
            text: "peak".to_string(),
            x: 10.5,
            y: -3.25,
            tags: vec!["series-1".to_string()],
            visible: true,
        }
    }
}

/// Renders a template with a fixed argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub template: String,
    pub argument: String,
}

impl Fixture {
    pub fn new(template: &str, argument: &str) -> Self {
        Self {
            template: template.to_string(),
            argument: argument.to_string(),
        }
    }

    pub fn render(&self) -> String {
        self.template.replace("{}", &self.argument)
    }
}

/// Clone shares the label cell, so it is not a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedLabel {
    pub label: Rc<RefCell<String>>,
    pub weight: u32,
}

impl SharedLabel {
    pub fn new(label: &str) -> Self {
        Self {
            label: Rc::new(RefCell::new(label.to_string())),
            weight: 1,
        }
    }
}

/// Equality ignores `note`, so mutating it never breaks equality.
#[derive(Debug, Clone)]
pub struct NoteBlind {
    pub id: u32,
    pub note: String,
}

impl PartialEq for NoteBlind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Equality is case-insensitive but hashing is not.
#[derive(Debug, Clone)]
pub struct CaseBlindName(pub String);

impl PartialEq for CaseBlindName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Hash for CaseBlindName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

/// `cached` is not serialized, so a round trip drops it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossyCache {
    pub key: String,
    #[serde(skip)]
    pub cached: Option<u64>,
}

/// A small tree for graph walks.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Leaf(u32),
    Branch(Vec<Tree>),
}

impl Tree {
    /// `[1, [2, 3, [4]], [], 5]`
    pub fn sample() -> Self {
        Tree::Branch(vec![
            Tree::Leaf(1),
            Tree::Branch(vec![
                Tree::Leaf(2),
                Tree::Leaf(3),
                Tree::Branch(vec![Tree::Leaf(4)]),
            ]),
            Tree::Branch(vec![]),
            Tree::Leaf(5),
        ])
    }
}
