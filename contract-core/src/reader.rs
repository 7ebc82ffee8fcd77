// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Multi-Source Reader
//!
//! [`MultiReader`] reads its sources back to back, moving on whenever the
//! current one reports end of stream. [`check_concatenation`] drives a
//! reader with several buffer sizes and compares the bytes against the
//! concatenated parts.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Read};

use tracing::trace;

use crate::error::{ContractError, ContractResult};

/// A reader over an ordered list of sources.
#[derive(Default)]
pub struct MultiReader {
    sources: VecDeque<Box<dyn Read + Send>>,
}

impl MultiReader {
    /// Reader over `sources`, read in order.
    pub fn new(sources: Vec<Box<dyn Read + Send>>) -> Self {
        Self {
            sources: sources.into(),
        }
    }

    /// Reader over in-memory parts.
    pub fn from_parts<I, B>(parts: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        Self::new(
            parts
                .into_iter()
                .map(|part| {
                    let bytes: Vec<u8> = part.into();
                    Box::new(io::Cursor::new(bytes)) as Box<dyn Read + Send>
                })
                .collect(),
        )
    }

    /// Append a source after the existing ones.
    pub fn push(&mut self, source: Box<dyn Read + Send>) {
        self.sources.push_back(source);
    }

    /// Sources not yet exhausted, the current one included.
    pub fn remaining_sources(&self) -> usize {
        self.sources.len()
    }
}

impl Read for MultiReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while let Some(current) = self.sources.front_mut() {
            let n = current.read(buf)?;
            if n > 0 {
                return Ok(n);
            }
            trace!(remaining = self.sources.len() - 1, "source exhausted");
            self.sources.pop_front();
        }
        Ok(0)
    }
}

impl fmt::Debug for MultiReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiReader")
            .field("remaining_sources", &self.sources.len())
            .finish()
    }
}

/// Reads a fresh reader from `make_reader` once per chunk size and checks
/// that it yields exactly the concatenation of `parts`, then stays at EOF.
pub fn check_concatenation<R, F>(
    mut make_reader: F,
    parts: &[&[u8]],
    chunk_sizes: &[usize],
) -> ContractResult<()>
where
    R: Read,
    F: FnMut() -> R,
{
    let expected: Vec<u8> = parts.concat();

    for &chunk in chunk_sizes {
        if chunk == 0 {
            return Err(ContractError::expectation("chunk sizes must be non-zero"));
        }

        let mut reader = make_reader();
        let mut actual = Vec::with_capacity(expected.len());
        let mut buf = vec![0u8; chunk];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            if n > chunk {
                return Err(ContractError::reader(format!(
                    "read reported {n} bytes into a {chunk}-byte buffer"
                )));
            }
            actual.extend_from_slice(&buf[..n]);
            if actual.len() > expected.len() {
                break;
            }
        }

        if actual != expected {
            return Err(ContractError::reader(format!(
                "chunk size {chunk}: read {} bytes {:?}, expected {} bytes {:?}",
                actual.len(),
                String::from_utf8_lossy(&actual),
                expected.len(),
                String::from_utf8_lossy(&expected)
            )));
        }

        for _ in 0..2 {
            let n = reader.read(&mut buf)?;
            if n != 0 {
                return Err(ContractError::reader(format!(
                    "chunk size {chunk}: read {n} bytes after end of stream"
                )));
            }
        }
    }

    Ok(())
}
