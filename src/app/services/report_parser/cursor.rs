//! Forward-only line cursor over report text
//!
//! Every extraction step in the report grammar is one of two kinds, both provided here:
//!
//! - **anchored search** ([`LineCursor::seek`], [`LineCursor::seek_before`]): scan forward
//!   until a line matches, then step past it;
//! - **strict assertion** ([`LineCursor::expect_line`], [`LineCursor::expect_match`]): the
//!   line under the cursor must have the required shape.
//!
//! The cursor never moves backwards.

use crate::{Error, Result};
use regex::{Captures, Regex};

/// Placeholder used as the "actual" text when the cursor has run off the end
pub const END_OF_REPORT: &str = "<end of report>";

/// Forward-only cursor over the lines of a report
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor at the first line of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            position: 0,
        }
    }

    /// Index of the line under the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    /// Line under the cursor, or `None` once exhausted
    pub fn current(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.lines.len()
    }

    /// Step past the line under the cursor
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.position += 1;
        }
    }

    /// Anchored search: scan forward to the first line matching `pattern`
    ///
    /// # Errors
    /// * Returns `Error::AnchorNotFound` naming `field` if no remaining line matches
    pub fn seek(&mut self, pattern: &Regex, field: &'static str) -> Result<Captures<'a>> {
        self.seek_bounded(pattern, None, field)
    }

    /// Anchored search that gives up on reaching a line matching `stop`
    ///
    /// The line under the cursor is only tested against `pattern`; every later line is
    /// tested against `stop` first.
    ///
    /// # Errors
    /// * Returns `Error::AnchorNotFound` naming `field` on a stop line or end of input
    pub fn seek_before(
        &mut self,
        pattern: &Regex,
        stop: &Regex,
        field: &'static str,
    ) -> Result<Captures<'a>> {
        self.seek_bounded(pattern, Some(stop), field)
    }

    fn seek_bounded(
        &mut self,
        pattern: &Regex,
        stop: Option<&Regex>,
        field: &'static str,
    ) -> Result<Captures<'a>> {
        let mut first = true;
        while let Some(line) = self.current() {
            if !first && stop.is_some_and(|stop| stop.is_match(line)) {
                return Err(Error::anchor_not_found(field));
            }
            first = false;

            self.position += 1;
            if let Some(caps) = pattern.captures(line) {
                return Ok(caps);
            }
        }
        Err(Error::anchor_not_found(field))
    }

    /// Strict assertion: the line under the cursor must satisfy `predicate`
    ///
    /// # Errors
    /// * Returns `Error::MalformedStructure` with `expected` and the actual line
    pub fn expect_line(
        &mut self,
        expected: &str,
        predicate: impl Fn(&str) -> bool,
    ) -> Result<&'a str> {
        match self.current() {
            Some(line) if predicate(line) => {
                self.position += 1;
                Ok(line)
            }
            Some(line) => Err(Error::malformed_structure(expected, line)),
            None => Err(Error::malformed_structure(expected, END_OF_REPORT)),
        }
    }

    /// Strict assertion: the line under the cursor must match `pattern`
    ///
    /// # Errors
    /// * Returns `Error::MalformedStructure` with `expected` and the actual line
    pub fn expect_match(&mut self, pattern: &Regex, expected: &str) -> Result<Captures<'a>> {
        match self.current() {
            Some(line) => match pattern.captures(line) {
                Some(caps) => {
                    self.position += 1;
                    Ok(caps)
                }
                None => Err(Error::malformed_structure(expected, line)),
            },
            None => Err(Error::malformed_structure(expected, END_OF_REPORT)),
        }
    }
}
