//! Date-range predicates for filtering archived artifacts by key
//!
//! These operate on decoded archive keys so callers can discard candidates before
//! reading or parsing any file body. Bounds are inclusive and `None` means unbounded.

use crate::{Error, Result};
use std::fmt::Debug;

/// True iff `point` lies within `[start, end]`, treating unset bounds as open
pub fn in_range<T: PartialOrd>(point: &T, start: Option<&T>, end: Option<&T>) -> bool {
    start.is_none_or(|start| start <= point) && end.is_none_or(|end| point <= end)
}

/// True iff `[start1, end1]` and `[start2, end2]` overlap
///
/// An unbounded side never blocks intersection.
///
/// # Errors
/// * Returns `Error::RangePrecondition` if either range has `start > end`
pub fn ranges_intersect<T: PartialOrd + Debug>(
    start1: Option<&T>,
    end1: Option<&T>,
    start2: Option<&T>,
    end2: Option<&T>,
) -> Result<bool> {
    check_ordered(start1, end1)?;
    check_ordered(start2, end2)?;

    let first_starts_in_time = match (start1, end2) {
        (Some(start), Some(end)) => start <= end,
        _ => true,
    };
    let second_starts_in_time = match (start2, end1) {
        (Some(start), Some(end)) => start <= end,
        _ => true,
    };
    Ok(first_starts_in_time && second_starts_in_time)
}

fn check_ordered<T: PartialOrd + Debug>(start: Option<&T>, end: Option<&T>) -> Result<()> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(Error::range_precondition(start, end)),
        _ => Ok(()),
    }
}

/// Optional-bounded inclusive range over dates or datetimes
///
/// Used as a query parameter only; construction enforces `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange<T> {
    start: Option<T>,
    end: Option<T>,
}

impl<T> Default for DateRange<T> {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
        }
    }
}

impl<T: PartialOrd + Debug> DateRange<T> {
    /// Create a range, rejecting `start > end`
    pub fn new(start: Option<T>, end: Option<T>) -> Result<Self> {
        check_ordered(start.as_ref(), end.as_ref())?;
        Ok(Self { start, end })
    }

    /// Range with no bounds
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<&T> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&T> {
        self.end.as_ref()
    }

    /// Whether `point` lies within the range
    pub fn contains(&self, point: &T) -> bool {
        in_range(point, self.start(), self.end())
    }

    /// Whether this range overlaps `other`
    pub fn intersects(&self, other: &DateRange<T>) -> bool {
        // Both ranges were validated on construction
        ranges_intersect(self.start(), self.end(), other.start(), other.end()).unwrap_or(false)
    }
}
