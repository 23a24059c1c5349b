//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! The breakpoint type and the iterator over a store's breakpoints.

use std::collections::btree_map;
use std::fmt;

/// A point where the piecewise-constant function changes value.
///
/// From `position` onward the function equals `intensity`, up to the next
/// breakpoint or forever if there is none.
///
/// # Examples
///
/// ```rust
/// use intensity_segments::{Breakpoint, IntensitySegments};
///
/// let mut segments = IntensitySegments::new();
/// segments.add(10, 30, 1);
///
/// let points: Vec<Breakpoint> = segments.iter().collect();
/// assert_eq!(points, vec![Breakpoint::new(10, 1), Breakpoint::new(30, 0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(i64, i64)", into = "(i64, i64)"))]
pub struct Breakpoint {
    /// Where the new intensity starts.
    pub position: i64,
    /// The intensity in effect from `position` onward.
    pub intensity: i64,
}

impl Breakpoint {
    /// Creates a new breakpoint.
    pub fn new(position: i64, intensity: i64) -> Self {
        Breakpoint {
            position,
            intensity,
        }
    }
}

impl From<(i64, i64)> for Breakpoint {
    fn from((position, intensity): (i64, i64)) -> Self {
        Breakpoint::new(position, intensity)
    }
}

impl From<Breakpoint> for (i64, i64) {
    fn from(point: Breakpoint) -> Self {
        (point.position, point.intensity)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.position, self.intensity)
    }
}

/// An in-order iterator over the breakpoints of an
/// [`IntensitySegments`](crate::IntensitySegments).
pub struct Breakpoints<'a> {
    pub(crate) inner: btree_map::Iter<'a, i64, i64>,
}

impl Iterator for Breakpoints<'_> {
    type Item = Breakpoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&position, &intensity)| Breakpoint::new(position, intensity))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Breakpoints<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(&position, &intensity)| Breakpoint::new(position, intensity))
    }
}

impl ExactSizeIterator for Breakpoints<'_> {}
