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

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::result::{SegmentsError, SegmentsResult};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Bound, Range};
use tracing::{debug, trace};

/// `IntensitySegments` tracks a piecewise-constant intensity over the integer number line.
///
/// Only the breakpoints where the intensity changes are stored, keyed by position in an
/// ordered map. The intensity before the first breakpoint is 0. After every mutation the
/// breakpoints are kept canonical: no breakpoint repeats the intensity already in effect
/// before it, so a store that is 0 everywhere holds no breakpoints at all.
///
/// # Examples
///
/// ```rust
/// use intensity_segments::IntensitySegments;
///
/// let mut segments = IntensitySegments::new();
///
/// segments.add(10, 30, 1);
/// segments.add(20, 40, 1);
/// assert_eq!(segments.serialize(), "[[10,1],[20,2],[30,1],[40,0]]");
///
/// segments.set(0, 100, 0);
/// assert_eq!(segments.serialize(), "[]");
/// ```
#[derive(Default, Clone, PartialEq, Eq)]
pub struct IntensitySegments {
    breakpoints: BTreeMap<i64, i64>,
}

impl IntensitySegments {
    /// Creates an empty `IntensitySegments`, zero everywhere.
    ///
    /// # Examples
    /// ```rust
    /// use intensity_segments::IntensitySegments;
    ///
    /// let segments = IntensitySegments::new();
    /// assert!(segments.is_empty());
    /// ```
    pub fn new() -> Self {
        IntensitySegments {
            breakpoints: BTreeMap::new(),
        }
    }

    /// Builds a store from `(position, intensity)` pairs that are already canonical.
    ///
    /// # Errors
    ///
    /// * `SegmentsError::Unordered` if positions are not strictly increasing
    /// * `SegmentsError::Redundant` if a pair repeats the intensity in effect before it
    ///   (including a leading 0)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intensity_segments::{IntensitySegments, SegmentsError};
    ///
    /// let segments = IntensitySegments::from_breakpoints([(10, 1), (30, 0)]).unwrap();
    /// assert_eq!(segments.intensity_at(15), 1);
    ///
    /// let err = IntensitySegments::from_breakpoints([(10, 1), (20, 1)]).unwrap_err();
    /// assert!(matches!(err, SegmentsError::Redundant { position: 20, intensity: 1 }));
    /// ```
    pub fn from_breakpoints<I>(breakpoints: I) -> SegmentsResult<Self>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut map = BTreeMap::new();
        let mut previous: Option<Breakpoint> = None;
        for point in breakpoints {
            let point = Breakpoint::from(point);
            let before = match previous {
                Some(prev) if point.position <= prev.position => {
                    return Err(SegmentsError::Unordered {
                        position: point.position,
                    });
                }
                Some(prev) => prev.intensity,
                None => 0,
            };
            if point.intensity == before {
                return Err(SegmentsError::Redundant {
                    position: point.position,
                    intensity: point.intensity,
                });
            }
            map.insert(point.position, point.intensity);
            previous = Some(point);
        }
        Ok(IntensitySegments { breakpoints: map })
    }

    /// Adds `amount` to the intensity over the half-open range `[from, to)`.
    ///
    /// Intensities outside the range are unchanged. An empty or inverted range, or a zero
    /// `amount`, leaves the store untouched.
    ///
    /// # Panics
    ///
    /// Overflowing an intensity is a caller error and panics in debug builds. Use
    /// [`try_add`](Self::try_add) to have it reported instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intensity_segments::IntensitySegments;
    ///
    /// let mut segments = IntensitySegments::new();
    /// segments.add(10, 30, 1);
    /// segments.add(20, 40, 1);
    /// segments.add(10, 40, -1);
    /// assert_eq!(segments.serialize(), "[[20,1],[30,0]]");
    /// ```
    pub fn add(&mut self, from: i64, to: i64, amount: i64) {
        if from >= to || amount == 0 {
            debug!(from, to, amount, "ignoring empty range or zero amount");
            return;
        }
        trace!(from, to, amount, "add");

        // Pin both ends before touching anything so the value past `to` survives.
        self.pin(to);
        self.pin(from);
        for (_, intensity) in self.breakpoints.range_mut(from..to) {
            *intensity += amount;
        }

        self.canonicalize_at(to);
        self.canonicalize_at(from);
    }

    /// Adds `amount` over `[from, to)` like [`add`](Self::add), reporting overflow.
    ///
    /// Either every intensity in the range is adjusted or, on error, nothing is.
    ///
    /// # Errors
    ///
    /// * `SegmentsError::Overflow` naming the first position whose intensity would overflow
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intensity_segments::{IntensitySegments, SegmentsError};
    ///
    /// let mut segments = IntensitySegments::new();
    /// segments.add(10, 20, i64::MAX);
    /// assert!(matches!(
    ///     segments.try_add(0, 30, 1),
    ///     Err(SegmentsError::Overflow { position: 10 })
    /// ));
    /// assert_eq!(segments.serialize(), format!("[[10,{}],[20,0]]", i64::MAX));
    /// ```
    pub fn try_add(&mut self, from: i64, to: i64, amount: i64) -> SegmentsResult<()> {
        if from < to && amount != 0 {
            let leading = (!self.breakpoints.contains_key(&from))
                .then(|| (from, self.intensity_before(from)));
            let inner = self.breakpoints.range(from..to).map(|(&p, &v)| (p, v));
            for (position, intensity) in leading.into_iter().chain(inner) {
                if intensity.checked_add(amount).is_none() {
                    return Err(SegmentsError::Overflow { position });
                }
            }
        }
        self.add(from, to, amount);
        Ok(())
    }

    /// Sets the intensity over the half-open range `[from, to)` to exactly `amount`.
    ///
    /// Whatever was stored inside the range is discarded; intensities outside it are
    /// unchanged. A zero `amount` is a real assignment and may erase breakpoints. An empty
    /// or inverted range leaves the store untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intensity_segments::IntensitySegments;
    ///
    /// let mut segments = IntensitySegments::new();
    /// segments.add(10, 30, 1);
    /// segments.set(20, 40, 5);
    /// assert_eq!(segments.serialize(), "[[10,1],[20,5],[40,0]]");
    /// ```
    pub fn set(&mut self, from: i64, to: i64, amount: i64) {
        if from >= to {
            debug!(from, to, amount, "ignoring empty range");
            return;
        }
        trace!(from, to, amount, "set");

        self.pin(to);
        // Drop everything in (from, to): keep [..=from] and [to..].
        let mut tail = self.breakpoints.split_off(&to);
        let superseded = self.breakpoints.split_off(&(from + 1));
        if !superseded.is_empty() {
            trace!(count = superseded.len(), "dropping superseded breakpoints");
        }
        self.breakpoints.append(&mut tail);
        self.breakpoints.insert(from, amount);

        self.canonicalize_at(to);
        self.canonicalize_at(from);
    }

    /// Renders the breakpoints as `[[position,intensity],...]` in ascending order.
    ///
    /// An empty store renders as `[]`. Equivalent to the `Display` output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intensity_segments::IntensitySegments;
    ///
    /// let mut segments = IntensitySegments::new();
    /// assert_eq!(segments.serialize(), "[]");
    ///
    /// segments.add(10, 30, 1);
    /// assert_eq!(segments.serialize(), "[[10,1],[30,0]]");
    /// ```
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Returns the intensity in effect at `position`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intensity_segments::IntensitySegments;
    ///
    /// let mut segments = IntensitySegments::new();
    /// segments.add(10, 30, 2);
    ///
    /// assert_eq!(segments.intensity_at(9), 0);
    /// assert_eq!(segments.intensity_at(10), 2);
    /// assert_eq!(segments.intensity_at(29), 2);
    /// assert_eq!(segments.intensity_at(30), 0);
    /// ```
    pub fn intensity_at(&self, position: i64) -> i64 {
        self.breakpoints
            .range(..=position)
            .next_back()
            .map_or(0, |(_, &intensity)| intensity)
    }

    /// Returns the number of stored breakpoints.
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Returns `true` if the intensity is 0 everywhere.
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Resets the intensity to 0 everywhere.
    pub fn clear(&mut self) {
        self.breakpoints.clear();
    }

    /// Iterates over the breakpoints in ascending position order.
    pub fn iter(&self) -> Breakpoints<'_> {
        Breakpoints {
            inner: self.breakpoints.iter(),
        }
    }

    /// Iterates over every bounded segment, as its half-open range and intensity.
    ///
    /// The unbounded stretches before the first and after the last breakpoint are
    /// not included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intensity_segments::IntensitySegments;
    ///
    /// let mut segments = IntensitySegments::new();
    /// segments.add(10, 30, 1);
    /// segments.add(20, 40, 1);
    ///
    /// let spans: Vec<_> = segments.segments().collect();
    /// assert_eq!(spans, vec![(10..20, 1), (20..30, 2), (30..40, 1)]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = (Range<i64>, i64)> + '_ {
        self.iter()
            .zip(self.iter().skip(1))
            .map(|(start, end)| (start.position..end.position, start.intensity))
    }

    /// Intensity in effect just before `position`, ignoring any breakpoint at `position`.
    fn intensity_before(&self, position: i64) -> i64 {
        self.breakpoints
            .range((Bound::Unbounded, Bound::Excluded(position)))
            .next_back()
            .map_or(0, |(_, &intensity)| intensity)
    }

    /// Ensures a breakpoint exists at `position` without changing the function.
    fn pin(&mut self, position: i64) {
        if !self.breakpoints.contains_key(&position) {
            let intensity = self.intensity_before(position);
            self.breakpoints.insert(position, intensity);
        }
    }

    /// Removes the breakpoint at `position` if it repeats its predecessor.
    ///
    /// A mutation only shifts or replaces intensities between its two ends, so the
    /// breakpoints at those ends are the only ones that can become redundant.
    fn canonicalize_at(&mut self, position: i64) {
        let before = self.intensity_before(position);
        if self.breakpoints.get(&position) == Some(&before) {
            trace!(position, intensity = before, "merging redundant breakpoint");
            self.breakpoints.remove(&position);
        }
    }
}

impl fmt::Display for IntensitySegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, point) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{point}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for IntensitySegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.breakpoints.iter()).finish()
    }
}

/// Reads the `serialize()` form, which is a JSON array of `[position,intensity]` pairs.
#[cfg(feature = "serde")]
impl std::str::FromStr for IntensitySegments {
    type Err = SegmentsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_breakpoints(serde_json::from_str::<Vec<(i64, i64)>>(s)?)
    }
}

impl<'a> IntoIterator for &'a IntensitySegments {
    type Item = Breakpoint;
    type IntoIter = Breakpoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IntensitySegments {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntensitySegments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<(i64, i64)>::deserialize(deserializer)?;
        Self::from_breakpoints(points).map_err(serde::de::Error::custom)
    }
}
