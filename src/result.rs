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

//! Error types and results for the intensity segments library.

use thiserror::Error;

/// A specialized Result type for intensity segment operations.
pub type SegmentsResult<T> = Result<T, SegmentsError>;

/// Errors that can occur while building, parsing or checked-mutating an
/// [`IntensitySegments`](crate::IntensitySegments).
#[derive(Debug, Error)]
pub enum SegmentsError {
    /// The serialized text is not a JSON array of `[position,intensity]` pairs.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Breakpoint positions are not strictly increasing.
    #[error("breakpoint at {position} is not after its predecessor")]
    Unordered {
        /// The offending position.
        position: i64,
    },
    /// A breakpoint repeats the intensity already in effect before it.
    #[error("breakpoint at {position} repeats intensity {intensity}")]
    Redundant {
        /// The offending position.
        position: i64,
        /// The repeated intensity.
        intensity: i64,
    },
    /// Adjusting the intensity at this position would overflow.
    #[error("intensity overflow at position {position}")]
    Overflow {
        /// The first position whose intensity would overflow.
        position: i64,
    },
}
