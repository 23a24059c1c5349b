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

//! # Intensity Segments
//!
//! A Rust library modelling a piecewise-constant integer function over the integer number
//! line. Rather than storing a value per position, it stores only the breakpoints where the
//! value changes and keeps that set minimal after every mutation.
//!
//! ## Key Features
//!
//! - **Range Adjustment**: Add a signed amount to every position in a half-open range
//! - **Range Assignment**: Overwrite every position in a half-open range with a fixed value
//! - **Canonical Form**: Adjacent equal-valued segments always collapse, so each function has
//!   exactly one representation
//! - **Stable Text Form**: `serialize()` renders `[[position,intensity],...]`
//! - **Serde Support**: Optional `serde` feature, serializing as the same pair sequence and
//!   reading the text form back through `FromStr`
//!
//! ## Usage Examples
//!
//! ```rust
//! use intensity_segments::IntensitySegments;
//!
//! let mut segments = IntensitySegments::new();
//! assert_eq!(segments.serialize(), "[]");
//!
//! segments.add(10, 30, 1);
//! assert_eq!(segments.serialize(), "[[10,1],[30,0]]");
//!
//! segments.add(20, 40, 1);
//! assert_eq!(segments.serialize(), "[[10,1],[20,2],[30,1],[40,0]]");
//!
//! segments.add(10, 40, -1);
//! assert_eq!(segments.serialize(), "[[20,1],[30,0]]");
//!
//! segments.add(10, 40, -1);
//! assert_eq!(segments.serialize(), "[[10,-1],[20,0],[30,-1],[40,0]]");
//! ```
//!
//! ### Assignment
//!
//! ```rust
//! use intensity_segments::IntensitySegments;
//!
//! let mut segments: IntensitySegments = "[[10,-1],[20,0],[30,-1],[40,0]]".parse().unwrap();
//!
//! segments.set(20, 30, 1);
//! assert_eq!(segments.serialize(), "[[10,-1],[20,1],[30,-1],[40,0]]");
//!
//! // Assigning zero everywhere collapses the store to nothing.
//! segments.set(0, 100, 0);
//! assert_eq!(segments.serialize(), "[]");
//! ```
//!
//! ## Range Conventions
//!
//! Every range is half-open, `[from, to)`. A range with `to <= from` is empty and both
//! `add` and `set` ignore it. `add` with a zero amount is also ignored.
//!
//! ## Error Handling
//!
//! `add`, `set` and `serialize` cannot fail. Fallible operations return
//! `SegmentsResult<T>` with one of:
//!
//! - `SegmentsError::Json`: text given to `FromStr` is not a JSON array of integer pairs
//! - `SegmentsError::Unordered` / `SegmentsError::Redundant`: breakpoints not in canonical form
//! - `SegmentsError::Overflow`: `try_add` would overflow an intensity
//!
//! ## Thread Safety
//!
//! Mutation takes `&mut self`. To share a store between threads, wrap it in a lock.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod breakpoint;
mod result;
mod segments;

pub use self::breakpoint::{Breakpoint, Breakpoints};
pub use self::result::{SegmentsError, SegmentsResult};
pub use self::segments::IntensitySegments;
