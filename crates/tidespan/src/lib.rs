// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Tidespan
//!
//! A normalized time-span set algebra over closed intervals. A
//! [`TimeSpan`] holds disjoint, ascending-ordered units and keeps that
//! canonical form across unions and subtractions, so callers can reason
//! about aggregated busy or covered windows without tracking raw interval
//! lists themselves.
//!
//! ## Modules
//!
//! - `span`: The [`TimeSpan`] collection with its constructors (explicit
//!   bounds, start-plus-duration, bulk pairs), set-algebra mutators
//!   (`add`, `sub`), membership and continuity queries, bounding-range and
//!   total-length measurements, and `HH:MM:SS` rendering.
//!
//! The underlying primitives live in `tidespan-core` and are re-exported
//! here: [`ClosedInterval`] for single closed intervals and
//! [`TimePoint`]/[`TimeDelta`] for strongly typed tick arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use tidespan::{TimeDelta, TimePoint, TimeSpan};
//!
//! // One booking from 09:00 to 11:00, another from 10:30 to 12:00.
//! let mut busy = TimeSpan::new(
//!     TimePoint::from_hms(9i64, 0, 0),
//!     TimePoint::from_hms(11, 0, 0),
//! );
//! busy.add(&TimeSpan::new(
//!     TimePoint::from_hms(10i64, 30, 0),
//!     TimePoint::from_hms(12, 0, 0),
//! ));
//!
//! // Carve out a lunch break.
//! busy.sub(&TimeSpan::new(
//!     TimePoint::from_hms(11i64, 30, 0),
//!     TimePoint::from_hms(11, 45, 0),
//! ));
//!
//! assert_eq!(busy.count(), 2);
//! assert_eq!(busy.total(), TimeDelta::from_hms(2, 45, 0));
//! assert!(busy.contains_point(TimePoint::from_hms(9, 30, 0)));
//! ```

pub mod span;

pub use span::{EmptySpanError, TimeSpan};
pub use tidespan_core::math::interval::ClosedInterval;
pub use tidespan_core::time::{TimeDelta, TimeInterval, TimePoint};
