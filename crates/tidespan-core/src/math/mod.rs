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

//! # Math Primitives
//!
//! Foundational mathematical structures for time-window logic. This module
//! focuses on closed interval math: the single building block a normalized
//! span collection is made of.
//!
//! ## Submodules
//!
//! - `interval`: A generic `[start, end]` closed interval type with a
//!   swap-normalizing constructor, predicates (point and interval
//!   containment, continuity), set operations (union, intersection,
//!   prioritized subtraction), measurements, and conversions to/from
//!   `std::ops::RangeInclusive`.
//!
//! ## Motivation
//!
//! Availability and occupancy reasoning manipulates windows that are
//! inclusive on both ends: a booking that ends at the stroke of an hour
//! still occupies that instant. Closed intervals make touching windows
//! mergeable and let zero-length instants carry meaning.
//!
//! Refer to the `interval` module for detailed APIs and examples.

pub mod interval;

pub use interval::ClosedInterval;
