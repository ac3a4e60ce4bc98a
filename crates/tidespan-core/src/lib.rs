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

//! # Tidespan Core
//!
//! Foundational primitives for the tidespan time-span algebra. This crate
//! holds the reusable building blocks the span engine is assembled from,
//! with no policy of its own.
//!
//! ## Modules
//!
//! - `math`: Closed interval `[start, end]` primitives with a
//!   swap-normalizing constructor, containment and continuity predicates,
//!   and the pairwise set operations (union, intersection, prioritized
//!   subtraction) that drive span normalization.
//! - `time`: Strongly typed `TimePoint<T>`/`TimeDelta<T>` newtypes over a
//!   signed primitive tick count, their arithmetic, and the wall-clock
//!   `HH:MM:SS` decomposition used for rendering (hour unbounded above).
//!
//! ## Purpose
//!
//! Keeping the interval math generic over any ordered point type, and the
//! time types generic over the tick integer, lets the higher span crate
//! stay small: it composes these primitives instead of re-deriving
//! endpoint logic inline.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod time;
