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

//! # Time Primitives
//!
//! Strongly typed timestamp and duration newtypes over a signed primitive
//! tick count, plus the wall-clock decomposition helpers used by the span
//! rendering layer.
//!
//! A [`TimePoint`] is an opaque, totally ordered instant. Subtracting two
//! points yields a [`TimeDelta`]; adding a delta to a point yields another
//! point. The set algebra built on top of these types never inspects
//! calendar fields.
//!
//! The clock helpers ([`TimePoint::from_hms`], [`TimePoint::hms`]) interpret
//! one tick as one second relative to the fixed reference epoch
//! ([`TimePoint::epoch`]), with the hour component unbounded above so that
//! multi-day offsets render as hours beyond 24. Only the formatting layer
//! relies on this convention.

use crate::math::interval::ClosedInterval;
use num_traits::{PrimInt, Signed, Zero};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A closed interval between two [`TimePoint`]s.
pub type TimeInterval<T> = ClosedInterval<TimePoint<T>>;

const SECONDS_PER_MINUTE: i32 = 60;
const SECONDS_PER_HOUR: i32 = 3600;

#[inline]
fn seconds_per_minute<T: PrimInt>() -> T {
    T::from(SECONDS_PER_MINUTE).expect("seconds-per-minute constant must be representable in T")
}

#[inline]
fn seconds_per_hour<T: PrimInt>() -> T {
    T::from(SECONDS_PER_HOUR).expect("seconds-per-hour constant must be representable in T")
}

/// An opaque, totally ordered timestamp measured in ticks from a reference
/// epoch.
///
/// Two points may compare equal. The only arithmetic a point supports is
/// subtraction against another point (yielding a [`TimeDelta`]) and
/// translation by a delta.
///
/// # Examples
///
/// ```rust
/// # use tidespan_core::time::{TimeDelta, TimePoint};
///
/// let a = TimePoint::new(100i64);
/// let b = TimePoint::new(160i64);
/// assert!(a < b);
/// assert_eq!(b - a, TimeDelta::new(60));
/// assert_eq!(a + TimeDelta::new(60), b);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint<T>(T)
where
    T: PrimInt + Signed;

impl<T> TimePoint<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `TimePoint` from a raw tick count.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the raw tick count.
    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    /// The reference epoch: the point at tick zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::time::TimePoint;
    ///
    /// assert_eq!(TimePoint::<i64>::epoch().value(), 0);
    /// ```
    #[inline]
    pub fn epoch() -> Self {
        Self(T::zero())
    }

    /// Builds a point `hour`:`minute`:`second` after the reference epoch.
    ///
    /// This is the wall-clock constructor for callers who do not care about
    /// calendar fields. The hour is not limited to a single day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::time::TimePoint;
    ///
    /// let p = TimePoint::from_hms(1i64, 30, 0);
    /// assert_eq!(p.value(), 5400);
    ///
    /// // Hours beyond 24 address later days.
    /// let q = TimePoint::from_hms(100i64, 0, 0);
    /// assert_eq!(q.value(), 360_000);
    /// ```
    #[inline]
    pub fn from_hms(hour: T, minute: T, second: T) -> Self {
        Self::epoch() + TimeDelta::from_hms(hour, minute, second)
    }

    /// Decomposes the offset from the reference epoch into an
    /// `(hour, minute, second)` triple.
    ///
    /// The hour component is unbounded above, so points more than a day
    /// after the epoch report hours of 24 and beyond. Points before the
    /// epoch decompose with truncating division and are not meaningful as
    /// wall-clock readings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::time::TimePoint;
    ///
    /// let p = TimePoint::from_hms(26i64, 5, 9);
    /// assert_eq!(p.hms(), (26, 5, 9));
    /// ```
    #[inline]
    pub fn hms(self) -> (T, T, T) {
        (self - Self::epoch()).hms()
    }
}

impl<T> std::fmt::Debug for TimePoint<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimePoint({:?})", self.0)
    }
}

impl<T> std::fmt::Display for TimePoint<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    /// Renders the point as zero-padded `HH:MM:SS` relative to the epoch,
    /// with the hour field growing past two digits when needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::time::TimePoint;
    ///
    /// assert_eq!(TimePoint::from_hms(1i64, 2, 3).to_string(), "01:02:03");
    /// assert_eq!(TimePoint::from_hms(100i64, 0, 0).to_string(), "100:00:00");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (hour, minute, second) = self.hms();
        write!(f, "{:02}:{:02}:{:02}", hour, minute, second)
    }
}

impl<T> Sub for TimePoint<T>
where
    T: PrimInt + Signed,
{
    type Output = TimeDelta<T>;

    #[inline]
    fn sub(self, rhs: Self) -> TimeDelta<T> {
        TimeDelta(self.0 - rhs.0)
    }
}

impl<T> Add<TimeDelta<T>> for TimePoint<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: TimeDelta<T>) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T> Sub<TimeDelta<T>> for TimePoint<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: TimeDelta<T>) -> Self {
        Self(self.0 - rhs.0)
    }
}

/// A signed duration: the difference between two [`TimePoint`]s.
///
/// Zero and negative deltas are meaningful values; sign tests and
/// comparison against zero are part of the public surface.
///
/// # Examples
///
/// ```rust
/// # use num_traits::Zero;
/// # use tidespan_core::time::{TimeDelta, TimePoint};
///
/// let d = TimePoint::new(30i64) - TimePoint::new(90i64);
/// assert!(d.is_negative());
/// assert_eq!(-d, TimeDelta::new(60));
/// assert!(TimeDelta::<i64>::zero().is_zero());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeDelta<T>(T)
where
    T: PrimInt + Signed;

impl<T> TimeDelta<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `TimeDelta` from a raw tick count.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the raw tick count.
    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    /// Builds a delta of `hour` hours, `minute` minutes, and `second`
    /// seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::time::TimeDelta;
    ///
    /// assert_eq!(TimeDelta::from_hms(2i64, 30, 0).value(), 9000);
    /// ```
    #[inline]
    pub fn from_hms(hour: T, minute: T, second: T) -> Self {
        Self(hour * seconds_per_hour::<T>() + minute * seconds_per_minute::<T>() + second)
    }

    /// Decomposes the delta into an `(hour, minute, second)` triple with
    /// the hour unbounded above.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::time::TimeDelta;
    ///
    /// assert_eq!(TimeDelta::new(9000i64).hms(), (2, 30, 0));
    /// assert_eq!(TimeDelta::from_hms(30i64, 0, 10).hms(), (30, 0, 10));
    /// ```
    #[inline]
    pub fn hms(self) -> (T, T, T) {
        let hour = self.0 / seconds_per_hour::<T>();
        let rest = self.0 % seconds_per_hour::<T>();
        let minute = rest / seconds_per_minute::<T>();
        let second = rest % seconds_per_minute::<T>();
        (hour, minute, second)
    }

    /// Returns `true` if the delta is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < T::zero()
    }

    /// Returns `true` if the delta is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > T::zero()
    }
}

impl<T> Zero for TimeDelta<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn zero() -> Self {
        Self(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T> Add for TimeDelta<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T> AddAssign for TimeDelta<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T> Sub for TimeDelta<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T> SubAssign for TimeDelta<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T> Neg for TimeDelta<T>
where
    T: PrimInt + Signed,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T> std::fmt::Debug for TimeDelta<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeDelta({:?})", self.0)
    }
}

impl<T> std::fmt::Display for TimeDelta<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeDelta({})", self.0)
    }
}
