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

//! Normalized time-span sets.
//!
//! A [`TimeSpan`] aggregates closed intervals into a canonical form: units
//! sorted ascending by start, no two units continuous, zero-length instants
//! permitted. Mutators accept arbitrary raw input and re-establish the
//! canonical form before returning, so callers can reason about busy or
//! covered windows without tracking raw interval lists themselves.

use num_traits::{PrimInt, Signed, Zero};
use std::ops::{AddAssign, SubAssign};
use tidespan_core::time::{TimeDelta, TimeInterval, TimePoint};

/// The error returned when querying the bounding range of an empty span.
///
/// The bounding range has no meaningful zero value, so the condition
/// surfaces to the caller instead of defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySpanError;

impl std::fmt::Display for EmptySpanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "time span holds no units")
    }
}

impl std::error::Error for EmptySpanError {}

/// An ordered collection of disjoint, non-continuous closed intervals.
///
/// # Invariants
///
/// After every public operation completes:
///
/// 1. Units are sorted ascending by start point.
/// 2. No two units are continuous: anything that overlaps, touches, or
///    nests has already been merged into a single unit.
/// 3. Unit lengths are never negative (the interval constructor orders its
///    endpoints); zero-length instants are valid units and are retained.
/// 4. The empty sequence is the valid zero value: `total()` is zero,
///    `count()` is zero, and every membership query answers `false`.
///
/// # Examples
///
/// ```rust
/// # use tidespan::{TimeDelta, TimePoint, TimeSpan};
///
/// let mut busy = TimeSpan::new(TimePoint::from_hms(9i64, 0, 0), TimePoint::from_hms(11, 0, 0));
/// busy.add(&TimeSpan::new(TimePoint::from_hms(10i64, 30, 0), TimePoint::from_hms(12, 0, 0)));
/// busy.add(&TimeSpan::new(TimePoint::from_hms(14i64, 0, 0), TimePoint::from_hms(15, 0, 0)));
///
/// assert_eq!(busy.count(), 2);
/// assert_eq!(busy.total(), TimeDelta::from_hms(4, 0, 0));
/// assert_eq!(busy.to_string(), "[[09:00:00 - 12:00:00], [14:00:00 - 15:00:00]]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSpan<T>
where
    T: PrimInt + Signed,
{
    units: Vec<TimeInterval<T>>,
}

impl<T> TimeSpan<T>
where
    T: PrimInt + Signed,
{
    /// Creates a span covering the single closed interval `[start, end]`.
    ///
    /// Reversed endpoints are swapped silently, never rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimePoint, TimeSpan};
    ///
    /// let ts = TimeSpan::new(TimePoint::new(50i64), TimePoint::new(10));
    /// assert_eq!(ts.count(), 1);
    /// assert_eq!(ts.to_pairs(), vec![(TimePoint::new(10), TimePoint::new(50))]);
    /// ```
    #[inline]
    pub fn new(start: TimePoint<T>, end: TimePoint<T>) -> Self {
        Self {
            units: vec![TimeInterval::new(start, end)],
        }
    }

    /// Creates a span covering `[start, start + duration]`.
    ///
    /// A negative duration reaches backwards from `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimeDelta, TimePoint, TimeSpan};
    ///
    /// let ts = TimeSpan::from_duration(TimePoint::new(100i64), TimeDelta::new(20));
    /// assert_eq!(ts.to_pairs(), vec![(TimePoint::new(100), TimePoint::new(120))]);
    /// ```
    #[inline]
    pub fn from_duration(start: TimePoint<T>, duration: TimeDelta<T>) -> Self {
        Self::new(start, start + duration)
    }

    /// Builds a span from raw `(start, end)` pairs and normalizes it.
    ///
    /// Pairs may be unordered, reversed, and overlapping; an empty input
    /// yields the empty span without error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimePoint, TimeSpan};
    ///
    /// let ts = TimeSpan::from_pairs([
    ///     (TimePoint::new(40i64), TimePoint::new(60)),
    ///     (TimePoint::new(10), TimePoint::new(0)),
    ///     (TimePoint::new(5), TimePoint::new(20)),
    /// ]);
    /// assert_eq!(ts.count(), 2);
    /// assert_eq!(
    ///     ts.to_pairs(),
    ///     vec![
    ///         (TimePoint::new(0), TimePoint::new(20)),
    ///         (TimePoint::new(40), TimePoint::new(60)),
    ///     ]
    /// );
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (TimePoint<T>, TimePoint<T>)>,
    {
        let units = pairs
            .into_iter()
            .map(|(start, end)| TimeInterval::new(start, end))
            .collect();
        Self {
            units: Self::normalize(units),
        }
    }

    /// Creates the empty span.
    #[inline]
    pub fn empty() -> Self {
        Self { units: Vec::new() }
    }

    /// Returns the bounding range `[first start, last end]` of the set.
    ///
    /// The bounding range is not necessarily a contiguous covering; gaps
    /// between units are not represented in it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySpanError`] when the span holds no units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimePoint, TimeSpan};
    ///
    /// let ts = TimeSpan::from_pairs([
    ///     (TimePoint::new(0i64), TimePoint::new(10)),
    ///     (TimePoint::new(40), TimePoint::new(60)),
    /// ]);
    /// let bounds = ts.bounding().unwrap();
    /// assert_eq!(bounds.start(), TimePoint::new(0));
    /// assert_eq!(bounds.end(), TimePoint::new(60));
    ///
    /// assert!(TimeSpan::<i64>::empty().bounding().is_err());
    /// ```
    pub fn bounding(&self) -> Result<TimeInterval<T>, EmptySpanError> {
        match (self.units.first(), self.units.last()) {
            (Some(first), Some(last)) => Ok(TimeInterval::new(first.start(), last.end())),
            _ => Err(EmptySpanError),
        }
    }

    /// Returns the summed length of all units; zero for the empty span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimeDelta, TimePoint, TimeSpan};
    ///
    /// let ts = TimeSpan::from_pairs([
    ///     (TimePoint::new(0i64), TimePoint::new(10)),
    ///     (TimePoint::new(40), TimePoint::new(60)),
    /// ]);
    /// assert_eq!(ts.total(), TimeDelta::new(30));
    /// ```
    pub fn total(&self) -> TimeDelta<T> {
        self.units
            .iter()
            .fold(TimeDelta::zero(), |acc, unit| acc + unit.length())
    }

    /// Returns the number of disjoint units.
    #[inline]
    pub fn count(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the span holds no units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the normalized units as a slice.
    #[inline]
    pub fn intervals(&self) -> &[TimeInterval<T>] {
        &self.units
    }

    /// Returns an iterator over the normalized units.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TimeInterval<T>> {
        self.units.iter()
    }

    /// Returns the ordered raw `(start, end)` decomposition.
    ///
    /// This is the escape hatch for callers that need the concrete unit
    /// list; feeding it back through [`from_pairs`](Self::from_pairs)
    /// reproduces the span.
    pub fn to_pairs(&self) -> Vec<(TimePoint<T>, TimePoint<T>)> {
        self.units
            .iter()
            .map(|unit| (unit.start(), unit.end()))
            .collect()
    }

    /// Returns `true` if any unit contains `point`, endpoints included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimePoint, TimeSpan};
    ///
    /// let ts = TimeSpan::new(TimePoint::new(10i64), TimePoint::new(20));
    /// assert!(ts.contains_point(TimePoint::new(10)));
    /// assert!(ts.contains_point(TimePoint::new(20)));
    /// assert!(!ts.contains_point(TimePoint::new(21)));
    /// ```
    pub fn contains_point(&self, point: TimePoint<T>) -> bool {
        self.units.iter().any(|unit| unit.contains_point(point))
    }

    /// Returns `true` if every unit of `other` is fully contained in some
    /// single unit of `self`.
    ///
    /// A unit of `other` straddling two of `self`'s units does not count as
    /// contained. Normalization has already merged any continuous units, so
    /// such a straddling piece necessarily crosses a genuine gap.
    ///
    /// The empty span is contained in every span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimePoint, TimeSpan};
    ///
    /// let ts = TimeSpan::from_pairs([
    ///     (TimePoint::new(0i64), TimePoint::new(10)),
    ///     (TimePoint::new(40), TimePoint::new(60)),
    /// ]);
    /// assert!(ts.contains_span(&TimeSpan::new(TimePoint::new(45), TimePoint::new(50))));
    /// assert!(!ts.contains_span(&TimeSpan::new(TimePoint::new(5), TimePoint::new(45))));
    /// ```
    pub fn contains_span(&self, other: &Self) -> bool {
        other
            .units
            .iter()
            .all(|needle| self.units.iter().any(|unit| unit.contains_interval(needle)))
    }

    /// Returns `true` if any unit of `other` overlaps, touches, or nests
    /// with any unit of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimePoint, TimeSpan};
    ///
    /// let ts = TimeSpan::new(TimePoint::new(0i64), TimePoint::new(10));
    /// assert!(ts.continuous(&TimeSpan::new(TimePoint::new(10), TimePoint::new(15))));
    /// assert!(!ts.continuous(&TimeSpan::new(TimePoint::new(11), TimePoint::new(15))));
    /// ```
    pub fn continuous(&self, other: &Self) -> bool {
        other
            .units
            .iter()
            .any(|needle| self.units.iter().any(|unit| unit.continuous(needle)))
    }

    /// Adds `other`'s units to this span and re-normalizes.
    ///
    /// The net effect is set union: continuous units merge, disjoint units
    /// coexist in start order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimePoint, TimeSpan};
    ///
    /// let mut ts = TimeSpan::new(TimePoint::new(0i64), TimePoint::new(10));
    /// ts.add(&TimeSpan::new(TimePoint::new(5), TimePoint::new(15)));
    /// assert_eq!(ts.to_pairs(), vec![(TimePoint::new(0), TimePoint::new(15))]);
    /// ```
    pub fn add(&mut self, other: &Self) {
        let mut candidate = std::mem::take(&mut self.units);
        candidate.extend_from_slice(&other.units);
        self.units = Self::normalize(candidate);
    }

    /// Removes `other`'s coverage from this span and re-normalizes.
    ///
    /// This runs independent pairwise subtraction with post-hoc union: every
    /// ORIGINAL unit of `self` is subtracted against every unit of `other`,
    /// all leftover pieces are concatenated, and normalization merges them
    /// afterwards. The pairwise results are deliberately derived from the
    /// pre-subtraction units rather than narrowed sequentially; folding the
    /// pieces forward instead would change the outcome whenever `other`
    /// holds units that overlap each other relative to a single unit of
    /// `self`.
    ///
    /// Shared boundary points survive: subtracting `[5, 10]` from `[0, 10]`
    /// leaves `[0, 5]`, with the touching point `5` still covered.
    ///
    /// Subtracting the empty span leaves `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan::{TimePoint, TimeSpan};
    ///
    /// let mut ts = TimeSpan::new(TimePoint::new(0i64), TimePoint::new(100));
    /// ts.sub(&TimeSpan::new(TimePoint::new(40), TimePoint::new(60)));
    /// assert_eq!(
    ///     ts.to_pairs(),
    ///     vec![
    ///         (TimePoint::new(0), TimePoint::new(40)),
    ///         (TimePoint::new(60), TimePoint::new(100)),
    ///     ]
    /// );
    /// ```
    pub fn sub(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        let mut candidate = Vec::with_capacity(self.units.len() * 2);
        for unit in &self.units {
            for removed in &other.units {
                candidate.extend(unit.subtract(removed));
            }
        }
        self.units = Self::normalize(candidate);
    }

    /// Restores the canonical form of a raw unit list.
    ///
    /// Pure function from candidate list to canonical list; callers assign
    /// the result back in one step so a span is never observable in a
    /// half-normalized state.
    ///
    /// Sorting first makes the merge scan linear in the common case: once a
    /// unit fails to merge with its next live neighbor, no later unit can
    /// merge with it either, so the inner scan stops there. A successful
    /// merge keeps scanning, because the enlarged unit may absorb further
    /// neighbors. Swallowed slots become `None` and are dropped at the end;
    /// zero-length instants are kept.
    fn normalize(mut units: Vec<TimeInterval<T>>) -> Vec<TimeInterval<T>> {
        units.sort_by_key(|unit| unit.start());

        let mut slots: Vec<Option<TimeInterval<T>>> = units.into_iter().map(Some).collect();
        for i in 0..slots.len() {
            let Some(mut current) = slots[i] else {
                continue;
            };
            for j in (i + 1)..slots.len() {
                let Some(next) = slots[j] else {
                    continue;
                };
                match current.union(&next) {
                    Some(merged) => {
                        current = merged;
                        slots[j] = None;
                    }
                    None => break,
                }
            }
            slots[i] = Some(current);
        }

        slots.into_iter().flatten().collect()
    }
}

impl<T> Default for TimeSpan<T>
where
    T: PrimInt + Signed,
{
    /// The empty span: `total()` zero, `count()` zero.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> AddAssign<&TimeSpan<T>> for TimeSpan<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn add_assign(&mut self, rhs: &TimeSpan<T>) {
        self.add(rhs);
    }
}

impl<T> SubAssign<&TimeSpan<T>> for TimeSpan<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn sub_assign(&mut self, rhs: &TimeSpan<T>) {
        self.sub(rhs);
    }
}

impl<'a, T> IntoIterator for &'a TimeSpan<T>
where
    T: PrimInt + Signed,
{
    type Item = &'a TimeInterval<T>;
    type IntoIter = std::slice::Iter<'a, TimeInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::fmt::Display for TimeSpan<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    /// Renders the span as `[unit, unit, ...]`, each unit as
    /// `[HH:MM:SS - HH:MM:SS]` with the hour field unbounded above.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, unit) in self.units.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", unit)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: i64, minute: i64, second: i64) -> TimePoint<i64> {
        TimePoint::from_hms(hour, minute, second)
    }

    fn span(start: TimePoint<i64>, end: TimePoint<i64>) -> TimeSpan<i64> {
        TimeSpan::new(start, end)
    }

    fn assert_normalized(ts: &TimeSpan<i64>) {
        for pair in ts.intervals().windows(2) {
            assert!(pair[0].start() <= pair[1].start(), "units out of order");
            assert!(!pair[0].continuous(&pair[1]), "continuous units survived");
        }
    }

    #[test]
    fn add_merges_overlap_and_keeps_disjoint_unit() {
        let mut ts = span(t(1, 0, 0), t(2, 0, 0));
        ts.add(&span(t(1, 30, 0), t(2, 30, 0)));
        ts.add(&span(t(4, 0, 0), t(5, 0, 0)));

        assert_eq!(ts.total(), TimeDelta::from_hms(2, 30, 0));
        assert_eq!(ts.count(), 2);
        assert_normalized(&ts);
    }

    #[test]
    fn sub_inner_window_splits_unit_in_two() {
        let mut ts = span(t(1, 0, 0), t(2, 0, 0));
        ts.sub(&span(t(1, 30, 0), t(1, 40, 0)));

        assert_eq!(
            ts.to_pairs(),
            vec![
                (t(1, 0, 0), t(1, 30, 0)),
                (t(1, 40, 0), t(2, 0, 0)),
            ]
        );
    }

    #[test]
    fn zero_value_span_answers_all_queries() {
        let ts = TimeSpan::<i64>::default();

        assert_eq!(ts.total(), TimeDelta::zero());
        assert_eq!(ts.count(), 0);
        assert!(ts.is_empty());
        assert!(!ts.contains_point(t(0, 0, 0)));
        assert!(!ts.continuous(&span(t(0, 0, 0), t(1, 0, 0))));
        assert_eq!(ts.bounding(), Err(EmptySpanError));
    }

    #[test]
    fn chained_sub_sub_add_reaches_expected_decomposition() {
        let mut ts = span(t(1, 0, 0), t(100, 0, 0));
        ts.sub(&span(t(3, 30, 0), t(10, 0, 0)));
        ts.sub(&span(t(30, 0, 0), t(40, 10, 0)));
        ts.add(&span(t(0, 20, 0), t(20, 0, 0)));

        assert_eq!(
            ts.to_pairs(),
            vec![
                (t(0, 20, 0), t(30, 0, 0)),
                (t(40, 10, 0), t(100, 0, 0)),
            ]
        );
        assert_normalized(&ts);
    }

    #[test]
    fn nested_instant_is_contained_and_continuous() {
        let ts = span(t(1, 0, 0), t(2, 0, 0));
        let instant = span(t(1, 10, 0), t(1, 10, 0));

        assert!(ts.contains_span(&instant));
        assert!(ts.continuous(&instant));
        assert!(ts.contains_point(t(1, 10, 0)));
    }

    #[test]
    fn span_strictly_inside_a_gap_is_neither_contained_nor_continuous() {
        let mut ts = span(t(1, 0, 0), t(2, 0, 0));
        ts.add(&span(t(3, 0, 0), t(4, 0, 0)));
        let gap_dweller = span(t(2, 20, 0), t(2, 30, 0));

        assert!(!ts.continuous(&gap_dweller));
        assert!(!ts.contains_span(&gap_dweller));
    }

    #[test]
    fn unit_straddling_two_units_does_not_count_as_contained() {
        let ts = TimeSpan::from_pairs([
            (t(1, 0, 0), t(2, 0, 0)),
            (t(3, 0, 0), t(4, 0, 0)),
        ]);
        // Continuous with both units, but no single unit contains it.
        let straddler = span(t(1, 30, 0), t(3, 30, 0));

        assert!(ts.continuous(&straddler));
        assert!(!ts.contains_span(&straddler));
    }

    #[test]
    fn contains_span_is_reflexive() {
        let ts = TimeSpan::from_pairs([
            (t(1, 0, 0), t(2, 0, 0)),
            (t(3, 0, 0), t(3, 0, 0)),
            (t(5, 0, 0), t(8, 0, 0)),
        ]);
        assert!(ts.contains_span(&ts));
    }

    #[test]
    fn empty_span_is_contained_in_everything() {
        let ts = span(t(1, 0, 0), t(2, 0, 0));
        assert!(ts.contains_span(&TimeSpan::empty()));
        assert!(TimeSpan::<i64>::empty().contains_span(&TimeSpan::empty()));
    }

    #[test]
    fn reversed_constructor_input_is_swapped() {
        let ts = span(t(2, 0, 0), t(1, 0, 0));
        assert_eq!(ts.to_pairs(), vec![(t(1, 0, 0), t(2, 0, 0))]);
    }

    #[test]
    fn from_duration_matches_explicit_end() {
        let ts = TimeSpan::from_duration(t(1, 0, 0), TimeDelta::from_hms(0, 45, 0));
        assert_eq!(ts, span(t(1, 0, 0), t(1, 45, 0)));

        let backwards = TimeSpan::from_duration(t(1, 0, 0), -TimeDelta::from_hms(1, 0, 0));
        assert_eq!(backwards, span(t(0, 0, 0), t(1, 0, 0)));
    }

    #[test]
    fn from_pairs_of_empty_input_yields_empty_span() {
        let ts = TimeSpan::<i64>::from_pairs(std::iter::empty());
        assert!(ts.is_empty());
        assert_eq!(ts, TimeSpan::default());
    }

    #[test]
    fn from_pairs_sorts_merges_and_absorbs_chains() {
        // The middle pair bridges the outer two, so everything collapses
        // into one unit through repeated absorption.
        let ts = TimeSpan::from_pairs([
            (t(0, 0, 0), t(1, 0, 0)),
            (t(2, 0, 0), t(3, 0, 0)),
            (t(1, 0, 0), t(2, 0, 0)),
        ]);
        assert_eq!(ts.count(), 1);
        assert_eq!(ts.to_pairs(), vec![(t(0, 0, 0), t(3, 0, 0))]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let ts = TimeSpan::from_pairs([
            (t(5, 0, 0), t(6, 0, 0)),
            (t(1, 0, 0), t(2, 0, 0)),
            (t(1, 30, 0), t(2, 30, 0)),
            (t(4, 0, 0), t(4, 0, 0)),
        ]);
        let renormalized = TimeSpan::from_pairs(ts.to_pairs());
        assert_eq!(renormalized, ts);
    }

    #[test]
    fn round_trip_through_pairs_preserves_content() {
        let ts = TimeSpan::from_pairs([
            (t(1, 0, 0), t(2, 0, 0)),
            (t(3, 0, 0), t(3, 0, 0)),
            (t(4, 0, 0), t(9, 0, 0)),
        ]);
        assert_eq!(TimeSpan::from_pairs(ts.to_pairs()), ts);
    }

    #[test]
    fn union_is_commutative_and_associative_in_content() {
        let a = TimeSpan::from_pairs([(t(1, 0, 0), t(2, 0, 0)), (t(5, 0, 0), t(6, 0, 0))]);
        let b = TimeSpan::from_pairs([(t(1, 30, 0), t(4, 0, 0))]);
        let c = TimeSpan::from_pairs([(t(6, 0, 0), t(7, 0, 0)), (t(9, 0, 0), t(10, 0, 0))]);

        let mut ab = a.clone();
        ab.add(&b);
        let mut ba = b.clone();
        ba.add(&a);
        assert_eq!(ab, ba);

        let mut ab_c = ab.clone();
        ab_c.add(&c);
        let mut bc = b.clone();
        bc.add(&c);
        let mut a_bc = a.clone();
        a_bc.add(&bc);
        assert_eq!(ab_c, a_bc);
        assert_normalized(&ab_c);
    }

    #[test]
    fn sub_point_membership_matches_set_difference_in_the_interior() {
        let a = TimeSpan::from_pairs([(t(0, 0, 0), t(0, 0, 10)), (t(0, 0, 20), t(0, 0, 30))]);
        let b = span(t(0, 0, 5), t(0, 0, 25));

        let mut result = a.clone();
        result.sub(&b);

        for tick in 0..40i64 {
            let p = TimePoint::new(tick);
            // Closed intervals keep shared boundary points, so the removed
            // window's own endpoints stay covered where they touched `a`.
            if p == b.intervals()[0].start() || p == b.intervals()[0].end() {
                continue;
            }
            let expected = a.contains_point(p) && !b.contains_point(p);
            assert_eq!(result.contains_point(p), expected, "tick {}", tick);
        }
    }

    #[test]
    fn sub_across_a_gap_trims_both_sides() {
        let mut ts = TimeSpan::from_pairs([
            (t(0, 0, 0), t(1, 0, 0)),
            (t(2, 0, 0), t(3, 0, 0)),
        ]);
        ts.sub(&span(t(0, 30, 0), t(2, 30, 0)));

        assert_eq!(
            ts.to_pairs(),
            vec![
                (t(0, 0, 0), t(0, 30, 0)),
                (t(2, 30, 0), t(3, 0, 0)),
            ]
        );
        assert_normalized(&ts);
    }

    #[test]
    fn sub_strictly_covering_window_erases_everything() {
        let mut ts = span(t(1, 0, 0), t(2, 0, 0));
        ts.sub(&span(t(0, 0, 0), t(3, 0, 0)));
        assert!(ts.is_empty());
        assert_eq!(ts.total(), TimeDelta::zero());
    }

    #[test]
    fn sub_identical_span_leaves_boundary_instants() {
        // Equal intervals split at their bounds; the two zero-length pieces
        // survive normalization, so coverage collapses to the endpoints.
        let mut ts = span(t(1, 0, 0), t(2, 0, 0));
        let same = ts.clone();
        ts.sub(&same);

        assert_eq!(ts.count(), 2);
        assert_eq!(ts.total(), TimeDelta::zero());
        assert_eq!(
            ts.to_pairs(),
            vec![
                (t(1, 0, 0), t(1, 0, 0)),
                (t(2, 0, 0), t(2, 0, 0)),
            ]
        );
    }

    #[test]
    fn sub_of_empty_span_is_a_no_op() {
        let mut ts = span(t(1, 0, 0), t(2, 0, 0));
        ts.sub(&TimeSpan::empty());
        assert_eq!(ts, span(t(1, 0, 0), t(2, 0, 0)));

        let mut empty = TimeSpan::<i64>::empty();
        empty.sub(&span(t(1, 0, 0), t(2, 0, 0)));
        assert!(empty.is_empty());
    }

    #[test]
    fn add_preserves_disjoint_instant_and_absorbs_nested_instant() {
        let mut ts = span(t(1, 0, 0), t(2, 0, 0));
        ts.add(&span(t(1, 30, 0), t(1, 30, 0)));
        assert_eq!(ts.count(), 1);

        ts.add(&span(t(5, 0, 0), t(5, 0, 0)));
        assert_eq!(ts.count(), 2);
        assert_eq!(ts.intervals()[1].length(), TimeDelta::zero());
        assert_normalized(&ts);
    }

    #[test]
    fn operator_sugar_delegates_to_add_and_sub() {
        let mut ts = span(t(1, 0, 0), t(2, 0, 0));
        ts += &span(t(4, 0, 0), t(5, 0, 0));
        ts -= &span(t(1, 30, 0), t(1, 40, 0));

        assert_eq!(
            ts.to_pairs(),
            vec![
                (t(1, 0, 0), t(1, 30, 0)),
                (t(1, 40, 0), t(2, 0, 0)),
                (t(4, 0, 0), t(5, 0, 0)),
            ]
        );
    }

    #[test]
    fn bounding_spans_first_start_to_last_end() {
        let ts = TimeSpan::from_pairs([
            (t(4, 0, 0), t(5, 0, 0)),
            (t(1, 0, 0), t(2, 0, 0)),
        ]);
        let bounds = ts.bounding().unwrap();
        assert_eq!(bounds.start(), t(1, 0, 0));
        assert_eq!(bounds.end(), t(5, 0, 0));
    }

    #[test]
    fn bounding_error_is_displayable() {
        let err = TimeSpan::<i64>::empty().bounding().unwrap_err();
        assert_eq!(err.to_string(), "time span holds no units");
    }

    #[test]
    fn display_joins_units_with_clock_rendering() {
        let mut ts = span(t(1, 0, 0), t(2, 0, 0));
        ts.add(&span(t(4, 0, 0), t(5, 0, 0)));
        assert_eq!(ts.to_string(), "[[01:00:00 - 02:00:00], [04:00:00 - 05:00:00]]");

        assert_eq!(TimeSpan::<i64>::empty().to_string(), "[]");

        let long = span(t(90, 0, 0), t(100, 30, 5));
        assert_eq!(long.to_string(), "[[90:00:00 - 100:30:05]]");
    }

    #[test]
    fn iteration_yields_units_in_order() {
        let ts = TimeSpan::from_pairs([
            (t(4, 0, 0), t(5, 0, 0)),
            (t(1, 0, 0), t(2, 0, 0)),
        ]);
        let starts: Vec<_> = (&ts).into_iter().map(|unit| unit.start()).collect();
        assert_eq!(starts, vec![t(1, 0, 0), t(4, 0, 0)]);
        assert_eq!(ts.iter().count(), 2);
    }

    #[test]
    fn randomized_raw_input_always_normalizes() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(0x7159_DE5F);
        for _ in 0..200 {
            let n = rng.random_range(0..12usize);
            let pairs: Vec<_> = (0..n)
                .map(|_| {
                    (
                        TimePoint::new(rng.random_range(0..5_000i64)),
                        TimePoint::new(rng.random_range(0..5_000i64)),
                    )
                })
                .collect();

            let ts = TimeSpan::from_pairs(pairs);
            assert_normalized(&ts);
            assert!(!ts.total().is_negative());
            // Normalization is idempotent on its own output.
            assert_eq!(TimeSpan::from_pairs(ts.to_pairs()), ts);
        }
    }
}
