//! Time sets: unions of disjoint intervals over the weekly universe.
//!
//! A [`TimeSet`] represents an arbitrary union of time ranges within a
//! 7-day week, measured in hours on `[0, 168]`. It is the algebraic core
//! of the crate: every scheduling decision reduces to set operations and
//! quantized window enumeration on time sets.
//!
//! # Canonical Form
//!
//! A set always holds an even number of markers describing disjoint,
//! non-degenerate intervals in ascending order. Every operation is pure
//! and returns a new canonical set; operands are never mutated.
//!
//! # Sweep Semantics
//!
//! Union, intersection, and complement are marker sweeps ordered by
//! [`TimeMarker::sweep_order`]: ascending time, End before Start at ties.
//! Closing before reopening means two *touching* intervals (such as
//! `[0, 2)` and `[2, 4)`) remain distinct through a union, so windows
//! enumerated by [`TimeSet::windows_of`] never straddle a touch point.
//! Complement drops the degenerate gap at a touch point, so subtraction
//! still behaves as expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

use super::marker::TimeMarker;

/// Hours in the scheduling universe: a full 7-day week.
pub const WEEK_HOURS: f64 = 168.0;

/// Tolerance for the duration/chunk divisibility check.
const DIVISIBILITY_TOLERANCE: f64 = 0.01;

/// Errors raised by time-set construction and algebra.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    /// Interval start lies after its end.
    #[error("interval start {start} is after its end {end}")]
    InvertedInterval { start: f64, end: f64 },
    /// Interval start equals its end; zero-length intervals are rejected.
    #[error("interval [{start}, {end}) is zero-length")]
    DegenerateInterval { start: f64, end: f64 },
    /// A time falls outside the weekly universe `[0, 168]`.
    #[error("time {0} is outside the weekly universe [0, 168]")]
    OutOfUniverse(f64),
    /// Duration is not an even multiple of the chunk size.
    #[error("duration {duration} is not evenly divisible by chunk size {chunk_size}")]
    IndivisibleDuration { duration: f64, chunk_size: f64 },
    /// Duration or chunk size is zero or negative.
    #[error("duration and chunk size must both be positive")]
    NonPositiveDuration,
    /// A day shift would move an interval outside the week.
    #[error("shifting by {days} day(s) moves an interval outside the week")]
    ShiftOutOfUniverse { days: i32 },
}

/// An immutable set of disjoint time intervals within `[0, 168]` hours.
///
/// Equality and hashing are set-based over the interval collection,
/// independent of how the set was constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSet {
    markers: Vec<TimeMarker>,
}

impl TimeSet {
    /// The empty set: no times at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A set holding the single interval `[start, end)`.
    ///
    /// Rejects inverted, zero-length, and out-of-universe intervals; input
    /// is never clamped.
    pub fn interval(start: f64, end: f64) -> Result<Self, TimeError> {
        if !start.is_finite() {
            return Err(TimeError::OutOfUniverse(start));
        }
        if !end.is_finite() {
            return Err(TimeError::OutOfUniverse(end));
        }
        if start > end {
            return Err(TimeError::InvertedInterval { start, end });
        }
        if start == end {
            return Err(TimeError::DegenerateInterval { start, end });
        }
        if start < 0.0 {
            return Err(TimeError::OutOfUniverse(start));
        }
        if end > WEEK_HOURS {
            return Err(TimeError::OutOfUniverse(end));
        }
        Ok(Self {
            markers: vec![TimeMarker::start(start, end), TimeMarker::end(start, end)],
        })
    }

    /// The whole weekly universe `[0, 168)`.
    pub fn universe() -> Self {
        Self {
            markers: vec![
                TimeMarker::start(0.0, WEEK_HOURS),
                TimeMarker::end(0.0, WEEK_HOURS),
            ],
        }
    }

    /// The markers of this set, in ascending interval order.
    pub fn markers(&self) -> &[TimeMarker] {
        &self.markers
    }

    /// Iterator over the intervals of this set as `(start, end)` pairs,
    /// ascending by start time.
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.markers
            .iter()
            .filter(|m| m.is_start())
            .map(|m| (m.time(), m.counterpart()))
    }

    /// Number of intervals in this set.
    pub fn interval_count(&self) -> usize {
        self.markers.len() / 2
    }

    /// Whether this set contains no times.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Whether `other` is fully contained within this set.
    pub fn contains(&self, other: &TimeSet) -> bool {
        &self.intersect(other) == other
    }

    /// Index of the weekday (0 = first day) the set begins on, or `None`
    /// for the empty set.
    pub fn weekday_index(&self) -> Option<usize> {
        self.intervals().next().map(|(start, _)| (start / 24.0).floor() as usize)
    }

    /// Set union of `self` and `other`.
    ///
    /// Overlapping runs of intervals merge; touching intervals stay
    /// separate (see the module docs on sweep semantics).
    pub fn union(&self, other: &TimeSet) -> TimeSet {
        let mut worklist: Vec<TimeMarker> = self
            .markers
            .iter()
            .chain(other.markers.iter())
            .copied()
            .collect();
        worklist.sort_by(TimeMarker::sweep_order);

        let mut out = Vec::new();
        let mut ongoing = false;
        let mut opener = 0.0;
        // Furthest end seen among the starts of the currently open run.
        let mut target_end = -1.0;
        for marker in worklist {
            if marker.is_start() {
                if !ongoing {
                    ongoing = true;
                    opener = marker.time();
                    target_end = marker.counterpart();
                } else if marker.counterpart() > target_end {
                    target_end = marker.counterpart();
                }
            } else if ongoing && marker.time() == target_end {
                out.push(TimeMarker::start(opener, target_end));
                out.push(TimeMarker::end(opener, target_end));
                ongoing = false;
            }
            // An End short of the target closes nothing: some other
            // operand still keeps the run open.
        }
        TimeSet { markers: out }
    }

    /// Set intersection of `self` and `other`.
    pub fn intersect(&self, other: &TimeSet) -> TimeSet {
        self.intersect_all(std::slice::from_ref(other))
    }

    /// N-ary set intersection of `self` with every set in `others`.
    ///
    /// A result interval is open exactly while all `others.len() + 1`
    /// operands have an interval open simultaneously.
    pub fn intersect_all(&self, others: &[TimeSet]) -> TimeSet {
        let mut worklist: Vec<TimeMarker> = self.markers.iter().copied().collect();
        for set in others {
            worklist.extend(set.markers.iter().copied());
        }
        worklist.sort_by(TimeMarker::sweep_order);

        let width = others.len() + 1;
        // One slot per operand; a slot holds the Start marker of an
        // interval currently open in some operand.
        let mut ongoing: Vec<Option<TimeMarker>> = vec![None; width];
        let mut opener = 0.0;
        let mut out = Vec::new();
        for marker in worklist {
            if marker.is_start() {
                for slot in 0..width {
                    if ongoing[slot].is_none() {
                        ongoing[slot] = Some(marker);
                        if slot == width - 1 {
                            // All operands open at once: an intersection
                            // interval begins here.
                            opener = marker.time();
                        }
                        break;
                    }
                }
            } else {
                if ongoing[width - 1].is_some() {
                    out.push(TimeMarker::start(opener, marker.time()));
                    out.push(TimeMarker::end(opener, marker.time()));
                }
                // Vacate the slot whose tracked interval this End closes,
                // keeping the occupied slots packed to the front.
                if let Some(slot) = (0..width)
                    .find(|&s| ongoing[s].is_some_and(|held| held.counterpart() == marker.time()))
                {
                    ongoing.remove(slot);
                    ongoing.push(None);
                }
            }
        }
        TimeSet { markers: out }
    }

    /// Set complement within the weekly universe `[0, 168]`.
    ///
    /// Gaps become intervals and covered regions become gaps; zero-length
    /// gaps (at touch points and universe edges) are dropped.
    pub fn complement(&self) -> TimeSet {
        let mut out = Vec::new();
        // Start of the gap currently being tracked, if any.
        let mut opener = Some(0.0);
        for marker in &self.markers {
            if marker.is_start() {
                if marker.time() > 0.0 {
                    if let Some(open) = opener {
                        if open != marker.time() {
                            out.push(TimeMarker::start(open, marker.time()));
                            out.push(TimeMarker::end(open, marker.time()));
                        }
                    }
                }
                opener = None;
            } else if marker.time() < WEEK_HOURS {
                opener = Some(marker.time());
            }
        }
        if let Some(open) = opener {
            out.push(TimeMarker::start(open, WEEK_HOURS));
            out.push(TimeMarker::end(open, WEEK_HOURS));
        }
        TimeSet { markers: out }
    }

    /// Set difference: the times in `self` that are not in `other`.
    pub fn subtract(&self, other: &TimeSet) -> TimeSet {
        self.intersect(&other.complement())
    }

    /// Enumerates every window of `duration` hours that fits inside this
    /// set with its start aligned to a `chunk_size` step.
    ///
    /// For each interval `[s, e)`, yields `[t, t + duration)` for
    /// `t = s + i * chunk_size` while `t + duration <= e`. The step is
    /// computed by multiplication, never by accumulation, so boundary
    /// windows are not lost to float drift.
    ///
    /// Fails when `duration` is not an even multiple of `chunk_size`
    /// (tolerance 0.01) or either is non-positive.
    pub fn windows_of(&self, duration: f64, chunk_size: f64) -> Result<Vec<TimeSet>, TimeError> {
        if duration <= 0.0 || chunk_size <= 0.0 {
            return Err(TimeError::NonPositiveDuration);
        }
        if (duration % chunk_size).abs() > DIVISIBILITY_TOLERANCE {
            return Err(TimeError::IndivisibleDuration {
                duration,
                chunk_size,
            });
        }
        let mut out = Vec::new();
        for (start, end) in self.intervals() {
            for step in 0.. {
                let t = start + step as f64 * chunk_size;
                if t + duration > end {
                    break;
                }
                out.push(TimeSet::interval(t, t + duration)?);
            }
        }
        Ok(out)
    }

    /// Shifts every interval by `24 * days` hours.
    ///
    /// Fails if the shift would move any interval outside the weekly
    /// universe, in either direction.
    pub fn add_days(&self, days: i32) -> Result<TimeSet, TimeError> {
        let shift = 24.0 * f64::from(days);
        let mut out = Vec::with_capacity(self.markers.len());
        for (start, end) in self.intervals() {
            let (s, e) = (start + shift, end + shift);
            if s < 0.0 || e > WEEK_HOURS {
                return Err(TimeError::ShiftOutOfUniverse { days });
            }
            out.push(TimeMarker::start(s, e));
            out.push(TimeMarker::end(s, e));
        }
        Ok(TimeSet { markers: out })
    }
}

impl PartialEq for TimeSet {
    fn eq(&self, other: &Self) -> bool {
        // Canonical ascending order makes positional comparison equivalent
        // to comparing the interval collections as sets.
        self.markers.len() == other.markers.len()
            && self.intervals().zip(other.intervals()).all(|(a, b)| a == b)
    }
}

// Interval bounds are always finite, so float equality is an equivalence.
impl Eq for TimeSet {}

impl Hash for TimeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (start, end) in self.intervals() {
            start.to_bits().hash(state);
            end.to_bits().hash(state);
        }
    }
}

impl fmt::Display for TimeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        let mut first = true;
        for (start, end) in self.intervals() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "[{start}, {end})")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(start: f64, end: f64) -> TimeSet {
        TimeSet::interval(start, end).unwrap()
    }

    #[test]
    fn test_interval_constructor() {
        let t = set(12.0, 24.0);
        assert_eq!(t.intervals().collect::<Vec<_>>(), vec![(12.0, 24.0)]);

        // Edges of the universe are allowed.
        let edge = set(0.0, 168.0);
        assert_eq!(edge.intervals().collect::<Vec<_>>(), vec![(0.0, 168.0)]);

        // Fractional times are allowed.
        let frac = set(3.1415, 11.176);
        assert_eq!(frac.intervals().collect::<Vec<_>>(), vec![(3.1415, 11.176)]);
    }

    #[test]
    fn test_interval_constructor_rejects_bad_input() {
        assert_eq!(
            TimeSet::interval(-0.01, 10.0),
            Err(TimeError::OutOfUniverse(-0.01))
        );
        assert_eq!(
            TimeSet::interval(42.0, 168.01),
            Err(TimeError::OutOfUniverse(168.01))
        );
        assert_eq!(
            TimeSet::interval(3.01, 3.0),
            Err(TimeError::InvertedInterval {
                start: 3.01,
                end: 3.0
            })
        );
        assert_eq!(
            TimeSet::interval(3.0, 3.0),
            Err(TimeError::DegenerateInterval {
                start: 3.0,
                end: 3.0
            })
        );
    }

    #[test]
    fn test_empty_set() {
        let e = TimeSet::empty();
        assert!(e.is_empty());
        assert_eq!(e.interval_count(), 0);
        assert_eq!(e.weekday_index(), None);
    }

    #[test]
    fn test_union_disjoint() {
        let u = set(12.0, 24.0).union(&set(36.0, 48.0));
        assert_eq!(
            u.intervals().collect::<Vec<_>>(),
            vec![(12.0, 24.0), (36.0, 48.0)]
        );
    }

    #[test]
    fn test_union_overlapping() {
        let u1 = set(12.0, 24.0).union(&set(20.0, 40.0));
        assert_eq!(u1, set(12.0, 40.0));

        let u2 = set(36.0, 48.0).union(&set(20.0, 40.0));
        assert_eq!(u2, set(20.0, 48.0));
    }

    #[test]
    fn test_union_containment() {
        let pair = set(12.0, 24.0).union(&set(36.0, 48.0));
        let u = set(7.5, 69.0).union(&pair);
        assert_eq!(u, set(7.5, 69.0));
    }

    #[test]
    fn test_union_merges_chain_of_overlaps() {
        let pair = set(12.0, 24.0).union(&set(36.0, 48.0));
        let u = pair.union(&set(25.0, 33.0)).union(&set(20.0, 40.0));
        assert_eq!(u, set(12.0, 48.0));
    }

    #[test]
    fn test_union_commutative() {
        let a = set(1.0, 5.0).union(&set(9.0, 12.0));
        let b = set(4.0, 10.0);
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn test_union_keeps_touching_intervals_separate() {
        let u = set(0.0, 2.0).union(&set(2.0, 4.0));
        assert_eq!(u.intervals().collect::<Vec<_>>(), vec![(0.0, 2.0), (2.0, 4.0)]);
        assert_ne!(u, set(0.0, 4.0));
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        assert!(set(12.0, 24.0).intersect(&set(36.0, 48.0)).is_empty());
    }

    #[test]
    fn test_intersect_overlapping() {
        assert_eq!(set(12.0, 24.0).intersect(&set(20.0, 40.0)), set(20.0, 24.0));
        assert_eq!(set(36.0, 48.0).intersect(&set(20.0, 40.0)), set(36.0, 40.0));
    }

    #[test]
    fn test_intersect_with_empty() {
        assert!(TimeSet::empty().intersect(&set(7.5, 69.0)).is_empty());
    }

    #[test]
    fn test_intersect_with_containing_set() {
        let pair = set(36.0, 48.0).union(&set(12.0, 24.0));
        assert_eq!(pair.intersect(&set(7.5, 69.0)), pair);
    }

    #[test]
    fn test_intersect_multi_interval() {
        let three = set(36.0, 48.0)
            .union(&set(12.0, 24.0))
            .union(&set(25.0, 33.0));
        let got = three.intersect(&set(20.0, 40.0));
        assert_eq!(
            got.intervals().collect::<Vec<_>>(),
            vec![(20.0, 24.0), (25.0, 33.0), (36.0, 40.0)]
        );
    }

    #[test]
    fn test_intersect_all_three_way() {
        let got = set(20.0, 40.0).intersect_all(&[set(25.0, 33.0), set(7.5, 69.0)]);
        assert_eq!(got, set(25.0, 33.0));
    }

    #[test]
    fn test_intersect_all_with_no_others_is_identity() {
        let pair = set(1.0, 2.0).union(&set(5.0, 9.0));
        assert_eq!(pair.intersect_all(&[]), pair);
    }

    #[test]
    fn test_complement_basic() {
        let c = set(7.5, 69.0).complement();
        assert_eq!(
            c.intervals().collect::<Vec<_>>(),
            vec![(0.0, 7.5), (69.0, 168.0)]
        );
    }

    #[test]
    fn test_complement_of_universe_is_empty() {
        assert!(TimeSet::universe().complement().is_empty());
    }

    #[test]
    fn test_complement_of_empty_is_universe() {
        assert_eq!(TimeSet::empty().complement(), TimeSet::universe());
    }

    #[test]
    fn test_complement_of_disjoint_union() {
        let c = set(12.0, 24.0)
            .union(&set(36.0, 48.0))
            .union(&set(25.0, 33.0))
            .complement();
        assert_eq!(
            c.intervals().collect::<Vec<_>>(),
            vec![(0.0, 12.0), (24.0, 25.0), (33.0, 36.0), (48.0, 168.0)]
        );
    }

    #[test]
    fn test_complement_drops_degenerate_gap_at_touch_point() {
        let touching = set(0.0, 2.0).union(&set(2.0, 4.0));
        assert_eq!(
            touching.complement().intervals().collect::<Vec<_>>(),
            vec![(4.0, 168.0)]
        );
    }

    #[test]
    fn test_subtract_disjoint_is_identity() {
        assert_eq!(set(12.0, 24.0).subtract(&set(36.0, 48.0)), set(12.0, 24.0));
    }

    #[test]
    fn test_subtract_containing_set_is_empty() {
        let pair = set(12.0, 24.0).union(&set(36.0, 48.0));
        assert!(pair.subtract(&set(7.5, 69.0)).is_empty());
    }

    #[test]
    fn test_subtract_removes_one_of_union() {
        let pair = set(25.0, 33.0).union(&set(36.0, 48.0));
        assert_eq!(pair.subtract(&set(36.0, 48.0)), set(25.0, 33.0));
    }

    #[test]
    fn test_subtract_overlapping_depends_on_operand_order() {
        assert_eq!(set(20.0, 40.0).subtract(&set(12.0, 24.0)), set(24.0, 40.0));
        assert_eq!(set(12.0, 24.0).subtract(&set(20.0, 40.0)), set(12.0, 20.0));
    }

    #[test]
    fn test_algebra_laws() {
        let a = set(4.0, 30.0).union(&set(50.0, 60.0));
        let b = set(10.0, 55.0);

        assert!(a.subtract(&a).is_empty());
        // The union with the complement covers the whole week. The touch
        // points keep the intervals distinct, so compare coverage through
        // the complement rather than interval-for-interval.
        assert!(a.union(&a.complement()).complement().is_empty());
        assert!(a.intersect(&a.complement()).is_empty());
        assert!(a.subtract(&b).intersect(&b).is_empty());
        // Pairwise chaining agrees with the n-ary sweep.
        let c = set(20.0, 52.0);
        assert_eq!(a.intersect(&b).intersect(&c), a.intersect_all(&[b, c]));
    }

    #[test]
    fn test_windows_of_basic() {
        let windows = set(12.5, 14.0).windows_of(0.5, 0.25).unwrap();
        assert_eq!(windows.len(), 5);
        assert!(windows.contains(&set(12.5, 13.0)));
        assert!(windows.contains(&set(12.75, 13.25)));
        assert!(windows.contains(&set(13.0, 13.5)));
        assert!(windows.contains(&set(13.25, 13.75)));
        assert!(windows.contains(&set(13.5, 14.0)));
    }

    #[test]
    fn test_windows_of_two_disjoint_intervals() {
        let windows = set(12.5, 14.0)
            .union(&set(36.0, 38.0))
            .windows_of(1.0, 0.5)
            .unwrap();
        assert_eq!(windows.len(), 5);
        assert!(windows.contains(&set(12.5, 13.5)));
        assert!(windows.contains(&set(13.0, 14.0)));
        assert!(windows.contains(&set(36.0, 37.0)));
        assert!(windows.contains(&set(36.5, 37.5)));
        assert!(windows.contains(&set(37.0, 38.0)));
    }

    #[test]
    fn test_windows_of_nothing_fits() {
        let windows = set(25.0, 33.0)
            .union(&set(12.5, 14.0))
            .windows_of(10.0, 0.01)
            .unwrap();
        assert!(windows.is_empty());
    }

    #[test]
    fn test_windows_of_unaligned_tail() {
        // 0.7-hour windows in [12.5, 14.0) and [36.0, 38.0): the tails
        // shorter than a full window are not enumerated.
        let windows = set(12.5, 14.0)
            .union(&set(36.0, 38.0))
            .windows_of(0.7, 0.7)
            .unwrap();
        assert_eq!(windows.len(), 4);
        assert!(windows.contains(&set(12.5, 12.5 + 0.7)));
        assert!(windows.contains(&set(12.5 + 0.7, 12.5 + 0.7 + 0.7)));
        assert!(windows.contains(&set(36.0, 36.0 + 0.7)));
        assert!(windows.contains(&set(36.0 + 0.7, 36.0 + 0.7 + 0.7)));
    }

    #[test]
    fn test_windows_have_exact_duration_and_aligned_starts() {
        let source = set(3.25, 9.0).union(&set(40.0, 41.5));
        let windows = source.windows_of(1.5, 0.25).unwrap();
        assert!(!windows.is_empty());
        for w in &windows {
            let (start, end) = w.intervals().next().unwrap();
            assert!((end - start - 1.5).abs() < 1e-9);
            // Start is an integer number of chunks from some interval start.
            let aligned = source.intervals().any(|(s, _)| {
                let steps = (start - s) / 0.25;
                start >= s && (steps - steps.round()).abs() < 1e-9
            });
            assert!(aligned, "window start {start} is not chunk-aligned");
        }
    }

    #[test]
    fn test_windows_of_rejects_bad_arguments() {
        let t = set(12.5, 14.0);
        assert_eq!(t.windows_of(1.0, 0.0), Err(TimeError::NonPositiveDuration));
        assert_eq!(t.windows_of(0.0, 1.0), Err(TimeError::NonPositiveDuration));
        assert_eq!(
            t.windows_of(1.0, 0.9),
            Err(TimeError::IndivisibleDuration {
                duration: 1.0,
                chunk_size: 0.9
            })
        );
    }

    #[test]
    fn test_equality_is_order_independent() {
        let t1 = set(0.0, 3.14);
        let t3 = set(1.0, 4.14);
        let t4 = set(5.0, 6.0);
        assert_eq!(set(0.0, 3.14), set(0.0, 3.14));
        assert_eq!(t1.union(&t3), t3.union(&t1));
        assert_ne!(t1, t3);
        assert_ne!(t3, t4);
        assert_eq!(t1.union(&set(0.0, 3.14)), t1);
        assert_eq!(t1.union(&t1).union(&t4), t1.union(&t4));
        // Empty sets compare equal regardless of origin.
        assert_eq!(t1.intersect(&t4), set(0.0, 3.14).intersect(&t4));
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(t: &TimeSet) -> u64 {
            let mut h = DefaultHasher::new();
            t.hash(&mut h);
            h.finish()
        }

        let t1 = set(0.0, 3.14);
        let t3 = set(1.0, 4.14);
        assert_eq!(hash_of(&t1.union(&t3)), hash_of(&t3.union(&t1)));
        assert_eq!(hash_of(&t1), hash_of(&set(0.0, 3.14)));
    }

    #[test]
    fn test_add_days() {
        let t = set(1.0, 7.0);
        assert_eq!(t.add_days(1).unwrap(), set(25.0, 31.0));
        assert_eq!(t.add_days(0).unwrap(), t);
        assert_eq!(
            t.add_days(2).unwrap().add_days(-1).unwrap().add_days(-1).unwrap(),
            t
        );
    }

    #[test]
    fn test_add_days_out_of_universe() {
        let late = set(150.0, 160.0);
        assert_eq!(
            late.add_days(1),
            Err(TimeError::ShiftOutOfUniverse { days: 1 })
        );
        let early = set(1.0, 7.0);
        assert_eq!(
            early.add_days(-1),
            Err(TimeError::ShiftOutOfUniverse { days: -1 })
        );
    }

    #[test]
    fn test_add_days_inverse_on_multi_interval_set() {
        let t = set(1.0, 7.0).union(&set(30.0, 33.5));
        assert_eq!(t.add_days(3).unwrap().add_days(-3).unwrap(), t);
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(set(0.5, 3.0).weekday_index(), Some(0));
        assert_eq!(set(25.0, 31.0).weekday_index(), Some(1));
        assert_eq!(set(167.0, 168.0).weekday_index(), Some(6));
    }

    #[test]
    fn test_contains() {
        let outer = set(10.0, 20.0).union(&set(30.0, 40.0));
        assert!(outer.contains(&set(12.0, 15.0)));
        assert!(outer.contains(&outer));
        assert!(outer.contains(&TimeSet::empty()));
        assert!(!outer.contains(&set(19.0, 31.0)));
    }

    #[test]
    fn test_display() {
        let t = set(12.0, 24.0).union(&set(36.0, 48.0));
        assert_eq!(t.to_string(), "[12, 24), [36, 48)");
        assert_eq!(TimeSet::empty().to_string(), "(empty)");
    }
}
