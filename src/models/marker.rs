//! Interval endpoint markers for the sweep-line algebra.
//!
//! A [`TimeSet`](super::TimeSet) stores each interval as a pair of markers,
//! one per endpoint. Every marker carries its own position *and* its
//! partner's, so a sweep over a flat, sorted marker list can always tell
//! which interval a marker closes without chasing references.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Which endpoint of an interval a marker denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    /// Opens an interval.
    Start,
    /// Closes an interval.
    End,
}

/// An endpoint of a time interval.
///
/// Times are hours within the weekly universe `[0, 168]`. Markers are
/// immutable values; two markers are equal iff they have the same kind,
/// position, and partner position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeMarker {
    kind: MarkerKind,
    time: f64,
    counterpart: f64,
}

impl TimeMarker {
    /// Start marker of the interval `[start, end)`.
    ///
    /// Callers guarantee `start != end` and both non-negative; public
    /// validation happens in [`TimeSet::interval`](super::TimeSet::interval).
    pub(crate) fn start(start: f64, end: f64) -> Self {
        debug_assert!(start >= 0.0 && end >= 0.0);
        debug_assert!(start != end);
        Self {
            kind: MarkerKind::Start,
            time: start,
            counterpart: end,
        }
    }

    /// End marker of the interval `[start, end)`.
    pub(crate) fn end(start: f64, end: f64) -> Self {
        debug_assert!(start >= 0.0 && end >= 0.0);
        debug_assert!(start != end);
        Self {
            kind: MarkerKind::End,
            time: end,
            counterpart: start,
        }
    }

    /// Marker kind.
    #[inline]
    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Whether this marker opens an interval.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.kind == MarkerKind::Start
    }

    /// Position of this marker (hours).
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Position of this marker's partner endpoint (hours).
    #[inline]
    pub fn counterpart(&self) -> f64 {
        self.counterpart
    }

    /// Sweep ordering: ascending time; at equal time an End marker orders
    /// before a Start marker, so touching intervals close before reopening.
    pub(crate) fn sweep_order(a: &TimeMarker, b: &TimeMarker) -> Ordering {
        a.time.total_cmp(&b.time).then_with(|| match (a.kind, b.kind) {
            (MarkerKind::End, MarkerKind::Start) => Ordering::Less,
            (MarkerKind::Start, MarkerKind::End) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }
}

impl PartialEq for TimeMarker {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.time == other.time
            && self.counterpart == other.counterpart
    }
}

// Marker times are always finite, so float equality is an equivalence.
impl Eq for TimeMarker {}

impl Hash for TimeMarker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.time.to_bits().hash(state);
        self.counterpart.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_accessors() {
        let s = TimeMarker::start(12.0, 24.0);
        assert!(s.is_start());
        assert_eq!(s.kind(), MarkerKind::Start);
        assert_eq!(s.time(), 12.0);
        assert_eq!(s.counterpart(), 24.0);

        let e = TimeMarker::end(12.0, 24.0);
        assert!(!e.is_start());
        assert_eq!(e.time(), 24.0);
        assert_eq!(e.counterpart(), 12.0);
    }

    #[test]
    fn test_marker_equality() {
        assert_eq!(TimeMarker::start(1.0, 2.0), TimeMarker::start(1.0, 2.0));
        assert_ne!(TimeMarker::start(1.0, 2.0), TimeMarker::end(1.0, 2.0));
        assert_ne!(TimeMarker::start(1.0, 2.0), TimeMarker::start(1.0, 3.0));
    }

    #[test]
    fn test_sweep_order_by_time() {
        let a = TimeMarker::start(1.0, 5.0);
        let b = TimeMarker::start(2.0, 3.0);
        assert_eq!(TimeMarker::sweep_order(&a, &b), Ordering::Less);
        assert_eq!(TimeMarker::sweep_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_sweep_order_end_before_start_at_tie() {
        let closing = TimeMarker::end(0.0, 2.0); // positioned at 2.0
        let opening = TimeMarker::start(2.0, 4.0); // also at 2.0
        assert_eq!(TimeMarker::sweep_order(&closing, &opening), Ordering::Less);
        assert_eq!(TimeMarker::sweep_order(&opening, &closing), Ordering::Greater);
    }

    #[test]
    fn test_sweep_order_same_kind_ties_equal() {
        let a = TimeMarker::start(2.0, 4.0);
        let b = TimeMarker::start(2.0, 6.0);
        assert_eq!(TimeMarker::sweep_order(&a, &b), Ordering::Equal);
    }
}
