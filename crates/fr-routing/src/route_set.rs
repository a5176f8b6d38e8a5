//! Route ranking and the `RouteSet` selection state.

use crate::RouteCandidate;

/// Rank candidates fastest-first.
///
/// Ascending by total duration, ties broken by ascending total distance,
/// remaining ties by original input order — `sort_by` is stable, which is
/// what keeps the presentation deterministic when a provider returns
/// equal-cost alternatives.
pub fn rank_routes(mut candidates: Vec<RouteCandidate>) -> Vec<RouteCandidate> {
    candidates.sort_by(|a, b| {
        a.total_secs
            .total_cmp(&b.total_secs)
            .then(a.total_meters.total_cmp(&b.total_meters))
    });
    candidates
}

/// Ranked alternatives for one (origin, destination) pair, with exactly one
/// **selected** member.
///
/// Construction ranks the candidates and selects the fastest.  Selection and
/// ranking must be applied to the set as a unit: selecting by index against a
/// set that has since been rebuilt is meaningless, which is why
/// [`select`](Self::select) treats out-of-bounds indices as a no-op instead
/// of panicking or clamping.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSet {
    candidates: Vec<RouteCandidate>,
    selected: usize,
}

impl RouteSet {
    /// Rank `candidates` and select the fastest (index 0).
    ///
    /// An empty candidate list produces an empty set with nothing selected —
    /// [`selected`](Self::selected) returns `None`.
    pub fn new(candidates: Vec<RouteCandidate>) -> Self {
        Self {
            candidates: rank_routes(candidates),
            selected: 0,
        }
    }

    /// Mark the candidate at `index` (rank order) as selected.
    ///
    /// Returns `true` if the selection changed state; an out-of-bounds index
    /// leaves the previous selection untouched and returns `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.candidates.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// The currently selected candidate, or `None` for an empty set.
    pub fn selected(&self) -> Option<&RouteCandidate> {
        self.candidates.get(self.selected)
    }

    /// Rank index of the selected candidate (0 = fastest).
    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The fastest candidate, or `None` for an empty set.
    pub fn fastest(&self) -> Option<&RouteCandidate> {
        self.candidates.first()
    }

    /// Ranked candidates, fastest first.
    #[inline]
    pub fn candidates(&self) -> &[RouteCandidate] {
        &self.candidates
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
