/*!
Sorts.

Two sort universes coexist (§3 of the design this core follows):
- *Source sorts* come directly from the input signature.
- *Distinct sorts* are the equivalence classes produced by (external) sort
  inference; every source sort maps to exactly one distinct parent.
*/

use crate::types::{DistinctSortId, DomainValue, SourceSort};

/// An optional upper bound on a source sort's interpretation, supplied by
/// sort inference (e.g. from EPR reasoning over the clauses using that sort).
pub type SortBound = Option<DomainValue>;

/// A distinct sort: the unit a size vector is actually indexed by.
///
/// `min`/`max` come from clique analysis / bounds propagation on the input;
/// `current` is the candidate size used by the active epoch.
#[derive(Clone, Debug)]
pub struct DistinctSort {
    /// The lower bound on any model's interpretation of this sort.
    pub min: DomainValue,

    /// The upper bound, or `None` for unbounded.
    pub max: Option<DomainValue>,

    /// The size used in the current epoch. Always within `[min, max]`.
    pub current: DomainValue,

    /// A monotonic sort's interpretation may be enlarged without ever
    /// invalidating a previously found model (§8, "Monotonicity safety").
    pub monotonic: bool,
}

impl DistinctSort {
    /// A fresh distinct sort, per design note (ii): a sort with no lower
    /// bound evidence (no constants, zero-size EPR sort) is treated as
    /// `min = max = 1`, never as `min = 0`.
    pub fn new(min: DomainValue, max: Option<DomainValue>, start: DomainValue, monotonic: bool) -> Self {
        let min = min.max(1);
        let current = start.max(min);
        DistinctSort {
            min,
            max,
            current,
            monotonic,
        }
    }

    /// Whether `size` is a legal candidate size for this sort.
    pub fn admits(&self, size: DomainValue) -> bool {
        size >= self.min && self.max.map_or(true, |max| size <= max)
    }

    /// Whether this sort may grow beyond its current size.
    pub fn can_grow(&self) -> bool {
        self.max.map_or(true, |max| self.current < max)
    }
}

/// A many-sorted signature's view of sorts: the per-source-sort bound and
/// parent, plus the per-distinct-sort bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct SortTable {
    /// `parents[s]` is the distinct sort `s` belongs to.
    pub parents: Vec<DistinctSortId>,

    /// `sort_bounds[s]` is the optional upper bound from sort inference.
    pub sort_bounds: Vec<SortBound>,

    /// The distinct sorts themselves, indexed by [DistinctSortId].
    pub distinct: Vec<DistinctSort>,

    /// `a ≥ b` (or `a > b`) constraints between distinct sorts, propagated
    /// to fixpoint by the enumerator. Non-strict and strict stacks are kept
    /// separate per design note (i): both are applied to fixpoint,
    /// independently.
    pub non_strict_constraints: Vec<(DistinctSortId, DistinctSortId)>,

    /// `a > b` constraints between distinct sorts.
    pub strict_constraints: Vec<(DistinctSortId, DistinctSortId)>,
}

impl SortTable {
    /// The current size of a source sort, via its distinct parent.
    pub fn source_size(&self, source: SourceSort) -> DomainValue {
        self.distinct[self.parents[source as usize] as usize].current
    }

    /// The effective per-variable grounding bound for a source sort: the
    /// smaller of the current domain size and any sort-inference bound
    /// (§4.2, "The per-variable upper bound for grounding").
    pub fn grounding_bound(&self, source: SourceSort) -> DomainValue {
        let size = self.source_size(source);
        match self.sort_bounds[source as usize] {
            Some(bound) => size.min(bound),
            None => size,
        }
    }

    /// Closes the non-strict and strict distinct-sort constraints to
    /// fixpoint, growing `current` sizes as required. Applied by the
    /// enumerator after every increment (§4.6).
    pub fn close_constraints_to_fixpoint(&mut self) {
        loop {
            let mut changed = false;

            for &(a, b) in &self.non_strict_constraints {
                let bound = self.distinct[b as usize].current;
                let slot = &mut self.distinct[a as usize];
                let target = bound.min(slot.max.unwrap_or(DomainValue::MAX));
                if slot.current < target {
                    slot.current = target;
                    changed = true;
                }
            }

            for &(a, b) in &self.strict_constraints {
                let bound = self.distinct[b as usize].current.saturating_add(1);
                let slot = &mut self.distinct[a as usize];
                let target = bound.min(slot.max.unwrap_or(DomainValue::MAX));
                if slot.current < target {
                    slot.current = target;
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }
    }
}
