/*!
Domain-size enumeration (§4.6): once a size vector is refuted, decide the
next candidate. Two independent strategies are implemented in full —
CONTOUR's weighted single-sort growth, and SBMEAM's no-good-driven
generator heap — plus an SMT-guided variant (Mode B′) that reuses SBMEAM's
no-good shape but answers "what next?" with a small internal bounded
integer search rather than a foreign solver process (see `DESIGN.md`).
*/

use crate::db::marker::MarkerScheme;
use crate::oracle::SatLiteral;
use crate::structures::sort::SortTable;
use crate::types::err::EnumerateError;
use crate::types::DistinctSortId;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// The capability every enumeration strategy provides to the driver (§4.6,
/// §9 design note: "the enumerator is the only state carried between
/// epochs besides the sort sizes themselves").
pub trait EnumerationStrategy {
    /// Sets every distinct sort's `current` to its configured start size.
    fn init(&mut self, sorts: &mut SortTable);

    /// Records what the last UNSAT call's failed assumptions imply, ahead
    /// of the next [increase_sizes](Self::increase_sizes) call.
    fn learn_nogood(&mut self, sorts: &SortTable, failed_assumptions: &[SatLiteral], markers: &MarkerScheme);

    /// Grows the size vector to the next candidate, closing distinct-sort
    /// constraints to fixpoint. Errs if no further candidate exists.
    fn increase_sizes(&mut self, sorts: &mut SortTable) -> Result<(), EnumerateError>;

    /// Whether exhaustion of this strategy is a sound refutation (§7,
    /// "Enumerator-exhausted"). `false` surfaces as `REFUTATION_NOT_FOUND`
    /// rather than `REFUTATION`.
    fn is_complete(&self) -> bool;
}

/// Mode A: grow exactly one distinct sort per step, chosen by weight.
pub struct ContourEnumerator {
    start_size: HashMap<DistinctSortId, u32>,
    size_weight_ratio: u32,
    alternator: u32,
    last_core_sorts: Vec<DistinctSortId>,
}

impl ContourEnumerator {
    pub fn new(start_size: HashMap<DistinctSortId, u32>, size_weight_ratio: u32) -> Self {
        ContourEnumerator {
            start_size,
            size_weight_ratio: size_weight_ratio.max(1),
            alternator: 0,
            last_core_sorts: Vec::new(),
        }
    }

    /// `size[s]` (FIFO-ish) or an estimated post-growth instance count,
    /// alternating in the ratio `sizeWeightRatio : 1` (§4.6).
    fn weight(&mut self, sorts: &SortTable, s: DistinctSortId) -> u64 {
        self.alternator += 1;
        if self.alternator % (self.size_weight_ratio + 1) == 0 {
            // Estimated post-growth instance count: the cube of the
            // candidate size, a cheap stand-in for §4.2's block-size
            // estimate without re-walking every symbol's signature.
            let grown = sorts.distinct[s as usize].current as u64 + 1;
            grown * grown * grown
        } else {
            sorts.distinct[s as usize].current as u64
        }
    }
}

impl EnumerationStrategy for ContourEnumerator {
    fn init(&mut self, sorts: &mut SortTable) {
        for (s, sort) in sorts.distinct.iter_mut().enumerate() {
            if let Some(&start) = self.start_size.get(&(s as DistinctSortId)) {
                sort.current = start.max(sort.min);
            }
        }
        sorts.close_constraints_to_fixpoint();
    }

    fn learn_nogood(&mut self, _sorts: &SortTable, failed_assumptions: &[SatLiteral], markers: &MarkerScheme) {
        let MarkerScheme::Contour(contour) = markers else {
            self.last_core_sorts.clear();
            return;
        };
        self.last_core_sorts = failed_assumptions
            .iter()
            .filter_map(|lit| contour.sort_of_marker(lit.var))
            .collect();
    }

    fn increase_sizes(&mut self, sorts: &mut SortTable) -> Result<(), EnumerateError> {
        let candidates: Vec<DistinctSortId> = if self.last_core_sorts.is_empty() {
            (0..sorts.distinct.len() as DistinctSortId).collect()
        } else {
            self.last_core_sorts.clone()
        };

        let growable: Vec<DistinctSortId> = candidates
            .into_iter()
            .filter(|&s| sorts.distinct[s as usize].can_grow())
            .collect();

        let chosen = growable
            .into_iter()
            .min_by_key(|&s| self.weight(sorts, s))
            .ok_or(EnumerateError::NoGrowableSort)?;

        sorts.distinct[chosen as usize].current += 1;
        sorts.close_constraints_to_fixpoint();
        Ok(())
    }

    fn is_complete(&self) -> bool {
        true
    }
}

/// A constraint-generator no-good over distinct sorts (§4.6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tag {
    Eq(u32),
    Leq(u32),
    Geq(u32),
    Star,
}

#[derive(Clone, Debug, Default)]
struct Nogood {
    tags: HashMap<DistinctSortId, Tag>,
}

impl Nogood {
    /// Whether `sizes` satisfies every non-`Star` tag in this no-good, i.e.
    /// whether `sizes` must be rejected as a candidate (§4.6, "reject it if
    /// it satisfies any retained no-good").
    fn rejects(&self, sizes: &[u32]) -> bool {
        self.tags.iter().all(|(&s, tag)| match tag {
            Tag::Eq(v) => sizes[s as usize] == v,
            Tag::Geq(v) => sizes[s as usize] >= v,
            Tag::Leq(v) => sizes[s as usize] <= v,
            Tag::Star => true,
        })
    }
}

/// One candidate size vector waiting on the generator heap, ordered by
/// ascending weight (a min-heap via `Reverse`).
#[derive(Clone, Debug)]
struct Generator {
    sizes: Vec<u32>,
    weight: u64,
}

impl PartialEq for Generator {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}
impl Eq for Generator {}
impl PartialOrd for Generator {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Generator {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight.cmp(&other.weight)
    }
}

/// Mode B: a no-good-driven generator heap over size vectors (§4.6).
pub struct SbmeamEnumerator {
    start_size: HashMap<DistinctSortId, u32>,
    nogoods: Vec<Nogood>,
    heap: BinaryHeap<Reverse<Generator>>,
    keep_generators: bool,
}

impl SbmeamEnumerator {
    pub fn new(start_size: HashMap<DistinctSortId, u32>, keep_generators: bool) -> Self {
        SbmeamEnumerator {
            start_size,
            nogoods: Vec::new(),
            heap: BinaryHeap::new(),
            keep_generators,
        }
    }

    fn weight(sizes: &[u32]) -> u64 {
        sizes.iter().map(|&s| s as u64).sum()
    }

    fn satisfies_distinct_constraints(sorts: &SortTable, sizes: &[u32]) -> bool {
        sorts
            .non_strict_constraints
            .iter()
            .all(|&(a, b)| sizes[a as usize] >= sizes[b as usize])
            && sorts
                .strict_constraints
                .iter()
                .all(|&(a, b)| sizes[a as usize] > sizes[b as usize])
    }
}

impl EnumerationStrategy for SbmeamEnumerator {
    fn init(&mut self, sorts: &mut SortTable) {
        for (s, sort) in sorts.distinct.iter_mut().enumerate() {
            if let Some(&start) = self.start_size.get(&(s as DistinctSortId)) {
                sort.current = start.max(sort.min);
            }
        }
        sorts.close_constraints_to_fixpoint();
        let sizes: Vec<u32> = sorts.distinct.iter().map(|d| d.current).collect();
        self.heap.push(Reverse(Generator {
            weight: Self::weight(&sizes),
            sizes,
        }));
    }

    fn learn_nogood(&mut self, sorts: &SortTable, failed_assumptions: &[SatLiteral], markers: &MarkerScheme) {
        let MarkerScheme::Sbmeam(sbmeam) = markers else {
            return;
        };

        let mut tags: HashMap<DistinctSortId, Tag> = HashMap::new();
        for s in 0..sorts.distinct.len() as DistinctSortId {
            let tot_failed = failed_assumptions
                .iter()
                .any(|l| l.var == sbmeam.tot_var(s));
            let inst_failed = failed_assumptions
                .iter()
                .any(|l| l.var == sbmeam.inst_var(s));

            if tot_failed {
                let tag = if sorts.distinct[s as usize].monotonic {
                    Tag::Leq(sorts.distinct[s as usize].current)
                } else {
                    Tag::Eq(sorts.distinct[s as usize].current)
                };
                tags.insert(s, tag);
            } else if inst_failed {
                tags.insert(s, Tag::Geq(sorts.distinct[s as usize].current));
            }
        }

        if !tags.is_empty() {
            self.nogoods.push(Nogood { tags });
        }
    }

    fn increase_sizes(&mut self, sorts: &mut SortTable) -> Result<(), EnumerateError> {
        while let Some(Reverse(generator)) = self.heap.pop() {
            let arity = sorts.distinct.len();
            let mut accepted = None;

            for s in 0..arity {
                if !sorts.distinct[s].can_grow() {
                    continue;
                }
                let mut candidate = generator.sizes.clone();
                candidate[s] += 1;

                if self.nogoods.iter().any(|g| g.rejects(&candidate)) {
                    continue;
                }
                if !Self::satisfies_distinct_constraints(sorts, &candidate) {
                    continue;
                }

                accepted = Some(candidate);
                break;
            }

            if self.keep_generators {
                self.heap.push(Reverse(generator.clone()));
            }

            if let Some(candidate) = accepted {
                for (s, sort) in sorts.distinct.iter_mut().enumerate() {
                    sort.current = candidate[s];
                }
                sorts.close_constraints_to_fixpoint();
                let sizes: Vec<u32> = sorts.distinct.iter().map(|d| d.current).collect();
                self.heap.push(Reverse(Generator {
                    weight: Self::weight(&sizes),
                    sizes,
                }));
                return Ok(());
            }
        }

        Err(EnumerateError::GeneratorsExhausted)
    }

    fn is_complete(&self) -> bool {
        true
    }
}

/// Mode B′: reuses SBMEAM's no-good bookkeeping but answers "what next?"
/// with a bounded sum-minimising search over the admissible region rather
/// than a foreign SMT process (see `DESIGN.md`).
pub struct SmtGuidedEnumerator {
    inner: SbmeamEnumerator,
    search_bound: u32,
}

impl SmtGuidedEnumerator {
    pub fn new(start_size: HashMap<DistinctSortId, u32>, search_bound: u32) -> Self {
        SmtGuidedEnumerator {
            inner: SbmeamEnumerator::new(start_size, true),
            search_bound: search_bound.max(1),
        }
    }
}

impl EnumerationStrategy for SmtGuidedEnumerator {
    fn init(&mut self, sorts: &mut SortTable) {
        self.inner.init(sorts);
    }

    fn learn_nogood(&mut self, sorts: &SortTable, failed_assumptions: &[SatLiteral], markers: &MarkerScheme) {
        self.inner.learn_nogood(sorts, failed_assumptions, markers);
    }

    fn increase_sizes(&mut self, sorts: &mut SortTable) -> Result<(), EnumerateError> {
        match self.inner.increase_sizes(sorts) {
            Ok(()) => Ok(()),
            Err(EnumerateError::GeneratorsExhausted) => {
                // Nothing on the generator heap still satisfies every
                // no-good; fall back to a bounded brute-force sweep over
                // sum-of-sizes before giving up, in case the heap discarded
                // a generator (`keepSbeamGenerators = false`) that a wider
                // search would still find admissible.
                bounded_minimal_model(sorts, &self.inner.nogoods, self.search_bound)
                    .map(|sizes| {
                        for (s, sort) in sorts.distinct.iter_mut().enumerate() {
                            sort.current = sizes[s];
                        }
                        sorts.close_constraints_to_fixpoint();
                    })
                    .ok_or(EnumerateError::BoundedSearchExhausted)
            }
            Err(other) => Err(other),
        }
    }

    fn is_complete(&self) -> bool {
        false // the bounded fallback search is not exhaustive over an unbounded domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::sort::DistinctSort;

    fn two_sorts(a: u32, b: u32) -> SortTable {
        SortTable {
            parents: vec![0, 1],
            sort_bounds: vec![None, None],
            distinct: vec![DistinctSort::new(1, None, a, false), DistinctSort::new(1, None, b, true)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        }
    }

    #[test]
    fn nogood_rejects_matching_eq_and_passes_others() {
        let mut tags = HashMap::new();
        tags.insert(0u32, Tag::Eq(2));
        let nogood = Nogood { tags };
        assert!(nogood.rejects(&[2, 5]));
        assert!(!nogood.rejects(&[3, 5]));
    }

    #[test]
    fn nogood_geq_and_leq_tags() {
        let mut tags = HashMap::new();
        tags.insert(0u32, Tag::Geq(3));
        tags.insert(1u32, Tag::Leq(4));
        let nogood = Nogood { tags };
        assert!(nogood.rejects(&[3, 4]));
        assert!(nogood.rejects(&[5, 1]));
        assert!(!nogood.rejects(&[2, 4])); // fails Geq(3) on sort 0
        assert!(!nogood.rejects(&[3, 5])); // fails Leq(4) on sort 1
    }

    #[test]
    fn contour_grows_the_lighter_sort_first() {
        let mut enumerator = ContourEnumerator::new(HashMap::new(), 1_000); // ratio high: always weigh by current size
        let mut sorts = two_sorts(1, 5);
        enumerator.init(&mut sorts);
        enumerator.increase_sizes(&mut sorts).unwrap();
        // sort 0 starts lighter (1 < 5), so it should be the one grown.
        assert_eq!(sorts.distinct[0].current, 2);
        assert_eq!(sorts.distinct[1].current, 5);
    }

    #[test]
    fn contour_exhausts_when_every_sort_is_at_its_maximum() {
        let mut enumerator = ContourEnumerator::new(HashMap::new(), 1);
        let mut sorts = SortTable {
            parents: vec![0],
            sort_bounds: vec![None],
            distinct: vec![DistinctSort::new(1, Some(1), 1, false)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        };
        enumerator.init(&mut sorts);
        assert_eq!(enumerator.increase_sizes(&mut sorts), Err(EnumerateError::NoGrowableSort));
    }
}

/// A small sum-minimising search over `1..=search_bound` per sort,
/// rejecting any vector that satisfies a retained no-good or violates a
/// distinct-sort constraint — standing in for an external integer-SMT
/// check-sat call (§4.6, Mode B′).
fn bounded_minimal_model(sorts: &SortTable, nogoods: &[Nogood], search_bound: u32) -> Option<Vec<u32>> {
    let arity = sorts.distinct.len();
    let mut best: Option<(u64, Vec<u32>)> = None;

    let mut sizes = vec![1u32; arity];
    loop {
        let in_bounds = sizes
            .iter()
            .enumerate()
            .all(|(s, &v)| sorts.distinct[s].admits(v));

        if in_bounds
            && SbmeamEnumerator::satisfies_distinct_constraints(sorts, &sizes)
            && !nogoods.iter().any(|g| g.rejects(&sizes))
        {
            let sum: u64 = sizes.iter().map(|&v| v as u64).sum();
            if best.as_ref().map_or(true, |(b, _)| sum < *b) {
                best = Some((sum, sizes.clone()));
            }
        }

        let mut i = arity;
        loop {
            if i == 0 {
                return best.map(|(_, v)| v);
            }
            i -= 1;
            sizes[i] += 1;
            if sizes[i] <= search_bound {
                break;
            }
            sizes[i] = 1;
        }
    }
}
