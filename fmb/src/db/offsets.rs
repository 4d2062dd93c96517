/*!
The variable layout (§4.1, `reset`).

Rebuilt from scratch whenever any distinct sort's current size changes: one
contiguous block of SAT variables per non-deleted function, one per
non-deleted predicate, and the marker region(s) of
[marker](crate::db::marker). Every block is bounds-checked for
multiplicative overflow *before* any atom is requested from the SAT
backend, and the backend's own atom-exhaustion error is treated as the
second half of the same check (§3, "Total ids must fit...").
*/

use crate::db::problem::SortedSignature;
use crate::oracle::SatOracle;
use crate::structures::term::GroundedTerm;
use crate::types::err::EncodeError;
use crate::types::{DomainValue, FunctionId, PredicateId};
use std::collections::HashMap;

/// The SAT variable (atom) allocated to a grounding.
pub type VarId = u32;

/// Offsets and sizes for one function or predicate's block, sufficient to
/// compute [OffsetTable::function_var]/[OffsetTable::predicate_var] without
/// revisiting the signature.
#[derive(Clone, Debug)]
struct BlockLayout {
    /// First SAT variable of the block.
    base: VarId,

    /// Sizes of each argument slot (and, for functions, the result slot as
    /// the last entry), used for the mixed-radix index.
    slot_sizes: Vec<DomainValue>,
}

impl BlockLayout {
    /// The 0-based mixed-radix index of `values` within this block.
    fn index(&self, values: &[DomainValue]) -> u64 {
        let mut index: u64 = 0;
        let mut multiplier: u64 = 1;
        for (value, size) in values.iter().zip(self.slot_sizes.iter()) {
            index += (*value as u64 - 1) * multiplier;
            multiplier *= *size as u64;
        }
        index
    }

    fn len(&self) -> u64 {
        self.slot_sizes.iter().map(|s| *s as u64).product()
    }
}

/// The rebuilt-per-epoch mapping from (symbol, grounding) to SAT variable,
/// plus the symmetry-ordering lists used by [axioms](crate::procedures::axioms).
#[derive(Default)]
pub struct OffsetTable {
    function_blocks: HashMap<FunctionId, BlockLayout>,
    predicate_blocks: HashMap<PredicateId, BlockLayout>,

    /// The highest SAT variable allocated before the marker region.
    pub symbol_var_max: VarId,

    /// Per-sort ordered [GroundedTerm] lists used by symmetry breaking.
    /// Always the full, untruncated ordering over the sort's current size —
    /// restricted totality indexes the newest term from this list regardless
    /// of `symmetryRatio` (§4.4).
    pub symmetry_orderings: HashMap<crate::types::SourceSort, Vec<GroundedTerm>>,

    /// Per-sort canonicity width `w = min(ceil(symmetryRatio * maxSize), |T|)`
    /// (§4.4): the prefix of `symmetry_orderings[sort]` that canonicity
    /// clauses range over.
    pub symmetry_canonicity_width: HashMap<crate::types::SourceSort, usize>,
}

/// Checked multiplication used while sizing blocks: mirrors §4.1 step 2's
/// `n_add < add` overflow test.
fn checked_block_size(slot_sizes: &[DomainValue]) -> Result<u64, EncodeError> {
    let mut total: u64 = 1;
    for &size in slot_sizes {
        total = total
            .checked_mul(size as u64)
            .ok_or(EncodeError::Overflow)?;
    }
    Ok(total)
}

impl OffsetTable {
    /// Rebuilds the offset table for the current sort sizes, allocating
    /// fresh SAT variables from `oracle` for every non-deleted symbol's
    /// block, then one or more marker regions depending on
    /// `marker_region_len`. Returns `Overflow`/`AtomsExhausted` rather than
    /// panicking, per §7's "Cannot-encode" error kind.
    pub fn reset(
        signature: &SortedSignature,
        oracle: &mut dyn SatOracle,
        widget_order: crate::db::problem::WidgetOrder,
        symmetry_ratio: f64,
    ) -> Result<Self, EncodeError> {
        let mut table = OffsetTable::default();
        let mut next_var: u64 = 1;

        for (id, function) in signature.signature.live_functions() {
            let mut slot_sizes: Vec<DomainValue> = function
                .arg_sorts()
                .iter()
                .map(|&s| signature.sorts.source_size(s))
                .collect();
            slot_sizes.push(signature.sorts.source_size(function.result_sort()));

            let block_len = checked_block_size(&slot_sizes)?;
            let base = allocate_block(oracle, next_var, block_len)?;
            next_var = next_var.checked_add(block_len).ok_or(EncodeError::Overflow)?;

            table
                .function_blocks
                .insert(id, BlockLayout { base, slot_sizes });
        }

        for (id, predicate) in signature.signature.live_predicates() {
            let slot_sizes: Vec<DomainValue> = predicate
                .arg_sorts()
                .iter()
                .map(|&s| signature.sorts.source_size(s))
                .collect();

            let block_len = checked_block_size(&slot_sizes)?;
            let base = allocate_block(oracle, next_var, block_len)?;
            next_var = next_var.checked_add(block_len).ok_or(EncodeError::Overflow)?;

            table
                .predicate_blocks
                .insert(id, BlockLayout { base, slot_sizes });
        }

        table.symbol_var_max = (next_var - 1) as VarId;

        for source in 0..signature.sorts.parents.len() as u32 {
            let size = signature.sorts.source_size(source) as usize;
            let ordering = signature.symmetry_ordering(source, widget_order, size.max(1));

            let width = ((symmetry_ratio * size as f64).ceil() as usize)
                .min(ordering.len())
                .max(if ordering.is_empty() { 0 } else { 1 });
            table.symmetry_canonicity_width.insert(source, width);
            table.symmetry_orderings.insert(source, ordering);
        }

        Ok(table)
    }

    /// `varId(f, ⟨a₁,…,aₙ,r⟩)`, the SAT variable for a function grounding (§3).
    pub fn function_var(&self, f: FunctionId, values: &[DomainValue]) -> VarId {
        let block = &self.function_blocks[&f];
        block.base + block.index(values) as VarId
    }

    /// `varId(p, ⟨a₁,…,aₙ⟩)`, the SAT variable for a predicate grounding (§3).
    pub fn predicate_var(&self, p: PredicateId, values: &[DomainValue]) -> VarId {
        let block = &self.predicate_blocks[&p];
        block.base + block.index(values) as VarId
    }

    pub fn function_block_len(&self, f: FunctionId) -> u64 {
        self.function_blocks[&f].len()
    }

    pub fn predicate_block_len(&self, p: PredicateId) -> u64 {
        self.predicate_blocks[&p].len()
    }

    pub fn has_function(&self, f: FunctionId) -> bool {
        self.function_blocks.contains_key(&f)
    }

    pub fn has_predicate(&self, p: PredicateId) -> bool {
        self.predicate_blocks.contains_key(&p)
    }
}

/// Requests `len` fresh atoms from `oracle`, one at a time (matching the
/// backend's own one-atom-at-a-time builder API), returning the id of the
/// first. `len == 0` is legal (an empty block, e.g. a nullary predicate on
/// an empty sort is never emitted in practice but is not itself an error).
fn allocate_block(oracle: &mut dyn SatOracle, expected_next: u64, len: u64) -> Result<VarId, EncodeError> {
    if len == 0 {
        return Ok(expected_next as VarId);
    }
    let mut base = None;
    for _ in 0..len {
        let atom = oracle.fresh_atom().map_err(|_| EncodeError::AtomsExhausted)?;
        if base.is_none() {
            base = Some(atom);
        }
    }
    Ok(base.unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::problem::{SortedSignature, WidgetOrder};
    use crate::oracle::OtterSatOracle;
    use crate::structures::signature::{FunctionSymbol, PredicateSymbol, Signature};
    use crate::structures::sort::{DistinctSort, SortTable};

    /// One distinct sort `sigma` of the given size, a binary function
    /// `f : sigma, sigma -> sigma` and a binary predicate `p : sigma, sigma`.
    fn two_symbol_signature(size: DomainValue) -> SortedSignature {
        let sorts = SortTable {
            parents: vec![0],
            sort_bounds: vec![None],
            distinct: vec![DistinctSort::new(1, None, size, false)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        };
        let mut signature = Signature::default();
        signature.functions.push(FunctionSymbol {
            name: "f".to_string(),
            arity: 2,
            signature: vec![0, 0, 0],
            deleted: false,
            usage_count: 0,
            definition: None,
        });
        signature.predicates.push(PredicateSymbol {
            name: "p".to_string(),
            arity: 2,
            signature: vec![0, 0],
            deleted: false,
            usage_count: 0,
            definition: None,
            partially_deleted: false,
            trivial: None,
        });
        SortedSignature {
            signature,
            sorts,
            var_eq_sorts: Default::default(),
            sorted_constants: Default::default(),
            sorted_functions: [(0, vec![0])].into_iter().collect(),
        }
    }

    #[test]
    fn checked_block_size_detects_overflow() {
        assert!(checked_block_size(&[3, 4, 5]).is_ok());
        assert!(checked_block_size(&[u32::MAX, u32::MAX, 4]).is_err());
    }

    #[test]
    fn reset_rejects_overflowing_sizes_before_allocating_atoms() {
        let signature = two_symbol_signature(u32::MAX);
        let mut oracle = OtterSatOracle::new();
        let result = OffsetTable::reset(&signature, &mut oracle, WidgetOrder::Diagonal, 1.0);
        assert!(matches!(result, Err(EncodeError::Overflow)));
    }

    #[test]
    fn function_and_predicate_vars_are_disjoint_and_dense() {
        let signature = two_symbol_signature(3);
        let mut oracle = OtterSatOracle::new();
        let offsets = OffsetTable::reset(&signature, &mut oracle, WidgetOrder::Diagonal, 1.0).unwrap();

        let mut seen = std::collections::HashSet::new();
        for x in 1..=3u32 {
            for y in 1..=3u32 {
                for r in 1..=3u32 {
                    let v = offsets.function_var(0, &[x, y, r]);
                    assert!(seen.insert(v), "duplicate var {v} for f({x},{y})={r}");
                }
                let v = offsets.predicate_var(0, &[x, y]);
                assert!(seen.insert(v), "duplicate var {v} for p({x},{y})");
            }
        }

        // 27 function groundings + 9 predicate groundings, packed with no gaps.
        assert_eq!(seen.len(), 36);
        assert_eq!(offsets.symbol_var_max, 36);
        let mut sorted: Vec<_> = seen.into_iter().collect();
        sorted.sort();
        assert_eq!(sorted, (1..=36).collect::<Vec<_>>());
    }
}
