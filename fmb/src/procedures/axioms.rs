/*!
Axiom emitters: functional-definition axioms (§4.3), totality (embedded in
§4.5's marker wiring), and symmetry breaking (§4.4).
*/

use crate::db::marker::MarkerScheme;
use crate::db::offsets::OffsetTable;
use crate::db::problem::SortedSignature;
use crate::oracle::SatLiteral;
use crate::procedures::odometer::Odometer;
use crate::structures::signature::FunctionSymbol;
use crate::types::{DomainValue, FunctionId};

/// Functional-definition axioms for every non-deleted function (§4.3):
/// for every argument tuple and every pair of distinct result values
/// `y < z`, `¬(f(x̄) = y) ∨ ¬(f(x̄) = z)`.
pub fn functional_definitions(
    signature: &SortedSignature,
    offsets: &OffsetTable,
) -> Vec<Vec<SatLiteral>> {
    let mut clauses = Vec::new();
    for (id, function) in signature.signature.live_functions() {
        emit_function_definitions(id, function, signature, offsets, &mut clauses);
    }
    log::trace!(
        target: crate::misc::log::targets::AXIOMS,
        "emitted {} functional-definition clauses",
        clauses.len()
    );
    clauses
}

fn emit_function_definitions(
    id: FunctionId,
    function: &FunctionSymbol,
    signature: &SortedSignature,
    offsets: &OffsetTable,
    clauses: &mut Vec<Vec<SatLiteral>>,
) {
    let arg_bounds: Vec<DomainValue> = function
        .arg_sorts()
        .iter()
        .map(|&s| signature.sorts.source_size(s))
        .collect();
    let result_size = signature.sorts.source_size(function.result_sort());

    if result_size < 2 {
        return; // a single result value cannot fail to be unique
    }

    let arity = arg_bounds.len() as u32;
    let arg_vars: Vec<u32> = (0..arity).collect();
    let odometer = Odometer::new(arg_vars, arg_bounds);

    for grounding in odometer {
        let args: Vec<DomainValue> = grounding.iter().map(|(_, v)| *v).collect();

        for y in 1..=result_size {
            for z in (y + 1)..=result_size {
                let mut tuple_y = args.clone();
                tuple_y.push(y);
                let mut tuple_z = args.clone();
                tuple_z.push(z);

                let var_y = offsets.function_var(id, &tuple_y);
                let var_z = offsets.function_var(id, &tuple_z);

                clauses.push(vec![
                    SatLiteral::new(var_y, false),
                    SatLiteral::new(var_z, false),
                ]);
            }
        }
    }
}

/// Totality axioms for every non-deleted function, marker-guarded per the
/// active [MarkerScheme] (§4.5): `(f(x̄) = 1) ∨ … ∨ (f(x̄) = i) ∨ guard` for
/// every candidate result cardinality `i`.
pub fn totality(
    signature: &SortedSignature,
    offsets: &OffsetTable,
    markers: &MarkerScheme,
) -> Vec<Vec<SatLiteral>> {
    let mut clauses = Vec::new();
    for (id, function) in signature.signature.live_functions() {
        emit_totality(id, function, signature, offsets, markers, &mut clauses);
    }
    log::trace!(target: crate::misc::log::targets::AXIOMS, "emitted {} totality clauses", clauses.len());
    clauses
}

fn emit_totality(
    id: FunctionId,
    function: &FunctionSymbol,
    signature: &SortedSignature,
    offsets: &OffsetTable,
    markers: &MarkerScheme,
    clauses: &mut Vec<Vec<SatLiteral>>,
) {
    let arg_bounds: Vec<DomainValue> = function
        .arg_sorts()
        .iter()
        .map(|&s| signature.sorts.source_size(s))
        .collect();
    let result_sort = function.result_sort();
    let result_distinct = signature.sorts.parents[result_sort as usize];
    let max_result = signature.sorts.source_size(result_sort);

    let arity = arg_bounds.len() as u32;
    let arg_vars: Vec<u32> = (0..arity).collect();
    let odometer = Odometer::new(arg_vars, arg_bounds);

    for grounding in odometer {
        let args: Vec<DomainValue> = grounding.iter().map(|(_, v)| *v).collect();

        for i in 1..=max_result {
            let mut literals: Vec<SatLiteral> = (1..=i)
                .map(|r| {
                    let mut tuple = args.clone();
                    tuple.push(r);
                    SatLiteral::new(offsets.function_var(id, &tuple), true)
                })
                .collect();

            match markers {
                MarkerScheme::Contour(m) => {
                    if !signature.sorts.distinct[result_distinct as usize].monotonic {
                        literals.push(m.totality_marker(result_distinct, i));
                    } else if i < max_result {
                        continue; // monotonic: only the full-size totality clause is needed
                    }
                }
                MarkerScheme::Sbmeam(m) => {
                    if i < max_result {
                        continue; // SBMEAM only guards the full-size totality clause
                    }
                    literals.push(m.totality_guard(result_distinct));
                }
            }

            clauses.push(literals);
        }
    }
}

/// Symmetry breaking (§4.4): restricted totality for the newest
/// [GroundedTerm](crate::structures::term::GroundedTerm) of a sort, plus
/// canonicity for its constants.
pub fn symmetry_breaking(signature: &SortedSignature, offsets: &OffsetTable) -> Vec<Vec<SatLiteral>> {
    let mut clauses = Vec::new();

    for (&source, ordering) in &offsets.symmetry_orderings {
        let distinct = signature.sorts.parents[source as usize];
        let n = signature.sorts.distinct[distinct as usize].current;

        if let Some(newest) = ordering.get((n as usize).saturating_sub(1)) {
            clauses.push(restricted_totality(newest, offsets, n));
        }

        let width = offsets
            .symmetry_canonicity_width
            .get(&source)
            .copied()
            .unwrap_or(ordering.len());
        clauses.extend(canonicity(&ordering[..width.min(ordering.len())], offsets, n));
    }

    log::trace!(
        target: crate::misc::log::targets::AXIOMS,
        "emitted {} symmetry-breaking clauses across {} sorts",
        clauses.len(),
        offsets.symmetry_orderings.len()
    );
    clauses
}

/// `(g = 1) ∨ (g = 2) ∨ … ∨ (g = n)` for the n-th GroundedTerm `g` (§4.4).
fn restricted_totality(
    term: &crate::structures::term::GroundedTerm,
    offsets: &OffsetTable,
    n: DomainValue,
) -> Vec<SatLiteral> {
    (1..=n)
        .map(|v| {
            let mut tuple = term.args.clone();
            tuple.push(v);
            SatLiteral::new(offsets.function_var(term.function, &tuple), true)
        })
        .collect()
}

/// Canonicity for constants: `¬(T[i] = n) ∨ (T[j] = n − 1)` for every
/// `j < i`, `i` ranging over `[1, w)` with
/// `w = min(symmetryRatio × maxSize, |T|)` (§4.4). The caller slices
/// `ordering` down to `w` before calling this — `restricted_totality` needs
/// the full, untruncated list, so the truncation can't happen earlier.
fn canonicity(
    ordering: &[crate::structures::term::GroundedTerm],
    offsets: &OffsetTable,
    n: DomainValue,
) -> Vec<Vec<SatLiteral>> {
    if n < 2 {
        return Vec::new();
    }

    let mut clauses = Vec::new();
    let w = ordering.len();

    for i in 1..w {
        let term_i = &ordering[i];
        if term_i.arity() != 0 {
            continue; // canonicity only applies to constants
        }
        let var_i_n = offsets.function_var(term_i.function, &[n]);

        for j in 0..i {
            let term_j = &ordering[j];
            if term_j.arity() != 0 {
                continue;
            }
            let var_j_pred = offsets.function_var(term_j.function, &[n - 1]);
            clauses.push(vec![
                SatLiteral::new(var_i_n, false),
                SatLiteral::new(var_j_pred, true),
            ]);
        }
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::marker::MarkerMode;
    use crate::oracle::OtterSatOracle;
    use crate::structures::signature::Signature;
    use crate::structures::sort::{DistinctSort, SortTable};

    /// A unary function `f : sigma -> sigma` over a 3-element sort, no
    /// predicates, used to exercise functional-definition/totality counts.
    fn unary_function_signature(size: DomainValue) -> SortedSignature {
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
            arity: 1,
            signature: vec![0, 0],
            deleted: false,
            usage_count: 0,
            definition: None,
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
    fn functional_definitions_count_matches_binomial_pairs() {
        let signature = unary_function_signature(3);
        let mut oracle = OtterSatOracle::new();
        let offsets = OffsetTable::reset(&signature, &mut oracle, crate::db::problem::WidgetOrder::Diagonal, 1.0).unwrap();

        // 3 argument values, C(3,2) = 3 result pairs per argument -> 9 clauses.
        let clauses = functional_definitions(&signature, &offsets);
        assert_eq!(clauses.len(), 9);
        assert!(clauses.iter().all(|c| c.len() == 2));
    }

    #[test]
    fn totality_is_marker_guarded_under_contour() {
        let signature = unary_function_signature(2);
        let mut oracle = OtterSatOracle::new();
        let offsets = OffsetTable::reset(&signature, &mut oracle, crate::db::problem::WidgetOrder::Diagonal, 1.0).unwrap();
        let markers = MarkerScheme::reset(MarkerMode::Contour, &signature.sorts, &mut oracle).unwrap();

        let clauses = totality(&signature, &offsets, &markers);
        // One totality clause per argument value per candidate cardinality i in 1..=2: 2 args * 2 = 4.
        assert_eq!(clauses.len(), 4);
        // Every clause carries its marker-guard literal as the last entry.
        assert!(clauses.iter().all(|c| !c.is_empty()));
    }

    /// Three nullary constants over a size-3 sort: restricted totality
    /// pins the newest constant to `{1,2,3}`, and canonicity forbids
    /// assigning constant `i` the value `n` unless some earlier constant
    /// already took `n - 1`.
    #[test]
    fn symmetry_breaking_emits_restricted_totality_and_canonicity_for_constants() {
        let sorts = SortTable {
            parents: vec![0],
            sort_bounds: vec![None],
            distinct: vec![DistinctSort::new(1, None, 3, false)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        };
        let mut signature = Signature::default();
        for name in ["a", "b", "c"] {
            signature.functions.push(FunctionSymbol {
                name: name.to_string(),
                arity: 0,
                signature: vec![0],
                deleted: false,
                usage_count: 0,
                definition: None,
            });
        }
        let signature = SortedSignature {
            signature,
            sorts,
            var_eq_sorts: Default::default(),
            sorted_constants: [(0, vec![0, 1, 2])].into_iter().collect(),
            sorted_functions: Default::default(),
        };

        let mut oracle = OtterSatOracle::new();
        let offsets = OffsetTable::reset(
            &signature,
            &mut oracle,
            crate::db::problem::WidgetOrder::FunctionFirst,
            1.0,
        )
        .unwrap();

        let clauses = symmetry_breaking(&signature, &offsets);

        // Restricted totality for the 3rd (newest) constant: one clause of
        // length 3, `(c=1) v (c=2) v (c=3)`.
        assert!(clauses.iter().any(|c| c.len() == 3 && c.iter().all(|l| l.polarity)));

        // Canonicity: C(3,2) = 3 pairs (i, j) with j < i among the 3 constants.
        let canon: Vec<_> = clauses.iter().filter(|c| c.len() == 2).collect();
        assert_eq!(canon.len(), 3);
        assert!(canon.iter().all(|c| !c[0].polarity && c[1].polarity));
    }

    /// With a `symmetry_ratio` below 1.0, restricted totality must still
    /// pin the newest constant across the *full* domain size — only
    /// canonicity's candidate pairs are bounded by the ratio.
    #[test]
    fn restricted_totality_ignores_symmetry_ratio_truncation() {
        let sorts = SortTable {
            parents: vec![0],
            sort_bounds: vec![None],
            distinct: vec![DistinctSort::new(1, None, 4, false)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        };
        let mut signature = Signature::default();
        for name in ["a", "b", "c", "d"] {
            signature.functions.push(FunctionSymbol {
                name: name.to_string(),
                arity: 0,
                signature: vec![0],
                deleted: false,
                usage_count: 0,
                definition: None,
            });
        }
        let signature = SortedSignature {
            signature,
            sorts,
            var_eq_sorts: Default::default(),
            sorted_constants: [(0, vec![0, 1, 2, 3])].into_iter().collect(),
            sorted_functions: Default::default(),
        };

        let mut oracle = OtterSatOracle::new();
        // w = ceil(0.5 * 4) = 2: canonicity only compares among the first
        // 2 constants, but the ordering itself stays untruncated at 4.
        let offsets = OffsetTable::reset(
            &signature,
            &mut oracle,
            crate::db::problem::WidgetOrder::FunctionFirst,
            0.5,
        )
        .unwrap();

        assert_eq!(offsets.symmetry_orderings[&0].len(), 4);
        assert_eq!(offsets.symmetry_canonicity_width[&0], 2);

        let clauses = symmetry_breaking(&signature, &offsets);

        // Restricted totality for the 4th (newest) constant still fires,
        // over the full 4-value domain, not dropped because w < 4.
        assert!(clauses.iter().any(|c| c.len() == 4 && c.iter().all(|l| l.polarity)));

        // Canonicity is bounded to the first 2 constants: C(2,2) = 1 pair.
        let canon: Vec<_> = clauses.iter().filter(|c| c.len() == 2).collect();
        assert_eq!(canon.len(), 1);
    }
}
