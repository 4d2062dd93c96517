/*!
The clause encoder (§4.2): walks every grounding of a flat clause and emits
a SAT clause, or nothing, according to the tie-break rules for each literal
shape.
*/

use crate::db::marker::MarkerScheme;
use crate::db::offsets::OffsetTable;
use crate::db::problem::SortedSignature;
use crate::oracle::SatLiteral;
use crate::procedures::odometer::Odometer;
use crate::structures::clause::{FlatClause, FlatLiteral};
use crate::types::{ClauseVar, DomainValue};
use std::collections::HashMap;

/// A grounding: the value assigned to every clause-local variable.
pub type Grounding = HashMap<ClauseVar, DomainValue>;

/// Emits every grounding of `clause` as a SAT clause (or skips it, per the
/// tie-break rules below), appending marker guards for non-monotonic sorts
/// touched by the grounding (§4.5).
///
/// Returns the emitted clauses; the caller (the driver) is responsible for
/// handing them to the SAT backend and discarding them afterwards (§3,
/// "SAT clauses are ephemeral").
pub fn encode_clause(
    clause: &FlatClause,
    signature: &SortedSignature,
    offsets: &OffsetTable,
    markers: &MarkerScheme,
) -> Vec<Vec<SatLiteral>> {
    if clause.is_trivially_satisfiable() {
        return Vec::new();
    }

    let mut vars: Vec<ClauseVar> = clause.var_sorts.keys().copied().collect();
    vars.sort_unstable();

    let bounds: Vec<DomainValue> = vars
        .iter()
        .map(|v| signature.sorts.grounding_bound(clause.var_sorts[v]))
        .collect();

    let odometer = Odometer::new(vars, bounds);

    let mut emitted = Vec::new();
    for grounding in odometer {
        let grounding: Grounding = grounding.into_iter().collect();
        if let Some(sat_clause) = encode_grounding(clause, &grounding, signature, offsets, markers) {
            emitted.push(sat_clause);
        }
    }
    log::trace!(
        target: crate::misc::log::targets::ENCODE,
        "clause over {} variable(s) grounded to {} SAT clause(s)",
        clause.var_sorts.len(),
        emitted.len()
    );
    emitted
}

/// Encodes a single grounding of `clause`, or returns `None` if the
/// grounding makes the clause trivially true (it should be skipped
/// entirely, not emitted as an empty/tautological clause).
fn encode_grounding(
    clause: &FlatClause,
    grounding: &Grounding,
    signature: &SortedSignature,
    offsets: &OffsetTable,
    markers: &MarkerScheme,
) -> Option<Vec<SatLiteral>> {
    let mut sat_literals = Vec::with_capacity(clause.literals.len());

    for literal in &clause.literals {
        match literal {
            FlatLiteral::VarEq { polarity, x, y } => {
                let equal = grounding[x] == grounding[y];
                match (polarity, equal) {
                    (true, true) => return None, // literal true -> clause skipped
                    (true, false) => {}           // literal false -> omitted
                    (false, true) => {}           // literal false -> omitted
                    (false, false) => return None, // literal true -> clause skipped
                }
            }

            FlatLiteral::FuncEq { polarity, f, args, result } => {
                let values: Vec<DomainValue> = args.iter().map(|a| grounding[a]).collect();
                let mut tuple = values;
                tuple.push(grounding[result]);
                let var = offsets.function_var(*f, &tuple);
                sat_literals.push(SatLiteral::new(var, *polarity));
            }

            FlatLiteral::Pred { polarity, p, args } => {
                let values: Vec<DomainValue> = args.iter().map(|a| grounding[a]).collect();
                let var = offsets.predicate_var(*p, &values);
                sat_literals.push(SatLiteral::new(var, *polarity));
            }
        }
    }

    append_instance_guards(clause, grounding, signature, markers, &mut sat_literals);

    Some(sat_literals)
}

/// Appends `¬marker[s][...]`/`¬inst[s]` guards for every non-monotonic
/// distinct sort this grounding touches, at the maximum value used for
/// that sort in this grounding (§4.5).
fn append_instance_guards(
    clause: &FlatClause,
    grounding: &Grounding,
    signature: &SortedSignature,
    markers: &MarkerScheme,
    sat_literals: &mut Vec<SatLiteral>,
) {
    let mut max_value_per_distinct: HashMap<u32, DomainValue> = HashMap::new();
    for (&var, &source_sort) in &clause.var_sorts {
        let distinct = signature.sorts.parents[source_sort as usize];
        let value = grounding[&var];
        max_value_per_distinct
            .entry(distinct)
            .and_modify(|m| *m = (*m).max(value))
            .or_insert(value);
    }

    for (distinct, max_value) in max_value_per_distinct {
        if signature.sorts.distinct[distinct as usize].monotonic {
            continue;
        }
        match markers {
            MarkerScheme::Contour(m) => {
                if let Some(guard) = m.instance_guard(distinct, max_value) {
                    sat_literals.push(guard);
                }
            }
            MarkerScheme::Sbmeam(m) => {
                sat_literals.push(m.instance_guard(distinct));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::marker::MarkerMode;
    use crate::db::problem::WidgetOrder;
    use crate::oracle::OtterSatOracle;
    use crate::structures::clause::FlatClause;
    use crate::structures::sort::{DistinctSort, SortTable};
    use std::collections::HashMap as Map;

    /// A single distinct/source sort of current size 2, no functions or
    /// predicates, used to exercise the `x ≐ y` tie-break rules.
    fn two_element_signature() -> SortedSignature {
        let sorts = SortTable {
            parents: vec![0],
            sort_bounds: vec![None],
            distinct: vec![DistinctSort::new(1, None, 2, false)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        };
        SortedSignature {
            signature: Default::default(),
            sorts,
            var_eq_sorts: Default::default(),
            sorted_constants: Default::default(),
            sorted_functions: Default::default(),
        }
    }

    #[test]
    fn var_eq_grounding_skips_clause_when_literal_is_true() {
        let signature = two_element_signature();
        let mut oracle = OtterSatOracle::new();
        let offsets =
            OffsetTable::reset(&signature, &mut oracle, WidgetOrder::Diagonal, 1.0).unwrap();
        let markers = MarkerScheme::reset(MarkerMode::Contour, &signature.sorts, &mut oracle).unwrap();

        let mut var_sorts = Map::new();
        var_sorts.insert(0u32, 0u32);
        var_sorts.insert(1u32, 0u32);
        let clause = FlatClause::new(
            vec![FlatLiteral::VarEq {
                polarity: true,
                x: 0,
                y: 1,
            }],
            var_sorts,
        );

        // x = y = 1: the positive equality is true, so this grounding
        // contributes nothing (§4.2, "the clause is true ... skip").
        let mut equal = Map::new();
        equal.insert(0u32, 1u32);
        equal.insert(1u32, 1u32);
        assert!(encode_grounding(&clause, &equal, &signature, &offsets, &markers).is_none());

        // x = 1, y = 2: the positive equality is false, so the literal is
        // simply omitted and the (now-empty, modulo guards) clause is kept.
        let mut distinct = Map::new();
        distinct.insert(0u32, 1u32);
        distinct.insert(1u32, 2u32);
        assert!(encode_grounding(&clause, &distinct, &signature, &offsets, &markers).is_some());

        // The encoder's full sweep over all four groundings should emit
        // exactly the two groundings where x != y.
        let emitted = encode_clause(&clause, &signature, &offsets, &markers);
        assert_eq!(emitted.len(), 2);
    }

    /// For `¬p(x)`, the ground instance at `x = 1` is satisfied by an
    /// interpretation exactly when `p(1)` is false there — which is exactly
    /// when the emitted SAT literal is satisfied by the matching assignment
    /// to `predicate_var(p, [1])`.
    #[test]
    fn negative_predicate_literal_round_trips_with_its_grounding() {
        let sorts = SortTable {
            parents: vec![0],
            sort_bounds: vec![None],
            distinct: vec![DistinctSort::new(1, None, 2, false)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        };
        let mut signature_data = crate::structures::signature::Signature::default();
        signature_data.predicates.push(crate::structures::signature::PredicateSymbol {
            name: "p".to_string(),
            arity: 1,
            signature: vec![0],
            deleted: false,
            usage_count: 0,
            definition: None,
            partially_deleted: false,
            trivial: None,
        });
        let signature = SortedSignature {
            signature: signature_data,
            sorts,
            var_eq_sorts: Default::default(),
            sorted_constants: Default::default(),
            sorted_functions: Default::default(),
        };

        let mut oracle = OtterSatOracle::new();
        let offsets = OffsetTable::reset(&signature, &mut oracle, WidgetOrder::Diagonal, 1.0).unwrap();
        let markers = MarkerScheme::reset(MarkerMode::Contour, &signature.sorts, &mut oracle).unwrap();

        let mut var_sorts = Map::new();
        var_sorts.insert(0u32, 0u32);
        let clause = FlatClause::new(
            vec![FlatLiteral::Pred {
                polarity: false,
                p: 0,
                args: vec![0],
            }],
            var_sorts,
        );

        let mut grounding = Map::new();
        grounding.insert(0u32, 1u32);
        let sat_clause = encode_grounding(&clause, &grounding, &signature, &offsets, &markers).unwrap();
        let lit = sat_clause[0];
        assert_eq!(lit.var, offsets.predicate_var(0, &[1]));
        assert!(!lit.polarity);

        // The literal is satisfied exactly when p(1) is assigned false,
        // which is exactly when the ground instance ¬p(1) holds.
        for p_1 in [true, false] {
            let literal_satisfied = lit.polarity == p_1;
            let ground_instance_holds = !p_1;
            assert_eq!(literal_satisfied, ground_instance_holds);
        }
    }

    /// A monotonic sort never gets an instance guard appended, no matter
    /// how large the grounding's value is — growing its size can only add
    /// SAT variables, never invalidate a clause that held at the smaller
    /// size, which is the mechanism behind monotonicity safety (§4.5/§4.6).
    #[test]
    fn monotonic_sorts_never_receive_instance_guards() {
        let sorts = SortTable {
            parents: vec![0],
            sort_bounds: vec![None],
            distinct: vec![DistinctSort::new(1, None, 3, true)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        };
        let mut signature_data = crate::structures::signature::Signature::default();
        signature_data.predicates.push(crate::structures::signature::PredicateSymbol {
            name: "p".to_string(),
            arity: 1,
            signature: vec![0],
            deleted: false,
            usage_count: 0,
            definition: None,
            partially_deleted: false,
            trivial: None,
        });
        let signature = SortedSignature {
            signature: signature_data,
            sorts,
            var_eq_sorts: Default::default(),
            sorted_constants: Default::default(),
            sorted_functions: Default::default(),
        };

        let mut oracle = OtterSatOracle::new();
        let offsets = OffsetTable::reset(&signature, &mut oracle, WidgetOrder::Diagonal, 1.0).unwrap();
        let markers = MarkerScheme::reset(MarkerMode::Contour, &signature.sorts, &mut oracle).unwrap();

        let mut var_sorts = Map::new();
        var_sorts.insert(0u32, 0u32);
        let clause = FlatClause::new(
            vec![FlatLiteral::Pred {
                polarity: true,
                p: 0,
                args: vec![0],
            }],
            var_sorts,
        );

        let mut grounding = Map::new();
        grounding.insert(0u32, 3u32); // the top value of the sort's current size
        let sat_clause = encode_grounding(&clause, &grounding, &signature, &offsets, &markers).unwrap();

        // Just the predicate literal; no guard was appended.
        assert_eq!(sat_clause.len(), 1);
    }
}
