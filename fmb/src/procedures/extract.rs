/*!
The model extractor (§4.7): reads a satisfying assignment back into an
[Interpretation].
*/

use crate::db::marker::MarkerScheme;
use crate::db::offsets::OffsetTable;
use crate::db::problem::SortedSignature;
use crate::oracle::{SatLiteral, SatOracle};
use crate::procedures::odometer::Odometer;
use crate::structures::clause::{FlatClause, FlatLiteral};
use crate::structures::interpretation::Interpretation;
use crate::types::err::ExtractError;
use crate::types::{ClauseVar, DomainValue, FunctionId, PredicateId, SourceSort};
use std::collections::HashMap;

/// Extracts an [Interpretation] from the oracle's last satisfying
/// assignment. `markers` is used to retract CONTOUR sort sizes first
/// (§4.7: "CONTOUR retracts `size[s]` first to the smallest *j* where
/// `¬marker[s][j]` is true"); SBMEAM/SMT epochs have no retraction step.
pub fn extract_model(
    signature: &SortedSignature,
    offsets: &OffsetTable,
    markers: &MarkerScheme,
    oracle: &dyn SatOracle,
) -> Result<Interpretation, ExtractError> {
    let mut model = Interpretation::default();

    let retracted = retract_sort_sizes(signature, markers, oracle);
    for source in 0..signature.sorts.parents.len() as SourceSort {
        let distinct = signature.sorts.parents[source as usize];
        let size = retracted
            .get(&distinct)
            .copied()
            .unwrap_or_else(|| signature.sorts.source_size(source));
        model.sort_sizes.insert(source, size);
    }

    for (id, function) in signature.signature.functions.iter().enumerate() {
        let id = id as FunctionId;
        if function.deleted {
            continue;
        }
        extract_function(id, function, &model.sort_sizes, offsets, oracle, &mut model);
    }

    for (id, predicate) in signature.signature.predicates.iter().enumerate() {
        let id = id as PredicateId;
        if predicate.deleted {
            continue;
        }
        extract_predicate(id, predicate, &model.sort_sizes, offsets, oracle, &mut model);
    }

    // Deleted symbols are recovered only after every live symbol has an
    // entry, since their definitions are expressed in terms of those.
    for (id, function) in signature.signature.functions.iter().enumerate() {
        let id = id as FunctionId;
        if !function.deleted {
            continue;
        }
        recover_deleted_function(id, function, &model.sort_sizes.clone(), &mut model);
    }

    for (id, predicate) in signature.signature.predicates.iter().enumerate() {
        let id = id as PredicateId;
        if !predicate.deleted {
            continue;
        }
        recover_deleted_predicate(id, predicate, &model.sort_sizes.clone(), &mut model);
    }

    log::debug!(
        target: crate::misc::log::targets::EXTRACT,
        "extracted a model over {} sort(s)",
        model.sort_sizes.len()
    );
    Ok(model)
}

/// For CONTOUR, the smallest candidate size `j` (1-based) with
/// `¬marker[s][j-1]` true, per distinct sort. Absent (SBMEAM/SMT), nothing
/// is retracted and the caller falls back to the epoch's own sizes.
fn retract_sort_sizes(
    signature: &SortedSignature,
    markers: &MarkerScheme,
    oracle: &dyn SatOracle,
) -> HashMap<u32, DomainValue> {
    let mut retracted = HashMap::new();
    let MarkerScheme::Contour(contour) = markers else {
        return retracted;
    };

    for distinct in 0..signature.sorts.distinct.len() as u32 {
        let current = signature.sorts.distinct[distinct as usize].current;
        let mut smallest = current;
        for j in 0..current as usize {
            let marker_var = contour.marker(distinct, j);
            if !oracle.true_in_assignment(SatLiteral::new(marker_var, true)) {
                smallest = (j + 1) as DomainValue;
                break;
            }
        }
        retracted.insert(distinct, smallest);
    }
    retracted
}

fn extract_function(
    id: FunctionId,
    function: &crate::structures::signature::FunctionSymbol,
    sort_sizes: &HashMap<SourceSort, DomainValue>,
    offsets: &OffsetTable,
    oracle: &dyn SatOracle,
    model: &mut Interpretation,
) {
    let arg_bounds: Vec<DomainValue> = function.arg_sorts().iter().map(|&s| sort_sizes[&s]).collect();
    let result_size = sort_sizes[&function.result_sort()];
    let arity = arg_bounds.len() as u32;
    let odometer = Odometer::new((0..arity).collect(), arg_bounds);

    let table = model.functions.entry(id).or_default();

    for grounding in odometer {
        let args: Vec<DomainValue> = grounding.iter().map(|(_, v)| *v).collect();
        let mut found = None;
        for r in 1..=result_size {
            let mut tuple = args.clone();
            tuple.push(r);
            let var = offsets.function_var(id, &tuple);
            if oracle.true_in_assignment(SatLiteral::new(var, true)) {
                found = Some(r);
                break;
            }
        }
        if let Some(r) = found {
            table.insert(args, r);
        } else {
            model.partial.push((id, args));
        }
    }
}

fn extract_predicate(
    id: PredicateId,
    predicate: &crate::structures::signature::PredicateSymbol,
    sort_sizes: &HashMap<SourceSort, DomainValue>,
    offsets: &OffsetTable,
    oracle: &dyn SatOracle,
    model: &mut Interpretation,
) {
    if let Some(value) = predicate.trivial {
        let table = model.predicates.entry(id).or_default();
        let arg_bounds: Vec<DomainValue> = predicate.arg_sorts().iter().map(|&s| sort_sizes[&s]).collect();
        let arity = arg_bounds.len() as u32;
        for grounding in Odometer::new((0..arity).collect(), arg_bounds) {
            let args: Vec<DomainValue> = grounding.iter().map(|(_, v)| *v).collect();
            table.insert(args, value);
        }
        return;
    }

    let arg_bounds: Vec<DomainValue> = predicate.arg_sorts().iter().map(|&s| sort_sizes[&s]).collect();
    let arity = arg_bounds.len() as u32;
    let table = model.predicates.entry(id).or_default();

    for grounding in Odometer::new((0..arity).collect(), arg_bounds) {
        let args: Vec<DomainValue> = grounding.iter().map(|(_, v)| *v).collect();
        let var = offsets.predicate_var(id, &args);
        let value = oracle.true_in_assignment(SatLiteral::new(var, true));
        table.insert(args, value);
    }
}

/// Evaluates a deleted function's stored definition (§4.7, "recover from
/// stored definitions"): the common demodulation shape is a single
/// positive `FuncEq`/`Pred` literal equating the deleted symbol's result
/// with a live symbol's application, with clause-local variables `0..arity`
/// standing for the deleted symbol's own arguments in order and the
/// highest-numbered variable standing for its result.
fn recover_deleted_function(
    id: FunctionId,
    function: &crate::structures::signature::FunctionSymbol,
    sort_sizes: &HashMap<SourceSort, DomainValue>,
    model: &mut Interpretation,
) {
    let Some(definition) = &function.definition else {
        return;
    };
    let arg_bounds: Vec<DomainValue> = function.arg_sorts().iter().map(|&s| sort_sizes[&s]).collect();
    let arity = arg_bounds.len() as u32;
    model.functions.entry(id).or_default();

    for grounding in Odometer::new((0..arity).collect(), arg_bounds) {
        let args: Vec<DomainValue> = grounding.iter().map(|(_, v)| *v).collect();
        let substitution: HashMap<ClauseVar, DomainValue> =
            args.iter().enumerate().map(|(i, &v)| (i as ClauseVar, v)).collect();

        match eval_definition_value(definition, &substitution, model) {
            Some(value) => {
                model.functions.get_mut(&id).unwrap().insert(args, value);
            }
            None => model.partial.push((id, args)),
        }
    }
}

fn recover_deleted_predicate(
    id: PredicateId,
    predicate: &crate::structures::signature::PredicateSymbol,
    sort_sizes: &HashMap<SourceSort, DomainValue>,
    model: &mut Interpretation,
) {
    let Some(definition) = &predicate.definition else {
        return;
    };
    let arg_bounds: Vec<DomainValue> = predicate.arg_sorts().iter().map(|&s| sort_sizes[&s]).collect();
    let arity = arg_bounds.len() as u32;
    model.predicates.entry(id).or_default();

    for grounding in Odometer::new((0..arity).collect(), arg_bounds) {
        let args: Vec<DomainValue> = grounding.iter().map(|(_, v)| *v).collect();
        let substitution: HashMap<ClauseVar, DomainValue> =
            args.iter().enumerate().map(|(i, &v)| (i as ClauseVar, v)).collect();

        if let Some(truth) = eval_definition_truth(definition, &substitution, model) {
            model.predicates.get_mut(&id).unwrap().insert(args, truth);
        }
    }
}

/// Evaluates a stored function definition's body for a single positive
/// `FuncEq` literal under `substitution`, returning `None` if the body
/// isn't evaluable yet (§8, "Model-extraction partial").
fn eval_definition_value(
    definition: &FlatClause,
    substitution: &HashMap<ClauseVar, DomainValue>,
    model: &Interpretation,
) -> Option<DomainValue> {
    definition.literals.iter().find_map(|literal| match literal {
        FlatLiteral::FuncEq { polarity: true, f, args, .. } => {
            let values: Vec<DomainValue> = args.iter().map(|a| substitution.get(a).copied()).collect::<Option<_>>()?;
            model.function_value(*f, &values)
        }
        _ => None,
    })
}

/// As [eval_definition_value], for a stored predicate definition.
fn eval_definition_truth(
    definition: &FlatClause,
    substitution: &HashMap<ClauseVar, DomainValue>,
    model: &Interpretation,
) -> Option<bool> {
    definition.literals.iter().find_map(|literal| match literal {
        FlatLiteral::Pred { polarity, p, args } => {
            let values: Vec<DomainValue> = args.iter().map(|a| substitution.get(a).copied()).collect::<Option<_>>()?;
            model.predicate_value(*p, &values).map(|v| v == *polarity)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::marker::MarkerMode;
    use crate::oracle::{OtterSatOracle, SatOutcome};
    use crate::structures::signature::{FunctionSymbol, PredicateSymbol};
    use crate::structures::sort::{DistinctSort, SortTable};

    /// A single distinct sort with no live symbols, used to exercise
    /// CONTOUR retraction in isolation.
    fn single_sort_signature(size: DomainValue) -> SortedSignature {
        let sorts = SortTable {
            parents: vec![0],
            sort_bounds: vec![None],
            distinct: vec![DistinctSort::new(1, None, size, false)],
            non_strict_constraints: Vec::new(),
            strict_constraints: Vec::new(),
        };
        SortedSignature {
            signature: crate::structures::signature::Signature::default(),
            sorts,
            var_eq_sorts: Default::default(),
            sorted_constants: Default::default(),
            sorted_functions: Default::default(),
        }
    }

    fn unary_function(name: &str, definition: Option<FlatClause>) -> FunctionSymbol {
        FunctionSymbol {
            name: name.to_string(),
            arity: 1,
            signature: vec![0, 0],
            deleted: definition.is_some(),
            usage_count: 0,
            definition,
        }
    }

    fn unary_predicate(name: &str, definition: Option<FlatClause>) -> PredicateSymbol {
        PredicateSymbol {
            name: name.to_string(),
            arity: 1,
            signature: vec![0],
            deleted: definition.is_some(),
            usage_count: 0,
            definition,
            partially_deleted: false,
            trivial: None,
        }
    }

    /// `d(x) = g(x)`: clause-local variable 0 is `d`'s own argument, 1 is
    /// the result, and the body equates it with `g` applied to variable 0.
    fn demodulation_by(g: FunctionId) -> FlatClause {
        FlatClause::new(
            vec![FlatLiteral::FuncEq {
                polarity: true,
                f: g,
                args: vec![0],
                result: 1,
            }],
            [(0, 0), (1, 0)].into_iter().collect(),
        )
    }

    /// `q(x) = h(x)`, the predicate analogue of [demodulation_by].
    fn predicate_demodulation_by(h: PredicateId, polarity: bool) -> FlatClause {
        FlatClause::new(
            vec![FlatLiteral::Pred {
                polarity,
                p: h,
                args: vec![0],
            }],
            [(0, 0)].into_iter().collect(),
        )
    }

    #[test]
    fn recover_deleted_function_copies_a_fully_defined_live_table() {
        let sort_sizes: HashMap<SourceSort, DomainValue> = [(0, 2)].into_iter().collect();
        let mut model = Interpretation::default();
        model.functions.insert(0, [(vec![1], 2), (vec![2], 1)].into_iter().collect());

        let d = unary_function("d", Some(demodulation_by(0)));
        recover_deleted_function(1, &d, &sort_sizes, &mut model);

        assert_eq!(model.functions[&1][&vec![1]], 2);
        assert_eq!(model.functions[&1][&vec![2]], 1);
        assert!(model.partial.is_empty());
    }

    #[test]
    fn recover_deleted_function_falls_back_to_partial_when_the_body_is_unevaluable() {
        let sort_sizes: HashMap<SourceSort, DomainValue> = [(0, 2)].into_iter().collect();
        let mut model = Interpretation::default();
        model.functions.insert(0, [(vec![1], 2)].into_iter().collect());

        let d = unary_function("d", Some(demodulation_by(0)));
        recover_deleted_function(1, &d, &sort_sizes, &mut model);

        assert_eq!(model.functions[&1][&vec![1]], 2);
        assert!(!model.functions[&1].contains_key(&vec![2]));
        assert_eq!(model.partial, vec![(1, vec![2])]);
    }

    #[test]
    fn recover_deleted_predicate_negates_under_negative_polarity() {
        let sort_sizes: HashMap<SourceSort, DomainValue> = [(0, 2)].into_iter().collect();
        let mut model = Interpretation::default();
        model.predicates.insert(0, [(vec![1], true), (vec![2], false)].into_iter().collect());

        let q = unary_predicate("q", Some(predicate_demodulation_by(0, false)));
        recover_deleted_predicate(1, &q, &sort_sizes, &mut model);

        assert_eq!(model.predicates[&1][&vec![1]], false);
        assert_eq!(model.predicates[&1][&vec![2]], true);
    }

    #[test]
    fn contour_retraction_finds_the_smallest_size_with_no_marker() {
        let signature = single_sort_signature(3);
        let mut oracle = OtterSatOracle::new();
        let markers = MarkerScheme::reset(MarkerMode::Contour, &signature.sorts, &mut oracle).unwrap();
        for axiom in markers.defining_axioms() {
            oracle.add_clause(&axiom).unwrap();
        }

        let MarkerScheme::Contour(contour) = &markers else { unreachable!() };
        oracle.add_clause(&[SatLiteral::new(contour.marker(0, 0), true)]).unwrap();
        oracle.add_clause(&[SatLiteral::new(contour.marker(0, 1), false)]).unwrap();

        assert_eq!(oracle.solve_under_assumptions(&[]).unwrap(), SatOutcome::Sat);

        let retracted = retract_sort_sizes(&signature, &markers, &oracle);
        assert_eq!(retracted[&0], 2);
    }
}
