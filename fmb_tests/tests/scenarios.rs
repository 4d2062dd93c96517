//! The six literal scenarios of the testable-properties section: each a
//! minimal flattened problem run end to end through the driver.

use fmb::reports::MainLoopResult;
use fmb_tests::run_source;

#[test]
fn propositional_unsat_is_a_minimal_refutation() {
    let source = "
sort unused min 1 max 1 monotonic false
predicate p 0
clause vars lits +pred p
clause vars lits -pred p
";
    match run_source(source) {
        MainLoopResult::Refutation => {}
        other => panic!("expected a refutation, got {other:?}"),
    }
}

#[test]
fn unary_constant_identity_needs_size_two() {
    let source = "
sort person min 1 max 4 monotonic false
function a 0 -> person
function b 0 -> person
clause vars y person lits -funceq a y -funceq b y
";
    match run_source(source) {
        MainLoopResult::Satisfiable(model) => {
            let size = model.sort_sizes[&0];
            assert!(size >= 2, "expected a model of size at least 2, got {size}");
            let a = model.functions[&0][&Vec::new()];
            let b = model.functions[&1][&Vec::new()];
            assert_ne!(a, b);
        }
        other => panic!("expected a model, got {other:?}"),
    }
}

#[test]
fn injective_non_surjective_successor_has_no_finite_model() {
    // forall x. s(x) != x ; forall x y. s(x) = s(y) -> x = y
    let source = "
sort nat min 1 max 4 monotonic false
function s 1 nat -> nat
clause vars x nat lits -funceq s x x
clause vars x nat y nat z nat lits -funceq s x z -funceq s y z +vareq x y
";
    match run_source(source) {
        MainLoopResult::Refutation => {}
        other => panic!("expected a refutation (no finite model up to the sort bound), got {other:?}"),
    }
}

#[test]
fn two_sort_independence_leaves_the_unconstrained_sort_minimal() {
    let source = "
sort sigma min 1 max 4 monotonic false
sort tau min 1 max 4 monotonic true
function cx 0 -> sigma
function cy 0 -> sigma
predicate p 1 sigma
clause vars y sigma lits -funceq cx y +pred p y
clause vars y sigma lits -funceq cy y -pred p y
";
    match run_source(source) {
        MainLoopResult::Satisfiable(model) => {
            assert!(model.sort_sizes[&0] >= 2);
            assert_eq!(model.sort_sizes[&1], 1);
        }
        other => panic!("expected a model, got {other:?}"),
    }
}

#[test]
fn functional_totality_smoke() {
    let source = "
sort sigma min 1 max 3 monotonic false
function f 1 sigma -> sigma
";
    match run_source(source) {
        MainLoopResult::Satisfiable(model) => {
            let size = model.sort_sizes[&0];
            for x in 1..=size {
                assert!(model.functions[&0].contains_key(&vec![x]), "f({x}) left undefined");
            }
        }
        other => panic!("expected a model, got {other:?}"),
    }
}

#[test]
fn three_pairwise_distinct_constants_are_assigned_canonically() {
    let source = "
sort sigma min 1 max 4 monotonic false
function a 0 -> sigma
function b 0 -> sigma
function c 0 -> sigma
clause vars y sigma lits -funceq a y -funceq b y
clause vars y sigma lits -funceq a y -funceq c y
clause vars y sigma lits -funceq b y -funceq c y
";
    let mut config = fmb::config::Config::default();
    config
        .widget_order
        .set(fmb::db::problem::WidgetOrder::Diagonal, fmb::context::DriverState::Initial)
        .unwrap();

    match fmb_tests::run_source_with(source, config) {
        MainLoopResult::Satisfiable(model) => {
            let a = model.functions[&0][&Vec::new()];
            let b = model.functions[&1][&Vec::new()];
            let c = model.functions[&2][&Vec::new()];
            let mut values = vec![a, b, c];
            values.sort();
            assert_eq!(values, vec![1, 2, 3]);
        }
        other => panic!("expected a model, got {other:?}"),
    }
}
