/*!
The driver loop (§4.6): `Initial → EncodeAndSolve → (OnSat Extract → Done) |
(OnUnsat Enumerate → EncodeAndSolve) | (OnCannotEncode → GaveUp) |
(OnEnumeratorExhausted → Refuted)`.
*/

use crate::context::{DriverState, FmbContext};
use crate::db::problem::Problem;
use crate::oracle::SatOutcome;
use crate::procedures::enumerate::EnumerationStrategy;
use crate::procedures::{axioms, encode, extract};
use crate::reports::MainLoopResult;
use crate::types::err::{EnumerateError, ErrorKind};
use std::time::Instant;

/// Runs the full loop to completion (or to a configured deadline).
pub fn run(
    context: &mut FmbContext,
    problem: &Problem,
    enumerator: &mut dyn EnumerationStrategy,
) -> MainLoopResult {
    if let Err(reason) = problem.appropriateness_check() {
        return MainLoopResult::Inappropriate(reason);
    }

    let deadline = Instant::now() + context.config.time_limit.value;

    enumerator.init(&mut context.signature.sorts);
    if let Err(e) = context.reset() {
        return MainLoopResult::GaveUp(e);
    }

    loop {
        if Instant::now() >= deadline {
            return MainLoopResult::TimeLimit;
        }

        context.state = DriverState::EncodeAndSolve;
        log::info!(
            target: crate::misc::log::targets::DRIVER,
            "encode-and-solve at sizes {:?}",
            context.signature.sorts.distinct.iter().map(|d| d.current).collect::<Vec<_>>()
        );

        if let Err(e) = encode_and_assert(context, problem) {
            return MainLoopResult::GaveUp(e);
        }

        let assumptions = context.markers.assumptions();
        let outcome = match context.oracle.solve_under_assumptions(&assumptions) {
            Ok(outcome) => outcome,
            Err(e) => return MainLoopResult::GaveUp(ErrorKind::Sat(e)),
        };

        match outcome {
            SatOutcome::Sat => {
                context.state = DriverState::Extract;
                return match extract::extract_model(
                    &context.signature,
                    &context.offsets,
                    &context.markers,
                    &*context.oracle,
                ) {
                    Ok(model) => {
                        context.state = DriverState::Done;
                        MainLoopResult::Satisfiable(model)
                    }
                    Err(e) => MainLoopResult::GaveUp(ErrorKind::Extract(e)),
                };
            }

            SatOutcome::Unsat => {
                context.state = DriverState::Enumerate;
                let failed = context.oracle.failed_assumptions();
                log::debug!(
                    target: crate::misc::log::targets::ENUMERATE,
                    "unsat under {} failed assumption(s); learning a no-good",
                    failed.len()
                );
                enumerator.learn_nogood(&context.signature.sorts, &failed, &context.markers);

                match enumerator.increase_sizes(&mut context.signature.sorts) {
                    Ok(()) => {
                        log::debug!(
                            target: crate::misc::log::targets::ENUMERATE,
                            "advanced to sizes {:?}",
                            context.signature.sorts.distinct.iter().map(|d| d.current).collect::<Vec<_>>()
                        );
                        if let Err(e) = context.reset() {
                            return MainLoopResult::GaveUp(e);
                        }
                    }
                    Err(exhausted) => {
                        context.state = DriverState::Refuted;
                        return enumerator_exhausted(exhausted, enumerator.is_complete());
                    }
                }
            }
        }
    }
}

/// Encodes every clause family for the current epoch and hands them to the
/// oracle. When `randomTraversals` is set, the emitted SAT clauses are
/// shuffled before assertion and the oracle is nudged to vary its next
/// assignment, per §5's "optional shuffle step" and §6's `randomTraversals`
/// option.
fn encode_and_assert(context: &mut FmbContext, problem: &Problem) -> Result<(), ErrorKind> {
    let mut clauses = Vec::new();

    for clause in &problem.clauses {
        clauses.extend(encode::encode_clause(clause, &context.signature, &context.offsets, &context.markers));
    }
    clauses.extend(axioms::functional_definitions(&context.signature, &context.offsets));
    clauses.extend(axioms::totality(&context.signature, &context.offsets, &context.markers));
    clauses.extend(axioms::symmetry_breaking(&context.signature, &context.offsets));

    if context.config.random_traversals.value {
        context.shuffle(&mut clauses);
        let seed = context.next_seed();
        context.oracle.randomize_for_next_assignment(seed);
    }

    for sat_clause in clauses {
        context.oracle.add_clause(&sat_clause)?;
    }

    Ok(())
}

fn enumerator_exhausted(error: EnumerateError, complete: bool) -> MainLoopResult {
    log::info!(
        target: crate::misc::log::targets::DRIVER,
        "enumerator exhausted ({:?}), complete = {complete}",
        error
    );
    if complete {
        MainLoopResult::Refutation
    } else {
        MainLoopResult::RefutationNotFound
    }
}
