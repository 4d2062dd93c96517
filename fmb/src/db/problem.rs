/*!
The read-only inputs consumed from preprocessing (§6).

Everything here is produced once, outside the core, and never mutated by
it: a [Problem] (clauses plus the three problem-level flags), and a
[SortedSignature] (the signature together with sort inference's view of it).
*/

use crate::structures::clause::FlatClause;
use crate::structures::signature::Signature;
use crate::structures::sort::SortTable;
use crate::structures::term::GroundedTerm;
use crate::types::{DistinctSortId, FunctionId, SourceSort};
use std::collections::HashMap;

/// The clausified problem, plus the flags that let the driver fail fast
/// with `INAPPROPRIATE` before any SAT solver is instantiated (§7).
#[derive(Clone, Debug, Default)]
pub struct Problem {
    pub clauses: Vec<FlatClause>,

    /// Set if a prior (out-of-scope) transformation pass did not complete.
    pub had_incomplete_transformation: bool,

    /// Set if the problem is known to only admit infinite models.
    pub known_infinite_domain: bool,

    /// Set if the problem uses interpreted (e.g. arithmetic) operations.
    pub has_interpreted_operations: bool,
}

impl Problem {
    /// The appropriateness check of §7: run before anything else.
    pub fn appropriateness_check(&self) -> Result<(), crate::types::err::InappropriateReason> {
        use crate::types::err::InappropriateReason::*;
        if self.has_interpreted_operations {
            return Err(InterpretedOperations);
        }
        if self.known_infinite_domain {
            return Err(KnownInfiniteDomain);
        }
        if self.had_incomplete_transformation {
            return Err(IncompleteTransformation);
        }
        Ok(())
    }
}

/// Which strategy was used to order a sort's [GroundedTerm]s for symmetry
/// breaking (§4.4, `widgetOrders`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WidgetOrder {
    /// Constants, then groundings of functions, grouped by function.
    FunctionFirst,

    /// Constants, then groundings of functions, grouped by argument tuple.
    ArgumentFirst,

    /// `1 + ((m + f) mod size)`: interleave constants and functions.
    Diagonal,
}

/// The signature together with sort inference's view of it: everything
/// named in §6 under "Consumed from preprocessing" besides the clauses
/// themselves.
#[derive(Clone, Debug, Default)]
pub struct SortedSignature {
    pub signature: Signature,
    pub sorts: SortTable,

    /// `var_eq_sorts[d]`: the special "don't care" source sort minted for
    /// two-variable equalities whose variables are otherwise unconstrained,
    /// one per distinct sort `d` (§3).
    pub var_eq_sorts: HashMap<DistinctSortId, SourceSort>,

    /// Constants (arity-0 functions) grouped by the source sort they return.
    pub sorted_constants: HashMap<SourceSort, Vec<FunctionId>>,

    /// Non-constant functions grouped by the source sort they return.
    pub sorted_functions: HashMap<SourceSort, Vec<FunctionId>>,
}

impl SortedSignature {
    /// Builds the ordered list of [GroundedTerm]s used by symmetry breaking
    /// for `sort`, up to `limit` entries, per the configured [WidgetOrder]
    /// (§4.1 step 5, §4.4).
    ///
    /// Only constants and *unary* functions are used to generate
    /// non-constant `GroundedTerm`s, evaluated at a single "diagonal"
    /// argument per step; this keeps the ordering list linear in the
    /// domain size rather than exponential in function arity, which is
    /// sufficient since symmetry breaking only needs *some* canonical
    /// enumeration, not every grounding.
    pub fn symmetry_ordering(
        &self,
        sort: SourceSort,
        order: WidgetOrder,
        limit: usize,
    ) -> Vec<GroundedTerm> {
        let constants = self
            .sorted_constants
            .get(&sort)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let functions = self
            .sorted_functions
            .get(&sort)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);

        let mut terms: Vec<GroundedTerm> = Vec::with_capacity(limit);

        // A "uniform" grounding of `f` at value `v` repeats `v` in every
        // argument slot, regardless of arity.
        let uniform = |f: FunctionId, v: u32| GroundedTerm {
            function: f,
            args: vec![v; self.signature.function(f).arity as usize],
        };

        match order {
            WidgetOrder::FunctionFirst => {
                for &c in constants {
                    terms.push(GroundedTerm::constant(c));
                }
                'outer: for &f in functions {
                    let mut arg = 1u32;
                    while terms.len() < limit {
                        terms.push(uniform(f, arg));
                        arg += 1;
                        if terms.len() >= limit {
                            break 'outer;
                        }
                    }
                }
            }

            WidgetOrder::ArgumentFirst => {
                for &c in constants {
                    terms.push(GroundedTerm::constant(c));
                }
                let mut arg = 1u32;
                while terms.len() < limit && !functions.is_empty() {
                    for &f in functions {
                        terms.push(uniform(f, arg));
                        if terms.len() >= limit {
                            break;
                        }
                    }
                    arg += 1;
                }
            }

            WidgetOrder::Diagonal => {
                let mut m = 0usize;
                while terms.len() < limit {
                    let total = constants.len() + functions.len();
                    if total == 0 {
                        break;
                    }
                    let slot = m % total;
                    if slot < constants.len() {
                        terms.push(GroundedTerm::constant(constants[slot]));
                    } else {
                        let f = functions[slot - constants.len()];
                        let diag = 1 + ((m / total) as u32);
                        terms.push(uniform(f, diag));
                    }
                    m += 1;
                }
            }
        }

        terms.truncate(limit);
        terms
    }
}
