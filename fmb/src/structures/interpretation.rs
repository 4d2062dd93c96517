//! The interpretation read back from a satisfying assignment (§4.7).

use crate::types::{DomainValue, FunctionId, PredicateId, SourceSort};
use std::collections::HashMap;

/// A finite model: the per-sort domain sizes plus an interpretation of
/// every non-deleted symbol, with deleted symbols recovered from their
/// stored definitions.
#[derive(Clone, Debug, Default)]
pub struct Interpretation {
    /// The final size of every source sort (after retracting to the
    /// smallest admissible size, for CONTOUR — see §4.7).
    pub sort_sizes: HashMap<SourceSort, DomainValue>,

    /// `functions[f][args] = result`.
    pub functions: HashMap<FunctionId, HashMap<Vec<DomainValue>, DomainValue>>,

    /// `predicates[p][args] = truth value`.
    pub predicates: HashMap<PredicateId, HashMap<Vec<DomainValue>, bool>>,

    /// Symbols whose value could not be recovered at some point (deleted
    /// symbols with an unevaluable definition, §4.7 "Model-extraction
    /// partial"). Not an error; left undefined in the printed model.
    pub partial: Vec<(FunctionId, Vec<DomainValue>)>,
}

impl Interpretation {
    pub fn function_value(&self, f: FunctionId, args: &[DomainValue]) -> Option<DomainValue> {
        self.functions.get(&f).and_then(|table| table.get(args)).copied()
    }

    pub fn predicate_value(&self, p: PredicateId, args: &[DomainValue]) -> Option<bool> {
        self.predicates.get(&p).and_then(|table| table.get(args)).copied()
    }
}
