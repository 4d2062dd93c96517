/*!
Shared types used throughout the core: errors, and small integer aliases for
sorts and variables.
*/

pub mod err;

/// A source sort, as supplied by the sort inference pass.
pub type SourceSort = u32;

/// A distinct sort: the equivalence class a source sort is mapped to.
pub type DistinctSortId = u32;

/// A domain element, `1..=size(sort)`.
pub type DomainValue = u32;

/// A symbol id for a function.
pub type FunctionId = u32;

/// A symbol id for a predicate.
pub type PredicateId = u32;

/// A clause-local variable id (an index into a clause's variable-sort map).
pub type ClauseVar = u32;
