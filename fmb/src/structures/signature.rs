//! Functions and predicates: arities, signature arrays, and deletion.

use crate::types::{FunctionId, PredicateId, SourceSort};

/// A function symbol: `arity` argument sorts followed by one result sort.
#[derive(Clone, Debug)]
pub struct FunctionSymbol {
    pub name: String,
    pub arity: u32,

    /// Length `arity + 1`: argument sorts, then the result sort.
    pub signature: Vec<SourceSort>,

    /// Deleted symbols are excluded from encoding and recovered at
    /// extraction time from `definition`.
    pub deleted: bool,

    /// How often the symbol occurs in the (clausified) problem; used by
    /// `symbolOrder = usage` / `preprocessedUsage`.
    pub usage_count: u32,

    /// A stored defining unit/literal, present only for deleted symbols.
    pub definition: Option<crate::structures::clause::FlatClause>,
}

impl FunctionSymbol {
    pub fn result_sort(&self) -> SourceSort {
        self.signature[self.arity as usize]
    }

    pub fn arg_sorts(&self) -> &[SourceSort] {
        &self.signature[..self.arity as usize]
    }
}

/// A predicate symbol: `arity` argument sorts, no result slot.
#[derive(Clone, Debug)]
pub struct PredicateSymbol {
    pub name: String,
    pub arity: u32,
    pub signature: Vec<SourceSort>,
    pub deleted: bool,
    pub usage_count: u32,
    pub definition: Option<crate::structures::clause::FlatClause>,

    /// Partially-deleted predicates keep some clauses live; fully-deleted
    /// ones are entirely recovered from `definition`.
    pub partially_deleted: bool,

    /// A predicate known to be trivially true or false everywhere.
    pub trivial: Option<bool>,
}

impl PredicateSymbol {
    pub fn arg_sorts(&self) -> &[SourceSort] {
        &self.signature
    }
}

/// The read-only signature consumed from preprocessing (§6).
#[derive(Clone, Debug, Default)]
pub struct Signature {
    pub functions: Vec<FunctionSymbol>,
    pub predicates: Vec<PredicateSymbol>,
}

impl Signature {
    pub fn function(&self, f: FunctionId) -> &FunctionSymbol {
        &self.functions[f as usize]
    }

    pub fn predicate(&self, p: PredicateId) -> &PredicateSymbol {
        &self.predicates[p as usize]
    }

    /// Non-deleted functions in signature order, with their id.
    pub fn live_functions(&self) -> impl Iterator<Item = (FunctionId, &FunctionSymbol)> {
        self.functions
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.deleted)
            .map(|(i, f)| (i as FunctionId, f))
    }

    /// Non-deleted predicates in signature order, with their id.
    pub fn live_predicates(&self) -> impl Iterator<Item = (PredicateId, &PredicateSymbol)> {
        self.predicates
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.deleted)
            .map(|(i, p)| (i as PredicateId, p))
    }
}
