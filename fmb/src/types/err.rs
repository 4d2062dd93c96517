/*!
Error types used in the core.

Names of the error enums overlap with the corresponding module: an
[EncodeError] happens during [encode](crate::procedures::encode), a
[EnumerateError] happens during [enumerate](crate::procedures::enumerate),
and so on. [ErrorKind] is the union used by the driver to decide a final
[MainLoopResult](crate::reports::MainLoopResult).
*/

/// A union of varied error kinds, returned by helpers internal to the core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An error while (re)building the variable layout.
    Encode(EncodeError),

    /// An error from the enumeration strategy.
    Enumerate(EnumerateError),

    /// An error reading a flattened problem.
    Build(BuildError),

    /// An error reported by the SAT backend.
    Sat(SatError),

    /// An error extracting a model from a satisfying assignment.
    Extract(ExtractError),

    /// The input is not appropriate for the core (interpreted theories, known-infinite domains, ...).
    Inappropriate(InappropriateReason),

    /// A refutation (the empty clause) was discovered ahead of any SAT call, e.g. during flattening.
    RefutedDuringBuild,
}

/// Why an input was rejected before a SAT solver was ever instantiated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InappropriateReason {
    /// The problem uses interpreted (e.g. arithmetic) operations.
    InterpretedOperations,

    /// The problem is known to only have infinite models.
    KnownInfiniteDomain,

    /// A prior transformation of the problem did not complete.
    IncompleteTransformation,
}

impl From<InappropriateReason> for ErrorKind {
    fn from(e: InappropriateReason) -> Self {
        ErrorKind::Inappropriate(e)
    }
}

/// Errors while computing the variable layout ([reset](crate::db::offsets::OffsetTable::reset)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// A multiplicative overflow was found while sizing a function or predicate block.
    Overflow,

    /// The SAT backend could not supply any more atoms.
    AtomsExhausted,
}

impl From<EncodeError> for ErrorKind {
    fn from(e: EncodeError) -> Self {
        ErrorKind::Encode(e)
    }
}

/// Errors from an [EnumerationStrategy](crate::procedures::enumerate::EnumerationStrategy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumerateError {
    /// No sort may grow further: every candidate sort sits at its maximum.
    NoGrowableSort,

    /// The generator heap (Mode B) is empty: no further size vector satisfies the retained no-goods.
    GeneratorsExhausted,

    /// The bounded integer search used by the SMT-backed variant could not find a model under its bound.
    BoundedSearchExhausted,
}

impl From<EnumerateError> for ErrorKind {
    fn from(e: EnumerateError) -> Self {
        ErrorKind::Enumerate(e)
    }
}

/// Errors while reading a flattened-problem file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Some unspecific problem at a given line.
    Line(usize),

    /// A sort name was used before it was declared.
    UnknownSort(String),

    /// A symbol name was used before it was declared.
    UnknownSymbol(String),

    /// A clause referenced a variable with no entry in its variable-sort map.
    UnknownVariable(String),

    /// A required section header (`sorts`, `functions`, `predicates`, `clauses`) was missing or malformed.
    MissingSection(&'static str),

    /// No file could be read at the given path.
    NoFile,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors surfaced by the SAT backend adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SatError {
    /// The backend could not accommodate a request for a fresh variable.
    VariablesExhausted,

    /// The backend reported an internal error while solving.
    SolverFailure,

    /// The backend ran out of memory.
    OutOfMemory,
}

impl From<SatError> for ErrorKind {
    fn from(e: SatError) -> Self {
        ErrorKind::Sat(e)
    }
}

/// Errors while extracting a model from a satisfying assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// A function was found not to have (exactly) one true result variable for some argument tuple.
    NotFunctional(crate::types::FunctionId),

    /// A deleted symbol's stored definition could not be evaluated under the current interpretation.
    UndefinedAtPoint,
}

impl From<ExtractError> for ErrorKind {
    fn from(e: ExtractError) -> Self {
        ErrorKind::Extract(e)
    }
}
