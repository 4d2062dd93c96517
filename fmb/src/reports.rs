/*!
What the driver produces (§6, "Produced"): a [MainLoopResult], plus the
small intermediate reports passed between phases.
*/

use crate::structures::interpretation::Interpretation;
use crate::types::err::ErrorKind;

/// The terminal outcome of a run of [crate::driver::run] (§4.6, §7).
#[derive(Clone, Debug)]
pub enum MainLoopResult {
    /// A finite model was found.
    Satisfiable(Interpretation),

    /// No finite model exists (the enumerator is complete and exhausted,
    /// or the empty clause was derived during flattening).
    Refutation,

    /// The enumerator was exhausted but is not known to be complete; a
    /// finite model may still exist outside the region explored.
    RefutationNotFound,

    /// The input was rejected before any SAT solver was instantiated.
    Inappropriate(crate::types::err::InappropriateReason),

    /// The configured deadline elapsed between phases.
    TimeLimit,

    /// An unrecoverable error (SAT id overflow with no alternative, a
    /// solver-reported failure, ...).
    GaveUp(ErrorKind),
}
