/*!
The stateless per-epoch procedures: grounding enumeration, clause and axiom
emission, size-vector enumeration strategies, and model extraction.

Everything here is a pure function of its arguments (plus, for
[enumerate], the mutable no-good state an [enumerate::EnumerationStrategy]
owns) — none of it holds a [SatOracle](crate::oracle::SatOracle) itself.
The caller, [crate::context] and [crate::driver], owns the oracle and the
epoch's [OffsetTable](crate::db::offsets::OffsetTable) /
[MarkerScheme](crate::db::marker::MarkerScheme) and threads them through.
*/

pub mod axioms;
pub mod encode;
pub mod enumerate;
pub mod extract;
pub mod odometer;
