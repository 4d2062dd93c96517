/*!
Per-epoch databases rebuilt by [crate::context::FmbContext::reset]: the
variable layout ([offsets]), the marker-assumption scheme ([marker]), and
the read-only problem/signature view ([problem]).
*/

pub mod marker;
pub mod offsets;
pub mod problem;
