/*!
The abstract elements of an epoch: sorts, symbols, flat clauses, grounded
terms, and the interpretation read back from a model.

None of the types here know how to talk to a SAT backend — that's
[crate::db] and [crate::procedures]. This module is the (read-mostly) data
a single (size-vector, reset) epoch is built from and, in the case of
[interpretation], the data an epoch produces.
*/

pub mod clause;
pub mod interpretation;
pub mod signature;
pub mod sort;
pub mod term;
