/*!
A minimal textual format for a flattened, variable-normalised problem, used
by the CLI and integration tests in place of the out-of-scope
clausification/sort-inference pipeline (§6).
*/

pub mod parse;
