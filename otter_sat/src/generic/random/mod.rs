//! Sources of randomness.

mod minisat;

pub use super::minimal_pcg::MinimalPCG32;
pub use minisat::MiniRNG;
