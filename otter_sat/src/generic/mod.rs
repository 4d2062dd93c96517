//! Generic helpers shared across the solver that are not specific to any one database.

pub mod index_heap;
pub mod luby;
pub mod minimal_pcg;
pub mod random;
