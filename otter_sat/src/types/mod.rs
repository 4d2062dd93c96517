//! Library-wide types.

pub mod err;
