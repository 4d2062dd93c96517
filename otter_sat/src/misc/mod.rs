//! Miscellaneous items that do not belong to any one database or procedure.

pub mod log;
