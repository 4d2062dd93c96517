/*!
Miscellaneous items related to [logging](log).

Calls to the `log` macros are made throughout the crate. These are intended
to provide useful information for extending the crate and/or fixing issues.

Note, no log implementation is provided. For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [FmbContext::reset](crate::context::FmbContext::reset).
    pub const RESET: &str = "reset";

    /// Logs related to [encode](crate::procedures::encode).
    pub const ENCODE: &str = "encode";

    /// Logs related to [axioms](crate::procedures::axioms).
    pub const AXIOMS: &str = "axioms";

    /// Logs related to [enumerate](crate::procedures::enumerate).
    pub const ENUMERATE: &str = "enumerate";

    /// Logs related to [extract](crate::procedures::extract).
    pub const EXTRACT: &str = "extract";

    /// Logs related to driver state transitions.
    pub const DRIVER: &str = "driver";

    /// Logs related to reading a flattened-problem file.
    pub const BUILDER: &str = "builder";
}
