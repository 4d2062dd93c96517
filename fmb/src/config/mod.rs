/*!
Configuration of a context (§6's "Configuration options" table).

Every option is a [ConfigOption], bounded by a `min`/`max` and a
[DriverState](crate::context::DriverState) past which it may no longer be
changed — mirroring the vendored SAT backend's own configuration module.
*/

mod config_option;
pub use config_option::{ConfigOption, ConfigOptionError};

use crate::context::DriverState;
use crate::db::marker::MarkerMode;
use crate::db::problem::WidgetOrder;
use crate::types::DomainValue;
use std::time::Duration;

/// `enumerationStrategy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EnumerationStrategyKind {
    Contour,
    Sbmeam,
    Smt,
}

impl EnumerationStrategyKind {
    pub fn marker_mode(self) -> MarkerMode {
        match self {
            EnumerationStrategyKind::Contour => MarkerMode::Contour,
            EnumerationStrategyKind::Sbmeam => MarkerMode::Sbmeam,
            EnumerationStrategyKind::Smt => MarkerMode::Smt,
        }
    }
}

/// `symbolOrder`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SymbolOrder {
    Occurrence,
    Usage,
    PreprocessedUsage,
}

/// `adjustSorts`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AdjustSorts {
    Off,
    Predicate,
    Function,
}

/// The primary configuration structure, threaded through
/// [FmbContext](crate::context::FmbContext).
#[derive(Clone, Debug)]
pub struct Config {
    pub enumeration_strategy: ConfigOption<EnumerationStrategyKind>,

    /// The initial candidate size applied uniformly to every distinct
    /// sort at `init` (`startSize`); per-sort overrides are applied by the
    /// (out-of-scope) preprocessing pass before the signature ever reaches
    /// this crate.
    pub default_start_size: ConfigOption<DomainValue>,

    pub symmetry_ratio: ConfigOption<f64>,
    pub size_weight_ratio: ConfigOption<u32>,
    pub widget_order: ConfigOption<WidgetOrder>,
    pub symbol_order: ConfigOption<SymbolOrder>,
    pub detect_sort_bounds: ConfigOption<bool>,
    pub adjust_sorts: ConfigOption<AdjustSorts>,
    pub keep_sbeam_generators: ConfigOption<bool>,
    pub random_traversals: ConfigOption<bool>,

    /// The bound used by the Mode B′ fallback search (§4.6, Mode B′);
    /// not named in the original option table, added since the internal
    /// bounded search needs a termination bound.
    pub smt_search_bound: ConfigOption<u32>,

    /// The monotonic deadline checked between phases (§5).
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enumeration_strategy: ConfigOption {
                name: "enumeration_strategy",
                min: EnumerationStrategyKind::Contour,
                max: EnumerationStrategyKind::Smt,
                max_state: DriverState::Initial,
                value: EnumerationStrategyKind::Contour,
            },

            default_start_size: ConfigOption {
                name: "start_size",
                min: 1,
                max: DomainValue::MAX,
                max_state: DriverState::Initial,
                value: 1,
            },

            symmetry_ratio: ConfigOption {
                name: "symmetry_ratio",
                min: 0.0,
                max: 1.0,
                max_state: DriverState::Initial,
                value: 1.0,
            },

            size_weight_ratio: ConfigOption {
                name: "size_weight_ratio",
                min: 1,
                max: 1_000,
                max_state: DriverState::EncodeAndSolve,
                value: 1,
            },

            widget_order: ConfigOption {
                name: "widget_order",
                min: WidgetOrder::FunctionFirst,
                max: WidgetOrder::Diagonal,
                max_state: DriverState::Initial,
                value: WidgetOrder::Diagonal,
            },

            symbol_order: ConfigOption {
                name: "symbol_order",
                min: SymbolOrder::Occurrence,
                max: SymbolOrder::PreprocessedUsage,
                max_state: DriverState::Initial,
                value: SymbolOrder::Occurrence,
            },

            detect_sort_bounds: ConfigOption {
                name: "detect_sort_bounds",
                min: false,
                max: true,
                max_state: DriverState::Initial,
                value: true,
            },

            adjust_sorts: ConfigOption {
                name: "adjust_sorts",
                min: AdjustSorts::Off,
                max: AdjustSorts::Function,
                max_state: DriverState::Initial,
                value: AdjustSorts::Off,
            },

            keep_sbeam_generators: ConfigOption {
                name: "keep_sbeam_generators",
                min: false,
                max: true,
                max_state: DriverState::EncodeAndSolve,
                value: true,
            },

            random_traversals: ConfigOption {
                name: "random_traversals",
                min: false,
                max: true,
                max_state: DriverState::EncodeAndSolve,
                value: false,
            },

            smt_search_bound: ConfigOption {
                name: "smt_search_bound",
                min: 1,
                max: 10_000,
                max_state: DriverState::EncodeAndSolve,
                value: 64,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::ZERO,
                max: Duration::from_secs(u64::MAX / 2),
                max_state: DriverState::Initial,
                value: Duration::from_secs(60),
            },
        }
    }
}
