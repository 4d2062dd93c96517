use fmb::config::{Config, EnumerationStrategyKind};
use fmb::context::DriverState;
use fmb::db::problem::WidgetOrder;

/// Configuration options relevant only to the CLI, not to the core.
#[derive(Default)]
pub struct CliConfig {
    /// Whether to print the model, if one is found.
    pub model: bool,

    /// Whether to print partially-recovered (deleted, unevaluable) symbols.
    pub partial: bool,
}

pub enum ConfigError {
    NonSpecific(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Parses CLI arguments (every argument but the last, which is the problem
/// file path) into a [Config] and a [CliConfig].
///
/// If an unrecognised argument or invalid option is found a message is
/// returned and the process should exit without running the core.
pub(super) fn parse_args(
    args: &[String],
    cli_options: &mut CliConfig,
) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split('=');
        match split.next() {
            Some("--model") => {
                cli_options.model = true;
            }

            Some("--partial") => {
                cli_options.partial = true;
            }

            Some("--strategy") => {
                let kind = match split.next() {
                    Some("contour") => EnumerationStrategyKind::Contour,
                    Some("sbmeam") => EnumerationStrategyKind::Sbmeam,
                    Some("smt") => EnumerationStrategyKind::Smt,
                    _ => return Err(ConfigError::NonSpecific("--strategy requires contour, sbmeam, or smt")),
                };
                cfg.enumeration_strategy
                    .set(kind, DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--strategy is invalid at this point"))?;
            }

            Some("--start") => {
                let Some(request) = split.next() else {
                    return Err(ConfigError::NonSpecific("--start requires a value"));
                };
                let Ok(value) = request.parse::<u32>() else {
                    return Err(ConfigError::NonSpecific("--start requires an integer value"));
                };
                cfg.default_start_size
                    .set(value, DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--start is out of range"))?;
            }

            Some("--symmetry-ratio") => {
                let Some(request) = split.next() else {
                    return Err(ConfigError::NonSpecific("--symmetry-ratio requires a value"));
                };
                let Ok(value) = request.parse::<f64>() else {
                    return Err(ConfigError::NonSpecific("--symmetry-ratio requires a number"));
                };
                cfg.symmetry_ratio
                    .set(value, DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--symmetry-ratio must be between 0 and 1"))?;
            }

            Some("--weight-ratio") => {
                let Some(request) = split.next() else {
                    return Err(ConfigError::NonSpecific("--weight-ratio requires a value"));
                };
                let Ok(value) = request.parse::<u32>() else {
                    return Err(ConfigError::NonSpecific("--weight-ratio requires an integer value"));
                };
                cfg.size_weight_ratio
                    .set(value, DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--weight-ratio is out of range"))?;
            }

            Some("--widget") => {
                let order = match split.next() {
                    Some("function-first") => WidgetOrder::FunctionFirst,
                    Some("argument-first") => WidgetOrder::ArgumentFirst,
                    Some("diagonal") => WidgetOrder::Diagonal,
                    _ => {
                        return Err(ConfigError::NonSpecific(
                            "--widget requires function-first, argument-first, or diagonal",
                        ))
                    }
                };
                cfg.widget_order
                    .set(order, DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--widget is invalid at this point"))?;
            }

            Some("--time") => {
                let Some(request) = split.next() else {
                    return Err(ConfigError::NonSpecific("--time requires a value, in seconds"));
                };
                let Ok(seconds) = request.parse::<u64>() else {
                    return Err(ConfigError::NonSpecific("--time requires an integer number of seconds"));
                };
                cfg.time_limit
                    .set(std::time::Duration::from_secs(seconds), DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--time is out of range"))?;
            }

            Some("--smt-bound") => {
                let Some(request) = split.next() else {
                    return Err(ConfigError::NonSpecific("--smt-bound requires a value"));
                };
                let Ok(value) = request.parse::<u32>() else {
                    return Err(ConfigError::NonSpecific("--smt-bound requires an integer value"));
                };
                cfg.smt_search_bound
                    .set(value, DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--smt-bound is out of range"))?;
            }

            Some("--keep-generators") => {
                cfg.keep_sbeam_generators
                    .set(true, DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--keep-generators is invalid at this point"))?;
            }

            Some("--no-keep-generators") => {
                cfg.keep_sbeam_generators
                    .set(false, DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--no-keep-generators is invalid at this point"))?;
            }

            Some("--random") => {
                cfg.random_traversals
                    .set(true, DriverState::Initial)
                    .map_err(|_| ConfigError::NonSpecific("--random is invalid at this point"))?;
            }

            Some(other) if other.starts_with("--") => {
                return Err(ConfigError::NonSpecific("unrecognised option"));
            }

            _ => continue 'arg_examination,
        }
    }

    Ok(cfg)
}
