//! Shared helpers for the integration tests in `tests/`.

use fmb::config::Config;
use fmb::context::FmbContext;
use fmb::db::problem::{Problem, SortedSignature};
use fmb::oracle::OtterSatOracle;
use fmb::procedures::enumerate::{ContourEnumerator, EnumerationStrategy};
use fmb::reports::MainLoopResult;
use std::collections::HashMap;

/// Parses `source` and runs it to completion with the CONTOUR enumerator
/// and a freshly built SAT backend.
pub fn run_source(source: &str) -> MainLoopResult {
    run_source_with(source, Config::default())
}

pub fn run_source_with(source: &str, config: Config) -> MainLoopResult {
    let (problem, signature) = fmb::builder::parse::parse_str(source).expect("parse failure");
    run(problem, signature, config)
}

pub fn run(problem: Problem, signature: SortedSignature, config: Config) -> MainLoopResult {
    let oracle = Box::new(OtterSatOracle::new());
    let mut context = FmbContext::new(config, signature, oracle).expect("context setup failure");
    let mut enumerator = ContourEnumerator::new(HashMap::new(), 1);
    fmb::driver::run(&mut context, &problem, &mut enumerator)
}

/// `run_source`, but with a small time limit so a runaway search fails the
/// test quickly instead of hanging the suite.
pub fn run_source_bounded(source: &str, seconds: u64) -> MainLoopResult {
    let mut config = Config::default();
    config
        .time_limit
        .set(std::time::Duration::from_secs(seconds), fmb::context::DriverState::Initial)
        .expect("time_limit within range");
    run_source_with(source, config)
}
