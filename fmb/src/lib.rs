/*!
A finite model builder for many-sorted first-order logic with equality.

Given a flattened, variable-normalised clause set and its sorted signature,
this crate searches over increasing domain-size vectors for a size at which
the clause set's propositional encoding is satisfiable, and reads a finite
model back out of the satisfying assignment. The search itself never
touches a SAT solver's internals — every call is made through
[oracle::SatOracle], implemented here against the vendored [otter_sat]
solver.

```rust
# use fmb::builder::parse::parse_str;
# use fmb::config::Config;
# use fmb::context::FmbContext;
# use fmb::oracle::OtterSatOracle;
# use fmb::procedures::enumerate::{ContourEnumerator, EnumerationStrategy};
# use fmb::reports::MainLoopResult;
# use std::collections::HashMap;
let source = "
sort person min 1 max 4 monotonic false
predicate friend 2 person person
clause vars x person lits +pred friend x x
";
let (problem, signature) = parse_str(source).unwrap();
let oracle = Box::new(OtterSatOracle::new());
let mut context = FmbContext::new(Config::default(), signature, oracle).unwrap();
let mut enumerator = ContourEnumerator::new(HashMap::new(), 1);

match fmb::driver::run(&mut context, &problem, &mut enumerator) {
    MainLoopResult::Satisfiable(_model) => {}
    other => panic!("expected a model, got {other:?}"),
}
```
*/

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod driver;
pub mod misc;
pub mod oracle;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
