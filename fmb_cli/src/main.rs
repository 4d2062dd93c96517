/*!
A simple CLI interface to the library.

# Use

```sh
fmb_cli [--option(=value)]* problem.fmb
```

## Options

No configuration option is required. Of note:

- `--model` prints a found model; `--partial` also prints symbols left
  undefined by model extraction.
- `--strategy=contour|sbmeam|smt` selects the enumeration strategy (§4.5).
- `--start=N`, `--symmetry-ratio=F`, `--weight-ratio=N`, `--widget=...`,
  `--time=SECONDS`, `--smt-bound=N`, `--keep-generators`/
  `--no-keep-generators`, `--random` adjust the corresponding configuration
  option (§6).

For the full set of supported options, see the source of [parse_args].
*/

use fmb::builder::parse::parse_file;
use fmb::context::FmbContext;
use fmb::oracle::OtterSatOracle;
use fmb::procedures::enumerate::{ContourEnumerator, EnumerationStrategy, SbmeamEnumerator, SmtGuidedEnumerator};
use fmb::reports::MainLoopResult;
use std::collections::HashMap;

mod config;
use config::{CliConfig, parse_args};

mod misc;
use misc::print_model;

fn main() {
    env_logger::init();

    let mut cli_options = CliConfig::default();
    let args: Vec<String> = std::env::args().collect();

    let cfg = match parse_args(&args, &mut cli_options) {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let Some(path_string) = args.last() else {
        println!("c No problem file given.");
        std::process::exit(1);
    };

    let (problem, signature) = match parse_file(std::path::Path::new(path_string)) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("c Parse error: {e:?}");
            std::process::exit(1);
        }
    };

    let strategy = cfg.enumeration_strategy.value;
    let start_size = cfg.default_start_size.value;
    let weight_ratio = cfg.size_weight_ratio.value;
    let keep_generators = cfg.keep_sbeam_generators.value;

    let oracle = Box::new(OtterSatOracle::new());
    let mut context = match FmbContext::new(cfg, signature, oracle) {
        Ok(context) => context,
        Err(e) => {
            println!("c Setup error: {e:?}");
            std::process::exit(2);
        }
    };

    let mut contour;
    let mut sbmeam;
    let mut smt;
    let enumerator: &mut dyn EnumerationStrategy = match strategy {
        fmb::config::EnumerationStrategyKind::Contour => {
            contour = ContourEnumerator::new(HashMap::new(), weight_ratio);
            &mut contour
        }
        fmb::config::EnumerationStrategyKind::Sbmeam => {
            sbmeam = SbmeamEnumerator::new(HashMap::new(), keep_generators);
            &mut sbmeam
        }
        fmb::config::EnumerationStrategyKind::Smt => {
            smt = SmtGuidedEnumerator::new(HashMap::new(), context.config.smt_search_bound.value);
            &mut smt
        }
    };

    if start_size > 1 {
        for sort in context.signature.sorts.distinct.iter_mut() {
            let target = start_size.max(sort.min);
            sort.current = match sort.max {
                Some(max) => target.min(max),
                None => target,
            };
        }
    }

    let result = fmb::driver::run(&mut context, &problem, enumerator);

    match &result {
        MainLoopResult::Satisfiable(model) => {
            println!("s SATISFIABLE");
            if cli_options.model {
                print_model(&context.signature, model, cli_options.partial);
            }
        }
        MainLoopResult::Refutation => println!("s REFUTATION"),
        MainLoopResult::RefutationNotFound => println!("s REFUTATION_NOT_FOUND"),
        MainLoopResult::Inappropriate(reason) => println!("s INAPPROPRIATE {reason:?}"),
        MainLoopResult::TimeLimit => println!("s TIME_LIMIT"),
        MainLoopResult::GaveUp(e) => println!("s GAVE_UP {e:?}"),
    }

    std::process::exit(match result {
        MainLoopResult::Satisfiable(_) => 0,
        MainLoopResult::Refutation => 0,
        _ => 1,
    });
}
