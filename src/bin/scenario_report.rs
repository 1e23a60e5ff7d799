//! Scenario analysis report runner.
//!
//! Loads the breach-scenario table, fits the risk regression, evaluates it
//! on the held-out split, and prints the coefficient summary plus the three
//! canonical counterfactual scenarios.
//!
//! Usage:
//!   cargo run --bin scenario_report -- [options]
//!
//! Options:
//!   --data <path>           Input CSV (default: data/breach_scenarios.csv)
//!   --seed <n>              Split seed (default: 42)
//!   --train-fraction <f>    Training fraction in (0, 1) (default: 0.8)
//!   --verbosity <level>     silent, warning, info, debug (default: info)
//!   --help                  Show this help

use std::path::PathBuf;

use riskcast::logger::Verbosity;
use riskcast::pipeline::{self, PipelineParams};
use riskcast::split::SplitParams;

struct Args {
    data: PathBuf,
    seed: u64,
    train_fraction: f64,
    verbosity: Verbosity,
}

fn parse_args() -> Args {
    let mut data = PathBuf::from("data/breach_scenarios.csv");
    let mut seed = 42u64;
    let mut train_fraction = 0.8f64;
    let mut verbosity = Verbosity::default();

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--data" => data = PathBuf::from(it.next().expect("--data path")),
            "--seed" => seed = it.next().expect("--seed value").parse().expect("--seed expects an integer"),
            "--train-fraction" => {
                train_fraction = it
                    .next()
                    .expect("--train-fraction value")
                    .parse()
                    .expect("--train-fraction expects a number")
            }
            "--verbosity" => {
                let val = it.next().expect("--verbosity value");
                verbosity = Verbosity::parse(&val)
                    .unwrap_or_else(|| panic!("invalid verbosity: {val} (expected: silent, warning, info, debug)"));
            }
            "--help" => {
                eprintln!(
                    "scenario_report\n\n  --data <path>          Input CSV (default: data/breach_scenarios.csv)\n  --seed <n>             Split seed (default: 42)\n  --train-fraction <f>   Training fraction in (0, 1) (default: 0.8)\n  --verbosity <level>    silent, warning, info, debug (default: info)"
                );
                std::process::exit(0);
            }
            other => panic!("unknown arg: {other}"),
        }
    }

    Args {
        data,
        seed,
        train_fraction,
        verbosity,
    }
}

fn main() {
    let args = parse_args();

    let params = PipelineParams {
        data_path: args.data,
        split: SplitParams {
            train_fraction: args.train_fraction,
            seed: args.seed,
        },
        verbosity: args.verbosity,
    };

    let report = match pipeline::run(&params) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!();
    println!("=== Risk Regression Report ===");
    println!(
        "{} rows ({} train / {} test, seed {})",
        report.n_rows, report.n_train, report.n_test, args.seed
    );

    println!();
    println!("=== Coefficient Summary ===");
    for (name, value) in &report.coefficients {
        println!("{name:<42} {value:>10.4}");
    }

    println!();
    println!("=== Held-Out Evaluation ===");
    for metric in &report.metrics {
        println!("{:<10} {:>10.4}", metric.name, metric.value);
    }

    println!();
    println!("=== Scenario Predictions (Severity=High, Public_Outrage=80) ===");
    for scenario in &report.scenarios {
        println!(
            "{:<20} {:>8.2}",
            scenario.input.response.as_str(),
            scenario.predicted_risk
        );
    }
}
