//! relidx entry point — CLI wiring and config-driven computation.

use std::path::Path;
use std::process;

use relidx::calc::aggregate::{self, AggregationResult};
use relidx::calc::duration::DurationPolicy;
use relidx::calc::types::{FeederRecord, TotalPolicy};
use relidx::config::DatasetConfig;
use relidx::io::export::export_csv;
use relidx::io::import::read_records;

/// Parsed CLI arguments.
struct CliArgs {
    dataset_path: Option<String>,
    preset: Option<String>,
    records_path: Option<String>,
    duration_policy: Option<DurationPolicy>,
    total_policy: Option<TotalPolicy>,
    report_out: Option<String>,
    json: bool,
}

fn print_help() {
    eprintln!("relidx — SAIFI/SAIDI feeder reliability index calculator");
    eprintln!();
    eprintln!("Usage: relidx [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dataset <path>           Load dataset and policies from TOML file");
    eprintln!("  --preset <name>            Use a built-in preset (baseline, table_sum)");
    eprintln!("  --records <path>           Read feeder rows from CSV");
    eprintln!("                             (name,customers,interruptions,duration_hours)");
    eprintln!("  --duration-policy <p>      direct | mathematical");
    eprintln!("  --total-policy <p>         raw-sum | truncated-row-sum | numerator-sum");
    eprintln!("  --report-out <path>        Export the contribution table to CSV");
    eprintln!("  --json                     Print the result as JSON instead of a table");
    eprintln!("  --help                     Show this help message");
    eprintln!();
    eprintln!("If no --dataset, --preset, or --records is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        dataset_path: None,
        preset: None,
        records_path: None,
        duration_policy: None,
        total_policy: None,
        report_out: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--dataset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --dataset requires a path argument");
                    process::exit(1);
                }
                cli.dataset_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--records" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --records requires a path argument");
                    process::exit(1);
                }
                cli.records_path = Some(args[i].clone());
            }
            "--duration-policy" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --duration-policy requires a value");
                    process::exit(1);
                }
                match DurationPolicy::from_str_opt(&args[i]) {
                    Some(p) => cli.duration_policy = Some(p),
                    None => {
                        eprintln!(
                            "error: --duration-policy must be \"direct\" or \"mathematical\", \
                             got \"{}\"",
                            args[i]
                        );
                        process::exit(1);
                    }
                }
            }
            "--total-policy" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --total-policy requires a value");
                    process::exit(1);
                }
                match TotalPolicy::from_str_opt(&args[i]) {
                    Some(p) => cli.total_policy = Some(p),
                    None => {
                        eprintln!(
                            "error: --total-policy must be \"raw-sum\", \"truncated-row-sum\", \
                             or \"numerator-sum\", got \"{}\"",
                            args[i]
                        );
                        process::exit(1);
                    }
                }
            }
            "--report-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --report-out requires a path argument");
                    process::exit(1);
                }
                cli.report_out = Some(args[i].clone());
            }
            "--json" => {
                cli.json = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.dataset_path.is_some() && cli.records_path.is_some() {
        eprintln!("error: --dataset and --records are mutually exclusive");
        process::exit(1);
    }

    cli
}

/// Resolves records and policies from the CLI sources, CLI policy flags
/// overriding whatever the dataset selects.
fn resolve_inputs(cli: &CliArgs) -> (Vec<FeederRecord>, DurationPolicy, TotalPolicy) {
    if let Some(ref path) = cli.records_path {
        let records = match read_records(Path::new(path)) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        };
        let duration = cli.duration_policy.unwrap_or(DurationPolicy::DirectDecimal);
        let total = cli.total_policy.unwrap_or(TotalPolicy::RawSum);
        return (records, duration, total);
    }

    let config = if let Some(ref path) = cli.dataset_path {
        match DatasetConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match DatasetConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        DatasetConfig::baseline()
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let duration = cli.duration_policy.unwrap_or(config.policy.duration);
    let total = cli.total_policy.unwrap_or(config.policy.total);
    (config.to_records(), duration, total)
}

fn print_json(result: &AggregationResult) {
    match serde_json::to_string_pretty(result) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("error: failed to serialize result: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = parse_args();
    let (records, duration_policy, total_policy) = resolve_inputs(&cli);

    let result = match aggregate::compute(&records, duration_policy, total_policy) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if cli.json {
        print_json(&result);
    } else {
        println!("{result}");
    }

    if let Some(ref path) = cli.report_out {
        if let Err(e) = export_csv(&result, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Report written to {path}");
    }
}
