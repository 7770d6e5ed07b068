use std::env;
use std::path::Path;
use std::time::Duration;

use crate::pipeline::{self, PipelineConfig};
use crate::validate::validate_artifacts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("run") => Some(Command::Run),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Run) => handle_run(),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: bps-harvester <run|validate>");
            2
        }
    }
}

fn handle_run() -> i32 {
    let config = config_from_env();

    println!("Starting BPS data harvest...");
    match pipeline::run(&config) {
        Ok(report) => {
            println!(
                "Harvest complete: {} datasets, {} tables, boundary saved: {}",
                report.datasets, report.tables_written, report.boundary_saved
            );
            0
        }
        Err(err) => {
            eprintln!("harvest failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let data_dir = args.get(2).map(String::as_str).unwrap_or("data");

    let report = validate_artifacts(Path::new(data_dir));
    for diag in &report.diagnostics {
        eprintln!("[{}] {}: {}", diag.severity, diag.context, diag.message);
    }
    if report.has_errors() {
        eprintln!(
            "validation failed: {} diagnostic(s)",
            report.diagnostics.len()
        );
        1
    } else {
        println!("validation passed: {data_dir}");
        0
    }
}

/// Env overrides so the binary stays flag-free: BPS_DATA_DIR,
/// BPS_BOUNDARY_URL, BPS_SEED, BPS_PAUSE_MS.
fn config_from_env() -> PipelineConfig {
    let data_dir = env::var("BPS_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let mut config = PipelineConfig::new(data_dir);
    if let Ok(url) = env::var("BPS_BOUNDARY_URL") {
        config.boundary_url = url;
    }
    if let Some(seed) = env::var("BPS_SEED").ok().and_then(|s| s.parse().ok()) {
        config.seed = seed;
    }
    if let Some(ms) = env::var("BPS_PAUSE_MS").ok().and_then(|s| s.parse().ok()) {
        config.pause = Duration::from_millis(ms);
    }
    config
}
