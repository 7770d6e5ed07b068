//! Validate harvested artifacts: catalog shape, table rows/bounds, boundary
//! JSON. Run: cargo run --bin validate_artifacts [data_dir]
//!
//! Exits 1 if any error-severity diagnostic is found.

use std::path::Path;

use bps_harvester::validate::validate_artifacts;

fn main() {
    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let data_dir = Path::new(&data_dir);

    if !data_dir.is_dir() {
        eprintln!("Data directory not found: {}", data_dir.display());
        eprintln!("Run the harvest first: cargo run -- run");
        std::process::exit(1);
    }

    let report = validate_artifacts(data_dir);
    let mut errors = 0;
    for diag in &report.diagnostics {
        eprintln!("[{}] {}: {}", diag.severity, diag.context, diag.message);
        if diag.severity == bps_harvester::validate::ValidationSeverity::Error {
            errors += 1;
        }
    }

    println!(
        "Validated {}: {} diagnostic(s), {} error(s)",
        data_dir.display(),
        report.diagnostics.len(),
        errors
    );
    if errors > 0 {
        std::process::exit(1);
    }
}
