//! Convert command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use fsc2osz_core::{ConvertOptions, convert};

/// Convert `input` and write the package into `output_dir`
pub fn run(input: &Path, output_dir: &Path) -> Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");
    eprintln!("fsc2osz {}", current_version);

    let options = ConvertOptions::new(input, output_dir);
    let report = convert(&options)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    eprintln!(
        "Packed {} entries ({} skipped)",
        report.entries.len(),
        report.skipped.len()
    );

    // stdout carries only the package path so scripts can pick it up
    println!("{}", report.archive_path.display());
    Ok(())
}
