//! CLI argument definitions for fsc2osz.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fsc2osz")]
#[command(about = "Convert a fluXis chart (.fsc) into an osu!mania package (.osz)", version)]
pub struct Args {
    /// Path to the .fsc chart
    #[arg(value_name = "INPUT", env = "FSC2OSZ_INPUT")]
    pub input: PathBuf,

    /// Directory to write the .osz package to
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "FSC2OSZ_OUTPUT_DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,
}
