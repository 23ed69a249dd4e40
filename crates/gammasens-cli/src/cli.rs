use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "gammasens CLI - A command-line interface for estimating the background count rate and continuum sensitivity of shielded hard X-ray and gamma-ray instruments.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate background and sensitivity curves for one or more mission files.
    Run(RunArgs),
    /// Inspect the built-in detector materials.
    Materials(MaterialsArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    // --- Core Arguments ---
    /// Path to the calibration table in CSV format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub calibration: PathBuf,

    /// Path to a mission description file in TOML format. Can be given
    /// multiple times to evaluate several missions in one invocation.
    #[arg(short, long, required = true, value_name = "PATH", num_args(1..))]
    pub mission: Vec<PathBuf>,

    /// Directory where the derived curve files are written.
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub output_dir: PathBuf,

    // --- Mission Overrides ---
    /// Override the shield thickness (cm) from the mission file.
    #[arg(long, value_name = "FLOAT")]
    pub shield_thickness: Option<f64>,

    /// Override the observation time (s) from the mission file.
    #[arg(long, value_name = "FLOAT")]
    pub obstime: Option<f64>,

    /// Override the detection significance from the mission file.
    #[arg(long, value_name = "FLOAT")]
    pub sigma: Option<f64>,
}

/// Arguments for the `materials` subcommand.
#[derive(Args, Debug)]
pub struct MaterialsArgs {
    #[command(subcommand)]
    pub command: MaterialsCommands,
}

/// Available commands for material inspection.
#[derive(Subcommand, Debug)]
pub enum MaterialsCommands {
    /// List the built-in detector materials and their densities.
    List,
}
