use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{OutputFormat, PointKind};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "colorpoint")]
#[command(author, version, about = "Points, colored points and distance-based ordering")]
#[command(long_about = "Construct, compare and sort 2D points.\n\n\
    Points are written as X,Y or X,Y@COLOR (e.g. 3,4 or 1.5,-2@teal).\n\
    A spec with a negative X is written (-2,3) or placed after `--`.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid point input (non-numeric coordinate, unknown color, bad spec)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Allow an extra color before running the command (repeatable)
    #[arg(long = "add-color", value_name = "COLOR", global = true)]
    pub add_color: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Construct points and print them with their distance from the origin
    Show(ShowArgs),

    /// Sort points by distance from the origin
    Sort(SortArgs),

    /// Compare two points by distance from the origin
    Compare(CompareArgs),

    /// Distance between two allow-listed colored points
    Distance(DistanceArgs),

    /// List the allowed colors
    Colors(ColorsArgs),

    /// Generate random points
    Random(RandomArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Point specs (X,Y or X,Y@COLOR); write a negative X as `(-2,3)` or after `--`
    #[arg(required = true)]
    pub points: Vec<String>,

    /// Point type to construct
    #[arg(short, long, value_enum, default_value = "color")]
    pub kind: PointKind,
}

#[derive(Parser, Debug)]
pub struct SortArgs {
    /// Point specs (X,Y or X,Y@COLOR); write a negative X as `(-2,3)` or after `--`
    #[arg(required = true)]
    pub points: Vec<String>,

    /// Point type to construct
    #[arg(short, long, value_enum, default_value = "point")]
    pub kind: PointKind,
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// First point spec
    #[arg(allow_hyphen_values = true)]
    pub first: String,

    /// Second point spec
    #[arg(allow_hyphen_values = true)]
    pub second: String,

    /// Point type to construct
    #[arg(short, long, value_enum, default_value = "point")]
    pub kind: PointKind,
}

#[derive(Parser, Debug)]
pub struct DistanceArgs {
    /// First point spec (color defaults to `[defaults] color`)
    #[arg(allow_hyphen_values = true)]
    pub from: String,

    /// Second point spec (color defaults to `[defaults] color`)
    #[arg(allow_hyphen_values = true)]
    pub to: String,
}

#[derive(Parser, Debug)]
pub struct ColorsArgs {
    /// Show how many times each color was registered
    #[arg(long)]
    pub counts: bool,
}

#[derive(Parser, Debug)]
pub struct RandomArgs {
    /// Number of points to generate
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Coordinates fall in [-RANGE, RANGE] (overrides config)
    #[arg(long)]
    pub range: Option<i64>,

    /// Pick colors from this list, producing colored points (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Also print the points sorted by distance from the origin
    #[arg(long)]
    pub sort: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".colorpoint.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
