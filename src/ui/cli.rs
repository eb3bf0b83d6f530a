// src/ui/cli.rs

use clap::Parser;
use std::path::PathBuf;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Day number; the new directory is "day" plus the number padded to two digits
    pub day: u64,

    /// Template directory to copy [default: _template]
    #[clap(short = 'T', long)]
    pub template: Option<PathBuf>,

    /// Token replaced with the day name inside every copied file [default: dayNN]
    #[clap(short = 'p', long)]
    pub placeholder: Option<String>,

    /// Template entries to skip, comma-separated globs (e.g. "target/,**/*.log")
    #[clap(short = 'e', long = "exclude", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Directory the template and the new day are resolved against
    #[clap(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Show what would be created without touching the filesystem
    #[clap(long)]
    pub dry_run: bool,

    /// Print the run report as JSON
    #[clap(long)]
    pub json: bool,

    /// Print the created tree after the summary
    #[clap(long)]
    pub tree: bool,

    /// Log every planned and created entry to stderr
    #[clap(short, long)]
    pub verbose: bool,
}
