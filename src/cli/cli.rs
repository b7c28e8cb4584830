use clap::Parser;

use crate::application::data::LogLevel;

/// Lists the contents of a path across every Time Machine snapshot found on
/// the mounted backup volumes, reporting only the snapshots where the
/// contents changed.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Locations to look up, resolved against the working directory
    pub locations: Vec<String>,

    /// Display hidden files
    #[clap(long, short)]
    pub all: bool,

    /// Name of the computer
    #[clap(long, short)]
    pub computer: Option<String>,

    /// Name of the time machine disk to use
    #[clap(long, short)]
    pub disk: Option<String>,

    /// Display the results in a single column
    #[clap(short = 'l')]
    pub single_column: bool,

    /// Display computer name and disk name before listing files
    #[clap(long, short)]
    pub verbose: bool,

    #[clap(long, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
