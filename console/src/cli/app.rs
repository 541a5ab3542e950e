use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "loam",
    version,
    about = "Loam Console - scaffold module code and inspect loam sites",
    long_about = "The loam console generates boilerplate source files (forms, plugins) inside a module's structure and inspects an installation's system, database, theme and configuration state. Run 'loam list' to see the available commands."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a console configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Site root the commands operate on
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Command identity (e.g. site:status) followed by its options and
    /// arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
