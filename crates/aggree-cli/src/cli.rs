//! Command-line arguments for the `aggree` binary.

use std::path::PathBuf;

use aggree_core::Region;
use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Parser)]
#[command(
    name = "aggree",
    version,
    about = "Aggree: terminal console for agri value-chain operations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file (default: <config dir>/aggree/config.toml).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory that dashboard exports are written to.
    #[arg(long = "export-dir", value_name = "DIR", global = true)]
    pub export_dir: Option<PathBuf>,

    /// Log file for the console (default: <data dir>/aggree/aggree.log).
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable logging entirely.
    #[arg(long = "no-log", global = true)]
    pub no_log: bool,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a dashboard export as JSON without starting the console.
    Export(ExportArgs),

    /// List the registered views and their hotkeys.
    Views,
}

#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Region to export (all, kenya, nigeria, tanzania, uganda).
    #[arg(long, default_value = "all", value_parser = parse_region)]
    pub region: Region,

    /// Search query to embed in the export.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Also write the file into the export directory.
    #[arg(long)]
    pub write: bool,
}

fn parse_region(raw: &str) -> Result<Region, String> {
    Region::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = Region::ALL.iter().map(|region| region.as_str()).collect();
        format!("unknown region '{raw}' (expected one of: {})", known.join(", "))
    })
}
