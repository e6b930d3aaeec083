mod cli;
mod effects;
mod logging;
mod ui;

use std::path::PathBuf;

use aggree_core::export::export_file_name;
use aggree_core::export::write_export;
use aggree_core::export::ExportPayload;
use aggree_core::router::VIEW_REGISTRY;
use aggree_core::Config;
use aggree_core::ConsoleState;
use aggree_exec::TaskDriver;
use aggree_exec::UploadDelayPolicy;
use chrono::Utc;
use clap::Parser;

use crate::cli::Cli;
use crate::cli::Command;
use crate::cli::ExportArgs;
use crate::effects::EffectRunner;
use crate::logging::init_logging;
use crate::logging::LogConfig;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_config = dirs::config_dir().map(|dir| dir.join("aggree").join("config.toml"));
    let config = Config::load(cli.config.as_deref(), default_config.as_deref())?;
    let export_dir = resolve_export_dir(&cli, &config);

    match cli.command {
        Some(Command::Export(ref args)) => {
            init_cli_logging(&cli)?;
            print_export(args, &export_dir)
        }
        Some(Command::Views) => {
            print_views();
            Ok(())
        }
        None => {
            if !cli.no_log {
                let log_file = cli.log_file.clone().or_else(default_log_file);
                init_logging(&LogConfig::from_verbosity(cli.verbose).with_log_file(log_file))?;
            }
            tracing::info!(
                export_dir = %export_dir.display(),
                login_latency_ms = config.session.login_latency_ms,
                "console starting"
            );

            let state = ConsoleState::new(config.console_options());
            let driver = TaskDriver::simulated(UploadDelayPolicy {
                min_ms: config.upload.min_delay_ms,
                max_ms: config.upload.max_delay_ms,
            });
            ui::run(state, EffectRunner::new(driver, export_dir))
        }
    }
}

fn init_cli_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.no_log {
        return Ok(());
    }
    let config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    init_logging(&config)?;
    Ok(())
}

/// `--export-dir`, then the config file, then the user's download folder.
fn resolve_export_dir(cli: &Cli, config: &Config) -> PathBuf {
    cli.export_dir
        .clone()
        .or_else(|| config.export.dir.clone())
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("aggree").join("aggree.log"))
}

fn print_export(args: &ExportArgs, export_dir: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let payload = ExportPayload::new(args.region, &args.search, now);
    println!("{}", payload.to_json_pretty()?);

    if args.write {
        let path = write_export(export_dir, &export_file_name(now.timestamp_millis()), &payload)?;
        tracing::info!(path = %path.display(), "export written");
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn print_views() {
    println!("{:<4} {:<14} {:<20} TITLE", "KEY", "ID", "NAV");
    for spec in VIEW_REGISTRY.iter() {
        let nav = if spec.in_sidebar { spec.nav_label } else { "-" };
        println!(
            "{:<4} {:<14} {:<20} {}",
            spec.hotkey,
            spec.id.as_str(),
            nav,
            spec.title
        );
    }
}
