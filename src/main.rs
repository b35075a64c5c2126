use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use rootbar::config::{AppConfig, DisplayBackend};
use rootbar::core::{DisplayBridge, ShutdownSignal, StdoutBridge, UpdateManager, XRootBridge};
use rootbar::sources;
use std::path::PathBuf;

/// rootbar - status line generator for dwm-style window managers
#[derive(Parser, Debug)]
#[command(name = "rootbar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Write the status line to stdout instead of the X root window
    #[arg(long = "stdout")]
    stdout: bool,

    /// Render a single line to stdout and exit
    #[arg(long = "once")]
    once: bool,

    /// Print the default configuration as JSON and exit
    #[arg(long = "print-default-config")]
    print_default_config: bool,

    /// Configuration file to load instead of the default location
    #[arg(value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.print_default_config {
        let json = serde_json::to_string_pretty(&AppConfig::default())?;
        println!("{}", json);
        return Ok(());
    }

    info!("Starting rootbar v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config_file {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    info!(
        "Loaded {} modules, interval {}ms",
        config.modules.len(),
        config.interval_ms
    );

    let modules = sources::build_all(&config.modules);
    if modules.is_empty() {
        warn!("No modules configured, the status line will be empty");
    }
    let mut manager = UpdateManager::new(modules, &config.delimiter, config.interval());

    if cli.once {
        manager.update_once(&mut StdoutBridge::new())?;
        return Ok(());
    }

    let mut bridge: Box<dyn DisplayBridge> =
        if cli.stdout || config.display.backend == DisplayBackend::Stdout {
            Box::new(StdoutBridge::new())
        } else {
            let bridge = XRootBridge::open(config.display.name.as_deref())
                .context("Cannot open display")?;
            info!("Writing status to root window on {}", bridge.display());
            Box::new(bridge)
        };

    let shutdown = ShutdownSignal::new();
    shutdown
        .install()
        .context("Failed to install signal handlers")?;

    manager.run(bridge.as_mut(), &shutdown)?;
    Ok(())
}
