//! Staff Registry - console employee records with department salaries.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use staff_registry as app;

use app::auth::AdminGate;
use app::config::{AppConfig, ConfigLoadResult};
use app::directory::Directory;
use app::logging;
use app::seed;
use app::session::Session;

/// Console staff registry.
#[derive(Parser)]
#[command(name = "staff-registry")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match (cli.config, cli.dev) {
        (Some(path), _) => path,
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    let load_result = AppConfig::try_load(&config_path);
    let config = match &load_result {
        ConfigLoadResult::Loaded(config) => config.clone(),
        ConfigLoadResult::Missing => AppConfig::default(),
        ConfigLoadResult::Invalid(e) => {
            eprintln!("Warning: {e}. Using default settings.");
            AppConfig::default()
        }
    };

    // Logs go to a file; stdout belongs to the menu.
    let _guard = logging::init(&config.logging);

    tracing::info!("Staff Registry starting...");
    tracing::info!("Config path: {:?}", config_path);
    match load_result {
        ConfigLoadResult::Loaded(_) => tracing::info!("Config loaded successfully"),
        ConfigLoadResult::Missing => tracing::info!("Config missing, using defaults"),
        ConfigLoadResult::Invalid(e) => tracing::warn!("Config invalid: {}", e),
    }

    let mut directory = Directory::new();
    let ids = seed::preload(&mut directory);

    println!("Preloaded employees (password: {}):", seed::DEMO_PASSWORD);
    for id in &ids {
        if let Ok(employee) = directory.lookup_for_display(id, seed::DEMO_PASSWORD) {
            println!("  {} - {} ({})", id, employee.full_name(), employee.department());
        }
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), directory, AdminGate::from(config.admin));
    session.run().context("Console I/O failed")?;

    Ok(())
}
