//! ui-catalog-mcp: MCP server for React Native UI component documentation
//!
//! Serves component names, props and examples to AI assistants for lookup by
//! id, category or free-text query.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use ui_catalog_mcp::catalog::builtin;
use ui_catalog_mcp::config;
use ui_catalog_mcp::mcp::server::McpServer;

/// MCP server for React Native UI component documentation.
///
/// Exposes the component catalog as tools for lookup by id, listing by
/// category and free-text search.
#[derive(Parser, Debug)]
#[command(name = "ui-catalog-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => config_level.parse().unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the ui-catalog-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if let Some(default_path) = config::default_config_path() {
                eprintln!("\nDefault config location: {}", default_path.display());
            }
            return ExitCode::FAILURE;
        }
    };

    init_tracing(get_log_level(args.verbose, args.quiet, &cfg.logging.level));

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting ui-catalog-mcp server"
    );

    let catalog = match builtin::catalog() {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!(error = %e, "Built-in catalog is invalid");
            return ExitCode::FAILURE;
        }
    };

    for (owner, missing) in catalog.dangling_sub_components() {
        warn!(component = owner, sub_component = missing, "Sub-component reference has no record");
    }

    info!(
        components = catalog.len(),
        match_id = cfg.search.match_id,
        default_limit = cfg.search.default_limit,
        "Catalog loaded"
    );

    let mut server = McpServer::new(catalog, cfg.search);

    info!("MCP server ready, waiting for client connection...");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    match runtime.block_on(server.run()) {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
