use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use mockem_core::{Catalog, Category, build_dependency_report, validate_catalog};
use mockem_server::ServerError;
use mockem_server::config::{LogFormat, ServerConfig};
use mockem_server::logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("core error: {0}")]
    Core(#[from] mockem_core::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mockem", version, about = "MockEm mock business data server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Print the dependency order of every schema in a category.
    Dependencies(DependenciesArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// TOML configuration file.
    #[arg(long, env = "MOCKEM_CONFIG")]
    config: Option<PathBuf>,
    /// Interface to bind, overrides the configuration file.
    #[arg(long)]
    host: Option<String>,
    /// Port to bind, overrides the configuration file.
    #[arg(long)]
    port: Option<u16>,
    /// Log output: text or json.
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[derive(Args, Debug)]
struct DependenciesArgs {
    /// Category slug such as `sales-crm` or `supply-chain`.
    category: Category,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => run_serve(args).await,
        Command::Dependencies(args) => run_dependencies(args),
    }
}

async fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let mut config = ServerConfig::load(args.config.as_deref()).map_err(ServerError::from)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }

    init_logging(&config.logging).map_err(ServerError::from)?;
    match args.config.as_deref() {
        Some(path) => info!(path = %path.display(), "configuration loaded"),
        None => info!("no configuration file, using defaults and environment"),
    }
    config.warn_on_risky_settings();

    mockem_server::run(config).await?;
    Ok(())
}

fn run_dependencies(args: DependenciesArgs) -> Result<(), CliError> {
    let catalog = Catalog::builtin();
    validate_catalog(&catalog)?;
    let report = build_dependency_report(&catalog, args.category)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
