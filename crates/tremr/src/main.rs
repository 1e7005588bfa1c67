mod cli;
mod commands;
mod lock;

use clap::Parser;
use cli::{Cli, Commands};
use tremr_store::Paths;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let paths = match cli.data_dir {
        Some(dir) => Paths::with_data_dir(dir),
        None => Paths::new()?,
    };

    match cli.command {
        Commands::Run { mock } => commands::run::run(&paths, mock.as_deref()).await,
        Commands::Check { mock } => commands::check::run(&paths, mock.as_deref()).await,
        Commands::Connection => commands::connection::run(&paths).await,
        Commands::Init(args) => commands::init::run(&paths, &args),
        Commands::Status => commands::status::run(&paths),
        Commands::Version => commands::version::run(),
    }
}
