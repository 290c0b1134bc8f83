use mediashelf::{
    MediaShelfError,
    cli::{Cli, Commands},
    commands::{self, sort::SortParams},
    config::ShelfConfig,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, MediaShelfError>;

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Main entry point for the mediashelf application
///
/// Parses command-line arguments, loads configuration and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `MediaShelfError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => ShelfConfig::load_from(path)?,
        None => ShelfConfig::load()?,
    };

    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Tags { names } => commands::tags(names, quiet),
        Commands::Cloud { records, limit } => commands::cloud(records, *limit, quiet)?,
        Commands::Sort {
            records,
            kind,
            by,
            reverse,
            category,
            keywords,
        } => {
            let params = SortParams {
                records,
                kind: *kind,
                by: *by,
                reverse: *reverse,
                category: *category,
                keywords,
            };
            commands::sort(&params, &config, quiet)?;
        }
        Commands::Options { kind } => commands::options(*kind, quiet),
    }

    Ok(())
}
