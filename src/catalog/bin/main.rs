use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info, Level};
use shelf::catalog::controller::CatalogController;
use shelf::catalog::factory;
use shelf::core::controller::AppState;
use shelf::core::domain::{Configuration, DEFAULT_STORE};
use shelf::core::repository::RepositoryStore;
use shelf::utils::logging::setup_tracing;

/// Personal library catalog kept in a json file.
#[derive(Debug, Parser)]
#[command(name = "shelf", version)]
struct Cli {
    /// Path of the catalog file
    #[arg(long, env = "SHELF_STORE", default_value = DEFAULT_STORE)]
    store: PathBuf,

    /// Keep the catalog in memory only; nothing is read or written
    #[arg(long)]
    ephemeral: bool,

    /// Log at info level instead of warn
    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as json
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(if cli.verbose { Level::INFO } else { Level::WARN }, cli.json_logs);

    let store = if cli.ephemeral { RepositoryStore::Memory } else { RepositoryStore::JsonFile };
    let state = AppState::new(Configuration::new(&cli.store), store);
    let svc = factory::create_catalog_service(&state.config, state.store);

    // a store that cannot be read is never overwritten
    let mut catalog = match svc.load_catalog().await {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(error = %err, "could not load catalog");
            eprintln!("Could not load {}: {}", state.config.store_path.display(), err);
            return ExitCode::FAILURE;
        }
    };
    info!(books = catalog.len(), persistent = state.store.persistent(), "catalog ready");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    match CatalogController::new(svc.as_ref()).run(&mut catalog, stdin, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "menu stopped");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
