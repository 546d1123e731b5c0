//! Interactive email generator.
//!
//! Loads settings and history, then hands the terminal to
//! `email_generator::Menu`. Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use email_generator::{
    CatalogueError, EmailGenerator, GeneratorSettings, HistoryError, HistoryStore, Menu,
    MenuError, NameCatalogue,
};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "warn";

/// Failures that end the process.
#[derive(Debug, Error)]
enum AppError {
    #[error("configuration error: {message}")]
    Config { message: String },
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Menu(#[from] MenuError),
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn run() -> Result<(), AppError> {
    let settings =
        GeneratorSettings::load_from_iter(std::env::args_os()).map_err(|err| AppError::Config {
            message: err.to_string(),
        })?;
    let catalogue = NameCatalogue::builtin()?;
    let clock = Arc::new(DefaultClock);
    let mut generator = match settings.seed {
        Some(seed) => EmailGenerator::with_seed(catalogue, clock, seed),
        None => EmailGenerator::new(catalogue, clock),
    };
    let mut store = HistoryStore::open_std(&settings.history_path)?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Menu::new(&mut generator, &mut store, stdin, stdout).run()?;
    Ok(())
}
