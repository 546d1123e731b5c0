//! Generator configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::history::DEFAULT_HISTORY_FILE;

/// Settings for an interactive session.
///
/// Values come from `--history-path`/`--seed` flags or the
/// `EMAIL_GENERATOR_HISTORY_PATH`/`EMAIL_GENERATOR_SEED` environment
/// variables. With nothing set, history lives in `email_history.json` in the
/// working directory and generation is randomly seeded.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMAIL_GENERATOR")]
pub struct GeneratorSettings {
    /// History file, relative to the working directory unless absolute.
    #[ortho_config(default = PathBuf::from(DEFAULT_HISTORY_FILE))]
    pub history_path: PathBuf,
    /// Optional RNG seed for a reproducible session.
    pub seed: Option<u64>,
}
