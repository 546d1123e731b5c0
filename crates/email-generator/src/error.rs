//! Error types for the email-generator crate.
//!
//! Input validation failures are recoverable and reported back to the user;
//! catalogue and history failures are not, and surface at the binary
//! boundary. All enums follow the project's `thiserror` conventions.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Rejected user input.
///
/// Both variants are recoverable: the menu prints the message and prompts
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The value is not one of the allowed choices.
    #[error("Invalid choice. Choose from: {allowed}")]
    InvalidChoice {
        /// The rejected value as typed.
        value: String,
        /// Comma-separated list of allowed values.
        allowed: String,
    },

    /// The count is not a number, or falls outside the accepted range.
    #[error("Invalid number. Please enter a number between {min} and {max}.")]
    InvalidCount {
        /// The rejected raw input.
        raw: String,
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
    },
}

/// Errors raised while building a name catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// A name or domain pool has no entries to choose from.
    #[error("catalogue pool '{pool}' is empty")]
    EmptyPool {
        /// Human-readable pool identifier, e.g. `generic/female first names`.
        pool: String,
    },
}

/// Errors that can occur when loading or persisting the history file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The history path is not valid UTF-8 or does not name a file.
    #[error("invalid history path '{path}'")]
    InvalidPath {
        /// Lossy rendering of the rejected path.
        path: String,
    },

    /// The history file exists but could not be read.
    #[error("failed to read history file at '{path}': {message}")]
    Read {
        /// Path to the history file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The history file is not a JSON array of records.
    #[error("invalid history JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The history file could not be written.
    #[error("failed to write history file at '{path}': {message}")]
    Write {
        /// Path that was being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors that end the interactive menu loop.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Reading a prompt answer or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// Persisting generated records failed.
    #[error(transparent)]
    History(#[from] HistoryError),
}
