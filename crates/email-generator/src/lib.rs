//! Synthetic email address generation with a persisted, searchable history.
//!
//! Addresses are assembled from static name tables, keyed by culture and
//! gender, and a handful of format templates. Every generated record is
//! appended to a JSON history file that is rewritten in full after each
//! append and can be searched by prefix.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Validating menu answers (choices and counts)
//! - Generating addresses for a gender and culture
//! - Persisting and reloading the generation history
//! - Prefix search over the history
//! - Driving all of the above from an interactive text menu
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use email_generator::{Culture, EmailFormat, EmailGenerator, EmailParts, Gender, NameCatalogue};
//! use mockable::DefaultClock;
//!
//! let catalogue = NameCatalogue::builtin().expect("valid tables");
//! let mut generator = EmailGenerator::with_seed(catalogue, Arc::new(DefaultClock), 7);
//! let email = generator.generate_email(Gender::Male, Culture::Italian);
//! assert!(email.contains('@'));
//!
//! let parts = EmailParts {
//!     first: "Mary",
//!     last: "Smith",
//!     domain: "gmail.com",
//!     initial: None,
//!     random_num: None,
//! };
//! assert_eq!(EmailFormat::Dotted.render(&parts), "mary.smith@gmail.com");
//! ```

mod atomic_io;
mod catalogue;
mod config;
mod error;
mod generator;
mod history;
mod menu;
mod record;
mod template;
mod validation;

pub use catalogue::{Culture, CultureNames, FirstNames, Gender, NameCatalogue, Pool};
pub use config::GeneratorSettings;
pub use error::{CatalogueError, HistoryError, InputError, MenuError};
pub use generator::EmailGenerator;
pub use history::{DEFAULT_HISTORY_FILE, HistoryStore};
pub use menu::Menu;
pub use record::{EmailRecord, TIMESTAMP_FORMAT};
pub use template::{EmailFormat, EmailParts, RANDOM_NUM_MAX, RANDOM_NUM_MIN};
pub use validation::{COUNT_MAX, COUNT_MIN, validate_choice, validate_count};
