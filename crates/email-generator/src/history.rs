//! Persisted, append-only generation history.
//!
//! The store is loaded once when opened and rewritten in full after every
//! append. Record order is generation order, both in memory and on disk.

use std::io;
use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info};

use crate::atomic_io::replace_file;
use crate::catalogue::{Culture, Gender};
use crate::error::HistoryError;
use crate::record::EmailRecord;

/// Default history file name, resolved against the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "email_history.json";

const INDENT: &[u8] = b"    ";

/// The session's history together with its backing file.
///
/// # Example
///
/// ```no_run
/// use camino::Utf8Path;
/// use email_generator::{Culture, Gender, HistoryStore};
///
/// let store = HistoryStore::open(Utf8Path::new("email_history.json"))?;
/// for email in store.search("jo", Gender::Male, Culture::Generic) {
///     println!("{email}");
/// }
/// # Ok::<(), email_generator::HistoryError>(())
/// ```
#[derive(Debug)]
pub struct HistoryStore {
    dir: Dir,
    file_name: String,
    path: Utf8PathBuf,
    records: Vec<EmailRecord>,
}

impl HistoryStore {
    /// Opens the history at `path`, loading existing records.
    ///
    /// A missing file yields an empty history; the file is created on the
    /// first append. A symlinked history file is followed, and later writes
    /// replace the link target.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if `path` names no file, its directory cannot
    /// be opened, or an existing file cannot be read or parsed.
    pub fn open(path: &Utf8Path) -> Result<Self, HistoryError> {
        if path.file_name().is_none() {
            return Err(HistoryError::InvalidPath {
                path: path.to_string(),
            });
        }
        let target = resolve_link(path);
        let file_name = target.file_name().ok_or_else(|| HistoryError::InvalidPath {
            path: path.to_string(),
        })?;
        let parent = target
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
            HistoryError::Read {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        Self::open_in(dir, file_name, path)
    }

    /// Opens the history at a path that may not be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidPath`] for non-UTF-8 paths, otherwise
    /// behaves like [`HistoryStore::open`].
    pub fn open_std(path: &Path) -> Result<Self, HistoryError> {
        let utf8 = Utf8Path::from_path(path).ok_or_else(|| HistoryError::InvalidPath {
            path: path.display().to_string(),
        })?;
        Self::open(utf8)
    }

    fn open_in(dir: Dir, file_name: &str, path: &Utf8Path) -> Result<Self, HistoryError> {
        let records = match dir.read_to_string(file_name) {
            Ok(contents) => parse_records(&contents)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(HistoryError::Read {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
            }
        };
        info!(path = %path, records = records.len(), "history loaded");
        Ok(Self {
            dir,
            file_name: file_name.to_owned(),
            path: path.to_path_buf(),
            records,
        })
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns every record in generation order.
    #[must_use]
    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    /// Returns `true` if nothing has been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends `record` and rewrites the whole backing file.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Write`] if the file cannot be replaced. The
    /// record stays in memory either way.
    pub fn append(&mut self, record: EmailRecord) -> Result<(), HistoryError> {
        debug!(email = record.email(), "history record appended");
        self.records.push(record);
        self.persist()
    }

    /// Emails whose lowercase form starts with the lowercased `prefix` and
    /// whose gender and culture match exactly, in history order.
    #[must_use]
    pub fn search(&self, prefix: &str, gender: Gender, culture: Culture) -> Vec<&str> {
        let needle = prefix.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.gender() == gender && record.culture() == culture)
            .filter(|record| record.email().to_lowercase().starts_with(&needle))
            .map(EmailRecord::email)
            .collect()
    }

    /// Listing lines for every record, in generation order.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        self.records.iter().map(EmailRecord::history_line).collect()
    }

    fn persist(&self) -> Result<(), HistoryError> {
        let contents = render_records(&self.records).map_err(|err| HistoryError::Write {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        replace_file(&self.dir, &self.file_name, &self.path, &contents)?;
        debug!(path = %self.path, records = self.records.len(), "history persisted");
        Ok(())
    }
}

/// Resolves `path` to the file a symlink points at.
///
/// Paths that are not links, or whose target cannot be resolved yet, are
/// returned unchanged.
fn resolve_link(path: &Utf8Path) -> Utf8PathBuf {
    let is_link = path
        .symlink_metadata()
        .is_ok_and(|meta| meta.file_type().is_symlink());
    if !is_link {
        return path.to_path_buf();
    }
    path.canonicalize_utf8().unwrap_or_else(|err| {
        debug!(path = %path, error = %err, "history link not resolved");
        path.to_path_buf()
    })
}

fn parse_records(contents: &str) -> Result<Vec<EmailRecord>, HistoryError> {
    serde_json::from_str(contents).map_err(|err| HistoryError::Parse {
        message: err.to_string(),
    })
}

/// Serialises `records` as a JSON array indented by four spaces.
fn render_records(records: &[EmailRecord]) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|err| serde_json::Error::io(io::Error::other(err)))
}
