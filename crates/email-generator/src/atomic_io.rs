//! Whole-file replacement through a sibling temp file.
//!
//! The history file is rewritten in full after every append. Writing to a
//! hidden temp file and renaming it over the target means a crash leaves
//! either the previous history or the new one on disk.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::Utf8Path;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::HistoryError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `file_name` inside `dir` with `contents`.
///
/// `display_path` is only used in error reports.
///
/// # Errors
///
/// Returns [`HistoryError::Write`] if the temp file cannot be written or
/// renamed over the target.
pub(crate) fn replace_file(
    dir: &Dir,
    file_name: &str,
    display_path: &Utf8Path,
    contents: &str,
) -> Result<(), HistoryError> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{file_name}.tmp.{}.{counter}", std::process::id());
    let write_error = |err: io::Error| HistoryError::Write {
        path: display_path.to_path_buf(),
        message: err.to_string(),
    };

    if let Err(err) = write_temp(dir, &tmp_name, contents) {
        discard_temp(dir, &tmp_name);
        return Err(write_error(err));
    }
    if let Err(err) = rename_over(dir, &tmp_name, file_name) {
        discard_temp(dir, &tmp_name);
        return Err(write_error(err));
    }
    sync_dir(dir);
    Ok(())
}

fn write_temp(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn rename_over(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows refuses to rename onto an existing file.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_over(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn discard_temp(dir: &Dir, tmp_name: &str) {
    if dir.remove_file(tmp_name).is_err() {
        // The temp file may never have been created.
    }
}

fn sync_dir(dir: &Dir) {
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Directory sync is best effort.
    }
}
