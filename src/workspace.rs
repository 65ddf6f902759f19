//! Precondition checks on the working directory before any traversal.

use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{GIT_DIR, IGNORE_FILE};
use crate::error::{Error, Result};

/// Checks that `root` is a git checkout with an ignore file and returns the
/// ignore file path. Nothing is read or written beyond existence checks.
///
/// # Errors
/// * `Error::PreconditionError` if `.git` or `.gitignore` is missing
pub fn check_workspace<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
    let root = root.as_ref();
    let git_dir = root.join(GIT_DIR);
    let ignore_path = root.join(IGNORE_FILE);

    if !git_dir.exists() || !ignore_path.exists() {
        return Err(Error::PreconditionError(format!(
            "must be executed in a directory with git set up and a {} file (checked '{}')",
            IGNORE_FILE,
            root.display()
        )));
    }

    debug!("Workspace '{}' looks like a template checkout", root.display());
    Ok(ignore_path)
}
