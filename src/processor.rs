//! Walks the working directory, classifies every entry against the ignore
//! rules and plans placeholder renames.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ignore::IgnoreRules;
use crate::placeholder::Placeholders;

/// What happens to a non-ignored path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    /// Path is only reported
    Report,
    /// File name carries a placeholder and is renamed to `target`
    Rename { target: PathBuf },
}

/// Outcome of processing one non-ignored entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub source: PathBuf,
    /// `source` relative to the walk root, `/`-separated
    pub relative: String,
    pub operation: FileOperation,
}

/// Converts `path` to the string ignore rules are matched against: relative
/// to `root`, components joined with `/`.
pub fn relative_path_string(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|e| Error::ProcessError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}

pub struct Processor<'a> {
    root: PathBuf,
    rules: &'a IgnoreRules,
    placeholders: &'a Placeholders,
}

impl<'a> Processor<'a> {
    pub fn new<P: AsRef<Path>>(
        root: P,
        rules: &'a IgnoreRules,
        placeholders: &'a Placeholders,
    ) -> Self {
        Self { root: root.as_ref().to_path_buf(), rules, placeholders }
    }

    /// Classifies a single entry under the root.
    ///
    /// # Returns
    /// * `Ok(None)` if an ignore rule matches the relative path
    /// * `Ok(Some(result))` otherwise, with a rename planned when the file
    ///   name carries a placeholder token
    pub fn process<P: AsRef<Path>>(&self, path: P) -> Result<Option<ProcessResult>> {
        let path = path.as_ref();
        let relative = relative_path_string(&self.root, path)?;

        if let Some(rule) = self.rules.matching_rule(&relative) {
            trace!("Skipping '{}', matched ignore rule '{}'", relative, rule.pattern());
            return Ok(None);
        }

        // Names that are not valid UTF-8 are reported but never renamed.
        let renamed = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.placeholders.substitute(name));

        let operation = match (renamed, path.parent()) {
            (Some(new_name), Some(parent)) => {
                FileOperation::Rename { target: parent.join(new_name) }
            }
            _ => FileOperation::Report,
        };

        Ok(Some(ProcessResult { source: path.to_path_buf(), relative, operation }))
    }

    /// Walks the whole tree below the root, depth-first in file name order.
    ///
    /// Ignored directories are not pruned: their descendants are visited and
    /// classified on their own.
    pub fn scan(&self) -> Result<Vec<ProcessResult>> {
        debug!("Scanning '{}'", self.root.display());
        let mut results = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::WalkError(e.to_string()))?;
            if let Some(result) = self.process(entry.path())? {
                results.push(result);
            }
        }

        Ok(results)
    }
}

/// Renames returned by [`Processor::scan`], in the order they must be applied:
/// children before their parents.
pub fn planned_renames(results: &[ProcessResult]) -> Vec<(&Path, &Path)> {
    results
        .iter()
        .rev()
        .filter_map(|result| match &result.operation {
            FileOperation::Rename { target } => Some((result.source.as_path(), target.as_path())),
            FileOperation::Report => None,
        })
        .collect()
}

/// Checks that no rename would overwrite an existing path or another
/// rename's target.
fn check_renames(renames: &[(&Path, &Path)]) -> Result<()> {
    let mut targets = HashSet::new();

    for (source, target) in renames {
        if target.exists() {
            return Err(Error::ProcessError {
                path: source.display().to_string(),
                reason: format!("target '{}' already exists", target.display()),
            });
        }
        if !targets.insert(*target) {
            return Err(Error::ProcessError {
                path: source.display().to_string(),
                reason: format!("target '{}' is planned more than once", target.display()),
            });
        }
    }

    Ok(())
}

/// Applies every planned rename and returns how many were performed.
///
/// All targets are checked before the first rename, so a conflict leaves the
/// tree untouched.
///
/// # Errors
/// * `Error::ProcessError` if a target already exists, two renames share a
///   target, or a rename fails
pub fn apply(results: &[ProcessResult]) -> Result<usize> {
    let renames = planned_renames(results);
    check_renames(&renames)?;

    for (source, target) in &renames {
        fs::rename(source, target).map_err(|e| Error::ProcessError {
            path: source.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!("Renamed '{}' to '{}'", source.display(), target.display());
    }

    Ok(renames.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_string() {
        let root = Path::new("/work/template");
        let path = root.join("src").join("main.cpp");
        assert_eq!(relative_path_string(root, &path).unwrap(), "src/main.cpp");
    }

    #[test]
    fn test_relative_path_outside_root() {
        let result = relative_path_string(Path::new("/work"), Path::new("/elsewhere/file"));
        assert!(matches!(result, Err(Error::ProcessError { .. })));
    }
}
