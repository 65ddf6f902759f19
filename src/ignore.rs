//! Ignore rule handling for the project walk.
//!
//! Rules come from a fixed builtin set plus every non-empty, non-comment line
//! of the working directory's `.gitignore`. Each line is an *unanchored regex*
//! searched for anywhere in the candidate path. This is not gitignore glob
//! semantics: `build/` matches `build/output` and also `src/build/x`, and
//! `.git` matches `.github` too. Lines that are not valid regexes, such as
//! `*.log`, are matched as literal substrings instead.

use std::{fs::read_to_string, path::Path};

use log::{debug, warn};
use regex::Regex;

pub use crate::constants::{BUILTIN_PATTERNS, IGNORE_FILE};
use crate::error::{Error, Result};

/// One compiled ignore pattern.
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    pattern: String,
    regex: Regex,
}

impl IgnoreRule {
    /// Compiles `pattern`, falling back to a literal match when it is not a
    /// valid regex.
    ///
    /// # Errors
    /// * `Error::IgnoreRuleError` if even the escaped literal cannot be compiled
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => {
                warn!("Ignore rule '{}' is not a valid regex, matching it literally: {}", pattern, e);
                Regex::new(&regex::escape(pattern)).map_err(|e| {
                    Error::IgnoreRuleError(format!("failed to compile '{}': {}", pattern, e))
                })?
            }
        };

        Ok(Self { pattern: pattern.to_string(), regex })
    }

    /// The rule text as written.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True if the pattern occurs anywhere in `path`.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Ordered rule set: builtins first, then ignore file lines in file order.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRules {
    /// First rule that matches `path`, if any.
    pub fn matching_rule(&self, path: &str) -> Option<&IgnoreRule> {
        self.rules.iter().find(|rule| rule.is_match(path))
    }

    /// True on the first rule that matches; remaining rules are not tested.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.matching_rule(path).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IgnoreRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Whether an ignore file line produces a rule. Empty lines and lines
/// starting with `#` do not.
pub fn is_rule_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#')
}

/// Compiles `builtins` followed by every rule line of `lines`.
///
/// # Errors
/// * `Error::IgnoreRuleError` if a pattern cannot be compiled
pub fn build_rules<'a, I>(builtins: &[&str], lines: I) -> Result<IgnoreRules>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rules = builtins
        .iter()
        .map(|pattern| IgnoreRule::new(pattern))
        .collect::<Result<Vec<_>>>()?;

    for line in lines.into_iter().filter(|line| is_rule_line(line)) {
        debug!("Adding ignore rule '{}'", line);
        rules.push(IgnoreRule::new(line)?);
    }

    Ok(IgnoreRules { rules })
}

/// Reads the ignore file at `ignore_path` and builds the full rule set.
///
/// # Errors
/// * `Error::PreconditionError` if the file cannot be read
/// * `Error::IgnoreRuleError` if a pattern cannot be compiled
pub fn read_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<IgnoreRules> {
    let ignore_path = ignore_path.as_ref();
    let contents = read_to_string(ignore_path).map_err(|e| {
        Error::PreconditionError(format!(
            "failed to open {} file '{}': {}",
            IGNORE_FILE,
            ignore_path.display(),
            e
        ))
    })?;

    build_rules(&BUILTIN_PATTERNS, contents.lines())
}
