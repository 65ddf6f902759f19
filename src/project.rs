//! Project configuration: the validated inputs of one invocation.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::cli::Args;
use crate::constants::{MAX_PROJECT_NUMBER, PROJECT_NUMBER_WIDTH};
use crate::error::{Error, Result};
use crate::validate::Identifier;

/// Numeric project id in `0..=999_999`.
///
/// Displays as a zero-padded six digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectNumber(u32);

impl ProjectNumber {
    /// Range-checks `value`.
    ///
    /// # Errors
    /// * `Error::RangeError` if `value` is greater than 999999
    pub fn new(value: u64) -> Result<Self> {
        match u32::try_from(value) {
            Ok(n) if n <= MAX_PROJECT_NUMBER => Ok(Self(n)),
            _ => Err(Error::RangeError(format!(
                "project number {} is not in the range [0, {}]",
                value, MAX_PROJECT_NUMBER
            ))),
        }
    }

    /// Non-deterministic project number, used when none was supplied.
    pub fn random() -> Self {
        Self(fastrand::u32(0..=MAX_PROJECT_NUMBER))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for ProjectNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<u64>().map_err(|_| {
            Error::RangeError(format!("project number '{}' is not a non-negative integer", s))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for ProjectNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = PROJECT_NUMBER_WIDTH)
    }
}

/// Everything the scaffolding run needs to know, fixed after argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub project_name: Identifier,
    pub exec_name: Identifier,
    pub project_number: ProjectNumber,
    /// Report actions without touching the filesystem
    pub dry_run: bool,
    /// Skip the interactive confirmation before renaming
    pub no_prompt: bool,
    /// Whether the initializer should be removed afterwards. Carried only;
    /// removal is left to packaging.
    pub self_destruct: bool,
}

impl ProjectConfig {
    /// Validates raw names and an optional project number. Flags start at
    /// their command-line defaults.
    ///
    /// # Errors
    /// * `Error::ValidationError` if either name is not an identifier
    /// * `Error::RangeError` if `project_number` is greater than 999999
    pub fn new(project_name: &str, exec_name: &str, project_number: Option<u64>) -> Result<Self> {
        let project_number = match project_number {
            Some(value) => ProjectNumber::new(value)?,
            None => ProjectNumber::random(),
        };

        Ok(Self {
            project_name: Identifier::parse(project_name)?,
            exec_name: Identifier::parse(exec_name)?,
            project_number,
            dry_run: false,
            no_prompt: false,
            self_destruct: true,
        })
    }

    /// Builds the configuration from parsed arguments, drawing a random
    /// project number if none was given.
    pub fn from_args(args: &Args) -> Self {
        let project_number = match args.num {
            Some(number) => number,
            None => {
                let number = ProjectNumber::random();
                debug!("No project number supplied, generated {}", number);
                number
            }
        };

        Self {
            project_name: args.project_name.clone(),
            exec_name: args.exec_name.clone(),
            project_number,
            dry_run: args.dry_run,
            no_prompt: args.no_prompt,
            self_destruct: !args.no_self_destruct,
        }
    }

    /// One-line summary printed at the end of a run.
    pub fn summary(&self) -> String {
        format!(
            "Initiated project with project id {} name {} and executable name {}",
            self.project_number, self.project_name, self.exec_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_is_in_range() {
        for _ in 0..1000 {
            assert!(ProjectNumber::random().value() <= MAX_PROJECT_NUMBER);
        }
    }

    #[test]
    fn test_display_width() {
        assert_eq!(ProjectNumber(0).to_string(), "000000");
        assert_eq!(ProjectNumber(999_999).to_string(), "999999");
    }
}
