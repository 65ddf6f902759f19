//! Placeholder tokens in file and directory names.
//!
//! Only names are rewritten; file contents are left as they are.

use crate::constants::{EXEC_TOKEN, PROJECT_ID_TOKEN, PROJECT_NAME_TOKEN};
use crate::project::ProjectConfig;

/// Token to value pairs applied to a file name, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    replacements: Vec<(&'static str, String)>,
}

impl Placeholders {
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            replacements: vec![
                (PROJECT_ID_TOKEN, config.project_number.to_string()),
                (PROJECT_NAME_TOKEN, config.project_name.to_string()),
                (EXEC_TOKEN, config.exec_name.to_string()),
            ],
        }
    }

    /// Returns the rewritten name, or `None` when `name` carries no token.
    pub fn substitute(&self, name: &str) -> Option<String> {
        if !self.replacements.iter().any(|(token, _)| name.contains(token)) {
            return None;
        }

        let renamed = self
            .replacements
            .iter()
            .fold(name.to_string(), |acc, (token, value)| acc.replace(token, value));
        Some(renamed)
    }
}
