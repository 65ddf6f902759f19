//! User interaction before mutating the working directory.

use dialoguer::Confirm;

use crate::error::{Error, Result};

/// Asks a yes/no question, defaulting to no.
///
/// # Arguments
/// * `message` - Question shown to the user
/// * `skip` - Answer yes without asking (`--no-prompt`)
///
/// # Errors
/// * `Error::PromptError` if the terminal interaction fails
pub fn confirm(message: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))
}
