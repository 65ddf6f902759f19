//! Identifier validation for project and executable names.
//!
//! An identifier is 1 to 60 characters long, starts with a lowercase ASCII
//! letter and contains only lowercase letters, digits, `_` and `-`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::MAX_IDENTIFIER_LEN;

/// Reason an identifier was rejected. Only the first failing rule is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("key must be between 1 and {max} characters long, got {len}", max = MAX_IDENTIFIER_LEN)]
    Length { len: usize },

    #[error("first character of key must be [a-z], got '{ch}'")]
    FirstChar { ch: char },

    #[error("all characters in key must be a-z, 0-9, - or _, got '{ch}'")]
    CharClass { ch: char },
}

fn is_identifier_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '_' | '-')
}

/// Checks `s` against the identifier rules in order: length, first
/// character, then every character.
///
/// # Examples
/// ```
/// use init_project::validate::{validate, ValidationError};
///
/// assert!(validate("my-proj_1").is_ok());
/// assert_eq!(validate("1abc"), Err(ValidationError::FirstChar { ch: '1' }));
/// assert_eq!(validate(""), Err(ValidationError::Length { len: 0 }));
/// ```
pub fn validate(s: &str) -> Result<(), ValidationError> {
    let len = s.chars().count();
    if len == 0 || len > MAX_IDENTIFIER_LEN {
        return Err(ValidationError::Length { len });
    }

    // Length check guarantees a first character.
    if let Some(ch) = s.chars().next() {
        if !ch.is_ascii_lowercase() {
            return Err(ValidationError::FirstChar { ch });
        }
    }

    match s.chars().find(|ch| !is_identifier_char(*ch)) {
        Some(ch) => Err(ValidationError::CharClass { ch }),
        None => Ok(()),
    }
}

/// A validated project or executable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validates `s` and wraps it.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        validate(s)?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
