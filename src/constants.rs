//! Common constants used throughout init-project.

/// Version-control marker directory that must exist in the working directory
pub const GIT_DIR: &str = ".git";

/// Ignore file read for user-supplied ignore rules
pub const IGNORE_FILE: &str = ".gitignore";

/// Rules that are always applied before the ignore file's own lines
pub const BUILTIN_PATTERNS: [&str; 4] = [".git", ".vscode", ".gitignore", "CLI11.hpp"];

/// Maximum identifier length, in characters
pub const MAX_IDENTIFIER_LEN: usize = 60;

/// Largest accepted project number (inclusive)
pub const MAX_PROJECT_NUMBER: u32 = 999_999;

/// Width of the zero-padded project number
pub const PROJECT_NUMBER_WIDTH: usize = 6;

/// Placeholder replaced by the project name in file and directory names
pub const PROJECT_NAME_TOKEN: &str = "<PROJECT_NAME>";

/// Placeholder replaced by the executable name
pub const EXEC_TOKEN: &str = "<EXEC>";

/// Placeholder replaced by the zero-padded project number
pub const PROJECT_ID_TOKEN: &str = "__PROJID__";
