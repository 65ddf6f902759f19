//! init-project turns a freshly cloned template checkout into a named project.
//! It validates the project and executable names, walks the checkout while
//! honouring ignore rules, and renames placeholder file names.

/// Command-line interface module
pub mod cli;

/// Common constants: file names, placeholder tokens and bounds
pub mod constants;

/// Error types and handling
pub mod error;

/// Ignore rules built from builtins and the .gitignore file
pub mod ignore;

/// Placeholder substitution in file and directory names
pub mod placeholder;

/// Walk of the working directory and rename planning
pub mod processor;

/// Project number and the validated run configuration
pub mod project;

/// Confirmation prompts
pub mod prompt;

/// The end-to-end scaffolding run used by the binary
pub mod scaffold;

/// Identifier validation for project and executable names
pub mod validate;

/// Checks that the working directory is a template checkout
pub mod workspace;
