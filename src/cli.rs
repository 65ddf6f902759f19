//! Command-line interface implementation for init-project.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::project::ProjectNumber;
use crate::validate::Identifier;

/// Command-line arguments structure for init-project.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "A simple project initialisation tool for template checkouts",
    long_about = None
)]
pub struct Args {
    /// The name of the project
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Identifier,

    /// The name of the hello world default executable
    #[arg(value_name = "EXEC_NAME")]
    pub exec_name: Identifier,

    /// Project number, assigned a random 6-digit number by default
    #[arg(short = 'n', long = "num", value_name = "NUM")]
    pub num: Option<ProjectNumber>,

    /// Perform a dry-run execution without making changes
    #[arg(short, long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt before renaming files
    #[arg(short = 'y', long)]
    pub no_prompt: bool,

    /// Do not remove the initializer after operation
    #[arg(short = 'q', long)]
    pub no_self_destruct: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors,
///   including rejected identifiers and project numbers
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                // Nothing useful can be done if stdout is gone.
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
