//! init-project's entry point.
//! Parses arguments, configures logging and hands off to the scaffolding run.

use init_project::{
    cli::get_args,
    error::{default_error_handler, Result},
    project::ProjectConfig,
    scaffold,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    let config = ProjectConfig::from_args(&args);
    if let Err(err) = run(&config) {
        default_error_handler(err);
    }
}

fn run(config: &ProjectConfig) -> Result<()> {
    let cwd = std::env::current_dir()?;
    scaffold::run(config, cwd)
}
