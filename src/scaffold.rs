//! One scaffolding run over a template checkout.

use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::ignore::read_ignore_file;
use crate::placeholder::Placeholders;
use crate::processor::{apply, planned_renames, Processor};
use crate::project::ProjectConfig;
use crate::prompt::confirm;
use crate::workspace::check_workspace;

/// Runs the whole flow against `root`.
///
/// # Flow
/// 1. Checks for `.git` and `.gitignore` in `root`
/// 2. Builds ignore rules from builtins and `.gitignore`
/// 3. Walks `root`, printing every non-ignored path
/// 4. Reports (dry run) or applies placeholder renames
/// 5. Prints the summary
///
/// # Errors
/// * `Error::PreconditionError` before any traversal if `root` is not a
///   template checkout
/// * `Error::ProcessError` if the planned renames conflict; nothing is
///   renamed in that case
pub fn run<P: AsRef<Path>>(config: &ProjectConfig, root: P) -> Result<()> {
    let root = root.as_ref();

    let ignore_path = check_workspace(root)?;
    let rules = read_ignore_file(&ignore_path)?;
    debug!("Loaded {} ignore rules", rules.len());

    let placeholders = Placeholders::from_config(config);
    let processor = Processor::new(root, &rules, &placeholders);

    let results = processor.scan()?;
    for result in &results {
        println!("{}", result.source.display());
    }

    let renames = planned_renames(&results);
    if config.dry_run {
        for (source, target) in &renames {
            println!("Would rename '{}' -> '{}'", source.display(), target.display());
        }
    } else if !renames.is_empty() {
        let message = format!("Rename {} placeholder paths?", renames.len());
        if confirm(&message, config.no_prompt)? {
            let renamed = apply(&results)?;
            println!("Renamed {} paths.", renamed);
        } else {
            println!("Skipped renaming.");
        }
    }

    println!("{}", config.summary());

    if config.self_destruct {
        info!("Removal of the initializer is left to packaging");
    }

    Ok(())
}
