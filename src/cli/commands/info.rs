//! info command - Show where a repository lives and whether it is bare

use anyhow::Result;
use serde::Serialize;

use super::Context;
use crate::ui::output;

/// Repository location, as printed by `gitobj info --json`.
#[derive(Debug, Serialize)]
struct RepoInfo {
    git_dir: String,
    directory: Option<String>,
    bare: bool,
}

/// Show the git directory and working directory of the repository.
pub fn info(ctx: &Context) -> Result<()> {
    let repo = ctx.open()?;

    let info = RepoInfo {
        git_dir: repo.git_dir().display().to_string(),
        directory: repo.directory().map(|d| d.display().to_string()),
        bare: repo.is_bare(),
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    output::print(format!("git dir: {}", info.git_dir), ctx.verbosity);
    match &info.directory {
        Some(dir) => output::print(format!("working directory: {}", dir), ctx.verbosity),
        None => output::print("working directory: (bare)", ctx.verbosity),
    }
    Ok(())
}
