use std::path::PathBuf;

use anyhow::Context;

/// Working directory of the git repository containing the current directory.
pub fn repo_root() -> anyhow::Result<PathBuf> {
    let repo = git2::Repository::discover(".").context("Failed to find git root")?;
    let root = repo.workdir().context("Git repository has no working directory")?;
    Ok(root.to_path_buf())
}
