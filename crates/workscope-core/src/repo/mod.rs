/// Repository inspector — summarises a Git working copy.
///
/// [`inspect_repository`] opens the repository fresh for each call and drops
/// the handle on return. [`inspect`] wraps it into the text contract used by
/// frontends.
pub mod status;

use crate::error::InspectError;
use crate::model::RepoStatus;
use crate::report;
use git2::{ErrorCode, Repository};
use std::path::Path;
use tracing::info;

/// Inspect the repository at or above `repo_path` and render the report.
pub fn inspect(repo_path: &str) -> String {
    match inspect_repository(Path::new(repo_path)) {
        Ok(status) => report::render_repo(repo_path, &status),
        Err(err) => err.to_string(),
    }
}

/// Open the repository containing `path` and derive its status.
pub fn inspect_repository(path: &Path) -> Result<RepoStatus, InspectError> {
    if !path.exists() {
        return Err(InspectError::NotFound(path.to_path_buf()));
    }

    let repo = match Repository::discover(path) {
        Ok(repo) => repo,
        Err(err) if err.code() == ErrorCode::NotFound => {
            return Err(InspectError::NotARepository(path.to_path_buf()));
        }
        Err(err) => return Err(InspectError::Git(err)),
    };

    info!("Inspecting repository at {}", repo.path().display());

    let branch = status::current_branch(&repo)?;
    let counts = status::change_counts(&repo)?;
    let remote = status::primary_remote(&repo)?;

    Ok(RepoStatus {
        branch,
        dirty: counts.is_dirty(),
        untracked_count: counts.untracked,
        modified_count: counts.modified,
        staged_count: counts.staged,
        remote,
    })
}
