/// Derivation of the individual [`RepoStatus`](crate::model::RepoStatus)
/// fields from an open repository.
///
/// Each function only reads from the repository handle; none of them
/// consumes another's output.
use crate::model::{Branch, RemoteInfo};
use git2::{ErrorCode, Repository, Status, StatusOptions};

/// Working-tree changes that differ from the index.
const WORKTREE_CHANGES: Status = Status::WT_MODIFIED
    .union(Status::WT_DELETED)
    .union(Status::WT_TYPECHANGE)
    .union(Status::WT_RENAMED);

/// Index changes that differ from HEAD.
const INDEX_CHANGES: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

/// Per-file change tallies from one status pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    pub untracked: u64,
    pub modified: u64,
    pub staged: u64,
}

impl ChangeCounts {
    /// Working tree differs from the index, or the index from HEAD.
    pub fn is_dirty(&self) -> bool {
        self.modified > 0 || self.staged > 0
    }
}

/// The checked-out branch.
///
/// A detached HEAD is reported as [`Branch::Detached`]. A repository with no
/// commits yet still has a symbolic HEAD; its target branch name is used.
pub fn current_branch(repo: &Repository) -> Result<Branch, git2::Error> {
    match repo.head() {
        Ok(head) if head.is_branch() => {
            let name = head
                .shorthand()
                .map(str::to_string)
                .unwrap_or_else(|| String::from_utf8_lossy(head.shorthand_bytes()).into_owned());
            Ok(Branch::Named(name))
        }
        Ok(_) => Ok(Branch::Detached),
        Err(err) if err.code() == ErrorCode::UnbornBranch => unborn_branch(repo),
        Err(err) => Err(err),
    }
}

/// Branch name HEAD points at before the first commit.
fn unborn_branch(repo: &Repository) -> Result<Branch, git2::Error> {
    let head = repo.find_reference("HEAD")?;
    match head.symbolic_target() {
        Some(target) => {
            let name = target.strip_prefix("refs/heads/").unwrap_or(target);
            Ok(Branch::Named(name.to_string()))
        }
        None => Ok(Branch::Detached),
    }
}

/// Count untracked, unstaged-modified and staged files.
///
/// Uses the library's default status mode: no rename detection, untracked
/// directories recursed into, ignored files excluded. A file with both
/// staged and unstaged edits counts once in each tally.
pub fn change_counts(repo: &Repository) -> Result<ChangeCounts, git2::Error> {
    let mut options = StatusOptions::new();
    options
        .include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false);

    let statuses = repo.statuses(Some(&mut options))?;

    let mut counts = ChangeCounts::default();
    for entry in statuses.iter() {
        let status = entry.status();
        if status.contains(Status::WT_NEW) {
            counts.untracked += 1;
        }
        if status.intersects(WORKTREE_CHANGES) {
            counts.modified += 1;
        }
        if status.intersects(INDEX_CHANGES) {
            counts.staged += 1;
        }
    }
    Ok(counts)
}

/// The first remote and its URL, if any.
///
/// libgit2 lists remote names alphabetically, so "first" means first by
/// name, not first in the config file.
pub fn primary_remote(repo: &Repository) -> Result<Option<RemoteInfo>, git2::Error> {
    let names = repo.remotes()?;
    let Some(name) = names.iter().flatten().next() else {
        return Ok(None);
    };
    let remote = repo.find_remote(name)?;
    let url = String::from_utf8_lossy(remote.url_bytes()).into_owned();
    Ok(Some(RemoteInfo {
        name: name.to_string(),
        url,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirty_requires_modified_or_staged() {
        let untracked_only = ChangeCounts {
            untracked: 4,
            ..ChangeCounts::default()
        };
        assert!(!untracked_only.is_dirty());

        let modified = ChangeCounts {
            modified: 1,
            ..ChangeCounts::default()
        };
        assert!(modified.is_dirty());

        let staged = ChangeCounts {
            staged: 1,
            ..ChangeCounts::default()
        };
        assert!(staged.is_dirty());
    }

    #[test]
    fn status_masks_are_disjoint() {
        assert!(!WORKTREE_CHANGES.intersects(INDEX_CHANGES));
        assert!(!WORKTREE_CHANGES.contains(Status::WT_NEW));
    }
}
