/// Summarised state of a Git working copy.

/// The checked-out branch, or the fact that there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    /// HEAD is a symbolic reference to this local branch.
    Named(String),
    /// HEAD points directly at a commit.
    Detached,
}

impl Branch {
    /// Display label used in the report.
    pub fn label(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Detached => "DETACHED HEAD",
        }
    }
}

/// Name and fetch URL of a configured remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    pub name: String,
    pub url: String,
}

/// Everything the inspector reports about a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    pub branch: Branch,
    /// Working tree differs from the index, or the index from HEAD.
    /// Untracked files alone do not make a repository dirty.
    pub dirty: bool,
    /// Files not tracked at all.
    pub untracked_count: u64,
    /// Tracked files whose working-tree content differs from the index.
    pub modified_count: u64,
    /// Index entries that differ from the last commit.
    pub staged_count: u64,
    /// First configured remote, if any.
    pub remote: Option<RemoteInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_labels() {
        assert_eq!(Branch::Named("main".into()).label(), "main");
        assert_eq!(Branch::Detached.label(), "DETACHED HEAD");
    }
}
