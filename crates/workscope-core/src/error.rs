/// Typed errors for the two analyzers.
///
/// Precondition failures get their own variants so the text rendering can
/// give a specific one-line message. Everything else is wrapped and reported
/// through the generic catch-all message of each operation.
use std::path::PathBuf;

/// Failure of a directory scan before or during traversal.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Error: Path '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Error: Path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error analyzing workspace: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a repository inspection.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("Error: Path '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Error: Path '{}' is not a Git repository", .0.display())]
    NotARepository(PathBuf),

    #[error("Error: {}", .0.message())]
    Git(#[from] git2::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_errors_render_specific_messages() {
        let missing = ScanError::NotFound(PathBuf::from("/nope"));
        assert_eq!(missing.to_string(), "Error: Path '/nope' does not exist");

        let file = ScanError::NotADirectory(PathBuf::from("/etc/hosts"));
        assert_eq!(
            file.to_string(),
            "Error: Path '/etc/hosts' is not a directory"
        );
    }

    #[test]
    fn scan_io_error_uses_catch_all_prefix() {
        let err = ScanError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        assert_eq!(err.to_string(), "Error analyzing workspace: access denied");
    }

    #[test]
    fn inspect_errors_render_specific_messages() {
        let err = InspectError::NotARepository(PathBuf::from("/tmp/plain"));
        assert!(err.to_string().contains("not a Git repository"));

        let git = InspectError::from(git2::Error::from_str("index is locked"));
        assert_eq!(git.to_string(), "Error: index is locked");
    }
}
