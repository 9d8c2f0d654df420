use std::fmt;

/// Non-fatal conditions noticed while checking a tag against a repository.
/// These are reported to the user but never change the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Existing tag that is not a version tag; it is ignored
    UnparsableTag { tag: String, reason: String },
    /// Repository holds no version tags, so the candidate is the first one
    NoExistingVersions,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Ignoring tag '{}': {}", tag, reason)
            }
            BoundaryWarning::NoExistingVersions => {
                write!(f, "No existing version tags found; treating this as the first tag")
            }
        }
    }
}
