use crate::error::{Result, VersionTagError};
use crate::git::TagSource;
use git2::Repository as Git2Repo;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// Tag source backed by a local git repository
///
/// `git2::Repository` is `Send` but not `Sync`, so access goes through a
/// mutex.
pub struct Git2TagSource {
    repo: Mutex<Git2Repo>,
}

impl Git2TagSource {
    /// Open the repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            VersionTagError::tag(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;
        debug!(path = %path.display(), "opened git repository");

        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagSource {
            repo: Mutex::new(repo),
        }
    }

    fn with_repo<T>(&self, f: impl FnOnce(&Git2Repo) -> Result<T>) -> Result<T> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| VersionTagError::tag("Repository lock poisoned"))?;
        f(&repo)
    }
}

/// Tag names are bytes on disk; invalid UTF-8 is kept (with U+FFFD) so the
/// check can report the tag instead of dropping it
fn tag_name_lossy(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

impl TagSource for Git2TagSource {
    fn fetch_tags(&self) -> Result<Vec<String>> {
        self.with_repo(|repo| {
            let names = repo.tag_names(None)?;
            let tags: Vec<String> = names.iter_bytes().map(tag_name_lossy).collect();
            debug!(count = tags.len(), "listed repository tags");
            Ok(tags)
        })
    }

    fn tag_exists(&self, tag: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", tag);

        self.with_repo(|repo| match repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            // Names git refuses as refs cannot exist as tags either
            Err(e) if e.code() == git2::ErrorCode::InvalidSpec => Ok(false),
            Err(e) => Err(VersionTagError::tag(format!(
                "Cannot look up tag '{}': {}",
                tag, e
            ))),
        })
    }
}
