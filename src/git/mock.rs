use crate::error::{Result, VersionTagError};
use crate::git::TagSource;
use std::collections::BTreeSet;

/// Mock tag source for testing without a git repository
#[derive(Debug, Clone, Default)]
pub struct MockTagSource {
    tags: BTreeSet<String>,
    failure: Option<String>,
}

impl MockTagSource {
    /// Create a new empty mock tag source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock holding the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    /// Make every call fail with `message`, as an unreachable repository would
    pub fn failing(message: impl Into<String>) -> Self {
        MockTagSource {
            tags: BTreeSet::new(),
            failure: Some(message.into()),
        }
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(VersionTagError::tag(message.clone())),
            None => Ok(()),
        }
    }
}

impl TagSource for MockTagSource {
    fn fetch_tags(&self) -> Result<Vec<String>> {
        self.check_failure()?;
        Ok(self.tags.iter().cloned().collect())
    }

    fn tag_exists(&self, tag: &str) -> Result<bool> {
        self.check_failure()?;
        Ok(self.tags.contains(tag))
    }
}
