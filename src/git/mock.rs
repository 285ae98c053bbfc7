use crate::error::{GitSemverError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    tag: Option<String>,
    describe: Option<String>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a mock answering with the given describe strings
    pub fn new(tag: Option<String>, describe: Option<String>) -> Self {
        MockRepository {
            tag,
            describe,
            failure: None,
        }
    }

    /// Mock with a reachable tag
    pub fn tagged(tag: impl Into<String>, describe: impl Into<String>) -> Self {
        Self::new(Some(tag.into()), Some(describe.into()))
    }

    /// Mock of a repository without tags or commits
    pub fn untagged() -> Self {
        Self::default()
    }

    /// Mock whose git calls fail with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        MockRepository {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn answer(&self, value: &Option<String>) -> Result<Option<String>> {
        match &self.failure {
            Some(message) => Err(GitSemverError::Git(git2::Error::from_str(message))),
            None => Ok(value.clone()),
        }
    }
}

impl Repository for MockRepository {
    fn latest_tag(&self) -> Result<Option<String>> {
        self.answer(&self.tag)
    }

    fn describe_long(&self) -> Result<Option<String>> {
        self.answer(&self.describe)
    }
}
