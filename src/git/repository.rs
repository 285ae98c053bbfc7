use crate::error::{GitSemverError, Result};
use git2::{DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Discover the repository containing `path`, searching parent directories.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            GitSemverError::NotARepository(format!("{}: {}", path.display(), e.message()))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn describe(&self, format: &DescribeFormatOptions) -> Result<Option<String>> {
        let mut opts = DescribeOptions::new();
        opts.describe_tags();

        let described = match self.repo.describe(&opts) {
            Ok(described) => described,
            Err(e) if is_missing_history(&e) => {
                tracing::debug!(error = %e, "nothing to describe");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(described.format(Some(format))?.trim().to_string()))
    }
}

/// No tag reachable from HEAD, or HEAD has no commits yet.
///
/// libgit2 reports "no reference found, cannot describe anything" as a
/// generic error of the describe class rather than as `NotFound`.
fn is_missing_history(e: &git2::Error) -> bool {
    matches!(e.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch)
        || e.class() == ErrorClass::Describe
}

impl super::Repository for Git2Repository {
    fn latest_tag(&self) -> Result<Option<String>> {
        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        self.describe(&format)
    }

    fn describe_long(&self) -> Result<Option<String>> {
        let mut format = DescribeFormatOptions::new();
        format.always_use_long_format(true).dirty_suffix("-dirty");
        self.describe(&format)
    }
}
