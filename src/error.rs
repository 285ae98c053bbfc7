use std::fmt;

use thiserror::Error;

/// Component of the numeric version core that failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreComponent {
    /// The core did not split into exactly three dot-separated parts
    Split,
    Major,
    Minor,
    Patch,
}

impl fmt::Display for CoreComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreComponent::Split => write!(f, "expected major.minor.patch"),
            CoreComponent::Major => write!(f, "invalid major version"),
            CoreComponent::Minor => write!(f, "invalid minor version"),
            CoreComponent::Patch => write!(f, "invalid patch version"),
        }
    }
}

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Invalid describe output '{describe}': {reason}")]
    InvalidDescribeFormat { describe: String, reason: String },

    #[error("Malformed version core '{version}': {component}")]
    MalformedVersionCore {
        version: String,
        component: CoreComponent,
    },

    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create an invalid describe error with context
    pub fn describe(describe: impl Into<String>, reason: impl Into<String>) -> Self {
        GitSemverError::InvalidDescribeFormat {
            describe: describe.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed core error for the given component
    pub fn core(version: impl Into<String>, component: CoreComponent) -> Self {
        GitSemverError::MalformedVersionCore {
            version: version.into(),
            component,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }

    /// Process exit code reported for this error.
    ///
    /// Each failure stage has its own code so wrapper scripts can tell a
    /// missing repository apart from a badly formed tag.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitSemverError::NotARepository(_) => 1,
            GitSemverError::Git(_) => 2,
            GitSemverError::InvalidDescribeFormat { .. } => 3,
            GitSemverError::MalformedVersionCore { component, .. } => match component {
                CoreComponent::Split => 4,
                CoreComponent::Major => 5,
                CoreComponent::Minor => 6,
                CoreComponent::Patch => 7,
            },
            GitSemverError::Config(_) | GitSemverError::Io(_) => 8,
        }
    }
}
