//! Git describe abstraction layer
//!
//! The version rules only need two strings from git: the most recent
//! reachable tag and the long describe output for HEAD. This module hides
//! where those strings come from behind the [Repository] trait.
//!
//! - [repository::Git2Repository]: reads a real repository through `git2`
//! - [mock::MockRepository]: canned answers for tests
//!
//! ```rust
//! # use git_semver::git::{self, Repository};
//! # fn example<R: Repository>(repo: &R) -> git_semver::Result<()> {
//! match git::raw_inputs(repo)? {
//!     Some(raw) => println!("{} / {}", raw.tag, raw.describe),
//!     None => println!("no tags yet"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::RawInputs;
use crate::error::Result;

/// Source of describe information for the current commit
///
/// `Ok(None)` from either method means the repository has no tag that can
/// describe HEAD (or no commits at all). Any other failure is an error.
pub trait Repository: Send {
    /// Name of the most recent tag reachable from HEAD
    ///
    /// Equivalent to `git describe --tags --abbrev=0`.
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Long description of HEAD relative to that tag
    ///
    /// Equivalent to `git describe --tags --long --dirty`, e.g.
    /// `v1.2.3-4-g1a2b3c4-dirty`.
    fn describe_long(&self) -> Result<Option<String>>;
}

/// Collect both describe strings, or `None` if either is unavailable.
pub fn raw_inputs<R: Repository + ?Sized>(repo: &R) -> Result<Option<RawInputs>> {
    let tag = repo.latest_tag()?;
    let describe = repo.describe_long()?;

    match (tag, describe) {
        (Some(tag), Some(describe)) => Ok(Some(RawInputs { tag, describe })),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_inputs_both_present() {
        let repo = MockRepository::tagged("v1.0.0", "v1.0.0-2-gabc1234");
        let raw = raw_inputs(&repo).unwrap().unwrap();
        assert_eq!(raw.tag, "v1.0.0");
        assert_eq!(raw.describe, "v1.0.0-2-gabc1234");
    }

    #[test]
    fn test_raw_inputs_missing_tag() {
        let repo = MockRepository::untagged();
        assert_eq!(raw_inputs(&repo).unwrap(), None);
    }

    #[test]
    fn test_raw_inputs_missing_describe_only() {
        let repo = MockRepository::new(Some("v1.0.0".to_string()), None);
        assert_eq!(raw_inputs(&repo).unwrap(), None);
    }

    #[test]
    fn test_raw_inputs_propagates_errors() {
        let repo = MockRepository::failing("object database corrupt");
        assert!(raw_inputs(&repo).is_err());
    }
}
