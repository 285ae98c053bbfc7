//! Version resolution: describe strings from git in, version string out.

use crate::config::Config;
use crate::domain::{ParsedVersion, RawInputs};
use crate::error::Result;
use crate::git::{self, Repository};

/// Turns the describe output of a repository into a [ParsedVersion].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionResolver {
    show_dirty: bool,
}

impl Default for VersionResolver {
    fn default() -> Self {
        VersionResolver { show_dirty: true }
    }
}

impl VersionResolver {
    pub fn new(config: &Config) -> Self {
        VersionResolver {
            show_dirty: config.behavior.show_dirty,
        }
    }

    /// Query `repo` and parse the result.
    pub fn resolve<R: Repository + ?Sized>(&self, repo: &R) -> Result<ParsedVersion> {
        let inputs = git::raw_inputs(repo)?;
        self.resolve_inputs(inputs.as_ref())
    }

    /// Parse already collected describe strings.
    pub fn resolve_inputs(&self, inputs: Option<&RawInputs>) -> Result<ParsedVersion> {
        let version = match inputs {
            Some(raw) => {
                tracing::debug!(tag = %raw.tag, describe = %raw.describe, "found a tag");
                let parsed = ParsedVersion::from_raw(Some(raw))?;
                if self.show_dirty {
                    parsed
                } else {
                    ParsedVersion {
                        dirty: false,
                        ..parsed
                    }
                }
            }
            None => {
                tracing::warn!("no tags or commits found, probably a new repository; using v0.0.0");
                ParsedVersion::from_raw(None)?
            }
        };

        tracing::debug!(
            major = version.major,
            minor = version.minor,
            patch = version.patch,
            prerelease = %version.prerelease,
            build_meta = %version.build_meta,
            has_prefix = version.has_prefix,
            commits_ahead = version.commits_ahead,
            dirty = version.dirty,
            "resolved version {}",
            version
        );

        Ok(version)
    }
}
