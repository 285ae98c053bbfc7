use std::fmt;

use crate::domain::describe::Describe;
use crate::domain::tag::{Tag, TAG_PREFIX};
use crate::error::{CoreComponent, GitSemverError, Result};

/// Raw strings reported by git for the current commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputs {
    /// Most recent reachable tag (`git describe --tags --abbrev=0`)
    pub tag: String,
    /// Long dirty-aware description (`git describe --tags --long --dirty`)
    pub describe: String,
}

impl RawInputs {
    pub fn new(tag: impl Into<String>, describe: impl Into<String>) -> Self {
        RawInputs {
            tag: tag.into(),
            describe: describe.into(),
        }
    }
}

/// Version derived from a tag and the describe output for HEAD.
///
/// Produced once by [`ParsedVersion::parse`] and rendered by its `Display`
/// implementation; the value itself never changes in between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: String,
    pub build_meta: String,
    pub has_prefix: bool,
    pub commits_ahead: u64,
    pub dirty: bool,
}

impl ParsedVersion {
    /// Version used when the repository has no tags or no commits yet.
    pub fn untagged() -> Self {
        ParsedVersion {
            has_prefix: true,
            dirty: true,
            ..ParsedVersion::default()
        }
    }

    /// Parse a tag and its long describe output.
    ///
    /// With `tag_available == false` both strings are ignored and the
    /// untagged fallback is returned.
    ///
    /// # Errors
    /// * `InvalidDescribeFormat` - the commit count in `describe` is not a number
    /// * `MalformedVersionCore` - the tag's core is not `major.minor.patch`
    pub fn parse(tag: &str, describe: &str, tag_available: bool) -> Result<Self> {
        if !tag_available {
            return Ok(ParsedVersion::untagged());
        }

        let position = Describe::parse(tag, describe)?;
        let tag = Tag::new(tag);
        let parts = tag.parts();
        let (major, minor, patch) = parse_core(parts.core)?;

        Ok(ParsedVersion {
            major,
            minor,
            patch,
            prerelease: parts.prerelease.to_string(),
            build_meta: parts.build_meta.to_string(),
            has_prefix: parts.has_prefix,
            commits_ahead: position.commits_ahead,
            dirty: position.dirty,
        })
    }

    /// Parse optional raw inputs; `None` means git found no tag to describe.
    pub fn from_raw(inputs: Option<&RawInputs>) -> Result<Self> {
        match inputs {
            Some(raw) => ParsedVersion::parse(&raw.tag, &raw.describe, true),
            None => ParsedVersion::parse("", "", false),
        }
    }

    /// Whether the output patch is one above the tag's patch.
    ///
    /// Work past a release tag (new commits or local edits) previews the next
    /// patch release, unless the tag already names a prerelease.
    pub fn bumps_patch(&self) -> bool {
        (self.commits_ahead > 0 || self.dirty) && self.prerelease.is_empty()
    }

    /// Patch number as it appears in the formatted output
    pub fn output_patch(&self) -> u64 {
        if self.bumps_patch() {
            self.patch.saturating_add(1)
        } else {
            self.patch
        }
    }

    /// Render the version string.
    pub fn format(&self) -> String {
        let mut out = String::new();

        if self.has_prefix {
            out.push(TAG_PREFIX);
        }
        out.push_str(&format!(
            "{}.{}.{}",
            self.major,
            self.minor,
            self.output_patch()
        ));

        if !self.prerelease.is_empty() || self.commits_ahead != 0 {
            out.push('-');
            if self.prerelease.is_empty() {
                out.push_str(&format!("dev.{}", self.commits_ahead));
            } else if self.commits_ahead == 0 {
                out.push_str(&self.prerelease);
            } else {
                out.push_str(&format!("{}.{}", self.prerelease, self.commits_ahead));
            }
        }

        if !self.build_meta.is_empty() || self.dirty {
            out.push('+');
            out.push_str(&self.build_meta);
            if self.dirty {
                if !self.build_meta.is_empty() {
                    out.push('.');
                }
                out.push_str("dirty");
            }
        }

        out
    }

    /// The formatted version, minus any `v` prefix, as a `semver::Version`.
    pub fn to_semver(&self) -> std::result::Result<semver::Version, semver::Error> {
        let formatted = self.format();
        let bare = formatted.strip_prefix(TAG_PREFIX).unwrap_or(&formatted);
        semver::Version::parse(bare)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Parse "X.Y.Z"; empty text is the 0.0.0 core of an unprefixed tag.
fn parse_core(version: &str) -> Result<(u64, u64, u64)> {
    if version.is_empty() {
        return Ok((0, 0, 0));
    }

    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() != 3 {
        return Err(GitSemverError::core(version, CoreComponent::Split));
    }

    let component = |text: &str, which: CoreComponent| {
        text.parse::<u64>()
            .map_err(|_| GitSemverError::core(version, which))
    };

    Ok((
        component(parts[0], CoreComponent::Major)?,
        component(parts[1], CoreComponent::Minor)?,
        component(parts[2], CoreComponent::Patch)?,
    ))
}
