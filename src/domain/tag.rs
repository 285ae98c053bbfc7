/// Prefix marking a tag as a version tag (e.g. "v1.2.3")
pub const TAG_PREFIX: char = 'v';

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

/// Pieces of a version tag before the numeric core is parsed
///
/// `core` is the dotted numeric text, `prerelease` and `build_meta` are the
/// suffixes with their leading `-` / `+` already removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagParts<'a> {
    pub has_prefix: bool,
    pub core: &'a str,
    pub prerelease: &'a str,
    pub build_meta: &'a str,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    pub fn has_prefix(&self) -> bool {
        self.name.starts_with(TAG_PREFIX)
    }

    /// Version text of the tag (e.g., "v1.2.3-rc.1" -> "1.2.3-rc.1").
    ///
    /// A tag without the `v` prefix carries no version text at all, so its
    /// core is treated as 0.0.0 rather than parsed from the raw name.
    pub fn version_part(&self) -> &str {
        self.name.strip_prefix(TAG_PREFIX).unwrap_or("")
    }

    /// Split the tag into prefix flag, numeric core, prerelease and metadata.
    ///
    /// Build metadata is cut at the first `+` before the prerelease is cut at
    /// the first `-`, so "1.0.0-rc.1+exp-2" keeps "exp-2" as metadata.
    pub fn parts(&self) -> TagParts<'_> {
        let text = self.version_part();
        let (text, build_meta) = text.split_once('+').unwrap_or((text, ""));
        let (core, prerelease) = text.split_once('-').unwrap_or((text, ""));

        TagParts {
            has_prefix: self.has_prefix(),
            core,
            prerelease,
            build_meta,
        }
    }
}
