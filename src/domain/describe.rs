use crate::error::{GitSemverError, Result};

/// Trailing token git appends to describe output for a modified working tree
pub const DIRTY_MARKER: &str = "dirty";

/// Position of HEAD relative to the tag, as reported by long describe output
/// (`<tag>-<commits>-g<hash>[-dirty]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Describe {
    pub commits_ahead: u64,
    pub dirty: bool,
}

impl Describe {
    /// Parse the describe string produced for `tag`.
    ///
    /// The tag is stripped first so that tags containing hyphens
    /// (e.g. "v2.0.0-beta.1") do not disturb the token split.
    pub fn parse(tag: &str, describe: &str) -> Result<Self> {
        let remainder = describe
            .strip_prefix(tag)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(|| {
                GitSemverError::describe(describe, format!("expected '{}-' prefix", tag))
            })?;

        let tokens: Vec<&str> = remainder.split('-').collect();
        let commits_ahead = tokens[0].parse::<u64>().map_err(|_| {
            GitSemverError::describe(
                describe,
                format!("commit count '{}' is not a number", tokens[0]),
            )
        })?;

        Ok(Describe {
            commits_ahead,
            dirty: tokens.len() > 2,
        })
    }
}
