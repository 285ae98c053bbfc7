//! Domain logic - pure version rules independent of git operations

pub mod describe;
pub mod tag;
pub mod version;

pub use describe::Describe;
pub use tag::{Tag, TagParts};
pub use version::{ParsedVersion, RawInputs};
