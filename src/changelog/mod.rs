//! Changelog grouping, rendering and writing.

pub mod format;
pub mod parser;
pub mod sections;
pub mod writer;

pub use format::render_release;
pub use sections::{ChangelogSections, Section, group_by_type, remove_duplicates};
pub use writer::{CHANGELOG_FILE, ChangelogUpdate, update_changelog};
