//! Markdown rendering of a release block.

use semver::Version;

use crate::i18n::{Language, Message};

use super::sections::ChangelogSections;

/// Marker for the introductory section of the first stable release.
const INITIAL_RELEASE_EMOJI: &str = "🎉";

/// Whether this version is the first public release.
pub fn is_initial_release(version: &Version) -> bool {
    *version == Version::new(1, 0, 0)
}

/// Render a `## [version] - date` block with one `### <emoji> <Label>`
/// section per non-empty bucket.
///
/// The returned block ends with a blank line so it can be inserted directly
/// in front of an existing heading.
pub fn render_release(
    version: &Version,
    date: &str,
    sections: &ChangelogSections,
    language: Language,
) -> String {
    let mut out = format!("## [{}] - {}\n\n", version, date);

    if is_initial_release(version) {
        out.push_str(&format!(
            "### {} {}\n\n{}\n\n",
            INITIAL_RELEASE_EMOJI,
            language.t(Message::InitialRelease),
            language.t(Message::FirstPublicVersion)
        ));
    }

    for (section, entries) in sections.iter() {
        out.push_str(&format!("### {} {}\n\n", section.emoji(), section.as_str()));
        for entry in entries {
            out.push_str(&format!("- {}\n", entry));
        }
        out.push('\n');
    }

    out
}
