//! Semver bump levels.

use std::fmt;

use semver::Version;

/// Severity of a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BumpLevel {
    #[default]
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }

    /// Menu number used when asking the user to confirm a level.
    pub fn choice(&self) -> u8 {
        match self {
            Self::Major => 1,
            Self::Minor => 2,
            Self::Patch => 3,
        }
    }

    /// Inverse of [`BumpLevel::choice`].
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Major),
            "2" => Some(Self::Minor),
            "3" => Some(Self::Patch),
            _ => None,
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply a bump to `current`.
///
/// Pre-release and build metadata are dropped.
pub fn bump_version(current: &Version, level: BumpLevel) -> Version {
    match level {
        BumpLevel::Major => Version::new(current.major + 1, 0, 0),
        BumpLevel::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpLevel::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_bump() {
        assert_eq!(
            bump_version(&Version::new(1, 2, 3), BumpLevel::Patch),
            Version::new(1, 2, 4)
        );
    }

    #[test]
    fn test_minor_bump_resets_patch() {
        assert_eq!(
            bump_version(&Version::new(1, 2, 3), BumpLevel::Minor),
            Version::new(1, 3, 0)
        );
    }

    #[test]
    fn test_major_bump_resets_minor_and_patch() {
        assert_eq!(
            bump_version(&Version::new(1, 2, 3), BumpLevel::Major),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_bump_drops_prerelease() {
        let current = Version::parse("1.2.3-beta.1+build.5").unwrap();
        assert_eq!(bump_version(&current, BumpLevel::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(BumpLevel::Patch < BumpLevel::Minor);
        assert!(BumpLevel::Minor < BumpLevel::Major);
        assert_eq!(BumpLevel::default(), BumpLevel::Patch);
    }

    #[test]
    fn test_choice_roundtrip() {
        for level in [BumpLevel::Major, BumpLevel::Minor, BumpLevel::Patch] {
            assert_eq!(BumpLevel::from_choice(&level.choice().to_string()), Some(level));
        }
        assert_eq!(BumpLevel::from_choice("4"), None);
        assert_eq!(BumpLevel::from_choice(""), None);
    }
}
