//! Semantic-version bumping for the dataset version tag.

use glyphdex_core::Dataset;

/// Which component of `major.minor.patch` to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
}

/// Returns a copy of `dataset` with the chosen version component incremented
/// and the lower components reset to zero.
///
/// Parsing is lenient and total: a `-beta` suffix is ignored, and missing or
/// non-numeric components read as zero, so even a mangled version string
/// bumps to something canonical.
#[must_use]
pub fn bump_version(dataset: &Dataset, part: VersionPart) -> Dataset {
    let (mut major, mut minor, mut patch) = parse_components(&dataset.version);
    match part {
        VersionPart::Major => {
            major += 1;
            minor = 0;
            patch = 0;
        }
        VersionPart::Minor => {
            minor += 1;
            patch = 0;
        }
        VersionPart::Patch => patch += 1,
    }

    let mut bumped = dataset.clone();
    bumped.version = format!("{major}.{minor}.{patch}");
    bumped
}

fn parse_components(version: &str) -> (u64, u64, u64) {
    let base = version
        .find("-beta")
        .map_or(version, |at| &version[..at]);
    let mut parts = base.split('.').map(|part| part.trim().parse().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}
