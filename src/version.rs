use semver::Version;

use crate::error::CheckFailure;

/// Parse a version string as reported by a runtime.
///
/// Accepts a leading `v` (`v18.19.0`) and fills in a missing minor or patch
/// component (`3.11` -> `3.11.0`). Pre-release and build suffixes are kept
/// but play no part in [`meets_minimum`].
pub fn parse_version(raw: &str) -> Result<Version, CheckFailure> {
    let trimmed = raw.trim();
    let unprefixed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let split = unprefixed.find(['-', '+']).unwrap_or(unprefixed.len());
    let (core, suffix) = unprefixed.split_at(split);

    let mut normalized = core.to_string();
    for _ in core.split('.').count()..3 {
        normalized.push_str(".0");
    }
    normalized.push_str(suffix);

    Version::parse(&normalized).map_err(|source| CheckFailure::Version {
        value: raw.to_string(),
        source,
    })
}

/// Whether `observed` satisfies `minimum`, ordering on (major, minor, patch) only.
pub fn meets_minimum(observed: &Version, minimum: &Version) -> bool {
    (observed.major, observed.minor, observed.patch)
        >= (minimum.major, minimum.minor, minimum.patch)
}
