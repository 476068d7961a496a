//! Stability classification for version strings

/// Lexical markers that flag a version as a pre-release.
///
/// Matching is case-insensitive substring search anywhere in the version
/// string, not exact-token match. Kept as a single list so future markers
/// are added here without touching the selection algorithm.
pub const PRERELEASE_MARKERS: &[&str] = &[
    "alpha",
    "beta",
    "rc",
    "experimental",
    "next",
    "canary",
    "dev",
    "preview",
    "pre",
    "test",
    "snapshot",
];

/// Minimum run of digits after a hyphen that marks a dated snapshot
/// (e.g. `1.0.0-20240131`)
const DATE_SUFFIX_DIGITS: usize = 8;

/// Whether a version string denotes a stable release.
///
/// A version is unstable if it contains any of [`PRERELEASE_MARKERS`]
/// (case-insensitively) or a hyphen followed by at least eight consecutive
/// digits. The empty string contains neither, so it classifies as stable;
/// callers that care about absent versions must guard before calling.
pub fn is_stable(version: &str) -> bool {
    let lowered = version.to_ascii_lowercase();
    if PRERELEASE_MARKERS.iter().any(|m| lowered.contains(m)) {
        return false;
    }
    !has_date_suffix(version)
}

fn has_date_suffix(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.iter().enumerate().any(|(i, b)| {
        *b == b'-'
            && bytes[i + 1..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count()
                >= DATE_SUFFIX_DIGITS
    })
}
