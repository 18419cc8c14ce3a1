use crate::constants::SEMVER_PATTERN;
use crate::errors::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use tracing::info;

static SEMVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(SEMVER_PATTERN).expect("semver pattern is a valid regex"));

/// Checks that `version` is a semantic version number, with an optional `v` prefix
pub fn validate_version(version: &str) -> Result<(), Error> {
    if SEMVER.is_match(version) {
        Ok(())
    } else {
        Err(Error::InvalidVersion(version.to_string()))
    }
}

/// Reads the version file and returns the validated version string
///
/// # Arguments
///
/// * `path` - Path to the version file
///
/// # Returns
///
/// * `Result<String, Error>` - The trimmed version on success
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The content is not a valid version number
pub fn parse_version_file(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let version = content.trim();
    validate_version(version)?;
    info!("Loaded version {} from {}", version, path.display());
    Ok(version.to_string())
}
