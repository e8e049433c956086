use semver::Version;
use thiserror::Error;

pub const APP_NAME: &str = "Dynamic Tintz — Quote Builder";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

#[derive(Error, Debug, PartialEq)]
#[error("invalid version format: {0}")]
pub struct InvalidVersion(String);

fn parse_version_str(input: &str) -> Result<Version, InvalidVersion> {
    let trimmed = input.trim().trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|err| InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, InvalidVersion> {
    match GIT_TAG {
        Some(tag) => parse_version_str(tag),
        None => parse_version_str(APP_VERSION),
    }
}

pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}

/// Saved state is readable when it was written by the same major version.
pub fn is_compatible(saved: &str, current: &Version) -> bool {
    parse_version_str(saved)
        .map(|saved| saved.major == current.major)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_same_major() {
        let current = Version::new(1, 4, 0);
        assert!(is_compatible("1.0.0", &current));
        assert!(is_compatible("v1.9.2", &current));
    }

    #[test]
    fn rejects_other_major_and_garbage() {
        let current = Version::new(1, 4, 0);
        assert!(!is_compatible("2.0.0", &current));
        assert!(!is_compatible("0.9.0", &current));
        assert!(!is_compatible("latest", &current));
    }

    #[test]
    fn package_version_parses() {
        assert!(parse_version_str(APP_VERSION).is_ok());
        assert!(version_label().contains('.'));
    }
}
