//! Dotted numeric version handling
//!
//! Dependency versions are plain dotted numerics ("1.1.0"), not full semver.
//! Sync advances the patch component; versions with fewer than three
//! components are padded with zeros first, so "1.2" syncs to "1.2.1".

use crate::error::LineageError;

/// Parse a dotted numeric version into its components
pub fn parse(version: &str) -> Result<Vec<u64>, LineageError> {
    if version.trim().is_empty() {
        return Err(LineageError::Version("empty version string".to_string()));
    }
    version
        .split('.')
        .map(|part| {
            part.parse::<u64>()
                .map_err(|_| LineageError::Version(format!("non-numeric component in '{version}'")))
        })
        .collect()
}

/// Increment the patch (third) component by one
pub fn bump_patch(version: &str) -> Result<String, LineageError> {
    let mut parts = parse(version)?;
    while parts.len() < 3 {
        parts.push(0);
    }
    parts[2] += 1;
    Ok(parts
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bumps_patch_component() {
        assert_eq!(bump_patch("1.1.0").unwrap(), "1.1.1");
        assert_eq!(bump_patch("0.9.9").unwrap(), "0.9.10");
    }

    #[test]
    fn pads_short_versions() {
        assert_eq!(bump_patch("1.2").unwrap(), "1.2.1");
        assert_eq!(bump_patch("3").unwrap(), "3.0.1");
    }

    #[test]
    fn extra_components_survive() {
        assert_eq!(bump_patch("1.2.3.4").unwrap(), "1.2.4.4");
    }

    #[test]
    fn rejects_malformed_versions() {
        assert!(bump_patch("").is_err());
        assert!(bump_patch("1.x.0").is_err());
        assert!(bump_patch("v1.2.3").is_err());
    }
}
