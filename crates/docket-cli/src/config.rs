//! Configuration lookup for the CLI.

use crate::error::Result;
use docket_pipeline::DocketConfig;
use std::path::{Path, PathBuf};

/// Per-user configuration file, `~/.docket/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".docket").join("config.toml"))
}

/// Pick the configuration file to load.
///
/// An explicit path always wins; otherwise the per-user file is used when it
/// exists. `None` means environment variables only.
pub fn resolve_config_path(explicit: Option<&Path>, fallback: Option<PathBuf>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => fallback.filter(|path| path.exists()),
    }
}

/// Load and validate configuration.
pub fn load(explicit: Option<&Path>) -> Result<DocketConfig> {
    let path = resolve_config_path(explicit, default_config_path());
    Ok(DocketConfig::load(path.as_deref())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        let resolved = resolve_config_path(Some(&explicit), Some(PathBuf::from("/tmp/other.toml")));
        assert_eq!(resolved, Some(explicit));
    }

    #[test]
    fn test_missing_fallback_is_skipped() {
        let resolved = resolve_config_path(None, Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(resolved.is_none());
    }

    #[test]
    fn test_existing_fallback_is_used() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let resolved = resolve_config_path(None, Some(file.path().to_path_buf()));
        assert_eq!(resolved.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_default_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(".docket/config.toml"));
        }
    }
}
