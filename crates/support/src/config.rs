//! Static asset configuration, read from the environment.

use std::path::PathBuf;

pub const STATIC_ROOT_VAR: &str = "STAFFHUB_STATIC_ROOT";
pub const DEFAULT_STATIC_ROOT: &str = "public";

/// Where the application's bundled static files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssetsConfig {
    pub static_root: PathBuf,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self {
            static_root: PathBuf::from(DEFAULT_STATIC_ROOT),
        }
    }
}

impl StaticAssetsConfig {
    /// Read `STAFFHUB_STATIC_ROOT`, falling back to `public`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests, layered config).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(STATIC_ROOT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(root) => Self {
                static_root: PathBuf::from(root),
            },
            None => {
                tracing::info!(
                    "{STATIC_ROOT_VAR} not set; using default static root '{DEFAULT_STATIC_ROOT}'"
                );
                Self::default()
            }
        }
    }

    pub fn images_dir(&self) -> PathBuf {
        self.static_root.join("images")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset_or_blank() {
        assert_eq!(StaticAssetsConfig::from_lookup(|_| None), StaticAssetsConfig::default());
        assert_eq!(
            StaticAssetsConfig::from_lookup(|_| Some("  ".to_string())),
            StaticAssetsConfig::default()
        );
    }

    #[test]
    fn reads_static_root() {
        let config = StaticAssetsConfig::from_lookup(|key| {
            (key == STATIC_ROOT_VAR).then(|| "/srv/staffhub/static".to_string())
        });
        assert_eq!(config.images_dir(), PathBuf::from("/srv/staffhub/static/images"));
    }
}
