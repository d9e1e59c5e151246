use std::path::{Component, Path, PathBuf};

use crate::{StaticAssetsConfig, SupportError};

/// Resolves bundled image names (logos, avatars) to files under the static root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLocator {
    images_dir: PathBuf,
}

impl ImageLocator {
    pub fn new(config: &StaticAssetsConfig) -> Self {
        Self {
            images_dir: config.images_dir(),
        }
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Path of `name` inside the images directory.
    ///
    /// `name` must be a single normal path component; anything that could
    /// escape the directory is rejected.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, SupportError> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) if !name.contains(['/', '\\']) => {
                Ok(self.images_dir.join(file))
            }
            _ => {
                tracing::warn!(image = name, "rejected image name");
                Err(SupportError::InvalidImageName(name.to_string()))
            }
        }
    }
}
