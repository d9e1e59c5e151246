use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SupportError {
    /// Image names must be a single, non-empty path component.
    #[error("invalid image name '{0}'")]
    InvalidImageName(String),
}
