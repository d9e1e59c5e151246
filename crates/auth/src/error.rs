use thiserror::Error;

use crate::Role;

/// Failure of an identity lookup or authorization decision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// No authenticated principal in the security context.
    #[error("unauthenticated: no principal in the security context")]
    Unauthenticated,

    #[error("forbidden: missing role '{0}'")]
    Forbidden(Role),
}
