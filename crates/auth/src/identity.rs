//! Identity accessor: the only code that reads the security context.

use crate::{AuthzError, Employee, SecurityContext, Site};

/// Resolve the authenticated principal.
pub fn current_principal<C>(ctx: &C) -> Result<&Employee, AuthzError>
where
    C: SecurityContext + ?Sized,
{
    ctx.authenticated_principal().ok_or_else(|| {
        tracing::debug!("identity lookup without an authenticated principal");
        AuthzError::Unauthenticated
    })
}

/// Resolve the authenticated principal for mutation.
pub fn current_principal_mut<C>(ctx: &mut C) -> Result<&mut Employee, AuthzError>
where
    C: SecurityContext + ?Sized,
{
    ctx.authenticated_principal_mut().ok_or_else(|| {
        tracing::debug!("mutable identity lookup without an authenticated principal");
        AuthzError::Unauthenticated
    })
}

/// Site of the authenticated principal.
///
/// "No site" is a legitimate state for callers, so a missing principal maps
/// to `None` instead of an error.
pub fn current_site<C>(ctx: &C) -> Option<&Site>
where
    C: SecurityContext + ?Sized,
{
    ctx.authenticated_principal().and_then(Employee::site)
}
