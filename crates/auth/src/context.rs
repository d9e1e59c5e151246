//! Security context seam between the host's session plumbing and this crate.

use crate::Employee;

/// Source of the authenticated principal for the current request/session.
///
/// Implemented by whatever session layer the host uses. Every accessor,
/// predicate and mutator in this crate takes the context explicitly and looks
/// the principal up once per call.
pub trait SecurityContext {
    fn authenticated_principal(&self) -> Option<&Employee>;

    fn authenticated_principal_mut(&mut self) -> Option<&mut Employee>;
}

/// In-memory session context holding at most one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    principal: Option<Employee>,
}

impl SessionContext {
    pub fn authenticated(principal: Employee) -> Self {
        Self {
            principal: Some(principal),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Replace the session principal (e.g. after login or impersonation).
    pub fn sign_in(&mut self, principal: Employee) {
        tracing::debug!(employee_id = %principal.id, "principal bound to session");
        self.principal = Some(principal);
    }

    /// Drop the session principal, returning it if there was one.
    pub fn sign_out(&mut self) -> Option<Employee> {
        let principal = self.principal.take();
        if let Some(p) = &principal {
            tracing::debug!(employee_id = %p.id, "principal removed from session");
        }
        principal
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}

impl SecurityContext for SessionContext {
    fn authenticated_principal(&self) -> Option<&Employee> {
        self.principal.as_ref()
    }

    fn authenticated_principal_mut(&mut self) -> Option<&mut Employee> {
        self.principal.as_mut()
    }
}
