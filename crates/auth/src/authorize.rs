use serde::Serialize;

use staffhub_core::{EmployeeId, Entity};

use crate::identity::current_principal;
use crate::{AuthzError, Employee, Role, SecurityContext};

/// Exact role-set membership. No role implies another.
pub fn has_role(principal: &Employee, role: Role) -> bool {
    principal.roles.contains(role)
}

fn current_has_role<C>(ctx: &C, role: Role) -> Result<bool, AuthzError>
where
    C: SecurityContext + ?Sized,
{
    current_principal(ctx).map(|p| has_role(p, role))
}

pub fn is_admin<C: SecurityContext + ?Sized>(ctx: &C) -> Result<bool, AuthzError> {
    current_has_role(ctx, Role::Admin)
}

pub fn is_manager<C: SecurityContext + ?Sized>(ctx: &C) -> Result<bool, AuthzError> {
    current_has_role(ctx, Role::Manager)
}

pub fn is_smo<C: SecurityContext + ?Sized>(ctx: &C) -> Result<bool, AuthzError> {
    current_has_role(ctx, Role::Smo)
}

pub fn is_hr<C: SecurityContext + ?Sized>(ctx: &C) -> Result<bool, AuthzError> {
    current_has_role(ctx, Role::Hr)
}

pub fn is_admin_or_manager<C: SecurityContext + ?Sized>(ctx: &C) -> Result<bool, AuthzError> {
    current_principal(ctx).map(|p| has_role(p, Role::Admin) || has_role(p, Role::Manager))
}

/// Whether `target` is the authenticated principal.
///
/// Fail-closed: a missing target or a missing principal yields `false`, never
/// an error, so this can be called speculatively.
pub fn is_self<C, T>(ctx: &C, target: Option<&T>) -> bool
where
    C: SecurityContext + ?Sized,
    T: Entity<Id = EmployeeId> + ?Sized,
{
    let Some(target) = target else {
        return false;
    };
    let Some(principal) = ctx.authenticated_principal() else {
        return false;
    };
    principal.id == *target.id()
}

/// Guard: require `role` on the authenticated principal.
///
/// - No IO
/// - No panics
pub fn authorize<C>(ctx: &C, role: Role) -> Result<(), AuthzError>
where
    C: SecurityContext + ?Sized,
{
    authorize_any(ctx, &[role])
}

/// Guard: require at least one of `roles` (explicit OR composition).
///
/// An empty `roles` slice never grants; the denial then reports `Admin`, the
/// most restrictive role.
pub fn authorize_any<C>(ctx: &C, roles: &[Role]) -> Result<(), AuthzError>
where
    C: SecurityContext + ?Sized,
{
    let principal = current_principal(ctx)?;
    if roles.iter().any(|r| has_role(principal, *r)) {
        return Ok(());
    }

    let missing = roles.first().copied().unwrap_or(Role::Admin);
    tracing::warn!(
        employee_id = %principal.id,
        required = ?roles,
        "authorization denied"
    );
    Err(AuthzError::Forbidden(missing))
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of a role check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCheckExplanation {
    pub required_role: Role,
    pub granted: bool,
    /// Human-readable reason for the decision.
    pub reason: String,
    /// `None` when there is no authenticated principal.
    pub principal_id: Option<EmployeeId>,
    pub roles: Vec<Role>,
    pub denial: Option<DenialKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    Unauthenticated,
    MissingRole,
}

/// Explain why a role check would be granted or denied.
///
/// Unlike the predicates this never fails: an anonymous context produces a
/// denied explanation.
pub fn explain_role_check<C>(ctx: &C, role: Role) -> RoleCheckExplanation
where
    C: SecurityContext + ?Sized,
{
    let Some(principal) = ctx.authenticated_principal() else {
        return RoleCheckExplanation {
            required_role: role,
            granted: false,
            reason: "No authenticated principal in the security context".to_string(),
            principal_id: None,
            roles: Vec::new(),
            denial: Some(DenialKind::Unauthenticated),
        };
    };

    let roles: Vec<Role> = principal.roles.iter().collect();
    if has_role(principal, role) {
        RoleCheckExplanation {
            required_role: role,
            granted: true,
            reason: format!("Principal holds role '{role}'"),
            principal_id: Some(principal.id),
            roles,
            denial: None,
        }
    } else {
        RoleCheckExplanation {
            required_role: role,
            granted: false,
            reason: format!(
                "Principal does not hold role '{role}'. Current roles: {:?}",
                principal.roles.authorities()
            ),
            principal_id: Some(principal.id),
            roles,
            denial: Some(DenialKind::MissingRole),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{RoleSet, SessionContext};

    fn ctx_with(roles: impl Into<RoleSet>) -> SessionContext {
        SessionContext::authenticated(Employee::new(EmployeeId::new(), "jdoe").with_roles(roles))
    }

    #[test]
    fn predicates_fail_without_principal() {
        let ctx = SessionContext::anonymous();
        assert_eq!(is_admin(&ctx), Err(AuthzError::Unauthenticated));
        assert_eq!(is_manager(&ctx), Err(AuthzError::Unauthenticated));
        assert_eq!(is_smo(&ctx), Err(AuthzError::Unauthenticated));
        assert_eq!(is_hr(&ctx), Err(AuthzError::Unauthenticated));
        assert_eq!(is_admin_or_manager(&ctx), Err(AuthzError::Unauthenticated));
    }

    #[test]
    fn admin_does_not_imply_other_roles() {
        let ctx = ctx_with([Role::Admin]);
        assert_eq!(is_admin(&ctx), Ok(true));
        assert_eq!(is_manager(&ctx), Ok(false));
        assert_eq!(is_smo(&ctx), Ok(false));
        assert_eq!(is_hr(&ctx), Ok(false));
    }

    #[test]
    fn admin_or_manager_is_explicit_or() {
        assert_eq!(is_admin_or_manager(&ctx_with([Role::Admin])), Ok(true));
        assert_eq!(is_admin_or_manager(&ctx_with([Role::Manager])), Ok(true));
        assert_eq!(is_admin_or_manager(&ctx_with([Role::Smo, Role::Hr])), Ok(false));
        assert_eq!(is_admin_or_manager(&ctx_with(RoleSet::new())), Ok(false));
    }

    /// Context that counts principal lookups.
    struct CountingContext {
        inner: SessionContext,
        lookups: std::cell::Cell<usize>,
    }

    impl SecurityContext for CountingContext {
        fn authenticated_principal(&self) -> Option<&Employee> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.authenticated_principal()
        }

        fn authenticated_principal_mut(&mut self) -> Option<&mut Employee> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.authenticated_principal_mut()
        }
    }

    #[test]
    fn admin_or_manager_looks_up_principal_once() {
        for roles in [RoleSet::from([Role::Manager]), RoleSet::from([Role::Hr])] {
            let ctx = CountingContext {
                inner: ctx_with(roles),
                lookups: std::cell::Cell::new(0),
            };
            is_admin_or_manager(&ctx).unwrap();
            assert_eq!(ctx.lookups.get(), 1);
        }
    }

    #[test]
    fn is_self_matches_on_id_only() {
        let id = EmployeeId::new();
        let ctx = SessionContext::authenticated(Employee::new(id, "jdoe"));

        let same = Employee::new(id, "a different username");
        let other = Employee::new(EmployeeId::new(), "jdoe");

        assert!(is_self(&ctx, Some(&same)));
        assert!(!is_self(&ctx, Some(&other)));
    }

    #[test]
    fn is_self_is_fail_closed() {
        let target = Employee::new(EmployeeId::new(), "jdoe");

        let ctx = SessionContext::authenticated(target.clone());
        assert!(!is_self::<_, Employee>(&ctx, None));

        let anonymous = SessionContext::anonymous();
        assert!(!is_self(&anonymous, Some(&target)));
        assert!(!is_self::<_, Employee>(&anonymous, None));
    }

    #[test]
    fn authorize_grants_held_role() {
        assert_eq!(authorize(&ctx_with([Role::Hr]), Role::Hr), Ok(()));
    }

    #[test]
    fn authorize_denies_missing_role() {
        assert_eq!(
            authorize(&ctx_with([Role::Hr]), Role::Admin),
            Err(AuthzError::Forbidden(Role::Admin))
        );
    }

    #[test]
    fn authorize_any_requires_one_of() {
        let ctx = ctx_with([Role::Manager]);
        assert_eq!(authorize_any(&ctx, &[Role::Admin, Role::Manager]), Ok(()));
        assert_eq!(
            authorize_any(&ctx, &[Role::Smo, Role::Hr]),
            Err(AuthzError::Forbidden(Role::Smo))
        );
        assert!(authorize_any(&ctx, &[]).is_err());
    }

    #[test]
    fn authorize_propagates_unauthenticated() {
        assert_eq!(
            authorize(&SessionContext::anonymous(), Role::Employee),
            Err(AuthzError::Unauthenticated)
        );
    }

    #[test]
    fn explanation_for_anonymous_context() {
        let explanation = explain_role_check(&SessionContext::anonymous(), Role::Admin);
        assert!(!explanation.granted);
        assert_eq!(explanation.denial, Some(DenialKind::Unauthenticated));
        assert_eq!(explanation.principal_id, None);
    }

    #[test]
    fn explanation_lists_current_roles_on_denial() {
        let explanation = explain_role_check(&ctx_with([Role::Smo]), Role::Hr);
        assert!(!explanation.granted);
        assert_eq!(explanation.denial, Some(DenialKind::MissingRole));
        assert!(explanation.reason.contains("ROLE_SMO"));

        let json = serde_json::to_value(&explanation).unwrap();
        assert_eq!(json["required_role"], "ROLE_RRHH");
        assert_eq!(json["denial"], "missing_role");
    }

    #[test]
    fn explanation_when_granted() {
        let explanation = explain_role_check(&ctx_with([Role::Admin]), Role::Admin);
        assert!(explanation.granted);
        assert_eq!(explanation.denial, None);
        assert_eq!(explanation.roles, vec![Role::Admin]);
    }

    fn role_set() -> impl Strategy<Value = RoleSet> {
        prop::collection::vec(prop::sample::select(Role::ALL.to_vec()), 0..6)
            .prop_map(|roles| roles.into_iter().collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every predicate is exactly set membership; only
        /// admin-or-manager composes two roles.
        #[test]
        fn predicates_match_set_membership(roles in role_set()) {
            let ctx = ctx_with(roles.clone());

            prop_assert_eq!(is_admin(&ctx), Ok(roles.contains(Role::Admin)));
            prop_assert_eq!(is_manager(&ctx), Ok(roles.contains(Role::Manager)));
            prop_assert_eq!(is_smo(&ctx), Ok(roles.contains(Role::Smo)));
            prop_assert_eq!(is_hr(&ctx), Ok(roles.contains(Role::Hr)));
            prop_assert_eq!(
                is_admin_or_manager(&ctx),
                Ok(roles.contains(Role::Admin) || roles.contains(Role::Manager))
            );

            for role in Role::ALL {
                prop_assert_eq!(authorize(&ctx, role).is_ok(), roles.contains(role));
            }
        }
    }
}
