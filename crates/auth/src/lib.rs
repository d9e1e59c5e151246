//! `staffhub-auth` — identity and authorization boundary for the current session.
//!
//! This crate is intentionally decoupled from HTTP and storage: the host passes
//! a [`SecurityContext`] into every call instead of relying on ambient state.

pub mod authorize;
pub mod context;
pub mod derived;
pub mod error;
pub mod identity;
pub mod principal;
pub mod roles;

pub use authorize::{
    DenialKind, RoleCheckExplanation, authorize, authorize_any, explain_role_check, has_role,
    is_admin, is_admin_or_manager, is_hr, is_manager, is_self, is_smo,
};
pub use context::{SecurityContext, SessionContext};
pub use derived::{pending_holidays, update_absence_view_flag, update_notification_counters};
pub use error::AuthzError;
pub use identity::{current_principal, current_principal_mut, current_site};
pub use principal::{Employee, NotificationCounters, Site};
pub use roles::{Role, RoleSet};
