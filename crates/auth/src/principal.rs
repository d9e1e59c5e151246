use std::sync::Arc;

use serde::{Deserialize, Serialize};

use staffhub_core::{EmployeeId, Entity, SiteId};

use crate::{Role, RoleSet};

/// Organizational unit owning employees.
///
/// Principals hold a shared reference to their site; this layer never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
}

impl Site {
    pub fn new(id: SiteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Site {
    type Id = SiteId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Pending-item counters shown to the employee, plus their aggregate.
///
/// The total is always computed from the three parts at construction, so a
/// snapshot can never carry a stale aggregate.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationCounters {
    pending_absences: u32,
    pending_own_absences: u32,
    pending_delegations: u32,
    pending_notifications: u32,
}

impl NotificationCounters {
    pub fn new(absences: u32, own_absences: u32, delegations: u32) -> Self {
        Self {
            pending_absences: absences,
            pending_own_absences: own_absences,
            pending_delegations: delegations,
            pending_notifications: absences
                .saturating_add(own_absences)
                .saturating_add(delegations),
        }
    }

    /// Absences awaiting this employee's approval.
    pub fn pending_absences(&self) -> u32 {
        self.pending_absences
    }

    /// The employee's own absence requests still pending.
    pub fn pending_own_absences(&self) -> u32 {
        self.pending_own_absences
    }

    pub fn pending_delegations(&self) -> u32 {
        self.pending_delegations
    }

    pub fn pending_notifications(&self) -> u32 {
        self.pending_notifications
    }
}

/// The authenticated employee for the current session.
///
/// Built by the authentication layer; this crate only reads it and, through
/// [`crate::derived`], updates the session-scoped counters and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub username: String,
    pub roles: RoleSet,
    pub site: Option<Arc<Site>>,
    /// Yearly holiday entitlement in days; `None` when not configured.
    pub annual_holidays: Option<u32>,
    pub(crate) counters: NotificationCounters,
    pub(crate) absence_views: bool,
}

impl Employee {
    pub fn new(id: EmployeeId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            roles: RoleSet::new(),
            site: None,
            annual_holidays: None,
            counters: NotificationCounters::default(),
            absence_views: false,
        }
    }

    pub fn with_roles(mut self, roles: impl Into<RoleSet>) -> Self {
        self.roles = roles.into();
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    pub fn with_site(mut self, site: Arc<Site>) -> Self {
        self.site = Some(site);
        self
    }

    pub fn with_annual_holidays(mut self, days: u32) -> Self {
        self.annual_holidays = Some(days);
        self
    }

    pub fn site(&self) -> Option<&Site> {
        self.site.as_deref()
    }

    pub fn counters(&self) -> NotificationCounters {
        self.counters
    }

    /// Whether the employee has already seen their absence list this session.
    pub fn absence_views(&self) -> bool {
        self.absence_views
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
