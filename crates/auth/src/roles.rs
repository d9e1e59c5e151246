use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use staffhub_core::{DomainError, DomainResult};

/// Role granted to an employee.
///
/// The set is closed: authority strings coming from the authentication layer
/// are parsed once at the boundary, and every predicate matches on the enum.
/// There is no hierarchy between roles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    /// Service delivery manager.
    #[serde(rename = "ROLE_SDM")]
    Manager,
    #[serde(rename = "ROLE_SMO")]
    Smo,
    /// Human resources.
    #[serde(rename = "ROLE_RRHH")]
    Hr,
    /// Baseline role held by every employee; not checked by any predicate.
    #[serde(rename = "ROLE_USER")]
    Employee,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Admin, Role::Manager, Role::Smo, Role::Hr, Role::Employee];

    /// Authority string as issued by the authentication layer.
    pub fn authority(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Manager => "ROLE_SDM",
            Role::Smo => "ROLE_SMO",
            Role::Hr => "ROLE_RRHH",
            Role::Employee => "ROLE_USER",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.authority())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    /// Exact match only: no trimming, no case folding, no prefix matching.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.authority() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown role authority '{s}'")))
    }
}

/// Set of roles granted to a principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse authority strings into a role set.
    ///
    /// Fails on the first unknown authority so a typo can never silently drop
    /// (or grant) a role.
    pub fn from_authorities<I, S>(authorities: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        authorities
            .into_iter()
            .map(|a| a.as_ref().parse::<Role>())
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn insert(&mut self, role: Role) -> bool {
        self.0.insert(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    pub fn authorities(&self) -> Vec<&'static str> {
        self.iter().map(|r| r.authority()).collect()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}
