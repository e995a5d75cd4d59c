//! # Roles
//!
//! The closed set of privilege tiers a back-office user can hold.
//!
//! Role strings arrive from the identity provider; anything outside the
//! catalog never becomes a [`Role`], so every decision made with it fails
//! closed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RbacError;

/// Back-office role.
///
/// Variants are declared in ascending privilege, so the derived ordering
/// agrees with [`Role::level`]:
/// DataEntry (20) < Supervisor (60) < GeneralManager (80) < Admin (100)
///
/// # Examples
///
/// ```
/// use fleetdesk_rbac::Role;
///
/// assert_eq!(Role::parse("general_manager"), Some(Role::GeneralManager));
/// assert_eq!(Role::parse("ghost_role"), None);
/// assert!(Role::Admin > Role::Supervisor);
/// assert_eq!(Role::Admin.level(), 100);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Basic data entry with limited access
    DataEntry,

    /// Team management with operational oversight
    Supervisor,

    /// Strategic oversight with full operational access
    GeneralManager,

    /// Full system access including user management
    Admin,
}

impl Role {
    /// Parse role from its catalog string.
    ///
    /// Matching is exact: role strings are machine identifiers, and a near
    /// miss such as `"Admin"` must not grant anything.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "data_entry" => Some(Self::DataEntry),
            "supervisor" => Some(Self::Supervisor),
            "general_manager" => Some(Self::GeneralManager),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Get the catalog string of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataEntry => "data_entry",
            Self::Supervisor => "supervisor",
            Self::GeneralManager => "general_manager",
            Self::Admin => "admin",
        }
    }

    /// Get the display name from the role's catalog entry.
    ///
    /// ```
    /// use fleetdesk_rbac::Role;
    ///
    /// assert_eq!(Role::Admin.display_name(), "System Administrator");
    /// ```
    pub fn display_name(&self) -> &'static str {
        self.definition().name
    }

    /// Get the privilege level from the role's catalog entry.
    pub fn level(&self) -> u32 {
        self.definition().level
    }

    /// All catalog roles, lowest privilege first.
    pub fn all() -> [Role; 4] {
        [
            Role::DataEntry,
            Role::Supervisor,
            Role::GeneralManager,
            Role::Admin,
        ]
    }

    /// Check if this role sits strictly above another in the hierarchy.
    pub fn outranks(&self, other: Role) -> bool {
        self.level() > other.level()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| RbacError::UnknownRole(s.to_string()))
    }
}

/// Anything that may name a catalog role.
///
/// Lets the decision functions take either a typed [`Role`] or the raw
/// string handed over by the session layer. A value that does not resolve
/// is treated as the unknown role.
pub trait IntoRole {
    /// Resolve to a catalog role, or `None` if it names none.
    fn into_role(self) -> Option<Role>;
}

impl IntoRole for Role {
    fn into_role(self) -> Option<Role> {
        Some(self)
    }
}

impl IntoRole for &Role {
    fn into_role(self) -> Option<Role> {
        Some(*self)
    }
}

impl IntoRole for Option<Role> {
    fn into_role(self) -> Option<Role> {
        self
    }
}

impl IntoRole for &str {
    fn into_role(self) -> Option<Role> {
        let role = Role::parse(self);
        if role.is_none() {
            tracing::debug!(role = self, "unknown role; failing closed");
        }
        role
    }
}

impl IntoRole for &String {
    fn into_role(self) -> Option<Role> {
        self.as_str().into_role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hierarchy() {
        assert!(Role::Admin > Role::GeneralManager);
        assert!(Role::GeneralManager > Role::Supervisor);
        assert!(Role::Supervisor > Role::DataEntry);
    }

    #[test]
    fn test_ordering_agrees_with_level() {
        for a in Role::all() {
            for b in Role::all() {
                assert_eq!(a.cmp(&b), a.level().cmp(&b.level()), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_role_parse_is_exact() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("data_entry"), Some(Role::DataEntry));
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(" admin"), None);
        assert_eq!(Role::parse("moderator"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_round_trip_strings() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(role));
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn test_from_str_reports_unknown_role() {
        let err = "ghost_role".parse::<Role>().unwrap_err();
        assert_eq!(err, RbacError::UnknownRole("ghost_role".to_string()));
        assert_eq!("supervisor".parse::<Role>(), Ok(Role::Supervisor));
    }

    #[test]
    fn test_serde_uses_catalog_strings() {
        let json = serde_json::to_string(&Role::GeneralManager).unwrap();
        assert_eq!(json, "\"general_manager\"");
        let role: Role = serde_json::from_str("\"data_entry\"").unwrap();
        assert_eq!(role, Role::DataEntry);
    }

    #[test]
    fn test_into_role() {
        assert_eq!("admin".into_role(), Some(Role::Admin));
        assert_eq!("ghost_role".into_role(), None);
        assert_eq!(Role::Supervisor.into_role(), Some(Role::Supervisor));
        assert_eq!(None::<Role>.into_role(), None);
        let owned = String::from("general_manager");
        assert_eq!((&owned).into_role(), Some(Role::GeneralManager));
    }

    #[test]
    fn test_outranks() {
        assert!(Role::Admin.outranks(Role::Supervisor));
        assert!(!Role::Supervisor.outranks(Role::Admin));
        assert!(!Role::Supervisor.outranks(Role::Supervisor));
    }
}
