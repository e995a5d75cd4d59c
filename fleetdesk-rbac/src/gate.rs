//! # Access Gate
//!
//! Single-shot evaluation deciding whether a protected piece of UI renders.
//! The outcome keeps "wrong role" and "missing permission" apart because the
//! presentation layer shows different remediation text for each.

use serde::Serialize;

use crate::permissions::Permission;
use crate::roles::Role;

/// Result of an access gate evaluation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum GateOutcome {
    /// Render the wrapped content.
    Allow,

    /// The required role is not held.
    DenyRole {
        /// Role the content requires
        required: Role,
    },

    /// The role is held but the permission check failed.
    DenyPermission {
        /// Permission the content requires
        permission: Permission,
    },
}

impl GateOutcome {
    /// Check if the content may render.
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateOutcome::Allow)
    }

    /// Stable outcome code.
    pub fn as_str(&self) -> &'static str {
        match self {
            GateOutcome::Allow => "allow",
            GateOutcome::DenyRole { .. } => "deny_role",
            GateOutcome::DenyPermission { .. } => "deny_permission",
        }
    }
}

/// Requirement attached to a protected piece of UI.
///
/// # Example
///
/// ```
/// use fleetdesk_rbac::{AccessRequirement, Action, GateOutcome, Permission, Resource, Role};
///
/// let requirement = AccessRequirement::role(Role::Supervisor)
///     .with_permission(Permission::new(Resource::Expenses, Action::Approve));
///
/// assert_eq!(requirement.evaluate(Some(Role::Supervisor), |_| true), GateOutcome::Allow);
/// assert!(matches!(
///     requirement.evaluate(Some(Role::DataEntry), |_| true),
///     GateOutcome::DenyRole { required: Role::Supervisor }
/// ));
/// ```
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AccessRequirement {
    /// Role the caller must hold
    pub role: Role,
    /// Optional permission checked once the role is held
    pub permission: Option<Permission>,
}

impl AccessRequirement {
    /// Require a role and nothing else.
    pub fn role(role: Role) -> Self {
        Self {
            role,
            permission: None,
        }
    }

    /// Also require a permission.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    /// Evaluate against the caller's role.
    ///
    /// The role is held only on exact match; outranking the required role
    /// does not count. `permits` answers the permission check and is only
    /// consulted once the role check passes.
    pub fn evaluate<F>(&self, current: Option<Role>, permits: F) -> GateOutcome
    where
        F: FnOnce(&Permission) -> bool,
    {
        self.evaluate_held(current == Some(self.role), permits)
    }

    /// Evaluate with the role check already resolved by the caller.
    pub fn evaluate_held<F>(&self, role_held: bool, permits: F) -> GateOutcome
    where
        F: FnOnce(&Permission) -> bool,
    {
        if !role_held {
            tracing::debug!(required = %self.role, "access gate denied: role not held");
            return GateOutcome::DenyRole {
                required: self.role,
            };
        }

        match self.permission {
            Some(permission) if !permits(&permission) => {
                tracing::debug!(%permission, "access gate denied: permission missing");
                GateOutcome::DenyPermission { permission }
            }
            _ => GateOutcome::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::resources::Resource;

    fn approve_expenses() -> Permission {
        Permission::new(Resource::Expenses, Action::Approve)
    }

    #[test]
    fn test_role_not_held() {
        let req = AccessRequirement::role(Role::Admin);
        assert_eq!(
            req.evaluate(Some(Role::Supervisor), |_| true),
            GateOutcome::DenyRole {
                required: Role::Admin
            }
        );
        assert_eq!(
            req.evaluate(None, |_| true),
            GateOutcome::DenyRole {
                required: Role::Admin
            }
        );
    }

    #[test]
    fn test_higher_role_does_not_satisfy() {
        let req = AccessRequirement::role(Role::Supervisor);
        assert!(!req.evaluate(Some(Role::Admin), |_| true).is_allowed());
    }

    #[test]
    fn test_permission_missing() {
        let req = AccessRequirement::role(Role::DataEntry).with_permission(approve_expenses());
        assert_eq!(
            req.evaluate(Some(Role::DataEntry), |_| false),
            GateOutcome::DenyPermission {
                permission: approve_expenses()
            }
        );
    }

    #[test]
    fn test_permission_not_checked_when_role_missing() {
        let req = AccessRequirement::role(Role::Admin).with_permission(approve_expenses());
        let outcome = req.evaluate(Some(Role::DataEntry), |_| panic!("must not be called"));
        assert_eq!(outcome.as_str(), "deny_role");
    }

    #[test]
    fn test_allow() {
        let req = AccessRequirement::role(Role::Supervisor).with_permission(approve_expenses());
        let outcome = req.evaluate(Some(Role::Supervisor), |p| *p == approve_expenses());
        assert!(outcome.is_allowed());
        assert_eq!(outcome.as_str(), "allow");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(GateOutcome::DenyRole {
            required: Role::GeneralManager,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outcome": "deny_role", "required": "general_manager"})
        );
    }
}
