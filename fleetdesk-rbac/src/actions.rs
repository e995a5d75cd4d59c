//! # Actions
//!
//! Defines the action verbs that appear in role permission lists, plus the
//! four coarse data actions answered by a role's data-access flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RbacError;

/// Action verbs that can be granted on a resource.
///
/// Most resources use the CRUD verbs; workflow resources add their own:
/// - **Approve / Reject / Void**: invoice and expense workflows
/// - **Assign**: fleet assignment
/// - **Optimize**: route planning
/// - **Schedule**: maintenance and report scheduling
/// - **ManageRoles / AssignRoles / ViewAudit**: user administration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create new records.
    Create,

    /// View records.
    Read,

    /// Modify existing records.
    Update,

    /// Permanently remove records.
    Delete,

    /// Approve a pending invoice or expense.
    Approve,

    /// Void an issued invoice.
    Void,

    /// Reject a pending expense.
    Reject,

    /// Download or export data.
    Export,

    /// Upload or import data.
    Import,

    /// Assign vehicles or drivers.
    Assign,

    /// Run route optimization.
    Optimize,

    /// Schedule maintenance or reports.
    Schedule,

    /// Change the roles attached to users.
    ManageRoles,

    /// Assign roles from the user management screen.
    AssignRoles,

    /// View the user audit trail.
    ViewAudit,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Approve => "approve",
            Action::Void => "void",
            Action::Reject => "reject",
            Action::Export => "export",
            Action::Import => "import",
            Action::Assign => "assign",
            Action::Optimize => "optimize",
            Action::Schedule => "schedule",
            Action::ManageRoles => "manage_roles",
            Action::AssignRoles => "assign_roles",
            Action::ViewAudit => "view_audit",
        }
    }

    /// Parse action from its string representation.
    ///
    /// Matching is exact and there are no aliases: `"view"` is not `read`.
    /// Permission lookups compare verbs literally, so an alias would grant
    /// something the tables never listed.
    ///
    /// # Example
    ///
    /// ```
    /// use fleetdesk_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("void"), Some(Action::Void));
    /// assert_eq!(Action::parse("manage_roles"), Some(Action::ManageRoles));
    /// assert_eq!(Action::parse("view"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Action::Create),
            "read" => Some(Action::Read),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            "approve" => Some(Action::Approve),
            "void" => Some(Action::Void),
            "reject" => Some(Action::Reject),
            "export" => Some(Action::Export),
            "import" => Some(Action::Import),
            "assign" => Some(Action::Assign),
            "optimize" => Some(Action::Optimize),
            "schedule" => Some(Action::Schedule),
            "manage_roles" => Some(Action::ManageRoles),
            "assign_roles" => Some(Action::AssignRoles),
            "view_audit" => Some(Action::ViewAudit),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            Action::Create,
            Action::Read,
            Action::Update,
            Action::Delete,
            Action::Approve,
            Action::Void,
            Action::Reject,
            Action::Export,
            Action::Import,
            Action::Assign,
            Action::Optimize,
            Action::Schedule,
            Action::ManageRoles,
            Action::AssignRoles,
            Action::ViewAudit,
        ]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::parse(s).ok_or_else(|| RbacError::UnknownAction(s.to_string()))
    }
}

/// Coarse, resource-independent data actions.
///
/// Each maps onto one of the `can_*_all` flags in a role's data access
/// profile. This is a blunter gate than a per-resource [`Action`] lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CoarseAction {
    /// View records.
    View,
    /// Edit records.
    Edit,
    /// Delete records.
    Delete,
    /// Create records.
    Create,
}

impl CoarseAction {
    /// Get the string representation of the coarse action.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoarseAction::View => "view",
            CoarseAction::Edit => "edit",
            CoarseAction::Delete => "delete",
            CoarseAction::Create => "create",
        }
    }

    /// Parse coarse action from string; anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "view" => Some(CoarseAction::View),
            "edit" => Some(CoarseAction::Edit),
            "delete" => Some(CoarseAction::Delete),
            "create" => Some(CoarseAction::Create),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!(Action::parse("create"), Some(Action::Create));
        assert_eq!(Action::parse("read"), Some(Action::Read));
        assert_eq!(Action::parse("approve"), Some(Action::Approve));
        assert_eq!(Action::parse("reject"), Some(Action::Reject));
        assert_eq!(Action::parse("assign_roles"), Some(Action::AssignRoles));
        assert_eq!(Action::parse("view_audit"), Some(Action::ViewAudit));

        // No aliases and no case folding
        assert_eq!(Action::parse("write"), None);
        assert_eq!(Action::parse("Read"), None);
        assert_eq!(Action::parse("invalid"), None);
    }

    #[test]
    fn test_action_as_str_round_trip() {
        for action in Action::all() {
            assert_eq!(Action::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_from_str_error() {
        assert_eq!(
            "launch".parse::<Action>(),
            Err(RbacError::UnknownAction("launch".to_string()))
        );
    }

    #[test]
    fn test_all_actions_count() {
        assert_eq!(Action::all().len(), 15);
    }

    #[test]
    fn test_coarse_action_parsing() {
        assert_eq!(CoarseAction::parse("view"), Some(CoarseAction::View));
        assert_eq!(CoarseAction::parse("edit"), Some(CoarseAction::Edit));
        assert_eq!(CoarseAction::parse("delete"), Some(CoarseAction::Delete));
        assert_eq!(CoarseAction::parse("create"), Some(CoarseAction::Create));
        assert_eq!(CoarseAction::parse("read"), None);
        assert_eq!(CoarseAction::Edit.as_str(), "edit");
    }
}
