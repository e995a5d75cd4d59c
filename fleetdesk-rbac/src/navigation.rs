//! Navigation menu and toolbar actions.
//!
//! Both are keyed on role membership rather than the permission table. A
//! menu entry lists the roles that see it; the toolbar is decided by the
//! most privileged role held.

use serde::Serialize;

use crate::actions::Action;
use crate::resources::Module;
use crate::roles::Role;

/// One entry of the side navigation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavItem {
    /// Menu label
    pub label: &'static str,
    /// Module the entry opens
    pub module: Module,
    /// Roles that see the entry
    pub roles: &'static [Role],
}

impl NavItem {
    /// Check if any of the given roles sees this entry.
    pub fn visible_to(&self, held: &[Role]) -> bool {
        held.iter().any(|role| self.roles.contains(role))
    }
}

const EVERYONE: &[Role] = &[
    Role::Admin,
    Role::GeneralManager,
    Role::Supervisor,
    Role::DataEntry,
];

/// The side navigation, in menu order.
pub static NAVIGATION: [NavItem; 7] = [
    NavItem {
        label: "Dashboard",
        module: Module::Dashboard,
        roles: EVERYONE,
    },
    NavItem {
        label: "Invoices",
        module: Module::Invoices,
        roles: EVERYONE,
    },
    NavItem {
        label: "Expenses",
        module: Module::Expenses,
        roles: EVERYONE,
    },
    NavItem {
        label: "Fleet",
        module: Module::Fleet,
        roles: EVERYONE,
    },
    NavItem {
        label: "Maintenance",
        module: Module::Maintenance,
        roles: EVERYONE,
    },
    NavItem {
        label: "User Management",
        module: Module::UserManagement,
        roles: &[Role::Admin],
    },
    NavItem {
        label: "Settings",
        module: Module::Settings,
        roles: &[Role::Admin],
    },
];

/// Navigation entries visible to a set of held roles, in menu order.
///
/// ```
/// use fleetdesk_rbac::navigation::navigation_for;
/// use fleetdesk_rbac::Role;
///
/// let labels: Vec<_> = navigation_for(&[Role::Supervisor])
///     .iter()
///     .map(|item| item.label)
///     .collect();
/// assert_eq!(labels, ["Dashboard", "Invoices", "Expenses", "Fleet", "Maintenance"]);
/// assert!(navigation_for(&[]).is_empty());
/// ```
pub fn navigation_for(held: &[Role]) -> Vec<&'static NavItem> {
    NAVIGATION.iter().filter(|item| item.visible_to(held)).collect()
}

impl Role {
    /// Toolbar actions offered to this role.
    pub fn toolbar_actions(&self) -> &'static [Action] {
        match self {
            Role::Admin => &[
                Action::Create,
                Action::Read,
                Action::Update,
                Action::Delete,
                Action::Export,
            ],
            Role::GeneralManager | Role::Supervisor => {
                &[Action::Create, Action::Read, Action::Update, Action::Export]
            }
            Role::DataEntry => &[Action::Create, Action::Read],
        }
    }
}

/// Toolbar actions for a set of held roles; the highest role decides.
pub fn toolbar_actions_for(held: &[Role]) -> &'static [Action] {
    held.iter()
        .max()
        .map(|role| role.toolbar_actions())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(navigation_for(&[Role::Admin]).len(), NAVIGATION.len());
    }

    #[test]
    fn test_admin_only_entries() {
        let items = navigation_for(&[Role::GeneralManager]);
        assert!(items.iter().all(|item| item.module != Module::UserManagement));
        assert!(items.iter().all(|item| item.module != Module::Settings));
    }

    #[test]
    fn test_any_role_grants_entry() {
        let items = navigation_for(&[Role::DataEntry, Role::Admin]);
        assert_eq!(items.len(), NAVIGATION.len());
        assert_eq!(items[0].label, "Dashboard");
        assert_eq!(items[6].label, "Settings");
    }

    #[test]
    fn test_toolbar_actions() {
        assert!(Role::Admin.toolbar_actions().contains(&Action::Delete));
        assert!(!Role::Supervisor.toolbar_actions().contains(&Action::Delete));
        assert_eq!(
            Role::GeneralManager.toolbar_actions(),
            Role::Supervisor.toolbar_actions()
        );
        assert!(!Role::DataEntry.toolbar_actions().contains(&Action::Export));
    }

    #[test]
    fn test_toolbar_highest_role_decides() {
        assert_eq!(
            toolbar_actions_for(&[Role::DataEntry, Role::Admin]),
            Role::Admin.toolbar_actions()
        );
        assert!(toolbar_actions_for(&[]).is_empty());
    }
}
