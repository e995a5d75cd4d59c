//! Module-specific action tables.
//!
//! Screens for invoices, expenses and user management carry their own
//! per-role verb lists. These are separate from the role permission table
//! and are not kept in sync with it: the invoice table grants `export`, the
//! permission table never does.

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::roles::Role;

use Action::{Approve, AssignRoles, Create, Delete, Export, Read, Reject, Update, ViewAudit, Void};

/// Which module table to consult.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ModuleTable {
    /// Invoice screen actions
    Invoice,
    /// Expense screen actions
    Expense,
    /// User management screen actions
    UserManagement,
}

impl ModuleTable {
    /// Parse table name; the spelling matches the serialized form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "invoice" => Some(Self::Invoice),
            "expense" => Some(Self::Expense),
            "user_management" => Some(Self::UserManagement),
            _ => None,
        }
    }

    /// Actions this table grants to a role.
    ///
    /// ```
    /// use fleetdesk_rbac::module_actions::ModuleTable;
    /// use fleetdesk_rbac::{Action, Role};
    ///
    /// let actions = ModuleTable::Invoice.actions(Role::Supervisor);
    /// assert!(actions.contains(&Action::Export));
    /// assert!(ModuleTable::UserManagement.actions(Role::DataEntry).is_empty());
    /// ```
    pub fn actions(&self, role: Role) -> &'static [Action] {
        match (self, role) {
            (Self::Invoice, Role::Admin) => &[Create, Read, Update, Delete, Approve, Void, Export],
            (Self::Invoice, Role::GeneralManager) => &[Create, Read, Update, Approve, Void, Export],
            (Self::Invoice, Role::Supervisor) => &[Create, Read, Update, Export],
            (Self::Invoice, Role::DataEntry) => &[Create, Read],

            (Self::Expense, Role::Admin) => {
                &[Create, Read, Update, Delete, Approve, Reject, Export]
            }
            (Self::Expense, Role::GeneralManager) => {
                &[Create, Read, Update, Approve, Reject, Export]
            }
            (Self::Expense, Role::Supervisor) => &[Create, Read, Update, Approve, Export],
            (Self::Expense, Role::DataEntry) => &[Create, Read],

            (Self::UserManagement, Role::Admin) => {
                &[Create, Read, Update, Delete, AssignRoles, ViewAudit]
            }
            (Self::UserManagement, Role::GeneralManager) => &[Read],
            (Self::UserManagement, Role::Supervisor) => &[Read],
            (Self::UserManagement, Role::DataEntry) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Resource;

    #[test]
    fn test_invoice_table() {
        assert!(ModuleTable::Invoice.actions(Role::Admin).contains(&Void));
        assert!(!ModuleTable::Invoice.actions(Role::Supervisor).contains(&Void));
        assert_eq!(ModuleTable::Invoice.actions(Role::DataEntry), &[Create, Read]);
    }

    #[test]
    fn test_expense_table() {
        assert!(ModuleTable::Expense.actions(Role::Supervisor).contains(&Approve));
        assert!(!ModuleTable::Expense.actions(Role::Supervisor).contains(&Reject));
    }

    #[test]
    fn test_user_management_table() {
        assert!(ModuleTable::UserManagement
            .actions(Role::Admin)
            .contains(&AssignRoles));
        assert_eq!(ModuleTable::UserManagement.actions(Role::GeneralManager), &[Read]);
        assert!(ModuleTable::UserManagement.actions(Role::DataEntry).is_empty());
    }

    #[test]
    fn test_independent_of_permission_table() {
        // Export is granted on the invoice screen but not in the role table.
        assert!(ModuleTable::Invoice.actions(Role::GeneralManager).contains(&Export));
        assert!(!Role::GeneralManager
            .definition()
            .allows(Resource::Invoices, Export));
    }

    #[test]
    fn test_table_parse() {
        assert_eq!(ModuleTable::parse("invoice"), Some(ModuleTable::Invoice));
        assert_eq!(ModuleTable::parse("expense"), Some(ModuleTable::Expense));
        assert_eq!(ModuleTable::parse("invoices"), None);
        assert_eq!(ModuleTable::parse("expenses"), None);
        assert_eq!(ModuleTable::parse("Invoice"), None);
        assert_eq!(
            ModuleTable::parse("user_management"),
            Some(ModuleTable::UserManagement)
        );
        assert_eq!(ModuleTable::parse("fleet"), None);
    }
}
