//! # Role Catalog
//!
//! The static role table. Each [`Role`] maps to exactly one
//! [`RoleDefinition`] through an exhaustive `match`, so adding a role
//! without a definition does not compile. Definitions are `const` data and
//! are never mutated.
//!
//! Permission lists are authored per role. A higher level does not pull in
//! a lower role's permissions; the lists merely happen to nest.
//!
//! | Role | Level | Data scope |
//! |------|-------|------------|
//! | `admin` | 100 | all |
//! | `general_manager` | 80 | all |
//! | `supervisor` | 60 | department |
//! | `data_entry` | 20 | assigned |

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::permissions::{PermissionEntry, PermissionSet};
use crate::resources::{Module, Resource};
use crate::roles::Role;

/// Breadth of records a role may act on.
///
/// Ordered from narrowest to broadest; the default is the narrowest.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DataScope {
    /// Only records the user created
    #[default]
    Own,
    /// Records assigned to the user
    Assigned,
    /// Records of the user's department
    Department,
    /// Every record
    All,
}

impl DataScope {
    /// Get the string representation of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataScope::Own => "own",
            DataScope::Assigned => "assigned",
            DataScope::Department => "department",
            DataScope::All => "all",
        }
    }

    /// Rank of the scope, `0` for `own` up to `3` for `all`.
    pub fn breadth(&self) -> u8 {
        match self {
            DataScope::Own => 0,
            DataScope::Assigned => 1,
            DataScope::Department => 2,
            DataScope::All => 3,
        }
    }
}

/// Coarse data-access profile of a role.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DataAccess {
    /// May view every record
    pub can_view_all: bool,
    /// May edit every record
    pub can_edit_all: bool,
    /// May delete every record
    pub can_delete_all: bool,
    /// May create records anywhere
    pub can_create_all: bool,
    /// Field names hidden from this role regardless of resource
    pub restricted_fields: &'static [&'static str],
    /// Breadth of records the role acts on
    pub data_scope: DataScope,
}

/// System-level capabilities of a role.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemAccess {
    /// May create users and change role assignments
    pub can_manage_users: bool,
    /// May open the reports section
    pub can_view_reports: bool,
    /// May export data
    pub can_export_data: bool,
    /// May import data
    pub can_import_data: bool,
    /// May change system settings
    pub can_manage_settings: bool,
    /// May read the audit trail
    pub can_view_audit_logs: bool,
}

/// Named system capability, one per [`SystemAccess`] flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SystemCapability {
    /// `can_manage_users`
    ManageUsers,
    /// `can_view_reports`
    ViewReports,
    /// `can_export_data`
    ExportData,
    /// `can_import_data`
    ImportData,
    /// `can_manage_settings`
    ManageSettings,
    /// `can_view_audit_logs`
    ViewAuditLogs,
}

impl SystemCapability {
    /// Parse capability from its snake_case name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "manage_users" => Some(Self::ManageUsers),
            "view_reports" => Some(Self::ViewReports),
            "export_data" => Some(Self::ExportData),
            "import_data" => Some(Self::ImportData),
            "manage_settings" => Some(Self::ManageSettings),
            "view_audit_logs" => Some(Self::ViewAuditLogs),
            _ => None,
        }
    }
}

impl SystemAccess {
    /// No capabilities at all.
    pub const NONE: SystemAccess = SystemAccess {
        can_manage_users: false,
        can_view_reports: false,
        can_export_data: false,
        can_import_data: false,
        can_manage_settings: false,
        can_view_audit_logs: false,
    };

    /// Check a single capability flag.
    pub fn allows(&self, capability: SystemCapability) -> bool {
        match capability {
            SystemCapability::ManageUsers => self.can_manage_users,
            SystemCapability::ViewReports => self.can_view_reports,
            SystemCapability::ExportData => self.can_export_data,
            SystemCapability::ImportData => self.can_import_data,
            SystemCapability::ManageSettings => self.can_manage_settings,
            SystemCapability::ViewAuditLogs => self.can_view_audit_logs,
        }
    }
}

/// Catalog entry for one role.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RoleDefinition {
    /// Display name
    pub name: &'static str,
    /// Display description
    pub description: &'static str,
    /// Privilege level, higher is more privileged
    pub level: u32,
    /// Per-resource allowed verbs; a missing resource grants nothing
    pub permissions: &'static [PermissionEntry],
    /// UI sections the role may see
    pub visible_modules: &'static [Module],
    /// Coarse data-access profile
    pub data_access: DataAccess,
    /// System-level capabilities
    pub system_access: SystemAccess,
}

impl RoleDefinition {
    /// Find the permission row for a resource.
    pub fn entry(&self, resource: Resource) -> Option<&'static PermissionEntry> {
        self.permissions.iter().find(|entry| entry.resource == resource)
    }

    /// Check if this definition grants `action` on `resource`.
    pub fn allows(&self, resource: Resource, action: Action) -> bool {
        self.entry(resource)
            .map(|entry| entry.allows(action))
            .unwrap_or(false)
    }

    /// Check if a module is visible under this definition.
    pub fn shows(&self, module: Module) -> bool {
        self.visible_modules.contains(&module)
    }

    /// Collect the permission table into an owned set.
    pub fn permission_set(&self) -> PermissionSet {
        PermissionSet::from_entries(self.permissions)
    }
}

impl Role {
    /// Get this role's catalog entry.
    pub fn definition(&self) -> &'static RoleDefinition {
        match self {
            Role::Admin => &ADMIN,
            Role::GeneralManager => &GENERAL_MANAGER,
            Role::Supervisor => &SUPERVISOR,
            Role::DataEntry => &DATA_ENTRY,
        }
    }
}

const fn entry(resource: Resource, actions: &'static [Action]) -> PermissionEntry {
    PermissionEntry { resource, actions }
}

use Action::{
    Approve, Assign, Create, Delete, Export, ManageRoles, Optimize, Read, Reject, Schedule,
    Update, Void,
};

static ADMIN: RoleDefinition = RoleDefinition {
    name: "System Administrator",
    description: "Full system access with user management capabilities",
    level: 100,
    permissions: &[
        entry(Resource::Users, &[Create, Read, Update, Delete, ManageRoles]),
        entry(Resource::Companies, &[Create, Read, Update, Delete]),
        entry(Resource::Invoices, &[Create, Read, Update, Delete, Approve, Void]),
        entry(Resource::Expenses, &[Create, Read, Update, Delete, Approve, Reject]),
        entry(Resource::Customers, &[Create, Read, Update, Delete]),
        entry(Resource::Vendors, &[Create, Read, Update, Delete]),
        entry(Resource::Fleet, &[Create, Read, Update, Delete, Assign]),
        entry(Resource::Routes, &[Create, Read, Update, Delete, Optimize]),
        entry(Resource::Maintenance, &[Create, Read, Update, Delete, Schedule]),
        entry(Resource::Reports, &[Create, Read, Export, Schedule]),
        entry(Resource::Settings, &[Create, Read, Update, Delete]),
        entry(Resource::AuditLogs, &[Read, Export]),
    ],
    visible_modules: &[
        Module::Dashboard,
        Module::Invoices,
        Module::Expenses,
        Module::Customers,
        Module::Vendors,
        Module::Fleet,
        Module::Routes,
        Module::Maintenance,
        Module::Reports,
        Module::UserManagement,
        Module::Settings,
        Module::AuditLogs,
        Module::Analytics,
        Module::SystemHealth,
    ],
    data_access: DataAccess {
        can_view_all: true,
        can_edit_all: true,
        can_delete_all: true,
        can_create_all: true,
        restricted_fields: &[],
        data_scope: DataScope::All,
    },
    system_access: SystemAccess {
        can_manage_users: true,
        can_view_reports: true,
        can_export_data: true,
        can_import_data: true,
        can_manage_settings: true,
        can_view_audit_logs: true,
    },
};

static GENERAL_MANAGER: RoleDefinition = RoleDefinition {
    name: "General Manager",
    description: "Strategic oversight with full operational access",
    level: 80,
    permissions: &[
        entry(Resource::Invoices, &[Create, Read, Update, Approve, Void]),
        entry(Resource::Expenses, &[Create, Read, Update, Approve, Reject]),
        entry(Resource::Customers, &[Create, Read, Update]),
        entry(Resource::Vendors, &[Create, Read, Update]),
        entry(Resource::Fleet, &[Create, Read, Update, Assign]),
        entry(Resource::Routes, &[Create, Read, Update, Optimize]),
        entry(Resource::Maintenance, &[Create, Read, Update, Schedule]),
        entry(Resource::Reports, &[Create, Read, Export, Schedule]),
        entry(Resource::Analytics, &[Read, Export]),
    ],
    visible_modules: &[
        Module::Dashboard,
        Module::Invoices,
        Module::Expenses,
        Module::Customers,
        Module::Vendors,
        Module::Fleet,
        Module::Routes,
        Module::Maintenance,
        Module::Reports,
        Module::Analytics,
    ],
    data_access: DataAccess {
        can_view_all: true,
        can_edit_all: true,
        can_delete_all: false,
        can_create_all: true,
        restricted_fields: &["deleted_at", "internal_notes"],
        data_scope: DataScope::All,
    },
    system_access: SystemAccess {
        can_manage_users: false,
        can_view_reports: true,
        can_export_data: true,
        can_import_data: false,
        can_manage_settings: false,
        can_view_audit_logs: false,
    },
};

static SUPERVISOR: RoleDefinition = RoleDefinition {
    name: "Supervisor",
    description: "Team management with operational oversight",
    level: 60,
    permissions: &[
        entry(Resource::Invoices, &[Create, Read, Update]),
        entry(Resource::Expenses, &[Create, Read, Update, Approve]),
        entry(Resource::Customers, &[Create, Read, Update]),
        entry(Resource::Vendors, &[Create, Read, Update]),
        entry(Resource::Fleet, &[Read, Update]),
        entry(Resource::Routes, &[Create, Read, Update]),
        entry(Resource::Maintenance, &[Create, Read, Update]),
        entry(Resource::Reports, &[Read, Export]),
    ],
    visible_modules: &[
        Module::Dashboard,
        Module::Invoices,
        Module::Expenses,
        Module::Customers,
        Module::Vendors,
        Module::Fleet,
        Module::Routes,
        Module::Maintenance,
        Module::Reports,
    ],
    data_access: DataAccess {
        can_view_all: false,
        can_edit_all: false,
        can_delete_all: false,
        can_create_all: true,
        restricted_fields: &["deleted_at", "internal_notes", "cost_center", "profit_margin"],
        data_scope: DataScope::Department,
    },
    system_access: SystemAccess {
        can_manage_users: false,
        can_view_reports: true,
        can_export_data: true,
        can_import_data: false,
        can_manage_settings: false,
        can_view_audit_logs: false,
    },
};

static DATA_ENTRY: RoleDefinition = RoleDefinition {
    name: "Data Entry",
    description: "Basic data entry with limited access",
    level: 20,
    permissions: &[
        entry(Resource::Invoices, &[Create, Read]),
        entry(Resource::Expenses, &[Create, Read]),
        entry(Resource::Customers, &[Create, Read]),
        entry(Resource::Vendors, &[Create, Read]),
        entry(Resource::Fleet, &[Read]),
        entry(Resource::Routes, &[Read]),
        entry(Resource::Maintenance, &[Create, Read]),
    ],
    visible_modules: &[
        Module::Dashboard,
        Module::Invoices,
        Module::Expenses,
        Module::Customers,
        Module::Vendors,
        Module::Fleet,
        Module::Routes,
        Module::Maintenance,
    ],
    data_access: DataAccess {
        can_view_all: false,
        can_edit_all: false,
        can_delete_all: false,
        can_create_all: false,
        restricted_fields: &[
            "deleted_at",
            "internal_notes",
            "cost_center",
            "profit_margin",
            "salary_info",
            "performance_metrics",
            "confidential_data",
        ],
        data_scope: DataScope::Assigned,
    },
    system_access: SystemAccess::NONE,
};
