//! # Role Authority
//!
//! The decision functions consumed by every screen of the back office.
//!
//! Every operation is total: an unknown role, resource, action or module
//! string produces the least-privileged answer (`false`, level `0`, scope
//! `own`, empty lists) instead of an error. These answers are advisory for
//! the UI; row-level enforcement lives in the database.

use serde_json::{Map, Value};

use crate::actions::{Action, CoarseAction};
use crate::catalog::{DataScope, RoleDefinition, SystemAccess, SystemCapability};
use crate::dashboard::DashboardModules;
use crate::fields::{self, FieldAllowlist};
use crate::gate::{AccessRequirement, GateOutcome};
use crate::module_actions::ModuleTable;
use crate::permissions::Permission;
use crate::resources::{Module, Resource};
use crate::roles::{IntoRole, Role};

/// Source of the static tables the authority reads.
///
/// The built-in catalog is [`StaticCatalog`]; tests substitute their own to
/// check that the tables are consulted independently.
pub trait RoleCatalog: Send + Sync {
    /// Catalog entry for a role.
    fn definition(&self, role: Role) -> &'static RoleDefinition;

    /// Allowlist row for a role and resource, `None` if absent.
    fn field_allowlist(&self, role: Role, resource: &str) -> Option<&'static [&'static str]>;

    /// Dashboard layout for a role.
    fn dashboard(&self, role: Role) -> &'static DashboardModules;
}

/// The compiled-in role catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl RoleCatalog for StaticCatalog {
    fn definition(&self, role: Role) -> &'static RoleDefinition {
        role.definition()
    }

    fn field_allowlist(&self, role: Role, resource: &str) -> Option<&'static [&'static str]> {
        fields::allowlist_entry(role, resource)
    }

    fn dashboard(&self, role: Role) -> &'static DashboardModules {
        role.dashboard()
    }
}

/// Answers "can this role do X on Y" over an immutable catalog.
///
/// Holds no mutable state, so one instance can be shared freely across
/// threads.
///
/// # Example
///
/// ```
/// use fleetdesk_rbac::{DataScope, RoleAuthority};
///
/// let authority = RoleAuthority::new();
///
/// assert!(authority.has_permission("admin", "invoices", "void"));
/// assert!(!authority.has_permission("data_entry", "invoices", "delete"));
/// assert!(!authority.has_permission("ghost_role", "invoices", "read"));
///
/// assert!(authority.can_manage_role("admin", "supervisor"));
/// assert!(!authority.can_manage_role("supervisor", "admin"));
///
/// assert_eq!(authority.data_scope("data_entry"), DataScope::Assigned);
/// assert_eq!(authority.data_scope("ghost_role"), DataScope::Own);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAuthority<C = StaticCatalog> {
    catalog: C,
}

impl RoleAuthority<StaticCatalog> {
    /// Authority over the compiled-in catalog.
    pub const fn new() -> Self {
        Self {
            catalog: StaticCatalog,
        }
    }
}

impl<C: RoleCatalog> RoleAuthority<C> {
    /// Authority over a custom catalog.
    pub fn with_catalog(catalog: C) -> Self {
        Self { catalog }
    }

    /// Catalog entry for a role, `None` for an unknown role.
    pub fn role_definition(&self, role: impl IntoRole) -> Option<&'static RoleDefinition> {
        role.into_role().map(|role| self.catalog.definition(role))
    }

    // Permission lookup

    /// Check if the role's permission table lists `action` on `resource`.
    ///
    /// Only the row for `resource` is consulted; no other role's rows and no
    /// other verbs are taken into account.
    pub fn has_permission(&self, role: impl IntoRole, resource: &str, action: &str) -> bool {
        let Some(role) = role.into_role() else {
            return false;
        };
        match Permission::parse(resource, action) {
            Some(permission) => self.permits(role, permission),
            None => {
                tracing::debug!(%role, resource, action, "unknown resource or action; denying");
                false
            }
        }
    }

    /// Typed form of [`has_permission`](Self::has_permission).
    pub fn permits(&self, role: impl IntoRole, permission: Permission) -> bool {
        self.role_definition(role)
            .map(|def| def.allows(permission.resource, permission.action))
            .unwrap_or(false)
    }

    /// Verbs the role's permission table lists on a resource.
    pub fn actions_on(&self, role: impl IntoRole, resource: Resource) -> &'static [Action] {
        self.role_definition(role)
            .and_then(|def| def.entry(resource))
            .map(|entry| entry.actions)
            .unwrap_or(&[])
    }

    /// Check if a module is in the role's visible module list.
    pub fn can_access_module(&self, role: impl IntoRole, module: &str) -> bool {
        match Module::parse(module) {
            Some(module) => self.shows_module(role, module),
            None => false,
        }
    }

    /// Typed form of [`can_access_module`](Self::can_access_module).
    pub fn shows_module(&self, role: impl IntoRole, module: Module) -> bool {
        self.role_definition(role)
            .map(|def| def.shows(module))
            .unwrap_or(false)
    }

    /// Breadth of records the role may act on; `own` for an unknown role.
    pub fn data_scope(&self, role: impl IntoRole) -> DataScope {
        self.role_definition(role)
            .map(|def| def.data_access.data_scope)
            .unwrap_or_default()
    }

    /// Coarse, resource-independent action check.
    ///
    /// Maps `view`/`edit`/`delete`/`create` onto the role's `can_*_all`
    /// flags. `resource` is accepted for call-site symmetry and does not
    /// affect the answer; use [`has_permission`](Self::has_permission) for a
    /// per-resource check.
    pub fn can_perform_action(
        &self,
        role: impl IntoRole,
        action: &str,
        _resource: Option<&str>,
    ) -> bool {
        match CoarseAction::parse(action) {
            Some(action) => self.can_perform(role, action),
            None => false,
        }
    }

    /// Typed form of [`can_perform_action`](Self::can_perform_action).
    pub fn can_perform(&self, role: impl IntoRole, action: CoarseAction) -> bool {
        let Some(def) = self.role_definition(role) else {
            return false;
        };
        let access = &def.data_access;
        match action {
            CoarseAction::View => access.can_view_all,
            CoarseAction::Edit => access.can_edit_all,
            CoarseAction::Delete => access.can_delete_all,
            CoarseAction::Create => access.can_create_all,
        }
    }

    /// System-level capabilities; all false for an unknown role.
    pub fn system_access(&self, role: impl IntoRole) -> SystemAccess {
        self.role_definition(role)
            .map(|def| def.system_access)
            .unwrap_or(SystemAccess::NONE)
    }

    /// Check a single system capability.
    pub fn has_system_access(&self, role: impl IntoRole, capability: SystemCapability) -> bool {
        self.system_access(role).allows(capability)
    }

    // Hierarchy

    /// Privilege level of a role; `0` for an unknown role.
    pub fn role_level(&self, role: impl IntoRole) -> u32 {
        self.role_definition(role).map(|def| def.level).unwrap_or(0)
    }

    /// Check if `acting` sits strictly above `target`.
    ///
    /// A role never manages its own tier. Two unknown roles both sit at
    /// level `0` and cannot manage each other.
    pub fn can_manage_role(&self, acting: impl IntoRole, target: impl IntoRole) -> bool {
        self.role_level(acting) > self.role_level(target)
    }

    /// Catalog roles `acting` may manage, highest first.
    pub fn manageable_roles(&self, acting: impl IntoRole) -> Vec<Role> {
        let level = self.role_level(acting);
        let mut roles: Vec<Role> = Role::all()
            .into_iter()
            .filter(|role| self.role_level(*role) < level)
            .collect();
        roles.sort_by_key(|role| std::cmp::Reverse(self.role_level(*role)));
        roles
    }

    // Field visibility

    /// Visible field names of a record, by the role's denylist.
    ///
    /// Every key of `record` except the role's restricted fields, in the
    /// record's key order. An unknown role sees nothing.
    ///
    /// ```
    /// use fleetdesk_rbac::RoleAuthority;
    /// use serde_json::json;
    ///
    /// let record = json!({"id": 1, "salary_info": 500, "name": "X"});
    /// let visible = RoleAuthority::new()
    ///     .visible_fields_by_denylist("data_entry", record.as_object().unwrap());
    /// assert_eq!(visible, ["id", "name"]);
    /// ```
    pub fn visible_fields_by_denylist(
        &self,
        role: impl IntoRole,
        record: &Map<String, Value>,
    ) -> Vec<String> {
        match self.role_definition(role) {
            Some(def) => fields::filter_denylist(
                record.keys().map(String::as_str),
                def.data_access.restricted_fields,
            ),
            None => Vec::new(),
        }
    }

    /// Allowed fields of a resource, by the per-resource allowlist table.
    ///
    /// An unknown role or a resource missing from the table allows nothing.
    pub fn visible_fields_by_allowlist(&self, role: impl IntoRole, resource: &str) -> FieldAllowlist {
        role.into_role()
            .and_then(|role| self.catalog.field_allowlist(role, resource))
            .map(FieldAllowlist::from_table)
            .unwrap_or(FieldAllowlist::NONE)
    }

    // Dashboard, module tables, toolbar

    /// Dashboard widgets for a role; empty for an unknown role.
    pub fn dashboard_modules_for(&self, role: impl IntoRole) -> &'static DashboardModules {
        role.into_role()
            .map(|role| self.catalog.dashboard(role))
            .unwrap_or(&DashboardModules::EMPTY)
    }

    /// Actions a module-specific table grants; empty for an unknown role.
    pub fn module_actions(&self, role: impl IntoRole, table: ModuleTable) -> &'static [Action] {
        role.into_role()
            .map(|role| table.actions(role))
            .unwrap_or(&[])
    }

    /// Check one action against a module-specific table.
    pub fn can_module_action(&self, role: impl IntoRole, table: ModuleTable, action: Action) -> bool {
        self.module_actions(role, table).contains(&action)
    }

    /// Toolbar actions for a role; empty for an unknown role.
    pub fn toolbar_actions(&self, role: impl IntoRole) -> &'static [Action] {
        role.into_role()
            .map(|role| role.toolbar_actions())
            .unwrap_or(&[])
    }

    // Gate

    /// Evaluate the access gate for a caller holding `current`.
    ///
    /// `DenyRole` unless `current` is exactly `required`; then
    /// `DenyPermission` if a permission is given and the permission table
    /// does not list it; otherwise `Allow`.
    pub fn gate(
        &self,
        current: impl IntoRole,
        required: Role,
        permission: Option<Permission>,
    ) -> GateOutcome {
        let current = current.into_role();
        let requirement = AccessRequirement {
            role: required,
            permission,
        };
        requirement.evaluate(current, |permission| self.permits(current, *permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn authority() -> RoleAuthority {
        RoleAuthority::new()
    }

    #[test]
    fn test_has_permission_scenarios() {
        let auth = authority();
        assert!(auth.has_permission("admin", "invoices", "void"));
        assert!(!auth.has_permission("data_entry", "invoices", "delete"));
        assert!(auth.has_permission(Role::Supervisor, "expenses", "approve"));
        assert!(!auth.has_permission(Role::Supervisor, "expenses", "reject"));
    }

    #[test]
    fn test_has_permission_unknown_inputs() {
        let auth = authority();
        assert!(!auth.has_permission("ghost_role", "invoices", "read"));
        assert!(!auth.has_permission("admin", "spaceships", "read"));
        assert!(!auth.has_permission("admin", "invoices", "teleport"));
        // Known resource without a row for this role
        assert!(!auth.has_permission("data_entry", "reports", "read"));
    }

    #[test]
    fn test_actions_on() {
        let auth = authority();
        assert_eq!(
            auth.actions_on(Role::DataEntry, Resource::Fleet),
            &[Action::Read]
        );
        assert!(auth.actions_on(Role::DataEntry, Resource::Users).is_empty());
        assert!(auth.actions_on("ghost_role", Resource::Fleet).is_empty());
    }

    #[test]
    fn test_can_access_module() {
        let auth = authority();
        assert!(auth.can_access_module("admin", "system_health"));
        assert!(auth.can_access_module("general_manager", "analytics"));
        assert!(!auth.can_access_module("supervisor", "analytics"));
        assert!(!auth.can_access_module("data_entry", "reports"));
        assert!(!auth.can_access_module("ghost_role", "dashboard"));
        assert!(!auth.can_access_module("admin", "billing"));
    }

    #[test]
    fn test_data_scope() {
        let auth = authority();
        assert_eq!(auth.data_scope("admin"), DataScope::All);
        assert_eq!(auth.data_scope("general_manager"), DataScope::All);
        assert_eq!(auth.data_scope("supervisor"), DataScope::Department);
        assert_eq!(auth.data_scope("data_entry"), DataScope::Assigned);
        assert_eq!(auth.data_scope("ghost_role"), DataScope::Own);
    }

    #[test]
    fn test_can_perform_action() {
        let auth = authority();
        assert!(auth.can_perform_action("admin", "delete", None));
        assert!(!auth.can_perform_action("general_manager", "delete", Some("invoices")));
        assert!(auth.can_perform_action("supervisor", "create", None));
        assert!(!auth.can_perform_action("supervisor", "view", None));
        assert!(!auth.can_perform_action("data_entry", "create", None));
        assert!(!auth.can_perform_action("admin", "approve", None));
        assert!(!auth.can_perform_action("ghost_role", "view", None));
    }

    #[test]
    fn test_coarse_and_fine_checks_are_independent() {
        let auth = authority();
        // Supervisor edits invoices per the permission table but lacks the
        // coarse edit-all flag.
        assert!(auth.has_permission("supervisor", "invoices", "update"));
        assert!(!auth.can_perform(Role::Supervisor, CoarseAction::Edit));
    }

    #[test]
    fn test_system_access() {
        let auth = authority();
        assert!(auth.has_system_access("admin", SystemCapability::ManageUsers));
        assert!(auth.has_system_access("supervisor", SystemCapability::ExportData));
        assert!(!auth.has_system_access("supervisor", SystemCapability::ManageSettings));
        assert_eq!(auth.system_access("ghost_role"), SystemAccess::NONE);
    }

    #[test]
    fn test_role_level() {
        let auth = authority();
        assert_eq!(auth.role_level("admin"), 100);
        assert_eq!(auth.role_level("data_entry"), 20);
        assert_eq!(auth.role_level("ghost_role"), 0);
    }

    #[test]
    fn test_can_manage_role() {
        let auth = authority();
        assert!(auth.can_manage_role("admin", "supervisor"));
        assert!(!auth.can_manage_role("supervisor", "admin"));
        assert!(!auth.can_manage_role("supervisor", "supervisor"));
        assert!(auth.can_manage_role("data_entry", "ghost_role"));
        assert!(!auth.can_manage_role("ghost_role", "other_ghost"));
    }

    #[test]
    fn test_manageable_roles() {
        let auth = authority();
        assert_eq!(
            auth.manageable_roles(Role::Admin),
            vec![Role::GeneralManager, Role::Supervisor, Role::DataEntry]
        );
        assert_eq!(auth.manageable_roles("supervisor"), vec![Role::DataEntry]);
        assert!(auth.manageable_roles(Role::DataEntry).is_empty());
        assert!(auth.manageable_roles("ghost_role").is_empty());
    }

    #[test]
    fn test_visible_fields_by_denylist() {
        let auth = authority();
        let record = json!({
            "id": 1,
            "salary_info": 500,
            "name": "X",
            "internal_notes": "n",
            "profit_margin": 0.3
        });
        let record = record.as_object().unwrap();

        assert_eq!(
            auth.visible_fields_by_denylist("data_entry", record),
            ["id", "name"]
        );
        assert_eq!(
            auth.visible_fields_by_denylist("supervisor", record),
            ["id", "salary_info", "name"]
        );
        assert_eq!(
            auth.visible_fields_by_denylist("general_manager", record),
            ["id", "salary_info", "name", "profit_margin"]
        );
        assert_eq!(auth.visible_fields_by_denylist("admin", record).len(), 5);
        assert!(auth.visible_fields_by_denylist("ghost_role", record).is_empty());
    }

    #[test]
    fn test_visible_fields_by_allowlist() {
        let auth = authority();
        assert_eq!(auth.visible_fields_by_allowlist("admin", "users"), FieldAllowlist::All);
        assert_eq!(
            auth.visible_fields_by_allowlist("general_manager", "users"),
            FieldAllowlist::Only(&["id", "username", "email", "role", "status"])
        );
        assert_eq!(
            auth.visible_fields_by_allowlist("data_entry", "customers"),
            FieldAllowlist::Only(&["id", "name", "email", "phone"])
        );
        assert_eq!(
            auth.visible_fields_by_allowlist("admin", "routes"),
            FieldAllowlist::NONE
        );
        assert_eq!(
            auth.visible_fields_by_allowlist("ghost_role", "invoices"),
            FieldAllowlist::NONE
        );
    }

    #[test]
    fn test_dashboard_modules_for() {
        let auth = authority();
        assert!(auth.dashboard_modules_for("admin").contains("manage_users"));
        assert!(!auth.dashboard_modules_for("supervisor").contains("manage_users"));
        assert!(auth.dashboard_modules_for("ghost_role").is_empty());
    }

    #[test]
    fn test_module_actions() {
        let auth = authority();
        assert!(auth.can_module_action("supervisor", ModuleTable::Invoice, Action::Export));
        assert!(!auth.can_module_action("data_entry", ModuleTable::Expense, Action::Export));
        assert!(auth.module_actions("ghost_role", ModuleTable::Invoice).is_empty());
    }

    #[test]
    fn test_toolbar_actions() {
        let auth = authority();
        assert_eq!(auth.toolbar_actions("data_entry"), &[Action::Create, Action::Read]);
        assert!(auth.toolbar_actions("ghost_role").is_empty());
    }

    #[test]
    fn test_gate() {
        let auth = authority();
        let void = Permission::new(Resource::Invoices, Action::Void);

        assert_eq!(auth.gate("admin", Role::Admin, Some(void)), GateOutcome::Allow);
        assert_eq!(
            auth.gate("supervisor", Role::Admin, Some(void)),
            GateOutcome::DenyRole {
                required: Role::Admin
            }
        );
        assert_eq!(
            auth.gate("supervisor", Role::Supervisor, Some(void)),
            GateOutcome::DenyPermission { permission: void }
        );
        assert_eq!(auth.gate("supervisor", Role::Supervisor, None), GateOutcome::Allow);
        assert_eq!(
            auth.gate("ghost_role", Role::DataEntry, None),
            GateOutcome::DenyRole {
                required: Role::DataEntry
            }
        );
    }
}
