//! # FleetDesk RBAC (Role-Based Access Control)
//!
//! This crate provides the access-control decision layer for the FleetDesk
//! logistics back office: invoicing, expenses, fleet, vendor and customer
//! records, and role-gated dashboards.
//!
//! ## Overview
//!
//! The fleetdesk-rbac crate handles:
//! - **Roles**: The closed set of privilege tiers and their hierarchy
//! - **Catalog**: One immutable definition per role (permissions, visible
//!   modules, data access, system access)
//! - **Permissions**: Resource + Action pairs, matched exactly
//! - **Field visibility**: Denylist by record shape, allowlist by resource
//! - **Dashboards, navigation, toolbars**: Static per-role UI layouts
//! - **Access gate**: Allow / DenyRole / DenyPermission outcomes
//!
//! ## Architecture
//!
//! ```text
//! Role ──definition()──→ RoleDefinition (static)
//!   │                      ├─ permissions: [(resource, [action])]
//!   │                      ├─ visible_modules
//!   │                      ├─ data_access (coarse flags, denylist, scope)
//!   │                      └─ system_access
//!   └─ RoleAuthority ──→ bool / level / scope / field lists / GateOutcome
//! ```
//!
//! ## Fail Closed
//!
//! Role strings come from an external identity provider. A string that is
//! not a catalog role never resolves to a [`Role`], and every decision made
//! with it returns the least-privileged answer. Decisions are advisory for
//! the UI; the database enforces row-level security on its own.
//!
//! ## Usage
//!
//! ```rust
//! use fleetdesk_rbac::{Role, RoleAuthority, GateOutcome, Permission, Resource, Action};
//!
//! let authority = RoleAuthority::new();
//!
//! assert!(authority.has_permission("general_manager", "expenses", "approve"));
//! assert!(authority.can_access_module(Role::Admin, "user_management"));
//! assert_eq!(authority.role_level("ghost_role"), 0);
//!
//! let outcome = authority.gate(
//!     "supervisor",
//!     Role::Supervisor,
//!     Some(Permission::new(Resource::Invoices, Action::Void)),
//! );
//! assert!(matches!(outcome, GateOutcome::DenyPermission { .. }));
//! ```

pub mod actions;
pub mod authority;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod fields;
pub mod gate;
pub mod module_actions;
pub mod navigation;
pub mod permissions;
pub mod resources;
pub mod roles;

// Re-export main types for convenience
pub use actions::{Action, CoarseAction};
pub use authority::{RoleAuthority, RoleCatalog, StaticCatalog};
pub use catalog::{DataAccess, DataScope, RoleDefinition, SystemAccess, SystemCapability};
pub use dashboard::DashboardModules;
pub use error::{RbacError, RbacResult};
pub use fields::FieldAllowlist;
pub use gate::{AccessRequirement, GateOutcome};
pub use module_actions::ModuleTable;
pub use navigation::{NavItem, NAVIGATION};
pub use permissions::{Permission, PermissionEntry, PermissionSet};
pub use resources::{Module, Resource};
pub use roles::{IntoRole, Role};
