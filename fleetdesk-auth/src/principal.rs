//! Session principal.
//!
//! A signed-in user holds zero or more catalog roles. The principal answers
//! "any role" questions (permissions, modules, gate) by consulting each held
//! role, and "single role" questions (dashboard layout, toolbar, hidden
//! fields) through the primary role, the most privileged one held.

use fleetdesk_rbac::navigation::{navigation_for, toolbar_actions_for};
use fleetdesk_rbac::{
    AccessRequirement, Action, DashboardModules, DataScope, GateOutcome, IntoRole, NavItem,
    Permission, PermissionSet, Role, RoleAuthority,
};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::SessionConfig;
use crate::error::{AuthError, AuthResult};

const AUTHORITY: RoleAuthority = RoleAuthority::new();

/// The caller of a back-office request.
///
/// # Example
///
/// ```
/// use fleetdesk_auth::Principal;
/// use fleetdesk_rbac::{DataScope, Role};
///
/// let principal = Principal::from_role_strings(["data_entry", "supervisor", "ghost_role"]);
///
/// assert_eq!(principal.roles(), [Role::DataEntry, Role::Supervisor]);
/// assert_eq!(principal.primary_role(), Some(Role::Supervisor));
/// assert_eq!(principal.data_scope(), DataScope::Department);
/// assert!(principal.has_permission("expenses", "approve"));
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Principal {
    user_id: Option<Uuid>,
    email: Option<String>,
    roles: Vec<Role>,
}

impl Principal {
    /// Build a principal from raw role strings.
    ///
    /// Strings outside the catalog are dropped and logged; duplicates are
    /// removed, keeping first-seen order.
    pub fn from_role_strings<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut held = Vec::new();
        for raw in roles {
            let raw = raw.as_ref();
            match Role::parse(raw) {
                Some(role) if !held.contains(&role) => held.push(role),
                Some(_) => {}
                None => tracing::warn!(role = raw, "session presented unknown role; ignoring"),
            }
        }

        Self {
            user_id: None,
            email: None,
            roles: held,
        }
    }

    /// Build a principal from decoded provider claims.
    ///
    /// Fails when the claims are expired or the subject is not a UUID. A
    /// session without any catalog role gets the configured fallback role,
    /// or no role at all.
    pub fn from_claims(claims: &SessionClaims, config: &SessionConfig) -> AuthResult<Self> {
        if claims.is_expired(config.leeway_secs) {
            return Err(AuthError::TokenExpired);
        }
        let user_id = claims
            .user_id()
            .ok_or_else(|| AuthError::InvalidClaims(format!("sub '{}' is not a UUID", claims.sub)))?;

        let mut principal = Self::from_role_strings(claims.role_strings(config));
        if principal.roles.is_empty() {
            if let Some(fallback) = config.fallback() {
                tracing::debug!(%user_id, role = %fallback, "no catalog role in claims; using fallback");
                principal.roles.push(fallback);
            }
        }

        principal.user_id = Some(user_id);
        principal.email = Some(claims.email.clone()).filter(|email| !email.is_empty());
        Ok(principal)
    }

    /// User ID, when built from claims.
    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    /// Email, when built from claims.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Held roles in first-seen order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Check exact membership of a role.
    pub fn has_role(&self, role: impl IntoRole) -> bool {
        role.into_role()
            .map(|role| self.roles.contains(&role))
            .unwrap_or(false)
    }

    /// Check if any of the given roles is held.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.roles.contains(role))
    }

    /// Most privileged held role.
    pub fn primary_role(&self) -> Option<Role> {
        self.roles.iter().copied().max_by_key(Role::level)
    }

    /// Check if any held role sees the module.
    pub fn can_access_module(&self, module: &str) -> bool {
        self.roles
            .iter()
            .any(|role| AUTHORITY.can_access_module(*role, module))
    }

    /// Union of the permission tables of every held role.
    pub fn permissions(&self) -> PermissionSet {
        let mut set = PermissionSet::new();
        for role in &self.roles {
            if let Some(def) = AUTHORITY.role_definition(*role) {
                set.merge(&def.permission_set());
            }
        }
        set
    }

    /// Check if any held role has the permission.
    pub fn has_permission(&self, resource: &str, action: &str) -> bool {
        match Permission::parse(resource, action) {
            Some(permission) => self.permits(permission),
            None => {
                tracing::debug!(resource, action, "unknown resource or action; denying");
                false
            }
        }
    }

    /// Typed form of [`has_permission`](Self::has_permission).
    pub fn permits(&self, permission: Permission) -> bool {
        self.permissions().has(&permission)
    }

    /// Broadest data scope among held roles; `own` with no role.
    pub fn data_scope(&self) -> DataScope {
        self.roles
            .iter()
            .map(|role| AUTHORITY.data_scope(*role))
            .max()
            .unwrap_or_default()
    }

    /// Dashboard layout of the primary role.
    pub fn dashboard(&self) -> &'static DashboardModules {
        AUTHORITY.dashboard_modules_for(self.primary_role())
    }

    /// Toolbar actions of the primary role.
    pub fn toolbar_actions(&self) -> &'static [Action] {
        toolbar_actions_for(&self.roles)
    }

    /// Visible field names of a record, hiding the primary role's
    /// restricted fields. Nothing is visible without a role.
    pub fn visible_fields(&self, record: &Map<String, Value>) -> Vec<String> {
        AUTHORITY.visible_fields_by_denylist(self.primary_role(), record)
    }

    /// Navigation entries any held role sees, in menu order.
    pub fn navigation(&self) -> Vec<&'static NavItem> {
        navigation_for(&self.roles)
    }

    /// Catalog roles the primary role may assign, highest first.
    pub fn manageable_roles(&self) -> Vec<Role> {
        AUTHORITY.manageable_roles(self.primary_role())
    }

    /// Evaluate the access gate for this session.
    ///
    /// The required role must be among the held roles. The permission is
    /// then checked against every held role, the same way
    /// [`has_permission`](Self::has_permission) answers.
    pub fn gate(&self, required: Role, permission: Option<Permission>) -> GateOutcome {
        let requirement = AccessRequirement {
            role: required,
            permission,
        };
        requirement.evaluate_held(self.has_role(required), |permission| {
            self.permits(*permission)
        })
    }

    /// Like [`gate`](Self::gate), but as a `Result` for request handlers.
    pub fn require(&self, required: Role, permission: Option<Permission>) -> AuthResult<()> {
        if self.gate(required, permission).is_allowed() {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }
}
