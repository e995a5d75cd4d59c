//! # Permissions
//!
//! A permission pairs a resource with an action verb. Membership is exact:
//! no verb implies another, and nothing is inherited from a lower role.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::actions::Action;
use crate::error::RbacError;
use crate::resources::Resource;

/// A `(resource, action)` pair.
///
/// # Example
///
/// ```
/// use fleetdesk_rbac::permissions::Permission;
/// use fleetdesk_rbac::resources::Resource;
/// use fleetdesk_rbac::actions::Action;
///
/// let perm = Permission::new(Resource::Invoices, Action::Void);
/// assert_eq!(perm.to_string(), "invoices:void");
/// assert_eq!("invoices:void".parse::<Permission>().unwrap(), perm);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permission {
    /// The resource this permission applies to.
    pub resource: Resource,
    /// The action allowed on the resource.
    pub action: Action,
}

impl Permission {
    /// Create a new permission.
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    /// Parse from strings, returning `None` if either part is unknown.
    pub fn parse(resource: &str, action: &str) -> Option<Self> {
        Some(Self::new(Resource::parse(resource)?, Action::parse(action)?))
    }

    /// Parse from the `resource:action` form.
    ///
    /// # Example
    ///
    /// ```
    /// use fleetdesk_rbac::permissions::Permission;
    ///
    /// assert!(Permission::from_string("expenses:approve").is_some());
    /// assert!(Permission::from_string("expenses").is_none());
    /// assert!(Permission::from_string("expenses:approve:extra").is_none());
    /// ```
    pub fn from_string(s: &str) -> Option<Self> {
        let (resource, action) = s.split_once(':')?;
        if action.contains(':') {
            return None;
        }
        Self::parse(resource, action)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

impl FromStr for Permission {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = s
            .split_once(':')
            .filter(|(_, action)| !action.contains(':'))
            .ok_or_else(|| RbacError::MalformedPermission(s.to_string()))?;
        Ok(Self::new(resource.parse()?, action.parse()?))
    }
}

/// One row of a role's permission table: a resource and its allowed verbs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PermissionEntry {
    /// Resource the row applies to.
    pub resource: Resource,
    /// Allowed verbs on the resource.
    pub actions: &'static [Action],
}

impl PermissionEntry {
    /// Check if this row grants an action.
    pub fn allows(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }
}

/// An owned, ordered set of permissions.
///
/// Used where permissions are combined at runtime, for example the union
/// over every role a session holds.
///
/// # Example
///
/// ```
/// use fleetdesk_rbac::permissions::{Permission, PermissionSet};
/// use fleetdesk_rbac::resources::Resource;
/// use fleetdesk_rbac::actions::Action;
///
/// let mut set = PermissionSet::new();
/// set.add(Permission::new(Resource::Invoices, Action::Read));
/// set.add(Permission::new(Resource::Invoices, Action::Create));
///
/// assert!(set.has(&Permission::new(Resource::Invoices, Action::Read)));
/// assert!(!set.has(&Permission::new(Resource::Invoices, Action::Delete)));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    permissions: BTreeSet<Permission>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from permission table rows.
    pub fn from_entries(entries: &[PermissionEntry]) -> Self {
        entries
            .iter()
            .flat_map(|entry| {
                entry
                    .actions
                    .iter()
                    .map(move |action| Permission::new(entry.resource, *action))
            })
            .collect()
    }

    /// Add a permission to the set.
    pub fn add(&mut self, permission: Permission) {
        self.permissions.insert(permission);
    }

    /// Check if the set contains exactly this permission.
    pub fn has(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Iterate over the permissions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    /// Merge another permission set into this one.
    pub fn merge(&mut self, other: &PermissionSet) {
        self.permissions.extend(other.permissions.iter().copied());
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}
