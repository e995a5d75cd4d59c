//! # Field Visibility
//!
//! Two independent mechanisms decide which fields of a record a role sees.
//!
//! - **Denylist**: driven by the record's shape. Every key of the record is
//!   visible except the role's `restricted_fields`
//!   (see [`DataAccess`](crate::catalog::DataAccess)).
//! - **Allowlist**: driven by the resource name. A per-role, per-resource
//!   table lists the fields that may be shown, or a wildcard for all of them.
//!
//! The two tables are keyed differently and have opposite default polarity,
//! so they are kept apart and consulted separately.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::roles::Role;

/// Wildcard entry in the allowlist table meaning "every field".
pub const WILDCARD: &str = "*";

/// Resources covered by the allowlist table.
pub const ALLOWLIST_RESOURCES: [&str; 6] =
    ["invoices", "expenses", "customers", "vendors", "fleet", "users"];

/// Fields a role may see on a resource according to the allowlist table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "fields")]
pub enum FieldAllowlist {
    /// Wildcard: every field is allowed
    All,
    /// Only the listed fields are allowed
    Only(&'static [&'static str]),
}

impl FieldAllowlist {
    /// Nothing is allowed.
    pub const NONE: FieldAllowlist = FieldAllowlist::Only(&[]);

    /// Build from a raw table entry, treating a lone `"*"` as the wildcard.
    pub fn from_table(fields: &'static [&'static str]) -> Self {
        if fields.contains(&WILDCARD) {
            FieldAllowlist::All
        } else {
            FieldAllowlist::Only(fields)
        }
    }

    /// Check if this is the wildcard.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, FieldAllowlist::All)
    }

    /// Check if a field may be shown.
    pub fn permits(&self, field: &str) -> bool {
        match self {
            FieldAllowlist::All => true,
            FieldAllowlist::Only(fields) => fields.contains(&field),
        }
    }

    /// Raw table form: `["*"]` for the wildcard, else the listed fields.
    pub fn as_slice(&self) -> &'static [&'static str] {
        match self {
            FieldAllowlist::All => &[WILDCARD],
            FieldAllowlist::Only(fields) => fields,
        }
    }

    /// Keep only the allowed keys of a record, in the record's key order.
    ///
    /// ```
    /// use fleetdesk_rbac::fields::FieldAllowlist;
    /// use serde_json::json;
    ///
    /// let record = json!({"id": 7, "amount": 120, "margin": 0.2});
    /// let allow = FieldAllowlist::Only(&["amount", "id"]);
    /// let kept = allow.filter(record.as_object().unwrap());
    /// assert_eq!(kept.keys().collect::<Vec<_>>(), ["id", "amount"]);
    /// ```
    pub fn filter(&self, record: &Map<String, Value>) -> Map<String, Value> {
        record
            .iter()
            .filter(|(key, _)| self.permits(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

type FieldTable = &'static [(&'static str, &'static [&'static str])];

static ADMIN_FIELDS: FieldTable = &[
    ("invoices", &[WILDCARD]),
    ("expenses", &[WILDCARD]),
    ("customers", &[WILDCARD]),
    ("vendors", &[WILDCARD]),
    ("fleet", &[WILDCARD]),
    ("users", &[WILDCARD]),
];

static GENERAL_MANAGER_FIELDS: FieldTable = &[
    ("invoices", &[WILDCARD]),
    ("expenses", &[WILDCARD]),
    ("customers", &[WILDCARD]),
    ("vendors", &[WILDCARD]),
    ("fleet", &[WILDCARD]),
    ("users", &["id", "username", "email", "role", "status"]),
];

static SUPERVISOR_FIELDS: FieldTable = &[
    (
        "invoices",
        &["id", "customer", "amount", "status", "created_at", "due_date"],
    ),
    (
        "expenses",
        &["id", "vendor", "amount", "category", "status", "created_at"],
    ),
    ("customers", &["id", "name", "email", "phone", "status"]),
    ("vendors", &["id", "name", "email", "phone", "status"]),
    (
        "fleet",
        &["id", "plate_number", "type", "status", "assigned_driver"],
    ),
    ("users", &["id", "username", "email", "role"]),
];

static DATA_ENTRY_FIELDS: FieldTable = &[
    ("invoices", &["id", "customer", "amount", "status"]),
    ("expenses", &["id", "vendor", "amount", "category"]),
    ("customers", &["id", "name", "email", "phone"]),
    ("vendors", &["id", "name", "email", "phone"]),
    ("fleet", &["id", "plate_number", "type"]),
    ("users", &["id", "username", "email"]),
];

/// Per-role field allowlist table.
///
/// Returns `None` when the table has no row for the resource.
pub fn allowlist_entry(role: Role, resource: &str) -> Option<&'static [&'static str]> {
    let table = match role {
        Role::Admin => ADMIN_FIELDS,
        Role::GeneralManager => GENERAL_MANAGER_FIELDS,
        Role::Supervisor => SUPERVISOR_FIELDS,
        Role::DataEntry => DATA_ENTRY_FIELDS,
    };

    table
        .iter()
        .find(|(name, _)| *name == resource)
        .map(|(_, fields)| *fields)
}

/// Visible field names of a record under a denylist.
///
/// Keeps every key of `record` not present in `restricted`, in the record's
/// original order.
pub fn filter_denylist<'r>(
    record: impl IntoIterator<Item = &'r str>,
    restricted: &[&str],
) -> Vec<String> {
    record
        .into_iter()
        .filter(|field| !restricted.contains(field))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_table_wildcard() {
        assert_eq!(FieldAllowlist::from_table(&[WILDCARD]), FieldAllowlist::All);
        assert_eq!(
            FieldAllowlist::from_table(&["id"]),
            FieldAllowlist::Only(&["id"])
        );
    }

    #[test]
    fn test_permits() {
        assert!(FieldAllowlist::All.permits("anything"));
        let only = FieldAllowlist::Only(&["id", "name"]);
        assert!(only.permits("name"));
        assert!(!only.permits("salary_info"));
        assert!(!FieldAllowlist::NONE.permits("id"));
    }

    #[test]
    fn test_as_slice() {
        assert_eq!(FieldAllowlist::All.as_slice(), &["*"]);
        assert!(FieldAllowlist::NONE.as_slice().is_empty());
    }

    #[test]
    fn test_allowlist_table_rows() {
        assert_eq!(allowlist_entry(Role::Admin, "users"), Some(&["*"][..]));
        assert_eq!(
            allowlist_entry(Role::DataEntry, "fleet"),
            Some(&["id", "plate_number", "type"][..])
        );
        assert_eq!(allowlist_entry(Role::Supervisor, "reports"), None);
    }

    #[test]
    fn test_every_role_covers_table_resources() {
        for role in Role::all() {
            for resource in ALLOWLIST_RESOURCES {
                assert!(
                    allowlist_entry(role, resource).is_some(),
                    "{role} missing {resource}"
                );
            }
        }
    }

    #[test]
    fn test_filter_denylist_keeps_order() {
        let visible = filter_denylist(
            ["id", "salary_info", "name", "internal_notes"],
            &["salary_info", "internal_notes"],
        );
        assert_eq!(visible, vec!["id", "name"]);
    }

    #[test]
    fn test_filter_record_wildcard() {
        let record = json!({"z": 1, "a": 2});
        let kept = FieldAllowlist::All.filter(record.as_object().unwrap());
        assert_eq!(kept.keys().collect::<Vec<_>>(), ["z", "a"]);
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(FieldAllowlist::Only(&["id"])).unwrap();
        assert_eq!(json, json!({"kind": "only", "fields": ["id"]}));
        let json = serde_json::to_value(FieldAllowlist::All).unwrap();
        assert_eq!(json, json!({"kind": "all"}));
    }
}
