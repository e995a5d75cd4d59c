//! # Resources and Modules
//!
//! Resources are the business entity categories permissions are granted on.
//! Modules are the named UI sections a role may see at all; a module being
//! visible says nothing about which actions are allowed inside it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RbacError;

/// Business entity categories that carry permissions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Back-office user accounts.
    Users,
    /// Operating companies.
    Companies,
    /// Customer invoices.
    Invoices,
    /// Operating expenses.
    Expenses,
    /// Customer records.
    Customers,
    /// Vendor and supplier records.
    Vendors,
    /// Trucks and trailers.
    Fleet,
    /// Delivery routes and trips.
    Routes,
    /// Vehicle maintenance records.
    Maintenance,
    /// Generated reports.
    Reports,
    /// System settings.
    Settings,
    /// Audit trail entries.
    AuditLogs,
    /// Analytics views.
    Analytics,
}

impl Resource {
    /// Get the string representation of the resource.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Companies => "companies",
            Resource::Invoices => "invoices",
            Resource::Expenses => "expenses",
            Resource::Customers => "customers",
            Resource::Vendors => "vendors",
            Resource::Fleet => "fleet",
            Resource::Routes => "routes",
            Resource::Maintenance => "maintenance",
            Resource::Reports => "reports",
            Resource::Settings => "settings",
            Resource::AuditLogs => "audit_logs",
            Resource::Analytics => "analytics",
        }
    }

    /// Parse resource from its exact string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use fleetdesk_rbac::resources::Resource;
    ///
    /// assert_eq!(Resource::parse("audit_logs"), Some(Resource::AuditLogs));
    /// assert_eq!(Resource::parse("invoice"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "users" => Some(Resource::Users),
            "companies" => Some(Resource::Companies),
            "invoices" => Some(Resource::Invoices),
            "expenses" => Some(Resource::Expenses),
            "customers" => Some(Resource::Customers),
            "vendors" => Some(Resource::Vendors),
            "fleet" => Some(Resource::Fleet),
            "routes" => Some(Resource::Routes),
            "maintenance" => Some(Resource::Maintenance),
            "reports" => Some(Resource::Reports),
            "settings" => Some(Resource::Settings),
            "audit_logs" => Some(Resource::AuditLogs),
            "analytics" => Some(Resource::Analytics),
            _ => None,
        }
    }

    /// Get all resources.
    pub fn all() -> Vec<Self> {
        vec![
            Resource::Users,
            Resource::Companies,
            Resource::Invoices,
            Resource::Expenses,
            Resource::Customers,
            Resource::Vendors,
            Resource::Fleet,
            Resource::Routes,
            Resource::Maintenance,
            Resource::Reports,
            Resource::Settings,
            Resource::AuditLogs,
            Resource::Analytics,
        ]
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::parse(s).ok_or_else(|| RbacError::UnknownResource(s.to_string()))
    }
}

/// Named UI sections of the back office.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    /// Landing dashboard.
    Dashboard,
    /// Invoice list and editor.
    Invoices,
    /// Expense list and editor.
    Expenses,
    /// Customer records.
    Customers,
    /// Vendor records.
    Vendors,
    /// Trucks and trailers.
    Fleet,
    /// Routes and trips.
    Routes,
    /// Maintenance log.
    Maintenance,
    /// Reports.
    Reports,
    /// User and role administration.
    UserManagement,
    /// System settings.
    Settings,
    /// Audit trail.
    AuditLogs,
    /// Analytics.
    Analytics,
    /// Platform health panel.
    SystemHealth,
}

impl Module {
    /// Get the string representation of the module.
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::Invoices => "invoices",
            Module::Expenses => "expenses",
            Module::Customers => "customers",
            Module::Vendors => "vendors",
            Module::Fleet => "fleet",
            Module::Routes => "routes",
            Module::Maintenance => "maintenance",
            Module::Reports => "reports",
            Module::UserManagement => "user_management",
            Module::Settings => "settings",
            Module::AuditLogs => "audit_logs",
            Module::Analytics => "analytics",
            Module::SystemHealth => "system_health",
        }
    }

    /// Parse module from its exact string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(Module::Dashboard),
            "invoices" => Some(Module::Invoices),
            "expenses" => Some(Module::Expenses),
            "customers" => Some(Module::Customers),
            "vendors" => Some(Module::Vendors),
            "fleet" => Some(Module::Fleet),
            "routes" => Some(Module::Routes),
            "maintenance" => Some(Module::Maintenance),
            "reports" => Some(Module::Reports),
            "user_management" => Some(Module::UserManagement),
            "settings" => Some(Module::Settings),
            "audit_logs" => Some(Module::AuditLogs),
            "analytics" => Some(Module::Analytics),
            "system_health" => Some(Module::SystemHealth),
            _ => None,
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
