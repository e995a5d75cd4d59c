//! Dashboard widget layout per role.
//!
//! A static lookup, authored separately from the permission table.

use serde::Serialize;

use crate::roles::Role;

/// Named widgets a dashboard renders for a role.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DashboardModules {
    /// KPI cards
    pub kpis: &'static [&'static str],
    /// Charts
    pub charts: &'static [&'static str],
    /// Data tables
    pub tables: &'static [&'static str],
    /// Quick-action buttons
    pub actions: &'static [&'static str],
}

impl DashboardModules {
    /// Layout with no widgets.
    pub const EMPTY: DashboardModules = DashboardModules {
        kpis: &[],
        charts: &[],
        tables: &[],
        actions: &[],
    };

    /// Check if the layout renders nothing.
    pub fn is_empty(&self) -> bool {
        self.kpis.is_empty()
            && self.charts.is_empty()
            && self.tables.is_empty()
            && self.actions.is_empty()
    }

    /// Check if any section lists the widget.
    pub fn contains(&self, widget: &str) -> bool {
        [self.kpis, self.charts, self.tables, self.actions]
            .iter()
            .any(|section| section.contains(&widget))
    }
}

impl Default for DashboardModules {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Role {
    /// Get the dashboard layout for this role.
    pub fn dashboard(&self) -> &'static DashboardModules {
        match self {
            Role::Admin => &ADMIN_DASHBOARD,
            Role::GeneralManager => &GENERAL_MANAGER_DASHBOARD,
            Role::Supervisor => &SUPERVISOR_DASHBOARD,
            Role::DataEntry => &DATA_ENTRY_DASHBOARD,
        }
    }
}

static ADMIN_DASHBOARD: DashboardModules = DashboardModules {
    kpis: &[
        "revenue",
        "expenses",
        "profit",
        "fleet_utilization",
        "maintenance_costs",
    ],
    charts: &[
        "revenue_trend",
        "expense_breakdown",
        "fleet_performance",
        "customer_analytics",
    ],
    tables: &[
        "recent_invoices",
        "pending_expenses",
        "fleet_status",
        "maintenance_schedule",
    ],
    actions: &[
        "create_invoice",
        "approve_expense",
        "assign_fleet",
        "manage_users",
    ],
};

static GENERAL_MANAGER_DASHBOARD: DashboardModules = DashboardModules {
    kpis: &["revenue", "expenses", "profit", "fleet_utilization"],
    charts: &["revenue_trend", "expense_breakdown", "fleet_performance"],
    tables: &["recent_invoices", "pending_expenses", "fleet_status"],
    actions: &["create_invoice", "approve_expense", "assign_fleet"],
};

static SUPERVISOR_DASHBOARD: DashboardModules = DashboardModules {
    kpis: &["revenue", "expenses", "fleet_utilization"],
    charts: &["revenue_trend", "expense_breakdown"],
    tables: &["recent_invoices", "pending_expenses", "fleet_status"],
    actions: &["create_invoice", "approve_expense"],
};

static DATA_ENTRY_DASHBOARD: DashboardModules = DashboardModules {
    kpis: &["revenue", "expenses"],
    charts: &["revenue_trend"],
    tables: &["recent_invoices", "pending_expenses"],
    actions: &["create_invoice", "create_expense"],
};
