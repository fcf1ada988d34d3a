//! Navigation model for the admin and broker shells.
//!
//! DESIGN
//! ======
//! Nav entries are static tables. An entry is clickable when it has no
//! capability gate or its capability is enabled in the provided
//! [`Capabilities`]; the shell never hard-codes disabled controls.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::BTreeSet;

use crate::provider::capabilities::{Capabilities, Capability};

/// English text with its Arabic counterpart for RTL mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn get(self, rtl: bool) -> &'static str {
        if rtl { self.ar } else { self.en }
    }
}

pub const ADMIN_HEADER: Localized = Localized::new("MaxHealth CRM - Admin Dashboard", "نظام إدارة العملاء - لوحة الإدارة");
pub const ADMIN_USER_NAME: Localized = Localized::new("John Admin", "جون أدمن");
pub const ADMIN_USER_ROLE: Localized = Localized::new("System Administrator", "مدير النظام");
pub const LOGOUT: Localized = Localized::new("Logout", "تسجيل الخروج");
pub const COMING_SOON: Localized = Localized::new("Soon", "قريباً");
/// Label of the direction toggle names the direction it switches to.
pub const DIRECTION_TOGGLE: Localized = Localized::new("RTL", "LTR");

/// Display preferences shared by both shells through context.
///
/// `loaded` flips once the stored direction preference has been read on the
/// client; server renders always start left-to-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayPrefs {
    pub rtl: bool,
    pub loaded: bool,
}

/// True when `current` is `route` itself; `/admin` does not match
/// `/admin/users`.
pub fn is_active_route(route: &str, current: &str) -> bool {
    current.trim_end_matches('/') == route.trim_end_matches('/')
}

// =============================================================
// Admin shell
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminNavItem {
    pub id: &'static str,
    pub title: Localized,
    pub route: &'static str,
    pub badge: Option<&'static str>,
    pub gate: Option<Capability>,
}

impl AdminNavItem {
    pub fn is_enabled(&self, capabilities: &Capabilities) -> bool {
        self.gate.is_none_or(|capability| capabilities.is_enabled(capability))
    }
}

const fn admin(
    id: &'static str,
    title: Localized,
    route: &'static str,
    badge: Option<&'static str>,
    gate: Option<Capability>,
) -> AdminNavItem {
    AdminNavItem { id, title, route, badge, gate }
}

pub const ADMIN_NAV: [AdminNavItem; 10] = [
    admin("dashboard", Localized::new("Dashboard", "لوحة التحكم"), "/admin", None, None),
    admin("users", Localized::new("User Management", "إدارة المستخدمين"), "/admin/users", None, None),
    admin("roles", Localized::new("Roles & Permissions", "الأدوار والصلاحيات"), "/admin/roles", None, None),
    admin(
        "system",
        Localized::new("System Config", "إعدادات النظام"),
        "/admin/config",
        None,
        Some(Capability::SystemConfig),
    ),
    admin(
        "integrations",
        Localized::new("Integrations", "التكاملات"),
        "/admin/integrations",
        None,
        Some(Capability::Integrations),
    ),
    admin("workflows", Localized::new("Workflows", "سير العمل"), "/admin/workflows", None, Some(Capability::Workflows)),
    admin(
        "notifications",
        Localized::new("Notifications", "الإشعارات"),
        "/admin/notifications",
        Some("3"),
        Some(Capability::Notifications),
    ),
    admin(
        "data",
        Localized::new("Data & Analytics", "البيانات والتحليلات"),
        "/admin/data",
        None,
        Some(Capability::DataAnalytics),
    ),
    admin("security", Localized::new("Security", "الأمان"), "/admin/security", None, Some(Capability::Security)),
    admin("templates", Localized::new("Templates", "القوالب"), "/admin/templates", None, Some(Capability::Templates)),
];

/// Transient chrome state of the admin shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminChrome {
    pub sidebar_collapsed: bool,
    pub refreshing: bool,
}

impl AdminChrome {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Returns `false` when a refresh is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.refreshing = true;
        true
    }

    pub fn finish_refresh(&mut self) {
        self.refreshing = false;
    }
}

// =============================================================
// Broker shell
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrokerNavItem {
    pub id: &'static str,
    pub name: &'static str,
    pub route: &'static str,
    pub count: Option<u32>,
    pub gate: Option<Capability>,
}

impl BrokerNavItem {
    pub fn is_enabled(&self, capabilities: &Capabilities) -> bool {
        self.gate.is_none_or(|capability| capabilities.is_enabled(capability))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrokerNavSection {
    pub id: &'static str,
    pub title: &'static str,
    pub items: &'static [BrokerNavItem],
}

const fn broker(
    id: &'static str,
    name: &'static str,
    route: &'static str,
    count: Option<u32>,
    gate: Option<Capability>,
) -> BrokerNavItem {
    BrokerNavItem { id, name, route, count, gate }
}

pub const BROKER_DASHBOARD_ROUTE: &str = "/dashboard";
pub const CASE_MANAGEMENT: &str = "case-management";

pub const BROKER_NAV: &[BrokerNavSection] = &[
    BrokerNavSection {
        id: CASE_MANAGEMENT,
        title: "CASE MANAGEMENT",
        items: &[
            broker("active-case", "Active Case", "/cases/active", Some(12), Some(Capability::ActiveCases)),
            broker("archive-case", "Archive Case", "/cases/archive", Some(45), Some(Capability::ArchivedCases)),
            broker("new-case", "New Case", "/cases/new", None, None),
            broker("payments", "Payments", "/payments", None, Some(Capability::Payments)),
            broker("reports", "Reports", "/reports", None, Some(Capability::Reports)),
            broker("downloads", "Downloads", "/downloads", None, Some(Capability::Downloads)),
        ],
    },
    BrokerNavSection {
        id: "plan-management",
        title: "PLAN MANAGEMENT",
        items: &[
            broker("plan-parameters", "Plan Parameters", "/plans/parameters", None, Some(Capability::PlanParameters)),
            broker("plan", "Plan", "/plans", None, Some(Capability::Plans)),
        ],
    },
    BrokerNavSection {
        id: "content-management",
        title: "CONTENT MANAGEMENT",
        items: &[
            broker("news", "News", "/content/news", None, Some(Capability::News)),
            broker("tutorial", "Tutorial", "/content/tutorial", None, Some(Capability::Tutorials)),
            broker("documents", "Documents", "/content/documents", None, Some(Capability::Documents)),
        ],
    },
    BrokerNavSection {
        id: "user-administration",
        title: "USER ADMINISTRATION",
        items: &[
            broker("new-admin", "New Admin", "/admin/new", None, Some(Capability::BrokerAdministration)),
            broker("admin-list", "Admin List", "/admin/list", None, Some(Capability::BrokerAdministration)),
            broker(
                "broker-agent-list",
                "Broker Agent List",
                "/admin/broker-agents",
                None,
                Some(Capability::BrokerAdministration),
            ),
            broker("broker-list", "Broker List", "/admin/brokers", None, Some(Capability::BrokerAdministration)),
        ],
    },
];

/// Sidebar visibility plus which sections are expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokerSidebar {
    pub open: bool,
    expanded: BTreeSet<&'static str>,
}

impl Default for BrokerSidebar {
    fn default() -> Self {
        Self { open: true, expanded: BTreeSet::from([CASE_MANAGEMENT]) }
    }
}

impl BrokerSidebar {
    pub fn is_expanded(&self, section: &str) -> bool {
        self.expanded.contains(section)
    }

    pub fn toggle_section(&mut self, section: &'static str) {
        if !self.expanded.remove(section) {
            self.expanded.insert(section);
        }
    }
}
