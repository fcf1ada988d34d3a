//! Role-management list state and the permission-matrix view.
//!
//! DESIGN
//! ======
//! `users_count` / `permissions_count` are display fields carried on each
//! role. They are not derived from the user list, so the two management
//! pages can disagree.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use serde::{Deserialize, Serialize};

use crate::state::users::Facet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Internal,
    External,
    Client,
    System,
}

impl RoleCategory {
    pub const ALL: [Self; 4] = [Self::Internal, Self::External, Self::Client, Self::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
            Self::Client => "client",
            Self::System => "system",
        }
    }

    /// Category tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Internal => "Internal Staff",
            Self::External => "External Brokers",
            Self::Client => "Clients",
            Self::System => "System Roles",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Internal => "badge badge--blue",
            Self::External => "badge badge--purple",
            Self::Client => "badge badge--indigo",
            Self::System => "badge badge--red",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleLevel {
    Executive,
    Manager,
    Specialist,
    Junior,
    External,
}

impl RoleLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::Manager => "manager",
            Self::Specialist => "specialist",
            Self::Junior => "junior",
            Self::External => "external",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Executive => "badge badge--red",
            Self::Manager => "badge badge--orange",
            Self::Specialist => "badge badge--blue",
            Self::Junior => "badge badge--green",
            Self::External => "badge badge--purple",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    #[default]
    Active,
    Inactive,
    Deprecated,
}

impl RoleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Deprecated => "deprecated",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge badge--green",
            Self::Inactive => "badge badge--gray",
            Self::Deprecated => "badge badge--red",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: String,
    pub name: String,
    pub code: String,
    pub category: RoleCategory,
    pub department: String,
    pub level: RoleLevel,
    pub description: String,
    pub status: RoleStatus,
    pub users_count: u32,
    pub permissions_count: u32,
    pub reports_to: Option<String>,
}

/// Search term plus category facet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleQuery {
    pub search: String,
    pub category: Facet<RoleCategory>,
}

/// Roles matching `query`, in source order.
pub fn filter_roles(roles: &[RoleRecord], query: &RoleQuery) -> Vec<RoleRecord> {
    let needle = query.search.to_lowercase();
    roles
        .iter()
        .filter(|role| {
            let matches_search = needle.is_empty()
                || [&role.name, &role.code, &role.department]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));
            matches_search && query.category.matches(&role.category)
        })
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleStats {
    pub total_roles: usize,
    pub active_roles: usize,
    pub total_users: u32,
    pub total_permissions: u32,
}

impl RoleStats {
    pub fn from_roles(roles: &[RoleRecord]) -> Self {
        Self {
            total_roles: roles.len(),
            active_roles: roles.iter().filter(|r| r.status == RoleStatus::Active).count(),
            total_users: roles.iter().map(|r| r.users_count).sum(),
            total_permissions: roles.iter().map(|r| r.permissions_count).sum(),
        }
    }
}

/// Number of roles in `category`, for the category tab badges.
pub fn category_count(roles: &[RoleRecord], category: RoleCategory) -> usize {
    roles.iter().filter(|r| r.category == category).count()
}

// =============================================================
// Permission matrix
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Full,
    Read,
    None,
}

impl AccessLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Read => "Read",
            Self::None => "None",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Full => "badge badge--green",
            Self::Read => "badge badge--blue",
            Self::None => "badge badge--gray",
        }
    }
}

/// One row of the read-only permission matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleAccess {
    pub module: String,
    pub access: AccessLevel,
}

/// A single allow/deny line under a data-access heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    pub allowed: bool,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRuleGroup {
    pub title: String,
    pub rules: Vec<AccessRule>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalLimit {
    pub label: String,
    pub value: String,
}

/// Everything the permission-matrix dialog shows for a role.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMatrix {
    pub modules: Vec<ModuleAccess>,
    pub data_rules: Vec<AccessRuleGroup>,
    pub approval_limits: Vec<ApprovalLimit>,
    pub additional_permissions: Vec<String>,
}
