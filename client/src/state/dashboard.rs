//! Read-only view models for the broker and admin dashboards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::{Deserialize, Serialize};

/// Headline metric card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTile {
    pub label: String,
    pub value: String,
    pub trend: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Draft,
    Submitted,
    Approved,
}

impl CaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Draft => "badge badge--gray",
            Self::Submitted => "badge badge--blue",
            Self::Approved => "badge badge--green",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSummary {
    pub case_number: String,
    pub broker_company: String,
    pub client_name: String,
    pub network: String,
    pub issuance_date: String,
    pub census_count: u32,
    pub net_premium: String,
    pub status: CaseStatus,
}

/// Cases whose number, client, or broker company contain `term`,
/// case-insensitively. A blank term keeps every case.
pub fn search_cases<'a>(cases: &'a [CaseSummary], term: &str) -> Vec<&'a CaseSummary> {
    let needle = term.trim().to_lowercase();
    cases
        .iter()
        .filter(|case| {
            needle.is_empty()
                || [&case.case_number, &case.client_name, &case.broker_company]
                    .iter()
                    .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerContact {
    pub code: String,
    pub name: String,
    pub broker_type: String,
    pub office_email: String,
    pub office_phone: String,
}

impl BrokerContact {
    pub fn type_badge_class(&self) -> &'static str {
        match self.broker_type.to_lowercase().as_str() {
            "premium broker" => "badge badge--purple",
            "standard broker" => "badge badge--blue",
            _ => "badge badge--gray",
        }
    }
}

/// Leaderboard medal class for a zero-based rank.
pub fn rank_class(rank: usize) -> &'static str {
    match rank {
        0 => "rank rank--gold",
        1 => "rank rank--silver",
        2 => "rank rank--bronze",
        _ => "rank",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerPerformance {
    pub name: String,
    pub company: String,
    pub premium: String,
    pub cases: u32,
    pub growth: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerDashboard {
    pub stats: Vec<StatTile>,
    pub recent_cases: Vec<CaseSummary>,
    pub top_brokers: Vec<BrokerPerformance>,
    pub recent_brokers: Vec<BrokerContact>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Info,
    Warning,
    Error,
}

impl AlertKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "alert--info",
            Self::Warning => "alert--warning",
            Self::Error => "alert--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemAlert {
    pub id: u32,
    pub kind: AlertKind,
    pub message: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub action: String,
    pub user: String,
    pub status: String,
    pub time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub stats: Vec<StatTile>,
    pub system_health: String,
    pub uptime: String,
    pub last_backup: String,
    pub storage_used: String,
    pub alerts: Vec<SystemAlert>,
    pub activities: Vec<ActivityEntry>,
}
