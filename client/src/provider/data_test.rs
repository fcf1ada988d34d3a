use super::*;

use crate::state::users::{UserQuery, UserStats, filter_users};

#[test]
fn seeds_eight_users() {
    let users = MockDataProvider.users();
    assert_eq!(users.len(), 8);
    let stats = UserStats::from_users(&users);
    assert_eq!(stats.active, 6);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.inactive, 1);
}

#[test]
fn user_ids_are_unique() {
    let users = MockDataProvider.users();
    let mut ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), users.len());
}

#[test]
fn default_query_sorts_by_name() {
    let users = MockDataProvider.users();
    let sorted = filter_users(&users, &UserQuery::default());
    assert_eq!(sorted.first().map(|u| u.name.as_str()), Some("Ahmed Hassan"));
    assert_eq!(sorted.last().map(|u| u.name.as_str()), Some("Sarah Johnson"));
}

#[test]
fn seeds_nine_roles_across_categories() {
    let roles = MockDataProvider.roles();
    assert_eq!(roles.len(), 9);
    assert_eq!(roles.iter().filter(|r| r.category == RoleCategory::Internal).count(), 5);
    assert_eq!(roles.iter().filter(|r| r.category == RoleCategory::External).count(), 2);
    assert_eq!(roles.iter().filter(|r| r.category == RoleCategory::Client).count(), 1);
    assert_eq!(roles.iter().filter(|r| r.category == RoleCategory::System).count(), 1);
}

#[test]
fn permission_matrix_lists_nine_modules() {
    let matrix = MockDataProvider.permission_matrix("1");
    assert_eq!(matrix.modules.len(), 9);
    let medical = matrix.modules.iter().find(|m| m.module == "Medical & Claims").map(|m| m.access);
    assert_eq!(medical, Some(AccessLevel::None));
}

#[test]
fn permission_matrix_is_role_independent() {
    assert_eq!(MockDataProvider.permission_matrix("1"), MockDataProvider.permission_matrix("9"));
}

#[test]
fn data_rules_mix_allowed_and_denied() {
    let matrix = MockDataProvider.permission_matrix("2");
    let client = &matrix.data_rules[0];
    assert_eq!(client.title, "Client Data");
    assert_eq!(client.rules.iter().filter(|r| r.allowed).count(), 2);
    assert_eq!(matrix.approval_limits[0].value, "AED 500,000");
}

#[test]
fn dashboards_carry_four_stat_tiles() {
    let broker = MockDataProvider.broker_dashboard();
    assert_eq!(broker.stats.len(), 4);
    assert_eq!(broker.recent_cases.len(), 3);
    assert_eq!(broker.top_brokers.len(), 5);

    let admin = MockDataProvider.admin_dashboard();
    assert_eq!(admin.stats.len(), 4);
    assert_eq!(admin.alerts.len(), 3);
    assert!(admin.activities.iter().all(|a| a.status == "completed"));
}
