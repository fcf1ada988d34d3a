use super::*;

use crate::provider::data::{DataProvider, MockDataProvider};

fn names(roles: &[RoleRecord]) -> Vec<&str> {
    roles.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn empty_query_keeps_source_order() {
    let roles = MockDataProvider.roles();
    let filtered = filter_roles(&roles, &RoleQuery::default());
    assert_eq!(filtered, roles);
}

#[test]
fn search_matches_code_case_insensitively() {
    let roles = MockDataProvider.roles();
    let query = RoleQuery { search: "sen_broker".to_owned(), ..RoleQuery::default() };
    assert_eq!(names(&filter_roles(&roles, &query)), vec!["Senior Broker"]);
}

#[test]
fn search_matches_department() {
    let roles = MockDataProvider.roles();
    let query = RoleQuery { search: "sales".to_owned(), ..RoleQuery::default() };
    assert_eq!(names(&filter_roles(&roles, &query)), vec!["Sales Manager", "Sales Representative"]);
}

#[test]
fn category_facet_narrows() {
    let roles = MockDataProvider.roles();
    let query = RoleQuery { category: Facet::Only(RoleCategory::External), ..RoleQuery::default() };
    assert_eq!(names(&filter_roles(&roles, &query)), vec!["Senior Broker", "Standard Broker"]);
}

#[test]
fn search_and_category_combine() {
    let roles = MockDataProvider.roles();
    let query = RoleQuery { search: "manager".to_owned(), category: Facet::Only(RoleCategory::System) };
    assert!(filter_roles(&roles, &query).is_empty());
}

#[test]
fn stats_sum_display_counts() {
    let stats = RoleStats::from_roles(&MockDataProvider.roles());
    assert_eq!(stats.total_roles, 9);
    assert_eq!(stats.active_roles, 9);
    assert_eq!(stats.total_users, 61);
    assert_eq!(stats.total_permissions, 661);
}

#[test]
fn category_counts_cover_every_role() {
    let roles = MockDataProvider.roles();
    let sum: usize = RoleCategory::ALL.iter().map(|c| category_count(&roles, *c)).sum();
    assert_eq!(sum, roles.len());
    assert_eq!(category_count(&roles, RoleCategory::Internal), 5);
}
