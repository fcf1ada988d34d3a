use super::*;

// =============================================================
// Admin nav
// =============================================================

#[test]
fn only_routed_admin_sections_enabled_by_default() {
    let caps = Capabilities::default();
    let enabled: Vec<_> = ADMIN_NAV.iter().filter(|i| i.is_enabled(&caps)).map(|i| i.id).collect();
    assert_eq!(enabled, vec!["dashboard", "users", "roles"]);
}

#[test]
fn enabling_capability_unlocks_section() {
    let caps = Capabilities::default().with(Capability::Security);
    let security = ADMIN_NAV.iter().find(|i| i.id == "security").unwrap();
    assert!(security.is_enabled(&caps));
}

#[test]
fn titles_switch_to_arabic() {
    let users = ADMIN_NAV[1];
    assert_eq!(users.title.get(false), "User Management");
    assert_eq!(users.title.get(true), "إدارة المستخدمين");
}

#[test]
fn notifications_carry_badge() {
    let badges: Vec<_> = ADMIN_NAV.iter().filter_map(|i| i.badge.map(|b| (i.id, b))).collect();
    assert_eq!(badges, vec![("notifications", "3")]);
}

#[test]
fn active_route_is_exact() {
    assert!(is_active_route("/admin", "/admin"));
    assert!(is_active_route("/admin", "/admin/"));
    assert!(!is_active_route("/admin", "/admin/users"));
}

#[test]
fn chrome_toggles_and_guards_refresh() {
    let mut chrome = AdminChrome::default();
    chrome.toggle_sidebar();
    assert!(chrome.sidebar_collapsed);
    assert!(chrome.begin_refresh());
    assert!(!chrome.begin_refresh());
    chrome.finish_refresh();
    assert!(!chrome.refreshing);
}

// =============================================================
// Broker nav
// =============================================================

#[test]
fn new_case_is_the_only_enabled_broker_item() {
    let caps = Capabilities::default();
    let enabled: Vec<_> =
        BROKER_NAV.iter().flat_map(|s| s.items.iter()).filter(|i| i.is_enabled(&caps)).map(|i| i.route).collect();
    assert_eq!(enabled, vec!["/cases/new"]);
}

#[test]
fn case_management_expanded_by_default() {
    let sidebar = BrokerSidebar::default();
    assert!(sidebar.open);
    assert!(sidebar.is_expanded(CASE_MANAGEMENT));
    assert!(!sidebar.is_expanded("plan-management"));
}

#[test]
fn toggle_section_flips_expansion() {
    let mut sidebar = BrokerSidebar::default();
    sidebar.toggle_section(CASE_MANAGEMENT);
    assert!(!sidebar.is_expanded(CASE_MANAGEMENT));
    sidebar.toggle_section("content-management");
    sidebar.toggle_section(CASE_MANAGEMENT);
    assert!(sidebar.is_expanded("content-management"));
    assert!(sidebar.is_expanded(CASE_MANAGEMENT));
}

#[test]
fn section_counts() {
    let counts: Vec<_> =
        BROKER_NAV[0].items.iter().filter_map(|i| i.count.map(|c| (i.id, c))).collect();
    assert_eq!(counts, vec![("active-case", 12), ("archive-case", 45)]);
}
