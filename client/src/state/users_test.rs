use super::*;

use time::macros::date;

use crate::provider::data::{DataProvider, MockDataProvider};

fn seed() -> Vec<UserRecord> {
    MockDataProvider.users()
}

fn names(users: &[UserRecord]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn department_and_status_facets_combine() {
    let query = UserQuery {
        department: Facet::Only("Finance".to_owned()),
        status: Facet::Only(UserStatus::Active),
        ..UserQuery::default()
    };
    assert_eq!(names(&filter_users(&seed(), &query)), vec!["David Kim"]);
}

#[test]
fn search_is_case_insensitive() {
    let query = UserQuery { search: "mike".to_owned(), ..UserQuery::default() };
    assert_eq!(names(&filter_users(&seed(), &query)), vec!["Mike Chen"]);

    let query = UserQuery { search: "MEDICAL".to_owned(), ..UserQuery::default() };
    assert_eq!(names(&filter_users(&seed(), &query)), vec!["Lisa Wang"]);
}

#[test]
fn search_checks_email_role_and_department() {
    let query = UserQuery { search: "fatima.alzahra".to_owned(), ..UserQuery::default() };
    assert_eq!(names(&filter_users(&seed(), &query)), vec!["Fatima Al-Zahra"]);

    let query = UserQuery { search: "broker".to_owned(), ..UserQuery::default() };
    assert_eq!(names(&filter_users(&seed(), &query)), vec!["Ahmed Hassan", "Fatima Al-Zahra"]);
}

#[test]
fn status_facet_alone() {
    let query = UserQuery { status: Facet::Only(UserStatus::Pending), ..UserQuery::default() };
    assert_eq!(names(&filter_users(&seed(), &query)), vec!["Fatima Al-Zahra"]);
}

#[test]
fn no_match_yields_empty_list() {
    let query = UserQuery { search: "nobody".to_owned(), ..UserQuery::default() };
    assert!(filter_users(&seed(), &query).is_empty());
}

#[test]
fn select_sentinel_maps_to_all() {
    assert_eq!(Facet::from_select("all"), Facet::All);
    assert_eq!(Facet::from_select("IT"), Facet::Only("IT".to_owned()));
    assert_eq!(Facet::Only("HR".to_owned()).select_value(), "HR");
    assert_eq!(Facet::<String>::All.select_value(), "all");
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_by_same_field_flips_direction() {
    let mut query = UserQuery::default();
    query.sort_by(UserSortField::Name);
    assert_eq!(query.sort_direction, SortDirection::Descending);
    query.sort_by(UserSortField::Name);
    assert_eq!(query.sort_direction, SortDirection::Ascending);
}

#[test]
fn sort_by_new_field_starts_ascending() {
    let mut query = UserQuery { sort_direction: SortDirection::Descending, ..UserQuery::default() };
    query.sort_by(UserSortField::Email);
    assert_eq!(query.sort_field, UserSortField::Email);
    assert_eq!(query.sort_direction, SortDirection::Ascending);
}

#[test]
fn descending_name_sort() {
    let query = UserQuery { sort_direction: SortDirection::Descending, ..UserQuery::default() };
    let sorted = filter_users(&seed(), &query);
    assert_eq!(sorted.first().map(|u| u.name.as_str()), Some("Sarah Johnson"));
}

#[test]
fn missing_values_sort_last_then_first() {
    let mut users = seed();
    let unplaced = UserRecord { position: None, name: "Zed Nobody".to_owned(), id: "99".to_owned(), ..users[0].clone() };
    users.push(unplaced);

    let mut query = UserQuery { sort_field: UserSortField::Position, ..UserQuery::default() };
    let ascending = filter_users(&users, &query);
    assert_eq!(ascending.last().map(|u| u.id.as_str()), Some("99"));

    query.sort_direction = SortDirection::Descending;
    let descending = filter_users(&users, &query);
    assert_eq!(descending.first().map(|u| u.id.as_str()), Some("99"));
}

// =============================================================
// Stats and form
// =============================================================

#[test]
fn stats_sum_to_total() {
    let stats = UserStats::from_users(&seed());
    assert_eq!(stats.total, 8);
    assert_eq!(stats.active + stats.pending + stats.inactive, stats.total);
}

#[test]
fn create_appends_with_defaults() {
    let mut users = seed();
    let form = UserForm {
        name: "Noor Ali".to_owned(),
        email: "noor.ali@maxhealth.ae".to_owned(),
        role: "IT Manager".to_owned(),
        department: "IT".to_owned(),
        ..UserForm::default()
    };
    apply_user_form(&mut users, &ModalMode::Create, form, "new-id".to_owned(), date!(2026 - 10 - 17));

    assert_eq!(users.len(), 9);
    let created = users.last().unwrap();
    assert_eq!(created.id, "new-id");
    assert_eq!(created.status, UserStatus::Active);
    assert_eq!(created.last_login, "Never");
    assert_eq!(created.join_date, "2026-10-17");
    assert!(created.permissions.is_empty());
}

#[test]
fn edit_replaces_fields_in_place() {
    let mut users = seed();
    let mut form = UserForm::from_record(&users[3]);
    form.status = UserStatus::Inactive;
    form.position = "Head of Finance".to_owned();
    apply_user_form(&mut users, &ModalMode::Edit("4".to_owned()), form, "unused".to_owned(), date!(2026 - 10 - 17));

    assert_eq!(users.len(), 8);
    let edited = &users[3];
    assert_eq!(edited.name, "David Kim");
    assert_eq!(edited.status, UserStatus::Inactive);
    assert_eq!(edited.position.as_deref(), Some("Head of Finance"));
    assert_eq!(edited.join_date, "2021-01-05");
    assert_eq!(edited.last_login, "3 hours ago");
}

#[test]
fn edit_with_unknown_id_is_a_no_op() {
    let mut users = seed();
    let before = users.clone();
    apply_user_form(
        &mut users,
        &ModalMode::Edit("missing".to_owned()),
        UserForm::default(),
        "unused".to_owned(),
        date!(2026 - 10 - 17),
    );
    assert_eq!(users, before);
}

#[test]
fn status_parse_matches_as_str() {
    for status in UserStatus::ALL {
        assert_eq!(UserStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(UserStatus::parse("archived"), None);
}
