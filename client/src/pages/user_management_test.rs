use super::*;

#[test]
fn inactive_column_shows_neutral_arrow() {
    let query = UserQuery::default();
    assert_eq!(sort_indicator(&query, UserSortField::Email), "↕");
}

#[test]
fn active_column_follows_direction() {
    let mut query = UserQuery::default();
    assert_eq!(sort_indicator(&query, UserSortField::Name), "↑");
    query.sort_by(UserSortField::Name);
    assert_eq!(sort_indicator(&query, UserSortField::Name), "↓");
}

#[test]
fn switching_column_restarts_ascending() {
    let mut query = UserQuery::default();
    query.sort_by(UserSortField::Name);
    query.sort_by(UserSortField::LastLogin);
    assert_eq!(sort_indicator(&query, UserSortField::LastLogin), "↑");
    assert_eq!(sort_indicator(&query, UserSortField::Name), "↕");
}

#[test]
fn status_select_maps_to_facet() {
    assert_eq!(status_facet_from_select("all"), Facet::All);
    assert_eq!(status_facet_from_select("pending"), Facet::Only(UserStatus::Pending));
    assert_eq!(status_facet_value(&Facet::Only(UserStatus::Inactive)), "inactive");
}
