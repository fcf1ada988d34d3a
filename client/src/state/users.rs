//! User-management list state: records, search/facet/sort query, and the
//! create/edit form.
//!
//! DESIGN
//! ======
//! The displayed list is a pure function of `(records, query)` so the page
//! can recompute it in a `Memo` on any change. Facet filters and the search
//! predicate are AND-combined; sorting runs after filtering.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::util::clock::iso_date;

/// Account status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Badge modifier class.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge badge--green",
            Self::Inactive => "badge badge--gray",
            Self::Pending => "badge badge--yellow",
        }
    }
}

/// A user account as shown on the management page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: UserStatus,
    pub last_login: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub manager: Option<String>,
    pub join_date: String,
    pub permissions: Vec<String>,
}

// =============================================================
// Query
// =============================================================

/// Equality filter with an "all" state that matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Facet<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl Facet<String> {
    /// Build from a `<select>` value where `"all"` is the sentinel.
    pub fn from_select(raw: &str) -> Self {
        if raw == "all" { Self::All } else { Self::Only(raw.to_owned()) }
    }

    pub fn select_value(&self) -> String {
        match self {
            Self::All => "all".to_owned(),
            Self::Only(v) => v.clone(),
        }
    }
}

/// Sortable user columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserSortField {
    #[default]
    Name,
    Email,
    Role,
    Department,
    Status,
    LastLogin,
    JoinDate,
    Phone,
    Position,
    Manager,
}

impl UserSortField {
    /// String form of the field for comparison; `None` when the record has no value.
    pub fn value_of(self, user: &UserRecord) -> Option<String> {
        match self {
            Self::Name => Some(user.name.clone()),
            Self::Email => Some(user.email.clone()),
            Self::Role => Some(user.role.clone()),
            Self::Department => Some(user.department.clone()),
            Self::Status => Some(user.status.as_str().to_owned()),
            Self::LastLogin => Some(user.last_login.clone()),
            Self::JoinDate => Some(user.join_date.clone()),
            Self::Phone => user.phone.clone(),
            Self::Position => user.position.clone(),
            Self::Manager => user.manager.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Everything that shapes the displayed user list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
    pub role: Facet<String>,
    pub department: Facet<String>,
    pub status: Facet<UserStatus>,
    pub sort_field: UserSortField,
    pub sort_direction: SortDirection,
}

impl UserQuery {
    /// Clicking a column header: same field flips direction, a new field
    /// starts ascending.
    pub fn sort_by(&mut self, field: UserSortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    fn matches(&self, user: &UserRecord, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || [&user.name, &user.email, &user.role, &user.department]
                .iter()
                .any(|field| field.to_lowercase().contains(needle));
        matches_search
            && self.role.matches(&user.role)
            && self.department.matches(&user.department)
            && self.status.matches(&user.status)
    }
}

/// Missing values go last ascending and first descending.
fn compare_sort_values(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
    let ordering = match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Filter then sort `users` according to `query`.
pub fn filter_users(users: &[UserRecord], query: &UserQuery) -> Vec<UserRecord> {
    let needle = query.search.to_lowercase();
    let mut out: Vec<UserRecord> = users.iter().filter(|u| query.matches(u, &needle)).cloned().collect();
    out.sort_by(|a, b| {
        let av = query.sort_field.value_of(a);
        let bv = query.sort_field.value_of(b);
        compare_sort_values(av.as_deref(), bv.as_deref(), query.sort_direction)
    });
    out
}

// =============================================================
// Stats
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

impl UserStats {
    pub fn from_users(users: &[UserRecord]) -> Self {
        let count = |status: UserStatus| users.iter().filter(|u| u.status == status).count();
        Self {
            total: users.len(),
            active: count(UserStatus::Active),
            pending: count(UserStatus::Pending),
            inactive: count(UserStatus::Inactive),
        }
    }
}

// =============================================================
// Create / edit form
// =============================================================

/// Whether the modal creates a new record or edits an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit(String),
}

/// Editable user fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: UserStatus,
    pub phone: String,
    pub position: String,
    pub manager: String,
}

impl UserForm {
    /// Pre-populate from an existing record.
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            department: user.department.clone(),
            status: user.status,
            phone: user.phone.clone().unwrap_or_default(),
            position: user.position.clone().unwrap_or_default(),
            manager: user.manager.clone().unwrap_or_default(),
        }
    }

    fn apply_to(&self, user: &mut UserRecord) {
        user.name.clone_from(&self.name);
        user.email.clone_from(&self.email);
        user.role.clone_from(&self.role);
        user.department.clone_from(&self.department);
        user.status = self.status;
        user.phone = Some(self.phone.clone());
        user.position = Some(self.position.clone());
        user.manager = Some(self.manager.clone());
    }

    /// Build a fresh record for create mode.
    pub fn into_new_record(self, id: String, today: Date) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            department: self.department,
            status: self.status,
            last_login: "Never".to_owned(),
            phone: Some(self.phone),
            position: Some(self.position),
            manager: Some(self.manager),
            join_date: iso_date(today),
            permissions: Vec::new(),
        }
    }
}

/// Apply a submitted form to `users`. Edit mode with an unknown id leaves the
/// list unchanged.
pub fn apply_user_form(users: &mut Vec<UserRecord>, mode: &ModalMode, form: UserForm, new_id: String, today: Date) {
    match mode {
        ModalMode::Edit(id) => {
            if let Some(user) = users.iter_mut().find(|u| &u.id == id) {
                form.apply_to(user);
            }
        }
        ModalMode::Create => users.push(form.into_new_record(new_id, today)),
    }
}

/// Role options offered by the facet filter and the modal.
pub const ROLE_OPTIONS: [&str; 8] = [
    "Sales Manager",
    "Operations Manager",
    "Medical Manager",
    "Finance Manager",
    "Senior Broker",
    "Standard Broker",
    "IT Manager",
    "HR Manager",
];

/// Department options offered by the facet filter and the modal.
pub const DEPARTMENT_OPTIONS: [&str; 7] = ["Sales", "Operations", "Medical", "Finance", "External", "IT", "HR"];
