//! User list with search, facets, sortable columns, and the user modal.
//!
//! DESIGN
//! ======
//! The page owns the user list for its lifetime; `filter_users` re-derives
//! the visible rows in a `Memo` on every query or list change. Saving goes
//! through a simulated delay, then `apply_user_form` mutates the list.

#[cfg(test)]
#[path = "user_management_test.rs"]
mod user_management_test;

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::user_modal::UserModal;
use crate::provider::capabilities::{Capabilities, Capability};
use crate::provider::data::SharedDataProvider;
use crate::state::users::{
    DEPARTMENT_OPTIONS, Facet, ModalMode, ROLE_OPTIONS, SortDirection, UserForm, UserQuery, UserSortField, UserStats,
    UserStatus, apply_user_form, filter_users,
};
use crate::util::clock;
use crate::util::delay::{USER_SAVE_LATENCY, simulated_latency};

/// Arrow shown next to a column header.
pub(crate) fn sort_indicator(query: &UserQuery, field: UserSortField) -> &'static str {
    if query.sort_field != field {
        return "↕";
    }
    match query.sort_direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    }
}

pub(crate) fn status_facet_from_select(raw: &str) -> Facet<UserStatus> {
    UserStatus::parse(raw).map_or(Facet::All, Facet::Only)
}

fn status_facet_value(facet: &Facet<UserStatus>) -> &'static str {
    match facet {
        Facet::All => "all",
        Facet::Only(status) => status.as_str(),
    }
}

#[component]
fn SortHeader(label: &'static str, field: UserSortField, query: RwSignal<UserQuery>) -> impl IntoView {
    view! {
        <th>
            <button class="table__sort" on:click=move |_| query.update(|q| q.sort_by(field))>
                {label}
                <span class="table__sort-mark">{move || query.with(|q| sort_indicator(q, field))}</span>
            </button>
        </th>
    }
}

#[component]
fn FacetSelect(
    id: &'static str,
    all_label: &'static str,
    options: &'static [&'static str],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="field__control"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="all" selected=move || value.get() == "all">{all_label}</option>
            {options
                .iter()
                .map(|opt| {
                    let opt = *opt;
                    view! { <option value=opt selected=move || value.get() == opt>{opt}</option> }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let data = expect_context::<SharedDataProvider>();
    let capabilities = expect_context::<Capabilities>();

    let users = RwSignal::new(data.users());
    let query = RwSignal::new(UserQuery::default());
    let modal = RwSignal::new(None::<(ModalMode, UserForm)>);
    let saving = RwSignal::new(false);

    let visible = Memo::new(move |_| users.with(|list| query.with(|q| filter_users(list, q))));
    let stats = Memo::new(move |_| users.with(|list| UserStats::from_users(list)));

    let on_submit = Callback::new(move |form: UserForm| {
        if saving.get_untracked() {
            return;
        }
        let Some((mode, _)) = modal.get_untracked() else {
            return;
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            simulated_latency(USER_SAVE_LATENCY).await;
            let new_id = uuid::Uuid::new_v4().to_string();
            users.update(|list| apply_user_form(list, &mode, form, new_id, clock::today()));
            saving.set(false);
            modal.set(None);
        });
    });
    let on_close = Callback::new(move |()| {
        if !saving.get_untracked() {
            modal.set(None);
        }
    });

    let can_edit_permissions = capabilities.is_enabled(Capability::UserPermissions);
    let can_delete = capabilities.is_enabled(Capability::DeleteUser);

    view! {
        <AdminLayout
            title="User Management"
            description="Manage user accounts, roles, and permissions across the MaxHealth CRM system"
        >
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__value">{move || stats.get().total}</span>
                    <span class="stat-card__label">"Total Users"</span>
                </div>
                <div class="stat-card stat-card--green">
                    <span class="stat-card__value">{move || stats.get().active}</span>
                    <span class="stat-card__label">"Active Users"</span>
                </div>
                <div class="stat-card stat-card--yellow">
                    <span class="stat-card__value">{move || stats.get().pending}</span>
                    <span class="stat-card__label">"Pending Users"</span>
                </div>
                <div class="stat-card stat-card--gray">
                    <span class="stat-card__value">{move || stats.get().inactive}</span>
                    <span class="stat-card__label">"Inactive Users"</span>
                </div>
            </div>

            <section class="card filters">
                <input
                    class="field__control filters__search"
                    type="search"
                    placeholder="Search users..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
                <div class="filters__row">
                    <FacetSelect
                        id="filter-role"
                        all_label="All Roles"
                        options=&ROLE_OPTIONS
                        value=Signal::derive(move || query.with(|q| q.role.select_value()))
                        on_change=Callback::new(move |raw: String| query.update(|q| q.role = Facet::from_select(&raw)))
                    />
                    <FacetSelect
                        id="filter-department"
                        all_label="All Departments"
                        options=&DEPARTMENT_OPTIONS
                        value=Signal::derive(move || query.with(|q| q.department.select_value()))
                        on_change=Callback::new(move |raw: String| {
                            query.update(|q| q.department = Facet::from_select(&raw));
                        })
                    />
                    <select
                        id="filter-status"
                        class="field__control"
                        prop:value=move || query.with(|q| status_facet_value(&q.status))
                        on:change=move |ev| {
                            query.update(|q| q.status = status_facet_from_select(&event_target_value(&ev)));
                        }
                    >
                        <option value="all">"All Status"</option>
                        {UserStatus::ALL
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                            .collect_view()}
                    </select>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| modal.set(Some((ModalMode::Create, UserForm::default())))
                    >
                        "+ Add User"
                    </button>
                </div>
                <div class="filters__actions">
                    <button class="btn btn--outline btn--small" disabled=capabilities.is_disabled(Capability::ExportUsers)>
                        "Export"
                    </button>
                    <button class="btn btn--outline btn--small" disabled=capabilities.is_disabled(Capability::ImportUsers)>
                        "Import"
                    </button>
                    <button
                        class="btn btn--outline btn--small"
                        disabled=capabilities.is_disabled(Capability::AdvancedUserFilters)
                    >
                        "Advanced Filters"
                    </button>
                </div>
            </section>

            <section class="card">
                <div class="card__header">
                    <div>
                        <h3>"Users List"</h3>
                        <p class="card__description">
                            {move || format!("Showing {} of {} users", visible.with(Vec::len), users.with(Vec::len))}
                        </p>
                    </div>
                </div>
                <table class="table">
                    <thead>
                        <tr>
                            <SortHeader label="User" field=UserSortField::Name query=query/>
                            <SortHeader label="Role & Department" field=UserSortField::Role query=query/>
                            <SortHeader label="Status" field=UserSortField::Status query=query/>
                            <SortHeader label="Last Login" field=UserSortField::LastLogin query=query/>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let edit_form = UserForm::from_record(&user);
                                    let edit_mode = ModalMode::Edit(user.id.clone());
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="table__strong">{user.name}</div>
                                                <div class="table__muted">{user.email}</div>
                                                {user
                                                    .phone
                                                    .filter(|p| !p.is_empty())
                                                    .map(|p| view! { <div class="table__muted table__small">{p}</div> })}
                                            </td>
                                            <td>
                                                <div class="table__strong">{user.role}</div>
                                                <div class="table__muted">{user.department}</div>
                                            </td>
                                            <td>
                                                <span class=user.status.badge_class()>{user.status.label()}</span>
                                            </td>
                                            <td class="table__muted">{user.last_login}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--ghost btn--small"
                                                    title="Edit user"
                                                    on:click=move |_| {
                                                        modal.set(Some((edit_mode.clone(), edit_form.clone())));
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--ghost btn--small"
                                                    title="Permissions"
                                                    disabled=!can_edit_permissions
                                                >
                                                    "Permissions"
                                                </button>
                                                <button
                                                    class="btn btn--ghost btn--small btn--danger"
                                                    title="Delete user"
                                                    disabled=!can_delete
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>

            {move || {
                modal
                    .get()
                    .map(|(mode, initial)| {
                        view! {
                            <UserModal
                                mode=mode
                                initial=initial
                                saving=saving
                                on_submit=on_submit
                                on_close=on_close
                            />
                        }
                    })
            }}
        </AdminLayout>
    }
}
