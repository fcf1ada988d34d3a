//! Role list with category tabs, search, and the permission matrix dialog.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::permission_matrix_modal::PermissionMatrixModal;
use crate::provider::capabilities::{Capabilities, Capability};
use crate::provider::data::SharedDataProvider;
use crate::state::roles::{RoleCategory, RoleQuery, RoleRecord, RoleStats, category_count, filter_roles};
use crate::state::users::Facet;
use crate::util::format::capitalize;

#[component]
fn CategoryTab(
    label: &'static str,
    count: usize,
    facet: Facet<RoleCategory>,
    query: RwSignal<RoleQuery>,
) -> impl IntoView {
    let selected_facet = facet.clone();
    let class = move || {
        if query.with(|q| q.category == selected_facet) { "tab tab--selected" } else { "tab" }
    };
    view! {
        <button class=class on:click=move |_| query.update(|q| q.category = facet.clone())>
            <span>{label}</span>
            <span class="badge badge--secondary">{count}</span>
        </button>
    }
}

#[component]
pub fn RoleManagementPage() -> impl IntoView {
    let data = expect_context::<SharedDataProvider>();
    let capabilities = expect_context::<Capabilities>();

    let roles = data.roles();
    let stats = RoleStats::from_roles(&roles);
    let tab_counts: Vec<(RoleCategory, usize)> =
        RoleCategory::ALL.into_iter().map(|category| (category, category_count(&roles, category))).collect();
    let total = roles.len();

    let query = RwSignal::new(RoleQuery::default());
    let selected = RwSignal::new(None::<RoleRecord>);
    let source = StoredValue::new(roles);
    let visible = Memo::new(move |_| query.with(|q| source.with_value(|roles| filter_roles(roles, q))));

    let can_edit = capabilities.is_enabled(Capability::EditRole);
    let can_duplicate = capabilities.is_enabled(Capability::DuplicateRole);
    let can_act = capabilities.is_enabled(Capability::RoleActions);

    view! {
        <AdminLayout
            title="Role & Permission Management"
            description="Define roles, configure permissions, and manage access controls"
        >
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__value">{stats.total_roles}</span>
                    <span class="stat-card__label">"Total Roles"</span>
                </div>
                <div class="stat-card stat-card--green">
                    <span class="stat-card__value">{stats.active_roles}</span>
                    <span class="stat-card__label">"Active Roles"</span>
                </div>
                <div class="stat-card stat-card--purple">
                    <span class="stat-card__value">{stats.total_users}</span>
                    <span class="stat-card__label">"Assigned Users"</span>
                </div>
                <div class="stat-card stat-card--orange">
                    <span class="stat-card__value">{stats.total_permissions}</span>
                    <span class="stat-card__label">"Active Permissions"</span>
                </div>
            </div>

            <div class="tabs">
                <CategoryTab label="All" count=total facet=Facet::All query=query/>
                {tab_counts
                    .into_iter()
                    .map(|(category, count)| {
                        view! {
                            <CategoryTab
                                label=category.label()
                                count=count
                                facet=Facet::Only(category)
                                query=query
                            />
                        }
                    })
                    .collect_view()}
                <button class="btn btn--primary tabs__action" disabled=capabilities.is_disabled(Capability::CreateRole)>
                    "+ Create Role"
                </button>
            </div>

            <section class="card filters">
                <input
                    class="field__control filters__search"
                    type="search"
                    placeholder="Search roles..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
                <div class="filters__actions">
                    <button class="btn btn--outline btn--small" disabled=capabilities.is_disabled(Capability::ExportRoles)>
                        "Export"
                    </button>
                    <button class="btn btn--outline btn--small" disabled=capabilities.is_disabled(Capability::ImportRoles)>
                        "Import"
                    </button>
                    <button class="btn btn--outline btn--small" disabled=capabilities.is_disabled(Capability::Templates)>
                        "Templates"
                    </button>
                    <button class="btn btn--outline btn--small" disabled=capabilities.is_disabled(Capability::RoleSettings)>
                        "Settings"
                    </button>
                </div>
            </section>

            <section class="card">
                <div class="card__header">
                    <div>
                        <h3>"Roles List"</h3>
                        <p class="card__description">
                            {move || format!("Showing {} of {} roles", visible.with(Vec::len), total)}
                        </p>
                    </div>
                </div>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Role Name"</th>
                            <th>"Category"</th>
                            <th>"Users"</th>
                            <th>"Permissions"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|role| {
                                    let for_matrix = role.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="table__strong">{role.name}</div>
                                                <div class="table__muted">{role.code}</div>
                                                <div class="table__muted table__small">{role.description}</div>
                                            </td>
                                            <td>
                                                <span class=role.category.badge_class()>
                                                    {capitalize(role.category.as_str())}
                                                </span>
                                                <span class=role.level.badge_class()>
                                                    {capitalize(role.level.as_str())}
                                                </span>
                                            </td>
                                            <td>{role.users_count}</td>
                                            <td>{role.permissions_count}</td>
                                            <td>
                                                <span class=role.status.badge_class()>
                                                    {capitalize(role.status.as_str())}
                                                </span>
                                            </td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--ghost btn--small"
                                                    title="View permissions"
                                                    on:click=move |_| selected.set(Some(for_matrix.clone()))
                                                >
                                                    "View"
                                                </button>
                                                <button class="btn btn--ghost btn--small" title="Edit role" disabled=!can_edit>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--ghost btn--small"
                                                    title="Duplicate role"
                                                    disabled=!can_duplicate
                                                >
                                                    "Copy"
                                                </button>
                                                <button class="btn btn--ghost btn--small" title="More actions" disabled=!can_act>
                                                    "⋯"
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
                selected
                    .get()
                    .map(|role| {
                        let matrix = data.permission_matrix(&role.id);
                        view! {
                            <PermissionMatrixModal
                                role=role
                                matrix=matrix
                                on_close=Callback::new(move |()| selected.set(None))
                            />
                        }
                    })
            }}
        </AdminLayout>
    }
}
