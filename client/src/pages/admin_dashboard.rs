//! Admin landing page: system stats, alerts, quick actions, activity feed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin_layout::AdminLayout;
use crate::components::stat_card::StatCard;
use crate::provider::capabilities::{Capabilities, Capability};
use crate::provider::data::SharedDataProvider;
use crate::state::dashboard::{AdminDashboard, AlertKind};
use crate::util::format::capitalize;

fn alert_icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "ℹ",
        AlertKind::Warning => "⚠",
        AlertKind::Error => "⛔",
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let data = expect_context::<SharedDataProvider>();
    let capabilities = expect_context::<Capabilities>();
    let navigate = use_navigate();
    let AdminDashboard { stats, system_health, uptime, last_backup, storage_used, alerts, activities } =
        data.admin_dashboard();

    let nav_users = navigate.clone();
    let nav_roles = navigate;
    let can_view_alerts = capabilities.is_enabled(Capability::Notifications);

    view! {
        <AdminLayout
            title="Admin Dashboard"
            description="Central command center for monitoring CRM system and managing administrative tasks"
        >
            <div class="stat-grid">
                {stats.into_iter().map(|tile| view! { <StatCard tile=tile/> }).collect_view()}
            </div>

            <div class="dashboard-grid">
                <section class="card dashboard-grid__wide">
                    <h3 class="card__title">"Critical Alerts"</h3>
                    <ul class="alert-list">
                        {alerts
                            .into_iter()
                            .map(|alert| {
                                view! {
                                    <li class=format!("alert {}", alert.kind.css_modifier())>
                                        <span class="alert__icon">{alert_icon(alert.kind)}</span>
                                        <div class="alert__body">
                                            <div>{alert.message}</div>
                                            <div class="table__muted">{alert.time}</div>
                                        </div>
                                        <button class="btn btn--outline btn--small" disabled=!can_view_alerts>
                                            "View"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="card">
                    <h3 class="card__title">"Quick Actions"</h3>
                    <div class="quick-actions">
                        <button
                            class="btn btn--primary btn--block"
                            on:click=move |_| nav_users("/admin/users", NavigateOptions::default())
                        >
                            "Add User"
                        </button>
                        <button
                            class="btn btn--outline btn--block"
                            on:click=move |_| nav_roles("/admin/roles", NavigateOptions::default())
                        >
                            "Manage Roles"
                        </button>
                        <button
                            class="btn btn--outline btn--block"
                            disabled=capabilities.is_disabled(Capability::ReportGeneration)
                        >
                            "Generate Report"
                        </button>
                        <button
                            class="btn btn--outline btn--block"
                            disabled=capabilities.is_disabled(Capability::SystemConfig)
                        >
                            "System Settings"
                        </button>
                    </div>
                </section>
            </div>

            <div class="dashboard-grid dashboard-grid--halves">
                <section class="card">
                    <h3 class="card__title">"System Status"</h3>
                    <dl class="status-list">
                        <dt>"System Health:"</dt>
                        <dd>
                            <span class="badge badge--green">{capitalize(&system_health)}</span>
                        </dd>
                        <dt>"Uptime:"</dt>
                        <dd>{uptime}</dd>
                        <dt>"Last Backup:"</dt>
                        <dd>{last_backup}</dd>
                        <dt>"Storage Used:"</dt>
                        <dd>{storage_used}</dd>
                    </dl>
                </section>

                <section class="card">
                    <h3 class="card__title">"Recent Activities"</h3>
                    <ul class="activity-list">
                        {activities
                            .into_iter()
                            .map(|activity| {
                                let done = activity.status == "completed";
                                view! {
                                    <li class="activity-list__row">
                                        <span class=if done { "activity-list__mark activity-list__mark--done" } else { "activity-list__mark" }>
                                            {if done { "✓" } else { "…" }}
                                        </span>
                                        <div class="activity-list__body">
                                            <div>{activity.action}</div>
                                            <div class="table__muted">{activity.user}</div>
                                        </div>
                                        <span class="table__muted">{activity.time}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </AdminLayout>
    }
}
