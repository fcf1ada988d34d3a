//! Broker landing page: headline stats, recent cases, broker leaderboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::broker_layout::BrokerLayout;
use crate::components::stat_card::StatCard;
use crate::provider::capabilities::{Capabilities, Capability};
use crate::provider::data::SharedDataProvider;
use crate::state::dashboard::{BrokerContact, BrokerDashboard, rank_class, search_cases};

#[component]
pub fn BrokerDashboardPage() -> impl IntoView {
    let data = expect_context::<SharedDataProvider>();
    let capabilities = expect_context::<Capabilities>();
    let navigate = use_navigate();
    let BrokerDashboard { stats, recent_cases, top_brokers, recent_brokers } = data.broker_dashboard();
    let search = RwSignal::new(String::new());

    let visible_cases = Memo::new(move |_| {
        search.with(|term| search_cases(&recent_cases, term).into_iter().cloned().collect::<Vec<_>>())
    });

    let nav_new_case = navigate.clone();
    let nav_cases = navigate.clone();
    let nav_brokers = navigate;

    view! {
        <BrokerLayout
            title="Dashboard Overview"
            description="Monitor your cases, brokers, and performance metrics"
        >
            <div class="stat-grid">
                {stats.into_iter().map(|tile| view! { <StatCard tile=tile/> }).collect_view()}
            </div>

            <div class="action-bar">
                <div class="action-bar__group">
                    <button class="btn btn--primary" disabled=capabilities.is_disabled(Capability::Downloads)>
                        "Download Census"
                    </button>
                    <button
                        class="btn btn--outline"
                        on:click=move |_| nav_new_case("/cases/new", NavigateOptions::default())
                    >
                        "+ Add New Case"
                    </button>
                </div>
                <input
                    class="field__control action-bar__search"
                    type="search"
                    placeholder="Search cases..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <div class="dashboard-grid">
                <section class="card dashboard-grid__wide">
                    <div class="card__header">
                        <div>
                            <h3>"Recent Cases"</h3>
                            <p class="card__description">"Recently created cases in the system"</p>
                        </div>
                        <button
                            class="btn btn--ghost"
                            disabled=capabilities.is_disabled(Capability::ActiveCases)
                            on:click=move |_| nav_cases("/cases/active", NavigateOptions::default())
                        >
                            "View All"
                        </button>
                    </div>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Case Number"</th>
                                <th>"Client"</th>
                                <th>"Network"</th>
                                <th>"Premium"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                visible_cases
                                    .get()
                                    .into_iter()
                                    .map(|case| {
                                        view! {
                                            <tr>
                                                <td class="table__link">{case.case_number}</td>
                                                <td>
                                                    <div>{case.client_name}</div>
                                                    <div class="table__muted">{case.broker_company}</div>
                                                </td>
                                                <td>{case.network}</td>
                                                <td>
                                                    <div>{case.net_premium}</div>
                                                    <div class="table__muted">
                                                        {format!("{} members", case.census_count)}
                                                    </div>
                                                </td>
                                                <td>
                                                    <span class=case.status.badge_class()>{case.status.label()}</span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </section>

                <section class="card">
                    <div class="card__header">
                        <div>
                            <h3>"Top Brokers"</h3>
                            <p class="card__description">"Highest performing brokers this month"</p>
                        </div>
                    </div>
                    <ol class="leaderboard">
                        {top_brokers
                            .into_iter()
                            .enumerate()
                            .map(|(rank, broker)| {
                                view! {
                                    <li class="leaderboard__row">
                                        <span class=rank_class(rank)>{rank + 1}</span>
                                        <div class="leaderboard__who">
                                            <div>{broker.name}</div>
                                            <div class="table__muted">{broker.company}</div>
                                        </div>
                                        <div class="leaderboard__figures">
                                            <div>{broker.premium}</div>
                                            <div class="table__muted">
                                                {format!("{} cases", broker.cases)} " · " {broker.growth}
                                            </div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </section>
            </div>

            <section class="card">
                <div class="card__header">
                    <div>
                        <h3>"Recent Brokers"</h3>
                        <p class="card__description">"Recently added brokers to the system"</p>
                    </div>
                    <button
                        class="btn btn--ghost"
                        disabled=capabilities.is_disabled(Capability::BrokerAdministration)
                        on:click=move |_| nav_brokers("/admin/brokers", NavigateOptions::default())
                    >
                        "View All"
                    </button>
                </div>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Name"</th>
                            <th>"Type"</th>
                            <th>"Contact"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {recent_brokers
                            .into_iter()
                            .map(|broker| {
                                let badge = BrokerContact::type_badge_class(&broker);
                                view! {
                                    <tr>
                                        <td class="table__link">{broker.code}</td>
                                        <td>{broker.name}</td>
                                        <td>
                                            <span class=badge>{broker.broker_type}</span>
                                        </td>
                                        <td>
                                            <div>{broker.office_email}</div>
                                            <div class="table__muted">{broker.office_phone}</div>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        </BrokerLayout>
    }
}
