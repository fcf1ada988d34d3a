//! Broker shell: sectioned sidebar and page header.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::provider::capabilities::Capabilities;
use crate::state::layout::{
    BROKER_DASHBOARD_ROUTE, BROKER_NAV, BrokerNavItem, BrokerNavSection, BrokerSidebar, is_active_route,
};

pub const DEFAULT_BROKER_TITLE: &str = "MaxHealth Insurance Calculator – Dashboard";
pub const DEFAULT_BROKER_DESCRIPTION: &str = "Welcome back, Broker";
pub const APP_VERSION: &str = "Version 4.2.2";

#[component]
fn BrokerNavLink(item: BrokerNavItem) -> impl IntoView {
    let capabilities = expect_context::<Capabilities>();
    let location = use_location();
    let navigate = use_navigate();
    let enabled = item.is_enabled(&capabilities);

    let class = move || {
        let mut class = String::from("broker-nav__item");
        if is_active_route(item.route, &location.pathname.get()) {
            class.push_str(" broker-nav__item--active");
        }
        if !enabled {
            class.push_str(" broker-nav__item--disabled");
        }
        class
    };

    view! {
        <button class=class disabled=!enabled on:click=move |_| navigate(item.route, NavigateOptions::default())>
            <span>{item.name}</span>
            {item.count.map(|count| view! { <span class="badge badge--count">{count}</span> })}
        </button>
    }
}

#[component]
fn BrokerNavGroup(section: BrokerNavSection, sidebar: RwSignal<BrokerSidebar>) -> impl IntoView {
    let expanded = move || sidebar.with(|s| s.is_expanded(section.id));
    view! {
        <div class="broker-nav__section">
            <button
                class="broker-nav__heading"
                aria-expanded=move || expanded().to_string()
                on:click=move |_| sidebar.update(|s| s.toggle_section(section.id))
            >
                <span>{section.title}</span>
                <span class="broker-nav__chevron">{move || if expanded() { "▾" } else { "▸" }}</span>
            </button>
            <Show when=expanded>
                <div class="broker-nav__items">
                    {section.items.iter().map(|item| view! { <BrokerNavLink item=*item/> }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Broker page frame with default heading text for the dashboard.
#[component]
pub fn BrokerLayout(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    let sidebar = RwSignal::new(BrokerSidebar::default());
    let location = use_location();
    let navigate = use_navigate();
    let title = title.unwrap_or_else(|| DEFAULT_BROKER_TITLE.to_owned());
    let description = description.unwrap_or_else(|| Signal::stored(DEFAULT_BROKER_DESCRIPTION.to_owned()));

    let nav_dashboard = navigate.clone();
    let dashboard_class = move || {
        if is_active_route(BROKER_DASHBOARD_ROUTE, &location.pathname.get()) {
            "broker-nav__item broker-nav__item--active"
        } else {
            "broker-nav__item"
        }
    };
    let shell_class = move || {
        if sidebar.with(|s| s.open) { "broker-shell" } else { "broker-shell broker-shell--closed" }
    };

    view! {
        <div class=shell_class>
            <aside class="broker-sidebar">
                <div class="broker-sidebar__brand">"MaxHealth"</div>
                <nav class="broker-nav">
                    <button
                        class=dashboard_class
                        on:click=move |_| nav_dashboard(BROKER_DASHBOARD_ROUTE, NavigateOptions::default())
                    >
                        "Dashboard"
                    </button>
                    {BROKER_NAV
                        .iter()
                        .map(|section| view! { <BrokerNavGroup section=*section sidebar=sidebar/> })
                        .collect_view()}
                </nav>
                <div class="broker-sidebar__footer">
                    <span class="broker-sidebar__version">{APP_VERSION}</span>
                    <button
                        class="btn btn--ghost"
                        on:click=move |_| navigate("/login", NavigateOptions::default())
                    >
                        "Logout"
                    </button>
                </div>
            </aside>

            <div class="broker-shell__main">
                <header class="broker-header">
                    <button
                        class="btn btn--ghost broker-header__menu"
                        title="Toggle sidebar"
                        on:click=move |_| sidebar.update(|s| s.open = !s.open)
                    >
                        "☰"
                    </button>
                    <div>
                        <h1>{title}</h1>
                        <p class="broker-header__description">{move || description.get()}</p>
                    </div>
                </header>
                <main class="broker-content">{children()}</main>
            </div>
        </div>
    }
}
