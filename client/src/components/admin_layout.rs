//! Admin shell: collapsible sidebar, header with live clock, content slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/admin/*` page renders inside this shell. It owns the direction
//! toggle (persisted through the preference store), the header clock, and
//! the simulated refresh action. Nav entries come from `ADMIN_NAV` and are
//! gated by the `Capabilities` in context.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::provider::capabilities::Capabilities;
use crate::provider::storage::SharedPreferenceStore;
use crate::state::layout::{
    ADMIN_HEADER, ADMIN_NAV, ADMIN_USER_NAME, ADMIN_USER_ROLE, AdminChrome, AdminNavItem, COMING_SOON,
    DIRECTION_TOGGLE, DisplayPrefs, LOGOUT, is_active_route,
};
use crate::util::clock;
use crate::util::delay::{REFRESH_LATENCY, simulated_latency};
use crate::util::locale;

fn nav_icon(id: &str) -> &'static str {
    match id {
        "dashboard" => "▦",
        "users" => "👥",
        "roles" => "🛡",
        "system" => "⚙",
        "integrations" => "⇄",
        "workflows" => "⟳",
        "notifications" => "🔔",
        "data" => "📊",
        "security" => "🔒",
        "templates" => "📄",
        _ => "•",
    }
}

/// Read the stored direction once on the client and apply it to `<html>`.
fn load_direction(prefs: RwSignal<DisplayPrefs>, store: SharedPreferenceStore) {
    Effect::new(move || {
        if prefs.with_untracked(|p| p.loaded) {
            return;
        }
        let rtl = locale::read_preference(store.as_ref());
        locale::apply(rtl);
        prefs.set(DisplayPrefs { rtl, loaded: true });
    });
}

#[component]
fn AdminNavButton(item: AdminNavItem, chrome: RwSignal<AdminChrome>) -> impl IntoView {
    let capabilities = expect_context::<Capabilities>();
    let prefs = expect_context::<RwSignal<DisplayPrefs>>();
    let location = use_location();
    let navigate = use_navigate();
    let enabled = item.is_enabled(&capabilities);

    let class = move || {
        let mut class = String::from("sidebar__item");
        if is_active_route(item.route, &location.pathname.get()) {
            class.push_str(" sidebar__item--active");
        }
        if !enabled {
            class.push_str(" sidebar__item--disabled");
        }
        class
    };
    let expanded = move || !chrome.with(|c| c.sidebar_collapsed);

    view! {
        <button
            class=class
            disabled=!enabled
            title=move || item.title.get(prefs.get().rtl)
            on:click=move |_| navigate(item.route, NavigateOptions::default())
        >
            <span class="sidebar__icon">{nav_icon(item.id)}</span>
            <Show when=expanded>
                <span class="sidebar__label">{move || item.title.get(prefs.get().rtl)}</span>
                {item.badge.map(|badge| view! { <span class="badge badge--count">{badge}</span> })}
                {(!enabled)
                    .then(|| {
                        view! {
                            <span class="badge badge--soon">{move || COMING_SOON.get(prefs.get().rtl)}</span>
                        }
                    })}
            </Show>
        </button>
    }
}

/// Admin page frame. `title` and `description` head the content area.
#[component]
pub fn AdminLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    let prefs = expect_context::<RwSignal<DisplayPrefs>>();
    let store = expect_context::<SharedPreferenceStore>();
    let chrome = RwSignal::new(AdminChrome::default());
    let now = RwSignal::new(clock::now_local());
    let navigate = use_navigate();

    load_direction(prefs, store.clone());

    #[cfg(feature = "hydrate")]
    {
        let clock_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let clock_alive_task = clock_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !clock_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                now.set(clock::now_local());
            }
        });
        on_cleanup(move || clock_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_toggle_direction = move |_| {
        let next = locale::toggle(store.as_ref(), prefs.get_untracked().rtl);
        prefs.update(|p| p.rtl = next);
    };

    let on_refresh = move |_| {
        if !chrome.try_update(AdminChrome::begin_refresh).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            simulated_latency(REFRESH_LATENCY).await;
            chrome.update(AdminChrome::finish_refresh);
        });
    };

    let on_logout = move |_| navigate("/login", NavigateOptions::default());

    let rtl = move || prefs.get().rtl;
    let clock_text = move || {
        let at = now.get();
        let rtl = rtl();
        format!("{} | {} GST", clock::format_long_date(at.date(), rtl), clock::format_time(at, rtl))
    };
    let sidebar_class = move || {
        if chrome.with(|c| c.sidebar_collapsed) { "sidebar sidebar--collapsed" } else { "sidebar" }
    };

    view! {
        <div class="admin-shell" dir=move || if rtl() { "rtl" } else { "ltr" }>
            <aside class=sidebar_class>
                <div class="sidebar__brand">
                    <Show when=move || !chrome.with(|c| c.sidebar_collapsed)>
                        <span class="sidebar__logo">"MaxHealth"</span>
                    </Show>
                    <button
                        class="btn btn--ghost sidebar__collapse"
                        title="Toggle sidebar"
                        on:click=move |_| chrome.update(AdminChrome::toggle_sidebar)
                    >
                        {move || if chrome.with(|c| c.sidebar_collapsed) { "»" } else { "«" }}
                    </button>
                </div>
                <nav class="sidebar__nav">
                    {ADMIN_NAV.into_iter().map(|item| view! { <AdminNavButton item=item chrome=chrome/> }).collect_view()}
                </nav>
                <button class="btn btn--ghost sidebar__logout" on:click=on_logout>
                    <span class="sidebar__icon">"⎋"</span>
                    <Show when=move || !chrome.with(|c| c.sidebar_collapsed)>
                        <span>{move || LOGOUT.get(rtl())}</span>
                    </Show>
                </button>
            </aside>

            <div class="admin-shell__main">
                <header class="admin-header">
                    <div class="admin-header__title">
                        <h1>{move || ADMIN_HEADER.get(rtl())}</h1>
                        <span class="admin-header__clock">{clock_text}</span>
                    </div>
                    <div class="admin-header__actions">
                        <button class="btn btn--outline" title="Toggle text direction" on:click=on_toggle_direction>
                            {move || DIRECTION_TOGGLE.get(rtl())}
                        </button>
                        <button
                            class="btn btn--ghost"
                            title="Refresh"
                            disabled=move || chrome.with(|c| c.refreshing)
                            on:click=on_refresh
                        >
                            <span class=move || {
                                if chrome.with(|c| c.refreshing) { "spin" } else { "" }
                            }>"⟳"</span>
                        </button>
                        <span class="admin-header__bell">
                            "🔔"<span class="badge badge--count">"3"</span>
                        </span>
                        <div class="admin-header__user">
                            <span class="admin-header__name">{move || ADMIN_USER_NAME.get(rtl())}</span>
                            <span class="admin-header__role">{move || ADMIN_USER_ROLE.get(rtl())}</span>
                        </div>
                    </div>
                </header>

                <main class="admin-content">
                    <div class="page-heading">
                        <h2>{title}</h2>
                        {description.map(|d| view! { <p class="page-heading__description">{d}</p> })}
                    </div>
                    {children()}
                </main>
            </div>
        </div>
    }
}
