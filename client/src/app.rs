//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    admin_dashboard::AdminDashboardPage, broker_dashboard::BrokerDashboardPage, create_case::CreateCasePage,
    login::LoginPage, register::RegisterPage, role_management::RoleManagementPage,
    user_management::UserManagementPage,
};
use crate::provider::capabilities::Capabilities;
use crate::provider::credentials::{DemoCredentials, SharedCredentialVerifier};
use crate::provider::data::{MockDataProvider, SharedDataProvider};
use crate::provider::storage::{SharedPreferenceStore, default_store};
use crate::state::layout::DisplayPrefs;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the data, credential and preference providers plus the
/// capability flags, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let data: SharedDataProvider = Arc::new(MockDataProvider);
    let verifier: SharedCredentialVerifier = Arc::new(DemoCredentials);
    let store: SharedPreferenceStore = default_store();

    provide_context(data);
    provide_context(verifier);
    provide_context(store);
    provide_context(Capabilities::default());
    provide_context(RwSignal::new(DisplayPrefs::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/maxhealth.css"/>
        <Title text="MaxHealth"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=BrokerDashboardPage/>
                <Route path=(StaticSegment("cases"), StaticSegment("new")) view=CreateCasePage/>
                <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UserManagementPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("roles")) view=RoleManagementPage/>
            </Routes>
        </Router>
    }
}
