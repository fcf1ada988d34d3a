//! # maxhealth-client
//!
//! Leptos + WASM frontend for the MaxHealth brokerage CRM: sign-in and
//! registration, the broker dashboard with the new-case wizard, and the
//! admin console for users and roles.
//!
//! Pure view models live in `state`, replaceable sources (seed data,
//! credentials, preference storage, capability flags) in `provider`, and
//! browser helpers in `util`. Pages and components only wire these to the
//! DOM.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod provider;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating maxhealth client");
    leptos::mount::hydrate_body(app::App);
}
