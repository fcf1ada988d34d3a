//! Sign-in page for brokers and administrators.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credentials are checked by the `CredentialVerifier` in context after a
//! simulated round trip; success navigates to the destination's route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::provider::credentials::SharedCredentialVerifier;
use crate::state::login::LoginState;
use crate::util::delay::{LOGIN_LATENCY, simulated_latency};

#[component]
pub fn LoginPage() -> impl IntoView {
    let verifier = expect_context::<SharedCredentialVerifier>();
    let login = RwSignal::new(LoginState::default());
    let navigate = use_navigate();

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !login.try_update(LoginState::begin).unwrap_or(false) {
            return;
        }
        let verifier = verifier.clone();
        let navigate = submit_navigate.clone();
        let (email, password) = login.with_untracked(|l| (l.email.trim().to_owned(), l.password.clone()));
        leptos::task::spawn_local(async move {
            simulated_latency(LOGIN_LATENCY).await;
            let outcome = verifier.verify(&email, &password);
            if let Err(err) = &outcome {
                leptos::logging::warn!("sign-in rejected for {email}: {err}");
            }
            if let Some(destination) = login.try_update(|l| l.finish(outcome)).flatten() {
                navigate(destination.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-page__art"></div>
            <div class="login-page__panel">
                <div class="login-card">
                    <div class="login-card__header">
                        <img class="login-card__logo" src="/maxhealth-logo.png" alt="MaxHealth Logo"/>
                        <h1>"Welcome to MaxHealth"</h1>
                        <p class="login-card__subtitle">"Sign in to your account"</p>
                    </div>

                    <form class="login-form" on:submit=on_submit>
                        <div class="field">
                            <label class="field__label" for="email">"Email Address"</label>
                            <input
                                id="email"
                                class="field__control"
                                type="email"
                                placeholder="Enter your email"
                                autofocus=true
                                prop:value=move || login.with(|l| l.email.clone())
                                on:input=move |ev| login.update(|l| l.email = event_target_value(&ev))
                            />
                        </div>

                        <div class="field">
                            <label class="field__label" for="password">"Password"</label>
                            <div class="field__with-action">
                                <input
                                    id="password"
                                    class="field__control"
                                    type=move || login.with(LoginState::password_input_type)
                                    placeholder="Enter your password"
                                    prop:value=move || login.with(|l| l.password.clone())
                                    on:input=move |ev| login.update(|l| l.password = event_target_value(&ev))
                                />
                                <button
                                    class="field__action"
                                    type="button"
                                    title=move || if login.with(|l| l.show_password) { "Hide password" } else { "Show password" }
                                    on:click=move |_| login.update(|l| l.show_password = !l.show_password)
                                >
                                    {move || if login.with(|l| l.show_password) { "🙈" } else { "👁" }}
                                </button>
                            </div>
                        </div>

                        <div class="login-form__row">
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || login.with(|l| l.remember_me)
                                    on:change=move |ev| login.update(|l| l.remember_me = event_target_checked(&ev))
                                />
                                "Remember me"
                            </label>
                            <button
                                class="btn btn--link"
                                type="button"
                                on:click=move |_| leptos::logging::log!("password reset requested")
                            >
                                "Forgot Password?"
                            </button>
                        </div>

                        <Show when=move || login.with(|l| l.error.is_some())>
                            <div class="alert alert--error" role="alert">
                                <span>{move || login.with(|l| l.error.as_ref().map(ToString::to_string))}</span>
                                <button
                                    class="btn btn--ghost alert__dismiss"
                                    type="button"
                                    title="Dismiss"
                                    on:click=move |_| login.update(LoginState::dismiss_error)
                                >
                                    "✕"
                                </button>
                            </div>
                        </Show>

                        <button
                            class="btn btn--primary btn--block"
                            type="submit"
                            disabled=move || !login.with(LoginState::can_submit)
                        >
                            {move || if login.with(|l| l.busy) { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    <div class="login-card__cta">
                        <p>"Don't have an account?"</p>
                        <button
                            class="btn btn--outline btn--block"
                            type="button"
                            on:click=move |_| navigate("/register", NavigateOptions::default())
                        >
                            "Get Started →"
                        </button>
                    </div>
                </div>

                <PortalFooter/>
            </div>
        </div>
    }
}

/// Footer shared by the sign-in and registration pages.
#[component]
pub(crate) fn PortalFooter() -> impl IntoView {
    view! {
        <footer class="login-footer">
            <p>"MaxHealth Broker Portal"</p>
            <p>"Dubai Insurance Company"</p>
            <p>
                <a href="#">"Terms & Conditions"</a>
                " • "
                <a href="#">"Privacy Policy"</a>
            </p>
            <p>"© MaxHealth / Dubai Insurance, 2025"</p>
        </footer>
    }
}
