//! Broker registration request page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::select_field::SelectField;
use crate::pages::login::PortalFooter;
use crate::state::registration::{
    COUNTRY_CODE_OPTIONS, RegistrationField, RegistrationState, SubmissionPhase, TITLE_OPTIONS,
};
use crate::util::delay::{REGISTER_LATENCY, simulated_latency};

fn input_type(field: RegistrationField) -> &'static str {
    match field {
        RegistrationField::Email => "email",
        RegistrationField::MobileNumber => "tel",
        _ => "text",
    }
}

/// DOM id of the control bound to `field`.
fn control_id(field: RegistrationField) -> &'static str {
    match field {
        RegistrationField::Title => "title",
        RegistrationField::FirstName => "firstName",
        RegistrationField::MiddleName => "middleName",
        RegistrationField::LastName => "lastName",
        RegistrationField::Email => "email",
        RegistrationField::CountryCode => "countryCode",
        RegistrationField::MobileNumber => "mobileNumber",
        RegistrationField::CompanyName => "companyName",
        RegistrationField::Department => "department",
        RegistrationField::Position => "position",
        RegistrationField::InsuranceAuthNumber => "insuranceAuthNumber",
    }
}

#[component]
fn RegistrationInput(field: RegistrationField, state: RwSignal<RegistrationState>) -> impl IntoView {
    let id = control_id(field);
    let error = move || state.with(|s| s.visible_error(field));
    view! {
        <div class=move || if error().is_some() { "field field--invalid" } else { "field" }>
            <label class="field__label" for=id>{field.label()}</label>
            <input
                id=id
                class="field__control"
                type=input_type(field)
                placeholder=field.placeholder()
                prop:value=move || state.with(|s| s.form.get(field).to_owned())
                on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
            />
            {move || error().map(|message| view! { <p class="field__error">{message}</p> })}
        </div>
    }
}

#[component]
fn RegistrationSelect(
    field: RegistrationField,
    options: &'static [&'static str],
    state: RwSignal<RegistrationState>,
) -> impl IntoView {
    view! {
        <SelectField
            id=control_id(field)
            label=field.label()
            options=options
            placeholder=field.placeholder()
            value=Signal::derive(move || state.with(|s| s.form.get(field).to_owned()))
            on_change=Callback::new(move |value| state.update(|s| s.edit(field, value)))
            error=Signal::derive(move || state.with(|s| s.visible_error(field)))
        />
    }
}

#[component]
fn SubmittedNotice() -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <div class="login-page login-page--centered">
            <div class="login-card">
                <div class="login-card__header">
                    <div class="success-mark">"✓"</div>
                    <h1>"Registration Submitted!"</h1>
                    <p class="login-card__subtitle">
                        "Thank you for your interest in joining MaxHealth Broker Portal."
                    </p>
                </div>
                <div class="card">
                    <h3>"What happens next?"</h3>
                    <ul class="next-steps">
                        <li>"Your request has been sent to our admin team for review"</li>
                        <li>"We'll review your submission within 48 hours"</li>
                        <li>"Upon approval, you'll receive login credentials via email"</li>
                    </ul>
                </div>
                <button
                    class="btn btn--outline btn--block"
                    on:click=move |_| navigate("/login", NavigateOptions::default())
                >
                    "Back to Login"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = RwSignal::new(RegistrationState::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.try_update(RegistrationState::begin_submit).unwrap_or(false) {
            return;
        }
        let form = state.with_untracked(|s| s.form.clone());
        leptos::task::spawn_local(async move {
            simulated_latency(REGISTER_LATENCY).await;
            match serde_json::to_string(&form) {
                Ok(payload) => leptos::logging::log!("registration submitted: {payload}"),
                Err(err) => leptos::logging::warn!("registration payload not serializable: {err}"),
            }
            state.update(RegistrationState::finish_submit);
        });
    };

    let submitted = move || state.with(|s| s.phase == SubmissionPhase::Submitted);
    let submitting = move || state.with(|s| s.phase == SubmissionPhase::Submitting);

    view! {
        <Show when=submitted fallback=move || {
            let navigate = navigate.clone();
            view! {
                <div class="login-page login-page--centered">
                    <div class="login-card login-card--wide">
                        <div class="login-card__header">
                            <img class="login-card__logo" src="/maxhealth-logo.png" alt="MaxHealth Logo"/>
                            <h1>"Join MaxHealth"</h1>
                            <p class="login-card__subtitle">"Complete your broker registration"</p>
                        </div>
                        <form class="register-form" on:submit=on_submit>
                            <RegistrationSelect field=RegistrationField::Title options=TITLE_OPTIONS state=state/>
                            <div class="register-form__row">
                                <RegistrationInput field=RegistrationField::FirstName state=state/>
                                <RegistrationInput field=RegistrationField::MiddleName state=state/>
                                <RegistrationInput field=RegistrationField::LastName state=state/>
                            </div>
                            <RegistrationInput field=RegistrationField::Email state=state/>
                            <div class="register-form__row register-form__row--phone">
                                <RegistrationSelect
                                    field=RegistrationField::CountryCode
                                    options=COUNTRY_CODE_OPTIONS
                                    state=state
                                />
                                <RegistrationInput field=RegistrationField::MobileNumber state=state/>
                            </div>
                            <div class="register-form__row">
                                <RegistrationInput field=RegistrationField::CompanyName state=state/>
                                <RegistrationInput field=RegistrationField::Department state=state/>
                            </div>
                            <RegistrationInput field=RegistrationField::Position state=state/>
                            <RegistrationInput field=RegistrationField::InsuranceAuthNumber state=state/>

                            <button
                                class="btn btn--primary btn--block"
                                type="submit"
                                disabled=move || !state.with(RegistrationState::can_submit)
                            >
                                {move || if submitting() { "Submitting..." } else { "Submit Request" }}
                            </button>
                            <div class="login-card__cta">
                                <button
                                    class="btn btn--outline btn--block"
                                    type="button"
                                    on:click=move |_| navigate("/login", NavigateOptions::default())
                                >
                                    "← Back to Login"
                                </button>
                            </div>
                        </form>
                    </div>
                    <PortalFooter/>
                </div>
            }
        }>
            <SubmittedNotice/>
        </Show>
    }
}
