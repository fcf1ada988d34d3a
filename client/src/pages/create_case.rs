//! New-case wizard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step 1 collects client/plan details and the census, terms-of-benefit and
//! claims documents. Advancing runs the current step's contract from
//! `state::wizard`; steps 2-4 render a placeholder panel until their
//! contracts carry content.

use leptos::prelude::*;

use crate::components::broker_layout::BrokerLayout;
use crate::components::file_slot::FileSlotCard;
use crate::components::placeholder::Placeholder;
use crate::components::select_field::SelectField;
use crate::state::wizard::{CaseField, FieldInput, FileSlot, WizardState, WizardStep};
use crate::util::clock;

#[cfg(test)]
#[path = "create_case_test.rs"]
mod create_case_test;

/// CSS class of a step marker relative to the current step.
pub(crate) fn step_marker_class(step: WizardStep, current: WizardStep) -> &'static str {
    if current.number() >= step.number() { "stepper__marker stepper__marker--reached" } else { "stepper__marker" }
}

/// Slots shown beside the form; the census slot leads the form itself.
const SIDE_SLOTS: [FileSlot; 2] = [FileSlot::TermsOfBenefit, FileSlot::ClaimsReport];

#[component]
fn CaseFieldInput(field: CaseField, wizard: RwSignal<WizardState>) -> impl IntoView {
    let id = field.key();
    let value = Signal::derive(move || wizard.with(|w| w.draft.get(field).to_owned()));
    let error = Signal::derive(move || wizard.with(|w| w.error(field)));
    let on_blur = move || wizard.update(|w| w.blur(field, clock::today()));

    let control = match field.input() {
        FieldInput::Select(options) => {
            return view! {
                <SelectField
                    id=id
                    label=field.label()
                    options=options
                    placeholder=field.placeholder()
                    required=field.is_required()
                    value=value
                    on_change=Callback::new(move |v| wizard.update(|w| w.set_field(field, v)))
                    on_blur=Callback::new(move |()| on_blur())
                    error=error
                />
            }
            .into_any();
        }
        FieldInput::ReadOnly => {
            view! { <input id=id class="field__control field__control--readonly" disabled=true prop:value=move || value.get()/> }
                .into_any()
        }
        input => {
            let input_type = match input {
                FieldInput::Email => "email",
                FieldInput::Tel => "tel",
                FieldInput::Date => "date",
                FieldInput::Number => "number",
                _ => "text",
            };
            let min = (input == FieldInput::Date).then(|| clock::iso_date(clock::today()));
            view! {
                <input
                    id=id
                    name=id
                    class="field__control"
                    type=input_type
                    min=min
                    placeholder=field.placeholder()
                    prop:value=move || value.get()
                    on:input=move |ev| wizard.update(|w| w.set_field(field, event_target_value(&ev)))
                    on:blur=move |_| on_blur()
                />
            }
            .into_any()
        }
    };

    view! {
        <div class=move || if error.get().is_some() { "field field--invalid" } else { "field" }>
            <label class="field__label" for=id>
                {field.label()}
                {field.is_required().then(|| view! { <span class="field__required">" *"</span> })}
            </label>
            {control}
            <Show when=move || error.get().is_some()>
                <p class="field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn Stepper(wizard: RwSignal<WizardState>) -> impl IntoView {
    let current = move || wizard.with(|w| w.step);
    view! {
        <ol class="stepper">
            {WizardStep::ALL
                .into_iter()
                .map(|step| {
                    view! {
                        <li class="stepper__step">
                            <span class=move || step_marker_class(step, current())>{step.number()}</span>
                            <span class="stepper__label">{step.title()}</span>
                            {(!step.is_last())
                                .then(|| {
                                    view! {
                                        <span class=move || {
                                            if current().number() > step.number() {
                                                "stepper__bar stepper__bar--done"
                                            } else {
                                                "stepper__bar"
                                            }
                                        }></span>
                                    }
                                })}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn ClientPlanStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard-grid">
            <div class="wizard-grid__main">
                <section class="card">
                    <FileSlotCard kind=FileSlot::Census wizard=wizard/>
                </section>
                <section class="card">
                    <h3>"Client & Plan Information"</h3>
                    <div class="form-grid">
                        {CaseField::ALL
                            .into_iter()
                            .map(|field| view! { <CaseFieldInput field=field wizard=wizard/> })
                            .collect_view()}
                    </div>
                </section>
            </div>
            <aside class="card wizard-grid__side">
                <h3>"Document Upload"</h3>
                {SIDE_SLOTS.into_iter().map(|kind| view! { <FileSlotCard kind=kind wizard=wizard/> }).collect_view()}
                <Show when=move || wizard.with(WizardState::has_any_file)>
                    <button
                        class="btn btn--outline btn--danger btn--block"
                        on:click=move |_| wizard.update(WizardState::remove_all_files)
                    >
                        "Remove All Files"
                    </button>
                </Show>
            </aside>
        </div>
    }
}

#[component]
pub fn CreateCasePage() -> impl IntoView {
    let wizard = RwSignal::new(WizardState::default());
    let step = Memo::new(move |_| wizard.with(|w| w.step));

    let on_next = move |_| {
        let advanced = wizard.try_update(|w| w.next(clock::today())).unwrap_or(false);
        if !advanced {
            leptos::logging::log!("case wizard blocked on step {}", wizard.with_untracked(|w| w.step.number()));
        }
    };

    view! {
        <BrokerLayout
            title="Create New Case"
            description=Signal::derive(move || format!("Step {}: {}", step.get().number(), step.get().title()))
        >
            <div class="wizard">
                <nav class="breadcrumb">
                    <ol>
                        <li>"Dashboard"</li>
                        <li>"/"</li>
                        <li>"Active Case"</li>
                        <li>"/"</li>
                        <li class="breadcrumb__current">"New Case"</li>
                    </ol>
                </nav>

                <div class="alert alert--info">
                    <p>
                        <strong>"Note:"</strong>
                        " Individual and Micro-group is only available in MedNet"
                    </p>
                </div>

                <Stepper wizard=wizard/>

                {move || match step.get() {
                    WizardStep::ClientPlan => view! { <ClientPlanStep wizard=wizard/> }.into_any(),
                    other => view! { <Placeholder title=other.title()/> }.into_any(),
                }}

                <div class="wizard__actions">
                    <button
                        class="btn btn--outline"
                        disabled=move || step.get().is_first()
                        on:click=move |_| wizard.update(WizardState::previous)
                    >
                        "Previous"
                    </button>
                    <button class="btn btn--primary" disabled=move || step.get().is_last() on:click=on_next>
                        {move || if step.get().is_last() { "Submit" } else { "Next" }}
                    </button>
                </div>
            </div>
        </BrokerLayout>
    }
}
