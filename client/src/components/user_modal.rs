//! Create / edit user dialog.

use leptos::prelude::*;

use crate::components::select_field::SelectField;
use crate::state::users::{DEPARTMENT_OPTIONS, ModalMode, ROLE_OPTIONS, UserForm, UserStatus};

/// Text input bound to one `UserForm` field.
#[component]
fn FormInput(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: &'static str,
    placeholder: &'static str,
    #[prop(optional)] required: bool,
    form: RwSignal<UserForm>,
    get: fn(&UserForm) -> &String,
    set: fn(&mut UserForm, String),
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };
    view! {
        <div class="field">
            <label class="field__label" for=id>
                {label}
                {required.then(|| view! { <span class="field__required">" *"</span> })}
            </label>
            <input
                id=id
                class="field__control"
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn UserModal(
    mode: ModalMode,
    initial: UserForm,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<UserForm>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(initial);
    let editing = matches!(mode, ModalMode::Edit(_));
    let (title, subtitle) =
        if editing { ("Edit User", "Update user information") } else { ("Add New User", "Create a new user account") };
    let submit_label = if editing { "Update User" } else { "Create User" };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        on_submit.run(form.get_untracked());
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--user"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <div>
                        <h2>{title}</h2>
                        <p class="dialog__subtitle">{subtitle}</p>
                    </div>
                    <button class="btn btn--ghost" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <form class="dialog__form" on:submit=on_form_submit>
                    <div class="dialog__grid">
                        <FormInput
                            id="user-name"
                            label="Full Name"
                            placeholder="Enter full name"
                            required=true
                            form=form
                            get=|f| &f.name
                            set=|f, v| f.name = v
                        />
                        <FormInput
                            id="user-email"
                            label="Email Address"
                            input_type="email"
                            placeholder="Enter email address"
                            required=true
                            form=form
                            get=|f| &f.email
                            set=|f, v| f.email = v
                        />
                        <SelectField
                            id="user-role"
                            label="Role"
                            options=&ROLE_OPTIONS
                            placeholder="Select role"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.role.clone()))
                            on_change=Callback::new(move |v| form.update(|f| f.role = v))
                        />
                        <SelectField
                            id="user-department"
                            label="Department"
                            options=&DEPARTMENT_OPTIONS
                            placeholder="Select department"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.department.clone()))
                            on_change=Callback::new(move |v| form.update(|f| f.department = v))
                        />
                        <div class="field">
                            <label class="field__label" for="user-status">
                                "Status"<span class="field__required">" *"</span>
                            </label>
                            <select
                                id="user-status"
                                class="field__control"
                                prop:value=move || form.with(|f| f.status.as_str())
                                on:change=move |ev| {
                                    if let Some(status) = UserStatus::parse(&event_target_value(&ev)) {
                                        form.update(|f| f.status = status);
                                    }
                                }
                            >
                                {UserStatus::ALL
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <option value=s.as_str() selected=move || form.with(|f| f.status == s)>
                                                {s.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <FormInput
                            id="user-phone"
                            label="Phone Number"
                            input_type="tel"
                            placeholder="+971 50 123 4567"
                            form=form
                            get=|f| &f.phone
                            set=|f, v| f.phone = v
                        />
                        <FormInput
                            id="user-position"
                            label="Position"
                            placeholder="Enter position title"
                            form=form
                            get=|f| &f.position
                            set=|f, v| f.position = v
                        />
                        <FormInput
                            id="user-manager"
                            label="Manager"
                            placeholder="Enter manager name"
                            form=form
                            get=|f| &f.manager
                            set=|f, v| f.manager = v
                        />
                    </div>
                    <div class="dialog__actions">
                        <button
                            class="btn btn--outline"
                            type="button"
                            disabled=move || saving.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { submit_label }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
