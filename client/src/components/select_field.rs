//! Labelled `<select>` with a placeholder option and inline error.

use leptos::prelude::*;

#[component]
pub fn SelectField(
    id: &'static str,
    #[prop(into)] label: String,
    options: &'static [&'static str],
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
    #[prop(optional, into)] error: Option<Signal<Option<&'static str>>>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::derive(|| None));
    let field_class = move || if error.get().is_some() { "field field--invalid" } else { "field" };

    view! {
        <div class=field_class>
            <label class="field__label" for=id>
                {label}
                {required.then(|| view! { <span class="field__required">" *"</span> })}
            </label>
            <select
                id=id
                name=id
                class="field__control"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(cb) = on_blur {
                        cb.run(());
                    }
                }
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                {options
                    .iter()
                    .map(|opt| {
                        let opt = *opt;
                        view! {
                            <option value=opt selected=move || value.get() == opt>
                                {opt}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <Show when=move || error.get().is_some()>
                <p class="field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
