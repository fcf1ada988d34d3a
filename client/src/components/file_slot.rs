//! Drop zone / picker for one wizard document slot.
//!
//! The hidden `<input type="file">` stays mounted for the slot's lifetime and
//! is cleared whenever the slot's picker generation changes, so removing a
//! file and choosing the same one again still fires `change`.

#[cfg(test)]
#[path = "file_slot_test.rs"]
mod file_slot_test;

use leptos::prelude::*;

use crate::state::wizard::{FileSlot, WizardState};
#[cfg(feature = "hydrate")]
use crate::state::wizard::UploadedFileRef;
use crate::util::format::format_file_size;

/// CSS class for the drop zone.
pub(crate) fn zone_class(filled: bool, missing: bool) -> &'static str {
    match (filled, missing) {
        (true, _) => "file-slot file-slot--filled",
        (false, true) => "file-slot file-slot--missing",
        (false, false) => "file-slot",
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_ref(file: &web_sys::File) -> UploadedFileRef {
    UploadedFileRef::new(file.name(), file.size() as u64, file.type_(), crate::util::clock::now_millis())
}

#[component]
pub fn FileSlotCard(kind: FileSlot, wizard: RwSignal<WizardState>) -> impl IntoView {
    let slot = kind;
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let input_id = format!("file-{}", slot.key());

    Effect::new(move |_| {
        let _generation = wizard.with(|w| w.picker_generation(slot));
        #[cfg(feature = "hydrate")]
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    });

    let filled = move || wizard.with(|w| w.file(slot).is_some());
    let class = move || wizard.with(|w| zone_class(w.file(slot).is_some(), w.missing_files.contains(&slot)));
    let file_name = move || wizard.with(|w| w.file(slot).map(|f| f.name.clone()).unwrap_or_default());
    let file_size = move || wizard.with(|w| w.file(slot).map(|f| format_file_size(f.size)).unwrap_or_default());

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                wizard.update(|w| w.assign_file(slot, file_ref(&file)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|list| list.get(0)) {
            wizard.update(|w| w.assign_file(slot, file_ref(&file)));
        }
    };

    let on_remove = move |_| wizard.update(|w| w.remove_file(slot));

    view! {
        <div class="file-slot-card">
            <label class="field__label">
                {slot.title()}
                {slot.is_mandatory().then(|| view! { <span class="field__required">" *"</span> })}
            </label>
            <div class=class on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default() on:drop=on_drop>
                <Show
                    when=filled
                    fallback=move || {
                        let input_id = input_id.clone();
                        view! {
                            <div class="file-slot__empty">
                                <p class="file-slot__hint">{slot.drop_hint()}</p>
                                <label class="btn btn--outline" for=input_id>"Browse Files"</label>
                                {(slot == FileSlot::Census)
                                    .then(|| view! { <p class="file-slot__accept">"Only .xlsx files are allowed"</p> })}
                            </div>
                        }
                    }
                >
                    <div class="file-slot__file">
                        <div class="file-slot__meta">
                            <span class="file-slot__name">{file_name}</span>
                            <span class="file-slot__size">{file_size}</span>
                        </div>
                        <button class="btn btn--ghost file-slot__remove" title="Remove file" on:click=on_remove>
                            "✕"
                        </button>
                    </div>
                </Show>
                <input
                    node_ref=input_ref
                    id=format!("file-{}", slot.key())
                    class="file-slot__input"
                    type="file"
                    accept=slot.accept()
                    on:change=on_pick
                />
            </div>
        </div>
    }
}
