//! Panel for sections that have no content yet.

use leptos::prelude::*;

#[component]
pub fn Placeholder(#[prop(into)] title: String, #[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "This section is not available yet.".to_owned());
    view! {
        <section class="card placeholder">
            <h2 class="card__title">{title}</h2>
            <p class="placeholder__message">{message}</p>
        </section>
    }
}
