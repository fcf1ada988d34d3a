//! Read-only permission matrix dialog for one role.

use leptos::prelude::*;

use crate::provider::capabilities::{Capabilities, Capability};
use crate::state::roles::{PermissionMatrix, RoleRecord};

#[component]
pub fn PermissionMatrixModal(role: RoleRecord, matrix: PermissionMatrix, on_close: Callback<()>) -> impl IntoView {
    let capabilities = expect_context::<Capabilities>();
    let can_save = capabilities.is_enabled(Capability::EditRole);
    let PermissionMatrix { modules, data_rules, approval_limits, additional_permissions } = matrix;

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--wide"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <div>
                        <h2>"Permission Matrix" <span class="dialog__muted">" - " {role.name}</span></h2>
                        <p class="dialog__subtitle">{role.description}</p>
                    </div>
                    <button class="btn btn--ghost" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <h3 class="dialog__section">"Module Permissions"</h3>
                <div class="matrix-grid">
                    {modules
                        .into_iter()
                        .map(|row| {
                            view! {
                                <div class="matrix-grid__cell">
                                    <span>{row.module}</span>
                                    <span class=row.access.badge_class()>{row.access.label()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <h3 class="dialog__section">"Data Access Rules"</h3>
                <div class="card access-rules">
                    {data_rules
                        .into_iter()
                        .map(|group| {
                            view! {
                                <div class="access-rules__group">
                                    <h4>{group.title} ":"</h4>
                                    <ul>
                                        {group
                                            .rules
                                            .into_iter()
                                            .map(|rule| {
                                                let class = if rule.allowed {
                                                    "access-rule access-rule--allowed"
                                                } else {
                                                    "access-rule access-rule--denied"
                                                };
                                                view! { <li class=class>{rule.text}</li> }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <h3 class="dialog__section">"Approval Authority"</h3>
                <div class="card approval">
                    <div class="approval__limits">
                        <h4>"Approval Limits:"</h4>
                        {approval_limits
                            .into_iter()
                            .map(|limit| {
                                view! {
                                    <div class="approval__row">
                                        <span>{limit.label} ":"</span>
                                        <span class="approval__value">{limit.value}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="approval__extra">
                        <h4>"Additional Permissions:"</h4>
                        <ul>
                            {additional_permissions
                                .into_iter()
                                .map(|text| view! { <li class="access-rule access-rule--allowed">{text}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="dialog__actions">
                    <button class="btn btn--outline" on:click=move |_| on_close.run(())>"Close"</button>
                    <button class="btn btn--primary" disabled=!can_save>"Save Changes"</button>
                </div>
            </div>
        </div>
    }
}
