//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout shells, dialogs and form controls shared by pages. Components read
//! providers and capability flags from Leptos context and keep transient UI
//! state in local signals.

pub mod admin_layout;
pub mod broker_layout;
pub mod file_slot;
pub mod permission_matrix_modal;
pub mod placeholder;
pub mod select_field;
pub mod stat_card;
pub mod user_modal;
