//! Pure view-model state for pages and shells.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM or Leptos signals. Pages wrap these models in
//! `RwSignal`s and derive views with `Memo`, which keeps every rule testable
//! on the host.

pub mod dashboard;
pub mod layout;
pub mod login;
pub mod registration;
pub mod roles;
pub mod users;
pub mod wizard;
