//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates rendering details to
//! `components`. Admin pages render inside `AdminLayout`, broker pages inside
//! `BrokerLayout`.

pub mod admin_dashboard;
pub mod broker_dashboard;
pub mod create_case;
pub mod login;
pub mod register;
pub mod role_management;
pub mod user_management;
