//! Replaceable sources behind the pages: seed data, credential checks,
//! preference storage, and feature capabilities.
//!
//! Each is provided once through Leptos context in `App` and read by pages
//! with `expect_context`.

pub mod capabilities;
pub mod credentials;
pub mod data;
pub mod storage;
