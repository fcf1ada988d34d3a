//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, locale,
//! timers) and pure formatting/validation from page and component logic.

pub mod clock;
pub mod delay;
pub mod format;
pub mod locale;
pub mod validation;
