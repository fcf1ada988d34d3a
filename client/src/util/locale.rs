//! Right-to-left display preference and Arabic numeral rendering.
//!
//! The preference lives in the injected [`PreferenceStore`] under
//! [`RTL_STORAGE_KEY`]. With nothing stored, the browser language decides.
//! Applying the preference sets `dir` on the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Document mutation is browser-only; SSR paths no-op so server rendering
//! stays deterministic.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use crate::provider::storage::PreferenceStore;

pub const RTL_STORAGE_KEY: &str = "admin-rtl";

const RTL_LANGUAGES: [&str; 4] = ["ar", "he", "fa", "ur"];

/// Whether a BCP 47 tag (`ar-SA`, `en-US`) names a right-to-left language.
pub fn is_rtl_language(tag: &str) -> bool {
    let primary = tag.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
    RTL_LANGUAGES.contains(&primary.as_str())
}

/// Browser UI language, if running in a browser.
pub fn browser_language() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.navigator().language())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Resolve the RTL preference: stored flag first, then `language`.
pub fn resolve_preference(store: &dyn PreferenceStore, language: Option<&str>) -> bool {
    match store.get(RTL_STORAGE_KEY) {
        Some(stored) => stored == "true",
        None => language.is_some_and(is_rtl_language),
    }
}

/// Read the RTL preference using the browser language as fallback.
pub fn read_preference(store: &dyn PreferenceStore) -> bool {
    resolve_preference(store, browser_language().as_deref())
}

/// Apply the `dir` attribute on the `<html>` element.
pub fn apply(rtl: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("dir", if rtl { "rtl" } else { "ltr" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rtl;
    }
}

/// Flip the preference, persist it, and apply it to the document.
pub fn toggle(store: &dyn PreferenceStore, current: bool) -> bool {
    let next = !current;
    store.set(RTL_STORAGE_KEY, if next { "true" } else { "false" });
    apply(next);
    next
}

/// Replace ASCII digits with Arabic-Indic digits.
pub fn to_arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
