//! Process-wide localization.
//!
//! Dictionaries are nested JSON resources embedded at compile time and
//! flattened to dotted keys. Lookups try the active locale, then the
//! fallback locale, then give back the key itself so a missing entry is
//! visible instead of fatal.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde_json::Value;

/// Locales the application ships dictionaries for.
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "it"];

/// Locale selected when none is configured.
pub const DEFAULT_LOCALE: &str = "it";

const FALLBACK_LOCALE: &str = "en";

static MESSAGES: Lazy<HashMap<&'static str, HashMap<String, String>>> = Lazy::new(|| {
    let mut messages = HashMap::new();
    messages.insert("en", flatten(include_str!("../resources/locales/en.json")));
    messages.insert("it", flatten(include_str!("../resources/locales/it.json")));
    messages
});

static ACTIVE: Lazy<RwLock<&'static str>> = Lazy::new(|| RwLock::new(DEFAULT_LOCALE));

fn flatten(raw: &str) -> HashMap<String, String> {
    let root: Value = serde_json::from_str(raw).expect("invalid embedded locale resource");
    let mut flat = HashMap::new();
    walk(&root, String::new(), &mut flat);
    flat
}

fn walk(value: &Value, prefix: String, flat: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                walk(child, path, flat);
            }
        }
        Value::String(text) => {
            flat.insert(prefix, text.clone());
        }
        other => {
            flat.insert(prefix, other.to_string());
        }
    }
}

/// Switch the process-wide locale. Returns `false` and leaves the
/// selection untouched when the locale is not supported.
pub fn set_locale(locale: &str) -> bool {
    match SUPPORTED_LOCALES.iter().copied().find(|known| *known == locale) {
        Some(known) => {
            *ACTIVE.write() = known;
            true
        }
        None => false,
    }
}

/// The currently active locale.
pub fn locale() -> &'static str {
    *ACTIVE.read()
}

/// Translate a dotted key in the active locale, falling back to the
/// fallback locale and finally to the key itself.
pub fn t(key: &str) -> String {
    let active = locale();
    lookup(active, key)
        .or_else(|| lookup(FALLBACK_LOCALE, key))
        .unwrap_or_else(|| key.to_string())
}

fn lookup(locale: &str, key: &str) -> Option<String> {
    MESSAGES.get(locale)?.get(key).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The active locale is process state shared by every test in this
    // binary, so each test restores the default before returning.

    #[test]
    fn translates_in_the_active_locale() {
        assert!(set_locale("it"));
        assert_eq!(t("menu.library"), "Ludoteca");
        assert!(set_locale("en"));
        assert_eq!(t("menu.library"), "Library");
        set_locale(DEFAULT_LOCALE);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(!set_locale("de"));
        assert!(SUPPORTED_LOCALES.contains(&locale()));
    }

    #[test]
    fn missing_key_falls_back_to_the_key() {
        assert_eq!(t("menu.doesNotExist"), "menu.doesNotExist");
    }

    #[test]
    fn every_english_key_has_an_italian_twin() {
        let english = MESSAGES.get("en").unwrap();
        let italian = MESSAGES.get("it").unwrap();
        for key in english.keys() {
            assert!(italian.contains_key(key), "missing it translation: {key}");
        }
        for key in italian.keys() {
            assert!(english.contains_key(key), "missing en translation: {key}");
        }
    }
}
