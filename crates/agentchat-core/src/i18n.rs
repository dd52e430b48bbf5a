//! Static lookup for the few user-facing strings the widget needs.
//!
//! The table is immutable, loaded once into the binary, and read-only
//! thereafter.  Unknown keys fall back to the key itself so a missing entry
//! degrades to something greppable instead of a failure.

/// Key → user-facing string pairs.
const TRANSLATIONS: &[(&str, &str)] = &[(
    "error_occurred",
    "❌ Error: Terjadi masalah saat menghubungkan ke agent.",
)];

/// Look up the user-facing string for `key`.
///
/// Returns the key itself unchanged when no entry exists; never fails.
///
/// ```rust
/// use agentchat_core::i18n::translate;
///
/// assert!(translate("error_occurred").starts_with("❌"));
/// assert_eq!(translate("unknown_key"), "unknown_key");
/// ```
pub fn translate(key: &str) -> &str {
    TRANSLATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}
