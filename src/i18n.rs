//! Minimal i18n tables for the UI (EN/NL) with safe fallback.

use std::collections::HashMap;

pub type TranslationTable = HashMap<&'static str, &'static str>;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Languages offered by the shell switcher
pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("nl", "Nederlands")];

fn base_en() -> TranslationTable {
    let pairs: [(&str, &str); 10] = [
        ("topics.title", "Topics"),
        ("topics.add", "Add topic"),
        ("topics.edit", "Edit"),
        ("topics.delete", "Delete"),
        ("form.name", "Name"),
        ("form.title", "Title"),
        ("form.text", "Text"),
        ("form.submit", "Submit"),
        ("form.cancel", "Cancel"),
        ("language", "Language"),
    ];
    pairs.into_iter().collect()
}

fn nl_overlay() -> TranslationTable {
    // Only keys that differ from EN
    let pairs: [(&str, &str); 10] = [
        ("topics.title", "Onderwerpen"),
        ("topics.add", "Onderwerp toevoegen"),
        ("topics.edit", "Wijzigen"),
        ("topics.delete", "Verwijderen"),
        ("form.name", "Naam"),
        ("form.title", "Titel"),
        ("form.text", "Tekst"),
        ("form.submit", "Opslaan"),
        ("form.cancel", "Annuleren"),
        ("language", "Taal"),
    ];
    pairs.into_iter().collect()
}

fn normalize_language(language: &str) -> &'static str {
    let lang = language.trim().to_ascii_lowercase();
    if lang.starts_with("nl") {
        "nl"
    } else {
        "en"
    }
}

/// Get the table for a language code; starts from English and overlays
/// language-specific entries. Unknown or empty language => English.
pub fn table_for(language: &str) -> TranslationTable {
    let mut table = base_en();
    if normalize_language(language) == "nl" {
        for (key, value) in nl_overlay() {
            table.insert(key, value);
        }
    }
    table
}

/// Resolve one UI string; unknown keys fall back to the key itself.
pub fn translate(language: &str, key: &'static str) -> &'static str {
    table_for(language).get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(translate("de", "topics.add"), "Add topic");
        assert_eq!(translate("", "topics.add"), "Add topic");
    }

    #[test]
    fn dutch_overlay_wins_for_its_keys() {
        assert_eq!(translate("nl", "topics.add"), "Onderwerp toevoegen");
        assert_eq!(translate("nl-NL", "form.submit"), "Opslaan");
    }

    #[test]
    fn unknown_key_falls_back_to_the_key() {
        assert_eq!(translate("en", "no.such.key"), "no.such.key");
    }
}
