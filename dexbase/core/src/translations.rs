use crate::Locale;

use serde::Deserialize;
use std::collections::BTreeMap;

/// Interface strings of a single language, backed by English.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    locale: Locale,
    strings: BTreeMap<String, String>,
    english: BTreeMap<String, String>,
}

/// The `translations.json` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub translations: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl Translations {
    /// Every key resolves to itself.
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            strings: BTreeMap::new(),
            english: BTreeMap::new(),
        }
    }

    pub fn from_document(mut document: Document, locale: Locale) -> Self {
        let english = document
            .translations
            .get(crate::locale::ENGLISH)
            .cloned()
            .unwrap_or_default();

        let strings = document
            .translations
            .remove(locale.as_str())
            .unwrap_or_else(|| {
                log::warn!("No translations available for {locale}");

                BTreeMap::new()
            });

        Self {
            locale,
            strings,
            english,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let present = |translation: &&String| !translation.is_empty();

        self.strings
            .get(key)
            .filter(present)
            .or_else(|| self.english.get(key).filter(present))
            .map(String::as_str)
    }

    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        serde_json::from_str(
            r#"{
                "translations": {
                    "en": { "HP": "HP", "Attack": "Attack", "Stats": "Stats" },
                    "de": { "HP": "KP" },
                    "fr": { "HP": "PV", "Attack": "Attaque", "Stats": "" }
                }
            }"#,
        )
        .expect("valid document")
    }

    #[test]
    fn resolves_requested_language() {
        let translations = Translations::from_document(document(), Locale::new("fr"));

        assert_eq!(translations.resolve("HP"), "PV");
        assert_eq!(translations.resolve("Attack"), "Attaque");
    }

    #[test]
    fn falls_back_to_english_then_key() {
        let translations = Translations::from_document(document(), Locale::new("de"));

        assert_eq!(translations.resolve("HP"), "KP");
        assert_eq!(translations.resolve("Attack"), "Attack");
        assert_eq!(translations.resolve("Egg Groups"), "Egg Groups");
    }

    #[test]
    fn empty_strings_are_missing() {
        let translations = Translations::from_document(document(), Locale::new("fr"));

        assert_eq!(translations.get("Stats"), Some("Stats"));
        assert_eq!(translations.get("Height"), None);
    }

    #[test]
    fn unknown_language_uses_english() {
        let translations = Translations::from_document(document(), Locale::new("pt"));

        assert_eq!(translations.resolve("HP"), "HP");
        assert_eq!(translations.locale().as_str(), "pt");
    }

    #[test]
    fn empty_resolves_keys_to_themselves() {
        let translations = Translations::empty(Locale::default());

        assert_eq!(translations.resolve("Height"), "Height");
    }
}
