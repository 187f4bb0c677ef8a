use crate::Locale;
use crate::locale;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

pub const DATA_NOT_FOUND: &str = "Data not found";
pub const DESCRIPTION_NOT_FOUND: &str = "Description not found";

/// Consolidated ability data, as found in `abilities_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub symbol: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_id: Option<usize>,
    #[serde(default)]
    pub names: locale::Map,
    #[serde(default)]
    pub descriptions: locale::Map,
}

impl Entry {
    pub fn name(&self, locale: &Locale) -> &str {
        self.names
            .resolve(locale)
            .unwrap_or(self.symbol.as_str())
    }

    pub fn description(&self, locale: &Locale) -> &str {
        self.descriptions
            .resolve(locale)
            .unwrap_or(DESCRIPTION_NOT_FOUND)
    }
}

pub type Table = crate::Map<Id, Entry>;

impl Table {
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self::new(entries, |entry| entry.symbol.clone())
    }
}

/// An ability record of the game data (`abilities/{symbol}.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub db_symbol: Option<Id>,
    #[serde(default)]
    pub text_id: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) String);

impl Id {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overgrow() -> Entry {
        serde_json::from_str(
            r#"{
                "symbol": "overgrow",
                "textId": 65,
                "names": { "en": "Overgrow", "fr": "Engrais", "de": "" },
                "descriptions": { "en": "Powers up Grass-type moves.", "fr": "Augmente les capacités Plante." }
            }"#,
        )
        .expect("valid ability")
    }

    #[test]
    fn resolves_localized_text() {
        let ability = overgrow();

        assert_eq!(ability.name(&Locale::new("fr")), "Engrais");
        assert_eq!(ability.name(&Locale::new("de")), "Overgrow");
        assert_eq!(
            ability.description(&Locale::new("ko")),
            "Powers up Grass-type moves."
        );
    }

    #[test]
    fn falls_back_to_symbol_and_placeholder() {
        let ability = Entry {
            symbol: Id::new("stench"),
            text_id: None,
            names: locale::Map::new(),
            descriptions: locale::Map::new(),
        };

        assert_eq!(ability.name(&Locale::new("fr")), "stench");
        assert_eq!(ability.description(&Locale::new("fr")), DESCRIPTION_NOT_FOUND);
    }

    #[test]
    fn table_looks_up_by_symbol() {
        let table = Table::from_entries(vec![overgrow()]);

        assert!(table.get("overgrow").is_some());
        assert!(table.get("blaze").is_none());
    }
}
