//! Builds ability and move lookup tables out of the raw game data, for
//! creature records that do not embed them.
use crate::ability;
use crate::creature::Form;
use crate::csv;
use crate::locale::{self, Locale};
use crate::moves;

use std::collections::BTreeMap;

/// The legacy text tables used to localize abilities and moves.
#[derive(Debug, Clone, Default)]
pub struct Texts {
    /// `100004.csv`
    pub ability_names: csv::Table,
    /// `100005.csv`
    pub ability_descriptions: csv::Table,
    /// `100006.csv`
    pub move_names: csv::Table,
}

pub fn abilities(
    form: &Form,
    records: &BTreeMap<ability::Id, ability::Record>,
    texts: &Texts,
) -> ability::Table {
    let mut entries: Vec<ability::Entry> = Vec::new();

    for symbol in &form.abilities {
        if entries.iter().any(|entry| entry.symbol == *symbol) {
            continue;
        }

        entries.push(ability(symbol, records.get(symbol), texts));
    }

    ability::Table::from_entries(entries)
}

pub fn ability(
    symbol: &ability::Id,
    record: Option<&ability::Record>,
    texts: &Texts,
) -> ability::Entry {
    let Some(record) = record else {
        log::warn!("Ability record not found: {symbol}");

        return ability::Entry {
            symbol: symbol.clone(),
            text_id: None,
            names: locale::Map::from_iter([(Locale::english(), symbol.to_string())]),
            descriptions: locale::Map::from_iter([(
                Locale::english(),
                ability::DESCRIPTION_NOT_FOUND.to_owned(),
            )]),
        };
    };

    let (names, descriptions) = match record.text_id {
        Some(text_id) => (
            localize(&texts.ability_names, text_id),
            localize(&texts.ability_descriptions, text_id),
        ),
        None => (locale::Map::new(), locale::Map::new()),
    };

    ability::Entry {
        symbol: symbol.clone(),
        text_id: record.text_id,
        names,
        descriptions,
    }
}

pub fn moves(
    form: &Form,
    records: &BTreeMap<moves::Id, moves::Record>,
    texts: &Texts,
) -> moves::Table {
    let mut entries: Vec<moves::Entry> = Vec::new();

    for learnable in &form.move_set {
        if entries.iter().any(|entry| entry.symbol == learnable.id) {
            continue;
        }

        entries.push(move_(&learnable.id, records.get(&learnable.id), texts));
    }

    moves::Table::from_entries(entries)
}

pub fn move_(
    symbol: &moves::Id,
    record: Option<&moves::Record>,
    texts: &Texts,
) -> moves::Entry {
    let Some(record) = record else {
        log::warn!("Move record not found: {symbol}");

        return moves::Entry {
            symbol: symbol.clone(),
            id: None,
            names: locale::Map::from_iter([(Locale::english(), symbol.to_string())]),
            category: moves::Category::Unknown,
            type_: Default::default(),
            pp: None,
            power: None,
            accuracy: None,
        };
    };

    moves::Entry {
        symbol: symbol.clone(),
        id: record.id,
        names: record
            .id
            .map(|id| localize(&texts.move_names, id))
            .unwrap_or_default(),
        category: record.category.clone(),
        type_: record.type_.clone(),
        pp: record.pp,
        power: record.power,
        accuracy: record.accuracy,
    }
}

/// Collects the text of every language of a table row.
///
/// English is always present and ends up being the text id itself when the
/// row is missing.
pub fn localize(table: &csv::Table, text_id: usize) -> locale::Map {
    let mut texts: locale::Map = Locale::all()
        .filter_map(|locale| {
            let text = table.get(text_id, &locale)?.to_owned();

            Some((locale, text))
        })
        .collect();

    if !texts.has_english() {
        let _ = texts.insert(
            Locale::english(),
            table.resolve(text_id, &Locale::english()).into_owned(),
        );
    }

    texts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts() -> Texts {
        Texts {
            ability_names: csv::Table::parse(
                "en,fr,it,de,es,ko,kana\n—,-,-,-,—,-,―\nStench,Puanteur,Tanfo,Duftnote,Hedor,악취,あくしゅう\n",
            ),
            ability_descriptions: csv::Table::parse(
                "en,fr,it,de,es,ko,kana\n—,-,-,-,—,-,―\n\"The stench may cause flinching, sometimes.\",\"La puanteur peut apeurer, parfois.\",,,,,\n",
            ),
            move_names: csv::Table::parse("en,fr,it,de,es,ko,kana\nPound,Écras'Face,Botta,Pfund,Destructor,막치기,はたく\n"),
        }
    }

    #[test]
    fn abilities_are_localized_by_text_id() {
        let record = ability::Record {
            db_symbol: Some(ability::Id::new("stench")),
            text_id: Some(1),
        };

        let entry = ability(&ability::Id::new("stench"), Some(&record), &texts());

        assert_eq!(entry.name(&Locale::new("de")), "Duftnote");
        assert_eq!(
            entry.description(&Locale::new("fr")),
            "La puanteur peut apeurer, parfois."
        );
        assert_eq!(
            entry.description(&Locale::new("it")),
            "The stench may cause flinching, sometimes."
        );
    }

    #[test]
    fn missing_rows_fall_back_to_the_text_id() {
        let names = localize(&texts().ability_names, 7);

        assert_eq!(names.len(), 1);
        assert_eq!(names.resolve(&Locale::new("fr")), Some("7"));
    }

    #[test]
    fn missing_records_use_the_symbol() {
        let entry = move_(&moves::Id::new("splash"), None, &texts());

        assert_eq!(entry.name(&Locale::new("fr")), "splash");
        assert_eq!(entry.category, moves::Category::Unknown);
    }

    #[test]
    fn moves_are_localized_by_id() {
        let record: moves::Record = serde_json::from_str(
            r#"{ "klass": "Move", "dbSymbol": "pound", "id": 0, "type": "normal",
                 "category": "physical", "pp": 35, "power": 40, "accuracy": 100 }"#,
        )
        .expect("valid move record");

        let entry = move_(&moves::Id::new("pound"), Some(&record), &texts());

        assert_eq!(entry.name(&Locale::new("fr")), "Écras'Face");
        assert_eq!(entry.name(&Locale::new("kana")), "はたく");
        assert_eq!(entry.pp, Some(35));
    }

    #[test]
    fn tables_hold_each_symbol_once() {
        let form: Form = serde_json::from_str(
            r#"{ "type1": "poison", "abilities": ["stench", "stench"], "moveSet": [
                { "move": "pound", "klass": "LevelLearnableMove", "level": 1 },
                { "move": "pound", "klass": "TutorLearnableMove" }
            ] }"#,
        )
        .expect("valid form");

        assert_eq!(abilities(&form, &BTreeMap::new(), &texts()).len(), 1);
        assert_eq!(moves(&form, &BTreeMap::new(), &texts()).len(), 1);
    }
}
