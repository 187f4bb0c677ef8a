//! Legacy text tables.
//!
//! Each table starts with a header row (`en,fr,it,de,es,ko,kana`) followed by
//! one row per text id. Fields may be wrapped in double quotes so that they can
//! contain commas.
use crate::Locale;

use std::borrow::Cow;
use std::sync::Arc;

/// Rows preceding the first text id.
pub const HEADER_ROWS: usize = 1;

#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Arc<[Row]>,
}

pub type Row = Vec<String>;

impl Table {
    pub fn parse(raw: &str) -> Self {
        let rows: Vec<Row> = raw
            .split('\n')
            .map(|line| parse_line(line.strip_suffix('\r').unwrap_or(line)))
            .collect();

        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the data row of the given text id.
    pub fn row(&self, text_id: usize) -> Option<&Row> {
        self.rows.get(text_id.checked_add(HEADER_ROWS)?)
    }

    /// Returns the non-empty cell of `text_id` in the column of `locale`.
    pub fn get(&self, text_id: usize, locale: &Locale) -> Option<&str> {
        let row = self.row(text_id)?;
        let cell = row.get(locale.index()?)?;

        if cell.is_empty() {
            None
        } else {
            Some(cell)
        }
    }

    /// Resolves `text_id` for `locale`, falling back to English and then to
    /// the text id itself.
    pub fn resolve(&self, text_id: usize, locale: &Locale) -> Cow<'_, str> {
        self.get(text_id, locale)
            .or_else(|| self.get(text_id, &Locale::english()))
            .map(Cow::Borrowed)
            .unwrap_or_else(|| {
                log::warn!("Text {text_id} is missing for {locale}");

                Cow::Owned(text_id.to_string())
            })
    }
}

fn parse_line(line: &str) -> Row {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABILITY_NAMES: &str = "en,fr,it,de,es,ko,kana\n\
        —,-,-,-,—,-,―\n\
        Sturdy,Fermeté,Vigore,Robustheit,Robustez,옹골참,がんじょう\n\
        Damp,Moiteur,,Feuchtigkeit,Humedad,습기,しめりけ\n";

    #[test]
    fn quoted_fields_keep_commas() {
        let table = Table::parse("a,\"b,c\",d");

        assert_eq!(table.rows()[0], ["a", "b,c", "d"]);
    }

    #[test]
    fn quotes_toggle_without_emitting() {
        let table = Table::parse("\"say \"\"hi\"\"\",x");

        assert_eq!(table.rows()[0], ["say hi", "x"]);
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let table = Table::parse("en,fr\r\nHello,Bonjour\r\n");

        assert_eq!(table.rows()[1], ["Hello", "Bonjour"]);
    }

    #[test]
    fn rows_skip_the_header() {
        let table = Table::parse(ABILITY_NAMES);

        assert_eq!(HEADER_ROWS, 1);
        assert_eq!(table.row(1).map(|row| row[0].as_str()), Some("Sturdy"));
        assert_eq!(table.row(2).map(|row| row[1].as_str()), Some("Moiteur"));
        assert_eq!(table.row(42), None);
        assert_eq!(table.row(usize::MAX), None);
    }

    #[test]
    fn get_picks_the_locale_column() {
        let table = Table::parse(ABILITY_NAMES);

        assert_eq!(table.get(1, &Locale::new("de")), Some("Robustheit"));
        assert_eq!(table.get(1, &Locale::new("kana")), Some("がんじょう"));
        assert_eq!(table.get(2, &Locale::new("it")), None);
        assert_eq!(table.get(1, &Locale::new("pt")), None);
    }

    #[test]
    fn resolve_falls_back_to_english_then_id() {
        let table = Table::parse(ABILITY_NAMES);

        assert_eq!(table.resolve(2, &Locale::new("fr")), "Moiteur");
        assert_eq!(table.resolve(2, &Locale::new("it")), "Damp");
        assert_eq!(table.resolve(1, &Locale::new("pt")), "Sturdy");
        assert_eq!(table.resolve(99, &Locale::new("fr")), "99");
    }

    #[test]
    fn short_rows_fall_back() {
        let table = Table::parse("en,fr,it\nTackle,Charge\n");

        assert_eq!(table.resolve(0, &Locale::new("it")), "Tackle");
    }
}
