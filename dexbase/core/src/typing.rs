use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Values of `type2` meaning "no secondary type".
pub const ABSENT: [&str; 3] = ["__undef__", "undefined", ""];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    Other(String),
}

impl Type {
    pub fn parse(symbol: &str) -> Self {
        match symbol.to_lowercase().as_str() {
            "normal" => Self::Normal,
            "fire" => Self::Fire,
            "water" => Self::Water,
            "electric" => Self::Electric,
            "grass" => Self::Grass,
            "ice" => Self::Ice,
            "fighting" => Self::Fighting,
            "poison" => Self::Poison,
            "ground" => Self::Ground,
            "flying" => Self::Flying,
            "psychic" => Self::Psychic,
            "bug" => Self::Bug,
            "rock" => Self::Rock,
            "ghost" => Self::Ghost,
            "dragon" => Self::Dragon,
            "dark" => Self::Dark,
            "steel" => Self::Steel,
            "fairy" => Self::Fairy,
            _ => Self::Other(symbol.to_owned()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Electric => "electric",
            Self::Grass => "grass",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
            Self::Other(symbol) => symbol,
        }
    }

    /// The French name of the type. Icons are named after it whatever the
    /// language of the page.
    pub fn french(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "feu",
            Self::Water => "eau",
            Self::Electric => "électrique",
            Self::Grass => "plante",
            Self::Ice => "glace",
            Self::Fighting => "combat",
            Self::Poison => "poison",
            Self::Ground => "sol",
            Self::Flying => "vol",
            Self::Psychic => "psy",
            Self::Bug => "insecte",
            Self::Rock => "roche",
            Self::Ghost => "spectre",
            Self::Dragon => "dragon",
            Self::Dark => "ténèbres",
            Self::Steel => "acier",
            Self::Fairy => "fée",
            Self::Other(symbol) => symbol,
        }
    }

    /// The ASCII key of the type icon, e.g. `tenebres`.
    pub fn icon_key(&self) -> String {
        strip_diacritics(self.french())
    }
}

impl Default for Type {
    fn default() -> Self {
        Self::Other("unknown".to_owned())
    }
}

impl From<Type> for String {
    fn from(type_: Type) -> Self {
        type_.symbol().to_owned()
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol: Option<String> = Option::deserialize(deserializer)?;

        Ok(symbol.map(|symbol| Self::parse(&symbol)).unwrap_or_default())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Deserializes a secondary type, mapping the absence sentinels to `None`.
pub fn deserialize_secondary<'de, D>(deserializer: D) -> Result<Option<Type>, D::Error>
where
    D: Deserializer<'de>,
{
    let symbol: Option<String> = Option::deserialize(deserializer)?;

    Ok(symbol
        .filter(|symbol| !ABSENT.contains(&symbol.as_str()))
        .map(|symbol| Type::parse(&symbol)))
}

/// Decomposes `text` (NFD) and drops every combining mark.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Type::parse("Fire"), Type::Fire);
        assert_eq!(Type::parse("dark"), Type::Dark);
        assert_eq!(Type::parse("shadow"), Type::Other("shadow".to_owned()));
    }

    #[test]
    fn icon_keys_are_ascii() {
        assert_eq!(Type::Dark.icon_key(), "tenebres");
        assert_eq!(Type::Electric.icon_key(), "electrique");
        assert_eq!(Type::Fairy.icon_key(), "fee");
        assert_eq!(Type::Grass.icon_key(), "plante");
    }

    #[test]
    fn unknown_types_keep_their_symbol() {
        assert_eq!(Type::parse("Crystal").icon_key(), "Crystal");
    }

    #[test]
    fn strip_diacritics_handles_precomposed_and_combining() {
        assert_eq!(strip_diacritics("Pokémon"), "Pokemon");
        assert_eq!(strip_diacritics("Poke\u{301}mon"), "Pokemon");
        assert_eq!(strip_diacritics("plain"), "plain");
    }

    #[test]
    fn secondary_sentinels_are_absent() {
        #[derive(Deserialize)]
        struct Form {
            #[serde(default, deserialize_with = "deserialize_secondary")]
            type2: Option<Type>,
        }

        let parse = |json: &str| serde_json::from_str::<Form>(json).map(|form| form.type2);

        assert_eq!(parse(r#"{"type2":"__undef__"}"#).ok(), Some(None));
        assert_eq!(parse(r#"{"type2":"undefined"}"#).ok(), Some(None));
        assert_eq!(parse(r#"{}"#).ok(), Some(None));
        assert_eq!(parse(r#"{"type2":"poison"}"#).ok(), Some(Some(Type::Poison)));
    }
}
