use crate::Locale;
use crate::locale;
use crate::typing::Type;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// An entry of a form's `moveSet`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Learnable {
    pub klass: String,
    #[serde(rename = "move")]
    pub id: Id,
    #[serde(default)]
    pub level: Option<u32>,
}

impl Learnable {
    pub fn method(&self) -> Option<Method> {
        Method::parse(&self.klass)
    }
}

/// How a move is learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Level,
    Tutor,
    Tech,
    Breed,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Level, Method::Tutor, Method::Tech, Method::Breed];

    pub fn parse(klass: &str) -> Option<Self> {
        Some(match klass {
            "LevelLearnableMove" => Self::Level,
            "TutorLearnableMove" => Self::Tutor,
            "TechLearnableMove" => Self::Tech,
            "BreedLearnableMove" => Self::Breed,
            _ => return None,
        })
    }

    /// The translation key of the table title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Level => "Level Learnable Moves",
            Self::Tutor => "Tutor Learnable Moves",
            Self::Tech => "Tech Learnable Moves",
            Self::Breed => "Breed Learnable Moves",
        }
    }
}

/// Consolidated move data, as found in `moves_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub symbol: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    #[serde(default)]
    pub names: locale::Map,
    #[serde(default)]
    pub category: Category,
    #[serde(default, rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
}

impl Entry {
    pub fn name(&self, locale: &Locale) -> &str {
        self.names
            .resolve(locale)
            .unwrap_or(self.symbol.as_str())
    }
}

pub type Table = crate::Map<Id, Entry>;

impl Table {
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self::new(entries, |entry| entry.symbol.clone())
    }
}

/// A move record of the game data (`moves/{symbol}.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub db_symbol: Option<Id>,
    #[serde(default)]
    pub id: Option<usize>,
    #[serde(default)]
    pub category: Category,
    #[serde(default, rename = "type")]
    pub type_: Type,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Category {
    Physical,
    Special,
    Status,
    #[default]
    Unknown,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Physical => "physical",
            Self::Special => "special",
            Self::Status => "status",
            Self::Unknown => "unknown",
            Self::Other(category) => category,
        }
    }

    /// The file name of the category icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Physical => "physique.png",
            Self::Special => "special.png",
            Self::Status => "statut.png",
            Self::Unknown | Self::Other(_) => "placeholder.png",
        }
    }
}

impl From<String> for Category {
    fn from(category: String) -> Self {
        match category.as_str() {
            "physical" => Self::Physical,
            "special" => Self::Special,
            "status" => Self::Status,
            "unknown" | "" => Self::Unknown,
            _ => Self::Other(category),
        }
    }
}

impl From<Option<String>> for Category {
    fn from(category: Option<String>) -> Self {
        category.map(Self::from).unwrap_or_default()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_owned()
    }
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
