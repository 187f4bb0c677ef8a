//! The displayable model of a creature page.
//!
//! Sections are declared, and serialized, in page order: main info, stats,
//! details, evolution, experience, breeding, abilities and moves.
use crate::color::Rgb;
use crate::creature::{self, Form, display_value};
use crate::moves::Method;
use crate::normalize::Normalized;
use crate::{Translations, asset};

use serde::Serialize;

/// Translation key of the not-found message, also its English text.
pub const NOT_FOUND: &str = "Pokémon not found";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum View {
    Found(Page),
    NotFound(NotFound),
}

impl View {
    pub fn not_found(creature: creature::Id, translations: &Translations) -> Self {
        Self::NotFound(NotFound {
            creature,
            message: translations.resolve(NOT_FOUND).to_owned(),
        })
    }

    pub fn page(&self) -> Option<&Page> {
        match self {
            Self::Found(page) => Some(page),
            Self::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFound {
    pub creature: creature::Id,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub main: Main,
    pub stats: Stats,
    pub details: Details,
    pub evolution: Evolution,
    pub experience: Experience,
    pub breeding: Breeding,
    pub abilities: Abilities,
    pub moves: Moves,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Main {
    pub id: creature::Id,
    pub name: String,
    pub sprite: String,
    pub types: Vec<TypeIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeIcon {
    /// ASCII French name of the type, e.g. `tenebres`.
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub title: String,
    pub rows: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
    pub color: Rgb,
    /// Bar width in percent. May exceed 100.
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Details {
    pub title: String,
    pub height: Field,
    pub weight: Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evolution {
    pub title: String,
    pub entries: Vec<EvolutionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionEntry {
    pub target: creature::Id,
    pub name: String,
    pub sprite: String,
    /// The evolution condition, or `Unknown`.
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub title: String,
    pub base: Field,
    pub curve: Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breeding {
    pub title: String,
    pub egg_groups: Field,
    pub hatch_steps: Field,
    pub baby: Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Abilities {
    pub title: String,
    pub entries: Vec<Ability>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ability {
    pub symbol: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Moves {
    pub title: String,
    pub columns: Vec<String>,
    pub tables: Vec<MoveTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveTable {
    pub method: Method,
    pub title: String,
    pub entries: Vec<Move>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    pub symbol: String,
    pub level: Option<u32>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: TypeIcon,
    pub category: String,
    pub category_icon: String,
    pub pp: Option<u32>,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
}

/// Column headers of every move table, as translation keys.
pub const MOVE_COLUMNS: [&str; 7] = [
    "Level", "Name", "Type", "Category", "PP", "Power", "Accuracy",
];

impl Page {
    pub fn new(
        id: creature::Id,
        form: &Form,
        normalized: Normalized,
        translations: &Translations,
    ) -> Self {
        let text = |key: &str| translations.resolve(key).to_owned();
        let field = |key: &str, value: String| Field {
            label: text(key),
            value,
        };

        let Normalized {
            stats,
            abilities,
            moves,
            evolutions,
            types,
        } = normalized;

        let main = Main {
            name: id.display_name(),
            sprite: asset::sprite(&id),
            types,
            id,
        };

        Self {
            main,
            stats: Stats {
                title: text("Stats"),
                rows: stats,
            },
            details: Details {
                title: text("Height & Weight"),
                height: field("Height", format!("{} m", form.height)),
                weight: field("Weight", format!("{} kg", form.weight)),
            },
            evolution: Evolution {
                title: text("Evolution"),
                entries: evolutions,
            },
            experience: Experience {
                title: text("Experience"),
                base: field("Base Experience", form.base_experience.to_string()),
                curve: field("Experience Type", display_value(&form.experience_type)),
            },
            breeding: Breeding {
                title: text("Breeding Info"),
                egg_groups: field(
                    "Egg Groups",
                    form.breed_groups
                        .iter()
                        .map(display_value)
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                hatch_steps: field("Hatch Steps", form.hatch_steps.to_string()),
                baby: field("Baby form", creature::capitalize(&form.baby_db_symbol)),
            },
            abilities: Abilities {
                title: text("Abilities"),
                entries: abilities,
            },
            moves: Moves {
                title: text("Moves"),
                columns: MOVE_COLUMNS.into_iter().map(text).collect(),
                tables: Method::ALL
                    .into_iter()
                    .zip(moves)
                    .map(|(method, entries)| MoveTable {
                        method,
                        title: text(method.title()),
                        entries,
                    })
                    .collect(),
            },
        }
    }

    pub fn table(&self, method: Method) -> Option<&MoveTable> {
        self.moves
            .tables
            .iter()
            .find(|table| table.method == method)
    }
}
