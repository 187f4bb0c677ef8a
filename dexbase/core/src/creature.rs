use crate::ability;
use crate::moves;
use crate::typing::{self, Type};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A per-creature document. Only its first form is ever displayed.
#[derive(Debug, Clone, Deserialize)]
pub struct Creature {
    #[serde(default)]
    pub forms: Vec<Form>,
}

impl Creature {
    pub fn into_form(self) -> Option<Form> {
        self.forms.into_iter().next()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    #[serde(flatten)]
    pub stats: Stats,
    pub type1: Type,
    #[serde(default, deserialize_with = "typing::deserialize_secondary")]
    pub type2: Option<Type>,
    #[serde(default)]
    pub abilities: Vec<ability::Id>,
    #[serde(default)]
    pub move_set: Vec<moves::Learnable>,
    #[serde(default)]
    pub evolutions: Vec<Evolution>,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub breed_groups: Vec<serde_json::Value>,
    #[serde(default)]
    pub hatch_steps: u32,
    #[serde(default)]
    pub baby_db_symbol: String,
    #[serde(default)]
    pub base_experience: u32,
    #[serde(default)]
    pub experience_type: serde_json::Value,
    /// Present once the record has been consolidated.
    #[serde(default, rename = "abilities_data")]
    pub abilities_data: Option<Vec<ability::Entry>>,
    #[serde(default, rename = "moves_data")]
    pub moves_data: Option<Vec<moves::Entry>>,
}

impl Form {
    pub fn is_consolidated(&self) -> bool {
        self.abilities_data.is_some() && self.moves_data.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Stats {
    #[serde(default, rename = "baseHp")]
    pub hp: u32,
    #[serde(default, rename = "baseAtk")]
    pub attack: u32,
    #[serde(default, rename = "baseDfe")]
    pub defense: u32,
    #[serde(default, rename = "baseSpd")]
    pub speed: u32,
    #[serde(default, rename = "baseAts")]
    pub special_attack: u32,
    #[serde(default, rename = "baseDfs")]
    pub special_defense: u32,
}

impl Stats {
    /// Stats in display order, along with their translation key.
    pub fn labeled(&self) -> [(Stat, u32); 6] {
        [
            (Stat::Hp, self.hp),
            (Stat::Attack, self.attack),
            (Stat::Defense, self.defense),
            (Stat::Speed, self.speed),
            (Stat::SpecialAttack, self.special_attack),
            (Stat::SpecialDefense, self.special_defense),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    Speed,
    SpecialAttack,
    SpecialDefense,
}

impl Stat {
    pub fn key(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::Speed => "Speed",
            Self::SpecialAttack => "Special Attack",
            Self::SpecialDefense => "Special Defense",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evolution {
    pub db_symbol: Id,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Evolution {
    /// The value of the first condition, or `None` when it is missing or falsy.
    pub fn level(&self) -> Option<String> {
        use serde_json::Value;

        match &self.conditions.first()?.value {
            Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
            Value::String(value) if !value.is_empty() => Some(value.clone()),
            Value::Bool(true) => Some("true".to_owned()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: serde_json::Value,
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

    /// The symbol with its first letter capitalized, e.g. `Bulbasaur`.
    pub fn display_name(&self) -> String {
        capitalize(&self.0)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders a JSON scalar the way it is displayed on a page.
pub(crate) fn display_value(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(values) => values
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "klass": "Specie",
        "dbSymbol": "bulbasaur",
        "forms": [{
            "baseHp": 45, "baseAtk": 49, "baseDfe": 49,
            "baseSpd": 45, "baseAts": 65, "baseDfs": 65,
            "type1": "grass", "type2": "poison",
            "height": 0.7, "weight": 6.9,
            "abilities": ["overgrow", "overgrow", "chlorophyll"],
            "moveSet": [{ "klass": "LevelLearnableMove", "move": "tackle", "level": 1 }],
            "evolutions": [{ "dbSymbol": "ivysaur", "conditions": [{ "type": "minLevel", "value": 16 }] }],
            "breedGroups": [1, 7],
            "hatchSteps": 5120,
            "babyDbSymbol": "bulbasaur",
            "baseExperience": 64,
            "experienceType": 3
        }]
    }"#;

    #[test]
    fn parses_the_first_form() {
        let creature: Creature = serde_json::from_str(BULBASAUR).expect("valid creature");
        let form = creature.into_form().expect("one form");

        assert_eq!(form.stats.hp, 45);
        assert_eq!(form.stats.special_defense, 65);
        assert_eq!(form.type1, Type::Grass);
        assert_eq!(form.type2, Some(Type::Poison));
        assert_eq!(form.abilities.len(), 3);
        assert_eq!(form.move_set.len(), 1);
        assert_eq!(form.evolutions[0].level().as_deref(), Some("16"));
        assert!(!form.is_consolidated());
    }

    #[test]
    fn stats_keep_display_order() {
        let stats = Stats {
            hp: 1,
            attack: 2,
            defense: 3,
            speed: 4,
            special_attack: 5,
            special_defense: 6,
        };

        let keys: Vec<_> = stats.labeled().iter().map(|(stat, _)| stat.key()).collect();
        let values: Vec<_> = stats.labeled().iter().map(|(_, value)| *value).collect();

        assert_eq!(
            keys,
            ["HP", "Attack", "Defense", "Speed", "Special Attack", "Special Defense"]
        );
        assert_eq!(values, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn evolution_level_is_unknown_without_a_value() {
        let evolution: Evolution =
            serde_json::from_str(r#"{ "dbSymbol": "vaporeon", "conditions": [] }"#)
                .expect("valid evolution");

        assert_eq!(evolution.level(), None);

        let evolution: Evolution = serde_json::from_str(
            r#"{ "dbSymbol": "vaporeon", "conditions": [{ "type": "stone", "value": "water_stone" }] }"#,
        )
        .expect("valid evolution");

        assert_eq!(evolution.level().as_deref(), Some("water_stone"));
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(Id::new("bulbasaur").display_name(), "Bulbasaur");
        assert_eq!(capitalize("élekid"), "Élekid");
        assert_eq!(capitalize(""), "");
    }
}
