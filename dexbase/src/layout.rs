use crate::Error;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::task;

/// The placeholder replaced by a symbol in path templates.
pub const PLACEHOLDER: &str = "{id}";

/// Where each document lives inside a [`Source`](crate::Source).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub catalog: String,
    pub translations: String,
    pub creature: String,
    pub ability: String,
    #[serde(rename = "move")]
    pub move_: String,
    pub ability_names: String,
    pub ability_descriptions: String,
    pub move_names: String,
}

impl Layout {
    /// Reads a layout from a RON file. Missing fields keep their default.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).await?;

        Self::parse(contents).await
    }

    pub async fn parse(contents: String) -> Result<Self, Error> {
        Ok(task::spawn_blocking(move || ron::de::from_str(&contents)).await??)
    }

    pub fn creature(&self, id: &str) -> String {
        self.creature.replace(PLACEHOLDER, id)
    }

    pub fn ability(&self, id: &str) -> String {
        self.ability.replace(PLACEHOLDER, id)
    }

    pub fn move_(&self, id: &str) -> String {
        self.move_.replace(PLACEHOLDER, id)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            catalog: "data/national.json".to_owned(),
            translations: "translations/translations.json".to_owned(),
            creature: "data/pokemon_consolidated/{id}.json".to_owned(),
            ability: "abilities/{id}.json".to_owned(),
            move_: "moves/{id}.json".to_owned(),
            ability_names: "csv/100004.csv".to_owned(),
            ability_descriptions: "csv/100005.csv".to_owned(),
            move_names: "csv/100006.csv".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_are_filled_with_symbols() {
        let layout = Layout::default();

        assert_eq!(
            layout.creature("bulbasaur"),
            "data/pokemon_consolidated/bulbasaur.json"
        );
        assert_eq!(layout.ability("overgrow"), "abilities/overgrow.json");
        assert_eq!(layout.move_("tackle"), "moves/tackle.json");
    }

    #[tokio::test]
    async fn partial_layouts_keep_defaults() {
        let layout = Layout::parse(r#"(creature: "pokemon/{id}.json", move: "moves/{id}.dat")"#.to_owned())
            .await
            .expect("valid layout");

        assert_eq!(layout.creature("mew"), "pokemon/mew.json");
        assert_eq!(layout.move_("pound"), "moves/pound.dat");
        assert_eq!(layout.catalog, Layout::default().catalog);
    }

    #[tokio::test]
    async fn malformed_layouts_are_rejected() {
        let result = Layout::parse("(creature: 42)".to_owned()).await;

        assert!(matches!(result, Err(Error::InvalidLayout(_))));
    }
}
