use crate::asset;
use crate::creature;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The national dex: every creature that can be browsed.
#[derive(Clone, Default)]
pub struct Catalog {
    creatures: crate::Map<creature::Id, Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub db_symbol: creature::Id,
}

/// A tile of the full dex grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub id: creature::Id,
    pub name: String,
    pub sprite: String,
    /// The page request of the creature.
    pub link: String,
}

impl Listing {
    pub fn new(id: creature::Id) -> Self {
        Self {
            name: id.display_name(),
            sprite: asset::sprite(&id),
            link: asset::page(&id),
            id,
        }
    }
}

/// The `national.json` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub creatures: Vec<Entry>,
}

impl Catalog {
    pub fn from_document(document: Document) -> Self {
        Self {
            creatures: crate::Map::new(document.creatures, |entry| entry.db_symbol.clone()),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.creatures.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn entries(&self) -> &[Entry] {
        self.creatures.values()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Every creature of the dex, in dex order.
    pub fn listing(&self) -> Vec<Listing> {
        self.entries()
            .iter()
            .map(|entry| Listing::new(entry.db_symbol.clone()))
            .collect()
    }

    /// Entries whose symbol contains `query`, ignoring case, in dex order.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return Vec::new();
        }

        self.entries()
            .iter()
            .filter(|entry| entry.db_symbol.as_str().to_lowercase().contains(&query))
            .collect()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("creatures", &self.creatures.len())
            .finish()
    }
}
