//! Fetching and decoding the documents of a [`Source`].
use crate::{Error, Layout, Source};

use dexbase_core::consolidate::Texts;
use dexbase_core::creature::{self, Creature, Form};
use dexbase_core::{Catalog, Locale, Translations, ability, catalog, csv, moves, translations};

use futures_util::future;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use tokio::task;

pub async fn json<T: DeserializeOwned>(source: &impl Source, path: &str) -> Result<T, Error> {
    let bytes = source.fetch(path).await?;

    serde_json::from_slice(&bytes).map_err(|error| Error::InvalidJson {
        path: path.to_owned(),
        error: Arc::new(error),
    })
}

pub async fn catalog(source: &impl Source, layout: &Layout) -> Result<Catalog, Error> {
    let document: catalog::Document = json(source, &layout.catalog).await?;

    Ok(Catalog::from_document(document))
}

/// Loads the interface strings of `locale`.
///
/// Every key resolves to itself when the document is unavailable.
pub async fn translations(source: &impl Source, layout: &Layout, locale: &Locale) -> Translations {
    match json::<translations::Document>(source, &layout.translations).await {
        Ok(document) => Translations::from_document(document, locale.clone()),
        Err(error) => {
            log::warn!("Translations unavailable: {error}");

            Translations::empty(locale.clone())
        }
    }
}

/// Loads the first form of a creature record.
pub async fn form(source: &impl Source, layout: &Layout, id: &creature::Id) -> Result<Form, Error> {
    let path = layout.creature(id.as_str());
    let creature: Creature = json(source, &path).await?;

    creature.into_form().ok_or(Error::NotFound(path))
}

pub async fn table(source: &impl Source, path: &str) -> Result<csv::Table, Error> {
    let bytes = source.fetch(path).await?;

    Ok(task::spawn_blocking(move || csv::Table::parse(&String::from_utf8_lossy(&bytes))).await?)
}

/// Loads the legacy text tables. Unavailable tables are left empty.
pub async fn texts(source: &impl Source, layout: &Layout) -> Texts {
    let (ability_names, ability_descriptions, move_names) = future::join3(
        table(source, &layout.ability_names),
        table(source, &layout.ability_descriptions),
        table(source, &layout.move_names),
    )
    .await;

    let or_empty = |result: Result<csv::Table, Error>| {
        result.unwrap_or_else(|error| {
            log::warn!("Text table unavailable: {error}");

            csv::Table::default()
        })
    };

    Texts {
        ability_names: or_empty(ability_names),
        ability_descriptions: or_empty(ability_descriptions),
        move_names: or_empty(move_names),
    }
}

pub async fn ability_records<'a>(
    source: &impl Source,
    layout: &Layout,
    symbols: impl IntoIterator<Item = &'a ability::Id>,
) -> BTreeMap<ability::Id, ability::Record> {
    records(source, symbols, |symbol| layout.ability(symbol.as_str())).await
}

pub async fn move_records<'a>(
    source: &impl Source,
    layout: &Layout,
    symbols: impl IntoIterator<Item = &'a moves::Id>,
) -> BTreeMap<moves::Id, moves::Record> {
    records(source, symbols, |symbol| layout.move_(symbol.as_str())).await
}

/// Fetches the record of every distinct symbol concurrently, skipping the
/// ones that are unavailable.
async fn records<'a, K, T>(
    source: &impl Source,
    symbols: impl IntoIterator<Item = &'a K>,
    path: impl Fn(&K) -> String,
) -> BTreeMap<K, T>
where
    K: Ord + Clone + fmt::Display + 'a,
    T: DeserializeOwned,
{
    let symbols: BTreeSet<&K> = symbols.into_iter().collect();

    let records = future::join_all(symbols.into_iter().map(|symbol| {
        let path = path(symbol);

        async move { (symbol, json::<T>(source, &path).await) }
    }))
    .await;

    records
        .into_iter()
        .filter_map(|(symbol, record)| match record {
            Ok(record) => Some((symbol.clone(), record)),
            Err(error) => {
                log::warn!("Record of {symbol} unavailable: {error}");
                None
            }
        })
        .collect()
}
