use crate::source::{self, Source};
use crate::{Error, Layout, Query, assemble, load};

use dexbase_core::catalog;
use dexbase_core::{Catalog, Locale, Translations, View, creature};

/// A [`Source`] of documents together with their [`Layout`].
#[derive(Debug, Clone)]
pub struct Pokedex<S = source::Any> {
    source: S,
    layout: Layout,
}

impl<S: Source> Pokedex<S> {
    pub fn new(source: S, layout: Layout) -> Self {
        Self { source, layout }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub async fn catalog(&self) -> Result<Catalog, Error> {
        load::catalog(&self.source, &self.layout).await
    }

    pub async fn translations(&self, locale: &Locale) -> Translations {
        load::translations(&self.source, &self.layout, locale).await
    }

    pub async fn view(&self, id: &creature::Id, locale: &Locale) -> View {
        assemble::assemble(&self.source, &self.layout, id, locale).await
    }

    /// Opens the page requested by a query, if it names a creature.
    pub async fn open(&self, query: &Query) -> Option<View> {
        let id = query.pokemon.as_ref()?;

        Some(self.view(id, &query.locale).await)
    }

    /// Every creature of the dex with its name, sprite and page request.
    pub async fn list(&self) -> Result<Vec<catalog::Listing>, Error> {
        Ok(self.catalog().await?.listing())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<catalog::Entry>, Error> {
        let catalog = self.catalog().await?;

        Ok(catalog.search(query).into_iter().cloned().collect())
    }
}
