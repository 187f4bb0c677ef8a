//! Turns a creature id into a complete page.
use crate::{Layout, Source, load};

use dexbase_core::creature::{self, Form};
use dexbase_core::view::{Page, View};
use dexbase_core::{Locale, ability, consolidate, moves, normalize};

use futures_util::future;

/// Builds the page of a creature in the given language.
///
/// The translations and the creature record are fetched concurrently. A
/// missing or malformed record produces [`View::NotFound`]; every other
/// failure degrades to fallback text.
pub async fn assemble(
    source: &impl Source,
    layout: &Layout,
    id: &creature::Id,
    locale: &Locale,
) -> View {
    let (translations, form) = future::join(
        load::translations(source, layout, locale),
        load::form(source, layout, id),
    )
    .await;

    let mut form = match form {
        Ok(form) => form,
        Err(error) => {
            log::warn!("Pokémon {id} not available: {error}");

            return View::not_found(id.clone(), &translations);
        }
    };

    let (abilities, moves) = match (form.abilities_data.take(), form.moves_data.take()) {
        (Some(abilities), Some(moves)) => (
            ability::Table::from_entries(abilities),
            moves::Table::from_entries(moves),
        ),
        _ => tables(source, layout, &form).await,
    };

    let normalized = normalize(&form, &abilities, &moves, locale, &translations);

    View::Found(Page::new(id.clone(), &form, normalized, &translations))
}

/// Builds the lookup tables of a record that does not embed them, out of
/// the per-symbol records and the text tables.
pub async fn tables(
    source: &impl Source,
    layout: &Layout,
    form: &Form,
) -> (ability::Table, moves::Table) {
    log::info!("Consolidating legacy record");

    let (texts, abilities, moves) = future::join3(
        load::texts(source, layout),
        load::ability_records(source, layout, &form.abilities),
        load::move_records(
            source,
            layout,
            form.move_set.iter().map(|learnable| &learnable.id),
        ),
    )
    .await;

    (
        consolidate::abilities(form, &abilities, &texts),
        consolidate::moves(form, &moves, &texts),
    )
}
