//! Paths of the static images referenced by a page.
use crate::creature;
use crate::moves::Category;
use crate::typing::Type;

pub const SPRITES: &str = "data/pokefront";
pub const TYPE_ICONS: &str = "resources/icons/types";
pub const PAGE: &str = "PokemonSearch.html";

/// `data/pokefront/{id}.png`
pub fn sprite(creature: &creature::Id) -> String {
    format!("{SPRITES}/{creature}.png")
}

/// `PokemonSearch.html?pokemon={id}`
pub fn page(creature: &creature::Id) -> String {
    format!("{PAGE}?pokemon={creature}")
}

/// `resources/icons/types/{type}.png`, named after the ASCII French type name.
pub fn type_icon(type_: &Type) -> String {
    format!("{TYPE_ICONS}/{}.png", type_.icon_key())
}

pub fn category_icon(category: &Category) -> String {
    format!("{TYPE_ICONS}/{}", category.icon())
}
