pub mod assemble;
pub mod error;
pub mod layout;
pub mod load;
pub mod query;
pub mod source;

mod pokedex;

pub use dexbase_core::{
    ability, asset, catalog, color, consolidate, creature, csv, locale, moves, translations, typing,
    view,
};
pub use dexbase_core::{Catalog, Locale, Page, Translations, View};

pub use assemble::assemble;
pub use error::{Error, Result};
pub use layout::Layout;
pub use pokedex::Pokedex;
pub use query::Query;
pub use source::Source;
