mod map;

pub mod ability;
pub mod asset;
pub mod catalog;
pub mod color;
pub mod consolidate;
pub mod creature;
pub mod csv;
pub mod locale;
pub mod moves;
pub mod normalize;
pub mod translations;
pub mod typing;
pub mod view;

pub use catalog::Catalog;
pub use creature::{Creature, Form};
pub use locale::Locale;
pub use map::Map;
pub use normalize::{Normalized, normalize};
pub use translations::Translations;
pub use typing::Type;
pub use view::{Page, View};
