use dexbase_core::{Locale, creature};

use reqwest::Url;
use std::sync::LazyLock;

/// Resolves relative requests such as `PokemonSearch.html?pokemon=mew`.
static BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").expect("Parse base url"));

/// The parameters of a page request, e.g. `?pokemon=bulbasaur&lang=de`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub pokemon: Option<creature::Id>,
    pub locale: Locale,
}

impl Query {
    /// Parses a full URL, a relative one or a bare query string.
    ///
    /// Unknown parameters are ignored and a missing or empty `lang`
    /// selects the default language.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let input = if input.contains('=') && !input.contains('?') {
            format!("?{input}")
        } else {
            input.to_owned()
        };

        let url = match Url::options().base_url(Some(&*BASE)).parse(&input) {
            Ok(url) => url,
            Err(error) => {
                log::warn!("Invalid page request {input:?}: {error}");
                return Self::default();
            }
        };

        let mut query = Self::default();

        for (key, value) in url.query_pairs() {
            let value = value.trim();

            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "pokemon" => query.pokemon = Some(creature::Id::new(value)),
                "lang" => query.locale = Locale::new(value),
                _ => {}
            }
        }

        query
    }
}
