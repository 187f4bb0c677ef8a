use serde::{Deserialize, Serialize};

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// The column order of every legacy CSV text table.
pub const LANGUAGES: [&str; 7] = ["en", "fr", "it", "de", "es", "ko", "kana"];

/// The language used when a page does not ask for one.
pub const DEFAULT: &str = "fr";

/// The language every lookup ends up falling back to.
pub const ENGLISH: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(pub(crate) String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn english() -> Self {
        Self(ENGLISH.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == ENGLISH
    }

    /// Returns the column of this locale in a CSV text table, if it has one.
    pub fn index(&self) -> Option<usize> {
        LANGUAGES.iter().position(|language| *language == self.0)
    }

    pub fn all() -> impl Iterator<Item = Locale> {
        LANGUAGES.iter().map(|language| Locale::new(*language))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT.to_owned())
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map<T = String>(BTreeMap<Locale, T>);

impl<T> Map<T> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, locale: Locale, value: T) -> Option<T> {
        self.0.insert(locale, value)
    }

    pub fn get<Q>(&self, locale: &Q) -> Option<&T>
    where
        Locale: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.0.get(locale)
    }

    pub fn has_english(&self) -> bool {
        self.0.contains_key(ENGLISH)
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up the value for `locale`, falling back to English.
    ///
    /// Empty strings count as missing.
    pub fn resolve(&self, locale: &Locale) -> Option<&str>
    where
        T: AsRef<str>,
    {
        let present = |value: &&T| !value.as_ref().is_empty();

        self.get(locale.as_str())
            .filter(present)
            .or_else(|| self.get(ENGLISH).filter(present))
            .map(AsRef::as_ref)
    }
}

impl<T> FromIterator<(Locale, T)> for Map<T> {
    fn from_iter<I: IntoIterator<Item = (Locale, T)>>(iter: I) -> Self {
        Self(BTreeMap::from_iter(iter))
    }
}
