use crate::ability;
use crate::creature::{Evolution, Form};
use crate::moves::{self, Method};
use crate::typing::Type;
use crate::view;
use crate::{Locale, Translations, asset, color};

use std::collections::BTreeSet;

/// Evolution level shown when no condition value is known.
pub const UNKNOWN_LEVEL: &str = "Unknown";

/// The derived fields of a form, ready to be laid out on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub stats: Vec<view::Stat>,
    pub abilities: Vec<view::Ability>,
    /// Move tables, in the order of [`Method::ALL`].
    pub moves: [Vec<view::Move>; 4],
    pub evolutions: Vec<view::EvolutionEntry>,
    pub types: Vec<view::TypeIcon>,
}

pub fn normalize(
    form: &Form,
    abilities: &ability::Table,
    moves: &moves::Table,
    locale: &Locale,
    translations: &Translations,
) -> Normalized {
    Normalized {
        stats: stats(form, translations),
        abilities: self::abilities(form, abilities, locale),
        moves: self::moves(form, moves, locale),
        evolutions: evolutions(form),
        types: types(form),
    }
}

pub fn stats(form: &Form, translations: &Translations) -> Vec<view::Stat> {
    form.stats
        .labeled()
        .into_iter()
        .map(|(stat, value)| view::Stat {
            label: translations.resolve(stat.key()).to_owned(),
            value,
            color: color::of(value),
            width: color::width(value),
        })
        .collect()
}

/// Resolves every distinct ability of the form, in order of appearance.
pub fn abilities(form: &Form, table: &ability::Table, locale: &Locale) -> Vec<view::Ability> {
    let mut seen = BTreeSet::new();

    form.abilities
        .iter()
        .filter(|symbol| seen.insert(*symbol))
        .map(|symbol| match table.get(symbol) {
            Some(ability) => view::Ability {
                symbol: symbol.to_string(),
                name: ability.name(locale).to_owned(),
                description: ability.description(locale).to_owned(),
            },
            None => {
                log::warn!("Ability data not found: {symbol}");

                view::Ability {
                    symbol: symbol.to_string(),
                    name: symbol.to_string(),
                    description: ability::DATA_NOT_FOUND.to_owned(),
                }
            }
        })
        .collect()
}

/// Sorts the learnable moves of the form into their tables.
///
/// Within a table, only the first occurrence of a move is kept.
pub fn moves(form: &Form, table: &moves::Table, locale: &Locale) -> [Vec<view::Move>; 4] {
    let mut tables: [Vec<view::Move>; 4] = Default::default();
    let mut seen: [BTreeSet<&moves::Id>; 4] = Default::default();

    for learnable in &form.move_set {
        let (index, data) = match place(learnable, table) {
            Ok(placed) => placed,
            Err(Skipped::UnknownMethod) => {
                log::warn!(
                    "Unknown learning method {klass} for move {move_}",
                    klass = learnable.klass,
                    move_ = learnable.id
                );
                continue;
            }
            Err(Skipped::MissingData) => {
                log::warn!("Move data not found: {}", learnable.id);
                continue;
            }
        };

        if !seen[index].insert(&learnable.id) {
            continue;
        }

        tables[index].push(view::Move {
            symbol: learnable.id.to_string(),
            // Level 0 is not displayed
            level: learnable.level.filter(|level| *level > 0),
            name: data.name(locale).to_owned(),
            type_: type_icon(&data.type_),
            category: data.category.as_str().to_owned(),
            category_icon: asset::category_icon(&data.category),
            pp: data.pp,
            power: data.power,
            accuracy: data.accuracy,
        });
    }

    tables
}

/// Why a learnable move is left out of every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skipped {
    UnknownMethod,
    MissingData,
}

/// Finds the table index and the data of a learnable move.
///
/// The learning method is checked before the data is looked up.
pub fn place<'a>(
    learnable: &moves::Learnable,
    table: &'a moves::Table,
) -> Result<(usize, &'a moves::Entry), Skipped> {
    let index = match learnable.method().ok_or(Skipped::UnknownMethod)? {
        Method::Level => 0,
        Method::Tutor => 1,
        Method::Tech => 2,
        Method::Breed => 3,
    };

    let data = table.get(&learnable.id).ok_or(Skipped::MissingData)?;

    Ok((index, data))
}

pub fn evolutions(form: &Form) -> Vec<view::EvolutionEntry> {
    form.evolutions.iter().map(evolution).collect()
}

fn evolution(evolution: &Evolution) -> view::EvolutionEntry {
    let target = evolution.db_symbol.clone();

    view::EvolutionEntry {
        name: target.display_name(),
        sprite: asset::sprite(&target),
        level: evolution
            .level()
            .unwrap_or_else(|| UNKNOWN_LEVEL.to_owned()),
        target,
    }
}

/// The primary type, then the secondary one if the form has it.
pub fn types(form: &Form) -> Vec<view::TypeIcon> {
    std::iter::once(&form.type1)
        .chain(form.type2.as_ref())
        .map(type_icon)
        .collect()
}

fn type_icon(type_: &Type) -> view::TypeIcon {
    view::TypeIcon {
        name: type_.icon_key(),
        icon: asset::type_icon(type_),
    }
}
