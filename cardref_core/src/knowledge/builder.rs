//! Knowledge-base construction as a pure fold over per-variant entries.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

use super::render::{RenderContext, ship_seed, ship_stat_line};
use crate::card::{CardKind, CardRecord, CardSet, RulesTexts};
use crate::error::BuildError;
use crate::normalize::{initialism, normalize_name};

/// How an entry combines with a block already stored under the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Overwrite whatever is there.
    Replace,
    /// Concatenate after the existing block.
    Append,
}

/// One rendered block destined for `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub block: String,
    pub policy: MergePolicy,
}

/// Normalized key for a record, `None` when the name has nothing to match on.
fn record_key(kind: CardKind, name: &str) -> Result<Option<String>, BuildError> {
    if name.trim().is_empty() {
        return Err(BuildError::EmptyName { kind });
    }
    let key = normalize_name(name);
    if key.is_empty() {
        warn!("Skipping {kind} \"{name}\": name has no letters or digits");
        return Ok(None);
    }
    Ok(Some(key))
}

/// Stat lines of every ship, by display name, for pilot blocks.
pub fn ship_lines(cards: &CardSet) -> Result<HashMap<String, String>, BuildError> {
    cards
        .ships
        .iter()
        .map(|ship| ship_stat_line(ship).map(|line| (ship.name.clone(), line)))
        .collect()
}

/// Seed entries for all ships.
pub fn ship_entries(cards: &CardSet) -> Result<Vec<Entry>, BuildError> {
    let mut entries = Vec::with_capacity(cards.ships.len());
    for ship in &cards.ships {
        let Some(key) = record_key(CardKind::Ship, &ship.name)? else {
            continue;
        };
        entries.push(Entry {
            key,
            block: ship_seed(ship)?,
            policy: MergePolicy::Replace,
        });
    }
    Ok(entries)
}

/// Appending entries for every non-ship record, in builder order.
pub fn card_entries(cards: &CardSet, ctx: &RenderContext<'_>) -> Result<Vec<Entry>, BuildError> {
    let mut entries = Vec::new();
    for record in cards
        .records()
        .filter(|record| !matches!(record, CardRecord::Ship(_)))
    {
        let Some(key) = record_key(record.kind(), record.name())? else {
            continue;
        };
        let block = ctx.card_block(record)?;
        debug!("Rendered {} \"{}\" under {key}", record.kind(), record.name());
        entries.push(Entry {
            key,
            block,
            policy: MergePolicy::Append,
        });
    }
    Ok(entries)
}

/// Fold entries, in order, into a single map.
#[must_use]
pub fn fold_entries(entries: impl IntoIterator<Item = Entry>) -> BTreeMap<String, String> {
    entries
        .into_iter()
        .fold(BTreeMap::new(), |mut map, entry| {
            match entry.policy {
                MergePolicy::Replace => {
                    map.insert(entry.key, entry.block);
                }
                MergePolicy::Append => {
                    map.entry(entry.key).or_default().push_str(&entry.block);
                }
            }
            map
        })
}

/// `(initialism key, full key)` for every multi-word upgrade, modification and
/// title, in that order.
#[must_use]
pub fn initialism_aliases(cards: &CardSet) -> Vec<(String, String)> {
    let names = cards
        .upgrades
        .iter()
        .map(|r| r.name.as_str())
        .chain(cards.modifications.iter().map(|r| r.name.as_str()))
        .chain(cards.titles.iter().map(|r| r.name.as_str()));

    names
        .filter_map(|name| {
            let alias = initialism(name)?;
            let key = normalize_name(name);
            (!key.is_empty()).then_some((alias, key))
        })
        .collect()
}

/// Copy the primary block of each full key under its alias.
///
/// Aliases are resolved against `primary` only, a later alias overwrites an
/// earlier one, and the result overwrites any primary entry with the same key.
#[must_use]
pub fn apply_aliases(
    mut primary: BTreeMap<String, String>,
    aliases: &[(String, String)],
) -> BTreeMap<String, String> {
    let resolved: BTreeMap<String, String> = aliases
        .iter()
        .filter_map(|(alias, key)| {
            let block = primary.get(key)?;
            debug!("Adding initialism {alias} for {key}");
            Some((alias.clone(), block.clone()))
        })
        .collect();

    primary.extend(resolved);
    primary
}

/// Full build: ships, then pilots/upgrades/modifications/titles, then initialisms.
pub fn build_map(cards: &CardSet, texts: &RulesTexts) -> Result<BTreeMap<String, String>, BuildError> {
    let ship_lines = ship_lines(cards)?;
    let ctx = RenderContext {
        ship_lines: &ship_lines,
        texts,
    };

    let mut entries = ship_entries(cards)?;
    entries.extend(card_entries(cards, &ctx)?);

    let primary = fold_entries(entries);
    Ok(apply_aliases(primary, &initialism_aliases(cards)))
}
