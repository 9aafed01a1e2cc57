use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CardKind, StatValue};
use crate::error::BuildError;

/// Attack/agility/hull/shields of a ship, also used for per-pilot overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agility: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hull: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shields: Option<StatValue>,
}

impl ShipStats {
    /// `Name (attack/agility/hull/shields)`; a missing attack shows as `0`.
    ///
    /// `kind` and `owner` name the record the stats belong to, for the error.
    pub fn stat_line(&self, ship: &str, kind: CardKind, owner: &str) -> Result<String, BuildError> {
        let required = |value: &Option<StatValue>, field: &'static str| {
            value.clone().ok_or_else(|| BuildError::MissingField {
                kind,
                name: owner.to_string(),
                field,
            })
        };

        let agility = required(&self.agility, "agility")?;
        let hull = required(&self.hull, "hull")?;
        let shields = required(&self.shields, "shields")?;
        let attack = self.attack.clone().unwrap_or(StatValue::Number(0));

        Ok(format!("{ship} ({attack}/{agility}/{hull}/{shields})"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipRecord {
    pub name: String,
    #[serde(flatten)]
    pub stats: ShipStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PilotRecord {
    pub name: String,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_override: Option<ShipStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<StatValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeRecord {
    pub name: String,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<StatValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModificationRecord {
    pub name: String,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<StatValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub name: String,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<StatValue>,
}

/// A borrowed view of any card record.
#[derive(Debug, Clone, Copy)]
pub enum CardRecord<'a> {
    Ship(&'a ShipRecord),
    Pilot(&'a PilotRecord),
    Upgrade(&'a UpgradeRecord),
    Modification(&'a ModificationRecord),
    Title(&'a TitleRecord),
}

impl CardRecord<'_> {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ship(r) => &r.name,
            Self::Pilot(r) => &r.name,
            Self::Upgrade(r) => &r.name,
            Self::Modification(r) => &r.name,
            Self::Title(r) => &r.name,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Self::Ship(_) => CardKind::Ship,
            Self::Pilot(_) => CardKind::Pilot,
            Self::Upgrade(_) => CardKind::Upgrade,
            Self::Modification(_) => CardKind::Modification,
            Self::Title(_) => CardKind::Title,
        }
    }

    #[must_use]
    pub const fn is_unique(&self) -> bool {
        match self {
            Self::Ship(_) => false,
            Self::Pilot(r) => r.unique,
            Self::Upgrade(r) => r.unique,
            Self::Modification(r) => r.unique,
            Self::Title(r) => r.unique,
        }
    }
}

/// Layout of the card-data asset. Ships are an object keyed by display name,
/// every other variant is a list.
#[derive(Debug, Default, Deserialize)]
struct RawCardSet {
    #[serde(default)]
    ships: BTreeMap<String, ShipStats>,
    #[serde(default, rename = "pilotsById")]
    pilots: Vec<PilotRecord>,
    #[serde(default, rename = "upgradesById")]
    upgrades: Vec<UpgradeRecord>,
    #[serde(default, rename = "modificationsById")]
    modifications: Vec<ModificationRecord>,
    #[serde(default, rename = "titlesById")]
    titles: Vec<TitleRecord>,
}

/// Every card record, partitioned by variant.
///
/// Ships are kept in name order; the other variants keep the asset order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawCardSet")]
pub struct CardSet {
    pub ships: Vec<ShipRecord>,
    pub pilots: Vec<PilotRecord>,
    pub upgrades: Vec<UpgradeRecord>,
    pub modifications: Vec<ModificationRecord>,
    pub titles: Vec<TitleRecord>,
}

impl From<RawCardSet> for CardSet {
    fn from(raw: RawCardSet) -> Self {
        Self {
            ships: raw
                .ships
                .into_iter()
                .map(|(name, stats)| ShipRecord { name, stats })
                .collect(),
            pilots: raw.pilots,
            upgrades: raw.upgrades,
            modifications: raw.modifications,
            titles: raw.titles,
        }
    }
}

impl CardSet {
    /// Total number of records across all variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ships.len()
            + self.pilots.len()
            + self.upgrades.len()
            + self.modifications.len()
            + self.titles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records in builder order: ships, pilots, upgrades, modifications, titles.
    pub fn records(&self) -> impl Iterator<Item = CardRecord<'_>> {
        self.ships
            .iter()
            .map(CardRecord::Ship)
            .chain(self.pilots.iter().map(CardRecord::Pilot))
            .chain(self.upgrades.iter().map(CardRecord::Upgrade))
            .chain(self.modifications.iter().map(CardRecord::Modification))
            .chain(self.titles.iter().map(CardRecord::Title))
    }
}
