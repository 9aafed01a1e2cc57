//! Card records as they come out of the card-data assets.

mod records;
mod text;

pub use records::{
    CardRecord, CardSet, ModificationRecord, PilotRecord, ShipRecord, ShipStats, TitleRecord,
    UpgradeRecord,
};
pub use text::{RulesEntry, RulesTexts};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five record variants, in the order the builder processes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Ship,
    Pilot,
    Upgrade,
    Modification,
    Title,
}

impl CardKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ship => "ship",
            Self::Pilot => "pilot",
            Self::Upgrade => "upgrade",
            Self::Modification => "modification",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card attribute that the data stores either as a number (`3`) or as
/// text (`"?"`, `"2-3"`). Rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_value_untagged() -> serde_json::Result<()> {
        let values: Vec<StatValue> = serde_json::from_str(r#"[3, "2-3", 0.5, "?"]"#)?;
        assert_eq!(values[0], StatValue::Number(3));
        assert_eq!(values[1], StatValue::Text("2-3".to_string()));
        assert_eq!(values[2].to_string(), "0.5");
        assert_eq!(values[3].to_string(), "?");
        Ok(())
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(CardKind::Modification.to_string(), "modification");
        assert_eq!(CardKind::Ship.as_str(), "ship");
    }
}
