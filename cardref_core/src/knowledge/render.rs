//! Text layout of a single knowledge-base block.

use std::collections::HashMap;
use std::fmt::Display;

use crate::card::{CardKind, CardRecord, PilotRecord, RulesTexts, ShipRecord};
use crate::error::BuildError;

/// Break after a header line. The CR keeps it out of the reply's blank-line collapse.
pub const HEADER_BREAK: &str = "\n\r\n";

/// Terminator of every attribute line and of every block.
pub const LINE_BREAK: &str = "\n\n";

/// Marker appended to the bold name of unique cards.
pub const UNIQUE_MARKER: &str = " *";

/// Escape a composed line for the reply surface: parentheses become HTML
/// entities and every space carries a `^^` so the line stays superscript.
#[must_use]
pub fn escape_line(line: &str) -> String {
    line.replace('(', "&#40;")
        .replace(')', "&#41;")
        .replace(' ', " ^^")
}

fn attribute(label: &str, value: impl Display) -> String {
    escape_line(&format!("^^{label}: {value}{LINE_BREAK}"))
}

fn push_optional(out: &mut String, label: &str, value: Option<impl Display>) {
    if let Some(value) = value {
        out.push_str(&attribute(label, value));
    }
}

/// Stat line of a ship, without any break.
pub fn ship_stat_line(ship: &ShipRecord) -> Result<String, BuildError> {
    ship.stats.stat_line(&ship.name, CardKind::Ship, &ship.name)
}

/// The block a ship seeds its key with: the plain stat line and a break.
pub fn ship_seed(ship: &ShipRecord) -> Result<String, BuildError> {
    Ok(format!("{}{HEADER_BREAK}", ship_stat_line(ship)?))
}

/// Lookup data every non-ship block needs.
pub struct RenderContext<'a> {
    /// Ship name to its stat line.
    pub ship_lines: &'a HashMap<String, String>,
    pub texts: &'a RulesTexts,
}

impl RenderContext<'_> {
    fn pilot_ship_line(&self, pilot: &PilotRecord) -> Result<Option<String>, BuildError> {
        match (&pilot.ship_override, &pilot.ship) {
            (Some(stats), ship) => {
                let ship = ship.as_deref().ok_or_else(|| BuildError::MissingField {
                    kind: CardKind::Pilot,
                    name: pilot.name.clone(),
                    field: "ship",
                })?;
                stats
                    .stat_line(ship, CardKind::Pilot, &pilot.name)
                    .map(Some)
            }
            (None, Some(ship)) => self
                .ship_lines
                .get(ship)
                .cloned()
                .map(Some)
                .ok_or_else(|| BuildError::UnknownShip {
                    pilot: pilot.name.clone(),
                    ship: ship.clone(),
                }),
            (None, None) => Ok(None),
        }
    }

    /// Full block for a pilot, upgrade, modification or title.
    ///
    /// Ships never get a block of their own, use [`ship_seed`].
    pub fn card_block(&self, record: CardRecord<'_>) -> Result<String, BuildError> {
        if let CardRecord::Ship(ship) = record {
            return ship_seed(ship);
        }

        let name = record.name();
        let mut out = format!("**{name}**");
        if record.is_unique() {
            out.push_str(UNIQUE_MARKER);
        }
        out.push_str(HEADER_BREAK);

        match record {
            CardRecord::Ship(_) => {}
            CardRecord::Pilot(pilot) => {
                push_optional(&mut out, "Ship", self.pilot_ship_line(pilot)?);
                push_optional(&mut out, "Skill", pilot.skill.as_ref());
                push_optional(&mut out, "Points", pilot.points.as_ref());
            }
            CardRecord::Upgrade(upgrade) => {
                push_optional(&mut out, "Faction", upgrade.faction.as_ref());
                push_optional(&mut out, "Type", upgrade.slot.as_ref());
                push_optional(&mut out, "Attack", upgrade.attack.as_ref());
                push_optional(&mut out, "Range", upgrade.range.as_ref());
                push_optional(&mut out, "Points", upgrade.points.as_ref());
            }
            CardRecord::Modification(modification) => {
                push_optional(&mut out, "Ship", modification.ship.as_ref());
                push_optional(&mut out, "Points", modification.points.as_ref());
            }
            CardRecord::Title(title) => {
                push_optional(&mut out, "Ship", title.ship.as_ref());
                push_optional(&mut out, "Points", title.points.as_ref());
            }
        }

        if let Some(text) = self.texts.lookup(record.kind(), name) {
            out.push_str(&escape_line(&format!("^^{text}{LINE_BREAK}")));
        }
        out.push_str(LINE_BREAK);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{ModificationRecord, RulesEntry, ShipStats, TitleRecord, UpgradeRecord};

    fn xwing() -> ShipRecord {
        ShipRecord {
            name: "X-Wing".to_string(),
            stats: ShipStats {
                attack: Some(3.into()),
                agility: Some(2.into()),
                hull: Some(3.into()),
                shields: Some(2.into()),
            },
        }
    }

    #[test]
    fn test_escape_line() {
        assert_eq!(escape_line("^^Ship: X-Wing (3/2/3/2)"), "^^Ship: ^^X-Wing ^^&#40;3/2/3/2&#41;");
    }

    #[test]
    fn test_ship_seed_is_plain() -> Result<(), BuildError> {
        assert_eq!(ship_seed(&xwing())?, "X-Wing (3/2/3/2)\n\r\n");
        Ok(())
    }

    #[test]
    fn test_pilot_block_field_order() -> Result<(), BuildError> {
        let mut ship_lines = HashMap::new();
        ship_lines.insert("X-Wing".to_string(), ship_stat_line(&xwing())?);
        let mut texts = RulesTexts::default();
        texts.pilots.insert(
            "Biggs Darklighter".to_string(),
            RulesEntry {
                text: "Other ships at Range 1 cannot be targeted.".to_string(),
            },
        );
        let ctx = RenderContext {
            ship_lines: &ship_lines,
            texts: &texts,
        };
        let pilot = PilotRecord {
            name: "Biggs Darklighter".to_string(),
            unique: true,
            ship: Some("X-Wing".to_string()),
            skill: Some(5.into()),
            points: Some(25.into()),
            ..PilotRecord::default()
        };

        let block = ctx.card_block(CardRecord::Pilot(&pilot))?;
        assert_eq!(
            block,
            "**Biggs Darklighter** *\n\r\n\
             ^^Ship: ^^X-Wing ^^&#40;3/2/3/2&#41;\n\n\
             ^^Skill: ^^5\n\n\
             ^^Points: ^^25\n\n\
             ^^Other ^^ships ^^at ^^Range ^^1 ^^cannot ^^be ^^targeted.\n\n\
             \n\n"
        );
        Ok(())
    }

    #[test]
    fn test_pilot_override_wins() -> Result<(), BuildError> {
        let mut ship_lines = HashMap::new();
        ship_lines.insert("X-Wing".to_string(), ship_stat_line(&xwing())?);
        let texts = RulesTexts::default();
        let ctx = RenderContext {
            ship_lines: &ship_lines,
            texts: &texts,
        };
        let pilot = PilotRecord {
            name: "Wedge Antilles".to_string(),
            ship: Some("X-Wing".to_string()),
            ship_override: Some(ShipStats {
                attack: Some(4.into()),
                agility: Some(2.into()),
                hull: Some(3.into()),
                shields: Some(2.into()),
            }),
            ..PilotRecord::default()
        };

        let block = ctx.card_block(CardRecord::Pilot(&pilot))?;
        assert!(block.contains("&#40;4/2/3/2&#41;"));
        assert!(!block.contains("&#40;3/2/3/2&#41;"));
        Ok(())
    }

    #[test]
    fn test_pilot_unknown_ship() {
        let ship_lines = HashMap::new();
        let texts = RulesTexts::default();
        let ctx = RenderContext {
            ship_lines: &ship_lines,
            texts: &texts,
        };
        let pilot = PilotRecord {
            name: "Rookie Pilot".to_string(),
            ship: Some("Y-Wing".to_string()),
            ..PilotRecord::default()
        };

        assert_eq!(
            ctx.card_block(CardRecord::Pilot(&pilot)),
            Err(BuildError::UnknownShip {
                pilot: "Rookie Pilot".to_string(),
                ship: "Y-Wing".to_string(),
            })
        );
    }

    #[test]
    fn test_upgrade_block_skips_absent_fields() -> Result<(), BuildError> {
        let ship_lines = HashMap::new();
        let texts = RulesTexts::default();
        let ctx = RenderContext {
            ship_lines: &ship_lines,
            texts: &texts,
        };
        let upgrade = UpgradeRecord {
            name: "Proton Torpedoes".to_string(),
            slot: Some("Torpedo".to_string()),
            attack: Some(4.into()),
            range: Some("2-3".into()),
            points: Some(4.into()),
            ..UpgradeRecord::default()
        };

        let block = ctx.card_block(CardRecord::Upgrade(&upgrade))?;
        assert_eq!(
            block,
            "**Proton Torpedoes**\n\r\n\
             ^^Type: ^^Torpedo\n\n\
             ^^Attack: ^^4\n\n\
             ^^Range: ^^2-3\n\n\
             ^^Points: ^^4\n\n\
             \n\n"
        );
        Ok(())
    }

    #[test]
    fn test_title_block() -> Result<(), BuildError> {
        let ship_lines = HashMap::new();
        let texts = RulesTexts::default();
        let ctx = RenderContext {
            ship_lines: &ship_lines,
            texts: &texts,
        };
        let title = TitleRecord {
            name: "Millennium Falcon".to_string(),
            unique: true,
            ship: Some("YT-1300".to_string()),
            points: Some(1.into()),
        };

        let block = ctx.card_block(CardRecord::Title(&title))?;
        assert!(block.starts_with("**Millennium Falcon** *\n\r\n^^Ship: ^^YT-1300\n\n"));
        assert!(block.ends_with("^^Points: ^^1\n\n\n\n"));
        Ok(())
    }

    #[test]
    fn test_upgrade_faction_comes_first() -> Result<(), BuildError> {
        let ship_lines = HashMap::new();
        let texts = RulesTexts::default();
        let ctx = RenderContext {
            ship_lines: &ship_lines,
            texts: &texts,
        };
        let upgrade = UpgradeRecord {
            name: "Heavy Laser Cannon".to_string(),
            unique: false,
            faction: Some("Scum and Villainy".to_string()),
            slot: Some("Cannon".to_string()),
            attack: Some(4.into()),
            range: Some("2-3".into()),
            points: Some(7.into()),
        };

        let block = ctx.card_block(CardRecord::Upgrade(&upgrade))?;
        assert_eq!(
            block,
            "**Heavy Laser Cannon**\n\r\n\
             ^^Faction: ^^Scum ^^and ^^Villainy\n\n\
             ^^Type: ^^Cannon\n\n\
             ^^Attack: ^^4\n\n\
             ^^Range: ^^2-3\n\n\
             ^^Points: ^^7\n\n\
             \n\n"
        );
        Ok(())
    }

    #[test]
    fn test_modification_block() -> Result<(), BuildError> {
        let ship_lines = HashMap::new();
        let mut texts = RulesTexts::default();
        texts.modifications.insert(
            "Advanced SLAM".to_string(),
            RulesEntry {
                text: "After performing a SLAM action, you may perform a free action.".to_string(),
            },
        );
        let ctx = RenderContext {
            ship_lines: &ship_lines,
            texts: &texts,
        };
        let modification = ModificationRecord {
            name: "Advanced SLAM".to_string(),
            unique: false,
            ship: Some("K-Wing (Scum)".to_string()),
            points: Some(2.into()),
        };

        let block = ctx.card_block(CardRecord::Modification(&modification))?;
        assert_eq!(
            block,
            "**Advanced SLAM**\n\r\n\
             ^^Ship: ^^K-Wing ^^&#40;Scum&#41;\n\n\
             ^^Points: ^^2\n\n\
             ^^After ^^performing ^^a ^^SLAM ^^action, ^^you ^^may ^^perform ^^a ^^free ^^action.\n\n\
             \n\n"
        );
        Ok(())
    }

    #[test]
    fn test_ship_record_renders_its_seed() -> Result<(), BuildError> {
        let ship_lines = HashMap::new();
        let texts = RulesTexts::default();
        let ctx = RenderContext {
            ship_lines: &ship_lines,
            texts: &texts,
        };
        let ship = xwing();
        assert_eq!(ctx.card_block(CardRecord::Ship(&ship))?, "X-Wing (3/2/3/2)\n\r\n");
        Ok(())
    }
}
