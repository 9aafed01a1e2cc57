use thiserror::Error;

use crate::card::CardKind;

/// Fatal problems in the card data found while building the knowledge base.
///
/// Any of these aborts construction; there is no partially built knowledge base.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("{kind} record has an empty name")]
    EmptyName { kind: CardKind },

    #[error("{kind} \"{name}\" is missing required field `{field}`")]
    MissingField {
        kind: CardKind,
        name: String,
        field: &'static str,
    },

    #[error("pilot \"{pilot}\" flies unknown ship \"{ship}\"")]
    UnknownShip { pilot: String, ship: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplyConfigError {
    #[error("signature must not contain a blank line (\"\\n\\n\"), it would be collapsed")]
    DoubledBreak,
}
