#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod card;
pub mod error;
pub mod knowledge;
pub mod mention;
pub mod normalize;
pub mod reply;

pub use card::{
    CardKind, CardRecord, CardSet, ModificationRecord, PilotRecord, RulesEntry, RulesTexts,
    ShipRecord, ShipStats, StatValue, TitleRecord, UpgradeRecord,
};
pub use error::{BuildError, ReplyConfigError};
pub use knowledge::{Entry, KnowledgeBase, MergePolicy};
pub use mention::{
    MAX_MENTIONS, MAX_TOKEN_CHARS, MIN_INPUT_CHARS, MentionScanner, ScanState, SpellCorrector,
    Step, extract_mentions, strip_quoted_lines,
};
pub use normalize::{initialism, normalize_name, strip_quotes};
pub use reply::{DEFAULT_SIGNATURE_TEMPLATE, ReplyConfig, Resolver, collapse_paragraphs};
