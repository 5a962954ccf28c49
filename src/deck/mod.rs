//! The deck table: preset opponent decks, referencing cards by id.

pub mod record;
pub mod table;

pub use record::{ArmorEvo, City, Deck, DeckRecord, Music};
pub use table::{build, dangling_cards, locate, DeckTable, DeckTableLocation};
