use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use super::digimon::Digimon;
use super::digivolve::Digivolve;
use super::item::Item;
use super::property::CardType;
use crate::error::RecordError;
use crate::layout::{ENTRY_FOOTER_SIZE, ENTRY_HEADER_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "card_type")]
pub enum Card {
    Digimon(Digimon),
    Item(Item),
    Digivolve(Digivolve),
}

impl Card {
    pub fn card_type(&self) -> CardType {
        match self {
            Card::Digimon(_) => CardType::Digimon,
            Card::Item(_) => CardType::Item,
            Card::Digivolve(_) => CardType::Digivolve,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Card::Digimon(card) => &card.name,
            Card::Item(card) => &card.name,
            Card::Digivolve(card) => &card.name,
        }
    }
}

/// One decoded card table entry.
///
/// Serializes as a single flat object: `id`, `card_type`, then the card fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CardRecord {
    pub id: u16,
    #[serde(flatten)]
    pub card: Card,
}

impl CardRecord {
    /// Total entry width for a card type, header and footer included.
    pub fn entry_size(card_type: CardType) -> usize {
        ENTRY_HEADER_SIZE + card_type.body_size() + ENTRY_FOOTER_SIZE
    }

    /// Decodes the entry at table position `index`, which must hold a card of `expected` type.
    pub fn decode(expected: CardType, index: usize, entry: &[u8]) -> Result<Self, RecordError> {
        let id = LittleEndian::read_u16(&entry[0x0..0x2]);
        let type_byte = entry[0x2];
        let card_type = CardType::from_byte(type_byte).map_err(|_| RecordError::UnknownCardType { byte: type_byte })?;

        if card_type != expected {
            return Err(RecordError::CardTypeMismatch { expected: expected.as_str(), found: card_type.as_str() });
        }
        if usize::from(id) != index {
            return Err(RecordError::IdMismatch { expected: index, found: id });
        }

        let body_end = ENTRY_HEADER_SIZE + card_type.body_size();
        let body = &entry[ENTRY_HEADER_SIZE..body_end];
        let card = match card_type {
            CardType::Digimon => Card::Digimon(Digimon::parse(body)?),
            CardType::Item => Card::Item(Item::parse(body)?),
            CardType::Digivolve => Card::Digivolve(Digivolve::parse(body)?),
        };

        let footer = entry[body_end];
        if footer != 0 {
            log::warn!("Card #{} ({}) has non-zero footer {:#x}", index, card.name(), footer);
        }
        log::trace!("Card #{}: {} {:?}", index, card.card_type().as_str(), card.name());

        Ok(Self { id, card })
    }
}
