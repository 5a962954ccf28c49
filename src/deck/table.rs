use std::io::{Read, Seek};

use super::record::{Deck, DeckRecord};
use crate::card::CardTable;
use crate::error::{ExtractError, FormatError, Result, TableKind};
use crate::image::GameImage;
use crate::layout::{Layout, DECK_SIZE, TABLE_HEADER_SIZE};

pub type DeckTable = Vec<DeckRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckTableLocation {
    /// Data address of the table header.
    pub offset: u64,
    pub count: usize,
    pub stride: u64,
}

impl DeckTableLocation {
    pub fn records_offset(&self) -> u64 {
        self.offset + TABLE_HEADER_SIZE as u64
    }

    pub fn records_size(&self) -> u64 {
        self.count as u64 * self.stride
    }
}

/// Reads and validates the deck table header.
pub fn locate<R: Read + Seek>(image: &mut GameImage<R>, layout: &Layout) -> Result<DeckTableLocation> {
    let table = &layout.deck_table;
    let header = image.read_at(table.address, TABLE_HEADER_SIZE)?;

    let expected = table.magic_bytes();
    let found = [header[0], header[1], header[2], header[3]];
    if found != expected {
        return Err(FormatError::Magic { table: TableKind::Deck, expected, found }.into());
    }

    let location = DeckTableLocation { offset: table.address, count: header[0x4] as usize, stride: DECK_SIZE as u64 };
    let size = location.records_size();
    if size > table.max_size {
        return Err(FormatError::TooLarge { table: TableKind::Deck, size, max: table.max_size }.into());
    }
    image.check_bounds(location.records_offset(), size)?;

    log::info!("Deck table at {:#x}: {} decks", location.offset, location.count);
    Ok(location)
}

/// Decodes every deck of a located deck table, stopping at the first bad one.
pub fn build<R: Read + Seek>(image: &mut GameImage<R>, location: &DeckTableLocation) -> Result<DeckTable> {
    let region = image.read_at(location.records_offset(), location.records_size() as usize)?;

    let table = region
        .chunks_exact(location.stride as usize)
        .enumerate()
        .map(|(index, entry)| -> Result<DeckRecord> {
            let deck =
                Deck::parse(entry).map_err(|source| ExtractError::MalformedRecord { table: TableKind::Deck, index, source })?;
            log::trace!("Deck #{}: {:?} ({})", index, deck.name, deck.owner);
            Ok(DeckRecord { id: index as u16, deck })
        })
        .collect::<Result<DeckTable>>()?;

    log::info!("Decoded {} decks", table.len());
    Ok(table)
}

/// Deck card ids with no matching card, as `(deck id, card id)` pairs.
pub fn dangling_cards(decks: &DeckTable, cards: &CardTable) -> Vec<(u16, u16)> {
    decks
        .iter()
        .flat_map(|record| record.deck.cards.iter().map(move |&card| (record.id, card)))
        .filter(|&(_, card)| usize::from(card) >= cards.len())
        .collect()
}
