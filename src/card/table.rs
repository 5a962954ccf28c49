use std::io::{Read, Seek};

use byteorder::{ByteOrder, LittleEndian};

use super::property::CardType;
use super::record::CardRecord;
use crate::error::{ExtractError, FormatError, Result, TableKind};
use crate::image::GameImage;
use crate::layout::{Layout, TABLE_HEADER_SIZE};

/// All card records in on-disk order.
pub type CardTable = Vec<CardRecord>;

/// A run of same-typed, fixed-width entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub card_type: CardType,
    /// Data address of the first entry.
    pub offset: u64,
    /// Table position of the first entry.
    pub first_index: usize,
    pub count: usize,
    pub stride: u64,
}

impl Section {
    pub fn size(&self) -> u64 {
        self.count as u64 * self.stride
    }

    fn contains(&self, index: usize) -> bool {
        index >= self.first_index && index < self.first_index + self.count
    }
}

/// Where the card table and each of its sections lie in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTableLocation {
    /// Data address of the table header.
    pub offset: u64,
    /// Digimon, item and digivolve sections, back to back.
    pub sections: [Section; 3],
}

impl CardTableLocation {
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.count).sum()
    }

    /// Bytes of entries following the header.
    pub fn records_size(&self) -> u64 {
        self.sections.iter().map(Section::size).sum()
    }

    /// Type and data address of entry `index`.
    pub fn entry(&self, index: usize) -> Option<(CardType, u64)> {
        let section = self.sections.iter().find(|s| s.contains(index))?;
        let offset = section.offset + (index - section.first_index) as u64 * section.stride;
        Some((section.card_type, offset))
    }
}

/// Reads and validates the card table header.
pub fn locate<R: Read + Seek>(image: &mut GameImage<R>, layout: &Layout) -> Result<CardTableLocation> {
    let table = &layout.card_table;
    let header = image.read_at(table.address, TABLE_HEADER_SIZE)?;

    let expected = table.magic_bytes();
    let found = [header[0], header[1], header[2], header[3]];
    if found != expected {
        return Err(FormatError::Magic { table: TableKind::Card, expected, found }.into());
    }

    let counts = [
        (CardType::Digimon, LittleEndian::read_u16(&header[0x4..0x6]) as usize),
        (CardType::Item, header[0x6] as usize),
        (CardType::Digivolve, header[0x7] as usize),
    ];

    let mut offset = table.address + TABLE_HEADER_SIZE as u64;
    let mut first_index = 0;
    let sections = counts.map(|(card_type, count)| {
        let section = Section {
            card_type,
            offset,
            first_index,
            count,
            stride: CardRecord::entry_size(card_type) as u64,
        };
        offset += section.size();
        first_index += count;
        section
    });

    let location = CardTableLocation { offset: table.address, sections };
    let size = location.records_size();
    if size > table.max_size {
        return Err(FormatError::TooLarge { table: TableKind::Card, size, max: table.max_size }.into());
    }
    image.check_bounds(table.address + TABLE_HEADER_SIZE as u64, size)?;

    log::info!(
        "Card table at {:#x}: {} digimon, {} items, {} digivolves",
        location.offset,
        counts[0].1,
        counts[1].1,
        counts[2].1
    );
    Ok(location)
}

/// Decodes every entry of a located card table, stopping at the first bad one.
pub fn build<R: Read + Seek>(image: &mut GameImage<R>, location: &CardTableLocation) -> Result<CardTable> {
    let start = location.offset + TABLE_HEADER_SIZE as u64;
    let region = image.read_at(start, location.records_size() as usize)?;

    let mut table = Vec::with_capacity(location.entry_count());
    for index in 0..location.entry_count() {
        let Some((card_type, offset)) = location.entry(index) else {
            break;
        };
        let begin = (offset - start) as usize;
        let entry = &region[begin..begin + CardRecord::entry_size(card_type)];

        let record = CardRecord::decode(card_type, index, entry)
            .map_err(|source| ExtractError::MalformedRecord { table: TableKind::Card, index, source })?;
        table.push(record);
    }

    log::info!("Decoded {} cards", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TableLayout;
    use std::io::Cursor;

    fn layout_at(address: u64) -> Layout {
        Layout {
            card_table: TableLayout { address, ..Layout::default().card_table },
            ..Layout::default()
        }
    }

    fn image_with_header(address: usize, header: [u8; 8], len: usize) -> GameImage<Cursor<Vec<u8>>> {
        let mut data = vec![0u8; len];
        data[address..address + 8].copy_from_slice(&header);
        GameImage::from_reader(Cursor::new(data)).unwrap()
    }

    #[test]
    fn sections_follow_each_other() {
        let mut image = image_with_header(0x10, *b"0ACD\x02\x00\x01\x03", 0x1000);
        let location = locate(&mut image, &layout_at(0x10)).unwrap();

        assert_eq!(location.entry_count(), 6);
        assert_eq!(location.records_size(), 2 * 0x13c + 0xe2 + 3 * 0x70);
        assert_eq!(location.entry(0), Some((CardType::Digimon, 0x18)));
        assert_eq!(location.entry(1), Some((CardType::Digimon, 0x18 + 0x13c)));
        assert_eq!(location.entry(2), Some((CardType::Item, 0x18 + 2 * 0x13c)));
        assert_eq!(location.entry(5), Some((CardType::Digivolve, 0x18 + 2 * 0x13c + 0xe2 + 2 * 0x70)));
        assert_eq!(location.entry(6), None);
    }

    #[test]
    fn bad_magic() {
        let mut image = image_with_header(0, *b"0ACX\x00\x00\x00\x00", 0x800);
        let err = locate(&mut image, &layout_at(0)).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::InvalidFormat(FormatError::Magic { table: TableKind::Card, found, .. }) if &found == b"0ACX"
        ));
    }

    #[test]
    fn too_many_cards() {
        let mut image = image_with_header(0, *b"0ACD\xff\xff\x00\x00", 0x800);
        let err = locate(&mut image, &layout_at(0)).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidFormat(FormatError::TooLarge { .. })));
    }

    #[test]
    fn records_past_the_end() {
        let mut image = image_with_header(0, *b"0ACD\x10\x00\x00\x00", 0x800);
        let err = locate(&mut image, &layout_at(0)).unwrap_err();
        assert!(matches!(err, ExtractError::OutOfBounds { offset: 8, length: 0x13c0, .. }));
    }

    #[test]
    fn empty_table() {
        let mut image = image_with_header(0, *b"0ACD\x00\x00\x00\x00", 0x800);
        let location = locate(&mut image, &layout_at(0)).unwrap();
        assert_eq!(location.entry_count(), 0);
        assert!(build(&mut image, &location).unwrap().is_empty());
    }
}
