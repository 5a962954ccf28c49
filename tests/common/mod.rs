#![allow(dead_code)]

use std::io::Cursor;

use card_table_forge::layout::{Layout, TableLayout, DECK_SIZE, DIGIMON_SIZE, DIGIVOLVE_SIZE, ITEM_SIZE};
use card_table_forge::GameImage;

pub const CARD_TABLE: usize = 0x7f0;
pub const DECK_TABLE: usize = 0x17c0;
pub const IMAGE_DATA: usize = 4 * 2048;

pub const SYNC: [u8; 12] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// Default layout moved to addresses that fit a small image.
pub fn test_layout() -> Layout {
    let default = Layout::default();
    Layout {
        version: String::from("test"),
        card_table: TableLayout { address: CARD_TABLE as u64, ..default.card_table },
        deck_table: TableLayout { address: DECK_TABLE as u64, ..default.deck_table },
    }
}

fn put(data: &mut [u8], at: usize, bytes: &[u8]) {
    data[at..at + bytes.len()].copy_from_slice(bytes);
}

fn entry(id: u16, card_type: u8, body: Vec<u8>) -> Vec<u8> {
    let mut out = id.to_le_bytes().to_vec();
    out.push(card_type);
    out.extend(body);
    out.push(0);
    out
}

pub fn digimon(id: u16, name: &str, hp: u16) -> Vec<u8> {
    let mut body = vec![0u8; DIGIMON_SIZE];
    put(&mut body, 0x00, name.as_bytes());
    body[0x17] = 0x12; // Ice, Champion
    body[0x18] = 20;
    body[0x19] = 30;
    put(&mut body, 0x1b, &hp.to_le_bytes());
    put(&mut body, 0x1d, &450u16.to_le_bytes());
    put(&mut body, 0x1d + 6, b"Blue Blaster");
    put(&mut body, 0x39 + 6, b"Head Attack");
    put(&mut body, 0x55 + 6, b"Freezing Fang");
    body[0xe1] = 1;
    entry(id, 0, body)
}

pub fn item(id: u16, name: &str) -> Vec<u8> {
    let mut body = vec![0u8; ITEM_SIZE];
    put(&mut body, 0x00, name.as_bytes());
    body[0x89] = 1;
    // Opponent's hand to offline, 2 cards
    put(&mut body, 0x59, &[1, 27]);
    put(&mut body, 0x59 + 0xc, &2u16.to_le_bytes());
    put(&mut body, 0x8a, b"Discard 2");
    entry(id, 1, body)
}

pub fn digivolve(id: u16, name: &str) -> Vec<u8> {
    let mut body = vec![0u8; DIGIVOLVE_SIZE];
    put(&mut body, 0x00, name.as_bytes());
    put(&mut body, 0x15, &[6, 14, 2]);
    entry(id, 2, body)
}

pub fn deck(name: &str, owner: &str, card: u16) -> Vec<u8> {
    let mut out = vec![0u8; DECK_SIZE];
    for i in 0..30 {
        put(&mut out, i * 2, &card.to_le_bytes());
    }
    put(&mut out, 0x3c, name.as_bytes());
    put(&mut out, 0x4f, owner.as_bytes());
    out[0x68] = 46;
    out[0x6a] = 32;
    out[0x6c] = 5;
    out
}

/// Card table bytes: header followed by the given entries.
pub fn card_table(digimons: &[Vec<u8>], items: &[Vec<u8>], digivolves: &[Vec<u8>]) -> Vec<u8> {
    let mut out = b"0ACD".to_vec();
    out.extend((digimons.len() as u16).to_le_bytes());
    out.push(items.len() as u8);
    out.push(digivolves.len() as u8);
    for entry in digimons.iter().chain(items).chain(digivolves) {
        out.extend(entry);
    }
    out
}

pub fn deck_table(decks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = b"30KD".to_vec();
    out.extend([decks.len() as u8, 0, 0, 0]);
    for deck in decks {
        out.extend(deck);
    }
    out
}

/// One Digimon, one Item and one Digivolve. Both tables straddle a sector boundary.
pub fn sample_cards() -> Vec<u8> {
    card_table(&[digimon(0, "Gabumon", 900)], &[item(1, "Mind Wash")], &[digivolve(2, "Sword DV")])
}

pub fn sample_decks() -> Vec<u8> {
    deck_table(&[deck("Starter", "Matt", 0), deck("Frozen", "Ikkakumon", 2)])
}

/// Plain data with both tables at the test layout addresses.
pub fn cooked_data(cards: &[u8], decks: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; IMAGE_DATA];
    put(&mut data, CARD_TABLE, cards);
    put(&mut data, DECK_TABLE, decks);
    data
}

/// Wraps plain data into raw `MODE2/2352` sectors.
pub fn raw(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, chunk) in data.chunks(2048).enumerate() {
        let lba = i + 150;
        let bcd = |v: usize| (((v / 10) << 4) | (v % 10)) as u8;
        out.extend_from_slice(&SYNC);
        out.extend_from_slice(&[bcd(lba / 75 / 60), bcd(lba / 75 % 60), bcd(lba % 75), 2]);
        out.extend_from_slice(&[0, 0, 0x08, 0, 0, 0, 0x08, 0]);
        out.extend_from_slice(chunk);
        out.resize(out.len() + 2048 - chunk.len(), 0);
        out.resize(out.len() + 280, 0);
    }
    out
}

pub fn image(bytes: Vec<u8>) -> GameImage<Cursor<Vec<u8>>> {
    GameImage::from_reader(Cursor::new(bytes)).unwrap()
}

pub fn sample_image() -> GameImage<Cursor<Vec<u8>>> {
    image(raw(&cooked_data(&sample_cards(), &sample_decks())))
}
