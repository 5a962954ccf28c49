use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::card::property::{byte_enum, maybe};
use crate::error::RecordError;
use crate::text::read_null_ascii;

pub const DECK_CARDS: usize = 30;

const CARDS: Range<usize> = 0x00..0x3c;
const NAME: Range<usize> = 0x3c..0x4f;
const OWNER: Range<usize> = 0x4f..0x64;
const UNKNOWN_64: Range<usize> = 0x64..0x68;
const BATTLE_MUSIC: usize = 0x68;
const POLYGON_MUSIC: usize = 0x69;
const CITY: usize = 0x6a;
const UNKNOWN_6A: usize = 0x6b;
const EXPERIENCE: usize = 0x6c;
const ARMOR_EVO: usize = 0x6d;

byte_enum! {
    pub enum City {
        Starter = 32,
        Fire = 33,
        Jungle = 34,
        Ice = 35,
        Junk = 36,
        Dark = 37,
        Pyramid = 38,
        Desert = 39,
        Cloud = 40,
        Road = 41,
        WisemanTower = 42,
        InfinityTower = 43,
    }
}

byte_enum! {
    pub enum ArmorEvo {
        First = 1,
        Second = 2,
        Third = 3,
    }
}

byte_enum! {
    pub enum Music {
        BattleProtag = 46,
        BattleWorm = 47,
        BattleBasic = 143,
        BattleVillain = 144,
        PolygonProtag = 37,
        PolygonWorm = 44,
        PolygonBasic = 147,
        PolygonVillain = 148,
    }
}

/// A preset opponent deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Deck {
    pub name: String,
    /// Digimon who plays this deck.
    pub owner: String,
    /// Card table ids.
    pub cards: [u16; DECK_CARDS],
    /// Experience gained by beating this deck.
    pub experience: u8,
    pub city: Option<City>,
    pub armor_evo: Option<ArmorEvo>,
    pub battle_music: Option<Music>,
    pub polygon_music: Option<Music>,
    pub unknown_64: [u8; 4],
    pub unknown_6a: u8,
}

impl Deck {
    pub fn parse(data: &[u8]) -> Result<Self, RecordError> {
        let mut cards = [0u16; DECK_CARDS];
        LittleEndian::read_u16_into(&data[CARDS], &mut cards);
        let mut unknown_64 = [0u8; 4];
        unknown_64.copy_from_slice(&data[UNKNOWN_64]);

        Ok(Self {
            name: read_null_ascii(&data[NAME]).map_err(|e| e.at("name"))?,
            owner: read_null_ascii(&data[OWNER]).map_err(|e| e.at("owner"))?,
            cards,
            experience: data[EXPERIENCE],
            city: maybe(data[CITY], City::from_byte).map_err(|e| e.at("city"))?,
            armor_evo: maybe(data[ARMOR_EVO], ArmorEvo::from_byte).map_err(|e| e.at("armor_evo"))?,
            battle_music: maybe(data[BATTLE_MUSIC], Music::from_byte).map_err(|e| e.at("battle_music"))?,
            polygon_music: maybe(data[POLYGON_MUSIC], Music::from_byte).map_err(|e| e.at("polygon_music"))?,
            unknown_64,
            unknown_6a: data[UNKNOWN_6A],
        })
    }
}

/// One decoded deck table entry, `id` being its table position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeckRecord {
    pub id: u16,
    #[serde(flatten)]
    pub deck: Deck,
}
