use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use super::effect::{Effect, EffectCondition};
use super::property::{maybe, ArrowColor};
use super::{parse_conditions, parse_description, parse_effects};
use crate::error::RecordError;
use crate::text::read_null_ascii;

const NAME: Range<usize> = 0x00..0x15;
const UNKNOWN_15: Range<usize> = 0x15..0x19;
const CONDITIONS: usize = 0x19;
const EFFECTS: usize = 0x59;
const ARROW_COLOR: usize = 0x89;
const DESCRIPTION: usize = 0x8a;

/// An item card, played from the hand for its support effects only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    pub name: String,
    pub effect_description: [String; 4],
    pub effect_arrow_color: Option<ArrowColor>,
    pub effect_conditions: [Option<EffectCondition>; 2],
    pub effects: [Option<Effect>; 3],
    pub unknown_15: u32,
}

impl Item {
    pub fn parse(data: &[u8]) -> Result<Self, RecordError> {
        Ok(Self {
            name: read_null_ascii(&data[NAME]).map_err(|e| e.at("name"))?,
            effect_description: parse_description(&data[DESCRIPTION..])?,
            effect_arrow_color: maybe(data[ARROW_COLOR], ArrowColor::from_byte)
                .map_err(|e| e.at("effect_arrow_color"))?,
            effect_conditions: parse_conditions(&data[CONDITIONS..])?,
            effects: parse_effects(&data[EFFECTS..])?,
            unknown_15: LittleEndian::read_u32(&data[UNKNOWN_15]),
        })
    }
}
