use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use super::effect::{CrossMoveEffect, Effect, EffectCondition};
use super::property::{maybe, ArrowColor, Level, Speciality};
use super::{parse_conditions, parse_description, parse_effects};
use crate::error::{FieldError, RecordError};
use crate::text::read_null_ascii;

// Digimon body
const NAME: Range<usize> = 0x00..0x15;
const UNKNOWN_15: Range<usize> = 0x15..0x17;
const SPECIALITY_LEVEL: usize = 0x17;
const DP_COST: usize = 0x18;
const DP_GIVE: usize = 0x19;
const UNKNOWN_1A: usize = 0x1a;
const HP: Range<usize> = 0x1b..0x1d;
const MOVE_CIRCLE: Range<usize> = 0x1d..0x39;
const MOVE_TRIANGLE: Range<usize> = 0x39..0x55;
const MOVE_CROSS: Range<usize> = 0x55..0x71;
const CONDITIONS: usize = 0x71;
const EFFECTS: usize = 0xb1;
const CROSS_MOVE_EFFECT: usize = 0xe1;
const UNKNOWN_E2: usize = 0xe2;
const ARROW_COLOR: usize = 0xe3;
const DESCRIPTION: usize = 0xe4;

// Move
const MOVE_POWER: Range<usize> = 0x0..0x2;
const MOVE_UNKNOWN: Range<usize> = 0x2..0x6;
const MOVE_NAME: Range<usize> = 0x6..0x1c;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub name: String,
    pub power: u16,
    pub unknown: u32,
}

impl Move {
    pub fn parse(data: &[u8]) -> Result<Self, FieldError> {
        Ok(Self {
            name: read_null_ascii(&data[MOVE_NAME])?,
            power: LittleEndian::read_u16(&data[MOVE_POWER]),
            unknown: LittleEndian::read_u32(&data[MOVE_UNKNOWN]),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Digimon {
    pub name: String,
    pub speciality: Speciality,
    pub level: Level,
    pub hp: u16,
    /// DP needed to play the card.
    pub dp_cost: u8,
    /// DP gained when the card is discarded, `+P` in game.
    pub dp_give: u8,
    pub move_circle: Move,
    pub move_triangle: Move,
    pub move_cross: Move,
    pub cross_move_effect: Option<CrossMoveEffect>,
    pub effect_description: [String; 4],
    pub effect_arrow_color: Option<ArrowColor>,
    pub effect_conditions: [Option<EffectCondition>; 2],
    pub effects: [Option<Effect>; 3],
    pub unknown_15: u16,
    pub unknown_1a: u8,
    pub unknown_e2: u8,
}

impl Digimon {
    pub fn parse(data: &[u8]) -> Result<Self, RecordError> {
        let speciality_level = data[SPECIALITY_LEVEL];

        Ok(Self {
            name: read_null_ascii(&data[NAME]).map_err(|e| e.at("name"))?,
            speciality: Speciality::from_byte(speciality_level >> 4).map_err(|e| e.at("speciality"))?,
            level: Level::from_byte(speciality_level & 0x0F).map_err(|e| e.at("level"))?,
            hp: LittleEndian::read_u16(&data[HP]),
            dp_cost: data[DP_COST],
            dp_give: data[DP_GIVE],
            move_circle: Move::parse(&data[MOVE_CIRCLE]).map_err(|e| e.at("move_circle"))?,
            move_triangle: Move::parse(&data[MOVE_TRIANGLE]).map_err(|e| e.at("move_triangle"))?,
            move_cross: Move::parse(&data[MOVE_CROSS]).map_err(|e| e.at("move_cross"))?,
            cross_move_effect: maybe(data[CROSS_MOVE_EFFECT], CrossMoveEffect::from_byte)
                .map_err(|e| e.at("cross_move_effect"))?,
            effect_description: parse_description(&data[DESCRIPTION..])?,
            effect_arrow_color: maybe(data[ARROW_COLOR], ArrowColor::from_byte)
                .map_err(|e| e.at("effect_arrow_color"))?,
            effect_conditions: parse_conditions(&data[CONDITIONS..])?,
            effects: parse_effects(&data[EFFECTS..])?,
            unknown_15: LittleEndian::read_u16(&data[UNKNOWN_15]),
            unknown_1a: data[UNKNOWN_1A],
            unknown_e2: data[UNKNOWN_E2],
        })
    }
}
