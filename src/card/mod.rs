//! The card table: every Digimon, Item and Digivolve card of the game.

pub mod digimon;
pub mod digivolve;
pub mod effect;
pub mod item;
pub mod property;
pub mod record;
pub mod table;

pub use record::{Card, CardRecord};
pub use table::{build, locate, CardTable, CardTableLocation, Section};

use crate::error::RecordError;
use crate::text::read_null_ascii;
use effect::{Effect, EffectCondition, CONDITION_SIZE, EFFECT_SIZE};

const DESCRIPTION_LINE_SIZE: usize = 0x15;

const DESCRIPTION_FIELDS: [&str; 4] = [
    "effect_description[0]",
    "effect_description[1]",
    "effect_description[2]",
    "effect_description[3]",
];
const CONDITION_FIELDS: [&str; 2] = ["condition_first", "condition_second"];
const EFFECT_FIELDS: [&str; 3] = ["effect_first", "effect_second", "effect_third"];

/// Four consecutive description lines starting at `data[0]`.
fn parse_description(data: &[u8]) -> Result<[String; 4], RecordError> {
    let line = |i: usize| {
        let start = i * DESCRIPTION_LINE_SIZE;
        read_null_ascii(&data[start..start + DESCRIPTION_LINE_SIZE]).map_err(|e| e.at(DESCRIPTION_FIELDS[i]))
    };
    Ok([line(0)?, line(1)?, line(2)?, line(3)?])
}

/// Two consecutive condition slots starting at `data[0]`.
fn parse_conditions(data: &[u8]) -> Result<[Option<EffectCondition>; 2], RecordError> {
    let slot = |i: usize| {
        let start = i * CONDITION_SIZE;
        EffectCondition::parse(&data[start..start + CONDITION_SIZE]).map_err(|e| e.at(CONDITION_FIELDS[i]))
    };
    Ok([slot(0)?, slot(1)?])
}

/// Three consecutive effect slots starting at `data[0]`.
fn parse_effects(data: &[u8]) -> Result<[Option<Effect>; 3], RecordError> {
    let slot = |i: usize| {
        let start = i * EFFECT_SIZE;
        Effect::parse(&data[start..start + EFFECT_SIZE]).map_err(|e| e.at(EFFECT_FIELDS[i]))
    };
    Ok([slot(0)?, slot(1)?, slot(2)?])
}
