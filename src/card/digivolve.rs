use std::ops::Range;

use serde::Serialize;

use super::effect::DigivolveEffect;
use super::parse_description;
use crate::error::RecordError;
use crate::text::read_null_ascii;

const NAME: Range<usize> = 0x00..0x15;
const EFFECT: Range<usize> = 0x15..0x18;
const DESCRIPTION: usize = 0x18;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Digivolve {
    pub name: String,
    pub effect: DigivolveEffect,
    pub effect_description: [String; 4],
}

impl Digivolve {
    pub fn parse(data: &[u8]) -> Result<Self, RecordError> {
        Ok(Self {
            name: read_null_ascii(&data[NAME]).map_err(|e| e.at("name"))?,
            effect: DigivolveEffect::parse(&data[EFFECT]).map_err(|e| e.at("effect"))?,
            effect_description: parse_description(&data[DESCRIPTION..])?,
        })
    }
}
