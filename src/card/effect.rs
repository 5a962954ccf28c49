//! Support effects, their conditions and the cross move / digivolve effects.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use super::property::{maybe, AttackType, DigimonProperty, EffectOperation, PlayerType, Slot, Speciality};
use crate::error::FieldError;

pub const CONDITION_SIZE: usize = 0x20;
pub const EFFECT_SIZE: usize = 0x10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CrossMoveEffect {
    AttackFirst,
    AttackToZero(AttackType),
    Counter(AttackType),
    Crash,
    EatUpHP,
    Jamming,
    TripleAgainst(Speciality),
}

impl CrossMoveEffect {
    pub fn from_byte(byte: u8) -> Result<Self, FieldError> {
        use AttackType::*;

        let effect = match byte {
            1 => Self::AttackFirst,
            2 => Self::AttackToZero(Circle),
            3 => Self::AttackToZero(Triangle),
            4 => Self::AttackToZero(Cross),
            5 => Self::Counter(Circle),
            6 => Self::Counter(Triangle),
            7 => Self::Counter(Cross),
            8 => Self::Crash,
            9 => Self::EatUpHP,
            10 => Self::Jamming,
            11 => Self::TripleAgainst(Speciality::Fire),
            12 => Self::TripleAgainst(Speciality::Ice),
            13 => Self::TripleAgainst(Speciality::Nature),
            14 => Self::TripleAgainst(Speciality::Darkness),
            15 => Self::TripleAgainst(Speciality::Rare),
            byte => return Err(FieldError::UnknownValue { byte }),
        };
        Ok(effect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DigivolveEffect {
    DisregardSpecialityLevelDP,
    ArmorToChampionUltimate,
    DisregardSpecialityFor20DP,
    SameLevelWithDPIgnoringSpeciality,
    RookieToUltimate,
    DowngradeArmorToRookie,
    DisregardDPInNonAbnormalStates,
    DowngradeLevelWithHpBoostOnSuccess,
}

impl DigivolveEffect {
    pub fn parse(data: &[u8]) -> Result<Self, FieldError> {
        let bytes = [data[0], data[1], data[2]];
        let effect = match bytes {
            [0, 0, 5] => Self::DisregardSpecialityLevelDP,
            [14, 21, 6] => Self::ArmorToChampionUltimate,
            [12, 16, 0] => Self::DisregardSpecialityFor20DP,
            [10, 16, 3] => Self::SameLevelWithDPIgnoringSpeciality,
            [8, 14, 1] => Self::RookieToUltimate,
            [4, 14, 7] => Self::DowngradeArmorToRookie,
            [6, 14, 2] => Self::DisregardDPInNonAbnormalStates,
            [2, 5, 4] => Self::DowngradeLevelWithHpBoostOnSuccess,
            bytes => return Err(FieldError::UnknownPattern { bytes }),
        };
        Ok(effect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EffectConditionOperation {
    LessThanProperty,
    LessThanNumber,
    MoreThanProperty,
    MoreThanNumber,
    DifferentFromNumber,
    EqualToNumber,
}

impl EffectConditionOperation {
    pub fn from_byte(byte: u8) -> Result<Self, FieldError> {
        match byte {
            0 => Ok(Self::LessThanProperty),
            1 => Ok(Self::LessThanNumber),
            2 => Ok(Self::MoreThanProperty),
            3 => Ok(Self::MoreThanNumber),
            4 => Ok(Self::DifferentFromNumber),
            5 => Ok(Self::EqualToNumber),
            // Only Aquilamon carries this in the retail data
            0xFF => {
                log::warn!("Condition operation byte 0xff read as `EqualToNumber`");
                Ok(Self::EqualToNumber)
            }
            byte => Err(FieldError::UnknownValue { byte }),
        }
    }
}

/// Condition gating a card's support effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EffectCondition {
    /// Whether a false condition is a misfire.
    pub misfire: bool,
    pub property_cmp: DigimonProperty,
    pub arg_property: Option<DigimonProperty>,
    pub arg_num: u16,
    pub operation: EffectConditionOperation,
}

impl EffectCondition {
    /// Parses a condition slot, `None` when the compared property is zero.
    pub fn parse(data: &[u8]) -> Result<Option<Self>, FieldError> {
        if data[0x2] == 0 {
            return Ok(None);
        }

        Ok(Some(Self {
            misfire: data[0x0] != 0,
            property_cmp: DigimonProperty::from_byte(data[0x2])?,
            arg_property: maybe(data[0x8], DigimonProperty::from_byte)?,
            arg_num: LittleEndian::read_u16(&data[0x14..0x16]),
            operation: EffectConditionOperation::from_byte(data[0x1a])?,
        }))
    }
}

/// A support effect.
///
/// Arguments `a`, `b` and `c` are properties, `x` and `y` numbers:
/// - `ChangeProperty`: `property = (a + y) + (c <op> (b + x))`
/// - `SetTempSlot`: `temp = a + (b <op> c)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub enum Effect {
    ChangeProperty {
        property: DigimonProperty,
        a: Option<DigimonProperty>,
        b: Option<DigimonProperty>,
        c: Option<DigimonProperty>,
        x: u16,
        y: u16,
        op: EffectOperation,
    },
    UseAttack {
        player: PlayerType,
        attack: AttackType,
    },
    SetTempSlot {
        a: Option<DigimonProperty>,
        b: Option<DigimonProperty>,
        c: Option<DigimonProperty>,
        op: EffectOperation,
    },
    MoveCards {
        player: PlayerType,
        source: Slot,
        destination: Slot,
        count: u16,
    },
    ShuffleOnlineDeck {
        player: PlayerType,
    },
    VoidOpponentSupportEffect,
    VoidOpponentSupportOptionEffect,
    PickPartnerCard,
    CycleOpponentAttackType,
    KoDigimonRevives {
        health: u16,
    },
    DrawCards {
        player: PlayerType,
        count: u16,
    },
    OwnAttackBecomesEatUpHP,
    AttackFirst {
        player: PlayerType,
    },
}

impl Effect {
    /// Parses an effect slot, `None` when its exists flag is clear.
    pub fn parse(data: &[u8]) -> Result<Option<Self>, FieldError> {
        use PlayerType::{Opponent, Player};
        use Slot::{Dp, Hand, Offline, Online};

        if data[0x0] == 0 {
            return Ok(None);
        }

        let effect_type = data[0x1];
        let a = || maybe(data[0x2], DigimonProperty::from_byte);
        let b = || maybe(data[0x4], DigimonProperty::from_byte);
        let c = || maybe(data[0x6], DigimonProperty::from_byte);
        let x = LittleEndian::read_u16(&data[0xa..0xc]);
        let y = LittleEndian::read_u16(&data[0xc..0xe]);
        let op = || EffectOperation::from_byte(data[0xf]);
        // Low byte of `x`
        let attack = || AttackType::from_byte(data[0xa]);

        let move_cards = |player, source, destination| Self::MoveCards { player, source, destination, count: y };

        let effect = match effect_type {
            0..=13 => Self::ChangeProperty {
                property: DigimonProperty::from_byte(effect_type + 1)?,
                a: a()?,
                b: b()?,
                c: c()?,
                x,
                y,
                op: op()?,
            },
            16 => Self::UseAttack { player: Player, attack: attack()? },
            17 => Self::UseAttack { player: Opponent, attack: attack()? },
            25 => Self::SetTempSlot { a: a()?, b: b()?, c: c()?, op: op()? },
            26 => move_cards(Player, Hand, Offline),
            27 => move_cards(Opponent, Hand, Offline),
            30 => move_cards(Player, Hand, Online),
            31 => move_cards(Opponent, Hand, Online),
            32 => move_cards(Player, Online, Offline),
            33 => move_cards(Opponent, Online, Offline),
            34 => move_cards(Player, Offline, Online),
            35 => move_cards(Opponent, Offline, Online),
            36 => move_cards(Player, Dp, Offline),
            37 => move_cards(Opponent, Dp, Offline),
            42 => Self::ShuffleOnlineDeck { player: Player },
            43 => Self::ShuffleOnlineDeck { player: Opponent },
            44 => Self::VoidOpponentSupportEffect,
            45 => Self::VoidOpponentSupportOptionEffect,
            46 => Self::PickPartnerCard,
            47 => Self::CycleOpponentAttackType,
            48 => Self::KoDigimonRevives { health: y },
            49 => Self::DrawCards { player: Player, count: y },
            50 => Self::DrawCards { player: Opponent, count: y },
            51 => Self::OwnAttackBecomesEatUpHP,
            52 => Self::AttackFirst { player: Player },
            53 => Self::AttackFirst { player: Opponent },
            byte => return Err(FieldError::UnknownValue { byte }),
        };

        Ok(Some(effect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect_bytes(effect_type: u8, a: u8, b: u8, c: u8, x: u16, y: u16, op: u8) -> [u8; EFFECT_SIZE] {
        let mut data = [0u8; EFFECT_SIZE];
        data[0x0] = 1;
        data[0x1] = effect_type;
        data[0x2] = a;
        data[0x4] = b;
        data[0x6] = c;
        data[0xa..0xc].copy_from_slice(&x.to_le_bytes());
        data[0xc..0xe].copy_from_slice(&y.to_le_bytes());
        data[0xf] = op;
        data
    }

    #[test]
    fn absent_effect() {
        let mut data = effect_bytes(0xFF, 0, 0, 0, 0, 0, 0);
        data[0] = 0;
        assert_eq!(Effect::parse(&data), Ok(None));
    }

    #[test]
    fn change_property() {
        // Own HP = (0 + 30) + (opponent hp * (0 + 0))
        let effect = Effect::parse(&effect_bytes(2, 0, 0, 4, 0, 30, 2)).unwrap();
        assert_eq!(
            effect,
            Some(Effect::ChangeProperty {
                property: DigimonProperty::OwnHP,
                a: None,
                b: None,
                c: Some(DigimonProperty::OpnHP),
                x: 0,
                y: 30,
                op: EffectOperation::Multiplication,
            })
        );
    }

    #[test]
    fn argument_effects() {
        assert_eq!(
            Effect::parse(&effect_bytes(17, 0, 0, 0, 0x0102, 0, 0)).unwrap(),
            Some(Effect::UseAttack { player: PlayerType::Opponent, attack: AttackType::Triangle })
        );
        assert_eq!(
            Effect::parse(&effect_bytes(36, 0, 0, 0, 0, 3, 0)).unwrap(),
            Some(Effect::MoveCards {
                player: PlayerType::Player,
                source: Slot::Dp,
                destination: Slot::Offline,
                count: 3,
            })
        );
        assert_eq!(
            Effect::parse(&effect_bytes(48, 0, 0, 0, 0, 500, 0)).unwrap(),
            Some(Effect::KoDigimonRevives { health: 500 })
        );
    }

    #[test]
    fn unknown_effect_type() {
        assert_eq!(Effect::parse(&effect_bytes(28, 0, 0, 0, 0, 0, 0)), Err(FieldError::UnknownValue { byte: 28 }));
        // Operation is only checked where it is used
        assert!(Effect::parse(&effect_bytes(44, 0, 0, 0, 0, 0, 9)).is_ok());
        assert_eq!(Effect::parse(&effect_bytes(0, 0, 0, 0, 0, 0, 9)), Err(FieldError::UnknownValue { byte: 9 }));
    }

    #[test]
    fn effect_json_is_tagged() {
        let json = serde_json::to_value(Effect::DrawCards { player: PlayerType::Player, count: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "DrawCards", "player": "Player", "count": 2}));
    }

    #[test]
    fn conditions() {
        let mut data = [0u8; CONDITION_SIZE];
        assert_eq!(EffectCondition::parse(&data), Ok(None));

        data[0x0] = 1;
        data[0x2] = 3;
        data[0x14] = 40;
        data[0x1a] = 1;
        assert_eq!(
            EffectCondition::parse(&data),
            Ok(Some(EffectCondition {
                misfire: true,
                property_cmp: DigimonProperty::OwnHP,
                arg_property: None,
                arg_num: 40,
                operation: EffectConditionOperation::LessThanNumber,
            }))
        );

        data[0x1a] = 0xFF;
        assert_eq!(
            EffectCondition::parse(&data).unwrap().unwrap().operation,
            EffectConditionOperation::EqualToNumber
        );

        data[0x1a] = 6;
        assert_eq!(EffectCondition::parse(&data), Err(FieldError::UnknownValue { byte: 6 }));
    }

    #[test]
    fn cross_move_and_digivolve() {
        assert_eq!(CrossMoveEffect::from_byte(6), Ok(CrossMoveEffect::Counter(AttackType::Triangle)));
        assert_eq!(CrossMoveEffect::from_byte(16), Err(FieldError::UnknownValue { byte: 16 }));
        assert_eq!(DigivolveEffect::parse(&[8, 14, 1]), Ok(DigivolveEffect::RookieToUltimate));
        assert_eq!(
            DigivolveEffect::parse(&[1, 2, 3]),
            Err(FieldError::UnknownPattern { bytes: [1, 2, 3] })
        );
    }
}
