//! Single byte card properties.

use serde::Serialize;

use crate::error::FieldError;
use crate::layout::{DIGIMON_SIZE, DIGIVOLVE_SIZE, ITEM_SIZE};

macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn from_byte(byte: u8) -> Result<Self, $crate::error::FieldError> {
                match byte {
                    $($value => Ok($name::$variant),)+
                    byte => Err($crate::error::FieldError::UnknownValue { byte }),
                }
            }
        }
    };
}
pub(crate) use byte_enum;

/// Reads a property stored with `0` meaning "none".
pub fn maybe<T>(byte: u8, parse: fn(u8) -> Result<T, FieldError>) -> Result<Option<T>, FieldError> {
    match byte {
        0 => Ok(None),
        byte => parse(byte).map(Some),
    }
}

byte_enum! {
    pub enum CardType {
        Digimon = 0,
        Item = 1,
        Digivolve = 2,
    }
}

impl CardType {
    /// Size of the card body, without entry header and footer.
    pub fn body_size(self) -> usize {
        match self {
            CardType::Digimon => DIGIMON_SIZE,
            CardType::Item => ITEM_SIZE,
            CardType::Digivolve => DIGIVOLVE_SIZE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Digimon => "digimon",
            CardType::Item => "item",
            CardType::Digivolve => "digivolve",
        }
    }
}

byte_enum! {
    pub enum Speciality {
        Fire = 0,
        Ice = 1,
        Nature = 2,
        Darkness = 3,
        Rare = 4,
    }
}

byte_enum! {
    pub enum Level {
        Rookie = 0,
        Armor = 1,
        Champion = 2,
        Ultimate = 3,
    }
}

byte_enum! {
    pub enum ArrowColor {
        Red = 1,
        Green = 2,
        Blue = 3,
    }
}

byte_enum! {
    pub enum AttackType {
        Circle = 0,
        Triangle = 1,
        Cross = 2,
    }
}

byte_enum! {
    pub enum EffectOperation {
        Addition = 0,
        Subtraction = 1,
        Multiplication = 2,
        Division = 3,
    }
}

byte_enum! {
    /// A value an effect or condition can read from the field.
    pub enum DigimonProperty {
        OwnSpeciality = 1,
        OpnSpeciality = 2,
        OwnHP = 3,
        OpnHP = 4,
        OwnCircleAttack = 5,
        OpnCircleAttack = 6,
        OwnTriangleAttack = 7,
        OpnTriangleAttack = 8,
        OwnCrossAttack = 9,
        OpnCrossAttack = 10,
        OwnAttack = 11,
        OpnAttack = 12,
        OwnLevel = 13,
        OpnLevel = 14,
        OwnAttackType = 17,
        OpnAttackType = 18,
        AttackOrder = 20,
        CardsInOwnHand = 21,
        CardsInOpnHand = 22,
        CardsInOwnDpSlot = 23,
        CardsInOpnDpSlot = 24,
        CardsInOwnOffDeck = 25,
        TempSlot = 26,
        CardsInOwnOnDeck = 27,
        CardsInOpnOnDeck = 28,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerType {
    Opponent,
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    Hand,
    Dp,
    Online,
    Offline,
}
