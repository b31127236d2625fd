//! Dimension and trait vocabulary shared by every scoring stage.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::MbtiError;

/// Number of questions in a complete test (three per dimension)
pub const QUESTION_COUNT: usize = 12;

/// Questions asked per dimension
pub const QUESTIONS_PER_DIMENSION: usize = 3;

/// Placeholder emitted in partial labels for dimensions not yet unlocked
pub const PLACEHOLDER: char = 'X';

/// One of the four independent binary personality axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "EI")]
    Ei,
    #[serde(rename = "SN")]
    Sn,
    #[serde(rename = "TF")]
    Tf,
    #[serde(rename = "JP")]
    Jp,
}

impl Dimension {
    /// All dimensions in label order
    pub const ALL: [Dimension; 4] = [Dimension::Ei, Dimension::Sn, Dimension::Tf, Dimension::Jp];

    /// Map a zero-based question index to its dimension.
    ///
    /// Indices 0-2 probe EI, 3-5 SN, 6-8 TF and 9-11 JP. Anything past the
    /// last question has no dimension.
    pub fn for_question(index: usize) -> Option<Self> {
        Self::ALL.get(index / QUESTIONS_PER_DIMENSION).copied()
    }

    /// Position of this dimension in the four-letter label
    pub const fn position(self) -> usize {
        match self {
            Self::Ei => 0,
            Self::Sn => 1,
            Self::Tf => 2,
            Self::Jp => 3,
        }
    }

    /// The two opposing traits, in label order
    pub const fn traits(self) -> (Trait, Trait) {
        match self {
            Self::Ei => (Trait::E, Trait::I),
            Self::Sn => (Trait::S, Trait::N),
            Self::Tf => (Trait::T, Trait::F),
            Self::Jp => (Trait::J, Trait::P),
        }
    }

    /// Answer count that unlocks this dimension in a partial result
    pub const fn unlock_threshold(self) -> usize {
        (self.position() + 1) * QUESTIONS_PER_DIMENSION
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ei => "EI",
            Self::Sn => "SN",
            Self::Tf => "TF",
            Self::Jp => "JP",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = MbtiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EI" | "IE" => Ok(Self::Ei),
            "SN" | "NS" => Ok(Self::Sn),
            "TF" | "FT" => Ok(Self::Tf),
            "JP" | "PJ" => Ok(Self::Jp),
            other => Err(MbtiError::InvalidDimension(other.to_string())),
        }
    }
}

/// One pole of a dimension
///
/// Declaration order is the canonical `EISNTFJP` order used when scores are
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trait {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Trait {
    pub const ALL: [Trait; 8] = [
        Trait::E,
        Trait::I,
        Trait::S,
        Trait::N,
        Trait::T,
        Trait::F,
        Trait::J,
        Trait::P,
    ];

    /// The dimension owning this trait
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::E | Self::I => Dimension::Ei,
            Self::S | Self::N => Dimension::Sn,
            Self::T | Self::F => Dimension::Tf,
            Self::J | Self::P => Dimension::Jp,
        }
    }

    /// The opposing trait of the same dimension
    pub const fn opposite(self) -> Self {
        match self {
            Self::E => Self::I,
            Self::I => Self::E,
            Self::S => Self::N,
            Self::N => Self::S,
            Self::T => Self::F,
            Self::F => Self::T,
            Self::J => Self::P,
            Self::P => Self::J,
        }
    }

    /// Slot in an eight-wide accumulator
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Trait {
    type Err = MbtiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| label.len() == 1 && label.eq_ignore_ascii_case(&t.to_string()))
            .ok_or_else(|| MbtiError::InvalidTrait(label.to_string()))
    }
}

/// Which side of a dimension wins when both totals are equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// E, S, T, J win ties
    FirstTrait,
    /// I, N, F, P win ties
    #[default]
    SecondTrait,
}

impl TieBreak {
    /// Pick the winning trait of `dimension` given both totals
    pub fn resolve(self, dimension: Dimension, first_total: u32, second_total: u32) -> Trait {
        let (first, second) = dimension.traits();
        match first_total.cmp(&second_total) {
            std::cmp::Ordering::Greater => first,
            std::cmp::Ordering::Less => second,
            std::cmp::Ordering::Equal => match self {
                Self::FirstTrait => first,
                Self::SecondTrait => second,
            },
        }
    }
}
