//! Move notation tokens.
//!
//! Grammar: `Face [ "'" | "2" ]` with `Face` one of `U D L R F B`.
//!
//! | Token | Meaning |
//! |---|---|
//! | `R` | right face, clockwise quarter turn |
//! | `R'` | right face, counter-clockwise quarter turn |
//! | `R2` | right face, half turn |
//!
//! Tokens serialize as their notation string.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CubeError, Face};

/// Amount and direction of a face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// 90 degrees clockwise (no suffix).
    Clockwise,
    /// 90 degrees counter-clockwise (`'`).
    CounterClockwise,
    /// 180 degrees (`2`).
    Double,
}

impl Turn {
    /// All turn kinds, in notation order (none, `'`, `2`).
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double];

    /// Notation suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }

    /// Number of quarter-turn applications.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Turn::Double => 2,
            _ => 1,
        }
    }

    /// Direction of each quarter turn. Half turns are two clockwise quarters.
    #[must_use]
    pub const fn is_clockwise(self) -> bool {
        !matches!(self, Turn::CounterClockwise)
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }
}

/// A single parsed move, e.g. `U'`.
///
/// ```
/// use cube_engine::core::Face;
/// use cube_engine::moves::{MoveToken, Turn};
///
/// let token: MoveToken = "U'".parse().unwrap();
/// assert_eq!(token, MoveToken::new(Face::Top, Turn::CounterClockwise));
/// assert_eq!(token.inverse().to_string(), "U");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MoveToken {
    pub face: Face,
    pub turn: Turn,
}

impl MoveToken {
    /// Create a move token.
    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Clockwise quarter turn of `face`.
    #[must_use]
    pub const fn clockwise(face: Face) -> Self {
        Self::new(face, Turn::Clockwise)
    }

    /// The move that undoes this one: `R` ↔ `R'`, `R2` ↔ `R2`.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }

    /// All 18 distinct tokens.
    pub fn all() -> impl Iterator<Item = MoveToken> {
        Face::ALL
            .into_iter()
            .flat_map(|face| Turn::ALL.into_iter().map(move |turn| MoveToken::new(face, turn)))
    }
}

impl FromStr for MoveToken {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMoveToken(s.to_string());

        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let turn = match (chars.next(), chars.next()) {
            (None, _) => Turn::Clockwise,
            (Some('\''), None) => Turn::CounterClockwise,
            (Some('2'), None) => Turn::Double,
            _ => return Err(invalid()),
        };
        Ok(Self::new(face, turn))
    }
}

impl TryFrom<String> for MoveToken {
    type Error = CubeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MoveToken> for String {
    fn from(token: MoveToken) -> Self {
        token.to_string()
    }
}

impl std::fmt::Display for MoveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

/// Parse a whitespace-separated move sequence such as `"R U R' U'"`.
pub fn parse_sequence(s: &str) -> Result<Vec<MoveToken>, CubeError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Format moves as a space-separated string.
#[must_use]
pub fn format_sequence(moves: &[MoveToken]) -> String {
    moves
        .iter()
        .map(MoveToken::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The sequence that undoes `moves`: reversed, each move inverted.
#[must_use]
pub fn invert_sequence(moves: &[MoveToken]) -> Vec<MoveToken> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}
