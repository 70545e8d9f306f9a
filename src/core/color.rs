//! Facelet colors.
//!
//! Each of the six colors belongs to exactly one face in the solved state.

use serde::{Deserialize, Serialize};

use super::face::Face;

/// One of the six sticker colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

/// A single facelet: a color, or `None` while the cube is being filled in.
pub type Facelet = Option<Color>;

impl Color {
    /// All colors, ordered to match their home faces in `Face::ALL`.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Orange,
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
    ];

    /// The canonical color of a face in the solved state.
    #[must_use]
    pub const fn for_face(face: Face) -> Color {
        match face {
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Top => Color::White,
            Face::Bottom => Color::Yellow,
            Face::Left => Color::Green,
            Face::Right => Color::Blue,
        }
    }

    /// The face this color belongs to in the solved state.
    #[must_use]
    pub const fn home_face(self) -> Face {
        match self {
            Color::Red => Face::Front,
            Color::Orange => Face::Back,
            Color::White => Face::Top,
            Color::Yellow => Face::Bottom,
            Color::Green => Face::Left,
            Color::Blue => Face::Right,
        }
    }

    /// RGB hex string used for rendering.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#ff0000",
            Color::Orange => "#ff8c00",
            Color::White => "#ffffff",
            Color::Yellow => "#ffff00",
            Color::Green => "#00ff00",
            Color::Blue => "#0000ff",
        }
    }

    /// Look up a color by its hex string (case-insensitive).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(hex))
    }

    /// Display name, e.g. `"Red"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }

    /// Display label including the home face, e.g. `"Red (Front)"`.
    #[must_use]
    pub fn label(self) -> String {
        let face = self.home_face().name();
        let mut chars = face.chars();
        let capitalized: String = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .into_iter()
            .chain(chars)
            .collect();
        format!("{} ({})", self.name(), capitalized)
    }

    /// Single-letter abbreviation used in text dumps.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// Numeric code (1..=6), with 0 reserved for an empty facelet.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.home_face().index() as u8 + 1
    }

    /// Index into `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.home_face().index()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
