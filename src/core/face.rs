//! Face identification, view navigation, and per-face data storage.
//!
//! ## Face
//!
//! The six faces of the cube. Each face is read face-on with a fixed "up"
//! direction, given by the `NAVIGATION` table.
//!
//! ## FaceMap
//!
//! Per-face data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Face`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Front,
    Back,
    Top,
    Bottom,
    Left,
    Right,
}

impl Face {
    /// All faces, in storage order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
    ];

    /// Get the storage index of this face (0-based, `ALL` order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the notation letter for turns of this face.
    ///
    /// ```
    /// use cube_engine::core::Face;
    ///
    /// assert_eq!(Face::Top.letter(), 'U');
    /// assert_eq!(Face::from_letter('U'), Some(Face::Top));
    /// ```
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Top => 'U',
            Face::Bottom => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    /// Look up a face by its notation letter.
    ///
    /// Only the uppercase letters `U D L R F B` are recognized.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'U' => Some(Face::Top),
            'D' => Some(Face::Bottom),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            _ => None,
        }
    }

    /// Lowercase face name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Left => "left",
            Face::Right => "right",
        }
    }

    /// The face reached by moving the view in `direction` from this face.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Face {
        NAVIGATION[self].get(direction)
    }

    /// The face directly opposite this one.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// View direction relative to a face's "up".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

/// The four directional neighbors of a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbors {
    pub up: Face,
    pub down: Face,
    pub left: Face,
    pub right: Face,
}

impl Neighbors {
    /// Get the neighbor in the given direction.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> Face {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Face adjacency used for view switching.
///
/// The `up` entry of each face is also the edge that sits along row 0 of
/// that face's facelet grid.
pub const NAVIGATION: FaceMap<Neighbors> = FaceMap::from_array([
    // front
    Neighbors { up: Face::Top, down: Face::Bottom, left: Face::Left, right: Face::Right },
    // back
    Neighbors { up: Face::Top, down: Face::Bottom, left: Face::Right, right: Face::Left },
    // top
    Neighbors { up: Face::Back, down: Face::Front, left: Face::Left, right: Face::Right },
    // bottom
    Neighbors { up: Face::Front, down: Face::Back, left: Face::Left, right: Face::Right },
    // left
    Neighbors { up: Face::Top, down: Face::Bottom, left: Face::Back, right: Face::Front },
    // right
    Neighbors { up: Face::Top, down: Face::Bottom, left: Face::Front, right: Face::Back },
]);

/// Per-face data storage with O(1) access.
///
/// Backed by a `[T; 6]` with one entry per face in `Face::ALL` order.
///
/// ## Example
///
/// ```
/// use cube_engine::core::{Face, FaceMap};
///
/// let mut turns: FaceMap<u32> = FaceMap::new(|_| 0);
/// turns[Face::Right] += 1;
///
/// assert_eq!(turns[Face::Right], 1);
/// assert_eq!(turns[Face::Left], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceMap<T> {
    data: [T; 6],
}

impl<T> FaceMap<T> {
    /// Create a FaceMap from values in `Face::ALL` order.
    #[must_use]
    pub const fn from_array(data: [T; 6]) -> Self {
        Self { data }
    }

    /// Create a FaceMap with values from a factory function.
    pub fn new(factory: impl Fn(Face) -> T) -> Self {
        Self {
            data: Face::ALL.map(factory),
        }
    }

    /// Create a FaceMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Face, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Face, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Face, &mut T)> {
        Face::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over values in `Face::ALL` order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Transform every entry.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> FaceMap<U> {
        FaceMap { data: self.data.map(f) }
    }
}

impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.data[face.index()]
    }
}

impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.data[face.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('X'), None);
        assert_eq!(Face::from_letter('r'), None);
    }

    #[test]
    fn test_navigation_table() {
        assert_eq!(Face::Front.neighbor(Direction::Up), Face::Top);
        assert_eq!(Face::Back.neighbor(Direction::Left), Face::Right);
        assert_eq!(Face::Top.neighbor(Direction::Up), Face::Back);
        assert_eq!(Face::Bottom.neighbor(Direction::Up), Face::Front);
        assert_eq!(Face::Left.neighbor(Direction::Left), Face::Back);
        assert_eq!(Face::Right.neighbor(Direction::Right), Face::Back);
    }

    #[test]
    fn test_navigation_never_self_or_opposite() {
        for face in Face::ALL {
            for direction in Direction::ALL {
                let next = face.neighbor(direction);
                assert_ne!(next, face);
                assert_ne!(next, face.opposite());
            }
        }
    }

    #[test]
    fn test_navigation_opposite_directions_are_opposite_faces() {
        for face in Face::ALL {
            let n = NAVIGATION[face];
            assert_eq!(n.up.opposite(), n.down);
            assert_eq!(n.left.opposite(), n.right);
        }
    }

    #[test]
    fn test_face_map_index() {
        let mut map = FaceMap::new(|f| f.index() * 10);
        assert_eq!(map[Face::Front], 0);
        assert_eq!(map[Face::Right], 50);

        map[Face::Top] = 7;
        assert_eq!(map[Face::Top], 7);
        assert_eq!(map.iter().count(), 6);
    }

    #[test]
    fn test_face_serde() {
        let json = serde_json::to_string(&Face::Bottom).unwrap();
        assert_eq!(json, "\"bottom\"");
        let face: Face = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(face, Face::Left);
    }
}
