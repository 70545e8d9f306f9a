//! Cube state: the 54 facelet colors.
//!
//! ## Layout
//!
//! Each face stores 9 facelets in row-major order, read face-on with the
//! face's `NAVIGATION` "up" neighbor above row 0 and its "left" neighbor
//! beside column 0:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! Index 4 is the center facelet. Moves never touch it.
//!
//! ## Immutability
//!
//! `CubeState` is a small `Copy` value. Every engine operation returns a new
//! state, so callers can keep old states around (undo history, playback)
//! without any sharing between them.

use serde::{Deserialize, Serialize};

use super::color::{Color, Facelet};
use super::error::CubeError;
use super::face::{Face, FaceMap};

/// Number of facelets on one face.
pub const FACELETS_PER_FACE: usize = 9;

/// Number of facelets on the whole cube.
pub const TOTAL_FACELETS: usize = 54;

/// Index of the center facelet within a face.
pub const CENTER: usize = 4;

/// The 9 facelets of one face.
pub type FaceGrid = [Facelet; FACELETS_PER_FACE];

/// Complete facelet coloring of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    faces: FaceMap<FaceGrid>,
}

impl CubeState {
    /// Create a solved cube: every face filled with its canonical color.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            faces: FaceMap::new(|face| [Some(Color::for_face(face)); FACELETS_PER_FACE]),
        }
    }

    /// Create an empty cube for manual color entry.
    ///
    /// Every facelet is empty except the centers, which hold their face's
    /// canonical color.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            faces: FaceMap::new(|face| {
                let mut grid = [None; FACELETS_PER_FACE];
                grid[CENTER] = Some(Color::for_face(face));
                grid
            }),
        }
    }

    /// Create a state from explicit face grids.
    #[must_use]
    pub const fn from_faces(faces: FaceMap<FaceGrid>) -> Self {
        Self { faces }
    }

    /// Get all face grids.
    #[must_use]
    pub fn faces(&self) -> &FaceMap<FaceGrid> {
        &self.faces
    }

    /// Get one face grid.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face]
    }

    /// Get a single facelet. Out-of-range indices read as empty.
    #[must_use]
    pub fn facelet(&self, face: Face, index: usize) -> Facelet {
        self.faces[face].get(index).copied().flatten()
    }

    /// Return a copy of this state with one facelet recolored.
    ///
    /// Centers cannot be edited.
    pub fn with_facelet(&self, face: Face, index: usize, color: Facelet) -> Result<Self, CubeError> {
        if index >= FACELETS_PER_FACE {
            return Err(CubeError::FaceletOutOfRange { face, index });
        }
        if index == CENTER {
            return Err(CubeError::CenterLocked(face));
        }
        let mut next = *self;
        next.faces[face][index] = color;
        Ok(next)
    }

    /// Check whether every face is a single uniform color.
    ///
    /// The colors are not compared against the canonical face colors, so a
    /// recolored cube with uniform faces also counts as solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces
            .values()
            .all(|grid| grid.iter().all(|&facelet| facelet == grid[0]))
    }

    /// Iterate over every facelet as `(face, index, facelet)`.
    pub fn facelets(&self) -> impl Iterator<Item = (Face, usize, Facelet)> + '_ {
        self.faces
            .iter()
            .flat_map(|(face, grid)| grid.iter().enumerate().map(move |(i, &f)| (face, i, f)))
    }

    /// Number of non-empty facelets.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.facelets().filter(|(_, _, f)| f.is_some()).count()
    }

    /// Numeric encoding: 0 for empty, `Color::code` otherwise, faces in
    /// `Face::ALL` order.
    #[must_use]
    pub fn to_codes(&self) -> [u8; TOTAL_FACELETS] {
        let mut codes = [0; TOTAL_FACELETS];
        for (slot, (_, _, facelet)) in codes.iter_mut().zip(self.facelets()) {
            *slot = facelet.map_or(0, Color::code);
        }
        codes
    }

    pub(crate) fn faces_mut(&mut self) -> &mut FaceMap<FaceGrid> {
        &mut self.faces
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

fn write_row(f: &mut std::fmt::Formatter<'_>, grid: &FaceGrid, row: usize) -> std::fmt::Result {
    for (i, facelet) in grid[row * 3..row * 3 + 3].iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        match facelet {
            Some(color) => write!(f, "{}", color.letter())?,
            None => f.write_str(".")?,
        }
    }
    Ok(())
}

/// Unfolded net: top above, then left/front/right/back, then bottom.
impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pad = "      ";
        for row in 0..3 {
            f.write_str(pad)?;
            write_row(f, self.face(Face::Top), row)?;
            writeln!(f)?;
        }
        for row in 0..3 {
            for (i, face) in [Face::Left, Face::Front, Face::Right, Face::Back].into_iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write_row(f, self.face(face), row)?;
            }
            writeln!(f)?;
        }
        for row in 0..3 {
            f.write_str(pad)?;
            write_row(f, self.face(Face::Bottom), row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
