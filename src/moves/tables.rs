//! Facelet permutation tables for quarter turns.
//!
//! A quarter turn of face X does two things:
//!
//! 1. Rotates X's own grid. Destination `i` reads from source
//!    `ROTATE_CW[i]` (or `ROTATE_CCW[i]`).
//! 2. Cycles the strip of 3 facelets bordering X on each of its 4 neighbors.
//!
//! `ADJACENT_STRIPS[X]` lists those 4 strips in clockwise order, as seen
//! looking at X. On a clockwise turn the contents of strip `k` move to strip
//! `k + 1` (mod 4), position-aligned: facelet `strip[k].indices[j]` lands on
//! `strip[k + 1].indices[j]`. A counter-clockwise turn runs the cycle
//! backwards.

use crate::core::{Face, FaceMap};

/// Clockwise 90° rotation of a 3x3 grid: `new[i] = old[ROTATE_CW[i]]`.
pub const ROTATE_CW: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Counter-clockwise 90° rotation of a 3x3 grid: `new[i] = old[ROTATE_CCW[i]]`.
pub const ROTATE_CCW: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Three facelets on one face, ordered to line up with the other strips of
/// the same cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeStrip {
    pub face: Face,
    pub indices: [usize; 3],
}

const fn strip(face: Face, indices: [usize; 3]) -> EdgeStrip {
    EdgeStrip { face, indices }
}

/// The four neighbor strips of each face, in clockwise cycle order.
pub const ADJACENT_STRIPS: FaceMap<[EdgeStrip; 4]> = FaceMap::from_array([
    // front
    [
        strip(Face::Top, [6, 7, 8]),
        strip(Face::Right, [0, 3, 6]),
        strip(Face::Bottom, [2, 1, 0]),
        strip(Face::Left, [8, 5, 2]),
    ],
    // back
    [
        strip(Face::Top, [0, 1, 2]),
        strip(Face::Left, [6, 3, 0]),
        strip(Face::Bottom, [8, 7, 6]),
        strip(Face::Right, [2, 5, 8]),
    ],
    // top
    [
        strip(Face::Back, [0, 1, 2]),
        strip(Face::Right, [0, 1, 2]),
        strip(Face::Front, [0, 1, 2]),
        strip(Face::Left, [0, 1, 2]),
    ],
    // bottom
    [
        strip(Face::Front, [6, 7, 8]),
        strip(Face::Right, [6, 7, 8]),
        strip(Face::Back, [6, 7, 8]),
        strip(Face::Left, [6, 7, 8]),
    ],
    // left
    [
        strip(Face::Top, [0, 3, 6]),
        strip(Face::Front, [0, 3, 6]),
        strip(Face::Bottom, [0, 3, 6]),
        strip(Face::Back, [8, 5, 2]),
    ],
    // right
    [
        strip(Face::Top, [2, 5, 8]),
        strip(Face::Back, [6, 3, 0]),
        strip(Face::Bottom, [2, 5, 8]),
        strip(Face::Front, [2, 5, 8]),
    ],
]);
