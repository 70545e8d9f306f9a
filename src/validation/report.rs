//! Cube coloring validation.
//!
//! A coloring is valid when all 54 facelets are filled and each of the six
//! colors appears exactly 9 times. Problems are reported as data so a UI can
//! render them (e.g. "Red: 7/9") instead of aborting.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::core::{Color, CubeError, CubeState, FACELETS_PER_FACE, TOTAL_FACELETS};

/// Occurrences of each color across the whole cube.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorCounts {
    counts: [usize; 6],
}

impl ColorCounts {
    /// Count the colors of every filled facelet.
    #[must_use]
    pub fn of(state: &CubeState) -> Self {
        let mut counts = Self::default();
        for color in state.facelets().filter_map(|(_, _, f)| f) {
            counts.counts[color.index()] += 1;
        }
        counts
    }

    /// Iterate over (Color, count) pairs in `Color::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        Color::ALL.into_iter().zip(self.counts.iter().copied())
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Index<Color> for ColorCounts {
    type Output = usize;

    fn index(&self, color: Color) -> &usize {
        &self.counts[color.index()]
    }
}

/// A single reason a coloring is invalid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// Some facelets are still empty.
    Unfilled { remaining: usize },
    /// A color does not appear exactly 9 times.
    ColorCount { color: Color, count: usize },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::Unfilled { remaining } => {
                write!(f, "Please fill all {remaining} remaining squares.")
            }
            ValidationIssue::ColorCount { color, count } => {
                write!(f, "{}: {count}/{FACELETS_PER_FACE}", color.name())
            }
        }
    }
}

/// Result of validating a cube coloring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeValidation {
    /// All 54 facelets filled and every color appears 9 times.
    pub valid: bool,

    /// Per-color occurrence counts.
    pub color_counts: ColorCounts,

    /// Number of non-empty facelets.
    pub total_filled: usize,
}

impl CubeValidation {
    /// Every problem with the coloring: missing facelets first, then each
    /// color with a wrong count.
    #[must_use]
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.total_filled < TOTAL_FACELETS {
            issues.push(ValidationIssue::Unfilled {
                remaining: TOTAL_FACELETS - self.total_filled,
            });
        }
        issues.extend(
            self.color_counts
                .iter()
                .filter(|&(_, count)| count != FACELETS_PER_FACE)
                .map(|(color, count)| ValidationIssue::ColorCount { color, count }),
        );
        issues
    }

    /// User-facing message, or `None` when valid.
    ///
    /// An incomplete cube only reports the number of empty facelets.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if self.valid {
            return None;
        }
        let issues = self.issues();
        if let Some(unfilled @ ValidationIssue::Unfilled { .. }) = issues.first() {
            return Some(unfilled.to_string());
        }
        let counts: Vec<String> = issues.iter().map(ToString::to_string).collect();
        Some(format!("Invalid color counts. {}", counts.join(", ")))
    }

    /// Convert to a `Result`, for callers that gate on validity.
    pub fn ensure_valid(&self) -> Result<(), CubeError> {
        if self.valid {
            Ok(())
        } else {
            Err(CubeError::InvalidCube {
                filled: self.total_filled,
                counts: self.color_counts.iter().collect(),
            })
        }
    }
}

/// Validate a coloring before solving.
#[must_use]
pub fn validate_cube(state: &CubeState) -> CubeValidation {
    let color_counts = ColorCounts::of(state);
    let total_filled = color_counts.total();
    let valid = total_filled == TOTAL_FACELETS
        && color_counts.iter().all(|(_, count)| count == FACELETS_PER_FACE);

    CubeValidation {
        valid,
        color_counts,
        total_filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Face;

    #[test]
    fn test_solved_is_valid() {
        let result = validate_cube(&CubeState::solved());

        assert!(result.valid);
        assert_eq!(result.total_filled, 54);
        for color in Color::ALL {
            assert_eq!(result.color_counts[color], 9);
        }
        assert!(result.issues().is_empty());
        assert_eq!(result.message(), None);
        assert!(result.ensure_valid().is_ok());
    }

    #[test]
    fn test_empty_is_incomplete() {
        let result = validate_cube(&CubeState::empty());

        assert!(!result.valid);
        assert_eq!(result.total_filled, 6);
        assert_eq!(
            result.message().as_deref(),
            Some("Please fill all 48 remaining squares.")
        );
        assert_eq!(result.issues()[0], ValidationIssue::Unfilled { remaining: 48 });
    }

    #[test]
    fn test_wrong_counts() {
        let cube = CubeState::solved()
            .with_facelet(Face::Front, 0, Some(Color::Blue))
            .unwrap()
            .with_facelet(Face::Front, 1, Some(Color::Blue))
            .unwrap();
        let result = validate_cube(&cube);

        assert!(!result.valid);
        assert_eq!(result.total_filled, 54);
        assert_eq!(result.color_counts[Color::Red], 7);
        assert_eq!(result.color_counts[Color::Blue], 11);
        assert_eq!(
            result.message().as_deref(),
            Some("Invalid color counts. Red: 7/9, Blue: 11/9")
        );
    }

    #[test]
    fn test_ensure_valid_error() {
        let err = validate_cube(&CubeState::empty()).ensure_valid().unwrap_err();
        match err {
            CubeError::InvalidCube { filled, counts } => {
                assert_eq!(filled, 6);
                assert_eq!(counts.len(), 6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
