//! Validation of user-entered colorings.

pub mod report;

pub use report::{validate_cube, ColorCounts, CubeValidation, ValidationIssue};
