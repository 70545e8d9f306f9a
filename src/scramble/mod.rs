//! Scramble generation.

pub mod generator;

pub use generator::{
    generate_scramble, generate_scramble_with, generate_scrambled_cube, scrambled_cube_with, Scramble,
};
