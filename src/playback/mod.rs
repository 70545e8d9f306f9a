//! Stepping through move sequences for animation and undo.
//!
//! The engine has no notion of time. A caller drives `Playback` one move at
//! a time (for example after each animation finishes) and reads the current
//! state back.

pub mod history;

pub use history::Playback;
