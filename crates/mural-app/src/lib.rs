//! Mural App Library
//!
//! Replays recorded gesture scripts through the engine, for debugging and
//! for reproducing editing sessions outside of a UI.

pub mod script;

pub use script::{replay, run, Options, ReplayError, ReplayReport, Step};
