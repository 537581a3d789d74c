//! Platform abstraction layer
//!
//! Browser-independent pieces of input handling. The event listeners
//! themselves live in the wasm entry point; they only translate DOM events
//! through the functions here.

pub mod input;

pub use input::{Command, command_for_key, direction_for_tap, parse_direction, to_world};
