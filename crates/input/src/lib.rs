//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`blockfall_types::GameCommand`]s. The
//! mapping is pure so it can be unit-tested without a terminal; key
//! auto-repeat is the terminal's job, not this crate's.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
