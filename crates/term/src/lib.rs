//! Terminal rendering for the game.
//!
//! A small game-oriented rendering layer: the engine's snapshot is mapped
//! into a character framebuffer ([`GameView`]), which is then flushed to
//! the terminal with diffing ([`TerminalRenderer`]). No widget/layout
//! framework; the framebuffer gives precise control over the cell aspect
//! ratio (2 columns per board cell by default).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
