//! Core game engine - pure, deterministic, and testable
//!
//! All the game rules live here, with zero dependencies on UI or I/O:
//!
//! - **Deterministic**: the same seed produces the identical piece stream
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs in any host (terminal, headless, benchmarks)
//! - **Fast**: fixed-size arrays and no allocation on the game tick path
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 board of locked blocks with line clearing
//! - [`piece`]: tetromino shapes and the square-box rotation transform
//! - [`factory`]: seeded uniform-random piece generation
//! - [`collision`]: the single placement-validity predicate
//! - [`scoring`]: line/drop points, level progression, gravity intervals
//! - [`scheduler`]: the fixed-interval drop timer
//! - [`engine`]: the state machine tying everything together
//! - [`snapshot`]: the immutable per-frame read surface for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is an independent uniform draw over
//!   the seven kinds; repeats are allowed (no bag, no history)
//! - **Transform rotation**: 90-degree turns of the piece's square bounding box,
//!   with a row-only wall-kick search (offsets 0, +1, -1, +2, -2)
//! - **Gravity**: one unscored row per interval; the interval shrinks 50ms
//!   per level down to a 100ms floor
//! - **Scoring**: 100/300/500/800 per 1-4 line clear times the level, +1
//!   per soft-dropped cell, +2 per hard-dropped cell
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_types::GameCommand;
//!
//! // Create a game with a fixed seed
//! let mut game = GameEngine::new(12345);
//!
//! // Apply commands from the input collaborator
//! game.apply(GameCommand::MoveLeft);
//! game.apply(GameCommand::Rotate);
//! game.apply(GameCommand::HardDrop);
//!
//! // Check game state
//! assert!(game.score() > 0); // hard drop awards points per cell
//! ```
//!
//! Call [`GameEngine::tick`] every frame with the elapsed milliseconds to
//! drive gravity.

pub mod collision;
pub mod engine;
pub mod factory;
pub mod grid;
pub mod piece;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use collision::is_valid_move;
pub use engine::{GameEngine, EVENT_CAPACITY};
pub use factory::{PieceFactory, SimpleRng};
pub use grid::Grid;
pub use piece::{Piece, Shape};
pub use scheduler::DropTimer;
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
