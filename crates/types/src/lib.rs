//! Shared types and constants for the blockfall workspace.
//!
//! Pure data with no dependencies. Everything the engine and its
//! collaborators (input, rendering) need to agree on lives here.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Timing and Scoring Constants
//!
//! All timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame pacing for the terminal runner (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_MS_PER_LEVEL` | 50 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Gravity floor, reached at level 19 |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level advance |
//!
//! Line clears pay `LINE_SCORES[rows] * level` (100/300/500/800 for 1-4
//! rows); soft and hard drops pay 1 and 2 points per cell descended.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameCommand, PieceKind, BOARD_WIDTH};
//!
//! let kind = PieceKind::T;
//! assert_eq!(kind.color_id(), 3);
//! assert_eq!(kind.box_size(), 3);
//!
//! assert_eq!(GameCommand::from_str("hardDrop"), Some(GameCommand::HardDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Board dimensions in cells.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Frame pacing for the terminal runner (milliseconds).
pub const TICK_MS: u32 = 16;

/// Gravity timing: base interval, per-level speedup, and the floor.
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_MS_PER_LEVEL: u32 = 50;
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Level progression: one level per this many cleared lines.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base points, indexed by rows cleared in one lock (1-4).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Drop bonuses, per cell descended.
pub const SOFT_DROP_POINTS: u32 = 1;
pub const HARD_DROP_POINTS: u32 = 2;

/// Tetromino piece kinds, in color-id order (Z = 1 .. I = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Z,
    S,
    T,
    O,
    L,
    J,
    I,
}

impl PieceKind {
    /// All seven kinds, in color-id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
    ];

    /// Integer color-id used in grid snapshots (1..=7; 0 is empty).
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::Z => 1,
            PieceKind::S => 2,
            PieceKind::T => 3,
            PieceKind::O => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
            PieceKind::I => 7,
        }
    }

    /// Inverse of [`color_id`](Self::color_id); `0` and anything above 7
    /// have no kind.
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::Z),
            2 => Some(PieceKind::S),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::L),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::I),
            _ => None,
        }
    }

    /// Side length of the kind's square bounding box.
    pub fn box_size(&self) -> usize {
        match self {
            PieceKind::O => 2,
            PieceKind::I => 4,
            _ => 3,
        }
    }

    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
        }
    }

    /// Parse piece kind from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "i" => Some(PieceKind::I),
            _ => None,
        }
    }
}

/// Cell on the board (None = empty, Some = locked block of that kind).
pub type Cell = Option<PieceKind>;

/// Discrete commands input collaborators send to the engine.
///
/// The time-driven entry point, `tick(elapsed_ms)`, is not a command; the
/// frame loop calls it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Restart,
}

impl GameCommand {
    /// Parse command from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "harddrop" => Some(GameCommand::HardDrop),
            "rotate" => Some(GameCommand::Rotate),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::Restart => "restart",
        }
    }
}

/// Fire-and-forget signals for effects collaborators.
///
/// Draining these never changes engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Rows removed by one lock (1 or more).
    LinesCleared(u32),
    /// Exactly four rows cleared in one lock.
    Tetris,
    /// A freshly spawned piece overlapped the stack.
    GameOver,
}
