//! Game engine - the complete state machine.
//!
//! Ties together grid, pieces, factory, collision, scoring, and the drop
//! scheduler. Handles spawning, movement, rotation with wall kicks, gravity,
//! locking, line resolution, and the game-over lifecycle.
//!
//! The engine is single-threaded and frame-driven: input collaborators call
//! commands, the host calls [`GameEngine::tick`] once per frame with the
//! elapsed milliseconds, and renderers read [`GameSnapshot`]s. There is no
//! error taxonomy; invalid moves are rejected silently and `GameOver` is a
//! normal state recoverable via restart.

use arrayvec::ArrayVec;

use crate::collision::is_valid_move;
use crate::factory::PieceFactory;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::scheduler::DropTimer;
use crate::scoring::{drop_interval_ms, drop_points, level_for_lines, line_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use blockfall_types::{GameCommand, GameEvent, BOARD_WIDTH};

/// Horizontal kick offsets tried after a rotation fails in place, in order.
/// Row-only; there is no vertical kick.
const KICK_OFFSETS: [i8; 5] = [0, 1, -1, 2, -2];

/// Most pending signals held between drains. One lock can emit up to three.
pub const EVENT_CAPACITY: usize = 8;

/// The falling-block state machine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    active: Piece,
    next: Piece,
    factory: PieceFactory,
    score: u32,
    lines: u32,
    level: u32,
    drop_timer: DropTimer,
    game_over: bool,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameEngine {
    /// Create an engine with an empty board and the first piece spawned.
    pub fn new(seed: u32) -> Self {
        let mut factory = PieceFactory::new(seed);
        let first = factory.create();
        let mut engine = Self {
            grid: Grid::new(),
            active: first,
            next: first,
            factory,
            score: 0,
            lines: 0,
            level: 1,
            drop_timer: DropTimer::new(drop_interval_ms(1)),
            game_over: false,
            events: ArrayVec::new(),
        };
        engine.spawn_next();
        engine
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn board(&self) -> &Grid {
        &self.grid
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_timer.interval_ms()
    }

    pub fn drop_accumulator_ms(&self) -> u32 {
        self.drop_timer.accumulator_ms()
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Write the current read surface into a caller-owned snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_color_ids(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next = NextSnapshot::from(self.next);
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the next piece to active and draw a fresh one.
    ///
    /// The new active piece is centered at the top of the board. If it
    /// overlaps the stack there, the game is over; the piece stays in place
    /// for rendering and no further piece is drawn into play.
    fn spawn_next(&mut self) {
        let mut piece = self.next;
        piece.x = BOARD_WIDTH as i8 / 2 - piece.width() as i8 / 2;
        piece.y = 0;
        self.active = piece;
        self.next = self.factory.create();

        if !is_valid_move(&self.grid, self.active.shape, self.active.x, self.active.y) {
            self.game_over = true;
            self.push_event(GameEvent::GameOver);
        }
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if self.game_over {
            return false;
        }
        if is_valid_move(&self.grid, self.active.shape, self.active.x + dx, self.active.y) {
            self.active.x += dx;
            return true;
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// One downward step, shared by gravity and soft drop.
    ///
    /// Descends if possible; otherwise locks the piece, resolves lines, and
    /// spawns the next one. Resets the drop timer either way, so a manual
    /// soft drop also postpones the next gravity step.
    fn descend_step(&mut self) -> bool {
        let moved = if is_valid_move(
            &self.grid,
            self.active.shape,
            self.active.x,
            self.active.y + 1,
        ) {
            self.active.y += 1;
            true
        } else {
            self.lock_active();
            self.resolve_lines();
            self.spawn_next();
            false
        };
        self.drop_timer.reset();
        moved
    }

    /// Player-commanded single-step drop. Scores +1 per cell descended;
    /// locks and spawns when the piece cannot descend.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let moved = self.descend_step();
        if moved {
            self.score += drop_points(1, false);
        }
        moved
    }

    /// Drop all the way, then lock and spawn unconditionally.
    ///
    /// Scores +2 per cell descended. Does not touch the drop timer.
    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        while is_valid_move(
            &self.grid,
            self.active.shape,
            self.active.x,
            self.active.y + 1,
        ) {
            self.active.y += 1;
            self.score += drop_points(1, true);
        }
        self.lock_active();
        self.resolve_lines();
        self.spawn_next();
    }

    /// Rotate the active piece 90 degrees clockwise with wall kicks.
    ///
    /// The kick search tries horizontal offsets 0, +1, -1, +2, -2 at the
    /// same row; the first valid one commits. If none fit, the piece is
    /// left untouched.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let rotated = self.active.shape.rotated();
        for offset in KICK_OFFSETS {
            if is_valid_move(&self.grid, rotated, self.active.x + offset, self.active.y) {
                self.active.shape = rotated;
                self.active.x += offset;
                return true;
            }
        }
        false
    }

    /// Advance game time. At most one gravity step fires per call, however
    /// large `elapsed_ms` is; the overshoot is discarded.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }
        if self.drop_timer.advance(elapsed_ms) {
            self.descend_step();
        }
    }

    /// Write the active piece's cells into the grid. Cells above the board
    /// are skipped, matching the spawn tolerance.
    fn lock_active(&mut self) {
        let kind = self.active.kind;
        for (x, y) in self.active.cells() {
            if y >= 0 {
                self.grid.set(x, y, Some(kind));
            }
        }
    }

    /// Clear full rows and apply scoring and level progression.
    ///
    /// The score uses the level in effect before this clear; the level and
    /// drop interval are recomputed afterwards.
    fn resolve_lines(&mut self) {
        let cleared = self.grid.clear_full_rows();
        if cleared == 0 {
            return;
        }

        self.score += line_points(cleared, self.level);
        self.lines += cleared;

        self.push_event(GameEvent::LinesCleared(cleared));
        if cleared == 4 {
            self.push_event(GameEvent::Tetris);
        }

        self.level = level_for_lines(self.lines);
        self.drop_timer.set_interval(drop_interval_ms(self.level));
    }

    /// Rebuild the engine, continuing the factory's random stream.
    pub fn restart(&mut self) {
        let rng_state = self.factory.state();
        *self = Self::new(rng_state);
    }

    /// Dispatch a command from an input collaborator.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::HardDrop => {
                if self.game_over {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameCommand::Rotate => self.rotate(),
            GameCommand::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Drain pending fire-and-forget signals for effects collaborators.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        // Collaborators drain every frame; on overflow the oldest signal is
        // dropped rather than growing or panicking.
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
