//! Game state module - manages the complete game state
//!
//! This module ties together the board, the piece catalog and the rotation
//! resolver. It owns gravity (counted in frames), locking, line clears,
//! scoring and the running/paused/over lifecycle.
//!
//! Every command replaces the active piece with a freshly built copy, and
//! each operation completes before returning, so a snapshot taken between
//! calls is always consistent.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::pieces::{random_kind, spawn_piece};
use crate::rotation;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Footprint for the current rotation state
    pub shape: Shape,
    pub rotation: Rotation,
    /// Board column of the shape's top-left cell
    pub x: i8,
    /// Board row of the shape's top-left cell (may be negative)
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        spawn_piece(kind)
    }

    /// Occupied cells in board coordinates, as `(x, y, kind)`.
    ///
    /// Coordinates saturate at the `i8` range instead of overflowing.
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        self.shape
            .blocks()
            .map(move |(dx, dy, kind)| {
                (self.x.saturating_add(dx), self.y.saturating_add(dy), kind)
            })
    }

    /// Copy translated by (dx, dy), or `None` if the position overflows `i8`
    pub fn shifted(&self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Absent only once the game is over
    active: Option<Tetromino>,
    drop_tick: u32,
    drop_delay: u32,
    score: u32,
    status: GameStatus,
    rng: StdRng,
}

impl GameState {
    /// Create a new paused game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let active = spawn_piece(random_kind(&mut rng));

        Self {
            board: Board::new(),
            active: Some(active),
            drop_tick: 0,
            drop_delay: DROP_DELAY_TICKS,
            score: 0,
            status: GameStatus::Paused,
            rng,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    fn running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn drop_tick(&self) -> u32 {
        self.drop_tick
    }

    pub fn drop_delay(&self) -> u32 {
        self.drop_delay
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access (test setups and replays)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active_mut(&mut self) -> Option<&mut Tetromino> {
        self.active.as_mut()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.drop_tick = self.drop_tick;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the active piece with a new random one at the spawn position.
    ///
    /// No fit check: a blocked spawn locks on its first gravity step and tops out.
    fn spawn_piece(&mut self) {
        let kind = random_kind(&mut self.rng);
        self.active = Some(spawn_piece(kind));
        tracing::trace!(kind = kind.as_str(), "spawned piece");
    }

    /// Advance one frame.
    ///
    /// Counts toward the next gravity step; on the step, the piece falls one
    /// row or, when blocked, locks. Returns true when a gravity step ran.
    pub fn tick(&mut self) -> bool {
        if !self.running() {
            return false;
        }

        self.drop_tick += 1;
        if self.drop_tick < self.drop_delay {
            return false;
        }
        self.drop_tick = 0;

        let Some(active) = self.active else {
            return false;
        };

        match active.shifted(0, 1).filter(|moved| self.board.fits(moved)) {
            Some(moved) => self.active = Some(moved),
            None => self.lock_piece(active),
        }

        true
    }

    /// Merge the piece, clear lines, score, then either top out or spawn.
    fn lock_piece(&mut self, piece: Tetromino) {
        self.board.merge(&piece);

        let cleared = self.board.clear_lines().len() as u32;
        if cleared > 0 {
            self.score = self.score.saturating_add(LINE_CLEAR_POINTS * cleared);
            tracing::debug!(lines = cleared, score = self.score, "lines cleared");
        }

        tracing::debug!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "piece locked");

        if self.board.is_row_occupied(0) {
            self.active = None;
            self.status = GameStatus::Over;
            tracing::info!(score = self.score, "game over");
        } else {
            self.spawn_piece();
        }
    }

    /// Translate the active piece if the result fits
    pub fn move_by(&mut self, dx: i8, dy: i8) -> bool {
        if !self.running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match active.shifted(dx, dy) {
            Some(moved) if self.board.fits(&moved) => {
                self.active = Some(moved);
                true
            }
            _ => false,
        }
    }

    /// Rotate the active piece clockwise with SRS wall kicks
    pub fn rotate(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match rotation::try_rotate(&self.board, &active) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Move the active piece to the lowest row it fits in.
    ///
    /// Does not lock; locking happens on the next gravity step.
    pub fn hard_drop(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        let Some(mut active) = self.active else {
            return false;
        };

        while let Some(moved) = active.shifted(0, 1).filter(|m| self.board.fits(m)) {
            active = moved;
        }

        self.active = Some(active);
        true
    }

    /// Running -> Paused
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::Paused;
        tracing::info!("paused");
        true
    }

    /// Paused -> Running
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Running;
        tracing::info!("resumed");
        true
    }

    /// Toggle between running and paused; no-op once over
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Over => false,
        }
    }

    /// Replace the whole state with a fresh running game.
    ///
    /// The RNG keeps advancing, so a restart does not replay the previous game.
    pub fn restart(&mut self) {
        let seed = rand::Rng::gen(&mut self.rng);
        *self = Self::new(seed);
        self.status = GameStatus::Running;
        tracing::info!("restarted");
    }

    /// Pointer click: restart when over, otherwise toggle pause
    pub fn click(&mut self) -> bool {
        if self.game_over() {
            self.restart();
            return true;
        }
        self.toggle_pause()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1, 0),
            GameAction::MoveRight => self.move_by(1, 0),
            GameAction::SoftDrop => self.move_by(0, 1),
            GameAction::RotateCw => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::ToggleClick => self.click(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
