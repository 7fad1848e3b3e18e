use anyhow::Result;

use crate::core::{GameSnapshot, GameState};
use crate::types::GameAction;

/// Something that turns a game snapshot into a visible frame.
pub trait RenderSink {
    /// Draw one frame. `snapshot` is a complete, consistent view of the game.
    fn render(&mut self, snapshot: &GameSnapshot, paused: bool) -> Result<()>;
}

/// Owns the live game and paces it: commands in, one tick + one render per frame.
#[derive(Debug)]
pub struct FrameDriver {
    game: GameState,
    snapshot: GameSnapshot,
    frames: u64,
    running: bool,
}

impl FrameDriver {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            snapshot: GameSnapshot::default(),
            frames: 0,
            running: true,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop driving frames; later `frame()` calls do nothing.
    pub fn stop(&mut self) {
        if self.running {
            tracing::info!(frames = self.frames, score = self.game.score(), "driver stopped");
        }
        self.running = false;
    }

    /// Apply one input command synchronously, between frames.
    pub fn handle(&mut self, action: GameAction) -> bool {
        if !self.running {
            return false;
        }
        let applied = self.game.apply_action(action);
        tracing::trace!(?action, applied, "input");
        applied
    }

    /// Run one frame: advance the game by one tick, then render it.
    pub fn frame<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        if !self.running {
            return Ok(());
        }

        self.game.tick();
        self.render(sink)?;
        self.frames += 1;
        Ok(())
    }

    /// Render the current state without advancing it (e.g. after a resize).
    pub fn render<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.game.snapshot_into(&mut self.snapshot);
        sink.render(&self.snapshot, self.snapshot.paused)
    }
}
