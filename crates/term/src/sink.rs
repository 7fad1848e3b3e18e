//! TermSink: the terminal-backed render sink used by the frame driver.

use anyhow::Result;

use crate::canvas::Canvas;
use crate::core::GameSnapshot;
use crate::engine::RenderSink;
use crate::game_view::{GameView, Viewport};
use crate::screen::Screen;

/// Paints each snapshot into a reused canvas and presents it.
pub struct TermSink {
    screen: Screen,
    view: GameView,
    canvas: Canvas,
}

impl TermSink {
    pub fn new(screen: Screen, view: GameView) -> Self {
        Self {
            screen,
            view,
            canvas: Canvas::default(),
        }
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Force a full repaint on the next frame (after a terminal resize).
    pub fn invalidate(&mut self) {
        self.screen.invalidate();
    }

    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl RenderSink for TermSink {
    fn render(&mut self, snapshot: &GameSnapshot, _paused: bool) -> Result<()> {
        // The pause flag also travels inside the snapshot, which drives the overlay.
        self.view
            .render_into(snapshot, Self::viewport(), &mut self.canvas);
        self.screen.present(&self.canvas)
    }
}
