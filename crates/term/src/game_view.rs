//! GameView: paints a core `GameSnapshot` onto a [`Canvas`].
//!
//! Pure (no I/O), so every frame can be checked in tests.

use crate::canvas::{Canvas, Ink};
use crate::core::GameSnapshot;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BLOCK: char = '█';
const EMPTY: char = '·';

/// Side panel key hints
const KEYS: [&str; 6] = [
    "←/→  move",
    "↓    down",
    "↑    rotate",
    "SPC  drop",
    "P    pause",
    "Q    quit",
];

const PANEL_GAP: u16 = 2;
const PANEL_MIN_WIDTH: u16 = 12;

/// Where the outlined playfield sits in the viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    left: u16,
    top: u16,
    width: u16,
    height: u16,
}

impl Layout {
    fn right(&self) -> u16 {
        self.left + self.width - 1
    }

    fn bottom(&self) -> u16 {
        self.top + self.height - 1
    }
}

/// Draws the board, the falling piece, the score panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
    /// Terminal rows per board cell
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outlined playfield size in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (width, height) = self.frame_size();
        Layout {
            left: viewport.width.saturating_sub(width) / 2,
            top: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Paint `snap` into `canvas`, resizing it to the viewport.
    ///
    /// The playfield is centred; the canvas allocation is reused across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, canvas: &mut Canvas) {
        canvas.reset(viewport.width, viewport.height);
        let layout = self.layout(viewport);

        outline(canvas, layout);

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, &code) in cells.iter().enumerate() {
                let kind = PieceKind::from_cell_code(code);
                self.cell(canvas, layout, col as u16, row as u16, kind);
            }
        }

        // Rows above the board are not drawn.
        let visible = snap
            .active
            .iter()
            .flat_map(|piece| piece.blocks())
            .filter(|&(x, y, _)| {
                (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y)
            });
        for (x, y, kind) in visible {
            self.cell(canvas, layout, x as u16, y as u16, Some(kind));
        }

        panel(canvas, layout, snap.score);

        let banner = if snap.game_over {
            Some(("GAME OVER", "click to restart"))
        } else if snap.paused {
            Some(("PAUSED", "click to play"))
        } else {
            None
        };
        if let Some((title, hint)) = banner {
            centered(canvas, layout, 0, title);
            centered(canvas, layout, 2, hint);
        }
    }

    /// Same as [`GameView::render_into`] with a fresh canvas.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Canvas {
        let mut canvas = Canvas::default();
        self.render_into(snap, viewport, &mut canvas);
        canvas
    }

    fn cell(
        &self,
        canvas: &mut Canvas,
        layout: Layout,
        col: u16,
        row: u16,
        kind: Option<PieceKind>,
    ) {
        let (ch, ink) = match kind {
            Some(kind) => (BLOCK, Ink::Block(kind)),
            None => (EMPTY, Ink::Well),
        };
        canvas.fill(
            layout.left + 1 + col * self.cell_w,
            layout.top + 1 + row * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            ink,
        );
    }
}

fn outline(canvas: &mut Canvas, layout: Layout) {
    let (right, bottom) = (layout.right(), layout.bottom());
    for x in layout.left + 1..right {
        canvas.paint(x, layout.top, '─', Ink::Frame);
        canvas.paint(x, bottom, '─', Ink::Frame);
    }
    for y in layout.top + 1..bottom {
        canvas.paint(layout.left, y, '│', Ink::Frame);
        canvas.paint(right, y, '│', Ink::Frame);
    }
    for (x, y, ch) in [
        (layout.left, layout.top, '┌'),
        (right, layout.top, '┐'),
        (layout.left, bottom, '└'),
        (right, bottom, '┘'),
    ] {
        canvas.paint(x, y, ch, Ink::Frame);
    }
}

/// Score and key hints to the right of the playfield, when there is room.
fn panel(canvas: &mut Canvas, layout: Layout, score: u32) {
    let x = layout.right().saturating_add(1 + PANEL_GAP);
    if canvas.width().saturating_sub(x) < PANEL_MIN_WIDTH {
        return;
    }

    canvas.text(x, layout.top, "SCORE", Ink::Label);
    canvas.number(x, layout.top + 1, score, Ink::Label);
    for (line, keys) in (layout.top + 3..canvas.height()).zip(KEYS) {
        canvas.text(x, line, keys, Ink::Hint);
    }
}

/// Text centred horizontally on the playfield, `line` rows below its middle.
fn centered(canvas: &mut Canvas, layout: Layout, line: u16, text: &str) {
    let len = text.chars().count() as u16;
    let x = layout.left + layout.width.saturating_sub(len) / 2;
    let y = layout.top + layout.height / 2 + line;
    canvas.text(x, y, text, Ink::Banner);
}
