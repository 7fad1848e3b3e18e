//! Character canvas the game view paints into.
//!
//! Cells store *what* they show (a piece kind, the well, a label) rather than
//! concrete colours. The palette is applied when the canvas is flushed to the
//! terminal, so piece colours always come straight from the catalog.

use crate::core::{piece_color, PieceColor};
use crate::types::PieceKind;

const BLACK: PieceColor = PieceColor::hex(0x000000);
const WELL_BG: PieceColor = PieceColor::hex(0x1e1e28);

/// Semantic colour of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ink {
    /// Everything outside the playfield
    #[default]
    Backdrop,
    /// Empty playfield cell
    Well,
    /// Locked or falling block
    Block(PieceKind),
    /// Playfield outline
    Frame,
    /// Side panel headings and numbers
    Label,
    /// Key hints
    Hint,
    /// Pause / game over text
    Banner,
}

impl Ink {
    /// Foreground and background colours
    pub fn colors(self) -> (PieceColor, PieceColor) {
        match self {
            Ink::Backdrop => (PieceColor::hex(0xdcdcdc), BLACK),
            Ink::Well => (PieceColor::hex(0x5a5a64), WELL_BG),
            Ink::Block(kind) => (piece_color(kind), WELL_BG),
            Ink::Frame => (PieceColor::hex(0xc8c8c8), BLACK),
            Ink::Label => (PieceColor::hex(0xdcdcdc), BLACK),
            Ink::Hint => (PieceColor::hex(0xa0a0a0), BLACK),
            Ink::Banner => (PieceColor::hex(0xffffff), BLACK),
        }
    }

    pub fn bold(self) -> bool {
        matches!(self, Ink::Block(_) | Ink::Label | Ink::Banner)
    }

    pub fn dim(self) -> bool {
        matches!(self, Ink::Well | Ink::Hint)
    }
}

/// One terminal cell: a character and how to colour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub ink: Ink,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        ink: Ink::Backdrop,
    };
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Canvas {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let mut canvas = Self::default();
        canvas.reset(width, height);
        canvas
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank the canvas at a (possibly new) size, keeping the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::BLANK);
    }

    /// Become a copy of `other` without reallocating when capacity allows.
    pub fn copy_from(&mut self, other: &Canvas) {
        self.width = other.width;
        self.height = other.height;
        self.glyphs.clear();
        self.glyphs.extend_from_slice(&other.glyphs);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[y as usize * self.width as usize + x as usize])
    }

    /// Glyphs of row `y`
    pub fn row(&self, y: u16) -> Option<&[Glyph]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.glyphs[start..start + self.width as usize])
    }

    /// Set one cell; positions off the canvas are clipped.
    pub fn paint(&mut self, x: u16, y: u16, ch: char, ink: Ink) {
        if x < self.width && y < self.height {
            self.glyphs[y as usize * self.width as usize + x as usize] = Glyph { ch, ink };
        }
    }

    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, ink: Ink) {
        for row in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.paint(col, row, ch, ink);
            }
        }
    }

    /// Write `text` left to right from (x, y); returns the column after it.
    pub fn text(&mut self, x: u16, y: u16, text: &str, ink: Ink) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            self.paint(col, y, ch, ink);
            col = col.saturating_add(1);
        }
        col
    }

    /// Write `value` in decimal from (x, y) without allocating.
    pub fn number(&mut self, x: u16, y: u16, value: u32, ink: Ink) {
        let digits = value.checked_ilog10().map_or(1, |log| log + 1) as u16;
        let mut rest = value;
        for i in (0..digits).rev() {
            self.paint(x.saturating_add(i), y, char::from(b'0' + (rest % 10) as u8), ink);
            rest /= 10;
        }
    }

    /// Characters of row `y` as a string (tests and debugging)
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|g| g.ch).collect())
            .unwrap_or_default()
    }
}
