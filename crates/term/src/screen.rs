//! Screen: owns the raw-mode terminal and flushes canvases to it.
//!
//! The screen remembers what it last showed. A frame with a new size (or after
//! [`Screen::invalidate`]) repaints everything; otherwise each row is compared
//! and only the span between its first and last changed cell is rewritten.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::canvas::{Canvas, Glyph, Ink};
use crate::core::PieceColor;

pub struct Screen {
    stdout: io::Stdout,
    /// Copy of the canvas currently on the terminal
    shown: Canvas,
    valid: bool,
    out: Vec<u8>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: Canvas::default(),
            valid: false,
            out: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse reporting.
    pub fn open(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(EnableMouseCapture)?;
        self.out.queue(cursor::Hide)?;
        self.flush()?;
        self.valid = false;
        Ok(())
    }

    /// Undo everything [`Screen::open`] did.
    pub fn close(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(ResetColor)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(DisableMouseCapture)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next [`Screen::present`].
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Bring the terminal in line with `canvas`.
    pub fn present(&mut self, canvas: &Canvas) -> Result<()> {
        self.out.clear();
        let same_size =
            self.shown.width() == canvas.width() && self.shown.height() == canvas.height();
        if self.valid && same_size {
            encode_changes(&self.shown, canvas, &mut self.out)?;
        } else {
            encode_full(canvas, &mut self.out)?;
        }

        if !self.out.is_empty() {
            self.flush()?;
        }
        self.shown.copy_from(canvas);
        self.valid = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Tracks the ink the terminal is currently set to, so style commands are
/// only emitted when the ink changes.
#[derive(Default)]
struct Pen {
    ink: Option<Ink>,
}

impl Pen {
    fn draw(&mut self, out: &mut Vec<u8>, glyphs: &[Glyph]) -> Result<()> {
        for glyph in glyphs {
            if self.ink != Some(glyph.ink) {
                set_ink(out, glyph.ink)?;
                self.ink = Some(glyph.ink);
            }
            out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.ink.is_some() {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(ResetColor)?;
        }
        Ok(())
    }
}

fn set_ink(out: &mut Vec<u8>, ink: Ink) -> Result<()> {
    let (fg, bg) = ink.colors();
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetColors(Colors::new(term_color(fg), term_color(bg))))?;
    if ink.bold() {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if ink.dim() {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn term_color(c: PieceColor) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Clear the terminal and draw every row of `canvas`.
pub fn encode_full(canvas: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..canvas.height() {
        if let Some(row) = canvas.row(y) {
            out.queue(cursor::MoveTo(0, y))?;
            pen.draw(out, row)?;
        }
    }
    pen.finish(out)
}

/// Rewrite the changed span of each row that differs between two
/// equally sized canvases. Writes nothing when they are identical.
pub fn encode_changes(prev: &Canvas, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for y in 0..next.height() {
        let (Some(old), Some(new)) = (prev.row(y), next.row(y)) else {
            continue;
        };
        if let Some(span) = changed_span(old, new) {
            out.queue(cursor::MoveTo(span.start as u16, y))?;
            pen.draw(out, &new[span])?;
        }
    }
    pen.finish(out)
}

/// Smallest range covering every differing glyph, if any.
fn changed_span(old: &[Glyph], new: &[Glyph]) -> Option<Range<usize>> {
    let differs = |(a, b): (&Glyph, &Glyph)| a != b;
    let first = old.iter().zip(new).position(differs)?;
    let last = old.iter().zip(new).rposition(differs)?;
    Some(first..last + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn row(text: &str) -> Vec<Glyph> {
        text.chars()
            .map(|ch| Glyph {
                ch,
                ink: Ink::Label,
            })
            .collect()
    }

    #[test]
    fn span_is_none_for_identical_rows() {
        assert_eq!(changed_span(&row("abcd"), &row("abcd")), None);
    }

    #[test]
    fn span_covers_first_to_last_change() {
        assert_eq!(changed_span(&row("abcdef"), &row("aXcdYf")), Some(1..5));
        assert_eq!(changed_span(&row("abc"), &row("abZ")), Some(2..3));
    }

    #[test]
    fn span_sees_ink_only_changes() {
        let old = row("##");
        let mut new = old.clone();
        new[0].ink = Ink::Block(PieceKind::T);
        assert_eq!(changed_span(&old, &new), Some(0..1));
    }

    #[test]
    fn identical_canvases_encode_nothing() {
        let mut canvas = Canvas::new(4, 2);
        canvas.text(0, 1, "hi", Ink::Hint);
        let mut out = Vec::new();
        encode_changes(&canvas, &canvas.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn changes_print_only_the_new_span() {
        let prev = Canvas::new(6, 1);
        let mut next = prev.clone();
        next.text(2, 0, "ok", Ink::Banner);

        let mut out = Vec::new();
        encode_changes(&prev, &next, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ok"));
        assert!(!text.contains("  ok"));
    }

    #[test]
    fn full_encode_prints_every_row() {
        let mut canvas = Canvas::new(2, 2);
        canvas.paint(0, 0, 'A', Ink::Label);
        canvas.paint(1, 1, 'D', Ink::Label);

        let mut out = Vec::new();
        encode_full(&canvas, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A'));
        assert!(text.contains('D'));
    }

    #[test]
    fn term_color_keeps_channels() {
        assert_eq!(
            term_color(PieceColor::hex(0x010203)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
