//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs are
//! repainted. A size change or an explicit invalidation forces a full redraw.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

/// Where finished frames go.
pub trait Surface {
    /// Current drawable size.
    fn viewport(&self) -> Viewport;

    /// Paint `fb`. Implementations may swap its contents with an older frame.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;

    /// Force the next present to repaint everything.
    fn invalidate(&mut self) {}
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Surface for TerminalRenderer {
    fn viewport(&self) -> Viewport {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.draw_swap(fb)
    }

    fn invalidate(&mut self) {
        self.last = None;
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    let width = fb.width() as usize;
    if width == 0 {
        return painter.finish();
    }

    for (y, row) in fb.cells().chunks(width).enumerate() {
        painter.move_to(0, y as u16)?;
        for &cell in row {
            painter.cell(cell)?;
        }
    }
    painter.finish()
}

/// Encode only the cells that differ from `prev`.
///
/// Frames of different sizes fall back to a full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }
    let width = next.width() as usize;
    let mut painter = Painter::new(out);
    if width == 0 {
        return painter.finish();
    }

    let rows = prev.cells().chunks(width).zip(next.cells().chunks(width));
    for (y, (old, new)) in rows.enumerate() {
        for run in ChangedRuns::new(old, new) {
            painter.move_to(run.start as u16, y as u16)?;
            for &cell in &new[run] {
                painter.cell(cell)?;
            }
        }
    }
    painter.finish()
}

/// Queues glyphs, re-emitting SGR attributes only when the style changes.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            self.set_style(cell.style)?;
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        let color = |c: Rgb| Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        };
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetForegroundColor(color(style.fg)))?;
        self.out.queue(SetBackgroundColor(color(style.bg)))?;
        for (on, attr) in [
            (style.bold, Attribute::Bold),
            (style.dim, Attribute::Dim),
            (style.underline, Attribute::Underlined),
        ] {
            if on {
                self.out.queue(SetAttribute(attr))?;
            }
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Maximal runs of differing cells between two rows of equal length.
struct ChangedRuns<'a> {
    old: &'a [Cell],
    new: &'a [Cell],
    x: usize,
}

impl<'a> ChangedRuns<'a> {
    fn new(old: &'a [Cell], new: &'a [Cell]) -> Self {
        Self { old, new, x: 0 }
    }

    fn differs(&self, x: usize) -> bool {
        self.old[x] != self.new[x]
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let len = self.new.len().min(self.old.len());
        while self.x < len && !self.differs(self.x) {
            self.x += 1;
        }
        if self.x >= len {
            return None;
        }
        let start = self.x;
        while self.x < len && self.differs(self.x) {
            self.x += 1;
        }
        Some(start..self.x)
    }
}
