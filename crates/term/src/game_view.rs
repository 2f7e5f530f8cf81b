//! SweeperView: composes the mine field and menus into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//! ┌──────────────────────────────────────────┐  row 0: frame
//! │ No-Guess Sweeper : h: Help  q: Quit ┊ 00:07│  row 1: header
//! ├------------------------------------------┤  row 2: divider
//! │                                          │  rows 3..h-1: body
//! │            board or menu box             │
//! └──────────────────────────────────────────┘
//! ```

use std::time::Duration;

use crate::clock::format_clock;
use crate::core::MineField;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::menu::{menu_content, Line, MenuContent, BLUE, GRAY, GREEN, PLAIN, YELLOW};
use crate::types::{Key, Menu, Position, Symbol};

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

/// Everything the compositor needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub field: Option<&'a MineField>,
    pub menu: Option<Menu>,
    /// Game clock for the header (zero when there is no field).
    pub elapsed: Duration,
    pub last_key: Option<Key>,
}

impl<'a> Scene<'a> {
    pub fn empty() -> Self {
        Self {
            field: None,
            menu: None,
            elapsed: Duration::ZERO,
            last_key: None,
        }
    }
}

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    /// Top-left corner that centers a `w` x `h` box inside this rect.
    pub fn center(&self, w: u16, h: u16) -> (u16, u16) {
        (
            self.x + self.w.saturating_sub(w) / 2,
            self.y + self.h.saturating_sub(h) / 2,
        )
    }
}

pub const TITLE: &str = " No-Guess Sweeper :";
const HEADER_ROW: u16 = 1;
const DIVIDER_ROW: u16 = 2;
const BODY_TOP: u16 = 3;

const HINTS: [(&str, &str); 3] = [(" h: ", "Help "), (" q: ", "Quit "), (" n: ", "New ")];

const BG: Rgb = Rgb::new(0, 0, 0);
const CURSOR_BG: Rgb = Rgb::new(40, 70, 160);
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const ALERT: Rgb = Rgb::new(255, 60, 60);

/// A lightweight terminal renderer for the minesweeper game.
pub struct SweeperView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    show_debug: bool,
}

impl Default for SweeperView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            show_debug: false,
        }
    }
}

impl SweeperView {
    pub fn with_debug(mut self, show_debug: bool) -> Self {
        self.show_debug = show_debug;
        self
    }

    /// Body area below the header divider, inside the frame.
    pub fn body(viewport: Viewport) -> Rect {
        Rect {
            x: 1,
            y: BODY_TOP,
            w: viewport.width.saturating_sub(2),
            h: viewport.height.saturating_sub(BODY_TOP + 1),
        }
    }

    /// Render the scene into an existing framebuffer, fully redrawing it.
    pub fn render_into(&self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        self.draw_frame(fb, viewport);
        self.draw_header(fb, scene, viewport);

        let body = Self::body(viewport);
        match (scene.menu, scene.field) {
            (Some(menu), _) => {
                let content = menu_content(menu, scene.elapsed);
                self.draw_menu(fb, body, &content);
            }
            (None, Some(field)) => self.draw_board(fb, body, field),
            (None, None) => {}
        }

        if self.show_debug {
            self.draw_debug(fb, scene, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let (w, h) = (viewport.width, viewport.height);
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(0, 0, '┌', BORDER);
        fb.put_char(w - 1, 0, '┐', BORDER);
        fb.put_char(0, h - 1, '└', BORDER);
        fb.put_char(w - 1, h - 1, '┘', BORDER);

        for x in 1..w - 1 {
            fb.put_char(x, 0, '─', BORDER);
            fb.put_char(x, h - 1, '─', BORDER);
        }
        for y in 1..h - 1 {
            fb.put_char(0, y, '│', BORDER);
            fb.put_char(w - 1, y, '│', BORDER);
        }

        if DIVIDER_ROW < h - 1 {
            fb.put_char(0, DIVIDER_ROW, '├', BORDER);
            fb.put_char(w - 1, DIVIDER_ROW, '┤', BORDER);
            for x in 1..w - 1 {
                fb.put_char(x, DIVIDER_ROW, '-', BORDER);
            }
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, scene: &Scene<'_>, viewport: Viewport) {
        let title_style = BLUE.underline();
        fb.put_str(1, HEADER_ROW, TITLE, title_style);
        let title_w = TITLE.chars().count() as u16;

        let clock = format_clock(scene.elapsed);
        let clock_w = 2 + clock.chars().count() as u16;
        let clock_x = viewport.width.saturating_sub(1 + clock_w);
        let after_sep = fb.put_str(clock_x, HEADER_ROW, "┊ ", PLAIN);
        fb.put_str(after_sep, HEADER_ROW, &clock, GREEN);

        let avail = viewport.width.saturating_sub(2 + title_w + clock_w);
        let hints = fit_hints(&HINTS, avail);
        if hints.is_empty() {
            return;
        }

        let per = avail / hints.len() as u16;
        let mut x = 1 + title_w;
        for (key, label) in hints {
            let after_key = fb.put_str(x, HEADER_ROW, key, YELLOW);
            fb.put_str(after_key, HEADER_ROW, label, GRAY);
            x += per;
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, body: Rect, field: &MineField) {
        let board_w = field.width() * self.cell_w;
        let board_h = field.height();
        let (start_x, start_y) = body.center(board_w, board_h);

        for pos in field.positions() {
            let (ch, mut style) = symbol_glyph(field.symbol(pos));
            if field.is_highlighted(pos) {
                style = CellStyle {
                    fg: ALERT,
                    bold: true,
                    dim: false,
                    ..style
                };
            }
            if pos == field.cursor() {
                style.bg = CURSOR_BG;
            }

            let x = start_x + pos.col * self.cell_w;
            let y = start_y + pos.row;
            fb.fill_rect(x, y, self.cell_w, 1, ' ', style);
            fb.put_char(x, y, ch, style);
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, body: Rect, content: &MenuContent) {
        let inner = content.inner_width();
        let box_w = inner + 4;
        let box_h = content.lines.len() as u16 + 4;
        let (x, y) = body.center(box_w, box_h);

        let rule = BORDER;
        let last_x = x + box_w - 1;

        // Top rule, title row and divider.
        fb.put_char(x, y, '╔', rule);
        fb.put_char(last_x, y, '╗', rule);
        fb.fill_rect(x + 1, y + 1, box_w - 2, box_h - 2, ' ', PLAIN);
        for dx in 1..box_w - 1 {
            fb.put_char(x + dx, y, '═', rule);
            fb.put_char(x + dx, y + 2, '─', rule);
            fb.put_char(x + dx, y + box_h - 1, '═', rule);
        }
        fb.put_char(x, y + 2, '╟', rule);
        fb.put_char(last_x, y + 2, '╢', rule);
        fb.put_char(x, y + box_h - 1, '╚', rule);
        fb.put_char(last_x, y + box_h - 1, '╝', rule);
        for dy in 1..box_h - 1 {
            if dy != 2 {
                fb.put_char(x, y + dy, '║', rule);
                fb.put_char(last_x, y + dy, '║', rule);
            }
        }

        let title_x = x + 1 + (inner + 2).saturating_sub(content.title.width()) / 2;
        put_line(fb, title_x, y + 1, &content.title);

        for (i, line) in content.lines.iter().enumerate() {
            put_line(fb, x + 2, y + 3 + i as u16, line);
        }
    }

    fn draw_debug(&self, fb: &mut FrameBuffer, scene: &Scene<'_>, viewport: Viewport) {
        let dim = GRAY.dim();
        let menu = scene.menu.map(|m| m.as_str()).unwrap_or("none");
        let event = scene
            .last_key
            .map(|k| k.to_string())
            .unwrap_or_else(|| "none".to_string());

        let menu_row = viewport.height.saturating_sub(2);
        let event_row = viewport.height.saturating_sub(3);
        if event_row < BODY_TOP {
            return;
        }
        let x = fb.put_str(1, menu_row, "menu: ", dim);
        fb.put_str(x, menu_row, menu, dim);
        let x = fb.put_str(1, event_row, "event: ", dim);
        fb.put_str(x, event_row, &event, dim);
    }
}

/// Drop hints from the end until the rest fit in `avail` columns.
fn fit_hints<'a>(hints: &'a [(&'a str, &'a str)], avail: u16) -> &'a [(&'a str, &'a str)] {
    let width = |h: &(&str, &str)| (h.0.chars().count() + h.1.chars().count()) as u16;
    let mut n = hints.len();
    while n > 0 && hints[..n].iter().map(width).sum::<u16>() > avail {
        n -= 1;
    }
    &hints[..n]
}

fn put_line(fb: &mut FrameBuffer, x: u16, y: u16, line: &Line) {
    let mut cx = x;
    for span in &line.spans {
        cx = fb.put_str(cx, y, &span.text, span.style);
    }
}

/// Glyph and style for a cell symbol (before cursor/highlight tinting).
pub fn symbol_glyph(symbol: Symbol) -> (char, CellStyle) {
    match symbol {
        Symbol::Closed => ('■', CellStyle::fg(Rgb::new(150, 150, 160)).on(BG)),
        Symbol::Flag => ('⚑', CellStyle::fg(Rgb::new(240, 90, 90)).bold()),
        Symbol::Mine => ('*', CellStyle::fg(Rgb::new(255, 80, 80)).bold()),
        Symbol::Count(0) => ('.', CellStyle::fg(Rgb::new(110, 110, 120)).dim()),
        Symbol::Count(n) => {
            let fg = match n {
                1 => Rgb::new(90, 140, 255),
                2 => Rgb::new(90, 200, 110),
                3 => Rgb::new(230, 90, 90),
                4 => Rgb::new(150, 110, 230),
                5 => Rgb::new(200, 120, 60),
                6 => Rgb::new(80, 200, 200),
                7 => Rgb::new(220, 220, 220),
                _ => Rgb::new(150, 150, 150),
            };
            let ch = char::from_digit(n as u32, 10).unwrap_or('?');
            (ch, CellStyle::fg(fg).bold())
        }
    }
}

/// Screen coordinates of a board cell's glyph for the given viewport.
pub fn cell_origin(view: &SweeperView, field: &MineField, viewport: Viewport, pos: Position) -> (u16, u16) {
    let body = SweeperView::body(viewport);
    let (start_x, start_y) = body.center(field.width() * view.cell_w, field.height());
    (start_x + pos.col * view.cell_w, start_y + pos.row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_drop_from_the_end() {
        assert_eq!(fit_hints(&HINTS, 100).len(), 3);
        // " h: Help " + " q: Quit " = 18 columns
        assert_eq!(fit_hints(&HINTS, 18).len(), 2);
        assert_eq!(fit_hints(&HINTS, 17).len(), 1);
        assert_eq!(fit_hints(&HINTS, 8).len(), 0);
    }

    #[test]
    fn rerender_wipes_the_previous_board() {
        let field = MineField::standard(3);
        let view = SweeperView::default();
        let vp = Viewport::new(40, 20);
        let mut fb = FrameBuffer::new(vp.width, vp.height);

        let board = Scene {
            field: Some(&field),
            ..Scene::empty()
        };
        view.render_into(&board, vp, &mut fb);
        let (x, y) = cell_origin(&view, &field, vp, Position::new(0, 0));
        assert_eq!(fb.get(x, y).unwrap().ch, '■');

        view.render_into(&Scene::empty(), vp, &mut fb);
        assert_eq!(fb.get(x, y), Some(Cell::default()));
    }

    #[test]
    fn body_excludes_header_and_frame() {
        let body = SweeperView::body(Viewport::new(40, 20));
        assert_eq!(body, Rect { x: 1, y: 3, w: 38, h: 16 });
    }

    #[test]
    fn rect_center_never_underflows() {
        let r = Rect { x: 1, y: 3, w: 4, h: 2 };
        assert_eq!(r.center(10, 10), (1, 3));
        assert_eq!(r.center(2, 2), (2, 3));
    }

    #[test]
    fn glyphs_are_distinct() {
        let mut seen = Vec::new();
        for sym in [
            Symbol::Closed,
            Symbol::Flag,
            Symbol::Mine,
            Symbol::Count(0),
            Symbol::Count(1),
            Symbol::Count(8),
        ] {
            let (ch, _) = symbol_glyph(sym);
            assert!(!seen.contains(&ch), "{:?}", sym);
            seen.push(ch);
        }
    }
}
