//! Menu content: styled lines for each modal overlay.

use std::time::Duration;

use crate::clock::duration_in_words;
use crate::fb::{CellStyle, Rgb};
use crate::types::Menu;

pub(crate) const PLAIN: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
pub(crate) const GRAY: CellStyle = CellStyle::fg(Rgb::new(150, 150, 150));
pub(crate) const YELLOW: CellStyle = CellStyle::fg(Rgb::new(240, 210, 80));
pub(crate) const RED: CellStyle = CellStyle::fg(Rgb::new(230, 80, 80));
pub(crate) const GREEN: CellStyle = CellStyle::fg(Rgb::new(110, 210, 120));
pub(crate) const BLUE: CellStyle = CellStyle::fg(Rgb::new(100, 150, 255));

/// A run of text in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: CellStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn width(&self) -> u16 {
        self.text.chars().count() as u16
    }
}

/// One line of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn width(&self) -> u16 {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Title plus body lines of a menu box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuContent {
    pub title: Line,
    pub lines: Vec<Line>,
}

impl MenuContent {
    /// Inner width: the widest of the title and the body lines.
    pub fn inner_width(&self) -> u16 {
        self.lines
            .iter()
            .map(Line::width)
            .chain(std::iter::once(self.title.width()))
            .max()
            .unwrap_or(0)
    }
}

const HELP_ITEMS: [(&str, &str); 7] = [
    ("q", "Quit Sweeper"),
    ("c", "Close menu"),
    ("n", "New game"),
    ("h", "This help"),
    ("←,↑,→,↓", "Move cursor"),
    ("f", "Flag/unflag"),
    ("SPACE", "Open, or clear around a number"),
];

/// Build the content for `menu`. `elapsed` is the frozen game time.
pub fn menu_content(menu: Menu, elapsed: Duration) -> MenuContent {
    match menu {
        Menu::Help => help(),
        Menu::ConfirmNewGame => MenuContent {
            title: Line::new(vec![Span::new("Restart?", PLAIN)]),
            lines: vec![
                Line::new(vec![Span::new("A game is already in-progress!", RED)]),
                Line::new(vec![
                    Span::new("Press ", PLAIN),
                    key_span("n"),
                    Span::new(" again to start a new", PLAIN),
                ]),
                Line::new(vec![
                    Span::new("game, or ", PLAIN),
                    key_span("c"),
                    Span::new(" to cancel", PLAIN),
                ]),
            ],
        },
        Menu::Won => MenuContent {
            title: Line::new(vec![Span::new("Victory!", GREEN.bold())]),
            lines: vec![
                Line::new(vec![Span::new(
                    format!("Congratulations! You won in {}", duration_in_words(elapsed)),
                    PLAIN,
                )]),
                new_game_prompt(),
                Line::new(vec![
                    Span::new("or ", PLAIN),
                    key_span("c"),
                    Span::new(" to savor your success.", PLAIN),
                ]),
            ],
        },
        Menu::Lost => MenuContent {
            title: Line::new(vec![Span::new("Defeat!", RED.bold())]),
            lines: vec![
                Line::new(vec![
                    Span::new("Alas, you appear to have ", PLAIN),
                    Span::new("exploded", RED.bold()),
                    Span::new(".", PLAIN),
                ]),
                new_game_prompt(),
                Line::new(vec![
                    Span::new("or ", PLAIN),
                    key_span("c"),
                    Span::new(" to learn from failure.", PLAIN),
                ]),
            ],
        },
    }
}

fn help() -> MenuContent {
    let key_w = HELP_ITEMS
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0);

    let lines = HELP_ITEMS
        .iter()
        .map(|(key, action)| {
            Line::new(vec![
                Span::new(format!("{:<width$}", key, width = key_w), YELLOW),
                Span::new(" : ", PLAIN),
                Span::new(*action, GRAY),
            ])
        })
        .collect();

    MenuContent {
        title: Line::new(vec![Span::new("Help", PLAIN.bold())]),
        lines,
    }
}

fn key_span(key: &str) -> Span {
    Span::new(key, YELLOW.underline())
}

fn new_game_prompt() -> Line {
    Line::new(vec![
        Span::new("Press ", PLAIN),
        key_span("n"),
        Span::new(" to start a new game,", PLAIN),
    ])
}
