//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (field model, controller, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is a fixed square:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 10 rows (indexed 0-9)
//! - **Mines**: 10
//! - **Cursor start**: the center cell, (5, 5)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 66 | Redraw interval (~15 per second) |
//! | `MIN_TICK_MS` | 10 | Lower clamp for a configured tick |
//! | `MAX_TICK_MS` | 1000 | Upper clamp for a configured tick |
//!
//! # Examples
//!
//! ```
//! use sweeper_types::{Command, Direction, Key, Position, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let pos = Position::new(2, 3);
//! assert_eq!(pos.row, 2);
//! assert_eq!(pos.col, 3);
//!
//! assert_eq!(Direction::Up.delta(), (-1, 0));
//! assert_eq!(Key::Space.to_string(), "<SPACE>");
//! assert!(Command::Flag.is_field_action());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 10);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Board height in cells (10 rows)
pub const BOARD_HEIGHT: u16 = 10;

/// Number of mines hidden on a default board
pub const MINE_COUNT: u16 = 10;

/// Redraw interval in milliseconds (66ms ≈ 15 per second)
pub const TICK_MS: u64 = 66;

/// Smallest accepted redraw interval.
pub const MIN_TICK_MS: u64 = 10;

/// Largest accepted redraw interval.
pub const MAX_TICK_MS: u64 = 1000;

/// A cell coordinate on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

impl From<(u16, u16)> for Position {
    fn from((row, col): (u16, u16)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One orthogonal cursor step.
///
/// Multi-cell moves cannot be expressed with this type; the controller only
/// ever moves the cursor through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row/column delta for this step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// What a player sees at a single cell.
///
/// Priority when deriving it: opened mine, opened count, flag, closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Unopened and unflagged.
    Closed,
    /// Unopened, marked as a suspected mine.
    Flag,
    /// Opened cell that holds a mine.
    Mine,
    /// Opened safe cell with its neighbor mine count (0..=8).
    Count(u8),
}

/// Raw input tokens produced by the terminal.
///
/// `Display` renders the token the way the debug line shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Esc,
    /// Ctrl-C
    Interrupt,
    Char(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => f.write_str("<UP>"),
            Key::Down => f.write_str("<DOWN>"),
            Key::Left => f.write_str("<LEFT>"),
            Key::Right => f.write_str("<RIGHT>"),
            Key::Space => f.write_str("<SPACE>"),
            Key::Enter => f.write_str("<ENTER>"),
            Key::Esc => f.write_str("<ESC>"),
            Key::Interrupt => f.write_str("<Ctrl-c>"),
            Key::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Events consumed by the control loop, one per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Scheduled redraw so the clock stays live without key activity.
    Tick,
    /// Terminal was resized to (width, height).
    Resize(u16, u16),
}

/// Player commands that drive the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start a new game (or ask to confirm if one is in progress)
    NewGame,
    /// Open the help menu
    Help,
    /// Close the current menu
    Close,
    /// Move the cursor one cell
    Move(Direction),
    /// Reveal the cursor cell, or chord-clear it if already open
    Reveal,
    /// Toggle a flag on the cursor cell
    Flag,
    /// Leave the game
    Quit,
}

impl Command {
    /// camelCase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::NewGame => "newGame",
            Command::Help => "help",
            Command::Close => "close",
            Command::Move(Direction::Up) => "moveUp",
            Command::Move(Direction::Down) => "moveDown",
            Command::Move(Direction::Left) => "moveLeft",
            Command::Move(Direction::Right) => "moveRight",
            Command::Reveal => "reveal",
            Command::Flag => "flag",
            Command::Quit => "quit",
        }
    }

    /// Commands that act on the field directly (blocked while a menu is open).
    pub fn is_field_action(&self) -> bool {
        matches!(self, Command::Move(_) | Command::Reveal | Command::Flag)
    }
}

/// Modal menus that replace the board while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    Help,
    ConfirmNewGame,
    Won,
    Lost,
}

impl Menu {
    pub fn as_str(&self) -> &'static str {
        match self {
            Menu::Help => "help",
            Menu::ConfirmNewGame => "confirm_new",
            Menu::Won => "won",
            Menu::Lost => "lost",
        }
    }
}
