//! Mine field module - the complete state of one game
//!
//! Holds the mine layout, the player's opened/flagged cells, the cursor and the
//! game clock. Everything here is pure state plus rules: no I/O, and every
//! time-dependent operation takes `now` from the caller.

use std::fmt;
use std::time::{Duration, Instant};

use crate::grid::{self, CellSet, Neighbors};
use crate::rng::SimpleRng;
use crate::types::{Direction, Position, Symbol, BOARD_HEIGHT, BOARD_WIDTH, MINE_COUNT};

/// Reasons a field cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Width or height is zero.
    EmptyBoard,
    /// There must be at least one safe cell.
    TooManyMines { mines: usize, cells: usize },
    /// An explicit mine lies outside the board.
    MineOutOfBounds(Position),
    /// An explicit mine was listed twice.
    DuplicateMine(Position),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::EmptyBoard => f.write_str("board must have at least one row and column"),
            FieldError::TooManyMines { mines, cells } => {
                write!(f, "{} mines do not fit on a board of {} cells", mines, cells)
            }
            FieldError::MineOutOfBounds(pos) => write!(f, "mine at {} is off the board", pos),
            FieldError::DuplicateMine(pos) => write!(f, "mine at {} listed twice", pos),
        }
    }
}

impl std::error::Error for FieldError {}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// One game's mine field.
#[derive(Debug, Clone)]
pub struct MineField {
    width: u16,
    height: u16,
    mine_count: u16,
    mines: CellSet,
    opened: CellSet,
    flagged: CellSet,
    /// Cells hinted by the last unresolved chord; cleared before each field action.
    highlighted: CellSet,
    cursor: Position,
    started: Option<Instant>,
    ended: Option<Instant>,
    stoppage: Duration,
}

impl MineField {
    /// Create a field with `mine_count` mines placed uniformly at random.
    pub fn new(width: u16, height: u16, mine_count: u16, seed: u32) -> Result<Self, FieldError> {
        let mut field = Self::empty(width, height, mine_count as usize)?;

        // Partial Fisher-Yates over all cells: exactly `mine_count` draws.
        let mut cells: Vec<Position> = (0..height)
            .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
            .collect();
        let mut rng = SimpleRng::new(seed);
        rng.partial_shuffle(&mut cells, mine_count as usize);
        for &pos in &cells[..mine_count as usize] {
            field.mines.insert(pos);
        }

        Ok(field)
    }

    /// The fixed 10x10 board with 10 mines.
    pub fn standard(seed: u32) -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, MINE_COUNT, seed)
            .unwrap_or_else(|e| unreachable!("standard board constants are valid: {}", e))
    }

    /// Create a field with an explicit mine layout.
    pub fn with_mines<I>(width: u16, height: u16, mines: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mines: Vec<Position> = mines.into_iter().collect();
        let mut field = Self::empty(width, height, mines.len())?;
        for pos in mines {
            if pos.row >= height || pos.col >= width {
                return Err(FieldError::MineOutOfBounds(pos));
            }
            if !field.mines.insert(pos) {
                return Err(FieldError::DuplicateMine(pos));
            }
        }
        Ok(field)
    }

    fn empty(width: u16, height: u16, mine_count: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyBoard);
        }
        let cells = (width as usize) * (height as usize);
        if mine_count >= cells {
            return Err(FieldError::TooManyMines {
                mines: mine_count,
                cells,
            });
        }

        Ok(Self {
            width,
            height,
            mine_count: mine_count as u16,
            mines: CellSet::new(width, height),
            opened: CellSet::new(width, height),
            flagged: CellSet::new(width, height),
            highlighted: CellSet::new(width, height),
            cursor: Position::new(height / 2, width / 2),
            started: None,
            ended: None,
            stoppage: Duration::ZERO,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn mine_count(&self) -> u16 {
        self.mine_count
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn started(&self) -> Option<Instant> {
        self.started
    }

    pub fn ended(&self) -> Option<Instant> {
        self.ended
    }

    pub fn stoppage(&self) -> Duration {
        self.stoppage
    }

    /// Check if position lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn is_mine(&self, pos: Position) -> bool {
        self.mines.contains(pos)
    }

    pub fn is_opened(&self, pos: Position) -> bool {
        self.opened.contains(pos)
    }

    pub fn is_flagged(&self, pos: Position) -> bool {
        self.flagged.contains(pos)
    }

    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.contains(pos)
    }

    pub fn mines(&self) -> impl Iterator<Item = Position> + '_ {
        self.mines.iter()
    }

    pub fn highlighted(&self) -> impl Iterator<Item = Position> + '_ {
        self.highlighted.iter()
    }

    pub fn opened_count(&self) -> usize {
        self.opened.len()
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged.len()
    }

    /// All board positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    pub fn neighbors(&self, pos: Position) -> Neighbors {
        grid::neighbors(self.width, self.height, pos)
    }

    pub fn neighbor_mine_count(&self, pos: Position) -> u8 {
        self.neighbors(pos)
            .iter()
            .filter(|&&n| self.mines.contains(n))
            .count() as u8
    }

    /// What the player sees at `pos`.
    pub fn symbol(&self, pos: Position) -> Symbol {
        if self.opened.contains(pos) {
            if self.mines.contains(pos) {
                Symbol::Mine
            } else {
                Symbol::Count(self.neighbor_mine_count(pos))
            }
        } else if self.flagged.contains(pos) {
            Symbol::Flag
        } else {
            Symbol::Closed
        }
    }

    /// Open `pos`, cascading through contiguous zero-count cells.
    ///
    /// The cascade stops at numbered cells, which are opened but not expanded.
    /// Cells are marked opened when pushed, so each is expanded at most once.
    pub fn open(&mut self, pos: Position) {
        if !self.contains(pos) || self.opened.contains(pos) {
            return;
        }

        let mut stack = vec![pos];
        self.mark_opened(pos);

        while let Some(cur) = stack.pop() {
            if self.mines.contains(cur) || self.neighbor_mine_count(cur) != 0 {
                continue;
            }
            for n in self.neighbors(cur) {
                if !self.opened.contains(n) {
                    self.mark_opened(n);
                    stack.push(n);
                }
            }
        }
    }

    fn mark_opened(&mut self, pos: Position) {
        self.opened.insert(pos);
        // An opened cell cannot also carry a flag.
        self.flagged.remove(pos);
    }

    /// Chord on an opened numbered cell.
    ///
    /// If the flagged neighbors match the count, every unflagged neighbor is
    /// opened. Otherwise the unresolved closed neighbors are highlighted and
    /// nothing is opened.
    pub fn clear(&mut self, pos: Position) {
        let Symbol::Count(count) = self.symbol(pos) else {
            return;
        };

        let neighbors = self.neighbors(pos);
        let flagged = neighbors
            .iter()
            .filter(|&&n| self.flagged.contains(n))
            .count();

        if flagged == count as usize {
            for n in neighbors {
                if !self.flagged.contains(n) {
                    self.open(n);
                }
            }
        } else {
            self.highlighted.clear();
            for n in neighbors {
                if !self.flagged.contains(n) && !self.opened.contains(n) {
                    self.highlighted.insert(n);
                }
            }
        }
    }

    /// The primary action: chord an opened cell, otherwise open it.
    ///
    /// Starts the clock on first use. A flagged cell is protected from a direct
    /// reveal; unflag it first.
    pub fn reveal_or_clear(&mut self, pos: Position, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }

        if self.opened.contains(pos) {
            self.clear(pos);
        } else if !self.flagged.contains(pos) {
            self.open(pos);
        }
    }

    /// Flag or unflag `pos`. Opened cells cannot be flagged.
    pub fn toggle_flag(&mut self, pos: Position) {
        if !self.contains(pos) || self.opened.contains(pos) {
            return;
        }
        if !self.flagged.remove(pos) {
            self.flagged.insert(pos);
        }
    }

    /// Move the cursor by a single orthogonal step, clamped to the board.
    ///
    /// # Panics
    ///
    /// Panics if `|drow| + |dcol| > 1`.
    pub fn move_cursor(&mut self, drow: i8, dcol: i8) {
        assert!(
            (drow as i16).abs() + (dcol as i16).abs() <= 1,
            "cursor can only move by one cell, got ({}, {})",
            drow,
            dcol
        );

        let row = self.cursor.row as i32 + drow as i32;
        if row >= 0 && row < self.height as i32 {
            self.cursor.row = row as u16;
        }
        let col = self.cursor.col as i32 + dcol as i32;
        if col >= 0 && col < self.width as i32 {
            self.cursor.col = col as u16;
        }
    }

    pub fn step(&mut self, dir: Direction) {
        let (drow, dcol) = dir.delta();
        self.move_cursor(drow, dcol);
    }

    /// Game time: zero before the first reveal, frozen once ended, minus pauses.
    pub fn elapsed(&self, now: Instant) -> Duration {
        let Some(started) = self.started else {
            return Duration::ZERO;
        };
        let end = self.ended.unwrap_or(now);
        end.saturating_duration_since(started)
            .saturating_sub(self.stoppage)
    }

    /// Exclude `duration` from the clock. Only counts while the game is running.
    pub fn add_pause(&mut self, duration: Duration) {
        if self.started.is_some() && self.ended.is_none() {
            self.stoppage += duration;
        }
    }

    pub fn is_lost(&self) -> bool {
        self.mines.iter().any(|m| self.opened.contains(m))
    }

    pub fn is_won(&self) -> bool {
        let safe = (self.width as usize) * (self.height as usize) - self.mine_count as usize;
        !self.is_lost() && self.opened.len() == safe
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_lost() {
            Some(Outcome::Lost)
        } else if self.is_won() {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended.is_some()
    }

    /// Stop the clock if the game is won or lost.
    ///
    /// Returns true only the first time the end is recorded.
    pub fn commit_end(&mut self, now: Instant) -> bool {
        if self.ended.is_some() || self.outcome().is_none() {
            return false;
        }
        self.ended = Some(now);
        true
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted.clear();
    }
}
