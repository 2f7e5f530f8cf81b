//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the minefield rules and state management.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same mine layout
//! - **Testable**: Every rule is a plain method on [`MineField`]
//! - **Clock-agnostic**: Time-dependent operations take `now` from the caller
//!
//! # Module Structure
//!
//! - [`grid`]: flat per-cell sets and neighbor enumeration
//! - [`field`]: the mine field (reveal, chord, flags, cursor, clock, outcome)
//! - [`rng`]: seeded LCG used for mine placement
//!
//! # Game Rules
//!
//! - **Reveal**: opening a cell with no adjacent mines cascades through the
//!   connected zero region and its numbered border
//! - **Chord**: on an opened number, if the adjacent flags match the number, all
//!   other neighbors are opened; otherwise the unresolved neighbors are highlighted
//! - **Loss**: any opened mine
//! - **Win**: every safe cell opened without a loss
//! - **Clock**: starts on the first reveal, excludes pauses, stops when the end
//!   is committed
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use sweeper_core::MineField;
//! use sweeper_types::{Position, Symbol};
//!
//! // 3x3 board with a single mine in the corner.
//! let mut field = MineField::with_mines(3, 3, [Position::new(0, 0)]).unwrap();
//!
//! // Revealing the far corner cascades across the zero region.
//! field.reveal_or_clear(Position::new(2, 2), Instant::now());
//! assert_eq!(field.symbol(Position::new(1, 1)), Symbol::Count(1));
//! assert!(field.is_won());
//! ```

pub mod field;
pub mod grid;
pub mod rng;

pub use sweeper_types as types;

// Re-export commonly used types for convenience
pub use field::{FieldError, MineField, Outcome};
pub use grid::{neighbors, CellSet, Neighbors};
pub use rng::SimpleRng;
