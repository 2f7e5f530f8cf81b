//! Grid module - flat per-cell storage for the board
//!
//! Each board-wide set (mines, opened, flagged, highlighted) is a flat array of
//! bits in row-major order. Coordinates: (row, col), row 0 is the top line.

use arrayvec::ArrayVec;

use crate::types::Position;

/// Up to 8 neighbors of a cell, stack-only.
pub type Neighbors = ArrayVec<Position, 8>;

/// A set of board positions backed by a flat bit array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSet {
    width: u16,
    height: u16,
    cells: Vec<bool>,
    len: usize,
}

impl CellSet {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
            len: 0,
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.height || pos.col >= self.width {
            return None;
        }
        Some((pos.row as usize) * (self.width as usize) + (pos.col as usize))
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Insert a position; returns false if it was already present or out of bounds.
    pub fn insert(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) if !self.cells[i] => {
                self.cells[i] = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Remove a position; returns false if it was not present.
    pub fn remove(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) if self.cells[i] => {
                self.cells[i] = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.len = 0;
    }

    /// Positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(i, _)| Position::new((i / width) as u16, (i % width) as u16))
    }
}

/// In-bounds positions at Chebyshev distance 1 from `pos`.
///
/// Corners have 3 neighbors, edges 5, interior cells 8.
pub fn neighbors(width: u16, height: u16, pos: Position) -> Neighbors {
    let mut out = Neighbors::new();
    for dr in -1i32..=1 {
        for dc in -1i32..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = pos.row as i32 + dr;
            let c = pos.col as i32 + dc;
            if r < 0 || r >= height as i32 || c < 0 || c >= width as i32 {
                continue;
            }
            out.push(Position::new(r as u16, c as u16));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_track_len() {
        let mut set = CellSet::new(4, 3);
        assert!(set.is_empty());

        assert!(set.insert(Position::new(1, 2)));
        assert!(!set.insert(Position::new(1, 2)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Position::new(1, 2)));

        assert!(set.remove(Position::new(1, 2)));
        assert!(!set.remove(Position::new(1, 2)));
        assert!(set.is_empty());
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut set = CellSet::new(4, 3);
        assert!(!set.insert(Position::new(3, 0)));
        assert!(!set.insert(Position::new(0, 4)));
        assert!(!set.contains(Position::new(9, 9)));
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn iter_is_row_major() {
        let mut set = CellSet::new(3, 3);
        set.insert(Position::new(2, 0));
        set.insert(Position::new(0, 2));
        set.insert(Position::new(1, 1));
        let got: Vec<_> = set.iter().collect();
        assert_eq!(
            got,
            vec![Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = CellSet::new(2, 2);
        set.insert(Position::new(0, 0));
        set.insert(Position::new(1, 1));
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn neighbor_counts_by_location() {
        assert_eq!(neighbors(10, 10, Position::new(0, 0)).len(), 3);
        assert_eq!(neighbors(10, 10, Position::new(9, 9)).len(), 3);
        assert_eq!(neighbors(10, 10, Position::new(0, 5)).len(), 5);
        assert_eq!(neighbors(10, 10, Position::new(5, 0)).len(), 5);
        assert_eq!(neighbors(10, 10, Position::new(5, 5)).len(), 8);
    }

    #[test]
    fn neighbors_exclude_self_and_stay_in_bounds() {
        for row in 0..10 {
            for col in 0..10 {
                let pos = Position::new(row, col);
                for n in neighbors(10, 10, pos) {
                    assert_ne!(n, pos);
                    assert!(n.row < 10 && n.col < 10);
                    let dr = (n.row as i32 - row as i32).abs();
                    let dc = (n.col as i32 - col as i32).abs();
                    assert_eq!(dr.max(dc), 1);
                }
            }
        }
    }
}
