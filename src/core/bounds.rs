use crate::core::Coord;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundsOriginRoot {
    pub rows: usize,
    pub cols: usize,
}

impl BoundsOriginRoot {
    pub fn new(rows: usize, cols: usize) -> BoundsOriginRoot {
        BoundsOriginRoot { rows, cols }
    }

    pub fn contains(&self, pos: &Coord) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major offset of `pos`, or `None` when it falls outside.
    pub fn index_of(&self, pos: &Coord) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row as usize * self.cols + pos.col as usize)
    }

    pub fn clamp(&self, pos: Coord) -> Coord {
        let max_row = self.rows.saturating_sub(1).min(i32::MAX as usize) as i32;
        let max_col = self.cols.saturating_sub(1).min(i32::MAX as usize) as i32;
        Coord {
            row: pos.row.clamp(0, max_row),
            col: pos.col.clamp(0, max_col),
        }
    }
}
