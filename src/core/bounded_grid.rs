use crate::core::bounds::BoundsOriginRoot;
use crate::core::config::check_dimensions;
use crate::core::{BoardError, Coord, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

/// The lights: `true` is lit.
pub type Grid = BoundedGrid<bool>;

impl<T> BoundedGrid<T> {
    /// Caller guarantees `cells.len() == bounds.area()`.
    pub(crate) fn from_cells(bounds: BoundsOriginRoot, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), bounds.area());
        BoundedGrid { bounds, cells }
    }

    /// Builds a grid from nested rows. Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map(Vec::len).unwrap_or(0);
        check_dimensions(row_count, col_count)?;
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != col_count) {
            return Err(BoardError::InvalidConfiguration(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                col_count
            )));
        }

        let bounds = BoundsOriginRoot::new(row_count, col_count);
        Ok(BoundedGrid::from_cells(bounds, rows.into_iter().flatten().collect()))
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    pub fn contains(&self, pos: &Coord) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Coord) -> Option<&T> {
        self.bounds.index_of(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: &Coord) -> Option<&mut T> {
        self.bounds.index_of(pos).map(|i| &mut self.cells[i])
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn iter_rows(&self) -> std::slice::Chunks<'_, T> {
        self.cells.chunks(self.bounds.cols.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl BoundedGrid<bool> {
    /// Flips the light at `pos`. Returns whether anything changed.
    pub fn flip(&mut self, pos: &Coord) -> bool {
        match self.get_mut(pos) {
            Some(cell) => {
                *cell = !*cell;
                true
            }
            None => false,
        }
    }
}

impl<T> std::ops::Index<&Coord> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Coord) -> &Self::Output {
        match self.bounds.index_of(index) {
            Some(i) => &self.cells[i],
            None => panic!("{:?} is outside a {}x{} grid", index, self.bounds.rows, self.bounds.cols),
        }
    }
}
