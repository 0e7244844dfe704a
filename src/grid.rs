use std::fmt::Debug;

/// A flat, row-major 2-D container. Every pipeline stage takes its input
/// `Grid` by value and returns a new one, so the previous stage's storage
/// is freed as soon as the stage returns.
#[derive(Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid by calling `fill` for every `(col, row)` in row-major
    /// order.
    pub fn from_fn(width: usize, height: usize, mut fill: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);

        for row in 0..height {
            for col in 0..width {
                cells.push(fill(col, row));
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            width * height,
            "grid storage must hold exactly width * height cells"
        );

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> &T {
        self.check_bounds(col, row);

        &self.cells[row * self.width + col]
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> &mut T {
        self.check_bounds(col, row);

        &mut self.cells[row * self.width + col]
    }

    /// Visits every cell in row-major order. The serializer relies on this
    /// order; the numeric stages only need *some* complete traversal.
    pub fn for_each_cell(&self, mut visit: impl FnMut(usize, usize, &T)) {
        for row in 0..self.height {
            for col in 0..self.width {
                visit(col, row, &self.cells[row * self.width + col]);
            }
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|cell| f(cell)).collect(),
        }
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    fn check_bounds(&self, col: usize, row: usize) {
        assert!(
            col < self.width && row < self.height,
            "grid access ({col}, {row}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
    }
}

impl<T: Debug> Debug for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        for row in 0..self.height {
            writeln!(f, "{:?}", &self.cells[row * self.width..(row + 1) * self.width])?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_fills_row_major() {
        let grid = Grid::from_fn(3, 2, |col, row| (col, row));

        assert_eq!(grid.cells(), &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(*grid.get(2, 1), (2, 1));
    }

    #[test]
    fn for_each_cell_visits_row_major() {
        let grid = Grid::from_fn(2, 2, |col, row| row * 2 + col);
        let mut seen = Vec::new();

        grid.for_each_cell(|col, row, value| seen.push((col, row, *value)));

        assert_eq!(seen, vec![(0, 0, 0), (1, 0, 1), (0, 1, 2), (1, 1, 3)]);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut grid = Grid::from_fn(2, 2, |_, _| 0u8);
        *grid.get_mut(1, 1) = 9;

        assert_eq!(*grid.get(1, 1), 9);
        assert_eq!(*grid.get(0, 1), 0);
    }

    #[test]
    fn map_preserves_dimensions() {
        let grid = Grid::from_fn(4, 3, |col, _| col);
        let doubled = grid.map(|value| value * 2);

        assert_eq!(doubled.width(), 4);
        assert_eq!(doubled.height(), 3);
        assert_eq!(*doubled.get(3, 2), 6);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_access_panics() {
        let grid = Grid::from_fn(2, 2, |_, _| 0u8);
        grid.get(2, 0);
    }
}
