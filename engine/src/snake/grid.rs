use super::types::{GridValue, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<GridValue>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![GridValue::Empty; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Stored value at `pos`, or `None` when `pos` lies off the grid.
    pub fn get(&self, pos: Position) -> Option<GridValue> {
        self.index_of(pos).map(|index| self.cells[index])
    }

    /// Read access for hosts; off-grid coordinates read as `Outside`.
    pub fn cell(&self, row: i32, col: i32) -> GridValue {
        self.get(Position::new(row, col)).unwrap_or(GridValue::Outside)
    }

    pub(crate) fn set(&mut self, pos: Position, value: GridValue) {
        debug_assert!(value != GridValue::Outside, "Outside is never stored");
        if let Some(index) = self.index_of(pos) {
            self.cells[index] = value;
        }
    }

    pub fn count(&self, value: GridValue) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// Every empty cell in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == GridValue::Empty)
            .map(|(index, _)| self.position_of(index))
            .collect()
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[GridValue]> {
        self.cells.chunks(self.cols.max(1))
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.cols) as i32, (index % self.cols) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.count(GridValue::Empty), 12);
    }

    #[test]
    fn test_get_outside_returns_none() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(0, -1)), None);
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get(Position::new(0, 4)), None);
        assert_eq!(grid.get(Position::new(2, 3)), Some(GridValue::Empty));
    }

    #[test]
    fn test_cell_outside_reads_as_outside() {
        let grid = Grid::new(2, 2);
        assert_eq!(grid.cell(5, 5), GridValue::Outside);
        assert_eq!(grid.cell(1, 1), GridValue::Empty);
    }

    #[test]
    fn test_set_and_count() {
        let mut grid = Grid::new(2, 5);
        grid.set(Position::new(0, 1), GridValue::Snake);
        grid.set(Position::new(1, 4), GridValue::Food);
        assert_eq!(grid.get(Position::new(0, 1)), Some(GridValue::Snake));
        assert_eq!(grid.count(GridValue::Snake), 1);
        assert_eq!(grid.count(GridValue::Food), 1);
        assert_eq!(grid.count(GridValue::Empty), 8);
    }

    #[test]
    fn test_set_outside_grid_is_ignored() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(2, 0), GridValue::Snake);
        assert_eq!(grid.count(GridValue::Snake), 0);
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(0, 1), GridValue::Snake);
        assert_eq!(
            grid.empty_positions(),
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_rows_iter() {
        let mut grid = Grid::new(2, 3);
        grid.set(Position::new(1, 2), GridValue::Food);
        let rows: Vec<&[GridValue]> = grid.rows_iter().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], GridValue::Food);
    }
}
