use super::types::{GridCell, Position};

/// Fixed-size rectangular board of cells, row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<GridCell>,
    rows: usize,
    columns: usize,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![GridCell::Empty; rows * columns],
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && (pos.row as usize) < self.rows
            && pos.col >= 0
            && (pos.col as usize) < self.columns
    }

    /// Cell at `pos`, or `GridCell::Outside` when `pos` is off the board.
    pub fn get(&self, pos: Position) -> GridCell {
        if !self.contains(pos) {
            return GridCell::Outside;
        }
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, cell: GridCell) {
        debug_assert!(self.contains(pos), "set out of bounds: {:?}", pos);
        debug_assert!(cell != GridCell::Outside, "Outside is not a storable cell");
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        let mut empty = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.columns {
                let pos = Position::new(row as i32, col as i32);
                if self.cells[self.index(pos)] == GridCell::Empty {
                    empty.push(pos);
                }
            }
        }
        empty
    }

    fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.columns + pos.col as usize
    }
}
