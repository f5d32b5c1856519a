use crate::grid::Position;
use std::fmt;

/// A fixed-size two dimensional grid of booleans, used for walls, food and
/// capsules. Cloning a grid copies all of its cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoolGrid {
    width: usize,
    height: usize,
    /// Cells stored column by column, i.e. the cell `(x, y)` lives at index
    /// `x * height + y`.
    cells: Vec<bool>,
}

impl BoolGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        if x < self.width && y < self.height {
            Some(x * self.height + y)
        } else {
            None
        }
    }

    /// Whether the cell is set. Cells outside the grid are never set.
    pub fn get(&self, position: Position) -> bool {
        self.index(position).map_or(false, |i| self.cells[i])
    }

    /// Whether the cell is set or lies outside the grid. This is the query to
    /// use for wall grids.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.index(position).map_or(true, |i| self.cells[i])
    }

    /// Set a cell. Writes outside the grid are ignored.
    pub fn set(&mut self, position: Position, value: bool) {
        if let Some(i) = self.index(position) {
            self.cells[i] = value;
        }
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&cell| cell)
    }

    /// Positions of all set cells, ordered by `x` and then by `y`.
    pub fn as_list(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell)
            .map(|(i, _)| Position::new((i / self.height) as i32, (i % self.height) as i32))
            .collect()
    }

    /// Build a grid of the given size with exactly the listed cells set.
    pub fn from_positions(width: usize, height: usize, positions: &[Position]) -> Self {
        let mut grid = Self::new(width, height);
        for &position in positions {
            grid.set(position, true);
        }
        grid
    }
}

impl fmt::Display for BoolGrid {
    /// Renders the top row first, with `T` for set cells and `F` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            let row: String = (0..self.width)
                .map(|x| {
                    if self.cells[x * self.height + y] {
                        'T'
                    } else {
                        'F'
                    }
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set() {
        let mut grid = BoolGrid::new(3, 2);
        assert!(!grid.get(Position::new(2, 1)));
        grid.set(Position::new(2, 1), true);
        assert!(grid.get(Position::new(2, 1)));
        assert_eq!(grid.count(), 1);
    }

    #[test]
    fn out_of_bounds() {
        let mut grid = BoolGrid::new(2, 2);
        grid.set(Position::new(5, 5), true);
        assert_eq!(grid.count(), 0);
        assert!(!grid.get(Position::new(-1, 0)));
        assert!(grid.is_blocked(Position::new(-1, 0)));
        assert!(grid.is_blocked(Position::new(2, 0)));
        assert!(!grid.is_blocked(Position::new(1, 1)));
    }

    #[test]
    fn as_list_is_column_major() {
        let positions = [
            Position::new(2, 0),
            Position::new(0, 1),
            Position::new(0, 0),
        ];
        let grid = BoolGrid::from_positions(3, 2, &positions);
        assert_eq!(
            grid.as_list(),
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(2, 0)
            ]
        );
    }

    #[test]
    fn clone_is_independent() {
        let original = BoolGrid::from_positions(2, 2, &[Position::new(1, 1)]);
        let mut copy = original.clone();
        copy.set(Position::new(1, 1), false);
        assert!(original.get(Position::new(1, 1)));
        assert!(copy.is_empty());
    }

    #[test]
    fn display_top_row_first() {
        let grid = BoolGrid::from_positions(2, 2, &[Position::new(0, 1)]);
        assert_eq!(grid.to_string(), "TF\nFF\n");
    }
}
