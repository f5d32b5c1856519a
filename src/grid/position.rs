use crate::grid::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell of the grid. `x` grows to the east and `y` grows to the north.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize, Serialize,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell reached by moving one step in `direction`. No bounds or wall
    /// checks are done here.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.to_vector();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn euclidean(self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
