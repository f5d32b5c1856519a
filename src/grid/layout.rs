//! Parsing of maze layouts from text. The format is the classic one: `%` is a
//! wall, `.` is food, `o` is a capsule, `P` is the agent start, `G` is a ghost
//! (ignored by search) and a space is an empty cell. The first line of the
//! text is the top row of the maze.

use crate::grid::{BoolGrid, Position};
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown layout character {character:?} at row {row}, column {column}")]
    UnknownCharacter {
        character: char,
        row: usize,
        column: usize,
    },
    #[error("layout has no agent start position")]
    MissingStart,
    #[error("layout has more than one agent start position")]
    MultipleStarts,
    #[error("failed to read layout file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct Layout {
    walls: Rc<BoolGrid>,
    food: BoolGrid,
    capsules: Vec<Position>,
    start: Position,
}

impl Layout {
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = BoolGrid::new(width, height);
        let mut food = BoolGrid::new(width, height);
        let mut capsules = Vec::new();
        let mut start = None;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            let y = (height - 1 - row) as i32;
            for (column, character) in line.chars().enumerate() {
                let position = Position::new(column as i32, y);
                match character {
                    '%' => walls.set(position, true),
                    '.' => food.set(position, true),
                    'o' => capsules.push(position),
                    'P' => {
                        if start.replace(position).is_some() {
                            return Err(LayoutError::MultipleStarts);
                        }
                    }
                    ' ' | 'G' => {}
                    _ => {
                        return Err(LayoutError::UnknownCharacter {
                            character,
                            row,
                            column,
                        })
                    }
                }
            }
        }

        capsules.sort();
        Ok(Self {
            walls: Rc::new(walls),
            food,
            capsules,
            start: start.ok_or(LayoutError::MissingStart)?,
        })
    }

    pub fn walls(&self) -> &Rc<BoolGrid> {
        &self.walls
    }

    pub fn food(&self) -> &BoolGrid {
        &self.food
    }

    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    /// The capsules as a grid of the same size as the maze.
    pub fn capsule_grid(&self) -> BoolGrid {
        BoolGrid::from_positions(self.width(), self.height(), &self.capsules)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    pub fn has_food(&self, position: Position) -> bool {
        self.food.get(position)
    }

    /// The four inner corners of the maze, in the order bottom-left, top-left,
    /// bottom-right, top-right.
    pub fn corners(&self) -> [Position; 4] {
        let top = self.height() as i32 - 2;
        let right = self.width() as i32 - 2;
        [
            Position::new(1, 1),
            Position::new(1, top),
            Position::new(right, 1),
            Position::new(right, top),
        ]
    }

    /// The same maze with the agent moved and the given food remaining.
    pub fn with_agent(&self, start: Position, food: BoolGrid) -> Self {
        Self {
            walls: self.walls.clone(),
            food,
            capsules: self.capsules.clone(),
            start,
        }
    }
}
