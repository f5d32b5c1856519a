use strum_macros::{Display, EnumIter, EnumString};

/// A move of the agent. [`Direction::Stop`] is never generated as a successor
/// action, it is what an agent reports once it has run out of planned moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// The four cardinal moves, in the order successors are generated.
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn to_vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn only_stop_stays_in_place() {
        for direction in Direction::iter() {
            let (dx, dy) = direction.to_vector();
            assert_eq!(dx.abs() + dy.abs(), i32::from(direction != Direction::Stop));
        }
        assert!(!Direction::MOVES.contains(&Direction::Stop));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(Direction::from_str("north").unwrap(), Direction::North);
        assert_eq!(Direction::from_str("West").unwrap(), Direction::West);
        assert!(Direction::from_str("up").is_err());
        assert_eq!(Direction::East.to_string(), "East");
    }
}
