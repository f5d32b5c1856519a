//! The grid world the search problems are defined over: positions, moves,
//! boolean occupancy grids and the text layouts they are parsed from.

mod bool_grid;
mod direction;
mod layout;
mod position;

pub use bool_grid::BoolGrid;
pub use direction::Direction;
pub use layout::{Layout, LayoutError};
pub use position::Position;

/// Iterate over the legal moves out of `position`, in the fixed order given by
/// [`Direction::MOVES`]. A move is legal if it does not enter a wall; cells
/// outside the grid count as walls.
pub fn legal_moves(
    walls: &BoolGrid,
    position: Position,
) -> impl Iterator<Item = (Direction, Position)> + '_ {
    Direction::MOVES.into_iter().filter_map(move |direction| {
        let next = position.step(direction);
        if walls.is_blocked(next) {
            None
        } else {
            Some((direction, next))
        }
    })
}

/// Follow `actions` from `start` and return every cell entered, in order.
/// Returns `None` if an action walks into a wall or is not a move at all.
pub fn follow_path(
    walls: &BoolGrid,
    start: Position,
    actions: &[Direction],
) -> Option<Vec<Position>> {
    let mut position = start;
    let mut cells = Vec::with_capacity(actions.len());
    for &action in actions {
        if action == Direction::Stop {
            return None;
        }
        position = position.step(action);
        if walls.is_blocked(position) {
            return None;
        }
        cells.push(position);
    }
    Some(cells)
}
