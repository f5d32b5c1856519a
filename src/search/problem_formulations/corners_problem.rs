//! The corners problem: visit all four inner corners of the maze. A state is
//! the agent's position plus the set of corners that still have to be
//! visited, stored as a bit mask over [`CornersProblem::corners`].

use crate::grid::{follow_path, legal_moves, BoolGrid, Direction, Layout, Position};
use crate::search::problem_formulations::{
    Cost, SearchProblem, Successor, Successors, INFEASIBLE_COST,
};
use std::rc::Rc;
use tracing::warn;

const ALL_CORNERS: u8 = 0b1111;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornersState {
    position: Position,
    /// Bit `i` is set iff corner `i` has not been visited yet.
    remaining: u8,
}

impl CornersState {
    pub fn new(position: Position, remaining: u8) -> Self {
        Self {
            position,
            remaining: remaining & ALL_CORNERS,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_remaining(&self, corner_index: usize) -> bool {
        self.remaining & (1 << corner_index) != 0
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.count_ones() as usize
    }

    /// The state after moving to `position`, with the corner at that position
    /// (if any) marked as visited.
    fn moved_to(&self, position: Position, corners: &[Position; 4]) -> Self {
        let visited = corners
            .iter()
            .enumerate()
            .filter(|(_, &corner)| corner == position)
            .fold(0u8, |mask, (i, _)| mask | (1 << i));
        Self::new(position, self.remaining & !visited)
    }
}

#[derive(Debug)]
pub struct CornersProblem {
    walls: Rc<BoolGrid>,
    start: CornersState,
    corners: [Position; 4],
    expanded: usize,
}

impl CornersProblem {
    pub fn new(layout: &Layout) -> Self {
        let corners = layout.corners();
        for corner in corners {
            if !layout.has_food(corner) {
                warn!(%corner, "no food in corner");
            }
        }
        // Starting on a corner counts as having visited it.
        let start =
            CornersState::new(layout.start(), ALL_CORNERS).moved_to(layout.start(), &corners);
        Self {
            walls: layout.walls().clone(),
            start,
            corners,
            expanded: 0,
        }
    }

    pub fn corners(&self) -> &[Position; 4] {
        &self.corners
    }

    pub fn walls(&self) -> &Rc<BoolGrid> {
        &self.walls
    }

    /// Positions of the corners not yet visited in `state`.
    pub fn remaining_corners(&self, state: &CornersState) -> Vec<Position> {
        self.corners
            .iter()
            .enumerate()
            .filter(|(i, _)| state.is_remaining(*i))
            .map(|(_, &corner)| corner)
            .collect()
    }
}

impl SearchProblem for CornersProblem {
    type State = CornersState;
    type Action = Direction;

    fn start_state(&self) -> CornersState {
        self.start
    }

    fn is_goal(&self, state: &CornersState) -> bool {
        state.remaining == 0
    }

    fn successors(&mut self, state: &CornersState) -> Successors<CornersState, Direction> {
        self.expanded += 1;
        legal_moves(&self.walls, state.position)
            .map(|(direction, next)| {
                Successor::new(state.moved_to(next, &self.corners), direction, 1.)
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Cost {
        match follow_path(&self.walls, self.start.position, actions) {
            Some(cells) => cells.len() as Cost,
            None => INFEASIBLE_COST,
        }
    }

    fn expanded(&self) -> usize {
        self.expanded
    }
}
