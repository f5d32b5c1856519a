//! Find a path to whichever food pellet is closest. The state is the agent's
//! position only; the food grid is fixed for the lifetime of the problem.

use crate::grid::{follow_path, legal_moves, BoolGrid, Direction, Layout, Position};
use crate::search::problem_formulations::{
    Cost, SearchProblem, Successor, Successors, INFEASIBLE_COST,
};
use std::rc::Rc;

#[derive(Debug)]
pub struct AnyFoodProblem {
    walls: Rc<BoolGrid>,
    food: BoolGrid,
    start: Position,
    expanded: usize,
}

impl AnyFoodProblem {
    pub fn new(layout: &Layout) -> Self {
        Self {
            walls: layout.walls().clone(),
            food: layout.food().clone(),
            start: layout.start(),
            expanded: 0,
        }
    }
}

impl SearchProblem for AnyFoodProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        self.food.get(*state)
    }

    fn successors(&mut self, state: &Position) -> Successors<Position, Direction> {
        self.expanded += 1;
        legal_moves(&self.walls, *state)
            .map(|(direction, next)| Successor::new(next, direction, 1.))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Cost {
        match follow_path(&self.walls, self.start, actions) {
            Some(cells) => cells.len() as Cost,
            None => INFEASIBLE_COST,
        }
    }

    fn expanded(&self) -> usize {
        self.expanded
    }
}
