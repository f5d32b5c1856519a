//! The position search problem: find a path from the start cell to a single
//! goal cell. The state is just the agent's position.

use crate::grid::{follow_path, legal_moves, BoolGrid, Direction, Layout, Position};
use crate::search::problem_formulations::{
    Cost, SearchProblem, Successor, Successors, INFEASIBLE_COST,
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::warn;

/// Cost of entering a cell.
pub type PositionCostFn = fn(Position) -> Cost;

pub fn unit_cost(_position: Position) -> Cost {
    1.
}

/// Entering cells on the west side is expensive, so optimal paths hug the
/// east side of the maze.
pub fn stay_east_cost(position: Position) -> Cost {
    0.5_f64.powi(position.x)
}

/// Entering cells on the east side is expensive, so optimal paths hug the
/// west side of the maze.
pub fn stay_west_cost(position: Position) -> Cost {
    2_f64.powi(position.x)
}

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CostFunctionName {
    #[default]
    #[clap(help = "Every step costs one.")]
    Unit,
    #[clap(help = "Steps cost 0.5^x, favouring the east side.")]
    StayEast,
    #[clap(help = "Steps cost 2^x, favouring the west side.")]
    StayWest,
}

impl CostFunctionName {
    pub fn cost_fn(&self) -> PositionCostFn {
        match self {
            CostFunctionName::Unit => unit_cost,
            CostFunctionName::StayEast => stay_east_cost,
            CostFunctionName::StayWest => stay_west_cost,
        }
    }
}

#[derive(Debug)]
pub struct PositionProblem {
    walls: Rc<BoolGrid>,
    start: Position,
    goal: Position,
    cost_fn: PositionCostFn,
    expanded: usize,
}

impl PositionProblem {
    /// A problem on the given layout, starting at the layout's start. Warns if
    /// the layout does not look like a regular single-goal maze.
    pub fn new(layout: &Layout, goal: Position) -> Self {
        if layout.food().count() != 1 || !layout.has_food(goal) {
            warn!(%goal, "this does not look like a regular search maze");
        }
        Self::from_walls(layout.walls().clone(), layout.start(), goal)
    }

    pub fn from_walls(walls: Rc<BoolGrid>, start: Position, goal: Position) -> Self {
        Self {
            walls,
            start,
            goal,
            cost_fn: unit_cost,
            expanded: 0,
        }
    }

    pub fn with_cost_fn(mut self, cost_fn: PositionCostFn) -> Self {
        self.cost_fn = cost_fn;
        self
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn walls(&self) -> &Rc<BoolGrid> {
        &self.walls
    }
}

impl SearchProblem for PositionProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&mut self, state: &Position) -> Successors<Position, Direction> {
        self.expanded += 1;
        legal_moves(&self.walls, *state)
            .map(|(direction, next)| Successor::new(next, direction, (self.cost_fn)(next)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Cost {
        match follow_path(&self.walls, self.start, actions) {
            Some(cells) => cells.into_iter().map(self.cost_fn).sum(),
            None => INFEASIBLE_COST,
        }
    }

    fn expanded(&self) -> usize {
        self.expanded
    }
}
