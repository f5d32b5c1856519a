//! The food search problem: eat every food pellet in the maze. A state is the
//! agent's position together with the grid of food that is left.

use crate::grid::{follow_path, legal_moves, BoolGrid, Direction, Layout, Position};
use crate::search::heuristics::maze_distance;
use crate::search::problem_formulations::{
    Cost, SearchProblem, Successor, Successors, INFEASIBLE_COST,
};
use std::collections::HashMap;
use std::rc::Rc;

/// The food grid is shared between states until a transition eats a pellet,
/// at which point the eating state gets its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodState {
    position: Position,
    food: Rc<BoolGrid>,
}

impl FoodState {
    pub fn new(position: Position, food: BoolGrid) -> Self {
        Self {
            position,
            food: Rc::new(food),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn food(&self) -> &BoolGrid {
        &self.food
    }

    fn moved_to(&self, position: Position) -> Self {
        let mut food = self.food.clone();
        if food.get(position) {
            Rc::make_mut(&mut food).set(position, false);
        }
        Self { position, food }
    }
}

#[derive(Debug)]
pub struct FoodProblem {
    walls: Rc<BoolGrid>,
    start: FoodState,
    expanded: usize,
    /// Maze distances computed so far, keyed by (from, to). `None` marks an
    /// unreachable pair.
    distance_cache: HashMap<(Position, Position), Option<usize>>,
}

impl FoodProblem {
    pub fn new(layout: &Layout) -> Self {
        Self {
            walls: layout.walls().clone(),
            start: FoodState::new(layout.start(), layout.food().clone()),
            expanded: 0,
            distance_cache: HashMap::new(),
        }
    }

    pub fn walls(&self) -> &Rc<BoolGrid> {
        &self.walls
    }

    /// The length of the shortest path between two open cells, memoised for
    /// the lifetime of this problem.
    pub fn maze_distance(&mut self, from: Position, to: Position) -> Option<usize> {
        if let Some(&distance) = self.distance_cache.get(&(from, to)) {
            return distance;
        }
        let distance = maze_distance(&self.walls, from, to);
        self.distance_cache.insert((from, to), distance);
        self.distance_cache.insert((to, from), distance);
        distance
    }
}

impl SearchProblem for FoodProblem {
    type State = FoodState;
    type Action = Direction;

    fn start_state(&self) -> FoodState {
        self.start.clone()
    }

    fn is_goal(&self, state: &FoodState) -> bool {
        state.food.is_empty()
    }

    fn successors(&mut self, state: &FoodState) -> Successors<FoodState, Direction> {
        self.expanded += 1;
        legal_moves(&self.walls, state.position)
            .map(|(direction, next)| Successor::new(state.moved_to(next), direction, 1.))
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
