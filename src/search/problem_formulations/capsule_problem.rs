//! Capsule search problems: eat every food pellet in a maze that also holds
//! capsules. Entering a capsule cell eats the capsule and changes the cost of
//! that step, so the remaining capsules have to be part of the state.

use crate::grid::{legal_moves, BoolGrid, Direction, Layout, Position};
use crate::search::problem_formulations::{
    unit_cost, CapsulePolicy, Cost, PositionCostFn, SearchProblem, Successor, Successors,
    INFEASIBLE_COST,
};
use crate::search::HeuristicValue;
use std::collections::HashMap;
use std::rc::Rc;

/// Step cost of eating a capsule in the [`CapsuleVariant::Penalty`] variant.
pub const CAPSULE_PENALTY: Cost = 2.;

/// Memoised heuristic values, per capsule pricing and state.
pub type CapsuleEstimates = HashMap<(CapsulePolicy, CapsuleState), HeuristicValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapsuleVariant {
    /// Eating a capsule is free.
    Reward,
    /// Eating a capsule costs [`CAPSULE_PENALTY`].
    Penalty,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapsuleState {
    position: Position,
    food: Rc<BoolGrid>,
    capsules: Rc<BoolGrid>,
}

impl CapsuleState {
    pub fn new(position: Position, food: BoolGrid, capsules: BoolGrid) -> Self {
        Self {
            position,
            food: Rc::new(food),
            capsules: Rc::new(capsules),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn food(&self) -> &BoolGrid {
        &self.food
    }

    pub fn capsules(&self) -> &Rc<BoolGrid> {
        &self.capsules
    }
}

#[derive(Debug)]
pub struct CapsuleProblem {
    walls: Rc<BoolGrid>,
    start: CapsuleState,
    variant: CapsuleVariant,
    /// Cost of entering a cell without a capsule in the reward variant. The
    /// penalty variant always charges one.
    cost_fn: PositionCostFn,
    expanded: usize,
    heuristic_info: CapsuleEstimates,
}

impl CapsuleProblem {
    pub fn new(layout: &Layout, variant: CapsuleVariant) -> Self {
        Self {
            walls: layout.walls().clone(),
            start: CapsuleState::new(
                layout.start(),
                layout.food().clone(),
                layout.capsule_grid(),
            ),
            variant,
            cost_fn: unit_cost,
            expanded: 0,
            heuristic_info: HashMap::new(),
        }
    }

    pub fn with_cost_fn(mut self, cost_fn: PositionCostFn) -> Self {
        self.cost_fn = cost_fn;
        self
    }

    pub fn variant(&self) -> CapsuleVariant {
        self.variant
    }

    pub fn walls(&self) -> &Rc<BoolGrid> {
        &self.walls
    }

    /// Heuristic values memoised per policy and state. Entries stay valid
    /// because states are never mutated once created.
    pub fn heuristic_info(&self) -> &CapsuleEstimates {
        &self.heuristic_info
    }

    pub fn heuristic_info_mut(&mut self) -> &mut CapsuleEstimates {
        &mut self.heuristic_info
    }

    /// Move the agent from `state` into the open cell `next`, eating whatever
    /// is there.
    fn transition(&self, state: &CapsuleState, next: Position) -> (CapsuleState, Cost) {
        let mut food = state.food.clone();
        if food.get(next) {
            Rc::make_mut(&mut food).set(next, false);
        }

        let mut capsules = state.capsules.clone();
        let cost = if capsules.get(next) {
            Rc::make_mut(&mut capsules).set(next, false);
            match self.variant {
                CapsuleVariant::Reward => 0.,
                CapsuleVariant::Penalty => CAPSULE_PENALTY,
            }
        } else {
            match self.variant {
                CapsuleVariant::Reward => (self.cost_fn)(next),
                CapsuleVariant::Penalty => 1.,
            }
        };

        let next_state = CapsuleState {
            position: next,
            food,
            capsules,
        };
        (next_state, cost)
    }
}

impl SearchProblem for CapsuleProblem {
    type State = CapsuleState;
    type Action = Direction;

    fn start_state(&self) -> CapsuleState {
        self.start.clone()
    }

    fn is_goal(&self, state: &CapsuleState) -> bool {
        state.food.is_empty()
    }

    fn successors(&mut self, state: &CapsuleState) -> Successors<CapsuleState, Direction> {
        self.expanded += 1;
        legal_moves(&self.walls, state.position)
            .map(|(direction, next)| {
                let (next_state, cost) = self.transition(state, next);
                Successor::new(next_state, direction, cost)
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Cost {
        let mut state = self.start.clone();
        let mut total = 0.;
        for &action in actions {
            let next = state.position.step(action);
            if action == Direction::Stop || self.walls.is_blocked(next) {
                return INFEASIBLE_COST;
            }
            let (next_state, cost) = self.transition(&state, next);
            total += cost;
            state = next_state;
        }
        total
    }

    fn expanded(&self) -> usize {
        self.expanded
    }
}
