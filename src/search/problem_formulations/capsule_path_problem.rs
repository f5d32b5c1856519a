//! Point to point search in a maze with capsules. Heuristics for the capsule
//! problems use it as a distance oracle: the cost of reaching a cell depends
//! on which capsules are eaten on the way there.

use crate::grid::{legal_moves, BoolGrid, Direction, Position};
use crate::search::problem_formulations::{
    Cost, SearchProblem, Successor, Successors, INFEASIBLE_COST,
};
use std::rc::Rc;

/// Cost of entering a cell, given whether the step eats a capsule.
pub type CapsuleCostFn = fn(Position, bool) -> Cost;

fn encourage_capsules(_position: Position, eats_capsule: bool) -> Cost {
    if eats_capsule {
        0.
    } else {
        1.
    }
}

fn avoid_capsules(_position: Position, eats_capsule: bool) -> Cost {
    if eats_capsule {
        2.
    } else {
        1.
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapsulePolicy {
    /// Eating a capsule is free.
    Encourage,
    /// Eating a capsule costs two.
    Avoid,
}

impl CapsulePolicy {
    pub fn cost_fn(self) -> CapsuleCostFn {
        match self {
            CapsulePolicy::Encourage => encourage_capsules,
            CapsulePolicy::Avoid => avoid_capsules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapsulePathState {
    position: Position,
    capsules: Rc<BoolGrid>,
}

impl CapsulePathState {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn capsules(&self) -> &BoolGrid {
        &self.capsules
    }

    fn moved_to(&self, position: Position) -> (Self, bool) {
        let mut capsules = self.capsules.clone();
        let eats_capsule = capsules.get(position);
        if eats_capsule {
            Rc::make_mut(&mut capsules).set(position, false);
        }
        (
            Self {
                position,
                capsules,
            },
            eats_capsule,
        )
    }
}

#[derive(Debug)]
pub struct CapsulePathProblem {
    walls: Rc<BoolGrid>,
    start: CapsulePathState,
    goal: Position,
    cost_fn: CapsuleCostFn,
    expanded: usize,
}

impl CapsulePathProblem {
    pub fn new(
        walls: Rc<BoolGrid>,
        capsules: Rc<BoolGrid>,
        start: Position,
        goal: Position,
        policy: CapsulePolicy,
    ) -> Self {
        Self {
            walls,
            start: CapsulePathState {
                position: start,
                capsules,
            },
            goal,
            cost_fn: policy.cost_fn(),
            expanded: 0,
        }
    }

    pub fn goal(&self) -> Position {
        self.goal
    }
}

impl SearchProblem for CapsulePathProblem {
    type State = CapsulePathState;
    type Action = Direction;

    fn start_state(&self) -> CapsulePathState {
        self.start.clone()
    }

    fn is_goal(&self, state: &CapsulePathState) -> bool {
        state.position == self.goal
    }

    fn successors(
        &mut self,
        state: &CapsulePathState,
    ) -> Successors<CapsulePathState, Direction> {
        self.expanded += 1;
        legal_moves(&self.walls, state.position)
            .map(|(direction, next)| {
                let (next_state, eats_capsule) = state.moved_to(next);
                let cost = (self.cost_fn)(next, eats_capsule);
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
            let (next_state, eats_capsule) = state.moved_to(next);
            total += (self.cost_fn)(next, eats_capsule);
            state = next_state;
        }
        total
    }

    fn expanded(&self) -> usize {
        self.expanded
    }
}
