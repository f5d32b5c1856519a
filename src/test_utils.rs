use crate::grid::Direction;
use crate::search::problem_formulations::{
    Cost, SearchProblem, Successor, Successors, INFEASIBLE_COST,
};
use crate::search::{Heuristic, HeuristicValue};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet, VecDeque};

/// Two open cells, the agent on the left and a single food on the right.
pub const TINY_CORRIDOR_LAYOUT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/tiny_corridor.lay"
));

/// A 3x3 room with food in the four corners and the agent in the middle.
pub const SMALL_CORNERS_LAYOUT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/small_corners.lay"
));

/// A corridor with a capsule two steps from the agent and a food four steps
/// from it.
pub const CAPSULE_CORRIDOR_LAYOUT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/capsule_corridor.lay"
));

/// A 12x12 maze with food in the four corners and walls between them.
pub const MEDIUM_CORNERS_LAYOUT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/medium_corners.lay"
));

pub const MEDIUM_CORNERS_OPTIMAL_COST: Cost = 38.;

/// Two food pellets reachable either along the top corridor or through a
/// capsule on the bottom one. Both routes cost the same in the reward variant.
pub const CAPSULE_DETOUR_LAYOUT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/capsule_detour.lay"
));

pub const CAPSULE_DETOUR_OPTIMAL_COST: Cost = 10.;

pub const TINY_MAZE_LAYOUT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/tiny_maze.lay"
));

/// The only shortest plan from the start of [`TINY_MAZE_LAYOUT`] to its food.
pub const TINY_MAZE_SOLUTION: [Direction; 8] = [
    Direction::South,
    Direction::South,
    Direction::West,
    Direction::South,
    Direction::West,
    Direction::West,
    Direction::South,
    Direction::West,
];

/// A ring of open cells with three food pellets.
pub const FOOD_LAYOUT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/food.lay"
));

pub const FOOD_OPTIMAL_COST: Cost = 7.;

/// Two corridors joined at both ends, each with a capsule and a food.
pub const CAPSULE_MAZE_LAYOUT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/capsule_maze.lay"
));

const EPSILON: f64 = 1e-9;

/// Edges of [`GraphProblem`] as (from, action, to, cost), in successor order.
const GRAPH_EDGES: [(&str, &str, &str, Cost); 6] = [
    ("A", "A->D", "D", 4.),
    ("A", "A->C", "C", 2.),
    ("A", "A->B", "B", 1.),
    ("B", "B->D", "D", 1.),
    ("C", "C->G", "G", 4.),
    ("D", "D->G", "G", 2.),
];

pub const GRAPH_OPTIMAL_COST: Cost = 4.;

/// A small explicit graph with non-unit step costs, from `A` to `G`. The
/// cheapest plan goes through `B` and `D`; the plans with fewest steps do
/// not.
#[derive(Debug, Default)]
pub struct GraphProblem {
    expanded: usize,
}

impl GraphProblem {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchProblem for GraphProblem {
    type State = &'static str;
    type Action = &'static str;

    fn start_state(&self) -> &'static str {
        "A"
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        *state == "G"
    }

    fn successors(&mut self, state: &&'static str) -> Successors<&'static str, &'static str> {
        self.expanded += 1;
        GRAPH_EDGES
            .iter()
            .filter(|(from, ..)| from == state)
            .map(|&(_, action, to, cost)| Successor::new(to, action, cost))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[&'static str]) -> Cost {
        let mut state = self.start_state();
        let mut total = 0.;
        for action in actions {
            match GRAPH_EDGES
                .iter()
                .find(|(from, label, ..)| *from == state && label == action)
            {
                Some(&(_, _, to, cost)) => {
                    state = to;
                    total += cost;
                }
                None => return INFEASIBLE_COST,
            }
        }
        total
    }

    fn expanded(&self) -> usize {
        self.expanded
    }
}

/// Table heuristic for [`GraphProblem`].
#[derive(Debug)]
pub struct GraphHeuristic {
    values: HashMap<&'static str, f64>,
}

impl GraphHeuristic {
    /// Admissible and consistent.
    pub fn new() -> Self {
        Self {
            values: HashMap::from([("A", 3.), ("B", 3.), ("C", 2.), ("D", 2.), ("G", 0.)]),
        }
    }

    /// Admissible but not consistent: `B` looks expensive, so A* expands `D`
    /// through the direct edge before finding the cheaper path via `B`.
    pub fn inconsistent() -> Self {
        Self {
            values: HashMap::from([("A", 0.), ("B", 3.), ("C", 0.), ("D", 0.), ("G", 0.)]),
        }
    }
}

impl Heuristic<GraphProblem> for GraphHeuristic {
    fn evaluate(&mut self, state: &&'static str, _problem: &mut GraphProblem) -> HeuristicValue {
        self.values.get(state).copied().unwrap_or(0.).into()
    }
}

/// Check a heuristic on every state reachable in the problem built by
/// `make_problem`: it must be non-negative, zero on goals, never above the
/// true cost to the nearest goal, and drop by at most the step cost along any
/// transition. True costs come from a uniform cost search backwards from all
/// goals over the explicitly enumerated state space.
pub fn check_heuristic_contract<P, H>(make_problem: impl Fn() -> P, heuristic: &mut H)
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    let mut explorer = make_problem();
    let start = explorer.start_state();
    let mut edges: HashMap<P::State, Vec<(P::State, Cost)>> = HashMap::new();
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start]);
    while let Some(state) = queue.pop_front() {
        let successors: Vec<(P::State, Cost)> = explorer
            .successors(&state)
            .into_iter()
            .map(|successor| (successor.state, successor.cost))
            .collect();
        for (next, _) in &successors {
            if seen.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
        edges.insert(state, successors);
    }

    let mut predecessors: HashMap<P::State, Vec<(P::State, Cost)>> = HashMap::new();
    for (from, successors) in &edges {
        for (to, cost) in successors {
            predecessors
                .entry(to.clone())
                .or_default()
                .push((from.clone(), *cost));
        }
    }
    let mut true_cost: HashMap<P::State, HeuristicValue> = HashMap::new();
    let mut frontier = PriorityQueue::new();
    for state in edges.keys().filter(|state| explorer.is_goal(state)) {
        frontier.push(state.clone(), Reverse(HeuristicValue::from(0.)));
    }
    while let Some((state, Reverse(cost))) = frontier.pop() {
        for (previous, step_cost) in predecessors.get(&state).into_iter().flatten() {
            if !true_cost.contains_key(previous) {
                frontier.push_increase(
                    previous.clone(),
                    Reverse(cost + HeuristicValue::from(*step_cost)),
                );
            }
        }
        true_cost.insert(state, cost);
    }

    let mut problem = make_problem();
    for (state, successors) in &edges {
        let h = heuristic.evaluate(state, &mut problem).into_inner();
        assert!(h >= 0., "negative estimate {} for {:?}", h, state);
        if problem.is_goal(state) {
            assert_eq!(h, 0., "non-zero estimate for goal {:?}", state);
        }
        if let Some(cost) = true_cost.get(state) {
            assert!(
                h <= cost.into_inner() + EPSILON,
                "estimate {} above true cost {} for {:?}",
                h,
                cost,
                state
            );
        }
        if !h.is_finite() {
            continue;
        }
        for (next, step_cost) in successors {
            let next_h = heuristic.evaluate(next, &mut problem).into_inner();
            assert!(
                h - next_h <= step_cost + EPSILON,
                "estimate drops from {} to {} over a step of cost {} from {:?}",
                h,
                next_h,
                step_cost,
                state
            );
        }
    }
}
