use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;

/// Cost of a single step or of a sequence of steps.
pub type Cost = f64;

/// Cost reported for an action sequence that cannot be executed, e.g. because
/// it walks into a wall. Callers must treat it as a failure signal rather than
/// as a real cost.
pub const INFEASIBLE_COST: Cost = 999_999.0;

/// A successor of a state: the state reached, the action taken to reach it
/// and the (non-negative) cost of that step.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// Grid problems have at most four successors per state, so they fit inline.
pub type Successors<S, A> = SmallVec<[Successor<S, A>; 4]>;

/// The interface between the search engines and a concrete problem. States
/// must be immutable values: everything that influences goal-hood or the cost
/// of future steps has to live in the state.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn start_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerate the successors of `state`. Every call counts as exactly one
    /// expansion, whether or not any successors exist.
    fn successors(&mut self, state: &Self::State) -> Successors<Self::State, Self::Action>;

    /// Replay `actions` from the start state and sum up the step costs. Returns
    /// [`INFEASIBLE_COST`] if any action is illegal.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Cost;

    /// Number of expansions done on this problem so far.
    fn expanded(&self) -> usize;
}
